//! INVALSER - valet and security provider marketplace
//!
//! This crate holds the provider search and booking core: location-aware
//! provider matching, the four-step booking form, price estimates, and the
//! WhatsApp and email handoff links, served over a small JSON API.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
