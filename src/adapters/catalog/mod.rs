//! Provider catalog adapters.

mod static_reader;

pub use static_reader::StaticProviderReader;
