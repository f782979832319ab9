//! Rating value object for provider reviews (0.0 to 5.0 stars).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Average review rating between 0.0 and 5.0, held in tenths of a star.
///
/// Tenths keep the value totally ordered, which the search ordering
/// relies on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(u8);

impl Rating {
    /// Highest possible rating.
    pub const MAX: Self = Self(50);

    /// Creates a Rating from a star value, rounding to one decimal place.
    ///
    /// Values that round to the same tenth (4.84 and 4.8) become equal
    /// ratings, so the listing sort leaves them in store order.
    pub fn try_new(stars: f64) -> Result<Self, ValidationError> {
        if !stars.is_finite() || !(0.0..=5.0).contains(&stars) {
            return Err(ValidationError::invalid_format(
                "rating",
                format!("{} is outside 0.0..=5.0", stars),
            ));
        }
        Ok(Self((stars * 10.0).round() as u8))
    }

    /// Creates a Rating from tenths of a star, clamping to 50.
    pub const fn from_tenths(tenths: u8) -> Self {
        if tenths > 50 {
            Self(50)
        } else {
            Self(tenths)
        }
    }

    /// Returns the star value.
    pub fn stars(&self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Returns the rating in tenths of a star.
    pub fn tenths(&self) -> u8 {
        self.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.stars()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_accepts_values_in_range() {
        assert_eq!(Rating::try_new(0.0).unwrap().tenths(), 0);
        assert_eq!(Rating::try_new(4.8).unwrap().tenths(), 48);
        assert_eq!(Rating::try_new(5.0).unwrap(), Rating::MAX);
    }

    #[test]
    fn rating_rejects_values_out_of_range() {
        assert!(Rating::try_new(-0.1).is_err());
        assert!(Rating::try_new(5.1).is_err());
        assert!(Rating::try_new(f64::NAN).is_err());
    }

    #[test]
    fn rating_rounds_to_one_decimal() {
        assert_eq!(Rating::try_new(4.74).unwrap().tenths(), 47);
        assert_eq!(Rating::try_new(4.76).unwrap().tenths(), 48);
    }

    #[test]
    fn ratings_within_a_twentieth_compare_equal() {
        assert_eq!(Rating::try_new(4.84).unwrap(), Rating::try_new(4.8).unwrap());
        assert!(Rating::try_new(4.86).unwrap() > Rating::try_new(4.8).unwrap());
    }

    #[test]
    fn rating_from_tenths_clamps() {
        assert_eq!(Rating::from_tenths(99), Rating::MAX);
        assert_eq!(Rating::from_tenths(45).stars(), 4.5);
    }

    #[test]
    fn rating_displays_one_decimal() {
        assert_eq!(Rating::from_tenths(48).to_string(), "4.8");
        assert_eq!(Rating::from_tenths(50).to_string(), "5.0");
        assert_eq!(Rating::from_tenths(3).to_string(), "0.3");
    }

    #[test]
    fn rating_ordering_follows_stars() {
        assert!(Rating::from_tenths(49) > Rating::from_tenths(45));
    }

    #[test]
    fn rating_serializes_as_number() {
        let json = serde_json::to_string(&Rating::from_tenths(47)).unwrap();
        assert_eq!(json, "4.7");
        let back: Rating = serde_json::from_str("4.7").unwrap();
        assert_eq!(back.tenths(), 47);
    }
}
