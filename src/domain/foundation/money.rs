//! Rupee amounts with Indian digit grouping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A whole-rupee amount.
///
/// Totals stay plain integers; grouping (`₹1,20,000`) happens only when
/// the amount is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(u64);

impl Rupees {
    pub const ZERO: Self = Self(0);

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Multiplies by a count, saturating instead of overflowing.
    pub fn times(&self, factor: u64) -> Self {
        Self(self.0.saturating_mul(factor))
    }

    /// Formats the amount with Indian grouping but without the currency sign.
    ///
    /// The last three digits form one group; every group above that has two.
    pub fn grouped(&self) -> String {
        let digits = self.0.to_string();
        if digits.len() <= 3 {
            return digits;
        }

        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();

        format!("{},{}", groups.join(","), tail)
    }
}

impl Add for Rupees {
    type Output = Rupees;

    fn add(self, rhs: Rupees) -> Rupees {
        Rupees(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Rupees>>(iter: I) -> Self {
        iter.fold(Rupees::ZERO, Add::add)
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.grouped())
    }
}
