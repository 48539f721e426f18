//! Path Costs
//!
//! A [`Cost`] is either a finite integer or "unreachable" (+∞). The derived
//! ordering puts every finite cost below `Unreachable`, which is what the
//! engine's argmin and strict-improvement checks need.
//!
//! Link weights fit in an `i64`, so path sums are kept as `u128`: a path
//! would need more than 2^64 links before the total could overflow.

use std::fmt;

use serde::{Serialize, Serializer};

/// The best known cost from the origin to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cost {
    /// A known path of this total weight exists.
    Finite(u128),
    /// No path is known.
    Unreachable,
}

impl Cost {
    /// Whether a path is known.
    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// The finite value, if any.
    pub fn value(&self) -> Option<u128> {
        match self {
            Cost::Finite(value) => Some(*value),
            Cost::Unreachable => None,
        }
    }

    /// The cost of extending this path by one edge of `weight`.
    ///
    /// Unreachable stays unreachable.
    pub fn extend(self, weight: u64) -> Cost {
        match self {
            Cost::Finite(value) => Cost::Finite(value.saturating_add(u128::from(weight))),
            Cost::Unreachable => Cost::Unreachable,
        }
    }
}

impl From<Option<u128>> for Cost {
    fn from(value: Option<u128>) -> Self {
        value.map_or(Cost::Unreachable, Cost::Finite)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(value) => write!(f, "{value}"),
            Cost::Unreachable => f.write_str("\u{221e}"),
        }
    }
}

/// Finite costs serialize as integers, `Unreachable` as `null`.
impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cost::Finite(value) => serializer.serialize_u128(*value),
            Cost::Unreachable => serializer.serialize_none(),
        }
    }
}
