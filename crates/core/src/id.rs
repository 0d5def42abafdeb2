//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are caller-supplied integers (catalog data, order intake), so
//! they wrap `i64` rather than generating values of their own.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

/// Identifier of a customer order. May repeat across submissions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

macro_rules! impl_int_newtype {
    ($t:ty) => {
        impl $t {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_int_newtype!(ProductId);
impl_int_newtype!(OrderId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_integers() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");

        let order: OrderId = serde_json::from_str("123").unwrap();
        assert_eq!(order, OrderId::new(123));
    }

    #[test]
    fn ids_round_trip_through_i64_and_display() {
        let id = OrderId::from(-5);
        assert_eq!(i64::from(id), -5);
        assert_eq!(id.to_string(), "-5");
        assert!(ProductId::new(1) < ProductId::new(2));
    }
}
