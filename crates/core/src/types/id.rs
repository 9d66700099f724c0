//! Newtype IDs for type-safe entity references.
//!
//! Catalog products carry opaque string identifiers (`p1`, `p2`, ...), and
//! orders carry generated identifiers of the form `ORD-` followed by seven
//! uppercase base-36 characters. Wrapping both in newtypes prevents mixing
//! them up in handler signatures.

use core::fmt;

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
///
/// Product IDs are opaque strings owned by the catalog source; the cart and
/// checkout flows only ever compare them for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product ID from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Errors that can occur when parsing an [`OrderId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderIdError {
    /// The input does not start with the `ORD-` prefix.
    #[error("order id must start with {}", OrderId::PREFIX)]
    MissingPrefix,
    /// The suffix is not exactly seven characters long.
    #[error("order id suffix must be exactly {expected} characters")]
    BadLength {
        /// Required suffix length.
        expected: usize,
    },
    /// The suffix contains a character outside `0-9A-Z`.
    #[error("order id suffix must contain only digits and uppercase letters")]
    InvalidCharacter,
}

/// Identifier of a placed order: `ORD-` plus seven uppercase base-36 chars.
///
/// Order IDs are generated fresh for every valid submission. They are NOT
/// guaranteed unique and are never stored anywhere - this is a documented
/// simulation shortcut of the demo backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

/// Alphabet for generated order-id suffixes.
const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

impl OrderId {
    /// Prefix shared by all order identifiers.
    pub const PREFIX: &'static str = "ORD-";
    /// Length of the random suffix.
    pub const SUFFIX_LEN: usize = 7;

    /// Generate a fresh random order ID.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let suffix: String = (0..Self::SUFFIX_LEN)
            .map(|_| char::from(BASE36.choose(&mut rng).copied().unwrap_or(b'0')))
            .collect();
        Self(format!("{}{suffix}", Self::PREFIX))
    }

    /// Parse an order ID, accepting only well-formed values.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is missing, the suffix has the wrong
    /// length, or the suffix contains a character outside `0-9A-Z`.
    pub fn parse(s: &str) -> Result<Self, OrderIdError> {
        let suffix = s
            .strip_prefix(Self::PREFIX)
            .ok_or(OrderIdError::MissingPrefix)?;

        if suffix.len() != Self::SUFFIX_LEN {
            return Err(OrderIdError::BadLength {
                expected: Self::SUFFIX_LEN,
            });
        }

        if !suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        {
            return Err(OrderIdError::InvalidCharacter);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrderId {
    type Err = OrderIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
