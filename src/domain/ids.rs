//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for collection and icon
//! identifiers. Each type ensures type safety and rejects empty values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Collection identifier newtype wrapper
///
/// Represents an Iconify collection prefix such as `mdi` or `devicon`.
///
/// # Examples
///
/// ```
/// use iconforge::domain::ids::CollectionId;
/// use std::str::FromStr;
///
/// let collection = CollectionId::from_str("mdi").unwrap();
/// assert_eq!(collection.as_str(), "mdi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionId(String);

impl CollectionId {
    /// Creates a new CollectionId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Collection ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the collection ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CollectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CollectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Icon name newtype wrapper
///
/// Represents the name of an icon within a collection, e.g. `home` or
/// `arrow-left`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconName(String);

impl IconName {
    /// Creates a new IconName from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Icon name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Returns the icon name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IconName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for IconName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
