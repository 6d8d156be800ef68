// src/metadata.rs

use crate::coordinate::Rational;

/// Placeholder written wherever no coordinate could be extracted.
pub const NOT_AVAILABLE: &str = "Not available";

/// Value of a decoded metadata tag, reduced to the shapes the GPS extraction consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Text(String),
    Rationals(Vec<Rational>),
    Other,
}

/// One tag from the flattened metadata of an image.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatTag {
    pub name: String,
    pub value: TagValue,
}

impl FlatTag {
    pub fn new(name: impl Into<String>, value: TagValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Report row for a single image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    file_path: String,
    latitude: String,
    longitude: String,
}

impl ImageRecord {
    /// Empty coordinates are replaced by [`NOT_AVAILABLE`].
    pub fn new(file_path: String, latitude: String, longitude: String) -> Self {
        Self {
            file_path,
            latitude: or_not_available(latitude),
            longitude: or_not_available(longitude),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    pub fn longitude(&self) -> &str {
        &self.longitude
    }
}

fn or_not_available(value: String) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value
    }
}

/// Records in directory-walk order.
pub type RecordCollection = Vec<ImageRecord>;
