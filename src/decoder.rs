use crate::coordinate::Rational;
use crate::metadata::{FlatTag, TagValue};
use exif::{Exif, Reader, Value};
use std::fmt;
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("no metadata container present")]
    NoContainer,

    #[error("malformed metadata container: {0}")]
    Malformed(exif::Error),

    #[error("{0}")]
    Flatten(String),
}

/// Locates and decodes the metadata container embedded in raw image bytes.
pub trait MetadataDecoder {
    type Container;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Container, DecodeError>;

    /// Every tag discoverable in the container, across all of its directories.
    fn flatten(&self, container: &Self::Container) -> Result<Vec<FlatTag>, DecodeError>;
}

/// kamadak-exif's message for bytes that match none of the container formats it knows.
const UNKNOWN_FORMAT: &str = "Unknown image format";

/// Decoded EXIF plus the errors the non-strict reader recovered from.
pub struct ExifContainer {
    exif: Exif,
    recovered: Vec<exif::Error>,
}

impl fmt::Debug for ExifContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExifContainer")
            .field("fields", &self.exif.fields().count())
            .field("recovered", &self.recovered)
            .finish()
    }
}

/// [`MetadataDecoder`] backed by kamadak-exif.
///
/// The reader runs with `continue_on_error`, so broken vendor directories do not
/// hide the GPS directory that sits next to them.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExifDecoder;

impl MetadataDecoder for ExifDecoder {
    type Container = ExifContainer;

    fn decode(&self, bytes: &[u8]) -> Result<ExifContainer, DecodeError> {
        let mut cursor = Cursor::new(bytes);
        let mut recovered = Vec::new();

        let result = Reader::new()
            .continue_on_error(true)
            .read_from_container(&mut cursor)
            .or_else(|e| e.distill_partial_result(|errors| recovered = errors));

        match result {
            Ok(exif) => Ok(ExifContainer { exif, recovered }),
            Err(exif::Error::NotFound(_)) => Err(DecodeError::NoContainer),
            Err(exif::Error::InvalidFormat(UNKNOWN_FORMAT)) => Err(DecodeError::NoContainer),
            Err(e) => Err(DecodeError::Malformed(e)),
        }
    }

    fn flatten(&self, container: &ExifContainer) -> Result<Vec<FlatTag>, DecodeError> {
        for e in &container.recovered {
            log::debug!("Recovered from EXIF error: {}", e);
        }

        let tags: Vec<FlatTag> = container
            .exif
            .fields()
            .map(|field| FlatTag::new(field.tag.to_string(), tag_value(&field.value)))
            .collect();

        if tags.is_empty() {
            if let Some(first) = container.recovered.first() {
                return Err(DecodeError::Flatten(format!(
                    "no tags could be recovered ({} errors, first: {})",
                    container.recovered.len(),
                    first
                )));
            }
        }

        log::trace!("Flattened {} EXIF tags", tags.len());
        Ok(tags)
    }
}

fn tag_value(value: &Value) -> TagValue {
    match value {
        Value::Ascii(parts) => parts
            .first()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .map(|s| TagValue::Text(s.to_string()))
            .unwrap_or(TagValue::Other),
        Value::Rational(rationals) => TagValue::Rationals(
            rationals
                .iter()
                .map(|r| Rational::new(r.num, r.denom))
                .collect(),
        ),
        _ => TagValue::Other,
    }
}
