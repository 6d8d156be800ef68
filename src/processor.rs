use crate::decoder::MetadataDecoder;
use crate::error::AppError;
use crate::extractor::{self, GpsReadings};
use crate::metadata::{ImageRecord, NOT_AVAILABLE};
use std::fs;
use std::path::Path;

/// Reads one image and turns its GPS tags into a report row.
pub fn build_record<D: MetadataDecoder>(decoder: &D, path: &Path) -> Result<ImageRecord, AppError> {
    let file_path = path.display().to_string();

    log::trace!("Reading image: {}", file_path);
    let bytes = fs::read(path).map_err(|source| AppError::FileRead {
        path: file_path.clone(),
        source,
    })?;

    log::trace!("Extracting EXIF data for image: {}", file_path);
    let container = decoder
        .decode(&bytes)
        .map_err(|e| AppError::from_decode(&file_path, e))?;
    let tags = decoder
        .flatten(&container)
        .map_err(|e| AppError::from_decode(&file_path, e))?;

    let GpsReadings {
        latitude_ref,
        latitude,
        longitude_ref,
        longitude,
    } = extractor::extract(&tags);

    let latitude = compose(&latitude, &latitude_ref);
    let longitude = compose(&longitude, &longitude_ref);
    log::debug!("GPS for {}: {} / {}", file_path, latitude, longitude);

    Ok(ImageRecord::new(file_path, latitude, longitude))
}

/// Value followed by its hemisphere, or the sentinel when both are missing.
fn compose(value: &str, direction: &str) -> String {
    if value.is_empty() && direction.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{}{}", value, direction)
    }
}
