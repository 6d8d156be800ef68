use crate::coordinate::{format_coordinate, RationalTriplet};
use crate::metadata::{FlatTag, TagValue};

pub const GPS_LATITUDE_REF: &str = "GPSLatitudeRef";
pub const GPS_LATITUDE: &str = "GPSLatitude";
pub const GPS_LONGITUDE_REF: &str = "GPSLongitudeRef";
pub const GPS_LONGITUDE: &str = "GPSLongitude";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GpsTag {
    LatitudeRef,
    Latitude,
    LongitudeRef,
    Longitude,
}

impl GpsTag {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            GPS_LATITUDE_REF => Some(Self::LatitudeRef),
            GPS_LATITUDE => Some(Self::Latitude),
            GPS_LONGITUDE_REF => Some(Self::LongitudeRef),
            GPS_LONGITUDE => Some(Self::Longitude),
            _ => None,
        }
    }
}

/// Raw GPS strings found in an image. Empty means the tag was missing or unusable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GpsReadings {
    pub latitude_ref: String,
    pub latitude: String,
    pub longitude_ref: String,
    pub longitude: String,
}

/// Picks the four GPS tags out of a flattened tag list.
///
/// Tags with an unexpected value shape are skipped. A repeated tag overwrites the
/// earlier occurrence.
pub fn extract(tags: &[FlatTag]) -> GpsReadings {
    let mut readings = GpsReadings::default();

    for tag in tags {
        let Some(gps_tag) = GpsTag::from_name(&tag.name) else {
            continue;
        };
        log::trace!("Found GPS tag {}: {:?}", tag.name, tag.value);

        match gps_tag {
            GpsTag::LatitudeRef => {
                if let Some(direction) = as_reference(&tag.value) {
                    readings.latitude_ref = direction;
                }
            }
            GpsTag::Latitude => {
                if let Some(position) = as_position(&tag.value) {
                    readings.latitude = position;
                }
            }
            GpsTag::LongitudeRef => {
                if let Some(direction) = as_reference(&tag.value) {
                    readings.longitude_ref = direction;
                }
            }
            GpsTag::Longitude => {
                if let Some(position) = as_position(&tag.value) {
                    readings.longitude = position;
                }
            }
        }
    }

    readings
}

fn as_reference(value: &TagValue) -> Option<String> {
    match value {
        TagValue::Text(text) => Some(text.clone()),
        _ => None,
    }
}

fn as_position(value: &TagValue) -> Option<String> {
    match value {
        TagValue::Rationals(rationals) => RationalTriplet::try_from(rationals.as_slice())
            .ok()
            .map(|triplet| format_coordinate(&triplet)),
        _ => None,
    }
}
