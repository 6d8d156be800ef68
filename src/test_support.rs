//! Minimal EXIF-bearing JPEG files for tests.

use std::fs;
use std::path::Path;

const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

const TAG_ORIENTATION: u16 = 0x0112;
const TAG_GPS_POINTER: u16 = 0x8825;
const TAG_GPS_LATITUDE_REF: u16 = 0x0001;
const TAG_GPS_LATITUDE: u16 = 0x0002;
const TAG_GPS_LONGITUDE_REF: u16 = 0x0003;
const TAG_GPS_LONGITUDE: u16 = 0x0004;

type Axis = (&'static str, [(u32, u32); 3]);

pub struct GpsFixture {
    pub latitude: Option<Axis>,
    pub longitude: Option<Axis>,
}

impl GpsFixture {
    pub fn both() -> Self {
        Self {
            latitude: Some(("N", [(34, 1), (5, 1), (1200, 100)])),
            longitude: Some(("W", [(118, 1), (14, 1), (3000, 100)])),
        }
    }

    pub fn latitude_only() -> Self {
        Self {
            longitude: None,
            ..Self::both()
        }
    }

    pub fn none() -> Self {
        Self {
            latitude: None,
            longitude: None,
        }
    }
}

struct Entry {
    tag: u16,
    kind: u16,
    count: u32,
    data: Vec<u8>,
}

impl Entry {
    fn ascii(tag: u16, text: &str) -> Self {
        let mut data = text.as_bytes().to_vec();
        data.push(0);
        Self {
            tag,
            kind: TYPE_ASCII,
            count: data.len() as u32,
            data,
        }
    }

    fn rationals(tag: u16, values: &[(u32, u32)]) -> Self {
        let data = values
            .iter()
            .flat_map(|&(n, d)| n.to_le_bytes().into_iter().chain(d.to_le_bytes()))
            .collect();
        Self {
            tag,
            kind: TYPE_RATIONAL,
            count: values.len() as u32,
            data,
        }
    }

    fn short(tag: u16, value: u16) -> Self {
        Self {
            tag,
            kind: TYPE_SHORT,
            count: 1,
            data: value.to_le_bytes().to_vec(),
        }
    }

    fn long(tag: u16, value: u32) -> Self {
        Self {
            tag,
            kind: TYPE_LONG,
            count: 1,
            data: value.to_le_bytes().to_vec(),
        }
    }
}

/// Serializes one little-endian IFD located at `offset`, with out-of-line values after it.
fn ifd(entries: &[Entry], offset: u32) -> Vec<u8> {
    let mut out = Vec::new();
    let mut extra = Vec::new();
    let extra_start = offset + 2 + 12 * entries.len() as u32 + 4;

    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for entry in entries {
        out.extend_from_slice(&entry.tag.to_le_bytes());
        out.extend_from_slice(&entry.kind.to_le_bytes());
        out.extend_from_slice(&entry.count.to_le_bytes());
        if entry.data.len() <= 4 {
            let mut inline = entry.data.clone();
            inline.resize(4, 0);
            out.extend_from_slice(&inline);
        } else {
            let at = extra_start + extra.len() as u32;
            out.extend_from_slice(&at.to_le_bytes());
            extra.extend_from_slice(&entry.data);
            if extra.len() % 2 == 1 {
                extra.push(0);
            }
        }
    }
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&extra);
    out
}

fn tiff(fixture: &GpsFixture) -> Vec<u8> {
    let mut gps = Vec::new();
    if let Some((reference, value)) = fixture.latitude {
        gps.push(Entry::ascii(TAG_GPS_LATITUDE_REF, reference));
        gps.push(Entry::rationals(TAG_GPS_LATITUDE, &value));
    }
    if let Some((reference, value)) = fixture.longitude {
        gps.push(Entry::ascii(TAG_GPS_LONGITUDE_REF, reference));
        gps.push(Entry::rationals(TAG_GPS_LONGITUDE, &value));
    }

    let mut primary = vec![Entry::short(TAG_ORIENTATION, 1)];
    let primary_len = 2 + 12 * (primary.len() as u32 + u32::from(!gps.is_empty())) + 4;
    let gps_offset = 8 + primary_len;
    if !gps.is_empty() {
        primary.push(Entry::long(TAG_GPS_POINTER, gps_offset));
    }

    let mut out = b"II".to_vec();
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&8u32.to_le_bytes());
    out.extend(ifd(&primary, 8));
    if !gps.is_empty() {
        out.extend(ifd(&gps, gps_offset));
    }
    out
}

/// A JPEG consisting of SOI, an APP1 EXIF segment and EOI. No image data.
pub fn jpeg_with_gps(fixture: &GpsFixture) -> Vec<u8> {
    jpeg_with_app1(tiff(fixture))
}

/// A JPEG whose EXIF segment starts with an invalid byte-order mark.
pub fn jpeg_with_broken_tiff() -> Vec<u8> {
    let mut tiff = tiff(&GpsFixture::both());
    tiff[..2].copy_from_slice(b"XX");
    jpeg_with_app1(tiff)
}

fn jpeg_with_app1(tiff: Vec<u8>) -> Vec<u8> {
    let mut payload = b"Exif\0\0".to_vec();
    payload.extend(tiff);

    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    out.extend_from_slice(&(payload.len() as u16 + 2).to_be_bytes());
    out.extend(payload);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

pub fn write_jpeg(path: &Path, fixture: &GpsFixture) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, jpeg_with_gps(fixture)).unwrap();
}
