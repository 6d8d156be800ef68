use std::fmt;

pub const DEGREE_SYMBOL: char = '°';
pub const MINUTE_SYMBOL: &str = "'";
pub const SECOND_SYMBOL: &str = "''";

/// A numerator/denominator pair as stored in EXIF RATIONAL fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Truncating integer quotient, `None` when the denominator is zero.
    fn whole(&self) -> Option<u32> {
        (self.denominator != 0).then(|| self.numerator / self.denominator)
    }

    fn fractional(&self) -> Option<f32> {
        (self.denominator != 0).then(|| self.numerator as f32 / self.denominator as f32)
    }
}

/// Degrees, minutes and seconds of one coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RationalTriplet {
    pub degrees: Rational,
    pub minutes: Rational,
    pub seconds: Rational,
}

impl TryFrom<&[Rational]> for RationalTriplet {
    type Error = usize;

    /// Fails with the actual length when the slice does not hold exactly three values.
    fn try_from(values: &[Rational]) -> Result<Self, Self::Error> {
        match values {
            [degrees, minutes, seconds] => Ok(Self {
                degrees: *degrees,
                minutes: *minutes,
                seconds: *seconds,
            }),
            _ => Err(values.len()),
        }
    }
}

impl fmt::Display for RationalTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.degrees.whole() {
            Some(deg) => write!(f, "{}", deg)?,
            None => f.write_str("0")?,
        }
        write!(f, "{}", DEGREE_SYMBOL)?;

        match self.minutes.whole() {
            Some(min) => write!(f, "{}", min)?,
            None => f.write_str("0")?,
        }
        f.write_str(MINUTE_SYMBOL)?;

        match self.seconds.fractional() {
            Some(sec) => write!(f, "{:.2}", sec)?,
            None => f.write_str("0")?,
        }
        f.write_str(SECOND_SYMBOL)
    }
}

/// Renders a triplet as `<deg>°<min>'<sec>''`.
pub fn format_coordinate(triplet: &RationalTriplet) -> String {
    triplet.to_string()
}
