//! Tropical zodiac sign and DMS (degrees-minutes-seconds) computation.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees each, starting
//! from Aries at the March equinox point.

/// The 12 tropical signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Width of one sign in degrees.
pub const SIGN_SPAN: f64 = 30.0;

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Longitude where the sign begins.
    pub fn start_deg(self) -> f64 {
        self.index() as f64 * SIGN_SPAN
    }

    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ZodiacSign {
    type Err = UnknownSign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SIGNS
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}

/// A sign name that does not match any of the 12 signs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown zodiac sign {0:?}")]
pub struct UnknownSign(pub String);

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a sign, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}′{:04.1}″", self.degrees, self.minutes, self.seconds)
    }
}

/// Position of a longitude within its sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignInfo {
    pub sign: ZodiacSign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Position within the sign as DMS.
    pub dms: Dms,
    /// Decimal degrees within the sign, [0.0, 30.0).
    pub degrees_in_sign: f64,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Normalize longitude to [0, 360).
pub(crate) fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Sign containing a tropical longitude. Each sign is `[30k, 30k + 30)`.
pub fn sign_of(longitude_deg: f64) -> ZodiacSign {
    sign_info(longitude_deg).sign
}

/// Sign plus the position within it.
pub fn sign_info(longitude_deg: f64) -> SignInfo {
    let lon = normalize_360(longitude_deg);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let sign_index = ((lon / SIGN_SPAN).floor() as u8).min(11);
    let degrees_in_sign = lon - sign_index as f64 * SIGN_SPAN;

    SignInfo {
        sign: ALL_SIGNS[sign_index as usize],
        sign_index,
        dms: deg_to_dms(degrees_in_sign),
        degrees_in_sign,
    }
}
