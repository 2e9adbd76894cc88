//! Human Design gate and line mapping.
//!
//! The wheel holds 64 gates of exactly 5.625° each, starting with gate 25 at
//! 0° Aries. The wheel does not line up with sign cusps, so the table is
//! stored per sign: each sign lists the segments `[start, end)` that fall
//! inside it, and a gate that straddles a cusp appears as a trailing
//! fragment in one sign and a leading fragment in the next. The two
//! fragments always sum to one gate width.
//!
//! Each gate holds 6 lines of 0.9375°.

use crate::error::GateTableError;
use crate::zodiac::{SIGN_SPAN, ZodiacSign, normalize_360, sign_info};

/// Number of gates on the wheel.
pub const GATE_COUNT: usize = 64;

/// Width of one gate in degrees (360 / 64).
pub const GATE_SPAN: f64 = 360.0 / GATE_COUNT as f64;

/// Width of one line in degrees (one sixth of a gate).
pub const LINE_SPAN: f64 = GATE_SPAN / 6.0;

/// Gates in wheel order from 0° Aries.
#[rustfmt::skip]
pub const GATE_WHEEL: [u8; GATE_COUNT] = [
    25, 17, 21, 51, 42,  3, 27, 24,  2, 23,  8, 20, 16, 35, 45, 12,
    15, 52, 39, 53, 62, 56, 31, 33,  7,  4, 29, 59, 40, 64, 47,  6,
    46, 18, 48, 57, 32, 50, 28, 44,  1, 43, 14, 34,  9,  5, 26, 11,
    10, 58, 38, 54, 61, 60, 41, 19, 13, 49, 30, 55, 37, 63, 22, 36,
];

/// One gate fragment inside a sign, `[start_deg, end_deg)` in degrees from
/// the sign's cusp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_deg: f64,
    pub end_deg: f64,
    pub gate: u8,
}

impl Segment {
    pub const fn new(start_deg: f64, end_deg: f64, gate: u8) -> Self {
        Self {
            start_deg,
            end_deg,
            gate,
        }
    }

    pub fn width(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    /// Leading fragment of a gate that began in the previous sign.
    pub fn is_leading_fragment(&self) -> bool {
        self.start_deg == 0.0 && self.width() < GATE_SPAN
    }
}

const fn seg(start_deg: f64, end_deg: f64, gate: u8) -> Segment {
    Segment::new(start_deg, end_deg, gate)
}

// Signs repeat one of three layouts, depending on where the cusp falls
// relative to the gate grid (offset 0, 3.75 or 1.875 degrees).
#[rustfmt::skip]
const ARIES: [Segment; 6] = [
    seg(0.0, 5.625, 25), seg(5.625, 11.25, 17), seg(11.25, 16.875, 21),
    seg(16.875, 22.5, 51), seg(22.5, 28.125, 42), seg(28.125, 30.0, 3),
];
#[rustfmt::skip]
const TAURUS: [Segment; 6] = [
    seg(0.0, 3.75, 3), seg(3.75, 9.375, 27), seg(9.375, 15.0, 24),
    seg(15.0, 20.625, 2), seg(20.625, 26.25, 23), seg(26.25, 30.0, 8),
];
#[rustfmt::skip]
const GEMINI: [Segment; 6] = [
    seg(0.0, 1.875, 8), seg(1.875, 7.5, 20), seg(7.5, 13.125, 16),
    seg(13.125, 18.75, 35), seg(18.75, 24.375, 45), seg(24.375, 30.0, 12),
];
#[rustfmt::skip]
const CANCER: [Segment; 6] = [
    seg(0.0, 5.625, 15), seg(5.625, 11.25, 52), seg(11.25, 16.875, 39),
    seg(16.875, 22.5, 53), seg(22.5, 28.125, 62), seg(28.125, 30.0, 56),
];
#[rustfmt::skip]
const LEO: [Segment; 6] = [
    seg(0.0, 3.75, 56), seg(3.75, 9.375, 31), seg(9.375, 15.0, 33),
    seg(15.0, 20.625, 7), seg(20.625, 26.25, 4), seg(26.25, 30.0, 29),
];
#[rustfmt::skip]
const VIRGO: [Segment; 6] = [
    seg(0.0, 1.875, 29), seg(1.875, 7.5, 59), seg(7.5, 13.125, 40),
    seg(13.125, 18.75, 64), seg(18.75, 24.375, 47), seg(24.375, 30.0, 6),
];
#[rustfmt::skip]
const LIBRA: [Segment; 6] = [
    seg(0.0, 5.625, 46), seg(5.625, 11.25, 18), seg(11.25, 16.875, 48),
    seg(16.875, 22.5, 57), seg(22.5, 28.125, 32), seg(28.125, 30.0, 50),
];
#[rustfmt::skip]
const SCORPIO: [Segment; 6] = [
    seg(0.0, 3.75, 50), seg(3.75, 9.375, 28), seg(9.375, 15.0, 44),
    seg(15.0, 20.625, 1), seg(20.625, 26.25, 43), seg(26.25, 30.0, 14),
];
#[rustfmt::skip]
const SAGITTARIUS: [Segment; 6] = [
    seg(0.0, 1.875, 14), seg(1.875, 7.5, 34), seg(7.5, 13.125, 9),
    seg(13.125, 18.75, 5), seg(18.75, 24.375, 26), seg(24.375, 30.0, 11),
];
#[rustfmt::skip]
const CAPRICORN: [Segment; 6] = [
    seg(0.0, 5.625, 10), seg(5.625, 11.25, 58), seg(11.25, 16.875, 38),
    seg(16.875, 22.5, 54), seg(22.5, 28.125, 61), seg(28.125, 30.0, 60),
];
#[rustfmt::skip]
const AQUARIUS: [Segment; 6] = [
    seg(0.0, 3.75, 60), seg(3.75, 9.375, 41), seg(9.375, 15.0, 19),
    seg(15.0, 20.625, 13), seg(20.625, 26.25, 49), seg(26.25, 30.0, 30),
];
#[rustfmt::skip]
const PISCES: [Segment; 6] = [
    seg(0.0, 1.875, 30), seg(1.875, 7.5, 55), seg(7.5, 13.125, 37),
    seg(13.125, 18.75, 63), seg(18.75, 24.375, 22), seg(24.375, 30.0, 36),
];

/// Per-sign segment lists, indexed by sign (0 = Aries).
#[rustfmt::skip]
pub static SIGN_SEGMENTS: [&[Segment]; 12] = [
    &ARIES, &TAURUS, &GEMINI, &CANCER, &LEO, &VIRGO,
    &LIBRA, &SCORPIO, &SAGITTARIUS, &CAPRICORN, &AQUARIUS, &PISCES,
];

/// A gate (1..=64) and line (1..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GateLine {
    pub gate: u8,
    pub line: u8,
}

impl std::fmt::Display for GateLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.gate, self.line)
    }
}

/// Full gate position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateInfo {
    pub gate_line: GateLine,
    /// Sign the longitude falls in.
    pub sign: ZodiacSign,
    /// Full-circle longitude where the gate begins, [0, 360).
    pub gate_start_deg: f64,
    /// Degrees past the gate start, [0, 5.625).
    pub degrees_in_gate: f64,
    /// Degrees past the line start, [0, 0.9375).
    pub degrees_in_line: f64,
}

/// A validated per-sign segment table.
#[derive(Debug, Clone, Copy)]
pub struct GateTable {
    signs: &'static [&'static [Segment]; 12],
}

impl GateTable {
    /// Validate `signs` and wrap it.
    pub fn new(signs: &'static [&'static [Segment]; 12]) -> Result<Self, GateTableError> {
        validate_segments(signs)?;
        Ok(Self { signs })
    }

    /// The standard wheel, validated.
    pub fn standard() -> Result<Self, GateTableError> {
        Self::new(&SIGN_SEGMENTS)
    }

    /// Segments inside one sign.
    pub fn segments(&self, sign: ZodiacSign) -> &'static [Segment] {
        self.signs[sign.index() as usize]
    }

    /// Gate, line and offsets for a tropical longitude.
    pub fn locate(&self, longitude_deg: f64) -> GateInfo {
        locate_in(self.signs, longitude_deg)
    }

    pub fn gate_line(&self, longitude_deg: f64) -> GateLine {
        self.locate(longitude_deg).gate_line
    }
}

fn locate_in(signs: &[&[Segment]; 12], longitude_deg: f64) -> GateInfo {
    let lon = normalize_360(longitude_deg);
    let info = sign_info(lon);
    let segments = signs[info.sign_index as usize];

    // Half-open lookup; only a NaN input reaches the last-segment default.
    let idx = segments
        .iter()
        .position(|s| info.degrees_in_sign < s.end_deg)
        .unwrap_or(segments.len().saturating_sub(1));
    let Some(segment) = segments.get(idx) else {
        return GateInfo {
            gate_line: GateLine { gate: 0, line: 0 },
            sign: info.sign,
            gate_start_deg: lon,
            degrees_in_gate: 0.0,
            degrees_in_line: 0.0,
        };
    };

    let sign_start = info.sign.start_deg();
    let gate_start_deg = if segment.is_leading_fragment() {
        normalize_360(sign_start + segment.end_deg - GATE_SPAN)
    } else {
        sign_start + segment.start_deg
    };

    let degrees_in_gate = normalize_360(lon - gate_start_deg);
    let line_idx = ((degrees_in_gate / LINE_SPAN).floor() as u8).min(5);
    let degrees_in_line = degrees_in_gate - line_idx as f64 * LINE_SPAN;

    GateInfo {
        gate_line: GateLine {
            gate: segment.gate,
            line: line_idx + 1,
        },
        sign: info.sign,
        gate_start_deg,
        degrees_in_gate,
        degrees_in_line,
    }
}

/// Gate and line for a longitude on the standard wheel.
pub fn gate_line_of(longitude_deg: f64) -> GateLine {
    locate_in(&SIGN_SEGMENTS, longitude_deg).gate_line
}

/// Full gate detail for a longitude on the standard wheel.
pub fn gate_info(longitude_deg: f64) -> GateInfo {
    locate_in(&SIGN_SEGMENTS, longitude_deg)
}

/// `(gate, start_deg)` for every gate in wheel order.
pub fn gate_order() -> impl Iterator<Item = (u8, f64)> {
    GATE_WHEEL
        .iter()
        .enumerate()
        .map(|(i, &gate)| (gate, i as f64 * GATE_SPAN))
}

/// Check the standard table.
pub fn validate_gate_table() -> Result<(), GateTableError> {
    validate_segments(&SIGN_SEGMENTS)
}

/// Check that a per-sign table partitions the circle into 64 whole gates.
///
/// Every sign must be covered from 0 to 30 without gaps or overlaps; every
/// gate must appear once, in one piece or as a trailing fragment followed
/// by a leading fragment in the next sign; every gate must total exactly
/// one gate width; and all 64 gates must be present.
pub fn validate_segments(signs: &[&[Segment]; 12]) -> Result<(), GateTableError> {
    let mut seen = [false; GATE_COUNT + 1];
    // (gate, accumulated width) of a gate still open at the previous cusp
    let mut open: Option<(u8, f64)> = None;
    let mut count = 0usize;

    for (sign_idx, segments) in signs.iter().enumerate() {
        let sign = ZodiacSign::all()[sign_idx];
        let mut cursor = 0.0;

        for (i, s) in segments.iter().enumerate() {
            if !(1..=GATE_COUNT as u8).contains(&s.gate) {
                return Err(GateTableError::InvalidGate(s.gate));
            }
            if s.start_deg != cursor || s.width() <= 0.0 {
                return Err(GateTableError::Gap {
                    sign: sign.name(),
                    at_deg: cursor,
                });
            }
            cursor = s.end_deg;

            let width = match open.take() {
                Some((gate, acc)) if i == 0 => {
                    if gate != s.gate {
                        return Err(GateTableError::SplitMismatch {
                            sign: sign.name(),
                            expected: gate,
                            found: s.gate,
                        });
                    }
                    acc + s.width()
                }
                _ => {
                    if seen[s.gate as usize] {
                        return Err(GateTableError::Duplicate(s.gate));
                    }
                    seen[s.gate as usize] = true;
                    count += 1;
                    s.width()
                }
            };

            let trailing = i + 1 == segments.len() && width < GATE_SPAN;
            if trailing {
                open = Some((s.gate, width));
            } else if width != GATE_SPAN {
                return Err(GateTableError::Width {
                    gate: s.gate,
                    width_deg: width,
                });
            }
        }

        if cursor != SIGN_SPAN {
            return Err(GateTableError::Gap {
                sign: sign.name(),
                at_deg: cursor,
            });
        }
    }

    // A fragment left open at the end of Pisces has no partner
    if let Some((gate, width)) = open {
        return Err(GateTableError::Width {
            gate,
            width_deg: width,
        });
    }
    if count != GATE_COUNT {
        let missing = (1..=GATE_COUNT as u8)
            .find(|&g| !seen[g as usize])
            .unwrap_or(0);
        return Err(GateTableError::Missing(missing));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_is_valid() {
        assert_eq!(validate_gate_table(), Ok(()));
        assert!(GateTable::standard().is_ok());
    }

    #[test]
    fn zero_aries_is_gate_25_line_1() {
        assert_eq!(gate_line_of(0.0), GateLine { gate: 25, line: 1 });
        assert_eq!(gate_line_of(360.0), GateLine { gate: 25, line: 1 });
    }

    #[test]
    fn boundaries_are_half_open() {
        assert_eq!(gate_line_of(5.625), GateLine { gate: 17, line: 1 });
        assert_eq!(gate_line_of(5.625 - 1e-9), GateLine { gate: 25, line: 6 });
    }

    #[test]
    fn straddling_gate_lines_continue_across_cusp() {
        // Gate 3 runs 28.125..33.75: lines 1-2 in Aries, 3-6 in Taurus
        let before = gate_info(29.5);
        assert_eq!(before.gate_line, GateLine { gate: 3, line: 2 });
        assert_eq!(before.sign, ZodiacSign::Aries);

        let after = gate_info(30.0);
        assert_eq!(after.gate_line, GateLine { gate: 3, line: 3 });
        assert_eq!(after.sign, ZodiacSign::Taurus);
        assert_eq!(after.gate_start_deg, 28.125);
        assert_eq!(after.degrees_in_gate, 1.875);
    }

    #[test]
    fn last_gate_wraps_to_aries() {
        let info = gate_info(359.99);
        assert_eq!(info.gate_line.gate, 36);
        assert_eq!(info.gate_line.line, 6);
        assert_eq!(info.gate_start_deg, 354.375);
    }

    #[test]
    fn capricorn_sun_gate() {
        // 280.5° = 10.5° Capricorn, inside gate 58 (275.625..281.25)
        let info = gate_info(280.5);
        assert_eq!(info.sign, ZodiacSign::Capricorn);
        assert_eq!(info.gate_line.gate, 58);
        assert_eq!(info.gate_line.line, 6);
    }

    #[test]
    fn wheel_order_matches_table() {
        for (gate, start) in gate_order() {
            assert_eq!(gate_line_of(start).gate, gate, "at {start}");
            assert_eq!(gate_info(start).gate_start_deg, start);
        }
    }

    static GAPPED_TAURUS: [Segment; 5] = [
        seg(0.0, 3.75, 3), seg(3.75, 9.375, 27), seg(9.375, 15.0, 24),
        seg(15.0, 20.625, 2), seg(20.625, 26.25, 23),
    ];
    static GAPPED: [&[Segment]; 12] = [
        &ARIES, &GAPPED_TAURUS, &GEMINI, &CANCER, &LEO, &VIRGO,
        &LIBRA, &SCORPIO, &SAGITTARIUS, &CAPRICORN, &AQUARIUS, &PISCES,
    ];

    #[test]
    fn gap_is_rejected() {
        assert_eq!(
            GateTable::new(&GAPPED).unwrap_err(),
            GateTableError::Gap {
                sign: "Taurus",
                at_deg: 26.25
            }
        );
    }

    static SWAPPED_CANCER: [Segment; 6] = [
        seg(0.0, 5.625, 15), seg(5.625, 11.25, 52), seg(11.25, 16.875, 39),
        seg(16.875, 22.5, 53), seg(22.5, 28.125, 25), seg(28.125, 30.0, 56),
    ];
    static DUPLICATED: [&[Segment]; 12] = [
        &ARIES, &TAURUS, &GEMINI, &SWAPPED_CANCER, &LEO, &VIRGO,
        &LIBRA, &SCORPIO, &SAGITTARIUS, &CAPRICORN, &AQUARIUS, &PISCES,
    ];

    #[test]
    fn duplicate_is_rejected() {
        assert_eq!(
            validate_segments(&DUPLICATED),
            Err(GateTableError::Duplicate(25))
        );
    }

    static MISMATCHED_LEO: [Segment; 6] = [
        seg(0.0, 3.75, 62), seg(3.75, 9.375, 31), seg(9.375, 15.0, 33),
        seg(15.0, 20.625, 7), seg(20.625, 26.25, 4), seg(26.25, 30.0, 29),
    ];
    static MISMATCHED: [&[Segment]; 12] = [
        &ARIES, &TAURUS, &GEMINI, &CANCER, &MISMATCHED_LEO, &VIRGO,
        &LIBRA, &SCORPIO, &SAGITTARIUS, &CAPRICORN, &AQUARIUS, &PISCES,
    ];

    #[test]
    fn split_gate_must_continue_in_next_sign() {
        assert_eq!(
            validate_segments(&MISMATCHED),
            Err(GateTableError::SplitMismatch {
                sign: "Leo",
                expected: 56,
                found: 62
            })
        );
    }
}
