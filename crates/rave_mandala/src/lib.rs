//! Tropical zodiac and Human Design gate/line mapping.
//!
//! Pure functions of an ecliptic longitude: [`sign_of`] divides the circle
//! into 12 signs of 30°, and [`gate_line_of`] locates one of 64 gates of
//! 5.625° and one of its 6 lines through a per-sign segment table.

pub mod error;
pub mod gate;
pub mod zodiac;

pub use error::GateTableError;
pub use gate::{
    GATE_COUNT, GATE_SPAN, GATE_WHEEL, GateInfo, GateLine, GateTable, LINE_SPAN, SIGN_SEGMENTS,
    Segment, gate_info, gate_line_of, gate_order, validate_gate_table, validate_segments,
};
pub use zodiac::{
    ALL_SIGNS, Dms, SIGN_SPAN, SignInfo, UnknownSign, ZodiacSign, deg_to_dms, dms_to_deg, sign_info,
    sign_of,
};
