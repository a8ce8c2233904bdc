//! Unit conversion utilities.
//!
//! All spatial parameters in the public API are accepted in centimeters and
//! font sizes in points; internally everything is stored in EMUs (English
//! Metric Units, 914400 EMU = 1 inch) or centipoints, the native units of
//! the OOXML drawing layer.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;

/// Convert centimeters to EMUs.
#[inline]
pub fn cm_to_emu(cm: f64) -> i64 {
    (cm * EMUS_PER_CM as f64).round() as i64
}

/// Convert points to centipoints, the unit used by `sz` attributes in
/// DrawingML run properties.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

/// Convert centipoints back to points.
#[inline]
pub fn centipoints_to_pt(sz: u32) -> f64 {
    sz as f64 / 100.0
}

/// Convert pixels to EMUs at the given DPI.
#[inline]
pub fn px_to_emu(px: u32, dpi: u32) -> i64 {
    ((px as f64) * EMUS_PER_INCH as f64 / dpi as f64) as i64
}

/// Convert pixels to EMUs at the standard screen resolution of 96 DPI.
#[inline]
pub fn px_to_emu_96(px: u32) -> i64 {
    px_to_emu(px, 96)
}
