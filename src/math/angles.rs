//! Angle conversions shared by the prototile tables and the tile builder
//!
//! All public geometry in this crate speaks degrees; radians appear only at
//! the trigonometric call sites.

/// Convert an angle in degrees to radians
pub const fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Convert polar coordinates (angle in degrees, radius) to cartesian
pub fn polar_to_rect(degrees: f64, radius: f64) -> [f64; 2] {
    let radians = to_radians(degrees);
    [radians.cos() * radius, radians.sin() * radius]
}

/// Normalize an angle in degrees into `[0, 360)`
pub fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}
