use serde::Serialize;

/// Pixel offset of a party slot relative to the formation anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const ORIGIN: Offset = Offset { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Offset { x, y }
    }
}

impl From<(i32, i32)> for Offset {
    fn from((x, y): (i32, i32)) -> Self {
        Offset { x, y }
    }
}

/// Converts a float coordinate to an integer by dropping the fractional part.
///
/// Shipped formation tables were produced with a plain integer cast, so
/// `-64.67` becomes `-64` rather than `-65`. Rounding here would shift several
/// PROTECT slots by a pixel.
pub fn truncate_toward_zero(value: f64) -> i32 {
    value.trunc() as i32
}

/// `radius * cos(angle)` with the angle given in degrees, truncated.
pub fn polar_x(radius: f64, degrees: f64) -> i32 {
    truncate_toward_zero(degrees.to_radians().cos() * radius)
}

/// `radius * sin(angle)` with the angle given in degrees, truncated.
pub fn polar_y(radius: f64, degrees: f64) -> i32 {
    truncate_toward_zero(degrees.to_radians().sin() * radius)
}
