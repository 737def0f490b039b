//! Variant colours for renderers.

use std::fmt;

use crate::state::Variant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const RED: Rgb = Rgb::new(0xcc, 0x3a, 0x2f);
pub const GREEN: Rgb = Rgb::new(0x4f, 0xb1, 0x53);
pub const BLUE: Rgb = Rgb::new(0x3f, 0x51, 0xb5);
/// Background for dead cells.
pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// Fill colour for a variant.
pub fn color_of(variant: Variant) -> Rgb {
    match variant {
        Variant::Fresh => RED,
        Variant::Maturing => GREEN,
        Variant::Established => BLUE,
    }
}
