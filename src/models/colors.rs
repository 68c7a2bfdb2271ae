use serde::{Deserialize, Serialize};

/// An opaque RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Decodes an OLE color value.
    ///
    /// Office automation packs colors as `0x00BBGGRR`: red in the lowest byte,
    /// blue in the third. The high byte is ignored.
    pub fn from_ole(value: u32) -> Self {
        Self {
            red: (value & 0xff) as u8,
            green: ((value >> 8) & 0xff) as u8,
            blue: ((value >> 16) & 0xff) as u8,
        }
    }

    /// Formats the color as a CSS hex string (`#rrggbb`).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}
