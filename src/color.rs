// Simple color struct, created from an unsigned 32 representing RRGGBBAA

// Soft green cyberpunk theme, same palette the page uses for its accents
pub const PALETTE: [u32; 5] = [
    0x00ff9dff, 0x00cc7aff, 0x80e0b0ff, 0xa0ffd0ff, 0x00a35cff,
];

// Connection lines are always drawn in the brightest palette green
pub const CONNECTION_COLOR: u32 = 0x00ff9dff;

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // CSS hex string for canvas fill/stroke styles; alpha is applied
    // separately through the context's globalAlpha
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
