/// Linear RGB, each channel in `[0, 1]`. No gamma handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for LiquidColor {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl LiquidColor {
    /// Empty containers show white.
    pub const NEUTRAL: Self = Self::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    pub fn to_hex(self) -> u32 {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// `Σ(cᵢ·wᵢ) / Σwᵢ` per channel; `None` when the total weight is zero.
    pub fn weighted_mix(parts: impl IntoIterator<Item = (LiquidColor, f32)>) -> Option<Self> {
        let (mut r, mut g, mut b, mut total) = (0.0, 0.0, 0.0, 0.0);
        for (color, weight) in parts {
            r += color.r * weight;
            g += color.g * weight;
            b += color.b * weight;
            total += weight;
        }
        (total > 0.0).then(|| Self::rgb(r / total, g / total, b / total))
    }
}

impl From<LiquidColor> for bevy::color::Color {
    fn from(color: LiquidColor) -> Self {
        bevy::color::Color::srgb(color.r, color.g, color.b)
    }
}
