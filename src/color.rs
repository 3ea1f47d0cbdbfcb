//! Packed RGB colors and HSV conversion.
//!
//! Strip drivers take colors as 24-bit packed integers with red in the highest
//! byte and blue in the lowest. [`Color`] wraps that representation and
//! provides conversions to the `palette` and `smart-leds` color types.

use core::fmt;

use palette::{FromColor, Hsv, Srgb};
use smart_leds::RGB8;

/// A 24-bit packed RGB color, `(r << 16) | (g << 8) | b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(u32);

pub const BLACK: Color = Color::from_rgb(0, 0, 0);
pub const RED: Color = Color::from_rgb(255, 0, 0);
pub const GREEN: Color = Color::from_rgb(0, 255, 0);
pub const BLUE: Color = Color::from_rgb(0, 0, 255);

impl Color {
    /// Packs three 8-bit channels into a single color.
    #[inline]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Color(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Creates a color from a packed integer. Bits above the low 24 are dropped.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Color(packed & 0x00FF_FFFF)
    }

    /// Returns the packed `0xRRGGBB` value.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Returns the `(red, green, blue)` channels.
    #[inline]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    /// Multiplies every channel by `factor`, saturating at 255.
    pub const fn scaled(self, factor: u8) -> Self {
        Color::from_rgb(
            self.red().saturating_mul(factor),
            self.green().saturating_mul(factor),
            self.blue().saturating_mul(factor),
        )
    }

    /// Adds `amount` to every lit channel, saturating at 255. Channels that
    /// are off stay off.
    pub const fn brightened(self, amount: u8) -> Self {
        const fn lift(channel: u8, amount: u8) -> u8 {
            if channel == 0 { 0 } else { channel.saturating_add(amount) }
        }
        Color::from_rgb(
            lift(self.red(), amount),
            lift(self.green(), amount),
            lift(self.blue(), amount),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        Color::from_rgb(rgb.red, rgb.green, rgb.blue)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(color: Color) -> Self {
        Srgb::new(color.red(), color.green(), color.blue())
    }
}

impl From<Color> for RGB8 {
    fn from(color: Color) -> Self {
        RGB8::new(color.red(), color.green(), color.blue())
    }
}

/// Shorthand for [`Color::from_rgb`].
#[inline]
pub const fn rgb(red: u8, green: u8, blue: u8) -> Color {
    Color::from_rgb(red, green, blue)
}

/// Converts an HSV triple to a packed color.
///
/// `h` is a fraction of the full hue circle (`0.0..1.0`), `s` and `v` are in
/// `0.0..=1.0`. Inputs are not validated: a hue of 1.0 or more wraps through
/// `floor(h * 6) mod 6`, and channels outside `0..=255` saturate. A negative
/// or non-finite hue selects no sector and gives [`BLACK`].
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Color {
    let scaled = h * 6.0;
    let i = libm::floor(scaled);
    let f = scaled - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector(i) {
        Some(0) => (v, t, p),
        Some(1) => (q, v, p),
        Some(2) => (p, v, t),
        Some(3) => (p, q, v),
        Some(4) => (t, p, v),
        Some(_) => (v, p, q),
        None => return BLACK,
    };

    Color::from_rgb(to_channel(r), to_channel(g), to_channel(b))
}

/// Creates a color from HSV with the hue in degrees (`0.0..360.0`, wrapping).
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Color {
    let rgb: Srgb = Srgb::from_color(Hsv::new_srgb(hue, saturation, value));
    rgb.into_format::<u8>().into()
}

/// Color wheel position: red to green over `0..85`, green to blue over
/// `85..170`, then blue back to red.
pub const fn wheel(position: u8) -> Color {
    match position {
        0..=84 => Color::from_rgb(position * 3, 255 - position * 3, 0),
        85..=169 => {
            let position = position - 85;
            Color::from_rgb(255 - position * 3, 0, position * 3)
        }
        _ => {
            let position = position - 170;
            Color::from_rgb(0, position * 3, 255 - position * 3)
        }
    }
}

/// `i mod 6` for a finite, non-negative `i`.
fn sector(i: f64) -> Option<u8> {
    if !i.is_finite() || i < 0.0 {
        return None;
    }
    Some(libm::fmod(i, 6.0) as u8)
}

/// Scales a unit channel to `0..=255`, rounding half up.
fn to_channel(value: f64) -> u8 {
    libm::floor(value * 255.0 + 0.5) as u8
}
