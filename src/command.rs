//! Command-based control for renderers.

use crate::animation::ColorList;
use crate::color::Color;

/// Actions for switching what a renderer displays.
///
/// Animated actions start from their first step every time they are handled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripAction {
    /// Fill the strip with one color.
    SetColor(Color),
    /// Turn every LED off.
    TurnOff,
    /// Start a rainbow wave from offset zero.
    RainbowWave,
    /// Light the first `percent` of the strip, for progress display.
    PercentOn { color: Color, percent: u8 },
    /// Switch the whole strip between two colors.
    Alternating { first: Color, second: Color },
    /// Step the whole strip through a list of colors.
    ColorLoop(ColorList),
    /// Pulse the strip brighter and back.
    Fade(Color),
    /// Chase a highlighted group of three LEDs around the strip.
    Circle(Color),
    /// March every third LED highlighted back and forth.
    Swivel(Color),
    /// Highlight `count` random LEDs per step.
    RandomBright {
        color: Color,
        highlight: Color,
        count: u8,
    },
    /// Rotate a color-wheel rainbow spread across the strip.
    RainbowCycle,
}
