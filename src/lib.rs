#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Color`**: A 24-bit packed RGB value, red in the high byte
//! - **`hsv_to_rgb`**: Converts a unit-fraction HSV triple to a `Color`
//! - **`Frame`**: One color per LED in physical order, stored inline with capacity `N`
//! - **`solid_frame`** / **`percent_frame`**: Static frame builders
//! - **`RainbowWave`**: Stateful generator shifting the hue by one step per frame
//! - **`Fade`**, **`Circle`**, **`Swivel`** and friends: Animated generators paced by a `Cadence`
//! - **`LedStrip`**: Trait to implement for your strip driver
//! - **`StripGuard`**: Resets the strip exactly once when released or dropped
//! - **`Renderer`**: Renders a `Pattern` every tick until a `StopSignal` is set
//! - **`StripAction`**: Commands that switch the displayed pattern
//!
//! Enable the `std` feature (on by default) for `StdDelay` and for running a
//! renderer on its own thread with `Renderer::spawn`.

pub mod animation;
pub mod color;
pub mod command;
pub mod config;
pub mod frame;
pub mod rainbow;
pub mod render;
pub mod strip;
#[cfg(feature = "std")]
pub mod time;

pub use animation::{
    Alternating, Cadence, Circle, ColorList, ColorLoop, Fade, RainbowCycle, RandomBright, Swivel,
};
pub use color::{BLACK, BLUE, Color, GREEN, RED, hsv, hsv_to_rgb, rgb, wheel};
pub use command::StripAction;
pub use config::{ConfigError, HueScale, StripConfig, StripConfigBuilder};
pub use frame::{Frame, FrameError, percent_frame, solid_frame};
pub use rainbow::RainbowWave;
pub use render::{Pattern, RenderError, Renderer, StopSignal};
#[cfg(feature = "std")]
pub use render::RenderHandle;
pub use strip::{LedStrip, SmartLedsStrip, StripGuard};
#[cfg(feature = "std")]
pub use time::StdDelay;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_compile() {
        let _ = HueScale::Raw;
        let _ = HueScale::Degrees;
        let _ = StripAction::TurnOff;
        let _ = Pattern::<4>::Off;
    }
}
