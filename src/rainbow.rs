//! Rotating rainbow wave generator.

use crate::color::{Color, hsv_to_rgb};
use crate::config::{ConfigError, HueScale, StripConfig};
use crate::frame::Frame;

/// Number of hue steps in one full rotation of the wave.
pub const HUE_STEPS: u16 = 360;

/// Produces rainbow frames whose hue shifts by one step per frame.
///
/// Each call to [`next_frame`](Self::next_frame) depends on the offset left by
/// the previous call, so the sequence cannot be restarted; create a new
/// generator instead. Every render loop must own its own instance.
///
/// LED `i` gets hue `(i * wave_length + offset) mod 360`, where `offset`
/// starts at zero and advances by one (mod 360) after every frame.
#[derive(Debug, Clone)]
pub struct RainbowWave<const N: usize> {
    led_count: usize,
    wave_length: usize,
    hue_scale: HueScale,
    offset: u16,
}

impl<const N: usize> RainbowWave<N> {
    /// Creates a generator for the configured strip.
    ///
    /// A [`StripConfig`] is validated when built, so only the capacity is
    /// checked here.
    ///
    /// # Errors
    /// * `LedCountExceedsCapacity` - Strip is longer than `N`
    pub fn new(config: &StripConfig) -> Result<Self, ConfigError> {
        config.check_capacity(N)?;

        Ok(Self {
            led_count: config.led_count(),
            wave_length: config.wave_length(),
            hue_scale: config.hue_scale(),
            offset: 0,
        })
    }

    /// Builds the next frame and advances the offset.
    pub fn next_frame(&mut self) -> Frame<N> {
        let frame = Frame::from_fn(self.led_count, |index| self.color_at(index));
        self.offset = (self.offset + 1) % HUE_STEPS;
        debug_assert!(frame.is_ok(), "led_count was checked against N on construction");
        frame.unwrap_or_default()
    }

    /// Offset the next frame will be generated with.
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn led_count(&self) -> usize {
        self.led_count
    }

    /// Hue of the LED at `index` for the current offset, in `0..360`.
    pub fn hue_at(&self, index: usize) -> u16 {
        let steps = u64::from(HUE_STEPS);
        let wave = (index as u64 % steps) * (self.wave_length as u64 % steps);
        ((wave + u64::from(self.offset)) % steps) as u16
    }

    fn color_at(&self, index: usize) -> Color {
        let hue = f64::from(self.hue_at(index));
        match self.hue_scale {
            HueScale::Raw => hsv_to_rgb(hue, 1.0, 1.0),
            HueScale::Degrees => hsv_to_rgb(hue / f64::from(HUE_STEPS), 1.0, 1.0),
        }
    }
}

/// Endless stream of frames; `next` never returns `None`.
impl<const N: usize> Iterator for RainbowWave<N> {
    type Item = Frame<N>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(led_count: usize, wave_length: usize) -> RainbowWave<32> {
        let config = StripConfig::builder()
            .led_count(led_count)
            .wave_length(wave_length)
            .build()
            .unwrap();
        RainbowWave::new(&config).unwrap()
    }

    #[test]
    fn hue_follows_index_times_wave_length() {
        let wave = wave(20, 3);
        assert_eq!(wave.hue_at(0), 0);
        assert_eq!(wave.hue_at(1), 3);
        assert_eq!(wave.hue_at(19), 57);
    }

    #[test]
    fn hue_wraps_at_full_circle() {
        let wave = wave(20, 100);
        assert_eq!(wave.hue_at(4), 40);
    }

    #[test]
    fn offset_advances_once_per_frame() {
        let mut wave = wave(4, 3);
        assert_eq!(wave.offset(), 0);
        wave.next_frame();
        assert_eq!(wave.offset(), 1);
        wave.next_frame();
        assert_eq!(wave.hue_at(1), 5);
    }

    #[test]
    fn frame_fills_full_capacity() {
        let mut wave = RainbowWave::<4>::new(
            &StripConfig::builder().led_count(4).build().unwrap(),
        )
        .unwrap();
        assert_eq!(wave.next_frame().len(), 4);
    }

    #[test]
    fn new_rejects_strip_longer_than_capacity() {
        let config = StripConfig::builder().led_count(33).build().unwrap();
        assert!(matches!(
            RainbowWave::<32>::new(&config),
            Err(ConfigError::LedCountExceedsCapacity { .. })
        ));
    }
}
