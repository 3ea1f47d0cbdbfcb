//! Strip configuration and validation.

/// How the rainbow generator feeds its hue into [`hsv_to_rgb`](crate::color::hsv_to_rgb).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HueScale {
    /// Pass the `0..360` hue through unscaled.
    ///
    /// The converter expects a unit fraction, so every integer hue lands on
    /// sector 0 and the wave renders solid red. Kept as the default to match
    /// the behavior deployed strips already show.
    #[default]
    Raw,

    /// Divide the hue by 360 before conversion, producing a visible rainbow.
    Degrees,
}

/// Invalid configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// LED count is zero.
    ZeroLedCount,

    /// Wave length is zero.
    ZeroWaveLength,

    /// LED count does not fit the frame capacity.
    LedCountExceedsCapacity { led_count: usize, capacity: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroLedCount => {
                write!(f, "invalid configuration: LED count must be positive")
            }
            ConfigError::ZeroWaveLength => {
                write!(f, "invalid configuration: wave length must be positive")
            }
            ConfigError::LedCountExceedsCapacity {
                led_count,
                capacity,
            } => {
                write!(
                    f,
                    "invalid configuration: {} LEDs exceed frame capacity of {}",
                    led_count, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Startup configuration for a strip and its animations.
///
/// Values are fixed once built; there is no runtime reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripConfig {
    led_count: usize,
    gpio_pin: u8,
    wave_length: usize,
    frame_delay_ms: u32,
    hue_scale: HueScale,
}

impl StripConfig {
    pub const DEFAULT_LED_COUNT: usize = 20;
    pub const DEFAULT_GPIO_PIN: u8 = 18;
    pub const DEFAULT_WAVE_LENGTH: usize = 3;
    pub const DEFAULT_FRAME_DELAY_MS: u32 = 50;

    /// Creates a configuration builder seeded with the defaults.
    pub fn builder() -> StripConfigBuilder {
        StripConfigBuilder::new()
    }

    /// Number of LEDs on the strip.
    pub fn led_count(&self) -> usize {
        self.led_count
    }

    /// GPIO pin the strip's data line is attached to. Consumed by the driver.
    pub fn gpio_pin(&self) -> u8 {
        self.gpio_pin
    }

    /// Hue step between neighbouring LEDs in the rainbow wave.
    pub fn wave_length(&self) -> usize {
        self.wave_length
    }

    /// Delay between frames of the render loop, in milliseconds.
    pub fn frame_delay_ms(&self) -> u32 {
        self.frame_delay_ms
    }

    pub fn hue_scale(&self) -> HueScale {
        self.hue_scale
    }

    /// Checks that the LED count fits a frame of the given capacity.
    pub fn check_capacity(&self, capacity: usize) -> Result<(), ConfigError> {
        if self.led_count > capacity {
            return Err(ConfigError::LedCountExceedsCapacity {
                led_count: self.led_count,
                capacity,
            });
        }
        Ok(())
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            led_count: Self::DEFAULT_LED_COUNT,
            gpio_pin: Self::DEFAULT_GPIO_PIN,
            wave_length: Self::DEFAULT_WAVE_LENGTH,
            frame_delay_ms: Self::DEFAULT_FRAME_DELAY_MS,
            hue_scale: HueScale::default(),
        }
    }
}

/// Builder for validated [`StripConfig`] values.
#[derive(Debug, Clone, Copy)]
pub struct StripConfigBuilder {
    config: StripConfig,
}

impl StripConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: StripConfig::default(),
        }
    }

    pub fn led_count(mut self, led_count: usize) -> Self {
        self.config.led_count = led_count;
        self
    }

    pub fn gpio_pin(mut self, gpio_pin: u8) -> Self {
        self.config.gpio_pin = gpio_pin;
        self
    }

    pub fn wave_length(mut self, wave_length: usize) -> Self {
        self.config.wave_length = wave_length;
        self
    }

    pub fn frame_delay_ms(mut self, frame_delay_ms: u32) -> Self {
        self.config.frame_delay_ms = frame_delay_ms;
        self
    }

    pub fn hue_scale(mut self, hue_scale: HueScale) -> Self {
        self.config.hue_scale = hue_scale;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ZeroLedCount` - LED count is zero
    /// * `ZeroWaveLength` - Wave length is zero
    pub fn build(self) -> Result<StripConfig, ConfigError> {
        if self.config.led_count == 0 {
            return Err(ConfigError::ZeroLedCount);
        }

        if self.config.wave_length == 0 {
            return Err(ConfigError::ZeroWaveLength);
        }

        Ok(self.config)
    }
}

impl Default for StripConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
