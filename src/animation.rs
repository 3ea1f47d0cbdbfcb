//! Animated patterns: alternating colors, color loops, fades, chases and
//! the color-wheel rainbow.
//!
//! Each generator builds one frame per render tick and advances its state
//! once per step. A [`Cadence`] converts a step duration into a number of
//! ticks at the configured frame delay, so slow patterns hold each step for
//! several frames instead of changing the loop's delay.

use heapless::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::color::{BLACK, Color, wheel};
use crate::config::{ConfigError, StripConfig};
use crate::frame::Frame;

/// Maximum number of colors in a [`ColorLoop`].
pub const MAX_LOOP_COLORS: usize = 16;

/// Colors cycled by a [`ColorLoop`].
pub type ColorList = Vec<Color, MAX_LOOP_COLORS>;

/// Channel multiplier for highlighted LEDs in [`Circle`] and [`Swivel`].
pub const HIGHLIGHT_FACTOR: u8 = 5;

/// Brightness steps of a [`Fade`] from base color to peak.
pub const FADE_STEPS: u8 = 75;

/// Number of LED groups in a [`Swivel`]; one LED per group is highlighted.
pub const SWIVEL_GROUPS: usize = 3;

/// Steps in one turn of a [`RainbowCycle`].
pub const WHEEL_CYCLE_STEPS: u8 = 255;

/// Step durations, in milliseconds.
pub mod step_ms {
    pub const ALTERNATING: u32 = 500;
    pub const COLOR_LOOP: u32 = 1_000;
    pub const FADE: u32 = 10;
    pub const CIRCLE: u32 = 100;
    pub const SWIVEL: u32 = 200;
    pub const RANDOM_BRIGHT: u32 = 130;
    pub const RAINBOW_CYCLE: u32 = 10;
}

/// Counts render ticks and reports when an animation step is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    ticks_per_step: u32,
    elapsed: u32,
}

impl Cadence {
    /// Advances every `ticks_per_step` ticks. Zero is treated as one.
    pub const fn new(ticks_per_step: u32) -> Self {
        Self {
            ticks_per_step: if ticks_per_step == 0 { 1 } else { ticks_per_step },
            elapsed: 0,
        }
    }

    /// Cadence for steps of `step_ms` on a loop ticking every `frame_delay_ms`.
    ///
    /// Rounded to the nearest tick, never below one.
    pub fn from_millis(step_ms: u32, frame_delay_ms: u32) -> Self {
        if frame_delay_ms == 0 {
            return Self::new(1);
        }
        Self::new(step_ms.saturating_add(frame_delay_ms / 2) / frame_delay_ms)
    }

    /// Records one tick. Returns true when the animation should step.
    pub fn tick(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.ticks_per_step {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }

    pub fn ticks_per_step(&self) -> u32 {
        self.ticks_per_step
    }
}

fn strip_len<const N: usize>(config: &StripConfig) -> Result<usize, ConfigError> {
    config.check_capacity(N)?;
    Ok(config.led_count())
}

fn build_frame<const N: usize>(led_count: usize, color_at: impl FnMut(usize) -> Color) -> Frame<N> {
    let frame = Frame::from_fn(led_count, color_at);
    debug_assert!(frame.is_ok(), "led_count was checked against N on construction");
    frame.unwrap_or_default()
}

/// Whole strip switching between two colors.
#[derive(Debug, Clone)]
pub struct Alternating<const N: usize> {
    led_count: usize,
    colors: [Color; 2],
    second: bool,
    cadence: Cadence,
}

impl<const N: usize> Alternating<N> {
    /// # Errors
    /// * `LedCountExceedsCapacity` - Strip is longer than `N`
    pub fn new(config: &StripConfig, first: Color, second: Color) -> Result<Self, ConfigError> {
        Ok(Self {
            led_count: strip_len::<N>(config)?,
            colors: [first, second],
            second: false,
            cadence: Cadence::from_millis(step_ms::ALTERNATING, config.frame_delay_ms()),
        })
    }

    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = cadence;
        self
    }

    pub fn next_frame(&mut self) -> Frame<N> {
        let color = self.colors[usize::from(self.second)];
        if self.cadence.tick() {
            self.second = !self.second;
        }
        build_frame(self.led_count, |_| color)
    }
}

/// Whole strip stepping through a list of colors, then starting over.
///
/// An empty list keeps the strip off.
#[derive(Debug, Clone)]
pub struct ColorLoop<const N: usize> {
    led_count: usize,
    colors: ColorList,
    index: usize,
    cadence: Cadence,
}

impl<const N: usize> ColorLoop<N> {
    /// # Errors
    /// * `LedCountExceedsCapacity` - Strip is longer than `N`
    pub fn new(config: &StripConfig, colors: ColorList) -> Result<Self, ConfigError> {
        Ok(Self {
            led_count: strip_len::<N>(config)?,
            colors,
            index: 0,
            cadence: Cadence::from_millis(step_ms::COLOR_LOOP, config.frame_delay_ms()),
        })
    }

    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = cadence;
        self
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn next_frame(&mut self) -> Frame<N> {
        let color = self.colors.get(self.index).copied().unwrap_or(BLACK);
        if self.cadence.tick() && !self.colors.is_empty() {
            self.index = (self.index + 1) % self.colors.len();
        }
        build_frame(self.led_count, |_| color)
    }
}

/// Whole strip brightening from the base color up to [`FADE_STEPS`] above it
/// and back down, repeatedly.
#[derive(Debug, Clone)]
pub struct Fade<const N: usize> {
    led_count: usize,
    color: Color,
    level: u8,
    rising: bool,
    cadence: Cadence,
}

impl<const N: usize> Fade<N> {
    /// # Errors
    /// * `LedCountExceedsCapacity` - Strip is longer than `N`
    pub fn new(config: &StripConfig, color: Color) -> Result<Self, ConfigError> {
        Ok(Self {
            led_count: strip_len::<N>(config)?,
            color,
            level: 1,
            rising: true,
            cadence: Cadence::from_millis(step_ms::FADE, config.frame_delay_ms()),
        })
    }

    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = cadence;
        self
    }

    /// Amount added to every lit channel in the next frame.
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn next_frame(&mut self) -> Frame<N> {
        let color = self.color.brightened(self.level);
        if self.cadence.tick() {
            self.step();
        }
        build_frame(self.led_count, |_| color)
    }

    fn step(&mut self) {
        if self.rising {
            self.level += 1;
        } else {
            self.level -= 1;
        }

        if self.level == FADE_STEPS {
            self.rising = false;
        } else if self.level == 0 {
            self.rising = true;
        }
    }
}

/// Three highlighted LEDs chasing around the strip over a base color.
#[derive(Debug, Clone)]
pub struct Circle<const N: usize> {
    led_count: usize,
    color: Color,
    position: usize,
    cadence: Cadence,
}

impl<const N: usize> Circle<N> {
    /// # Errors
    /// * `LedCountExceedsCapacity` - Strip is longer than `N`
    pub fn new(config: &StripConfig, color: Color) -> Result<Self, ConfigError> {
        Ok(Self {
            led_count: strip_len::<N>(config)?,
            color,
            position: 0,
            cadence: Cadence::from_millis(step_ms::CIRCLE, config.frame_delay_ms()),
        })
    }

    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = cadence;
        self
    }

    /// Center of the highlighted group in the next frame.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn next_frame(&mut self) -> Frame<N> {
        let count = self.led_count;
        let center = self.position;
        let highlight = self.color.scaled(HIGHLIGHT_FACTOR);
        let base = self.color;

        let frame = build_frame(count, |index| {
            let lit = index == center
                || index == (center + 1) % count
                || index == (center + count - 1) % count;
            if lit { highlight } else { base }
        });

        if self.cadence.tick() {
            self.position = (self.position + 1) % count;
        }
        frame
    }
}

/// Every third LED highlighted, the pattern marching along the strip and
/// shifting phase after each full pass.
#[derive(Debug, Clone)]
pub struct Swivel<const N: usize> {
    led_count: usize,
    color: Color,
    step: usize,
    phase: usize,
    cadence: Cadence,
}

impl<const N: usize> Swivel<N> {
    /// # Errors
    /// * `LedCountExceedsCapacity` - Strip is longer than `N`
    pub fn new(config: &StripConfig, color: Color) -> Result<Self, ConfigError> {
        Ok(Self {
            led_count: strip_len::<N>(config)?,
            color,
            step: 0,
            phase: 0,
            cadence: Cadence::from_millis(step_ms::SWIVEL, config.frame_delay_ms()),
        })
    }

    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = cadence;
        self
    }

    pub fn next_frame(&mut self) -> Frame<N> {
        let offset = self.step + self.phase;
        let highlight = self.color.scaled(HIGHLIGHT_FACTOR);
        let base = self.color;

        let frame = build_frame(self.led_count, |index| {
            if (offset + index) % SWIVEL_GROUPS == 0 {
                highlight
            } else {
                base
            }
        });

        if self.cadence.tick() {
            self.step += 1;
            if self.step >= self.led_count {
                // phase alternates between 0 and 1
                self.phase = 1 - self.phase;
                self.step = 0;
            }
        }
        frame
    }
}

/// Base color with a few randomly chosen LEDs switched to a highlight color.
///
/// LEDs are drawn with replacement, so fewer than `count` may light up.
#[derive(Debug, Clone)]
pub struct RandomBright<const N: usize> {
    led_count: usize,
    color: Color,
    highlight: Color,
    count: u8,
    rng: ChaCha8Rng,
    frame: Frame<N>,
    cadence: Cadence,
}

impl<const N: usize> RandomBright<N> {
    /// Creates the generator with a deterministic random sequence from `seed`.
    ///
    /// # Errors
    /// * `LedCountExceedsCapacity` - Strip is longer than `N`
    pub fn new(
        config: &StripConfig,
        color: Color,
        highlight: Color,
        count: u8,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let mut animation = Self {
            led_count: strip_len::<N>(config)?,
            color,
            highlight,
            count,
            rng: ChaCha8Rng::seed_from_u64(seed),
            frame: Frame::new(),
            cadence: Cadence::from_millis(step_ms::RANDOM_BRIGHT, config.frame_delay_ms()),
        };
        animation.frame = animation.shuffle();
        Ok(animation)
    }

    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = cadence;
        self
    }

    pub fn next_frame(&mut self) -> Frame<N> {
        let frame = self.frame.clone();
        if self.cadence.tick() {
            self.frame = self.shuffle();
        }
        frame
    }

    fn shuffle(&mut self) -> Frame<N> {
        let mut lit: Vec<bool, N> = Vec::new();
        let _ = lit.resize(self.led_count, false);
        for _ in 0..self.count {
            let index = self.rng.gen_range(0..self.led_count);
            lit[index] = true;
        }

        build_frame(self.led_count, |index| {
            if lit[index] { self.highlight } else { self.color }
        })
    }
}

/// Color-wheel rainbow spread across the whole strip, rotating one wheel
/// position per step.
#[derive(Debug, Clone)]
pub struct RainbowCycle<const N: usize> {
    led_count: usize,
    step: u8,
    cadence: Cadence,
}

impl<const N: usize> RainbowCycle<N> {
    /// # Errors
    /// * `LedCountExceedsCapacity` - Strip is longer than `N`
    pub fn new(config: &StripConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            led_count: strip_len::<N>(config)?,
            step: 0,
            cadence: Cadence::from_millis(step_ms::RAINBOW_CYCLE, config.frame_delay_ms()),
        })
    }

    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = cadence;
        self
    }

    /// Wheel position added to every LED in the next frame.
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn next_frame(&mut self) -> Frame<N> {
        let count = self.led_count;
        let step = usize::from(self.step);
        let frame = build_frame(count, |index| {
            let position = (index * 256 / count + step) & 0xFF;
            wheel(position as u8)
        });

        if self.cadence.tick() {
            self.step = (self.step + 1) % WHEEL_CYCLE_STEPS;
        }
        frame
    }
}
