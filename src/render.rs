//! Render loop driving a pattern onto a strip.
//!
//! Provides [`Renderer`], which owns a strip through a [`StripGuard`], builds
//! one frame per tick from the current [`Pattern`] and waits a fixed delay
//! between ticks. The loop is cooperative: it checks a [`StopSignal`] before
//! every tick instead of relying on process termination.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;

use crate::animation::{
    Alternating, Circle, ColorLoop, Fade, RainbowCycle, RandomBright, Swivel,
};
use crate::color::Color;
use crate::command::StripAction;
use crate::config::{ConfigError, StripConfig};
use crate::frame::{Frame, FrameError, percent_frame, solid_frame};
use crate::rainbow::RainbowWave;
use crate::strip::{LedStrip, StripGuard};

/// What a renderer displays on every tick.
#[derive(Debug, Clone)]
pub enum Pattern<const N: usize> {
    /// All LEDs off.
    Off,
    /// All LEDs one color.
    Solid(Color),
    /// First `percent` of the strip lit, rest off.
    Percent { color: Color, percent: u8 },
    /// Rotating rainbow wave.
    Rainbow(RainbowWave<N>),
    /// Two colors in turn.
    Alternating(Alternating<N>),
    /// A list of colors in turn.
    ColorLoop(ColorLoop<N>),
    /// Brightness pulse.
    Fade(Fade<N>),
    /// Highlighted group chasing around the strip.
    Circle(Circle<N>),
    /// Every third LED highlighted, marching.
    Swivel(Swivel<N>),
    /// Random LEDs highlighted.
    RandomBright(RandomBright<N>),
    /// Rotating color-wheel rainbow.
    RainbowCycle(RainbowCycle<N>),
}

impl<const N: usize> Pattern<N> {
    /// Builds the frame for the next tick.
    pub fn next_frame(&mut self, led_count: usize) -> Result<Frame<N>, FrameError> {
        match self {
            Pattern::Off => Frame::off(led_count),
            Pattern::Solid(color) => solid_frame(*color, led_count),
            Pattern::Percent { color, percent } => percent_frame(*color, led_count, *percent),
            Pattern::Rainbow(wave) => Ok(wave.next_frame()),
            Pattern::Alternating(animation) => Ok(animation.next_frame()),
            Pattern::ColorLoop(animation) => Ok(animation.next_frame()),
            Pattern::Fade(animation) => Ok(animation.next_frame()),
            Pattern::Circle(animation) => Ok(animation.next_frame()),
            Pattern::Swivel(animation) => Ok(animation.next_frame()),
            Pattern::RandomBright(animation) => Ok(animation.next_frame()),
            Pattern::RainbowCycle(animation) => Ok(animation.next_frame()),
        }
    }

    /// Returns true if successive frames can differ.
    pub fn is_animated(&self) -> bool {
        !matches!(
            self,
            Pattern::Off | Pattern::Solid(_) | Pattern::Percent { .. }
        )
    }
}

/// Errors that can occur while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError<E> {
    /// The strip driver failed. Not retried.
    Strip(E),
    /// The configuration does not fit this renderer.
    Config(ConfigError),
    /// A frame could not be built.
    Frame(FrameError),
}

impl<E> From<ConfigError> for RenderError<E> {
    fn from(err: ConfigError) -> Self {
        RenderError::Config(err)
    }
}

impl<E> From<FrameError> for RenderError<E> {
    fn from(err: FrameError) -> Self {
        RenderError::Frame(err)
    }
}

impl<E: core::fmt::Display> core::fmt::Display for RenderError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RenderError::Strip(err) => write!(f, "strip error: {}", err),
            RenderError::Config(err) => write!(f, "{}", err),
            RenderError::Frame(err) => write!(f, "{}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<E: std::error::Error> std::error::Error for RenderError<E> {}

/// Cancellation flag for a render loop.
///
/// Safe to set from another thread or a signal handler.
#[derive(Debug, Default)]
pub struct StopSignal {
    stopped: AtomicBool,
}

impl StopSignal {
    pub const fn new() -> Self {
        Self {
            stopped: AtomicBool::new(false),
        }
    }

    /// Requests the loop to stop before its next tick.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Clears a previous stop request so the signal can be reused.
    pub fn reset(&self) {
        self.stopped.store(false, Ordering::Relaxed);
    }
}

/// Drives a [`Pattern`] onto a strip at a fixed frame delay.
///
/// # Type Parameters
/// * `L` - Strip implementation type
/// * `D` - Delay provider
/// * `N` - Maximum number of LEDs per frame
pub struct Renderer<L: LedStrip, D: DelayNs, const N: usize> {
    strip: StripGuard<L>,
    delay: D,
    config: StripConfig,
    pattern: Pattern<N>,
    frames_rendered: u64,
}

impl<L: LedStrip, D: DelayNs, const N: usize> Renderer<L, D, N> {
    /// Creates a renderer showing [`Pattern::Off`]. Nothing is rendered yet.
    ///
    /// # Errors
    /// * `LedCountExceedsCapacity` - The strip is longer than `N`
    pub fn new(strip: L, delay: D, config: StripConfig) -> Result<Self, ConfigError> {
        config.check_capacity(N)?;

        Ok(Self {
            strip: StripGuard::new(strip),
            delay,
            config,
            pattern: Pattern::Off,
            frames_rendered: 0,
        })
    }

    /// Switches pattern according to `action` and renders its first frame.
    ///
    /// `RandomBright` is seeded from the number of frames rendered so far.
    pub fn handle_action(&mut self, action: StripAction) -> Result<(), RenderError<L::Error>> {
        log::info!("switching pattern: {:?}", action);

        let config = &self.config;
        let pattern = match action {
            StripAction::SetColor(color) => Pattern::Solid(color),
            StripAction::TurnOff => Pattern::Off,
            StripAction::RainbowWave => Pattern::Rainbow(RainbowWave::new(config)?),
            StripAction::PercentOn { color, percent } => Pattern::Percent { color, percent },
            StripAction::Alternating { first, second } => {
                Pattern::Alternating(Alternating::new(config, first, second)?)
            }
            StripAction::ColorLoop(colors) => Pattern::ColorLoop(ColorLoop::new(config, colors)?),
            StripAction::Fade(color) => Pattern::Fade(Fade::new(config, color)?),
            StripAction::Circle(color) => Pattern::Circle(Circle::new(config, color)?),
            StripAction::Swivel(color) => Pattern::Swivel(Swivel::new(config, color)?),
            StripAction::RandomBright {
                color,
                highlight,
                count,
            } => Pattern::RandomBright(RandomBright::new(
                config,
                color,
                highlight,
                count,
                self.frames_rendered,
            )?),
            StripAction::RainbowCycle => Pattern::RainbowCycle(RainbowCycle::new(config)?),
        };

        self.set_pattern(pattern);
        self.tick()
    }

    /// Replaces the current pattern without rendering.
    pub fn set_pattern(&mut self, pattern: Pattern<N>) {
        self.pattern = pattern;
    }

    /// Builds the next frame and sends it to the strip.
    pub fn tick(&mut self) -> Result<(), RenderError<L::Error>> {
        let frame = self.pattern.next_frame(self.config.led_count())?;
        self.strip.render(&frame).map_err(RenderError::Strip)?;

        self.frames_rendered += 1;
        if self.frames_rendered % 1_000 == 0 {
            log::debug!("rendered {} frames", self.frames_rendered);
        }
        Ok(())
    }

    /// Renders frames until `stop` is set or the strip fails.
    ///
    /// Checks `stop` before every tick and sleeps the configured frame delay
    /// after each one. Returns the number of frames rendered by this call.
    pub fn run(&mut self, stop: &StopSignal) -> Result<u64, RenderError<L::Error>> {
        log::info!(
            "render loop started: {} LEDs, {}ms per frame",
            self.config.led_count(),
            self.config.frame_delay_ms()
        );

        let mut frames = 0;
        while !stop.is_stopped() {
            self.tick()?;
            frames += 1;
            self.delay.delay_ms(self.config.frame_delay_ms());
        }

        log::info!("render loop stopped after {} frames", frames);
        Ok(frames)
    }

    /// Resets the strip once and returns it.
    pub fn shutdown(self) -> Result<L, RenderError<L::Error>> {
        log::info!("resetting LED strip");
        self.strip.release().map_err(RenderError::Strip)
    }

    pub fn pattern(&self) -> &Pattern<N> {
        &self.pattern
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Total frames rendered since creation.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn strip(&self) -> &L {
        &self.strip
    }
}

#[cfg(feature = "std")]
mod threaded {
    use std::sync::Arc;
    use std::thread::JoinHandle;

    use embedded_hal::delay::DelayNs;

    use super::{RenderError, Renderer, StopSignal};
    use crate::strip::LedStrip;

    type LoopResult<L, D, const N: usize> =
        Result<Renderer<L, D, N>, RenderError<<L as LedStrip>::Error>>;

    /// A render loop running on its own thread.
    #[derive(Debug)]
    pub struct RenderHandle<L: LedStrip, D: DelayNs, const N: usize> {
        thread: JoinHandle<LoopResult<L, D, N>>,
        stop: Arc<StopSignal>,
    }

    impl<L: LedStrip, D: DelayNs, const N: usize> RenderHandle<L, D, N> {
        /// Stops the loop, waits for the thread and returns the renderer.
        ///
        /// The stop flag is set before joining, so a loop that has not reached
        /// its first tick yet exits with `Ok` and nothing rendered. To observe
        /// a strip error, wait for [`is_finished`](Self::is_finished) first.
        ///
        /// If the thread panicked, the panic is resumed on the caller.
        pub fn stop(self) -> LoopResult<L, D, N> {
            self.stop.stop();
            self.thread
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
        }

        /// Returns true if the loop has exited, on stop or on a strip error.
        pub fn is_finished(&self) -> bool {
            self.thread.is_finished()
        }

        pub fn stop_signal(&self) -> &Arc<StopSignal> {
            &self.stop
        }
    }

    impl<L, D, const N: usize> Renderer<L, D, N>
    where
        L: LedStrip + Send + 'static,
        L::Error: Send + 'static,
        D: DelayNs + Send + 'static,
    {
        /// Moves the renderer onto a new thread running [`run`](Renderer::run).
        ///
        /// On a strip error the renderer is dropped, which resets the strip.
        pub fn spawn(self, stop: Arc<StopSignal>) -> std::io::Result<RenderHandle<L, D, N>> {
            let signal = Arc::clone(&stop);
            let thread = std::thread::Builder::new()
                .name("led-render".to_owned())
                .spawn(move || -> LoopResult<L, D, N> {
                    let mut renderer = self;
                    renderer.run(&signal)?;
                    Ok(renderer)
                })?;

            Ok(RenderHandle { thread, stop })
        }
    }
}

#[cfg(feature = "std")]
pub use threaded::RenderHandle;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, RED};

    #[test]
    fn static_patterns_are_not_animated() {
        assert!(!Pattern::<8>::Off.is_animated());
        assert!(!Pattern::<8>::Solid(RED).is_animated());

        let config = StripConfig::default();
        assert!(Pattern::<32>::Fade(Fade::new(&config, RED).unwrap()).is_animated());
    }

    #[test]
    fn off_pattern_builds_black_frame() {
        let frame = Pattern::<8>::Off.next_frame(5).unwrap();
        assert_eq!(frame.len(), 5);
        assert!(frame.iter().all(|&color| color == BLACK));
    }

    #[test]
    fn stop_signal_can_be_reused() {
        let signal = StopSignal::new();
        assert!(!signal.is_stopped());
        signal.stop();
        assert!(signal.is_stopped());
        signal.reset();
        assert!(!signal.is_stopped());
    }

    #[test]
    fn render_error_wraps_config_error() {
        let err: RenderError<()> = ConfigError::ZeroLedCount.into();
        assert_eq!(err, RenderError::Config(ConfigError::ZeroLedCount));
    }
}
