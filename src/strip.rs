//! Hardware boundary for LED strips.
//!
//! Defines the [`LedStrip`] trait the render loop talks to, an adapter for
//! drivers implementing the `smart-leds` write trait, and [`StripGuard`] which
//! ties the strip reset to scope exit.

use core::ops::{Deref, DerefMut};

use smart_leds::{RGB8, SmartLedsWrite};

use crate::color::{BLACK, Color};

/// Trait for abstracting LED strip hardware.
///
/// Implement this for your driver (PWM/DMA, SPI, RMT, etc.). Driver
/// initialization belongs to the implementor's constructor.
pub trait LedStrip {
    /// Driver error type.
    type Error;

    /// Displays one frame. `frame[0]` is the first physical LED.
    fn render(&mut self, frame: &[Color]) -> Result<(), Self::Error>;

    /// Turns every LED off and releases the output.
    fn reset(&mut self) -> Result<(), Self::Error>;
}

impl<L: LedStrip + ?Sized> LedStrip for &mut L {
    type Error = L::Error;

    fn render(&mut self, frame: &[Color]) -> Result<(), Self::Error> {
        (**self).render(frame)
    }

    fn reset(&mut self) -> Result<(), Self::Error> {
        (**self).reset()
    }
}

/// [`LedStrip`] over any `smart-leds` writer taking `RGB8` pixels.
#[derive(Debug)]
pub struct SmartLedsStrip<W> {
    writer: W,
    led_count: usize,
}

impl<W> SmartLedsStrip<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Wraps `writer`; `led_count` black pixels are written on reset.
    pub fn new(writer: W, led_count: usize) -> Self {
        Self { writer, led_count }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> LedStrip for SmartLedsStrip<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    type Error = W::Error;

    fn render(&mut self, frame: &[Color]) -> Result<(), Self::Error> {
        self.writer.write(frame.iter().map(|&color| RGB8::from(color)))
    }

    fn reset(&mut self) -> Result<(), Self::Error> {
        self.writer
            .write(core::iter::repeat_n(RGB8::from(BLACK), self.led_count))
    }
}

/// Scoped ownership of a strip that resets it exactly once on release.
///
/// The reset runs either through [`release`](Self::release), which reports
/// the driver error, or on drop, where a failure can only be logged. Drop
/// also runs while unwinding, so a panicking render loop still turns the
/// LEDs off.
#[derive(Debug)]
pub struct StripGuard<L: LedStrip> {
    strip: Option<L>,
}

impl<L: LedStrip> StripGuard<L> {
    /// Takes ownership of an initialized strip.
    pub fn new(strip: L) -> Self {
        Self { strip: Some(strip) }
    }

    /// Resets the strip and hands it back.
    pub fn release(mut self) -> Result<L, L::Error> {
        let mut strip = self.take();
        strip.reset()?;
        Ok(strip)
    }

    fn take(&mut self) -> L {
        match self.strip.take() {
            Some(strip) => strip,
            None => unreachable!("strip is only taken on release or drop"),
        }
    }
}

impl<L: LedStrip> Deref for StripGuard<L> {
    type Target = L;

    fn deref(&self) -> &L {
        match &self.strip {
            Some(strip) => strip,
            None => unreachable!("strip is only taken on release or drop"),
        }
    }
}

impl<L: LedStrip> DerefMut for StripGuard<L> {
    fn deref_mut(&mut self) -> &mut L {
        match &mut self.strip {
            Some(strip) => strip,
            None => unreachable!("strip is only taken on release or drop"),
        }
    }
}

impl<L: LedStrip> Drop for StripGuard<L> {
    fn drop(&mut self) {
        if let Some(mut strip) = self.strip.take() {
            if strip.reset().is_err() {
                log::warn!("failed to reset LED strip on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingStrip {
        resets: usize,
    }

    impl LedStrip for CountingStrip {
        type Error = ();

        fn render(&mut self, _frame: &[Color]) -> Result<(), ()> {
            Ok(())
        }

        fn reset(&mut self) -> Result<(), ()> {
            self.resets += 1;
            Ok(())
        }
    }

    #[test]
    fn release_resets_once_and_returns_strip() {
        let guard = StripGuard::new(CountingStrip { resets: 0 });
        let strip = guard.release().unwrap();
        assert_eq!(strip.resets, 1);
    }

    #[test]
    fn drop_resets_borrowed_strip() {
        let mut strip = CountingStrip { resets: 0 };
        {
            let _guard = StripGuard::new(&mut strip);
        }
        assert_eq!(strip.resets, 1);
    }
}
