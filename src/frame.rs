//! Per-LED frames and the static frame builders.
//!
//! A [`Frame`] holds one color per LED in physical order, index 0 being the
//! LED closest to the data input. Frames are stored inline with a fixed
//! capacity `N`, so building one never allocates.

use core::ops::Deref;

use heapless::Vec;

use crate::color::{BLACK, Color};

/// Frame construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// More LEDs requested than the frame can hold.
    CapacityExceeded { requested: usize, capacity: usize },
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "frame of {} LEDs exceeds capacity of {}",
                    requested, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FrameError {}

/// One complete set of LED colors, handed to the strip in a single render call.
///
/// # Type Parameters
/// * `N` - Maximum number of LEDs this frame can hold
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame<const N: usize> {
    colors: Vec<Color, N>,
}

impl<const N: usize> Frame<N> {
    /// Creates an empty frame.
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Frame of `count` LEDs all set to `color`.
    pub fn solid(color: Color, count: usize) -> Result<Self, FrameError> {
        Self::from_fn(count, |_| color)
    }

    /// Frame of `count` LEDs all turned off.
    pub fn off(count: usize) -> Result<Self, FrameError> {
        Self::solid(BLACK, count)
    }

    /// Builds a frame by evaluating `color_at` for every LED index in order.
    pub fn from_fn<F>(count: usize, mut color_at: F) -> Result<Self, FrameError>
    where
        F: FnMut(usize) -> Color,
    {
        check_capacity::<N>(count)?;

        let mut colors = Vec::new();
        for index in 0..count {
            // Capacity was checked above.
            let _ = colors.push(color_at(index));
        }

        Ok(Self { colors })
    }

    /// Returns the colors in LED order.
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    /// Maximum number of LEDs this frame type holds.
    pub const fn capacity() -> usize {
        N
    }
}

impl<const N: usize> Deref for Frame<N> {
    type Target = [Color];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<'a, const N: usize> IntoIterator for &'a Frame<N> {
    type Item = &'a Color;
    type IntoIter = core::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Builds a frame of `count` LEDs, every one set to `color`.
///
/// # Errors
/// * `CapacityExceeded` - `count` is larger than `N`
#[inline]
pub fn solid_frame<const N: usize>(color: Color, count: usize) -> Result<Frame<N>, FrameError> {
    Frame::solid(color, count)
}

/// Builds a progress-bar frame: the first `percent` of `count` LEDs lit with
/// `color`, the rest off.
///
/// The lit count is `count * percent / 100` rounded half to even. `percent`
/// above 100 is treated as 100.
///
/// # Errors
/// * `CapacityExceeded` - `count` is larger than `N`
pub fn percent_frame<const N: usize>(
    color: Color,
    count: usize,
    percent: u8,
) -> Result<Frame<N>, FrameError> {
    check_capacity::<N>(count)?;
    let lit = lit_count(count, percent);
    Frame::from_fn(count, |index| if index < lit { color } else { BLACK })
}

fn check_capacity<const N: usize>(count: usize) -> Result<(), FrameError> {
    if count > N {
        return Err(FrameError::CapacityExceeded {
            requested: count,
            capacity: N,
        });
    }
    Ok(())
}

/// `count` must not exceed a frame capacity, which keeps the product in range.
fn lit_count(count: usize, percent: u8) -> usize {
    let scaled = count * usize::from(percent.min(100));
    let (quotient, remainder) = (scaled / 100, scaled % 100);
    match remainder {
        r if r > 50 => quotient + 1,
        50 if quotient % 2 == 1 => quotient + 1,
        _ => quotient,
    }
}
