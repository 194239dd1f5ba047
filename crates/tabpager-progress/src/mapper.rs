//! Progress mapper
//!
//! The page container lays out previous / current / next pages in a sliding
//! window, so its horizontal offset divided by the page width always falls in
//! `0.0..=2.0`, with `1.0` meaning "resting on the base page":
//!
//! ```text
//! 0.0            1.0            2.0
//!  | previous     | current      | next
//! ```

use serde::{Deserialize, Serialize};

/// Offset fraction of the base page in the container's three-page window.
pub const SETTLED_FRACTION: f64 = 1.0;

/// One frame of an in-flight transition between two tab indices.
///
/// `to` may fall outside the tab range (e.g. an overscroll bounce on the
/// first page resolves to `-1`); consumers ignore such samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSample {
    pub from: isize,
    pub to: isize,
    /// 0.0 = fully at `from`, 1.0 = fully at `to`
    pub progress: f64,
}

impl ProgressSample {
    pub fn new(from: isize, to: isize, progress: f64) -> Self {
        Self { from, to, progress }
    }

    /// Sample resting on a single index.
    pub fn settled(index: isize) -> Self {
        Self::new(index, index, 1.0)
    }

    pub fn is_settled(&self) -> bool {
        self.from == self.to
    }

    /// Both indices as `usize` when they lie inside `0..count`.
    pub fn indices(&self, count: usize) -> Option<(usize, usize)> {
        let from = usize::try_from(self.from).ok().filter(|i| *i < count)?;
        let to = usize::try_from(self.to).ok().filter(|i| *i < count)?;
        Some((from, to))
    }
}

/// Resolve a raw offset fraction into a progress sample relative to
/// `base_index`.
///
/// `known_delta` is the index distance to the commit target when it is known
/// up front (a programmatic jump). Without it the direction is taken from the
/// side of the window the offset currently sits on, which assumes a single
/// page changes per gesture.
///
/// Offsets outside `0.0..=2.0` (overscroll) are clamped into the window.
/// A non-finite offset reads as settled.
#[allow(clippy::float_cmp)]
pub fn resolve(raw_offset_fraction: f64, base_index: usize, known_delta: Option<isize>) -> ProgressSample {
    let base = base_index as isize;
    if !raw_offset_fraction.is_finite() {
        return ProgressSample::settled(base);
    }
    let fraction = raw_offset_fraction.clamp(0.0, 2.0 * SETTLED_FRACTION);

    if fraction == SETTLED_FRACTION {
        return ProgressSample::settled(base);
    }

    let delta = known_delta.unwrap_or(if fraction > SETTLED_FRACTION { 1 } else { -1 });
    ProgressSample::new(base, base + delta, (SETTLED_FRACTION - fraction).abs())
}
