//! Tabpager Progress Mapping
//!
//! Pure coordinate math shared by the tab strip and the page coordinator:
//! - raw page-container offset → `(from, to, progress)` samples
//! - linear interpolation between button geometries
//! - viewport auto-scroll for the scrollable button strip

mod mapper;
mod viewport;

pub use mapper::{resolve, ProgressSample, SETTLED_FRACTION};
pub use viewport::{auto_scroll_x, lerp};
