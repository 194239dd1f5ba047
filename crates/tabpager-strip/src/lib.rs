//! Tabpager Tab Strip
//!
//! The button strip half of a paged tab control. Owns one button per
//! [`TabItem`], the selection indicator, and the strip's horizontal scroll
//! offset. Geometry is recomputed from continuous progress updates so the
//! indicator tracks an in-flight page swipe.

mod button;
mod config;
mod geometry;
mod indicator;
mod item;
mod strip;

pub use button::{ButtonFactory, ButtonStyle, EstimatedWidthFactory, TabButton};
pub use config::{Color, EdgeInsets, Font, IndicatorEdge, LayoutMode, SelectionStyle, TabStripConfig};
pub use geometry::Rect;
pub use indicator::Indicator;
pub use item::{ImageRef, TabItem};
pub use strip::TabStrip;
