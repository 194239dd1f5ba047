//! Tabpager Core
//!
//! Host-facing entry point: a tab bar synchronized with a swipeable page
//! container, with an optional header view and a top or bottom tab bar.
//! The host owns the actual views and forwards container callbacks; this
//! crate owns all selection state and geometry.

mod config;
mod controller;
mod error;
mod layout;

pub use config::TabBarConfig;
pub use controller::{HeaderView, TabBarController};
pub use error::CoreError;
pub use layout::{ControllerLayout, TabBarPosition};

// Re-export the building blocks
pub use tabpager_pager::{
    GesturePhase, NavigationDirection, PageContainer, PageCoordinator, PagerError, SelectionState,
    TransitionToken,
};
pub use tabpager_progress::{auto_scroll_x, resolve, ProgressSample};
pub use tabpager_strip::{
    ButtonFactory, ButtonStyle, Color, EdgeInsets, EstimatedWidthFactory, Font, ImageRef, Indicator,
    IndicatorEdge, LayoutMode, Rect, SelectionStyle, TabButton, TabItem, TabStrip, TabStripConfig,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
