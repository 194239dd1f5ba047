//! Tabpager Page Coordination
//!
//! Keeps a swipeable page container and the tab strip in lockstep:
//! - gesture lifecycle callbacks drive a small phase state machine
//! - raw container offsets are mapped to progress samples for the strip
//! - every container request carries a generation token, so completions
//!   for superseded requests are recognised and dropped

mod container;
mod coordinator;
mod error;
mod state;

pub use container::{NavigationDirection, PageContainer, TransitionToken};
pub use coordinator::{PageCoordinator, SelectionState};
pub use error::PagerError;
pub use state::GesturePhase;

pub type Result<T> = std::result::Result<T, PagerError>;
