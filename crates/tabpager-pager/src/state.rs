//! Gesture phase state machine
//!
//! ```text
//! Idle ──drag──▶ Dragging ──release──▶ Settling ──finished──▶ Committed ──▶ Idle
//!  │                                      │
//!  └──go_to──▶ Jumping ──finished────────────────────────────▶ Committed
//! ```
//!
//! A drag or `go_to` arriving while Settling or Jumping supersedes the
//! pending transition. An interrupted transition falls back to Idle.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GesturePhase {
    /// No transition; the selection is stable
    #[default]
    Idle,
    /// Finger down on the page container
    Dragging,
    /// Released, the container is decelerating toward a page
    Settling,
    /// Programmatic jump animating toward a known target
    Jumping,
    /// Target index just became the selection
    Committed,
}

impl GesturePhase {
    /// Check if transition to another phase is valid
    pub fn can_transition_to(&self, target: GesturePhase) -> bool {
        match (self, target) {
            (a, b) if *a == b => true,
            (GesturePhase::Committed, GesturePhase::Idle) => true,
            // A new drag or jump can start from anywhere but a commit
            (GesturePhase::Committed, _) => false,
            (_, GesturePhase::Dragging) | (_, GesturePhase::Jumping) => true,
            (GesturePhase::Dragging, GesturePhase::Settling) => true,
            // Completion may race ahead of the release callback
            (GesturePhase::Dragging, GesturePhase::Committed) => true,
            (GesturePhase::Settling, GesturePhase::Committed) => true,
            (GesturePhase::Jumping, GesturePhase::Committed) => true,
            (GesturePhase::Settling, GesturePhase::Idle) => true,
            (GesturePhase::Jumping, GesturePhase::Idle) => true,
            _ => false,
        }
    }

    /// Returns true while a transition is in flight
    pub fn is_transitioning(&self) -> bool {
        matches!(
            self,
            GesturePhase::Dragging | GesturePhase::Settling | GesturePhase::Jumping
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GesturePhase::Idle => "idle",
            GesturePhase::Dragging => "dragging",
            GesturePhase::Settling => "settling",
            GesturePhase::Jumping => "jumping",
            GesturePhase::Committed => "committed",
        }
    }
}

impl std::fmt::Display for GesturePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
