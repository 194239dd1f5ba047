//! Page container capability

use serde::{Deserialize, Serialize};

/// Generation tag attached to every container request. Completions are
/// reported back with the same token; only the newest one is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransitionToken(u64);

impl TransitionToken {
    pub(crate) fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub fn generation(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TransitionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDirection {
    Forward,
    Reverse,
}

/// The host's swipeable page view.
///
/// Requests are asynchronous: the container animates on its own and the host
/// reports the outcome through `PageCoordinator::transition_finished` with
/// the token passed here. Gesture callbacks (drag begin/end, offset changes,
/// will-transition) are likewise forwarded by the host.
pub trait PageContainer<P> {
    /// Show `pages` (the visible page list, normally a single page).
    fn set_pages(&mut self, pages: &[P], direction: NavigationDirection, animated: bool, token: TransitionToken);
}
