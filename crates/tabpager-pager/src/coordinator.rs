//! Page coordinator
//!
//! Owns the page list and the authoritative selection. Host callbacks from
//! the page container move the gesture phase along; offset samples in between
//! are resolved against the index the transition started from and forwarded
//! to the tab strip.

use std::fmt;

use tabpager_progress::{resolve, ProgressSample};
use tabpager_strip::{TabItem, TabStrip};

use crate::container::{NavigationDirection, PageContainer, TransitionToken};
use crate::error::PagerError;
use crate::state::GesturePhase;
use crate::Result;

type SelectionListener = Box<dyn FnMut(usize)>;

/// Selection bookkeeping shared across one transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected_index: usize,
    /// Index the container's offset window is centered on; set while a
    /// transition is being followed
    pub base_index: Option<usize>,
    /// Tab strip scroll offset captured when the transition started. The
    /// container's own offset is not stored; it arrives as raw fractions.
    pub strip_base_offset: Option<f64>,
    /// Distance to the commit target when known before settle
    pub pending_index_delta: Option<isize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransitionOrigin {
    Gesture,
    Jump,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTransition {
    token: TransitionToken,
    target: usize,
    origin: TransitionOrigin,
}

pub struct PageCoordinator<P, C> {
    strip: TabStrip,
    container: C,
    pages: Vec<P>,
    selection: SelectionState,
    phase: GesturePhase,
    pending: Option<PendingTransition>,
    generation: u64,
    last_sample: Option<ProgressSample>,
    listener: Option<SelectionListener>,
}

impl<P, C: PageContainer<P>> PageCoordinator<P, C> {
    pub fn new(strip: TabStrip, container: C) -> Self {
        Self {
            strip,
            container,
            pages: Vec::new(),
            selection: SelectionState::default(),
            phase: GesturePhase::Idle,
            pending: None,
            generation: 0,
            last_sample: None,
            listener: None,
        }
    }

    /// Register the host's selection-changed handler. Called once per
    /// committed change, whether tap, drag, or programmatic.
    pub fn on_selection_changed(&mut self, listener: impl FnMut(usize) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn strip(&self) -> &TabStrip {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut TabStrip {
        &mut self.strip
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    pub fn selected_index(&self) -> usize {
        self.selection.selected_index
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Last sample forwarded to the strip.
    pub fn last_sample(&self) -> Option<ProgressSample> {
        self.last_sample
    }

    pub fn page_before(&self, index: usize) -> Option<&P> {
        index.checked_sub(1).and_then(|i| self.pages.get(i))
    }

    pub fn page_after(&self, index: usize) -> Option<&P> {
        index.checked_add(1).and_then(|i| self.pages.get(i))
    }

    /// Replace the tab items. Rejected when pages are already set and the
    /// counts no longer match. A real replacement resets the selection, so
    /// the container is sent back to the first page.
    pub fn set_tabs(&mut self, items: Vec<TabItem>) -> Result<()> {
        if !self.pages.is_empty() && items.len() != self.pages.len() {
            return Err(PagerError::CountMismatch {
                tabs: items.len(),
                pages: self.pages.len(),
            });
        }
        if self.strip.set_items(items) {
            self.reset_selection();
            self.show_first_page(false);
        }
        Ok(())
    }

    /// Replace the pages, paired 1:1 with the current tab items, and show
    /// the first one.
    pub fn set_pages(&mut self, pages: Vec<P>, animated: bool) -> Result<()> {
        if pages.len() != self.strip.len() {
            return Err(PagerError::CountMismatch {
                tabs: self.strip.len(),
                pages: pages.len(),
            });
        }
        self.install_pages(pages, animated);
        Ok(())
    }

    /// Replace tabs and pages together.
    pub fn set_content(&mut self, items: Vec<TabItem>, pages: Vec<P>, animated: bool) -> Result<()> {
        if items.len() != pages.len() {
            return Err(PagerError::CountMismatch {
                tabs: items.len(),
                pages: pages.len(),
            });
        }
        self.strip.set_items(items);
        self.install_pages(pages, animated);
        Ok(())
    }

    /// Same as `go_to(index, true)`.
    pub fn set_selected_index(&mut self, index: usize) -> Option<TransitionToken> {
        self.go_to(index, true)
    }

    /// A tab button was tapped. Taps without a matching page leave the
    /// strip untouched.
    pub fn tap(&mut self, index: usize) -> Option<TransitionToken> {
        if index >= self.pages.len() {
            tracing::debug!(index, count = self.pages.len(), "Ignoring tap without a page");
            return None;
        }
        let index = self.strip.tap(index)?;
        self.go_to(index, true)
    }

    /// Ask the container to show page `index` directly. Supersedes any
    /// transition in flight. Returns the token the host must report back via
    /// [`transition_finished`](Self::transition_finished).
    pub fn go_to(&mut self, index: usize, animated: bool) -> Option<TransitionToken> {
        if index >= self.pages.len() {
            tracing::debug!(index, count = self.pages.len(), "Ignoring jump outside page range");
            return None;
        }
        let current = self.selection.selected_index;
        if index == current && self.pending.is_none() {
            return None;
        }

        self.supersede_pending();
        let token = self.next_token();
        let direction = if index < current {
            NavigationDirection::Reverse
        } else {
            NavigationDirection::Forward
        };

        self.selection.base_index = Some(current);
        self.selection.strip_base_offset = Some(self.strip.begin_transition());
        self.selection.pending_index_delta = Some(index as isize - current as isize);
        self.pending = Some(PendingTransition {
            token,
            target: index,
            origin: TransitionOrigin::Jump,
        });
        self.enter(GesturePhase::Jumping);

        tracing::debug!(from = current, to = index, token = %token, "Jumping to page");

        self.container
            .set_pages(std::slice::from_ref(&self.pages[index]), direction, animated, token);
        Some(token)
    }

    /// The user put a finger on the page container.
    pub fn drag_began(&mut self) {
        self.supersede_pending();
        self.selection.base_index = Some(self.selection.selected_index);
        self.selection.strip_base_offset = Some(self.strip.begin_transition());
        self.selection.pending_index_delta = None;
        self.enter(GesturePhase::Dragging);
    }

    /// The container is about to move to page `index` under the gesture.
    pub fn will_transition_to(&mut self, index: usize) -> Option<TransitionToken> {
        if !matches!(self.phase, GesturePhase::Dragging | GesturePhase::Settling) {
            tracing::debug!(index, phase = %self.phase, "Ignoring transition outside a gesture");
            return None;
        }
        if index >= self.pages.len() {
            tracing::debug!(index, count = self.pages.len(), "Ignoring transition outside page range");
            return None;
        }

        let token = self.next_token();
        self.pending = Some(PendingTransition {
            token,
            target: index,
            origin: TransitionOrigin::Gesture,
        });
        Some(token)
    }

    /// Raw container offset divided by the page width, in `0.0..=2.0`.
    pub fn offset_changed(&mut self, raw_offset_fraction: f64) {
        let Some(base) = self.selection.base_index else {
            return;
        };

        let sample = resolve(raw_offset_fraction, base, self.selection.pending_index_delta);
        self.last_sample = Some(sample);
        tracing::trace!(
            raw = raw_offset_fraction,
            from = sample.from,
            to = sample.to,
            progress = sample.progress,
            "Page offset sample"
        );

        if let Some((from, to)) = sample.indices(self.strip.len()) {
            self.strip.observe_progress(from, to, sample.progress);
        }
    }

    /// The finger lifted. Without deceleration the scroll is already over.
    pub fn drag_ended(&mut self, will_decelerate: bool) {
        if self.phase != GesturePhase::Dragging {
            return;
        }
        self.enter(GesturePhase::Settling);
        if !will_decelerate {
            self.finish_scroll();
        }
    }

    pub fn deceleration_ended(&mut self) {
        self.finish_scroll();
    }

    /// Outcome of a container request or gesture transition.
    ///
    /// Stale tokens are ignored. `completed = false` drops the pending
    /// transition without touching the selection.
    pub fn transition_finished(&mut self, token: TransitionToken, completed: bool) {
        let Some(pending) = self.pending.filter(|p| p.token == token) else {
            tracing::debug!(token = %token, "Ignoring stale transition completion");
            return;
        };
        self.pending = None;

        if !completed {
            tracing::debug!(token = %token, target = pending.target, "Transition interrupted");
            if pending.origin == TransitionOrigin::Jump {
                self.clear_transition();
            }
            if matches!(self.phase, GesturePhase::Settling | GesturePhase::Jumping) {
                self.enter(GesturePhase::Idle);
            }
            return;
        }

        self.commit(pending);
    }

    fn commit(&mut self, pending: PendingTransition) {
        let previous = self.selection.selected_index;
        let index = pending.target;
        self.selection.selected_index = index;
        self.selection.pending_index_delta = None;
        self.enter(GesturePhase::Committed);

        match pending.origin {
            TransitionOrigin::Jump => self.clear_transition(),
            TransitionOrigin::Gesture => {
                // The container recenters its window on the new page
                if self.selection.base_index.is_some() {
                    self.selection.base_index = Some(index);
                    self.strip.select_immediate(index);
                } else {
                    self.strip.end_transition(index);
                }
            }
        }

        tracing::info!(from = previous, to = index, "Committed page selection");

        if index != previous {
            if let Some(listener) = self.listener.as_mut() {
                listener(index);
            }
        }
        self.enter(GesturePhase::Idle);
    }

    /// Scrolling stopped. A gesture whose outcome is still pending keeps
    /// settling until `transition_finished` arrives.
    fn finish_scroll(&mut self) {
        if self.phase == GesturePhase::Jumping {
            return;
        }
        self.clear_transition();
        let gesture_pending = self
            .pending
            .is_some_and(|p| p.origin == TransitionOrigin::Gesture);
        if self.phase == GesturePhase::Settling && !gesture_pending {
            self.enter(GesturePhase::Idle);
        }
    }

    fn clear_transition(&mut self) {
        self.selection.base_index = None;
        self.selection.strip_base_offset = None;
        self.selection.pending_index_delta = None;
        self.strip.end_transition(self.selection.selected_index);
    }

    fn supersede_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(
                token = %pending.token,
                target = pending.target,
                "Superseded pending transition"
            );
        }
    }

    fn next_token(&mut self) -> TransitionToken {
        self.generation += 1;
        TransitionToken::new(self.generation)
    }

    fn install_pages(&mut self, pages: Vec<P>, animated: bool) {
        self.pages = pages;
        self.reset_selection();
        tracing::info!(count = self.pages.len(), "Installed pages");
        self.show_first_page(animated);
    }

    /// The token is not tracked as pending; the selection is already 0.
    fn show_first_page(&mut self, animated: bool) {
        if self.pages.is_empty() {
            return;
        }
        let token = self.next_token();
        self.container.set_pages(
            std::slice::from_ref(&self.pages[0]),
            NavigationDirection::Forward,
            animated,
            token,
        );
    }

    fn reset_selection(&mut self) {
        self.supersede_pending();
        self.selection = SelectionState::default();
        self.last_sample = None;
        self.strip.end_transition(0);
        self.enter(GesturePhase::Idle);
    }

    fn enter(&mut self, next: GesturePhase) {
        if !self.phase.can_transition_to(next) {
            tracing::warn!(from = %self.phase, to = %next, "Unexpected gesture phase transition");
        }
        if self.phase != next {
            tracing::debug!(from = %self.phase, to = %next, "Gesture phase transition");
        }
        self.phase = next;
    }
}

impl<P, C> fmt::Debug for PageCoordinator<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageCoordinator")
            .field("pages", &self.pages.len())
            .field("selection", &self.selection)
            .field("phase", &self.phase)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tabpager_strip::{LayoutMode, SelectionStyle, TabStripConfig};

    #[derive(Debug, Clone, PartialEq)]
    struct Request {
        pages: Vec<&'static str>,
        direction: NavigationDirection,
        animated: bool,
        token: TransitionToken,
    }

    #[derive(Default)]
    struct RecordingContainer {
        requests: Vec<Request>,
    }

    impl PageContainer<&'static str> for RecordingContainer {
        fn set_pages(
            &mut self,
            pages: &[&'static str],
            direction: NavigationDirection,
            animated: bool,
            token: TransitionToken,
        ) {
            self.requests.push(Request {
                pages: pages.to_vec(),
                direction,
                animated,
                token,
            });
        }
    }

    const PAGES: [&str; 5] = ["one", "two", "three", "four", "five"];

    fn coordinator(style: SelectionStyle) -> (PageCoordinator<&'static str, RecordingContainer>, Rc<RefCell<Vec<usize>>>) {
        let config = TabStripConfig {
            layout_mode: LayoutMode::Fixed,
            selection_style: style,
            ..TabStripConfig::default()
        };
        let mut strip = TabStrip::with_default_factory(config);
        strip.set_viewport_width(500.0);

        let mut coordinator = PageCoordinator::new(strip, RecordingContainer::default());
        let items = PAGES.iter().map(|p| TabItem::with_label(*p)).collect();
        coordinator.set_content(items, PAGES.to_vec(), false).unwrap();

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        coordinator.on_selection_changed(move |index| sink.borrow_mut().push(index));
        (coordinator, events)
    }

    fn assert_sample(sample: Option<ProgressSample>, from: isize, to: isize, progress: f64) {
        let sample = sample.expect("sample forwarded");
        assert_eq!((sample.from, sample.to), (from, to));
        assert!((sample.progress - progress).abs() < 1e-9, "{:?}", sample);
    }

    /// Drag from index 0 to `index` one page at a time.
    fn swipe_to(coordinator: &mut PageCoordinator<&'static str, RecordingContainer>, index: usize) {
        while coordinator.selected_index() < index {
            let target = coordinator.selected_index() + 1;
            coordinator.drag_began();
            coordinator.offset_changed(1.5);
            let token = coordinator.will_transition_to(target).unwrap();
            coordinator.drag_ended(true);
            coordinator.offset_changed(2.0);
            coordinator.transition_finished(token, true);
            coordinator.deceleration_ended();
        }
    }

    #[test]
    fn test_set_content_shows_first_page() {
        let (coordinator, _) = coordinator(SelectionStyle::Line);
        let requests = &coordinator.container().requests;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].pages, vec!["one"]);
        assert_eq!(requests[0].direction, NavigationDirection::Forward);
        assert!(!requests[0].animated);
        assert_eq!(coordinator.selected_index(), 0);
        assert_eq!(coordinator.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_count_mismatch_is_rejected() {
        let (mut coordinator, _) = coordinator(SelectionStyle::Line);

        let err = coordinator.set_pages(vec!["a", "b"], false).unwrap_err();
        assert_eq!(err, PagerError::CountMismatch { tabs: 5, pages: 2 });

        let err = coordinator.set_tabs(vec![TabItem::with_label("solo")]).unwrap_err();
        assert_eq!(err, PagerError::CountMismatch { tabs: 1, pages: 5 });

        let err = coordinator
            .set_content(vec![TabItem::with_label("a")], vec!["a", "b"], false)
            .unwrap_err();
        assert_eq!(err, PagerError::CountMismatch { tabs: 1, pages: 2 });

        // Nothing was replaced
        assert_eq!(coordinator.pages().len(), 5);
        assert_eq!(coordinator.strip().len(), 5);
    }

    #[test]
    fn test_drag_commit_emits_once() {
        let (mut coordinator, events) = coordinator(SelectionStyle::Line);
        swipe_to(&mut coordinator, 1);
        events.borrow_mut().clear();

        coordinator.drag_began();
        assert_eq!(coordinator.phase(), GesturePhase::Dragging);

        coordinator.offset_changed(1.0);
        assert_sample(coordinator.last_sample(), 1, 1, 1.0);
        coordinator.offset_changed(1.3);
        assert_sample(coordinator.last_sample(), 1, 2, 0.3);
        let token = coordinator.will_transition_to(2).unwrap();
        coordinator.offset_changed(1.6);
        assert_sample(coordinator.last_sample(), 1, 2, 0.6);
        coordinator.drag_ended(true);
        assert_eq!(coordinator.phase(), GesturePhase::Settling);
        coordinator.offset_changed(2.0);
        assert_sample(coordinator.last_sample(), 1, 2, 1.0);

        coordinator.transition_finished(token, true);
        coordinator.deceleration_ended();

        assert_eq!(coordinator.selected_index(), 2);
        assert_eq!(*events.borrow(), vec![2]);
        assert_eq!(coordinator.phase(), GesturePhase::Idle);
        assert_eq!(coordinator.strip().selected_index(), 2);
        assert_eq!(coordinator.strip().indicator().x(), 200.0);

        // A duplicate completion is stale
        coordinator.transition_finished(token, true);
        assert_eq!(*events.borrow(), vec![2]);
    }

    #[test]
    fn test_indicator_tracks_drag() {
        let (mut coordinator, _) = coordinator(SelectionStyle::Line);
        swipe_to(&mut coordinator, 1);

        coordinator.drag_began();
        coordinator.offset_changed(1.5);
        // Halfway between button 1 (x 100) and button 2 (x 200)
        assert_eq!(coordinator.strip().indicator().x(), 150.0);

        coordinator.offset_changed(0.75);
        // Reversed toward button 0
        assert_sample(coordinator.last_sample(), 1, 0, 0.25);
        assert_eq!(coordinator.strip().indicator().x(), 75.0);
    }

    #[test]
    fn test_completion_before_deceleration_rebases() {
        let (mut coordinator, _) = coordinator(SelectionStyle::Line);
        coordinator.drag_began();
        coordinator.offset_changed(1.4);
        let token = coordinator.will_transition_to(1).unwrap();
        coordinator.drag_ended(true);
        coordinator.transition_finished(token, true);

        // Window recentered on page 1: 1.0 now means "at page 1"
        coordinator.offset_changed(1.0);
        assert_sample(coordinator.last_sample(), 1, 1, 1.0);
        assert_eq!(coordinator.strip().indicator().x(), 100.0);

        coordinator.deceleration_ended();
        assert_eq!(coordinator.selection().base_index, None);
        assert_eq!(coordinator.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_cancelled_drag_keeps_selection() {
        let (mut coordinator, events) = coordinator(SelectionStyle::HighlightAndLine);
        coordinator.drag_began();
        coordinator.offset_changed(1.7);
        let token = coordinator.will_transition_to(1).unwrap();
        coordinator.drag_ended(true);
        coordinator.offset_changed(1.2);
        coordinator.offset_changed(1.0);
        coordinator.deceleration_ended();
        // Still waiting on the container's verdict
        assert_eq!(coordinator.phase(), GesturePhase::Settling);

        coordinator.transition_finished(token, false);

        assert_eq!(coordinator.selected_index(), 0);
        assert_eq!(coordinator.phase(), GesturePhase::Idle);
        assert!(events.borrow().is_empty());
        assert!(coordinator.strip().button(0).unwrap().is_highlighted());
        assert!(!coordinator.strip().button(1).unwrap().is_highlighted());
    }

    #[test]
    fn test_drag_without_target_returns_to_idle() {
        let (mut coordinator, _) = coordinator(SelectionStyle::Line);
        coordinator.drag_began();
        // Overscroll before the first page
        coordinator.offset_changed(0.8);
        assert_sample(coordinator.last_sample(), 0, -1, 0.2);
        assert_eq!(coordinator.strip().indicator().x(), 0.0);

        coordinator.drag_ended(false);
        assert_eq!(coordinator.phase(), GesturePhase::Idle);
        assert_eq!(coordinator.selection().strip_base_offset, None);
    }

    #[test]
    fn test_go_to_commits_on_completion() {
        let (mut coordinator, events) = coordinator(SelectionStyle::Line);
        let token = coordinator.go_to(3, true).unwrap();

        assert_eq!(coordinator.phase(), GesturePhase::Jumping);
        assert_eq!(coordinator.selection().pending_index_delta, Some(3));
        let request = coordinator.container().requests.last().unwrap().clone();
        assert_eq!(request.pages, vec!["four"]);
        assert_eq!(request.direction, NavigationDirection::Forward);
        assert_eq!(request.token, token);

        // Container animates one page width; the known delta maps it to 3
        coordinator.offset_changed(1.5);
        assert_sample(coordinator.last_sample(), 0, 3, 0.5);
        assert_eq!(coordinator.strip().indicator().x(), 150.0);

        coordinator.transition_finished(token, true);
        assert_eq!(coordinator.selected_index(), 3);
        assert_eq!(*events.borrow(), vec![3]);
        assert_eq!(coordinator.phase(), GesturePhase::Idle);
        assert_eq!(coordinator.strip().indicator().x(), 300.0);
    }

    #[test]
    fn test_go_to_reverse_direction() {
        let (mut coordinator, _) = coordinator(SelectionStyle::Line);
        swipe_to(&mut coordinator, 3);
        coordinator.go_to(1, false).unwrap();
        let request = coordinator.container().requests.last().unwrap();
        assert_eq!(request.direction, NavigationDirection::Reverse);
        assert!(!request.animated);
    }

    #[test]
    fn test_interrupted_go_to_is_noop() {
        let (mut coordinator, events) = coordinator(SelectionStyle::Line);
        let token = coordinator.go_to(2, true).unwrap();
        coordinator.transition_finished(token, false);

        assert_eq!(coordinator.selected_index(), 0);
        assert!(events.borrow().is_empty());
        assert_eq!(coordinator.phase(), GesturePhase::Idle);
        assert_eq!(coordinator.selection(), &SelectionState::default());
    }

    #[test]
    fn test_go_to_supersedes_settling_commit() {
        let (mut coordinator, events) = coordinator(SelectionStyle::Line);
        swipe_to(&mut coordinator, 1);
        events.borrow_mut().clear();

        coordinator.drag_began();
        coordinator.offset_changed(1.6);
        let drag_token = coordinator.will_transition_to(2).unwrap();
        coordinator.drag_ended(true);
        assert_eq!(coordinator.phase(), GesturePhase::Settling);

        let jump_token = coordinator.go_to(3, true).unwrap();
        assert_ne!(drag_token, jump_token);

        // The superseded gesture reports in late
        coordinator.transition_finished(drag_token, true);
        assert_eq!(coordinator.selected_index(), 1);

        coordinator.transition_finished(jump_token, true);
        assert_eq!(coordinator.selected_index(), 3);
        assert_eq!(*events.borrow(), vec![3]);
    }

    #[test]
    fn test_drag_supersedes_jump() {
        let (mut coordinator, events) = coordinator(SelectionStyle::Line);
        let jump_token = coordinator.go_to(4, true).unwrap();
        coordinator.drag_began();
        assert_eq!(coordinator.phase(), GesturePhase::Dragging);
        assert_eq!(coordinator.selection().pending_index_delta, None);

        coordinator.transition_finished(jump_token, true);
        assert_eq!(coordinator.selected_index(), 0);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_drag_supersedes_settling_gesture() {
        let (mut coordinator, events) = coordinator(SelectionStyle::Line);
        swipe_to(&mut coordinator, 1);
        events.borrow_mut().clear();

        coordinator.drag_began();
        coordinator.offset_changed(1.6);
        let token = coordinator.will_transition_to(2).unwrap();
        coordinator.drag_ended(true);
        assert_eq!(coordinator.phase(), GesturePhase::Settling);

        // The user grabs the pages again before the settle completes
        coordinator.drag_began();
        assert_eq!(coordinator.phase(), GesturePhase::Dragging);
        assert_eq!(coordinator.selection().base_index, Some(1));

        coordinator.transition_finished(token, true);
        assert_eq!(coordinator.selected_index(), 1);
        assert!(events.borrow().is_empty());
        assert_eq!(coordinator.phase(), GesturePhase::Dragging);
    }

    #[test]
    fn test_go_to_same_index_is_noop() {
        let (mut coordinator, _) = coordinator(SelectionStyle::Line);
        assert_eq!(coordinator.go_to(0, true), None);
        assert_eq!(coordinator.go_to(9, true), None);
        assert_eq!(coordinator.container().requests.len(), 1);
    }

    #[test]
    fn test_tap_routes_through_go_to() {
        let (mut coordinator, events) = coordinator(SelectionStyle::Highlight);
        let token = coordinator.tap(2).unwrap();
        assert_eq!(coordinator.strip().selected_index(), 2);
        assert_eq!(coordinator.selected_index(), 0);

        coordinator.transition_finished(token, true);
        assert_eq!(*events.borrow(), vec![2]);
        assert!(coordinator.strip().button(2).unwrap().is_highlighted());
        assert_eq!(coordinator.tap(7), None);
    }

    #[test]
    fn test_set_selected_index_triggers_jump() {
        let (mut coordinator, _) = coordinator(SelectionStyle::Line);
        let token = coordinator.set_selected_index(4).unwrap();
        assert_eq!(coordinator.container().requests.last().unwrap().token, token);
    }

    #[test]
    fn test_offsets_ignored_when_idle() {
        let (mut coordinator, _) = coordinator(SelectionStyle::Line);
        coordinator.offset_changed(1.5);
        assert_eq!(coordinator.last_sample(), None);
        assert_eq!(coordinator.strip().indicator().x(), 0.0);
    }

    #[test]
    fn test_will_transition_outside_gesture_is_ignored() {
        let (mut coordinator, _) = coordinator(SelectionStyle::Line);
        assert_eq!(coordinator.will_transition_to(1), None);
        coordinator.drag_began();
        assert_eq!(coordinator.will_transition_to(8), None);
    }

    #[test]
    fn test_neighbour_pages() {
        let (coordinator, _) = coordinator(SelectionStyle::Line);
        assert_eq!(coordinator.page_before(0), None);
        assert_eq!(coordinator.page_after(0), Some(&"two"));
        assert_eq!(coordinator.page_before(4), Some(&"four"));
        assert_eq!(coordinator.page_after(4), None);
    }

    #[test]
    fn test_replacing_tabs_resets_selection() {
        let (mut coordinator, events) = coordinator(SelectionStyle::Line);
        swipe_to(&mut coordinator, 2);
        let token = coordinator.go_to(3, true).unwrap();
        coordinator.transition_finished(token, true);
        events.borrow_mut().clear();
        let shown = coordinator.container().requests.len();

        let items = ["a", "b", "c", "d", "e"].iter().map(|l| TabItem::with_label(*l)).collect();
        coordinator.set_tabs(items).unwrap();
        assert_eq!(coordinator.selected_index(), 0);
        assert_eq!(coordinator.strip().selected_index(), 0);

        // The container is sent back to the first page
        let requests = &coordinator.container().requests;
        assert_eq!(requests.len(), shown + 1);
        assert_eq!(requests[shown].pages, vec!["one"]);
        assert!(!requests[shown].animated);

        // ...and navigation away from it and back still works
        let token = coordinator.tap(1).unwrap();
        coordinator.transition_finished(token, true);
        let token = coordinator.tap(0).unwrap();
        coordinator.transition_finished(token, true);
        assert_eq!(coordinator.container().requests.last().unwrap().pages, vec!["one"]);
        assert_eq!(*events.borrow(), vec![1, 0]);
    }

    #[test]
    fn test_identical_tabs_keep_page() {
        let (mut coordinator, _) = coordinator(SelectionStyle::Line);
        swipe_to(&mut coordinator, 2);
        let shown = coordinator.container().requests.len();

        let items = PAGES.iter().map(|p| TabItem::with_label(*p)).collect();
        coordinator.set_tabs(items).unwrap();
        assert_eq!(coordinator.selected_index(), 2);
        assert_eq!(coordinator.container().requests.len(), shown);
    }

    #[test]
    fn test_tap_without_pages_leaves_strip() {
        let config = TabStripConfig {
            layout_mode: LayoutMode::Fixed,
            selection_style: SelectionStyle::Line,
            ..TabStripConfig::default()
        };
        let mut strip = TabStrip::with_default_factory(config);
        strip.set_viewport_width(500.0);
        let mut coordinator: PageCoordinator<&'static str, RecordingContainer> =
            PageCoordinator::new(strip, RecordingContainer::default());
        coordinator
            .set_tabs(PAGES.iter().map(|p| TabItem::with_label(*p)).collect())
            .unwrap();

        assert_eq!(coordinator.tap(3), None);
        assert_eq!(coordinator.strip().selected_index(), 0);

        // A later style switch snaps to the real selection, not the tapped tab
        coordinator.strip_mut().set_selection_style(SelectionStyle::HighlightAndLine);
        assert_eq!(coordinator.strip().indicator().x(), 0.0);
        assert!(coordinator.strip().button(0).unwrap().is_highlighted());
        assert!(!coordinator.strip().button(3).unwrap().is_highlighted());
        assert!(coordinator.container().requests.is_empty());
    }
}
