//! Tab strip
//!
//! Buttons are kept in an owned vector indexed in parallel with `items`, so
//! index `i` always addresses the button built from `items[i]`.
//!
//! Every method that takes an index treats an out-of-range value as a no-op:
//! indices arrive from continuous gesture input and may be stale for a frame.

use tabpager_progress::{auto_scroll_x, lerp};

use crate::button::{ButtonFactory, ButtonStyle, EstimatedWidthFactory, TabButton};
use crate::config::{Color, EdgeInsets, Font, IndicatorEdge, LayoutMode, SelectionStyle, TabStripConfig};
use crate::geometry::Rect;
use crate::indicator::Indicator;
use crate::item::TabItem;

pub struct TabStrip {
    config: TabStripConfig,
    factory: Box<dyn ButtonFactory>,
    items: Vec<TabItem>,
    buttons: Vec<TabButton>,
    indicator: Indicator,
    /// Derived copy of the coordinator's selection; only a tap sets it locally
    selected_index: usize,
    viewport_width: f64,
    content_width: f64,
    content_offset_x: f64,
    /// Strip scroll offset captured when a page transition started
    transition_base: Option<f64>,
}

impl TabStrip {
    pub fn new(config: TabStripConfig, factory: Box<dyn ButtonFactory>) -> Self {
        let indicator = Indicator::from_config(&config);
        Self {
            config,
            factory,
            items: Vec::new(),
            buttons: Vec::new(),
            indicator,
            selected_index: 0,
            viewport_width: 0.0,
            content_width: 0.0,
            content_offset_x: 0.0,
            transition_base: None,
        }
    }

    pub fn with_default_factory(config: TabStripConfig) -> Self {
        Self::new(config, Box::new(EstimatedWidthFactory::default()))
    }

    pub fn config(&self) -> &TabStripConfig {
        &self.config
    }

    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    pub fn buttons(&self) -> &[TabButton] {
        &self.buttons
    }

    pub fn button(&self, index: usize) -> Option<&TabButton> {
        self.buttons.get(index)
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    pub fn indicator_frame(&self) -> Rect {
        self.indicator.frame(self.config.height)
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn content_offset_x(&self) -> f64 {
        self.content_offset_x
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition_base.is_some()
    }

    /// Replace all items. Rebuilds every button and resets the selection to
    /// the first tab. Returns `false` when `items` equals the current list,
    /// in which case nothing changes.
    pub fn set_items(&mut self, items: Vec<TabItem>) -> bool {
        if items == self.items {
            tracing::debug!(count = items.len(), "Tab items unchanged, skipping rebuild");
            return false;
        }

        self.items = items;
        self.selected_index = 0;
        self.transition_base = None;
        self.content_offset_x = 0.0;
        self.rebuild_buttons();
        self.layout_buttons();
        self.select_immediate(0);

        tracing::info!(count = self.items.len(), "Rebuilt tab buttons");

        true
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        if self.config.layout_mode == mode {
            return;
        }
        self.config.layout_mode = mode;
        self.layout_buttons();
        self.reset_indicator_and_scroll();
    }

    pub fn set_selection_style(&mut self, style: SelectionStyle) {
        let previous = self.config.selection_style;
        if previous == style {
            return;
        }

        if previous.shows_highlight() && !style.shows_highlight() {
            self.buttons.iter_mut().for_each(TabButton::clear_state);
        }
        if previous.shows_line() && !style.shows_line() {
            self.indicator.set_hidden(true);
        }

        self.config.selection_style = style;
        if style.shows_line() {
            self.indicator.set_hidden(false);
        }

        let index = self.selected_index;
        self.apply_progress(index, index, 1.0);
    }

    pub fn set_indicator_thickness(&mut self, thickness: f64) {
        self.config.indicator_thickness = thickness;
        self.indicator.set_thickness(thickness);
    }

    pub fn set_indicator_color(&mut self, color: Color) {
        self.config.indicator_color = color;
        self.indicator.set_color(color);
    }

    pub fn set_indicator_edge(&mut self, edge: IndicatorEdge) {
        self.config.indicator_edge = edge;
        self.indicator.set_edge(edge);
    }

    pub fn set_indicator_follows_content_inset(&mut self, follows: bool) {
        self.config.indicator_follows_content_inset = follows;
        self.place_indicator_at_selection();
    }

    /// Values outside (0, 1] are clamped.
    pub fn set_indicator_width_multiplier(&mut self, multiplier: f64) {
        self.config.indicator_width_multiplier = if multiplier > 0.0 { multiplier.min(1.0) } else { 1.0 };
        self.place_indicator_at_selection();
    }

    pub fn set_button_font(&mut self, font: Font) {
        self.buttons.iter_mut().for_each(|b| b.style_mut().font = font.clone());
        self.config.button_font = font;
        self.layout_buttons();
        self.reset_indicator_and_scroll();
    }

    pub fn set_button_insets(&mut self, insets: EdgeInsets) {
        self.buttons.iter_mut().for_each(|b| b.style_mut().insets = insets);
        self.config.button_insets = insets;
        self.layout_buttons();
        self.reset_indicator_and_scroll();
    }

    pub fn set_button_text_color(&mut self, color: Color) {
        self.buttons.iter_mut().for_each(|b| b.style_mut().text_color = color);
        self.config.button_text_color = color;
    }

    pub fn set_button_highlight_color(&mut self, color: Option<Color>) {
        self.buttons.iter_mut().for_each(|b| b.style_mut().highlight_color = color);
        self.config.button_highlight_color = color;
    }

    pub fn set_button_selection_color(&mut self, color: Option<Color>) {
        self.buttons.iter_mut().for_each(|b| b.style_mut().selection_color = color);
        self.config.button_selection_color = color;
    }

    /// Visible width changed (e.g. rotation). Buttons are laid out again and
    /// the indicator and scroll offset snap to the selected button.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width.max(0.0);
        self.layout_buttons();
        self.reset_indicator_and_scroll();
    }

    /// Host-driven scroll of the strip itself.
    pub fn set_content_offset_x(&mut self, x: f64) {
        let max = (self.content_width - self.viewport_width).max(0.0);
        self.content_offset_x = x.clamp(0.0, max);
    }

    pub fn set_pressed(&mut self, index: usize, pressed: bool) {
        if let Some(button) = self.buttons.get_mut(index) {
            button.set_pressed(pressed);
        }
    }

    /// A button was tapped. Updates the local selection and returns the
    /// index to report upward; the indicator is left for the caller to move.
    pub fn tap(&mut self, index: usize) -> Option<usize> {
        if index >= self.items.len() {
            tracing::debug!(index, count = self.items.len(), "Ignoring tap outside tab range");
            return None;
        }
        self.selected_index = index;
        Some(index)
    }

    /// Move the selection visuals `progress` of the way from `from` to `to`.
    pub fn observe_progress(&mut self, from: usize, to: usize, progress: f64) {
        if from >= self.buttons.len() || to >= self.buttons.len() {
            tracing::debug!(from, to, count = self.buttons.len(), "Ignoring out-of-range progress");
            return;
        }
        tracing::trace!(from, to, progress, "Tab strip progress");
        self.apply_progress(from, to, progress.clamp(0.0, 1.0));
    }

    /// Jump straight to `index` without a transition.
    pub fn select_immediate(&mut self, index: usize) {
        if index >= self.buttons.len() {
            return;
        }
        self.selected_index = index;
        self.apply_progress(index, index, 1.0);
    }

    /// Start following a page transition. Captures the current scroll offset
    /// so the strip can scroll toward the target proportionally.
    pub fn begin_transition(&mut self) -> f64 {
        self.transition_base = Some(self.content_offset_x);
        self.content_offset_x
    }

    /// Transition over; settle on `index` and make sure it is visible.
    pub fn end_transition(&mut self, index: usize) {
        self.transition_base = None;
        if index < self.buttons.len() {
            self.selected_index = index;
            self.apply_progress(index, index, 1.0);
        }
        self.reset_indicator_and_scroll();
    }

    /// Snap the indicator to the selected button and scroll it into view.
    pub fn reset_indicator_and_scroll(&mut self) {
        let Some(frame) = self.button(self.selected_index).map(TabButton::frame) else {
            return;
        };

        self.place_indicator_at_selection();

        let x = auto_scroll_x(frame.x, frame.width, self.content_offset_x, self.viewport_width);
        self.set_content_offset_x(x);
    }

    fn apply_progress(&mut self, from: usize, to: usize, progress: f64) {
        let style = self.config.selection_style;
        if style.shows_highlight() {
            self.highlight_buttons(from, to, progress);
        }
        if style.shows_line() {
            self.move_indicator(from, to, progress);
        }
        if let Some(base) = self.transition_base {
            self.scroll_toward(to, base, progress);
        }
    }

    /// Binary switch at the midpoint; every other button loses its highlight
    /// so a reversed gesture never leaves a stale one behind.
    fn highlight_buttons(&mut self, from: usize, to: usize, progress: f64) {
        for (index, button) in self.buttons.iter_mut().enumerate() {
            let highlighted = if index == to {
                progress > 0.5
            } else if index == from {
                progress <= 0.5
            } else {
                false
            };
            button.set_highlighted(highlighted);
        }
    }

    fn move_indicator(&mut self, from: usize, to: usize, progress: f64) {
        let (Some(old), Some(new)) = (self.indicator_span(from), self.indicator_span(to)) else {
            return;
        };
        let x = lerp(old.0, new.0, progress);
        let width = lerp(old.1, new.1, progress);
        self.indicator.set_span(x, width);
    }

    fn scroll_toward(&mut self, index: usize, base: f64, progress: f64) {
        if self.config.layout_mode != LayoutMode::Scrollable {
            return;
        }
        let Some(frame) = self.button(index).map(TabButton::frame) else {
            return;
        };
        let target = auto_scroll_x(frame.x, frame.width, base, self.viewport_width);
        self.set_content_offset_x(lerp(base, target, progress).round());
    }

    fn place_indicator_at_selection(&mut self) {
        if !self.config.selection_style.shows_line() {
            return;
        }
        if let Some((x, width)) = self.indicator_span(self.selected_index) {
            self.indicator.set_span(x, width);
        }
    }

    /// Left edge and width the line takes under the button at `index`.
    fn indicator_span(&self, index: usize) -> Option<(f64, f64)> {
        let button = self.buttons.get(index)?;
        let base = if self.config.indicator_follows_content_inset {
            button.content_frame()
        } else {
            button.frame()
        };
        let width = base.width * self.config.indicator_width_multiplier;
        Some((base.x + (base.width - width) / 2.0, width))
    }

    fn rebuild_buttons(&mut self) {
        let style = ButtonStyle::from_config(&self.config);
        let factory = &self.factory;
        self.buttons = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let mut button = TabButton::new(index, item.clone(), style.clone());
                factory.configure_button(&mut button);
                button
            })
            .collect();
    }

    fn layout_buttons(&mut self) {
        let count = self.buttons.len();
        let height = self.config.height;
        let fixed_width = if count > 0 {
            self.viewport_width / count as f64
        } else {
            0.0
        };

        let mut x = 0.0;
        for button in &mut self.buttons {
            let width = match self.config.layout_mode {
                LayoutMode::Fixed => fixed_width,
                LayoutMode::Scrollable => {
                    self.factory.content_width(button.item(), &button.style().font)
                        + button.style().insets.horizontal()
                }
            };
            button.set_frame(Rect::new(x, 0.0, width, height));
            x += width;
        }

        self.content_width = match self.config.layout_mode {
            LayoutMode::Fixed => self.viewport_width,
            LayoutMode::Scrollable => x,
        };
        self.set_content_offset_x(self.content_offset_x);
    }
}

impl std::fmt::Debug for TabStrip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabStrip")
            .field("config", &self.config)
            .field("items", &self.items)
            .field("selected_index", &self.selected_index)
            .field("content_offset_x", &self.content_offset_x)
            .finish_non_exhaustive()
    }
}
