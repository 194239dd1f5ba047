//! Tab bar controller
//!
//! Combines the tab strip, the page coordinator and the surrounding layout
//! (header view, tab bar position) behind one host-facing object.

use tabpager_pager::{PageContainer, PageCoordinator, TransitionToken};
use tabpager_strip::{ButtonFactory, EstimatedWidthFactory, Rect, TabItem, TabStrip};

use crate::config::TabBarConfig;
use crate::layout::{ControllerLayout, TabBarPosition};
use crate::Result;

/// Host header view shown next to the tab bar. Only its height matters
/// for layout; the host keeps the view itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderView {
    pub height: f64,
}

impl HeaderView {
    pub fn new(height: f64) -> Self {
        Self { height }
    }
}

#[derive(Debug)]
pub struct TabBarController<P, C> {
    pager: PageCoordinator<P, C>,
    position: TabBarPosition,
    header: Option<HeaderView>,
    bounds: Rect,
}

impl<P, C: PageContainer<P>> TabBarController<P, C> {
    pub fn new(config: TabBarConfig, container: C) -> Result<Self> {
        Self::with_factory(config, Box::new(EstimatedWidthFactory::default()), container)
    }

    pub fn with_factory(config: TabBarConfig, factory: Box<dyn ButtonFactory>, container: C) -> Result<Self> {
        config.validate()?;
        let strip = TabStrip::new(config.strip, factory);

        Ok(Self {
            pager: PageCoordinator::new(strip, container),
            position: config.position,
            header: None,
            bounds: Rect::ZERO,
        })
    }

    pub fn tab_bar(&self) -> &TabStrip {
        self.pager.strip()
    }

    /// Runtime appearance changes go through the strip's setters.
    pub fn tab_bar_mut(&mut self) -> &mut TabStrip {
        self.pager.strip_mut()
    }

    pub fn pager(&self) -> &PageCoordinator<P, C> {
        &self.pager
    }

    /// Gesture callbacks from the page container are forwarded here.
    pub fn pager_mut(&mut self) -> &mut PageCoordinator<P, C> {
        &mut self.pager
    }

    pub fn on_selection_changed(&mut self, listener: impl FnMut(usize) + 'static) {
        self.pager.on_selection_changed(listener);
    }

    pub fn set_tabs(&mut self, items: Vec<TabItem>) -> Result<()> {
        Ok(self.pager.set_tabs(items)?)
    }

    pub fn set_pages(&mut self, pages: Vec<P>, animated: bool) -> Result<()> {
        Ok(self.pager.set_pages(pages, animated)?)
    }

    pub fn set_content(&mut self, items: Vec<TabItem>, pages: Vec<P>, animated: bool) -> Result<()> {
        Ok(self.pager.set_content(items, pages, animated)?)
    }

    pub fn pages(&self) -> &[P] {
        self.pager.pages()
    }

    pub fn selected_index(&self) -> usize {
        self.pager.selected_index()
    }

    pub fn set_selected_index(&mut self, index: usize) -> Option<TransitionToken> {
        self.pager.set_selected_index(index)
    }

    pub fn tap_tab(&mut self, index: usize) -> Option<TransitionToken> {
        self.pager.tap(index)
    }

    pub fn header_view(&self) -> Option<HeaderView> {
        self.header
    }

    pub fn set_header_view(&mut self, header: Option<HeaderView>) {
        self.header = header;
        tracing::debug!(height = header.map(|h| h.height), "Header view changed");
    }

    pub fn tab_bar_position(&self) -> TabBarPosition {
        self.position
    }

    pub fn set_tab_bar_position(&mut self, position: TabBarPosition) {
        if self.position != position {
            self.position = position;
            tracing::debug!(?position, "Tab bar position changed");
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The controller's safe area changed (first layout or rotation).
    pub fn resize(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.pager.strip_mut().set_viewport_width(bounds.width);
    }

    pub fn layout(&self) -> ControllerLayout {
        ControllerLayout::compute(
            self.bounds,
            self.header.map(|h| h.height).unwrap_or(0.0),
            self.tab_bar().config().height,
            self.position,
        )
    }

    /// Apply a whole configuration at runtime. Only settings that differ
    /// from the current ones touch the strip.
    pub fn apply_config(&mut self, config: &TabBarConfig) -> Result<()> {
        config.validate()?;
        self.set_tab_bar_position(config.position);

        let current = self.tab_bar().config().clone();
        let next = &config.strip;
        let strip = self.pager.strip_mut();

        if current.layout_mode != next.layout_mode {
            strip.set_layout_mode(next.layout_mode);
        }
        if current.selection_style != next.selection_style {
            strip.set_selection_style(next.selection_style);
        }
        if current.indicator_thickness != next.indicator_thickness {
            strip.set_indicator_thickness(next.indicator_thickness);
        }
        if current.indicator_color != next.indicator_color {
            strip.set_indicator_color(next.indicator_color);
        }
        if current.indicator_edge != next.indicator_edge {
            strip.set_indicator_edge(next.indicator_edge);
        }
        if current.indicator_follows_content_inset != next.indicator_follows_content_inset {
            strip.set_indicator_follows_content_inset(next.indicator_follows_content_inset);
        }
        if current.indicator_width_multiplier != next.indicator_width_multiplier {
            strip.set_indicator_width_multiplier(next.indicator_width_multiplier);
        }
        if current.button_font != next.button_font {
            strip.set_button_font(next.button_font.clone());
        }
        if current.button_insets != next.button_insets {
            strip.set_button_insets(next.button_insets);
        }
        if current.button_text_color != next.button_text_color {
            strip.set_button_text_color(next.button_text_color);
        }
        if current.button_highlight_color != next.button_highlight_color {
            strip.set_button_highlight_color(next.button_highlight_color);
        }
        if current.button_selection_color != next.button_selection_color {
            strip.set_button_selection_color(next.button_selection_color);
        }
        if current.height != next.height {
            tracing::warn!(
                current = current.height,
                requested = next.height,
                "Tab bar height is fixed at construction, ignoring"
            );
        }

        Ok(())
    }
}
