//! Tab buttons and the host-supplied button factory

use crate::config::{Color, EdgeInsets, Font, TabStripConfig};
use crate::geometry::Rect;
use crate::item::{ImageRef, TabItem};

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub font: Font,
    pub insets: EdgeInsets,
    pub text_color: Color,
    pub highlight_color: Option<Color>,
    pub selection_color: Option<Color>,
}

impl ButtonStyle {
    pub fn from_config(config: &TabStripConfig) -> Self {
        Self {
            font: config.button_font.clone(),
            insets: config.button_insets,
            text_color: config.button_text_color,
            highlight_color: config.button_highlight_color,
            selection_color: config.button_selection_color,
        }
    }
}

/// A button in the strip, tagged with the index of the item it renders.
#[derive(Debug, Clone)]
pub struct TabButton {
    index: usize,
    item: TabItem,
    style: ButtonStyle,
    frame: Rect,
    highlighted: bool,
    pressed: bool,
}

impl TabButton {
    pub fn new(index: usize, item: TabItem, style: ButtonStyle) -> Self {
        Self {
            index,
            item,
            style,
            frame: Rect::ZERO,
            highlighted: false,
            pressed: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn item(&self) -> &TabItem {
        &self.item
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ButtonStyle {
        &mut self.style
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Frame minus the horizontal content insets.
    pub fn content_frame(&self) -> Rect {
        let insets = self.style.insets;
        Rect::new(
            self.frame.x + insets.left,
            self.frame.y,
            (self.frame.width - insets.horizontal()).max(0.0),
            self.frame.height,
        )
    }

    /// Selection highlight, driven by the highlight selection styles.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Touch-down state, driven by the host.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn title_color(&self) -> Color {
        let state_color = if self.pressed {
            self.style.highlight_color
        } else if self.highlighted {
            self.style.selection_color
        } else {
            None
        };
        state_color.unwrap_or(self.style.text_color)
    }

    pub fn current_image(&self) -> Option<&ImageRef> {
        let state_image = if self.pressed {
            self.item.highlight_image.as_ref()
        } else if self.highlighted {
            self.item.selection_image.as_ref()
        } else {
            None
        };
        state_image.or(self.item.image.as_ref())
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub(crate) fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub(crate) fn clear_state(&mut self) {
        self.highlighted = false;
        self.pressed = false;
    }
}

/// Host capability for measuring and customising buttons.
///
/// The strip only lays buttons out; text shaping lives with the host.
pub trait ButtonFactory {
    /// Width of the item's content (title and image) without insets.
    fn content_width(&self, item: &TabItem, font: &Font) -> f64;

    /// Per-button customisation, called once right after a button is built.
    fn configure_button(&self, _button: &mut TabButton) {}
}

/// Measures titles with an average glyph width. Good enough for headless
/// use and tests; hosts with a text engine supply their own factory.
#[derive(Debug, Clone, Copy)]
pub struct EstimatedWidthFactory {
    /// Average glyph advance as a fraction of the font size
    pub glyph_ratio: f64,
    /// Gap between image and title
    pub spacing: f64,
}

impl Default for EstimatedWidthFactory {
    fn default() -> Self {
        Self {
            glyph_ratio: 0.55,
            spacing: 4.0,
        }
    }
}

impl ButtonFactory for EstimatedWidthFactory {
    fn content_width(&self, item: &TabItem, font: &Font) -> f64 {
        let title = item
            .label
            .as_deref()
            .map(|label| label.chars().count() as f64 * font.size * self.glyph_ratio)
            .unwrap_or(0.0);
        let image = item.image.as_ref().map(|image| image.width).unwrap_or(0.0);
        let spacing = if title > 0.0 && image > 0.0 { self.spacing } else { 0.0 };
        (title + image + spacing).ceil()
    }
}
