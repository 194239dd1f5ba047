//! Tab strip configuration

use serde::{Deserialize, Serialize};

/// How buttons share the strip's width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Equal widths filling the visible width
    Fixed,
    /// Intrinsic widths, the strip scrolls horizontally
    #[default]
    Scrollable,
}

/// How the active tab is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionStyle {
    /// Button switches to its selection colors / image
    Highlight,
    /// Indicator line under (or over) the button
    #[default]
    Line,
    HighlightAndLine,
}

impl SelectionStyle {
    pub fn shows_highlight(&self) -> bool {
        matches!(self, SelectionStyle::Highlight | SelectionStyle::HighlightAndLine)
    }

    pub fn shows_line(&self) -> bool {
        matches!(self, SelectionStyle::Line | SelectionStyle::HighlightAndLine)
    }
}

/// Strip edge the indicator line is pinned to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorEdge {
    Top,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    u8::MAX
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    /// Empty means the platform system font
    pub family: String,
    pub size: f64,
}

impl Font {
    pub fn system(size: f64) -> Self {
        Self {
            family: String::new(),
            size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(14.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabStripConfig {
    pub layout_mode: LayoutMode,
    pub selection_style: SelectionStyle,
    /// Strip height in points
    pub height: f64,
    pub indicator_thickness: f64,
    pub indicator_color: Color,
    pub indicator_edge: IndicatorEdge,
    /// Line spans the button's content area instead of the whole button
    pub indicator_follows_content_inset: bool,
    /// Fraction of the span covered by the line, centered; in (0, 1]
    pub indicator_width_multiplier: f64,
    pub button_font: Font,
    pub button_text_color: Color,
    /// Title color while pressed
    pub button_highlight_color: Option<Color>,
    /// Title color while carrying the selection highlight
    pub button_selection_color: Option<Color>,
    pub button_insets: EdgeInsets,
}

impl TabStripConfig {
    pub const DEFAULT_HEIGHT: f64 = 44.0;
    pub const DEFAULT_BUTTON_INSETS: EdgeInsets = EdgeInsets::new(8.0, 20.0, 8.0, 20.0);
}

impl Default for TabStripConfig {
    fn default() -> Self {
        Self {
            layout_mode: LayoutMode::Scrollable,
            selection_style: SelectionStyle::Line,
            height: Self::DEFAULT_HEIGHT,
            indicator_thickness: 4.0,
            indicator_color: Color::BLACK,
            indicator_edge: IndicatorEdge::Bottom,
            indicator_follows_content_inset: false,
            indicator_width_multiplier: 1.0,
            button_font: Font::default(),
            button_text_color: Color::BLACK,
            button_highlight_color: None,
            button_selection_color: None,
            button_insets: Self::DEFAULT_BUTTON_INSETS,
        }
    }
}
