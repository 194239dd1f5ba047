//! Selection indicator line

use crate::config::{Color, IndicatorEdge, TabStripConfig};
use crate::geometry::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    x: f64,
    width: f64,
    thickness: f64,
    edge: IndicatorEdge,
    color: Color,
    hidden: bool,
}

impl Indicator {
    pub(crate) fn from_config(config: &TabStripConfig) -> Self {
        Self {
            x: 0.0,
            width: 0.0,
            thickness: config.indicator_thickness,
            edge: config.indicator_edge,
            color: config.indicator_color,
            hidden: !config.selection_style.shows_line(),
        }
    }

    /// Frame inside a strip of the given height.
    pub fn frame(&self, strip_height: f64) -> Rect {
        let y = match self.edge {
            IndicatorEdge::Top => 0.0,
            IndicatorEdge::Bottom => strip_height - self.thickness,
        };
        Rect::new(self.x, y, self.width, self.thickness)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn edge(&self) -> IndicatorEdge {
        self.edge
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_span(&mut self, x: f64, width: f64) {
        self.x = x.round();
        self.width = width.round();
    }

    pub(crate) fn set_thickness(&mut self, thickness: f64) {
        self.thickness = thickness;
    }

    pub(crate) fn set_edge(&mut self, edge: IndicatorEdge) {
        self.edge = edge;
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}
