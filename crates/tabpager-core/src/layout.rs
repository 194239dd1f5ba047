//! Frame layout for header, tab bar and page content

use serde::{Deserialize, Serialize};

use tabpager_strip::Rect;

/// Position of the tab bar in the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabBarPosition {
    /// Header, tab bar, then pages from the top
    #[default]
    Top,
    /// Pages, tab bar, then header at the bottom
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControllerLayout {
    /// Zero height when there is no header view
    pub header: Rect,
    pub tab_bar: Rect,
    pub content: Rect,
}

impl ControllerLayout {
    /// Stack the three areas inside `bounds` (the safe area).
    pub fn compute(bounds: Rect, header_height: f64, tab_bar_height: f64, position: TabBarPosition) -> Self {
        let available = bounds.height.max(0.0);
        let header_height = header_height.clamp(0.0, available);
        let tab_bar_height = tab_bar_height.clamp(0.0, available - header_height);
        let content_height = available - header_height - tab_bar_height;
        let row = |y: f64, height: f64| Rect::new(bounds.x, y, bounds.width, height);

        match position {
            TabBarPosition::Top => {
                let header = row(bounds.y, header_height);
                let tab_bar = row(header.max_y(), tab_bar_height);
                let content = row(tab_bar.max_y(), content_height);
                Self { header, tab_bar, content }
            }
            TabBarPosition::Bottom => {
                let content = row(bounds.y, content_height);
                let tab_bar = row(content.max_y(), tab_bar_height);
                let header = row(tab_bar.max_y(), header_height);
                Self { header, tab_bar, content }
            }
        }
    }
}
