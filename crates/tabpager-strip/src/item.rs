//! Tab item data

use serde::{Deserialize, Serialize};

/// Host-owned image handle. The strip never decodes images, it only needs
/// a stable identity and the natural size for measuring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl ImageRef {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// Content of a single tab button. Immutable once handed to the strip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabItem {
    pub label: Option<String>,
    pub image: Option<ImageRef>,
    /// Shown while the button is pressed
    pub highlight_image: Option<ImageRef>,
    /// Shown while the button carries the selection highlight
    pub selection_image: Option<ImageRef>,
}

impl TabItem {
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn with_image(image: ImageRef) -> Self {
        Self {
            image: Some(image),
            ..Self::default()
        }
    }

    pub fn highlight_image(mut self, image: ImageRef) -> Self {
        self.highlight_image = Some(image);
        self
    }

    pub fn selection_image(mut self, image: ImageRef) -> Self {
        self.selection_image = Some(image);
        self
    }

    pub fn image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }
}

// The pressed-state image is cosmetic and does not take part in identity.
impl PartialEq for TabItem {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.image == other.image && self.selection_image == other.selection_image
    }
}
