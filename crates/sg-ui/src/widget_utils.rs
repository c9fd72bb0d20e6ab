//! Widget ID helpers for unique egui IDs in item loops

use std::fmt::Display;

use egui::Id;

/// Widget ID builder that ensures unique IDs by combining components
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    /// Create a new widget ID builder
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    /// Add a component to the ID
    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Add an index to the ID (useful in loops)
    pub fn index(self, idx: usize) -> Self {
        self.with(format!("idx_{}", idx))
    }

    /// Build the final ID string
    pub fn build(&self) -> String {
        self.components.join("_")
    }

    /// Create an egui ID from this widget ID
    pub fn id(&self) -> Id {
        Id::new(self.build())
    }
}

/// Helper function to create a unique widget ID for a given context
pub fn widget_id(base: impl Display, suffix: impl Display) -> String {
    format!("{}_{}", base, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_id_builder() {
        let id = WidgetId::new("carousel")
            .with("dot")
            .index(5)
            .build();
        assert_eq!(id, "carousel_dot_idx_5");
    }

    #[test]
    fn test_widget_id_helper() {
        let id = widget_id("store_card", "sephora");
        assert_eq!(id, "store_card_sephora");
    }
}
