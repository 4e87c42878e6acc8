//! Add-widget form state, independent of how a frontend draws the modal

use super::samples;
use crate::data::{NewWidget, Position, WidgetKind, ACCENT_PALETTE};

/// Where freshly added widgets land
pub const NEW_WIDGET_POSITION: Position = Position { x: 100, y: 100 };

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddWidgetForm {
    pub title: String,
    pub kind: WidgetKind,
    pub color: String,
}

impl Default for AddWidgetForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: WidgetKind::LineChart,
            color: ACCENT_PALETTE[0].to_string(),
        }
    }
}

impl AddWidgetForm {
    /// Submit is only allowed with a non-blank title
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Widget to hand to the store, with sample data for the chosen kind
    pub fn build(&self) -> Option<NewWidget> {
        if !self.is_valid() {
            return None;
        }

        Some(NewWidget {
            title: self.title.trim().to_string(),
            position: NEW_WIDGET_POSITION,
            size: self.kind.default_size(),
            color: self.color.clone(),
            content: samples::sample_content(self.kind),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Size;

    #[test]
    fn test_blank_title_does_not_build() {
        let form = AddWidgetForm {
            title: "   ".to_string(),
            ..AddWidgetForm::default()
        };
        assert!(form.build().is_none());
    }

    #[test]
    fn test_build_uses_kind_defaults() {
        let form = AddWidgetForm {
            title: "  Goals ".to_string(),
            kind: WidgetKind::Progress,
            color: "#EF4444".to_string(),
        };
        let widget = form.build().expect("valid form");

        assert_eq!(widget.title, "Goals");
        assert_eq!(widget.position, Position::new(100, 100));
        assert_eq!(widget.size, Size::new(400, 250));
        assert_eq!(widget.color, "#EF4444");
        assert_eq!(widget.content.kind(), WidgetKind::Progress);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = AddWidgetForm {
            title: "Sales".to_string(),
            kind: WidgetKind::Metrics,
            color: "#10B981".to_string(),
        };
        form.reset();
        assert_eq!(form, AddWidgetForm::default());
        assert_eq!(form.color, "#3B82F6");
    }
}
