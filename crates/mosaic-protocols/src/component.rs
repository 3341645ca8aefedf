//! View component contract.

use serde::{Deserialize, Serialize};

/// Core trait for registrable view components.
///
/// A view component is opaque to the registry beyond its identity and a
/// pair of capability hooks the shell consults when it injects the view
/// into a column or toolbar.
pub trait ViewComponent: Send + Sync + 'static {
    /// Unique display name identifying this component.
    ///
    /// Exactly one component may be registered per display name at a time.
    fn display_name(&self) -> &str;

    /// Whether the shell should wrap this view in a managed container.
    fn container_required(&self) -> bool {
        true
    }

    /// Styles the shell applies to the managed container, if any.
    fn container_styles(&self) -> Option<ContainerStyles> {
        None
    }
}

/// Layout hints for a component's managed container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SidebarItem;

    impl ViewComponent for SidebarItem {
        fn display_name(&self) -> &str {
            "SidebarItem"
        }
    }

    struct ToolbarButton;

    impl ViewComponent for ToolbarButton {
        fn display_name(&self) -> &str {
            "ToolbarButton"
        }

        fn container_required(&self) -> bool {
            false
        }

        fn container_styles(&self) -> Option<ContainerStyles> {
            Some(ContainerStyles {
                order: Some(2),
                ..Default::default()
            })
        }
    }

    #[test]
    fn test_default_capabilities() {
        let item = SidebarItem;
        assert_eq!(item.display_name(), "SidebarItem");
        assert!(item.container_required());
        assert!(item.container_styles().is_none());
    }

    #[test]
    fn test_overridden_capabilities() {
        let button = ToolbarButton;
        assert!(!button.container_required());
        assert_eq!(button.container_styles().unwrap().order, Some(2));
    }

    #[test]
    fn test_container_styles_serialization() {
        let styles = ContainerStyles {
            order: Some(1),
            flex: Some(1.5),
            width: None,
            height: None,
        };
        let json = serde_json::to_string(&styles).unwrap();
        assert!(json.contains("\"order\":1"));
        assert!(!json.contains("width"));

        let parsed: ContainerStyles = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, styles);
    }
}
