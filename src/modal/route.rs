use serde::{Deserialize, Serialize};

/// Coarse classification of a navigation route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteKind {
    /// Full-screen page
    Page,
    /// Dialog route created by the toolkit's dialog helpers
    Dialog,
    /// Menus, tooltips and other popup overlays
    Popup,
    /// Bare dialog route without toolkit chrome
    RawDialog,
    BottomSheet,
    /// Anything the host does not classify
    Other,
}

impl RouteKind {
    pub fn is_modal(self) -> bool {
        matches!(
            self,
            Self::Dialog | Self::Popup | Self::RawDialog | Self::BottomSheet
        )
    }
}

/// What the tracker sees of a route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub kind: RouteKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteDescriptor {
    pub fn new(kind: RouteKind) -> Self {
        Self { kind, name: None }
    }

    pub fn named(kind: RouteKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
        }
    }

    pub fn page(name: impl Into<String>) -> Self {
        Self::named(RouteKind::Page, name)
    }

    pub fn dialog() -> Self {
        Self::new(RouteKind::Dialog)
    }
}
