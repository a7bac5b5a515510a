use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::{registry::WindowRegistry, stacking::StackOrder};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Request payload for opening (or focusing) a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub content_key: String,
}

impl WindowConfig {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: id.clone(),
            icon: id.clone(),
            content_key: id.clone(),
            id: WindowId(id),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_content_key(mut self, content_key: impl Into<String>) -> Self {
        self.content_key = content_key.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub content_key: String,
}

impl From<WindowConfig> for WindowRecord {
    fn from(config: WindowConfig) -> Self {
        Self {
            id: config.id,
            title: config.title,
            icon: config.icon,
            content_key: config.content_key,
        }
    }
}

/// Layout captured when "show desktop" minimizes everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopModeSnapshot {
    pub active_window_id: Option<WindowId>,
    pub non_minimized_window_ids: Vec<WindowId>,
}

/// Active/minimized layout captured when entering snap mode from a free layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviousLayout {
    pub active_window_id: Option<WindowId>,
    pub minimized_windows: BTreeSet<WindowId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SnapState {
    #[default]
    Free,
    Snapped {
        window_id: WindowId,
        /// `None` for sessions restored after a reload.
        previous: Option<PreviousLayout>,
    },
}

impl SnapState {
    pub fn is_snapped(&self) -> bool {
        matches!(self, Self::Snapped { .. })
    }

    pub fn snapped_window_id(&self) -> Option<&WindowId> {
        match self {
            Self::Free => None,
            Self::Snapped { window_id, .. } => Some(window_id),
        }
    }
}

/// Render-facing projection of one open window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowView<'a> {
    pub record: &'a WindowRecord,
    pub z_index: u32,
    pub minimized: bool,
    pub active: bool,
    pub snapped: bool,
}

/// Complete window/session manager state.
///
/// Fields are private so every mutation flows through [`crate::reducer::reduce_desktop`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopState {
    pub(crate) registry: WindowRegistry,
    pub(crate) order: StackOrder,
    pub(crate) minimized: BTreeSet<WindowId>,
    pub(crate) active_window_id: Option<WindowId>,
    pub(crate) desktop_mode: bool,
    pub(crate) desktop_snapshot: Option<DesktopModeSnapshot>,
    pub(crate) snap: SnapState,
    pub(crate) start_menu_open: bool,
}

impl DesktopState {
    pub fn windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.registry.iter()
    }

    pub fn window(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.registry.get(id)
    }

    pub fn is_open(&self, id: &WindowId) -> bool {
        self.registry.exists(id)
    }

    /// Back-to-front stacking order.
    pub fn order(&self) -> &[WindowId] {
        self.order.as_slice()
    }

    pub fn minimized(&self) -> &BTreeSet<WindowId> {
        &self.minimized
    }

    pub fn is_minimized(&self, id: &WindowId) -> bool {
        self.minimized.contains(id)
    }

    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.active_window_id.as_ref()
    }

    pub fn is_desktop_mode(&self) -> bool {
        self.desktop_mode
    }

    pub fn desktop_snapshot(&self) -> Option<&DesktopModeSnapshot> {
        self.desktop_snapshot.as_ref()
    }

    pub fn snap(&self) -> &SnapState {
        &self.snap
    }

    pub fn is_ai_snapped(&self) -> bool {
        self.snap.is_snapped()
    }

    pub fn is_start_menu_open(&self) -> bool {
        self.start_menu_open
    }

    pub fn z_index_of(&self, id: &WindowId) -> u32 {
        self.order.z_index_of(id)
    }

    /// Open windows in stacking order with their derived presentation flags.
    pub fn window_views(&self) -> Vec<WindowView<'_>> {
        self.order
            .iter()
            .filter_map(|id| self.registry.get(id))
            .map(|record| WindowView {
                record,
                z_index: self.order.z_index_of(&record.id),
                minimized: self.minimized.contains(&record.id),
                active: self.active_window_id.as_ref() == Some(&record.id),
                snapped: self.snap.snapped_window_id() == Some(&record.id),
            })
            .collect()
    }
}
