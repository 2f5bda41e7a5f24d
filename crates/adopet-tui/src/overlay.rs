//! Overlay system: help panels and notification alerts.
//!
//! Overlays render on top of the active screen. The [`OverlayManager`]
//! keeps a stack so overlays can nest (help opened over a notification).
//! The shell dismisses the topmost overlay on `Esc`.

use serde::{Deserialize, Serialize};

// ─── Overlay Kind ────────────────────────────────────────────────────────────

/// The kind of overlay to display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    /// Help / keyboard shortcuts overlay.
    Help,
    /// Alert / notification (e.g. submission confirmation).
    Alert,
    /// Product-specific overlay.
    Custom(String),
}

impl std::fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Help => write!(f, "Help"),
            Self::Alert => write!(f, "Alert"),
            Self::Custom(name) => write!(f, "{name}"),
        }
    }
}

// ─── Overlay Request ─────────────────────────────────────────────────────────

/// A request to show an overlay.
#[derive(Debug, Clone)]
pub struct OverlayRequest {
    /// The kind of overlay.
    pub kind: OverlayKind,
    /// Title for the overlay.
    pub title: String,
    /// Optional body content.
    pub body: Option<String>,
}

impl OverlayRequest {
    /// Create a new overlay request.
    #[must_use]
    pub fn new(kind: OverlayKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: None,
        }
    }

    /// Set the body content.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

// ─── Overlay Manager ─────────────────────────────────────────────────────────

/// Manages a stack of overlay requests.
///
/// The topmost overlay receives input first. `Esc` dismisses the top.
pub struct OverlayManager {
    stack: Vec<OverlayRequest>,
}

impl OverlayManager {
    /// Create an empty overlay manager.
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push an overlay onto the stack.
    pub fn push(&mut self, request: OverlayRequest) {
        self.stack.push(request);
    }

    /// Dismiss (pop) the topmost overlay.
    pub fn dismiss(&mut self) -> Option<OverlayRequest> {
        self.stack.pop()
    }

    /// Dismiss all overlays.
    pub fn dismiss_all(&mut self) {
        self.stack.clear();
    }

    /// Get a reference to the topmost overlay.
    #[must_use]
    pub fn top(&self) -> Option<&OverlayRequest> {
        self.stack.last()
    }

    /// Whether any overlay is active.
    #[must_use]
    pub fn has_active(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Number of active overlays.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new()
    }
}
