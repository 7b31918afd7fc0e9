//! Preview refresh control and viewport state.
//!
//! The rendering surface reloads only when the persisted/accepted document
//! changes: save acks, accepted chat/undo/redo results, and code pushes.
//! Local edits never reload (the editor view already shows them) and
//! viewport-mode changes never reload by themselves.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

/// Viewport mode for the rendering surface. Display-only: changing it
/// never triggers a content reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Horizontal,
    Mobile,
    Fullscreen,
}

/// Device frames offered in the mobile viewport, purely a rendering hint.
pub const DEVICE_FRAMES: &[&str] = &[
    "iPhone 14 Pro",
    "Pixel 7",
    "Galaxy S22",
    "iPhone SE",
];

/// Reload and viewport state for the preview surface.
///
/// `reload_epoch` is a monotonic counter; the iframe keys its source on it,
/// so each bump forces a fresh fetch of the persisted document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreviewState {
    pub reload_epoch: u64,
    pub view: ViewMode,
    pub device_index: usize,
    /// True while the one-shot deployment celebration overlay is up.
    pub celebrating: bool,
}

impl PreviewState {
    /// Force the surface to reload the persisted document.
    pub fn request_reload(&mut self) {
        self.reload_epoch += 1;
    }

    /// Switch viewport mode. Never bumps the reload epoch.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// The device frame shown in the mobile viewport.
    #[must_use]
    pub fn device(&self) -> &'static str {
        DEVICE_FRAMES[self.device_index % DEVICE_FRAMES.len()]
    }

    /// Advance to the next device frame, wrapping around.
    pub fn cycle_device(&mut self) {
        self.device_index = (self.device_index + 1) % DEVICE_FRAMES.len();
    }
}
