//! The navigation bar: one control per section, highlighted from the tracker's published value.
//!
//! Control state is never stored. Each render derives it from the registry and the active
//! identifier, so a control is `Active` exactly while the tracker publishes its identifier.

use crate::registry::SectionRegistry;
use crate::section::SectionId;
use crate::tracker::ActiveSectionTracker;
use crate::viewport::{Anchors, Viewport};
use std::rc::Rc;
use thiserror::Error;
use tokio::sync::watch;

#[derive(Debug, Error, PartialEq, Eq)]
/// Rejected navigation requests.
pub enum NavigationError {
    /// The identifier names no registered section.
    #[error("no section named `{0}`")]
    UnknownSection(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Highlight state of one navigation control.
pub enum ControlState {
    /// Another section is active.
    Inactive,
    /// This control's section is active.
    Active,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Render-ready description of one navigation control.
pub struct NavControl {
    /// Section the control scrolls to.
    pub identifier: SectionId,
    /// Text on the control.
    pub label: String,
    /// Derived highlight state.
    pub state: ControlState,
    /// Whether keyboard focus rests on the control.
    pub focused: bool,
}

impl NavControl {
    #[must_use]
    /// Whether the control is drawn highlighted.
    pub fn highlighted(&self) -> bool {
        self.state == ControlState::Active
    }
}

/// Renders section controls and turns activations into scroll commands.
pub struct NavigationController {
    registry: Rc<SectionRegistry>,
    active_rx: watch::Receiver<SectionId>,
    focus: usize,
}

impl NavigationController {
    #[must_use]
    /// Creates a controller reading the tracker's published section.
    pub fn new(registry: Rc<SectionRegistry>, tracker: &ActiveSectionTracker) -> Self {
        Self {
            registry,
            active_rx: tracker.watch(),
            focus: 0,
        }
    }

    #[must_use]
    /// Controls in document order with their derived highlight state.
    pub fn controls(&self) -> Vec<NavControl> {
        let active = self.active_rx.borrow();
        self.registry
            .iter()
            .enumerate()
            .map(|(i, section)| NavControl {
                identifier: section.identifier.clone(),
                label: section.label.clone(),
                state: if section.identifier == *active {
                    ControlState::Active
                } else {
                    ControlState::Inactive
                },
                focused: i == self.focus,
            })
            .collect()
    }

    #[must_use]
    /// Section the bar currently highlights.
    pub fn active(&self) -> SectionId {
        self.active_rx.borrow().clone()
    }

    /// Whether the highlighted section changed since the last call.
    pub fn take_changed(&mut self) -> bool {
        let changed = self.active_rx.has_changed().unwrap_or(false);
        if changed {
            self.active_rx.borrow_and_update();
        }
        changed
    }

    /// Highlights `id` immediately, then smooth-scrolls to its anchor.
    ///
    /// The highlight is a transient override: the tracker's next recompute replaces it. When the
    /// section has no measured anchor the highlight still moves but no scroll is issued.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownSection`] if `id` is not registered; nothing changes.
    pub fn on_activate(
        &mut self,
        id: &str,
        tracker: &ActiveSectionTracker,
        viewport: &mut Viewport,
    ) -> Result<(), NavigationError> {
        let Some(index) = self.registry.position(id) else {
            return Err(NavigationError::UnknownSection(id.to_string()));
        };
        self.focus = index;
        tracker.override_active(SectionId::new(id));

        match viewport.anchor_offset(id) {
            Some(anchor) => {
                tracing::debug!(section = id, anchor, "scrolling to section");
                viewport.smooth_scroll_to(anchor);
            }
            None => tracing::debug!(section = id, "section not laid out, no scroll issued"),
        }
        Ok(())
    }

    /// Activates the control under keyboard focus.
    ///
    /// # Errors
    ///
    /// Propagates [`NavigationController::on_activate`] errors.
    pub fn activate_focused(
        &mut self,
        tracker: &ActiveSectionTracker,
        viewport: &mut Viewport,
    ) -> Result<(), NavigationError> {
        let id = self.focused().to_string();
        self.on_activate(&id, tracker, viewport)
    }

    #[must_use]
    /// Identifier under keyboard focus.
    pub fn focused(&self) -> &SectionId {
        &self
            .registry
            .at(self.focus)
            .unwrap_or_else(|| self.registry.first())
            .identifier
    }

    /// Moves focus one control to the right, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.registry.len();
    }

    /// Moves focus one control to the left, wrapping around.
    pub fn focus_prev(&mut self) {
        let len = self.registry.len();
        self.focus = (self.focus + len - 1) % len;
    }
}

#[cfg(test)]
#[path = "tests/navigation.rs"]
mod tests;
