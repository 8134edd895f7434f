//! The core state machine bridging the portfolio document and the navigation bar.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the user scrolls
//! and clicks. Every input arrives as an [`AppEvent`] and goes through [`AppState::update`]:
//! scroll changes are applied to the viewport and then picked up by the tracker through its
//! subscription, while activations go through the navigation controller. This keeps the whole
//! flow deterministic and testable without a terminal.

use crate::config::Config;
use crate::content::Content;
use crate::layout::DocumentLayout;
use crate::navigation::NavigationController;
use crate::registry::SectionRegistry;
use crate::section::SectionId;
use crate::theme::Theme;
use crate::tracker::ActiveSectionTracker;
use crate::viewport::Viewport;
use ratatui::layout::Rect;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Passive scrolling to an absolute offset.
pub struct ScrollEvent {
    /// Target offset in rows from the document top.
    pub offset: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A navigation control (or hero button) was activated.
pub struct ActivateEvent {
    /// Section to navigate to.
    pub identifier: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Direction for moving keyboard focus across the navigation bar.
pub enum FocusMove {
    /// One control left.
    Prev,
    /// One control right.
    Next,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Everything that can change application state.
pub enum AppEvent {
    /// Jump to an absolute offset.
    Scroll(ScrollEvent),
    /// Scroll relative to the current offset.
    ScrollBy(i64),
    /// Navigate to a section.
    Activate(ActivateEvent),
    /// Activate the focused navigation control.
    ActivateFocused,
    /// Move navigation focus.
    Focus(FocusMove),
    /// Advance smooth scrolling by one frame.
    Tick,
    /// Swap light and dark themes.
    ToggleTheme,
    /// Body area changed size.
    Resize {
        /// Columns available to the document.
        width: u16,
        /// Rows available to the document.
        height: u16,
    },
    /// Leave the application.
    Quit,
}

/// Bridges the document, the viewport and the navigation bar, maintaining session state.
pub struct AppState {
    /// Page content.
    pub content: Content,
    /// Fixed section order.
    pub registry: Rc<SectionRegistry>,
    /// Scroll position and measured anchors.
    pub viewport: Viewport,
    /// Owner of the active section.
    pub tracker: ActiveSectionTracker,
    /// Navigation bar state.
    pub navigation: NavigationController,
    /// Current laid-out document.
    pub layout: DocumentLayout,
    /// Colour preference.
    pub theme: Theme,
    /// Rows moved per scroll step.
    pub scroll_step: u32,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Set once the user asks to leave.
    pub should_quit: bool,
    /// Screen areas of the navigation controls from the last draw, for mouse hit-testing.
    pub nav_hitboxes: Vec<(Rect, SectionId)>,
    size: (u16, u16),
}

impl AppState {
    #[must_use]
    /// Builds the application with the tracker mounted on the viewport.
    pub fn new(content: Content, registry: SectionRegistry, cfg: &Config, theme: Theme) -> Self {
        let registry = Rc::new(registry);
        let viewport = Viewport::new(cfg.scroll_frames);
        let mut tracker = ActiveSectionTracker::new(Rc::clone(&registry), cfg.scroll_threshold);
        let navigation = NavigationController::new(Rc::clone(&registry), &tracker);
        let layout = DocumentLayout::build(&content, &registry, 0, &theme.palette());
        tracker.mount(&viewport);

        Self {
            content,
            registry,
            viewport,
            tracker,
            navigation,
            layout,
            theme,
            scroll_step: cfg.scroll_step,
            message: None,
            should_quit: false,
            nav_hitboxes: Vec::new(),
            size: (0, 0),
        }
    }

    #[must_use]
    /// Section the navigation bar highlights.
    pub fn active_section(&self) -> SectionId {
        self.navigation.active()
    }

    /// Applies one event. Returns whether anything visible changed.
    pub fn update(&mut self, event: AppEvent) -> bool {
        let changed = match event {
            AppEvent::Scroll(ScrollEvent { offset }) => {
                let before = self.viewport.offset();
                self.viewport.scroll_to(offset);
                before != self.viewport.offset()
            }
            AppEvent::ScrollBy(delta) => {
                let before = self.viewport.offset();
                self.viewport.scroll_by(delta);
                before != self.viewport.offset()
            }
            AppEvent::Activate(ActivateEvent { identifier }) => self.activate(&identifier),
            AppEvent::ActivateFocused => {
                let id = self.navigation.focused().to_string();
                self.activate(&id)
            }
            AppEvent::Focus(FocusMove::Next) => {
                self.navigation.focus_next();
                true
            }
            AppEvent::Focus(FocusMove::Prev) => {
                self.navigation.focus_prev();
                true
            }
            AppEvent::Tick => self.viewport.tick(),
            AppEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
                tracing::debug!(theme = ?self.theme, "theme toggled");
                self.relayout();
                true
            }
            AppEvent::Resize { width, height } => {
                if self.size == (width, height) {
                    false
                } else {
                    self.size = (width, height);
                    self.relayout();
                    true
                }
            }
            AppEvent::Quit => {
                self.should_quit = true;
                true
            }
        };

        let recomputed = self.tracker.poll(&self.viewport);
        let highlighted = self.navigation.take_changed();
        changed || recomputed || highlighted
    }

    fn activate(&mut self, identifier: &str) -> bool {
        match self
            .navigation
            .on_activate(identifier, &self.tracker, &mut self.viewport)
        {
            Ok(()) => {
                self.message = None;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "activation rejected");
                self.message = Some(e.to_string());
                true
            }
        }
    }

    /// Re-lays the document for the current size and hands the new anchors to the viewport.
    ///
    /// The document is padded so the last section can be scrolled to the top of the body.
    fn relayout(&mut self) {
        let (width, height) = self.size;
        self.layout =
            DocumentLayout::build(&self.content, &self.registry, width, &self.theme.palette());
        let last_anchor = self
            .registry
            .iter()
            .filter_map(|s| self.layout.anchors.get(&s.identifier))
            .max()
            .copied()
            .unwrap_or(0);
        let content_height = self
            .layout
            .height()
            .max(last_anchor.saturating_add(u32::from(height)));
        self.viewport.set_layout(
            self.layout.anchors.clone(),
            content_height,
            u32::from(height),
        );
    }

    #[must_use]
    /// Navigation control drawn at a screen position, if any.
    pub fn control_at(&self, column: u16, row: u16) -> Option<&SectionId> {
        self.nav_hitboxes
            .iter()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            })
            .map(|(_, id)| id)
    }

    /// Releases the tracker's scroll listener before the state is torn down.
    pub fn unmount(&mut self) {
        self.tracker.unmount();
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
