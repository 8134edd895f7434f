//! Decides which section is "current" from the scroll position.
//!
//! The tracker owns the activation state: a watch channel whose value is always one of the
//! registry's identifiers. Readers subscribe with [`ActiveSectionTracker::watch`]; the only other
//! writer is the navigation bar's optimistic override, which the next recompute reconciles.
//!
//! A section counts as passed once the scroll offset reaches its anchor minus the threshold. The
//! last passed section in document order wins, and the first section wins when none is passed,
//! so sections activate strictly top to bottom as the user scrolls down.

use crate::registry::SectionRegistry;
use crate::section::SectionId;
use crate::viewport::{Anchors, ScrollSubscription, Viewport};
use std::rc::Rc;
use tokio::sync::watch;

/// Default activation lead in rows, roughly the height of the sticky header.
pub const DEFAULT_SCROLL_THRESHOLD: u32 = 3;

/// Publishes the active section derived from scroll position.
pub struct ActiveSectionTracker {
    registry: Rc<SectionRegistry>,
    threshold: u32,
    active_tx: watch::Sender<SectionId>,
    subscription: Option<ScrollSubscription>,
}

impl ActiveSectionTracker {
    #[must_use]
    /// Creates an unmounted tracker with the first section active.
    pub fn new(registry: Rc<SectionRegistry>, threshold: u32) -> Self {
        let (active_tx, _) = watch::channel(registry.first().identifier.clone());
        Self {
            registry,
            threshold,
            active_tx,
            subscription: None,
        }
    }

    #[must_use]
    /// Section that is current at `scroll_y`, given the measured anchors.
    ///
    /// Sections without a measured anchor are left out of the scan.
    pub fn recompute(&self, scroll_y: u32, anchors: &impl Anchors) -> SectionId {
        let mut current = &self.registry.first().identifier;
        for section in self.registry.iter() {
            let Some(anchor) = anchors.anchor_offset(section.identifier.as_str()) else {
                tracing::trace!(section = %section.identifier, "anchor missing, skipped");
                continue;
            };
            if scroll_y >= anchor.saturating_sub(self.threshold) {
                current = &section.identifier;
            }
        }
        current.clone()
    }

    /// Registers the scroll listener and recomputes against the current offset straight away,
    /// covering documents that open already scrolled.
    pub fn mount(&mut self, viewport: &Viewport) {
        let mut subscription = viewport.subscribe();
        let offset = subscription.current();
        self.subscription = Some(subscription);
        tracing::debug!(offset, "section tracker mounted");
        self.apply(offset, viewport);
    }

    /// Releases the scroll listener. Further scroll changes no longer reach the tracker.
    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("section tracker unmounted");
        }
    }

    #[must_use]
    /// Whether the scroll listener is registered.
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Handles pending scroll notifications. Returns whether the active section changed.
    ///
    /// Notifications are coalesced: only the latest offset is read, so the result after a burst
    /// of scrolling equals recomputing at the settled position.
    pub fn poll(&mut self, anchors: &impl Anchors) -> bool {
        let Some(offset) = self.subscription.as_mut().and_then(ScrollSubscription::changed) else {
            return false;
        };
        self.apply(offset, anchors)
    }

    fn apply(&self, offset: u32, anchors: &impl Anchors) -> bool {
        let next = self.recompute(offset, anchors);
        self.publish(next)
    }

    /// Sets the active section ahead of the scroll that will confirm it.
    ///
    /// Only the navigation bar calls this, and only with registry identifiers.
    pub(crate) fn override_active(&self, id: SectionId) -> bool {
        tracing::debug!(section = %id, "optimistic section override");
        self.publish(id)
    }

    fn publish(&self, next: SectionId) -> bool {
        self.active_tx.send_if_modified(|active| {
            if *active == next {
                false
            } else {
                tracing::debug!(from = %active, to = %next, "active section changed");
                *active = next;
                true
            }
        })
    }

    #[must_use]
    /// Currently published section.
    pub fn active(&self) -> SectionId {
        self.active_tx.borrow().clone()
    }

    #[must_use]
    /// Subscribes to the published section.
    pub fn watch(&self) -> watch::Receiver<SectionId> {
        self.active_tx.subscribe()
    }

    #[must_use]
    /// Activation lead in rows.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
