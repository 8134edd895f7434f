//! The scrolling window onto the portfolio document.
//!
//! The viewport is the only owner of the scroll offset. Listeners subscribe to it through a watch
//! channel that keeps just the latest offset, so a burst of scroll events collapses into one
//! notification carrying the settled position. Smooth scrolling is a frame-stepped animation
//! advanced by [`Viewport::tick`]; starting a new one replaces whatever was in flight.

use crate::section::SectionId;
use std::collections::HashMap;
use tokio::sync::watch;

/// Default number of frames a smooth scroll takes to reach its target.
pub const DEFAULT_SCROLL_FRAMES: u16 = 12;

/// Source of measured section anchor rows.
pub trait Anchors {
    /// Row at which the section starts, or `None` if it is not present in the rendered document.
    fn anchor_offset(&self, id: &str) -> Option<u32>;
}

impl Anchors for HashMap<SectionId, u32> {
    fn anchor_offset(&self, id: &str) -> Option<u32> {
        self.get(id).copied()
    }
}

/// Registration of one scroll listener.
///
/// Holding the subscription keeps the listener registered; dropping it releases the listener
/// on every exit path.
pub struct ScrollSubscription {
    rx: watch::Receiver<u32>,
}

impl ScrollSubscription {
    /// Reads the current offset and marks it as seen.
    pub fn current(&mut self) -> u32 {
        *self.rx.borrow_and_update()
    }

    /// Returns the latest offset if it changed since the last read.
    pub fn changed(&mut self) -> Option<u32> {
        match self.rx.has_changed() {
            Ok(true) => Some(self.current()),
            _ => None,
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        tracing::trace!("scroll listener released");
    }
}

#[derive(Clone, Debug, PartialEq)]
/// An in-flight eased scroll between two offsets.
pub struct ScrollAnimation {
    from: u32,
    to: u32,
    frame: u16,
    frames: u16,
}

impl ScrollAnimation {
    #[must_use]
    /// Destination offset of the animation.
    pub fn target(&self) -> u32 {
        self.to
    }

    fn finished(&self) -> bool {
        self.frame >= self.frames
    }

    /// Ease-out cubic: fast start, gentle landing, exact on the final frame.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn offset_at(&self, frame: u16) -> u32 {
        if frame >= self.frames {
            return self.to;
        }
        let t = f64::from(frame) / f64::from(self.frames);
        let eased = 1.0 - (1.0 - t).powi(3);
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        (from + (to - from) * eased).round().max(0.0) as u32
    }
}

/// Scroll offset, document dimensions and measured anchors of the portfolio document.
pub struct Viewport {
    scroll_tx: watch::Sender<u32>,
    anchors: HashMap<SectionId, u32>,
    content_height: u32,
    viewport_height: u32,
    animation: Option<ScrollAnimation>,
    scroll_frames: u16,
}

impl Viewport {
    #[must_use]
    /// Creates an empty viewport at offset zero.
    pub fn new(scroll_frames: u16) -> Self {
        let (scroll_tx, _) = watch::channel(0);
        Self {
            scroll_tx,
            anchors: HashMap::new(),
            content_height: 0,
            viewport_height: 0,
            animation: None,
            scroll_frames,
        }
    }

    #[must_use]
    /// Registers a scroll listener.
    pub fn subscribe(&self) -> ScrollSubscription {
        tracing::trace!("scroll listener registered");
        ScrollSubscription {
            rx: self.scroll_tx.subscribe(),
        }
    }

    #[must_use]
    /// Number of currently registered scroll listeners.
    pub fn listener_count(&self) -> usize {
        self.scroll_tx.receiver_count()
    }

    #[must_use]
    /// Current scroll offset in rows from the document top.
    pub fn offset(&self) -> u32 {
        *self.scroll_tx.borrow()
    }

    #[must_use]
    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> u32 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    #[must_use]
    /// Rows visible at once.
    pub fn height(&self) -> u32 {
        self.viewport_height
    }

    #[must_use]
    /// The in-flight smooth scroll, if any.
    pub fn animation(&self) -> Option<&ScrollAnimation> {
        self.animation.as_ref()
    }

    #[must_use]
    /// Whether a smooth scroll is still running.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Replaces the measured anchors and document dimensions, then notifies listeners so they
    /// recompute against the new measurements.
    pub fn set_layout(
        &mut self,
        anchors: HashMap<SectionId, u32>,
        content_height: u32,
        viewport_height: u32,
    ) {
        self.anchors = anchors;
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        let max = self.max_offset();
        self.scroll_tx.send_modify(|offset| *offset = (*offset).min(max));
    }

    /// Jumps to `offset`, cancelling any smooth scroll in flight.
    pub fn scroll_to(&mut self, offset: u32) {
        self.animation = None;
        self.publish(offset);
    }

    /// Jumps by a signed number of rows.
    pub fn scroll_by(&mut self, delta: i64) {
        let target = i64::from(self.offset()).saturating_add(delta).max(0);
        self.scroll_to(u32::try_from(target).unwrap_or(u32::MAX));
    }

    /// Starts an animated scroll towards `offset`, superseding any scroll already in flight.
    pub fn smooth_scroll_to(&mut self, offset: u32) {
        let to = offset.min(self.max_offset());
        let from = self.offset();
        if let Some(previous) = &self.animation {
            tracing::debug!(previous = previous.to, next = to, "superseding smooth scroll");
        }
        if from == to || self.scroll_frames == 0 {
            self.scroll_to(to);
            return;
        }
        self.animation = Some(ScrollAnimation {
            from,
            to,
            frame: 0,
            frames: self.scroll_frames,
        });
    }

    /// Advances the smooth scroll by one frame. Returns whether the offset moved.
    pub fn tick(&mut self) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        animation.frame += 1;
        let next = animation.offset_at(animation.frame);
        if animation.finished() {
            self.animation = None;
        }
        self.publish(next)
    }

    fn publish(&self, offset: u32) -> bool {
        let clamped = offset.min(self.max_offset());
        self.scroll_tx.send_if_modified(|current| {
            if *current == clamped {
                false
            } else {
                *current = clamped;
                true
            }
        })
    }
}

impl Anchors for Viewport {
    fn anchor_offset(&self, id: &str) -> Option<u32> {
        self.anchors.get(id).copied()
    }
}

#[cfg(test)]
#[path = "tests/viewport.rs"]
mod tests;
