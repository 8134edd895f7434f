use super::{Anchors, Viewport};
use crate::section::SectionId;
use std::collections::HashMap;

fn laid_out(frames: u16) -> Viewport {
    let mut viewport = Viewport::new(frames);
    let anchors = [("home", 0), ("about", 40), ("contact", 120)]
        .into_iter()
        .map(|(id, row)| (SectionId::new(id), row))
        .collect();
    viewport.set_layout(anchors, 200, 50);
    viewport
}

#[test]
fn test_offsets_are_clamped() {
    let mut viewport = laid_out(0);

    viewport.scroll_to(1000);
    assert_eq!(viewport.offset(), 150);

    viewport.scroll_by(-500);
    assert_eq!(viewport.offset(), 0);

    viewport.scroll_by(7);
    assert_eq!(viewport.offset(), 7);
}

#[test]
fn test_anchor_lookup() {
    let viewport = laid_out(0);

    assert_eq!(viewport.anchor_offset("about"), Some(40));
    assert_eq!(viewport.anchor_offset("blog"), None);
}

#[test]
fn test_smooth_scroll_lands_exactly_on_target() {
    let mut viewport = laid_out(8);
    viewport.smooth_scroll_to(120);

    assert!(viewport.is_animating());
    assert_eq!(viewport.offset(), 0, "nothing moves before the first frame");

    let mut previous = 0;
    let mut frames = 0;
    while viewport.is_animating() {
        viewport.tick();
        frames += 1;
        assert!(viewport.offset() >= previous, "eased scroll moves one way");
        previous = viewport.offset();
    }

    assert_eq!(frames, 8);
    assert_eq!(viewport.offset(), 120);
    assert!(!viewport.tick(), "idle tick does nothing");
}

#[test]
fn test_newer_smooth_scroll_supersedes_older() {
    let mut viewport = laid_out(6);
    viewport.smooth_scroll_to(120);
    viewport.tick();
    viewport.tick();

    viewport.smooth_scroll_to(40);
    assert_eq!(viewport.animation().map(super::ScrollAnimation::target), Some(40));

    while viewport.is_animating() {
        viewport.tick();
    }
    assert_eq!(viewport.offset(), 40);
}

#[test]
fn test_manual_scroll_cancels_animation() {
    let mut viewport = laid_out(6);
    viewport.smooth_scroll_to(120);
    viewport.tick();

    viewport.scroll_to(10);
    assert!(!viewport.is_animating());
    assert_eq!(viewport.offset(), 10);
}

#[test]
fn test_smooth_scroll_target_is_clamped() {
    let mut viewport = laid_out(4);
    viewport.smooth_scroll_to(10_000);

    assert_eq!(viewport.animation().map(super::ScrollAnimation::target), Some(150));
}

#[test]
fn test_zero_frames_jumps() {
    let mut viewport = laid_out(0);
    viewport.smooth_scroll_to(40);

    assert!(!viewport.is_animating());
    assert_eq!(viewport.offset(), 40);
}

#[test]
fn test_subscription_sees_only_latest_offset() {
    let mut viewport = laid_out(0);
    let mut subscription = viewport.subscribe();
    assert_eq!(subscription.changed(), None);

    viewport.scroll_to(5);
    viewport.scroll_to(25);
    assert_eq!(subscription.changed(), Some(25));
    assert_eq!(subscription.changed(), None);
}

#[test]
fn test_unchanged_offset_does_not_notify() {
    let mut viewport = laid_out(0);
    viewport.scroll_to(30);
    let mut subscription = viewport.subscribe();

    viewport.scroll_to(30);
    assert_eq!(subscription.changed(), None);
}

#[test]
fn test_relayout_notifies_and_clamps() {
    let mut viewport = laid_out(0);
    viewport.scroll_to(150);
    let mut subscription = viewport.subscribe();

    viewport.set_layout(HashMap::new(), 80, 50);
    assert_eq!(subscription.changed(), Some(30));
    assert_eq!(viewport.anchor_offset("about"), None);
}

#[test]
fn test_listener_count_tracks_subscriptions() {
    let viewport = laid_out(0);
    assert_eq!(viewport.listener_count(), 0);

    let first = viewport.subscribe();
    let second = viewport.subscribe();
    assert_eq!(viewport.listener_count(), 2);

    drop(first);
    assert_eq!(viewport.listener_count(), 1);
    drop(second);
    assert_eq!(viewport.listener_count(), 0);
}
