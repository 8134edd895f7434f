use super::ActiveSectionTracker;
use crate::registry::SectionRegistry;
use crate::section::SectionId;
use crate::viewport::Viewport;
use std::collections::HashMap;
use std::rc::Rc;

fn four_sections() -> Rc<SectionRegistry> {
    Rc::new(
        SectionRegistry::new([
            ("home", "Home"),
            ("about", "About"),
            ("skills", "Skills"),
            ("projects", "Projects"),
        ])
        .unwrap(),
    )
}

fn anchors(pairs: &[(&str, u32)]) -> HashMap<SectionId, u32> {
    pairs
        .iter()
        .map(|(id, row)| (SectionId::new(*id), *row))
        .collect()
}

fn scenario_anchors() -> HashMap<SectionId, u32> {
    anchors(&[
        ("home", 0),
        ("about", 800),
        ("skills", 1600),
        ("projects", 2400),
    ])
}

/// Viewport tall enough to scroll anywhere in the scenario layout.
fn scenario_viewport() -> Viewport {
    let mut viewport = Viewport::new(0);
    viewport.set_layout(scenario_anchors(), 4000, 100);
    viewport
}

#[test]
fn test_scenario_thresholds() {
    let tracker = ActiveSectionTracker::new(four_sections(), 100);
    let anchors = scenario_anchors();

    assert_eq!(tracker.recompute(750, &anchors), "about");
    assert_eq!(tracker.recompute(650, &anchors), "home");
    assert_eq!(tracker.recompute(2500, &anchors), "projects");
}

#[test]
fn test_exact_threshold_boundary_counts_as_passed() {
    let tracker = ActiveSectionTracker::new(four_sections(), 100);
    let anchors = scenario_anchors();

    assert_eq!(tracker.recompute(699, &anchors), "home");
    assert_eq!(tracker.recompute(700, &anchors), "about");
    assert_eq!(tracker.recompute(1500, &anchors), "skills");
}

#[test]
fn test_first_section_when_nothing_passed() {
    let tracker = ActiveSectionTracker::new(four_sections(), 10);
    let anchors = anchors(&[("home", 50), ("about", 100)]);

    assert_eq!(tracker.recompute(0, &anchors), "home");
}

#[test]
fn test_result_is_always_registered() {
    let registry = four_sections();
    let tracker = ActiveSectionTracker::new(Rc::clone(&registry), 100);
    let anchors = scenario_anchors();

    for y in (0..5000).step_by(37) {
        let id = tracker.recompute(y, &anchors);
        assert!(registry.get(id.as_str()).is_some(), "{id} at {y}");
    }
}

#[test]
fn test_activation_never_regresses_while_scrolling_down() {
    let registry = four_sections();
    let tracker = ActiveSectionTracker::new(Rc::clone(&registry), 100);
    let anchors = scenario_anchors();

    let mut last = 0;
    for y in 0..3000 {
        let index = registry
            .position(tracker.recompute(y, &anchors).as_str())
            .unwrap();
        assert!(index >= last, "regressed at {y}");
        last = index;
    }
    assert_eq!(last, 3);
}

#[test]
fn test_recompute_is_idempotent() {
    let tracker = ActiveSectionTracker::new(four_sections(), 100);
    let anchors = scenario_anchors();

    for y in [0, 699, 700, 1555, 2500] {
        assert_eq!(tracker.recompute(y, &anchors), tracker.recompute(y, &anchors));
    }
}

#[test]
fn test_missing_anchor_is_skipped() {
    let tracker = ActiveSectionTracker::new(four_sections(), 100);
    let anchors = anchors(&[("home", 0), ("about", 800), ("projects", 2400)]);

    // skills has no anchor, so the scan carries about through its region
    assert_eq!(tracker.recompute(1700, &anchors), "about");
    assert_eq!(tracker.recompute(2400, &anchors), "projects");
}

#[test]
fn test_no_anchors_falls_back_to_first() {
    let tracker = ActiveSectionTracker::new(four_sections(), 100);
    assert_eq!(tracker.recompute(1234, &HashMap::<SectionId, u32>::new()), "home");
}

#[test]
fn test_initial_state_is_first_section() {
    let tracker = ActiveSectionTracker::new(four_sections(), 100);
    assert_eq!(tracker.active(), "home");
    assert!(!tracker.is_mounted());
}

#[test]
fn test_mount_recomputes_against_current_offset() {
    let mut viewport = scenario_viewport();
    viewport.scroll_to(1700);

    let mut tracker = ActiveSectionTracker::new(four_sections(), 100);
    tracker.mount(&viewport);

    assert!(tracker.is_mounted());
    assert_eq!(viewport.listener_count(), 1);
    assert_eq!(tracker.active(), "skills");
}

#[test]
fn test_poll_follows_scrolling() {
    let mut viewport = scenario_viewport();
    let mut tracker = ActiveSectionTracker::new(four_sections(), 100);
    tracker.mount(&viewport);

    assert!(!tracker.poll(&viewport), "nothing pending after mount");

    viewport.scroll_to(900);
    assert!(tracker.poll(&viewport));
    assert_eq!(tracker.active(), "about");

    viewport.scroll_to(950);
    assert!(!tracker.poll(&viewport), "same section, nothing published");
    assert_eq!(tracker.active(), "about");
}

#[test]
fn test_burst_of_scrolls_settles_on_final_offset() {
    let mut viewport = scenario_viewport();
    let mut tracker = ActiveSectionTracker::new(four_sections(), 100);
    tracker.mount(&viewport);

    for offset in [100, 900, 1700, 2500, 1650] {
        viewport.scroll_to(offset);
    }
    tracker.poll(&viewport);

    assert_eq!(tracker.active(), tracker.recompute(1650, &viewport));
    assert_eq!(tracker.active(), "skills");
}

#[test]
fn test_unmount_releases_listener() {
    let mut viewport = scenario_viewport();
    let mut tracker = ActiveSectionTracker::new(four_sections(), 100);
    tracker.mount(&viewport);
    tracker.unmount();

    assert_eq!(viewport.listener_count(), 0);

    viewport.scroll_to(2500);
    assert!(!tracker.poll(&viewport));
    assert_eq!(tracker.active(), "home", "no mutation after unmount");
}

#[test]
fn test_dropping_tracker_releases_listener() {
    let viewport = scenario_viewport();
    {
        let mut tracker = ActiveSectionTracker::new(four_sections(), 100);
        tracker.mount(&viewport);
        assert_eq!(viewport.listener_count(), 1);
    }
    assert_eq!(viewport.listener_count(), 0);
}

#[test]
fn test_remount_does_not_leak_listeners() {
    let viewport = scenario_viewport();
    let mut tracker = ActiveSectionTracker::new(four_sections(), 100);

    tracker.mount(&viewport);
    tracker.mount(&viewport);
    assert_eq!(viewport.listener_count(), 1);

    tracker.unmount();
    tracker.mount(&viewport);
    assert_eq!(viewport.listener_count(), 1);
}

#[test]
fn test_watchers_see_published_section() {
    let mut viewport = scenario_viewport();
    let mut tracker = ActiveSectionTracker::new(four_sections(), 100);
    let mut rx = tracker.watch();
    tracker.mount(&viewport);

    viewport.scroll_to(2450);
    tracker.poll(&viewport);

    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), "projects");
}

#[test]
fn test_override_is_replaced_by_next_recompute() {
    let mut viewport = scenario_viewport();
    let mut tracker = ActiveSectionTracker::new(four_sections(), 100);
    tracker.mount(&viewport);

    tracker.override_active(SectionId::new("projects"));
    assert_eq!(tracker.active(), "projects");

    viewport.scroll_to(800);
    tracker.poll(&viewport);
    assert_eq!(tracker.active(), "about");
}
