#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;
use crate::consts::SNAP_DEBOUNCE_MS;

// --- Scheduling and firing ---

#[test]
fn fires_once_the_delay_has_elapsed() {
    let mut d = Debouncer::new(50.0);
    d.schedule("recompute", 0.0);

    assert_eq!(d.poll(49.0), None);
    assert_eq!(d.poll(50.0), Some("recompute"));
}

#[test]
fn fires_at_most_once_per_schedule() {
    let mut d = Debouncer::new(50.0);
    d.schedule(1, 0.0);

    assert_eq!(d.poll(60.0), Some(1));
    assert_eq!(d.poll(120.0), None);
}

#[test]
fn reschedule_restarts_the_window() {
    let mut d = Debouncer::new(50.0);
    d.schedule(1, 0.0);
    d.schedule(2, 30.0);

    // The first deadline (50) has passed, but rescheduling moved it to 80.
    assert_eq!(d.poll(79.0), None);
    assert_eq!(d.poll(80.0), Some(2));
}

#[test]
fn only_the_last_payload_in_a_burst_fires() {
    let mut d = Debouncer::new(50.0);
    for (i, at) in [(1, 0.0), (2, 10.0), (3, 20.0), (4, 30.0)] {
        d.schedule(i, at);
    }

    assert_eq!(d.poll(100.0), Some(4));
    assert_eq!(d.poll(200.0), None);
}

#[test]
fn zero_delay_fires_on_the_same_tick() {
    let mut d = Debouncer::new(0.0);
    d.schedule((), 10.0);
    assert_eq!(d.poll(10.0), Some(()));
}

#[test]
fn poll_without_schedule_is_none() {
    let mut d: Debouncer<u32> = Debouncer::new(50.0);
    assert_eq!(d.poll(1000.0), None);
}

// --- Cancellation and introspection ---

#[test]
fn cancel_discards_the_pending_payload() {
    let mut d = Debouncer::new(50.0);
    d.schedule(1, 0.0);
    d.cancel();

    assert!(!d.is_pending());
    assert_eq!(d.poll(100.0), None);
}

#[test]
fn is_pending_tracks_the_lifecycle() {
    let mut d = Debouncer::new(50.0);
    assert!(!d.is_pending());

    d.schedule(1, 0.0);
    assert!(d.is_pending());

    d.poll(50.0);
    assert!(!d.is_pending());
}

#[test]
fn due_at_ms_exposes_the_deadline() {
    let mut d = Debouncer::new(50.0);
    assert_eq!(d.due_at_ms(), None);

    d.schedule(1, 12.0);
    assert_eq!(d.due_at_ms(), Some(62.0));
}

#[test]
fn default_uses_the_snap_debounce_delay() {
    let mut d: Debouncer<u32> = Debouncer::default();
    assert_eq!(d.delay_ms(), SNAP_DEBOUNCE_MS);

    d.schedule(7, 0.0);
    assert_eq!(d.poll(SNAP_DEBOUNCE_MS - 1.0), None);
    assert_eq!(d.poll(SNAP_DEBOUNCE_MS), Some(7));
}
