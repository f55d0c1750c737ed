use approx::assert_abs_diff_eq;
use chart_motion::animation::{AnimationClock, AnimationRole, Easing};
use proptest::prelude::*;

#[test]
fn one_shot_timeline_reaches_one_and_stops() {
    let mut clock = AnimationClock::new();
    let handle = clock.start(AnimationRole::Entry, 1_000.0, false, Easing::Linear);

    assert_eq!(clock.progress(handle), Some(0.0));
    assert!(clock.tick(250.0));
    assert_abs_diff_eq!(clock.progress(handle).expect("running"), 0.25, epsilon = 1e-12);

    assert!(!clock.tick(750.0));
    assert_eq!(clock.progress(handle), Some(1.0));
    assert!(!clock.is_running(handle));

    clock.tick(5_000.0);
    assert_eq!(clock.progress(handle), Some(1.0));
}

#[test]
fn repeating_timeline_wraps_to_zero_without_gap() {
    let mut clock = AnimationClock::new();
    let handle = clock.start(AnimationRole::Rotation, 1_000.0, true, Easing::Linear);

    clock.tick(1_000.0);
    assert_eq!(clock.progress(handle), Some(0.0));
    assert!(clock.is_running(handle));

    clock.tick(250.0);
    assert_abs_diff_eq!(clock.progress(handle).expect("running"), 0.25, epsilon = 1e-12);
    assert!(clock.is_animating());
}

#[test]
fn starting_same_role_cancels_previous_timeline() {
    let mut clock = AnimationClock::new();
    let first = clock.start(AnimationRole::Entry, 500.0, false, Easing::Linear);
    let rotation = clock.start(AnimationRole::Rotation, 500.0, true, Easing::Linear);
    let second = clock.start(AnimationRole::Entry, 500.0, false, Easing::Linear);

    assert_eq!(clock.progress(first), None);
    assert!(!clock.is_running(first));
    assert!(clock.is_running(second));
    assert!(clock.is_running(rotation));
    assert!(clock.is_role_running(AnimationRole::Entry));
}

#[test]
fn cancelling_twice_is_a_no_op() {
    let mut clock = AnimationClock::new();
    let handle = clock.start(AnimationRole::Entry, 500.0, false, Easing::Linear);

    assert!(clock.cancel(handle));
    assert!(!clock.cancel(handle));
    assert!(!clock.is_animating());

    clock.tick(100.0);
    assert!(!clock.cancel(handle));
}

#[test]
fn eased_progress_differs_from_raw_progress() {
    let mut clock = AnimationClock::new();
    let handle = clock.start(AnimationRole::Entry, 1_000.0, false, Easing::Decelerate);
    clock.tick(500.0);

    assert_abs_diff_eq!(clock.raw_progress(handle).expect("raw"), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(clock.progress(handle).expect("eased"), 0.75, epsilon = 1e-12);
}

#[test]
fn absolute_ticks_ignore_earlier_times() {
    let mut clock = AnimationClock::new();
    let handle = clock.start(AnimationRole::Entry, 200.0, false, Easing::Linear);

    clock.tick_to(100.0);
    clock.tick_to(50.0);
    assert_eq!(clock.now_ms(), 100.0);
    assert_abs_diff_eq!(clock.progress(handle).expect("running"), 0.5, epsilon = 1e-12);
}

#[test]
fn invalid_durations_complete_or_pin() {
    let mut clock = AnimationClock::new();
    let entry = clock.start(AnimationRole::Entry, f64::NAN, false, Easing::Linear);
    let rotation = clock.start(AnimationRole::Rotation, -10.0, true, Easing::Linear);
    clock.tick(1_000.0);

    assert_eq!(clock.progress(entry), Some(1.0));
    assert!(!clock.is_running(entry));
    assert_eq!(clock.progress(rotation), Some(0.0));
}

#[test]
fn cancel_all_stops_every_role() {
    let mut clock = AnimationClock::new();
    clock.start(AnimationRole::Entry, 500.0, false, Easing::Linear);
    clock.start(AnimationRole::Rotation, 500.0, true, Easing::Linear);
    clock.cancel_all();

    assert!(!clock.is_animating());
    assert!(!clock.tick(16.0));
}

proptest! {
    #[test]
    fn one_shot_progress_is_monotonic_and_bounded(
        deltas in proptest::collection::vec(0.0f64..400.0, 1..64),
        duration in 1.0f64..5_000.0
    ) {
        let mut clock = AnimationClock::new();
        let handle = clock.start(AnimationRole::Entry, duration, false, Easing::Decelerate);
        let mut previous = 0.0;
        for delta in deltas {
            clock.tick(delta);
            let progress = clock.progress(handle).expect("timeline exists");
            prop_assert!((0.0..=1.0).contains(&progress));
            prop_assert!(progress >= previous);
            previous = progress;
        }
    }

    #[test]
    fn repeating_progress_stays_below_one(
        deltas in proptest::collection::vec(0.0f64..3_000.0, 1..64),
        duration in 1.0f64..2_000.0
    ) {
        let mut clock = AnimationClock::new();
        let handle = clock.start(AnimationRole::Rotation, duration, true, Easing::Linear);
        for delta in deltas {
            clock.tick(delta);
            let progress = clock.progress(handle).expect("timeline exists");
            prop_assert!((0.0..1.0).contains(&progress));
        }
    }
}
