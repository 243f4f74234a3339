use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::limits::MAX_SLOTS_PER_WINDOW;
use crate::model::RestaurantConfig;

use super::schedule::ServiceWindow;

// ── Slot generation ──────────────────────────────────────────────

/// Expand an opening window into discrete offerable start times.
///
/// Steps by `slot_interval_minutes` from the window start while strictly
/// before the window end (half-open: a slot equal to the end is excluded).
/// When the request is for today, slots at or before
/// `now + min_advance_minutes` are dropped — only strictly-later starts are
/// offerable. Fully materialized and ascending; same inputs, same output.
///
/// `slot_interval_minutes <= 0` is rejected by snapshot validation before
/// this runs.
pub fn generate_slots(
    date: NaiveDate,
    window: &ServiceWindow,
    config: &RestaurantConfig,
    now: NaiveDateTime,
) -> Vec<NaiveTime> {
    let step = Duration::minutes(config.slot_interval_minutes);
    let advance_floor = (date == now.date())
        .then(|| now + Duration::minutes(config.min_advance_minutes));

    let mut slots = Vec::new();
    let mut t = window.start;
    while t < window.end && slots.len() < MAX_SLOTS_PER_WINDOW {
        let offerable = match advance_floor {
            Some(floor) => date.and_time(t) > floor,
            None => true,
        };
        if offerable {
            slots.push(t);
        }
        let (next, wrapped) = t.overflowing_add_signed(step);
        if wrapped != 0 {
            break; // stepped past midnight
        }
        t = next;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    fn config(interval: i64, advance: i64) -> RestaurantConfig {
        RestaurantConfig {
            meal_duration_minutes: 90,
            slot_interval_minutes: interval,
            min_advance_minutes: advance,
            booking_window_days: 30,
            group_pending_threshold: 8,
            auto_confirm_enabled: true,
            table_joining_enabled: true,
            promotional_windows: vec![],
        }
    }

    fn window(start: NaiveTime, end: NaiveTime) -> ServiceWindow {
        ServiceWindow { start, end }
    }

    fn other_day_now() -> NaiveDateTime {
        // A different calendar day: the advance floor never applies.
        NaiveDate::from_ymd_opt(2026, 8, 25)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn steps_through_window_half_open() {
        let slots = generate_slots(
            day(),
            &window(t(12, 0), t(14, 0)),
            &config(30, 60),
            other_day_now(),
        );
        assert_eq!(slots, vec![t(12, 0), t(12, 30), t(13, 0), t(13, 30)]);
        // 14:00 == end is excluded.
    }

    #[test]
    fn output_strictly_increasing_within_window() {
        let slots = generate_slots(
            day(),
            &window(t(19, 0), t(23, 0)),
            &config(15, 0),
            other_day_now(),
        );
        assert!(!slots.is_empty());
        for pair in slots.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for s in &slots {
            assert!(*s >= t(19, 0) && *s < t(23, 0));
        }
    }

    #[test]
    fn advance_floor_drops_todays_early_slots() {
        // MIDI 12:00–14:00, 15-minute interval, 60-minute advance, now 13:00
        // same day: the floor is 14:00 and slots must be strictly later, but
        // everything at or after 14:00 is outside the half-open window.
        let now = day().and_hms_opt(13, 0, 0).unwrap();
        let slots = generate_slots(day(), &window(t(12, 0), t(14, 0)), &config(15, 60), now);
        assert!(slots.is_empty());
    }

    #[test]
    fn advance_floor_is_strict() {
        // now 11:00 + 60min → floor 12:00; the 12:00 slot itself is dropped.
        let now = day().and_hms_opt(11, 0, 0).unwrap();
        let slots = generate_slots(day(), &window(t(12, 0), t(14, 0)), &config(30, 60), now);
        assert_eq!(slots, vec![t(12, 30), t(13, 0), t(13, 30)]);
    }

    #[test]
    fn no_floor_on_other_days() {
        let now = other_day_now();
        let slots = generate_slots(day(), &window(t(12, 0), t(14, 0)), &config(60, 600), now);
        assert_eq!(slots, vec![t(12, 0), t(13, 0)]);
    }

    #[test]
    fn interval_larger_than_window_yields_single_slot() {
        let slots = generate_slots(
            day(),
            &window(t(12, 0), t(14, 0)),
            &config(180, 0),
            other_day_now(),
        );
        assert_eq!(slots, vec![t(12, 0)]);
    }

    #[test]
    fn step_past_midnight_terminates() {
        // 23:30 + 90min wraps; the generator must stop, not loop around.
        let slots = generate_slots(
            day(),
            &window(t(22, 0), t(23, 45)),
            &config(90, 0),
            other_day_now(),
        );
        assert_eq!(slots, vec![t(22, 0), t(23, 30)]);
    }

    #[test]
    fn deterministic() {
        let now = day().and_hms_opt(10, 0, 0).unwrap();
        let a = generate_slots(day(), &window(t(12, 0), t(15, 0)), &config(45, 30), now);
        let b = generate_slots(day(), &window(t(12, 0), t(15, 0)), &config(45, 30), now);
        assert_eq!(a, b);
    }
}
