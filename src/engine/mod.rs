//! The availability and table-assignment engine.
//!
//! A pure, synchronous decision pipeline over an immutable [`Snapshot`]:
//! schedule resolution → slot generation → conflict filtering → capacity
//! solving → status classification. No I/O, no shared state, no retries —
//! each call returns an assignment or one terminal [`EngineError`].

mod classify;
mod conflict;
mod error;
mod schedule;
mod slots;
mod solver;

pub use classify::classify;
pub use conflict::{free_tables, is_table_free};
pub use error::EngineError;
pub use schedule::{available_services, resolve_window, ServiceWindow};
pub use slots::generate_slots;
pub use solver::{max_capacity, solve, Seating};

use chrono::{Duration, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::model::*;
use crate::observability;
use crate::snapshot::Snapshot;

/// Successful decision: the assignment to persist, plus the informational
/// context the booking UI shows alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityOutcome {
    pub assignment: Assignment,
    /// Every offerable start time for the resolved window, ascending.
    pub available_slots: Vec<NaiveTime>,
    /// Largest party the requested slot could seat ("up to N guests").
    pub max_capacity_for_slot: u32,
}

/// Run the full decision pipeline for one request.
///
/// The snapshot is read at one instant and the decision is only as fresh as
/// the snapshot: two concurrent callers can both be told the same table is
/// free. Committing the returned assignment must re-validate freeness inside
/// the caller's transaction and reject on conflict — the engine does not
/// hold locks across check and commit.
pub fn check_availability(
    snapshot: &Snapshot,
    request: &AvailabilityRequest,
    now: NaiveDateTime,
) -> Result<AvailabilityOutcome, EngineError> {
    let started = std::time::Instant::now();
    let result = decide(snapshot, request, now);
    metrics::histogram!(observability::DECISION_DURATION_SECONDS)
        .record(started.elapsed().as_secs_f64());
    metrics::counter!(observability::REQUESTS_TOTAL, "outcome" => observability::outcome_label(&result))
        .increment(1);
    result
}

fn decide(
    snapshot: &Snapshot,
    request: &AvailabilityRequest,
    now: NaiveDateTime,
) -> Result<AvailabilityOutcome, EngineError> {
    snapshot.validate()?;
    if request.guests == 0 {
        return Err(EngineError::InvalidConfig("guests must be >= 1"));
    }
    let config = &snapshot.config;

    // Requests outside the booking window are simply not offerable.
    let today = now.date();
    if request.date < today || request.date > today + Duration::days(config.booking_window_days) {
        debug!(date = %request.date, "request outside booking window");
        return Err(EngineError::Closed);
    }

    let window = resolve_window(request.date, request.service, &snapshot.schedules, config)
        .ok_or_else(|| {
            debug!(date = %request.date, service = ?request.service, "service closed");
            EngineError::Closed
        })?;

    let available_slots = generate_slots(request.date, &window, config, now);
    if available_slots.is_empty() {
        debug!(date = %request.date, "window open but no offerable slot");
        return Err(EngineError::NoSlots);
    }
    if !available_slots.contains(&request.time) {
        debug!(time = %request.time, "requested time is not an offered slot");
        return Err(EngineError::NoSlots);
    }

    let start = request.date.and_time(request.time);
    let candidate = Span::new(start, start + Duration::minutes(config.meal_duration_minutes));
    let free = free_tables(&snapshot.tables, &candidate, &snapshot.blocks, &snapshot.reservations);

    let seating = solve(&free, request.guests, config.table_joining_enabled)
        .ok_or(EngineError::Infeasible(request.guests))?;
    let status = classify(request.guests, config);
    debug!(
        tables = seating.table_ids.len(),
        total_seats = seating.total_seats,
        ?status,
        "assignment found"
    );

    let max_capacity_for_slot = max_capacity(&free, config.table_joining_enabled);
    Ok(AvailabilityOutcome {
        assignment: Assignment {
            overflow_seats: seating.total_seats - request.guests,
            table_ids: seating.table_ids,
            total_seats: seating.total_seats,
            status,
        },
        available_slots,
        max_capacity_for_slot,
    })
}
