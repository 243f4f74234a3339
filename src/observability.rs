use crate::engine::{AvailabilityOutcome, EngineError};

// ── Engine metrics ──────────────────────────────────────────────

/// Counter: availability requests decided. Labels: outcome.
pub const REQUESTS_TOTAL: &str = "couvert_requests_total";

/// Histogram: full decision pipeline duration in seconds.
pub const DECISION_DURATION_SECONDS: &str = "couvert_decision_duration_seconds";

/// Map a decision to a short label for metrics.
pub fn outcome_label(result: &Result<AvailabilityOutcome, EngineError>) -> &'static str {
    match result {
        Ok(_) => "assigned",
        Err(EngineError::Closed) => "closed",
        Err(EngineError::NoSlots) => "no_slots",
        Err(EngineError::Infeasible(_)) => "infeasible",
        Err(EngineError::InvalidConfig(_)) => "invalid_config",
    }
}

/// Install a plain fmt tracing subscriber. For host applications that have
/// not set one up; embedding apps with their own subscriber skip this.
pub fn init_tracing() {
    tracing_subscriber::fmt::init();
}
