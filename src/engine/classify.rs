use crate::model::{ReservationStatus, RestaurantConfig};

// ── Status classification ────────────────────────────────────────

/// Decide the status of a feasible assignment. Never affects feasibility.
///
/// Groups at or above `group_pending_threshold` are always held for manual
/// confirmation, even when the restaurant auto-confirms; below that,
/// `auto_confirm_enabled` decides.
pub fn classify(guests: u32, config: &RestaurantConfig) -> ReservationStatus {
    if guests >= config.group_pending_threshold {
        return ReservationStatus::Pending;
    }
    if config.auto_confirm_enabled {
        ReservationStatus::Confirmed
    } else {
        ReservationStatus::Pending
    }
}
