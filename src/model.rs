use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Half-open interval `[start, end)` in local restaurant time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Span {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(start < end, "Span start must be before end");
        Self { start, end }
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains_instant(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t < self.end
    }
}

/// The two seating periods of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceKind {
    Midi,
    Soir,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Canceled,
    NoShow,
}

impl ReservationStatus {
    /// Whether a reservation in this status holds its tables.
    /// Canceled and no-show reservations never conflict.
    pub fn occupies(&self) -> bool {
        matches!(self, ReservationStatus::Pending | ReservationStatus::Confirmed)
    }
}

/// Fixed time range that narrows (never widens) one service's hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionalWindow {
    pub service: ServiceKind,
    #[serde(with = "crate::snapshot::hhmm")]
    pub start: NaiveTime,
    #[serde(with = "crate::snapshot::hhmm")]
    pub end: NaiveTime,
}

/// Per-restaurant policy knobs. Immutable for one availability computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantConfig {
    #[serde(alias = "mealDurationMinutes")]
    pub meal_duration_minutes: i64,
    #[serde(alias = "slotIntervalMinutes")]
    pub slot_interval_minutes: i64,
    #[serde(alias = "minAdvanceMinutes")]
    pub min_advance_minutes: i64,
    #[serde(alias = "bookingWindowDays")]
    pub booking_window_days: i64,
    #[serde(alias = "groupPendingThreshold")]
    pub group_pending_threshold: u32,
    #[serde(alias = "autoConfirmEnabled")]
    pub auto_confirm_enabled: bool,
    #[serde(alias = "tableJoiningEnabled")]
    pub table_joining_enabled: bool,
    #[serde(default, alias = "promotionalWindows")]
    pub promotional_windows: Vec<PromotionalWindow>,
}

impl RestaurantConfig {
    pub fn promotional_window(&self, service: ServiceKind) -> Option<&PromotionalWindow> {
        self.promotional_windows.iter().find(|w| w.service == service)
    }
}

/// One row per (day-of-week, service). `day_of_week`: 0 = Monday … 6 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSchedule {
    #[serde(alias = "dayOfWeek")]
    pub day_of_week: u8,
    pub service: ServiceKind,
    #[serde(alias = "isOpen")]
    pub is_open: bool,
    #[serde(default, with = "crate::snapshot::hhmm_opt", alias = "startTime")]
    pub start: Option<NaiveTime>,
    #[serde(default, with = "crate::snapshot::hhmm_opt", alias = "endTime")]
    pub end: Option<NaiveTime>,
}

/// Floor-plan coordinate, used only for the join distance tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: Ulid,
    pub seats: u32,
    #[serde(alias = "isJoinable")]
    pub is_joinable: bool,
    #[serde(alias = "positionX")]
    pub position_x: f64,
    #[serde(alias = "positionY")]
    pub position_y: f64,
    #[serde(alias = "isActive")]
    pub is_active: bool,
}

impl Table {
    pub fn position(&self) -> Position {
        Position {
            x: self.position_x,
            y: self.position_y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Ulid,
    #[serde(alias = "tableIds")]
    pub table_ids: Vec<Ulid>,
    #[serde(alias = "dateTimeStart")]
    pub date_time_start: NaiveDateTime,
    #[serde(alias = "dateTimeEnd")]
    pub date_time_end: NaiveDateTime,
    pub status: ReservationStatus,
    #[serde(alias = "guestsCount")]
    pub guests: u32,
}

impl Reservation {
    pub fn span(&self) -> Span {
        Span::new(self.date_time_start, self.date_time_end)
    }
}

/// Maintenance or privatization window on one table.
/// Blocks always conflict, regardless of any reservation status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBlock {
    pub id: Ulid,
    #[serde(alias = "tableId")]
    pub table_id: Ulid,
    #[serde(alias = "startDateTime")]
    pub start_date_time: NaiveDateTime,
    #[serde(alias = "endDateTime")]
    pub end_date_time: NaiveDateTime,
}

impl TableBlock {
    pub fn span(&self) -> Span {
        Span::new(self.start_date_time, self.end_date_time)
    }
}

/// What the diner asked for. Computed against a snapshot, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    pub date: NaiveDate,
    pub service: ServiceKind,
    #[serde(with = "crate::snapshot::hhmm")]
    pub time: NaiveTime,
    #[serde(alias = "guestsCount")]
    pub guests: u32,
}

/// Engine output: the table(s) to seat the party at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub table_ids: Vec<Ulid>,
    pub total_seats: u32,
    /// `total_seats - guests`, always >= 0 for a feasible assignment.
    pub overflow_seats: u32,
    pub status: ReservationStatus,
}
