//! Hard input limits. A snapshot exceeding any of these is rejected up front
//! rather than discovered mid-computation.

/// Table counts are in the tens for a real floor plan; the join search is
/// O(n³) over joinable free tables, so keep n bounded.
pub const MAX_TABLES: usize = 512;

/// At most one row per (day-of-week, service) is meaningful; allow slack for
/// sloppy exports that duplicate rows.
pub const MAX_SCHEDULE_ROWS: usize = 64;

pub const MAX_RESERVATIONS: usize = 100_000;

pub const MAX_BLOCKS: usize = 10_000;

/// Upper bound on generated slots per service window (24h at 1-minute steps).
pub const MAX_SLOTS_PER_WINDOW: usize = 1_440;

/// Meals and slot grids never span more than a day; anything larger is a
/// data-entry error, and unbounded values overflow datetime arithmetic.
pub const MAX_MEAL_DURATION_MINUTES: i64 = 1_440;

pub const MAX_SLOT_INTERVAL_MINUTES: i64 = 1_440;

/// Advance notice tops out at 30 days.
pub const MAX_MIN_ADVANCE_MINUTES: i64 = 43_200;

/// Ten years of booking window.
pub const MAX_BOOKING_WINDOW_DAYS: i64 = 3_650;
