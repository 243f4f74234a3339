//! couvert — availability and table-assignment engine for restaurant
//! reservations.
//!
//! Given a restaurant's schedule, its floor of tables, the existing
//! reservations and maintenance blocks, and a requested party, the engine
//! decides which time slots are offerable, whether a slot can seat the
//! party, and which table or joinable combination to assign. Persistence,
//! authentication and UI live elsewhere; callers feed the engine an
//! in-memory [`snapshot::Snapshot`] and commit the returned assignment
//! themselves.

pub mod engine;
pub mod limits;
pub mod model;
pub mod observability;
pub mod snapshot;

pub use engine::{check_availability, AvailabilityOutcome, EngineError};
pub use model::{Assignment, AvailabilityRequest, ReservationStatus, ServiceKind};
pub use snapshot::Snapshot;
