//! Input normalization boundary.
//!
//! Callers hand the engine one immutable snapshot per invocation. Upstream
//! exports are sloppy about field naming (`positionX` vs `position_x`,
//! `"12:00"` vs `"12:00:00"`), so every entity is normalized to one canonical
//! shape here — the engine core only ever sees one schema per entity.

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;
use crate::limits::*;
use crate::model::*;

/// Everything one availability computation reads. The caller has already
/// filtered reservations and blocks to the restaurant and the relevant date
/// range; the engine treats the snapshot as immutable and produces no side
/// effects on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: RestaurantConfig,
    #[serde(default)]
    pub schedules: Vec<ServiceSchedule>,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    #[serde(default)]
    pub blocks: Vec<TableBlock>,
}

impl Snapshot {
    /// Deserialize and normalize a JSON snapshot. Field aliases from legacy
    /// exports are accepted; the result is always the canonical schema.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reject malformed policy and out-of-limit inputs before any
    /// computation. Misconfiguration should be caught at settings-write
    /// time by the backoffice; this is the engine's last line.
    pub fn validate(&self) -> Result<(), EngineError> {
        let c = &self.config;
        if c.meal_duration_minutes <= 0 || c.meal_duration_minutes > MAX_MEAL_DURATION_MINUTES {
            return Err(EngineError::InvalidConfig("meal_duration_minutes out of range"));
        }
        if c.slot_interval_minutes <= 0 || c.slot_interval_minutes > MAX_SLOT_INTERVAL_MINUTES {
            return Err(EngineError::InvalidConfig("slot_interval_minutes out of range"));
        }
        if c.min_advance_minutes < 0 || c.min_advance_minutes > MAX_MIN_ADVANCE_MINUTES {
            return Err(EngineError::InvalidConfig("min_advance_minutes out of range"));
        }
        if c.booking_window_days <= 0 || c.booking_window_days > MAX_BOOKING_WINDOW_DAYS {
            return Err(EngineError::InvalidConfig("booking_window_days out of range"));
        }
        for promo in &c.promotional_windows {
            if promo.start >= promo.end {
                return Err(EngineError::InvalidConfig("promotional window is empty"));
            }
        }

        if self.schedules.len() > MAX_SCHEDULE_ROWS {
            return Err(EngineError::InvalidConfig("too many schedule rows"));
        }
        for row in &self.schedules {
            if row.day_of_week > 6 {
                return Err(EngineError::InvalidConfig("day_of_week out of range"));
            }
        }

        if self.tables.len() > MAX_TABLES {
            return Err(EngineError::InvalidConfig("too many tables"));
        }
        for table in &self.tables {
            if table.seats == 0 {
                return Err(EngineError::InvalidConfig("table seats must be >= 1"));
            }
        }

        if self.reservations.len() > MAX_RESERVATIONS {
            return Err(EngineError::InvalidConfig("too many reservations"));
        }
        for r in &self.reservations {
            if r.date_time_start >= r.date_time_end {
                return Err(EngineError::InvalidConfig("reservation interval is empty"));
            }
        }

        if self.blocks.len() > MAX_BLOCKS {
            return Err(EngineError::InvalidConfig("too many blocks"));
        }
        for b in &self.blocks {
            if b.start_date_time >= b.end_date_time {
                return Err(EngineError::InvalidConfig("block interval is empty"));
            }
        }

        Ok(())
    }
}

fn parse_hhmm(s: &str) -> Result<chrono::NaiveTime, String> {
    chrono::NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| chrono::NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|e| format!("invalid time {s:?}: {e}"))
}

/// Serde helper for `"HH:MM"` wall-clock times (also accepts `"HH:MM:SS"`).
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_hhmm(&raw).map_err(serde::de::Error::custom)
    }
}

/// `Option`-wrapped variant of [`hhmm`]; empty strings count as absent, the
/// way legacy schedule exports encode "no service".
pub mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => s.serialize_str(&t.format("%H:%M").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => super::parse_hhmm(s).map(Some).map_err(serde::de::Error::custom),
        }
    }
}
