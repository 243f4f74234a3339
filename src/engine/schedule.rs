use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::model::*;

// ── Schedule resolution ──────────────────────────────────────────

/// Effective opening window for one service on one date, local wall-clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Resolve the opening window for `date`/`service`, or `None` when closed.
///
/// A missing row, `is_open == false`, or an absent time field all mean the
/// service does not occur that day. Windows never cross midnight; a row with
/// `start >= end` is treated as closed. If the restaurant carries a
/// promotional window for this service, the effective window is the
/// intersection — promotional windows narrow hours, never widen them.
pub fn resolve_window(
    date: NaiveDate,
    service: ServiceKind,
    schedules: &[ServiceSchedule],
    config: &RestaurantConfig,
) -> Option<ServiceWindow> {
    let dow = date.weekday().num_days_from_monday() as u8;
    let row = schedules
        .iter()
        .find(|s| s.day_of_week == dow && s.service == service)?;
    if !row.is_open {
        return None;
    }
    let (mut start, mut end) = (row.start?, row.end?);
    if start >= end {
        return None;
    }

    if let Some(promo) = config.promotional_window(service) {
        start = start.max(promo.start);
        end = end.min(promo.end);
        if start >= end {
            return None;
        }
    }

    Some(ServiceWindow { start, end })
}

/// Which services are offerable at all on `date`. First pipeline step:
/// the caller picks a date and is shown the open services.
pub fn available_services(
    date: NaiveDate,
    schedules: &[ServiceSchedule],
    config: &RestaurantConfig,
) -> Vec<ServiceKind> {
    [ServiceKind::Midi, ServiceKind::Soir]
        .into_iter()
        .filter(|&service| resolve_window(date, service, schedules, config).is_some())
        .collect()
}
