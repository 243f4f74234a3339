use ulid::Ulid;

use crate::model::*;

// ── Conflict detection ───────────────────────────────────────────

/// Whether `table_id` is free for the whole candidate window.
///
/// Half-open overlap test throughout, so a meal ending exactly when the next
/// one starts never conflicts. Blocks always occupy the table; reservations
/// occupy it only while pending or confirmed — canceled and no-show
/// reservations are dead weight in the snapshot.
pub fn is_table_free(
    table_id: Ulid,
    window: &Span,
    blocks: &[TableBlock],
    reservations: &[Reservation],
) -> bool {
    for block in blocks {
        if block.table_id == table_id && block.span().overlaps(window) {
            return false;
        }
    }
    for r in reservations {
        if r.status.occupies() && r.table_ids.contains(&table_id) && r.span().overlaps(window) {
            return false;
        }
    }
    true
}

/// The free subset of active tables for the candidate window, preserving
/// input order. Inactive tables are excluded from all computations.
pub fn free_tables<'a>(
    tables: &'a [Table],
    window: &Span,
    blocks: &[TableBlock],
    reservations: &[Reservation],
) -> Vec<&'a Table> {
    tables
        .iter()
        .filter(|t| t.is_active && is_table_free(t.id, window, blocks, reservations))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 9, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn table(seats: u32) -> Table {
        Table {
            id: Ulid::new(),
            seats,
            is_joinable: true,
            position_x: 0.0,
            position_y: 0.0,
            is_active: true,
        }
    }

    fn reservation(table_id: Ulid, start: NaiveDateTime, end: NaiveDateTime, status: ReservationStatus) -> Reservation {
        Reservation {
            id: Ulid::new(),
            table_ids: vec![table_id],
            date_time_start: start,
            date_time_end: end,
            status,
            guests: 2,
        }
    }

    fn block(table_id: Ulid, start: NaiveDateTime, end: NaiveDateTime) -> TableBlock {
        TableBlock {
            id: Ulid::new(),
            table_id,
            start_date_time: start,
            end_date_time: end,
        }
    }

    #[test]
    fn free_when_nothing_recorded() {
        let t = table(4);
        let window = Span::new(dt(12, 0), dt(13, 30));
        assert!(is_table_free(t.id, &window, &[], &[]));
    }

    #[test]
    fn block_overlap_occupies() {
        let t = table(4);
        let b = block(t.id, dt(12, 30), dt(13, 0));
        let window = Span::new(dt(12, 0), dt(13, 30));
        assert!(!is_table_free(t.id, &window, &[b], &[]));
    }

    #[test]
    fn block_on_other_table_ignored() {
        let t = table(4);
        let b = block(Ulid::new(), dt(12, 0), dt(14, 0));
        let window = Span::new(dt(12, 0), dt(13, 30));
        assert!(is_table_free(t.id, &window, &[b], &[]));
    }

    #[test]
    fn active_reservation_occupies() {
        let t = table(4);
        let window = Span::new(dt(12, 0), dt(13, 30));
        for status in [ReservationStatus::Pending, ReservationStatus::Confirmed] {
            let r = reservation(t.id, dt(13, 0), dt(14, 30), status);
            assert!(!is_table_free(t.id, &window, &[], &[r]));
        }
    }

    #[test]
    fn dead_reservation_never_conflicts() {
        let t = table(4);
        let window = Span::new(dt(12, 0), dt(13, 30));
        for status in [ReservationStatus::Canceled, ReservationStatus::NoShow] {
            let r = reservation(t.id, dt(12, 0), dt(13, 30), status);
            assert!(is_table_free(t.id, &window, &[], &[r]));
        }
    }

    #[test]
    fn back_to_back_is_free() {
        let t = table(4);
        // Existing meal [12:00, 13:30); candidate [13:30, 15:00) touches the
        // boundary instant only.
        let r = reservation(t.id, dt(12, 0), dt(13, 30), ReservationStatus::Confirmed);
        let window = Span::new(dt(13, 30), dt(15, 0));
        assert!(is_table_free(t.id, &window, &[], &[r]));
    }

    #[test]
    fn multi_table_reservation_occupies_each_table() {
        let a = table(2);
        let b = table(2);
        let mut r = reservation(a.id, dt(12, 0), dt(13, 30), ReservationStatus::Confirmed);
        r.table_ids.push(b.id);
        let window = Span::new(dt(12, 30), dt(14, 0));
        assert!(!is_table_free(a.id, &window, &[], &[r.clone()]));
        assert!(!is_table_free(b.id, &window, &[], &[r]));
    }

    #[test]
    fn free_tables_skips_inactive_and_busy() {
        let mut inactive = table(4);
        inactive.is_active = false;
        let busy = table(4);
        let free = table(6);
        let r = reservation(busy.id, dt(12, 0), dt(14, 0), ReservationStatus::Pending);
        let tables = vec![inactive, busy, free.clone()];
        let window = Span::new(dt(12, 0), dt(13, 30));
        let result = free_tables(&tables, &window, &[], &[r]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, free.id);
    }

    #[test]
    fn free_tables_preserves_input_order() {
        let tables: Vec<Table> = (0..4).map(|_| table(2)).collect();
        let window = Span::new(dt(12, 0), dt(13, 30));
        let result = free_tables(&tables, &window, &[], &[]);
        let ids: Vec<Ulid> = result.iter().map(|t| t.id).collect();
        let expected: Vec<Ulid> = tables.iter().map(|t| t.id).collect();
        assert_eq!(ids, expected);
    }
}
