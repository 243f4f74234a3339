use ulid::Ulid;

use crate::model::Table;

// ── Capacity solving ─────────────────────────────────────────────

/// A concrete seating: the table ids (in selection order) and what they add
/// up to. Status is decided afterwards by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seating {
    pub table_ids: Vec<Ulid>,
    pub total_seats: u32,
}

/// Pick the best single table or joinable combination for the party.
///
/// Phases, first success wins:
/// 1. smallest adequate single table (stable by input order on seat ties);
/// 2. two-table join over joinable tables, best `(overflow, distance)`;
/// 3. three-table join, tried only when no pair fits at all.
///
/// The phase order means fewer physical tables always win, even when a
/// larger join would waste fewer seats. Candidates are enumerated
/// exhaustively and scored lexicographically, so the result does not depend
/// on input ordering beyond declared tie-breaks. O(n³) worst case over
/// joinable free tables; table counts are in the tens.
pub fn solve(free: &[&Table], guests: u32, joining_enabled: bool) -> Option<Seating> {
    if let Some(seating) = best_single(free, guests) {
        return Some(seating);
    }
    if !joining_enabled {
        return None;
    }
    let joinable: Vec<&Table> = free.iter().copied().filter(|t| t.is_joinable).collect();
    best_pair(&joinable, guests).or_else(|| best_triple(&joinable, guests))
}

/// Largest party this set of free tables could seat, used for the
/// "up to N guests" hint. Mirrors the solve phases: the best single always
/// counts; joins count only when enabled, capped at three tables.
pub fn max_capacity(free: &[&Table], joining_enabled: bool) -> u32 {
    let best_single = free.iter().map(|t| t.seats).max().unwrap_or(0);
    if !joining_enabled {
        return best_single;
    }
    let mut joinable_seats: Vec<u32> = free
        .iter()
        .filter(|t| t.is_joinable)
        .map(|t| t.seats)
        .collect();
    joinable_seats.sort_unstable_by(|a, b| b.cmp(a));
    let top_sum = |n: usize| -> u32 {
        if joinable_seats.len() >= n {
            joinable_seats[..n].iter().sum()
        } else {
            0
        }
    };
    best_single.max(top_sum(2)).max(top_sum(3))
}

fn best_single(free: &[&Table], guests: u32) -> Option<Seating> {
    let mut best: Option<&Table> = None;
    for &t in free {
        if t.seats >= guests && best.is_none_or(|b| t.seats < b.seats) {
            best = Some(t);
        }
    }
    best.map(|t| Seating {
        table_ids: vec![t.id],
        total_seats: t.seats,
    })
}

fn best_pair(joinable: &[&Table], guests: u32) -> Option<Seating> {
    let mut best: Option<(u32, f64, [&Table; 2])> = None;
    for i in 0..joinable.len() {
        for j in (i + 1)..joinable.len() {
            let (a, b) = (joinable[i], joinable[j]);
            let total = a.seats + b.seats;
            if total < guests {
                continue;
            }
            let overflow = total - guests;
            let distance = a.position().distance_to(&b.position());
            if best.is_none_or(|(bo, bd, _)| {
                overflow < bo || (overflow == bo && distance < bd)
            }) {
                best = Some((overflow, distance, [a, b]));
            }
        }
    }
    best.map(|(_, _, pair)| Seating {
        table_ids: pair.iter().map(|t| t.id).collect(),
        total_seats: pair.iter().map(|t| t.seats).sum(),
    })
}

fn best_triple(joinable: &[&Table], guests: u32) -> Option<Seating> {
    let mut best: Option<(u32, f64, [&Table; 3])> = None;
    for i in 0..joinable.len() {
        for j in (i + 1)..joinable.len() {
            for k in (j + 1)..joinable.len() {
                let (a, b, c) = (joinable[i], joinable[j], joinable[k]);
                let total = a.seats + b.seats + c.seats;
                if total < guests {
                    continue;
                }
                let overflow = total - guests;
                // Mean of the three edges of the triangle.
                let distance = (a.position().distance_to(&b.position())
                    + a.position().distance_to(&c.position())
                    + b.position().distance_to(&c.position()))
                    / 3.0;
                if best.is_none_or(|(bo, bd, _)| {
                    overflow < bo || (overflow == bo && distance < bd)
                }) {
                    best = Some((overflow, distance, [a, b, c]));
                }
            }
        }
    }
    best.map(|(_, _, triple)| Seating {
        table_ids: triple.iter().map(|t| t.id).collect(),
        total_seats: triple.iter().map(|t| t.seats).sum(),
    })
}
