//! Day-by-day shift reconstruction.
//!
//! Punches are consumed one day at a time, in chronological order, with a
//! single piece of state carried across day boundaries: an unmatched
//! clock-in waiting for an early-morning clock-out on the following day.
//! The state is threaded through an explicit [`DayLedger`] accumulator so
//! each day transition can be tested in isolation.
//!
//! Rules, in the order they are applied per day:
//!
//! 1. A first punch at or before 04:00 closes a pending clock-in as an
//!    overnight shift (or is logged as an unpaired OUT if nothing is
//!    pending).
//! 2. A first punch after 04:00 abandons any pending clock-in as
//!    incomplete; a pending clock-in never survives past the next day.
//! 3. Remaining punches pair up as same-day (IN, OUT) shifts, adding 24
//!    hours when the OUT reads earlier than the IN.
//! 4. A trailing unpaired IN is deferred to the next day only when that
//!    day's first punch is at or before 04:00; otherwise it is recorded
//!    as incomplete immediately.
//!
//! Any shift longer than 18 hours is ignored and flagged rather than
//! paid; that cap is the backstop against pairings that silently span
//! more than one midnight.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{PunchTime, ShiftFlag, ShiftSegment};

use super::blocks::DaySchedule;

/// Punches at or before this minute-of-day belong to the previous day's
/// shift (the 04:00 rollover rule).
const ROLLOVER_CUTOFF_MINUTES: u32 = 4 * 60;

/// Shifts longer than this are ignored and flagged for review.
const MAX_SHIFT_MINUTES: i64 = 18 * 60;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// The reconstructed week for one employee, before identity and week
/// metadata are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconstructedWeek {
    /// All shift segments, valid and ignored, in chronological order.
    pub segments: Vec<ShiftSegment>,
    /// Deduplicated anomaly flags in first-occurrence order.
    pub flags: Vec<ShiftFlag>,
    /// Sum of hours over non-ignored segments, rounded to 2 decimal places.
    pub total_hours: Decimal,
}

/// A clock-in with no same-day clock-out, awaiting the next day's
/// rollover check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingClockIn {
    time: PunchTime,
    date: NaiveDate,
}

/// The accumulator threaded through the day-by-day fold.
#[derive(Debug, Default)]
struct DayLedger {
    segments: Vec<ShiftSegment>,
    flags: Vec<ShiftFlag>,
    total_hours: Decimal,
    pending_clock_in: Option<PendingClockIn>,
}

/// Reconstructs one employee's week from their per-day punch lists.
///
/// Days must be in chronological order (they are, coming from
/// [`scan_employee_blocks`]). Every punch token ends up in exactly one
/// segment; nothing is silently dropped.
///
/// [`scan_employee_blocks`]: super::blocks::scan_employee_blocks
pub fn reconstruct_days(days: &[DaySchedule]) -> ReconstructedWeek {
    let mut ledger = DayLedger::default();

    for (index, day) in days.iter().enumerate() {
        let next_first_punch = days.get(index + 1).and_then(|d| d.punches.first()).copied();
        let is_last_day = index + 1 == days.len();
        ledger.advance(day, next_first_punch, is_last_day);
    }

    ledger.finish()
}

impl DayLedger {
    /// Processes a single day, consuming all of its punches.
    fn advance(&mut self, day: &DaySchedule, next_first_punch: Option<PunchTime>, is_last_day: bool) {
        let mut cursor = 0;

        match day.punches.first().copied() {
            Some(first) if first.minute_of_day() <= ROLLOVER_CUTOFF_MINUTES => {
                cursor = 1;
                match self.pending_clock_in.take() {
                    Some(pending) => self.record_shift(pending.date, pending.time, first),
                    None => self.segments.push(ShiftSegment::unpaired_out(day.date, first)),
                }
            }
            Some(_) => {
                if let Some(pending) = self.pending_clock_in.take() {
                    self.record_incomplete(pending.date, pending.time);
                }
            }
            None => {
                // A pending clock-in may still roll over to tomorrow, but
                // not past the end of the period.
                if is_last_day {
                    if let Some(pending) = self.pending_clock_in.take() {
                        self.record_incomplete(pending.date, pending.time);
                    }
                }
            }
        }

        while cursor < day.punches.len() {
            let clock_in = day.punches[cursor];
            cursor += 1;

            if cursor < day.punches.len() {
                let clock_out = day.punches[cursor];
                cursor += 1;
                self.record_shift(day.date, clock_in, clock_out);
            } else {
                // Trailing unpaired IN: defer only if tomorrow opens with
                // an early-morning punch that can serve as its OUT.
                let defers = next_first_punch
                    .is_some_and(|next| next.minute_of_day() <= ROLLOVER_CUTOFF_MINUTES);
                if defers {
                    self.pending_clock_in = Some(PendingClockIn {
                        time: clock_in,
                        date: day.date,
                    });
                } else {
                    self.record_incomplete(day.date, clock_in);
                }
            }
        }
    }

    /// Records an (IN, OUT) pairing, applying the single-midnight
    /// adjustment and the 18-hour validity cap.
    fn record_shift(&mut self, date: NaiveDate, clock_in: PunchTime, clock_out: PunchTime) {
        let minutes = shift_minutes(clock_in, clock_out);
        if minutes > MAX_SHIFT_MINUTES {
            self.flags.push(ShiftFlag::InvalidShift);
            self.segments
                .push(ShiftSegment::over_cap(date, clock_in, clock_out));
        } else {
            let hours = minutes_to_hours(minutes);
            self.total_hours += hours;
            self.segments
                .push(ShiftSegment::valid(date, clock_in, clock_out, hours));
        }
    }

    /// Records a clock-in whose clock-out never arrived.
    fn record_incomplete(&mut self, date: NaiveDate, clock_in: PunchTime) {
        self.flags.push(ShiftFlag::IncompleteShift);
        self.segments.push(ShiftSegment::incomplete(date, clock_in));
    }

    /// Closes out the fold: any still-pending clock-in is incomplete, and
    /// flags are deduplicated preserving first-occurrence order.
    fn finish(mut self) -> ReconstructedWeek {
        if let Some(pending) = self.pending_clock_in.take() {
            self.record_incomplete(pending.date, pending.time);
        }

        let mut flags = Vec::new();
        for flag in self.flags {
            if !flags.contains(&flag) {
                flags.push(flag);
            }
        }

        ReconstructedWeek {
            segments: self.segments,
            flags,
            total_hours: round_hours(self.total_hours),
        }
    }
}

/// Duration in minutes from IN to OUT, adding a day when the OUT reads
/// numerically earlier than the IN (a single midnight crossing).
fn shift_minutes(clock_in: PunchTime, clock_out: PunchTime) -> i64 {
    let in_minutes = i64::from(clock_in.minute_of_day());
    let mut out_minutes = i64::from(clock_out.minute_of_day());
    if out_minutes < in_minutes {
        out_minutes += MINUTES_PER_DAY;
    }
    out_minutes - in_minutes
}

/// Converts minutes to hours rounded to 2 decimal places.
///
/// Half-away-from-zero matches the rounding of the paysheets this data
/// previously fed by hand.
fn minutes_to_hours(minutes: i64) -> Decimal {
    round_hours(Decimal::new(minutes, 0) / Decimal::new(60, 0))
}

fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
