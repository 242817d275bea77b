//! Per-day step counts.

use std::collections::BTreeMap;

use jiff::civil::Date;

use super::policy::MAX_TASKS_PER_DAY;
use crate::{calendar, models::Step};

/// How many steps sit on each calendar day.
///
/// Days without steps are not stored, so a count of zero and an absent key
/// mean the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    counts: BTreeMap<Date, usize>,
}

impl Occupancy {
    /// Counts every dated step. Undated steps occupy nothing.
    pub fn from_steps<'a, I>(steps: I) -> Self
    where
        I: IntoIterator<Item = &'a Step>,
    {
        let mut occupancy = Self::default();
        for date in steps.into_iter().filter_map(|step| step.scheduled_date) {
            occupancy.occupy(date);
        }
        occupancy
    }

    /// Number of steps on `date`.
    pub fn count(&self, date: Date) -> usize {
        self.counts.get(&date).copied().unwrap_or(0)
    }

    /// True while `date` is below the daily cap.
    pub fn has_room(&self, date: Date) -> bool {
        self.count(date) < MAX_TASKS_PER_DAY
    }

    /// Adds one step to `date`.
    pub fn occupy(&mut self, date: Date) {
        *self.counts.entry(date).or_insert(0) += 1;
    }

    /// Removes one step from `date`, dropping the day once it is empty.
    pub fn release(&mut self, date: Date) {
        if let Some(count) = self.counts.get_mut(&date) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.counts.remove(&date);
            }
        }
    }

    /// First day on or after `start` with room. Only finitely many days are
    /// occupied, so the scan ends (at the latest on [`Date::MAX`]).
    pub fn first_open_from(&self, start: Date) -> Date {
        let mut cursor = start;
        while !self.has_room(cursor) && cursor < Date::MAX {
            cursor = calendar::add_days(cursor, 1);
        }
        cursor
    }

    /// First day in `[start, last]` with room, if any.
    pub fn first_open_within(&self, start: Date, last: Date) -> Option<Date> {
        let mut cursor = start;
        while cursor <= last {
            if self.has_room(cursor) {
                return Some(cursor);
            }
            if cursor == Date::MAX {
                break;
            }
            cursor = calendar::add_days(cursor, 1);
        }
        None
    }

    /// Days holding more steps than the cap allows.
    pub fn over_capacity(&self) -> impl Iterator<Item = (Date, usize)> + '_ {
        self.counts
            .iter()
            .filter(|(_, count)| **count > MAX_TASKS_PER_DAY)
            .map(|(date, count)| (*date, *count))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_release_floors_at_zero() {
        let mut occupancy = Occupancy::default();
        let day = date(2025, 6, 1);
        occupancy.release(day);
        assert_eq!(occupancy.count(day), 0);

        occupancy.occupy(day);
        occupancy.release(day);
        occupancy.release(day);
        assert_eq!(occupancy.count(day), 0);
        assert_eq!(occupancy, Occupancy::default());
    }

    #[test]
    fn test_first_open_skips_full_days() {
        let mut occupancy = Occupancy::default();
        let day = date(2025, 6, 1);
        for _ in 0..MAX_TASKS_PER_DAY {
            occupancy.occupy(day);
        }
        occupancy.occupy(date(2025, 6, 2));

        assert_eq!(occupancy.first_open_from(day), date(2025, 6, 2));
        assert_eq!(
            occupancy.first_open_within(day, date(2025, 6, 1)),
            None
        );
        assert_eq!(
            occupancy.first_open_within(day, date(2025, 6, 3)),
            Some(date(2025, 6, 2))
        );
    }

    #[test]
    fn test_over_capacity_reports_only_excess_days() {
        let mut occupancy = Occupancy::default();
        for _ in 0..=MAX_TASKS_PER_DAY {
            occupancy.occupy(date(2025, 6, 1));
        }
        occupancy.occupy(date(2025, 6, 2));

        let over: Vec<_> = occupancy.over_capacity().collect();
        assert_eq!(over, vec![(date(2025, 6, 1), MAX_TASKS_PER_DAY + 1)]);
    }
}
