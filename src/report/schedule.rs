// src/report/schedule.rs
// =============================================================================
// Next-update strategies.
//
// Nothing here schedules anything: each strategy only turns "now" into the
// text shown in the README. Whatever actually re-runs the tool (a cron job,
// a CI workflow) is outside this program.
//
// Strategies:
// - Paused: automatic updates are off, no next-update line at all
// - Window: "somewhere between now+25min and now+45min"
// - Slots:  the nearest upcoming fixed clock hour (12:00 and 19:00 by default)
// =============================================================================

use std::fmt;

use anyhow::{bail, Result};
use chrono::{DateTime, Duration, FixedOffset, Timelike};

const DATE_FORMAT: &str = "%d/%m/%Y";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    Paused,
    Window {
        /// Minutes after now at which the window opens
        from_minutes: i64,
        /// Minutes after now at which the window closes
        to_minutes: i64,
        /// Advertised cadence of the external trigger
        every_minutes: u32,
    },
    Slots {
        /// Sorted, deduplicated, each in 0..=23, never empty
        hours: Vec<u32>,
    },
}

impl Schedule {
    pub fn window() -> Self {
        Schedule::Window {
            from_minutes: 25,
            to_minutes: 45,
            every_minutes: 30,
        }
    }

    pub fn slots(mut hours: Vec<u32>) -> Result<Self> {
        if hours.is_empty() {
            bail!("At least one slot hour is required");
        }
        if let Some(bad) = hours.iter().find(|h| **h > 23) {
            bail!("Slot hour out of range (0-23): {}", bad);
        }

        hours.sort_unstable();
        hours.dedup();
        Ok(Schedule::Slots { hours })
    }

    /// The "Atualização automática" line of the README block
    pub fn cadence_line(&self) -> String {
        match self {
            Schedule::Paused => {
                "⏸️ <strong>Atualização automática:</strong> pausada temporariamente<br>".to_string()
            }
            Schedule::Window { every_minutes, .. } => format!(
                "🔄 <strong>Atualização automática:</strong> a cada {} minutos<br>",
                every_minutes
            ),
            Schedule::Slots { hours } => format!(
                "🔄 <strong>Atualização automática:</strong> diariamente às {}<br>",
                join_hours(hours)
            ),
        }
    }

    pub fn next_update(&self, now: DateTime<FixedOffset>) -> Option<NextUpdate> {
        match self {
            Schedule::Paused => None,
            Schedule::Window {
                from_minutes,
                to_minutes,
                ..
            } => Some(NextUpdate::Between(
                // A fixed offset has no DST, so plain minute arithmetic is exact
                now + Duration::minutes(*from_minutes),
                now + Duration::minutes(*to_minutes),
            )),
            Schedule::Slots { hours } => next_slot(hours, now).map(NextUpdate::At),
        }
    }
}

// "12:00 e 19:00", "08:00, 12:00 e 16:00"
fn join_hours(hours: &[u32]) -> String {
    let labels: Vec<String> = hours.iter().map(|h| format!("{:02}:00", h)).collect();
    match labels.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} e {}", rest.join(", "), last),
    }
}

// Same calendar day as `day`, at HH:00:00.000
fn at_hour(day: DateTime<FixedOffset>, hour: u32) -> Option<DateTime<FixedOffset>> {
    // Each with_* returns None for an impossible value (e.g. hour 24)
    day.with_hour(hour)?
        .with_minute(0)?
        .with_second(0)?
        .with_nanosecond(0)
}

// First slot strictly after `now` today, otherwise the first slot tomorrow
fn next_slot(hours: &[u32], now: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    hours
        .iter()
        // Today's candidates, earliest first (hours are sorted)
        .filter_map(|&hour| at_hour(now, hour))
        // Strictly later: at exactly 12:00 the next slot is 19:00
        .find(|slot| *slot > now)
        // Nothing left today: earliest hour tomorrow
        .or_else(|| at_hour(now + Duration::days(1), *hours.first()?))
}

/// A computed next-update indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextUpdate {
    Between(DateTime<FixedOffset>, DateTime<FixedOffset>),
    At(DateTime<FixedOffset>),
}

impl fmt::Display for NextUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Same day: "16/10/2026 entre 10:25 e 10:45"
            NextUpdate::Between(from, to) if from.date_naive() == to.date_naive() => write!(
                f,
                "{} entre {} e {}",
                from.format(DATE_FORMAT),
                from.format(TIME_FORMAT),
                to.format(TIME_FORMAT)
            ),
            // Across midnight the end gets its own date:
            // "16/10/2026 entre 23:55 e 17/10/2026 00:15"
            NextUpdate::Between(from, to) => write!(
                f,
                "{} entre {} e {} {}",
                from.format(DATE_FORMAT),
                from.format(TIME_FORMAT),
                to.format(DATE_FORMAT),
                to.format(TIME_FORMAT)
            ),
            NextUpdate::At(at) => {
                write!(f, "{} {}", at.format(DATE_FORMAT), at.format(TIME_FORMAT))
            }
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is DateTime<FixedOffset>?
//    - A moment in time plus a fixed UTC offset (here UTC-3)
//    - Unlike a named zone ("America/Sao_Paulo") it never shifts for DST
//    - .format(), .with_hour(), .date_naive() all work in that local time
//
// 2. Why does at_hour() return Option?
//    - chrono's with_hour(), with_minute(), ... return None for values that
//      can't exist; the `?` operator stops at the first None
//
// 3. What is .or_else() doing in next_slot()?
//    - find() gives Some(slot) if a slot is left today, None otherwise
//    - or_else() only runs its closure on None, computing tomorrow's slot
//    - `*hours.first()?` inside the closure is fine because the closure itself
//      returns an Option
//
// 4. What is `if ...` inside a match arm (a "match guard")?
//    - The first Between arm only matches when both ends are on the same day
//    - Otherwise matching falls through to the next Between arm
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn brasilia(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        FixedOffset::west_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
    }

    fn default_slots() -> Schedule {
        Schedule::slots(vec![12, 19]).unwrap()
    }

    #[test]
    fn test_slot_before_noon() {
        let next = default_slots().next_update(brasilia(2026, 10, 16, 10, 0));
        assert_eq!(next, Some(NextUpdate::At(brasilia(2026, 10, 16, 12, 0))));
    }

    #[test]
    fn test_slot_afternoon() {
        let next = default_slots().next_update(brasilia(2026, 10, 16, 14, 0));
        assert_eq!(next, Some(NextUpdate::At(brasilia(2026, 10, 16, 19, 0))));
    }

    #[test]
    fn test_slot_evening_rolls_to_tomorrow() {
        let next = default_slots().next_update(brasilia(2026, 10, 16, 20, 0));
        assert_eq!(next, Some(NextUpdate::At(brasilia(2026, 10, 17, 12, 0))));
    }

    #[test]
    fn test_slot_exactly_on_the_hour_moves_on() {
        let next = default_slots().next_update(brasilia(2026, 10, 16, 12, 0));
        assert_eq!(next, Some(NextUpdate::At(brasilia(2026, 10, 16, 19, 0))));

        // End of month
        let next = default_slots().next_update(brasilia(2026, 10, 31, 19, 0));
        assert_eq!(next, Some(NextUpdate::At(brasilia(2026, 11, 1, 12, 0))));
    }

    #[test]
    fn test_slots_are_validated_and_sorted() {
        assert!(Schedule::slots(vec![]).is_err());
        assert!(Schedule::slots(vec![24]).is_err());
        assert_eq!(
            Schedule::slots(vec![19, 8, 12, 8]).unwrap(),
            Schedule::Slots { hours: vec![8, 12, 19] }
        );
    }

    #[test]
    fn test_window() {
        let next = Schedule::window()
            .next_update(brasilia(2026, 10, 16, 23, 30))
            .unwrap();
        assert_eq!(
            next,
            NextUpdate::Between(brasilia(2026, 10, 16, 23, 55), brasilia(2026, 10, 17, 0, 15))
        );
        assert_eq!(next.to_string(), "16/10/2026 entre 23:55 e 17/10/2026 00:15");
    }

    #[test]
    fn test_window_same_day_prints_one_date() {
        let next = Schedule::window()
            .next_update(brasilia(2026, 10, 16, 10, 0))
            .unwrap();
        assert_eq!(next.to_string(), "16/10/2026 entre 10:25 e 10:45");
    }

    #[test]
    fn test_paused_has_no_next_update() {
        assert_eq!(Schedule::Paused.next_update(brasilia(2026, 10, 16, 10, 0)), None);
    }

    #[test]
    fn test_cadence_lines() {
        assert!(Schedule::Paused.cadence_line().contains("pausada temporariamente"));
        assert!(Schedule::window().cadence_line().contains("a cada 30 minutos"));
        assert!(default_slots()
            .cadence_line()
            .contains("diariamente às 12:00 e 19:00"));
        assert!(Schedule::slots(vec![8, 12, 16])
            .unwrap()
            .cadence_line()
            .contains("08:00, 12:00 e 16:00"));
    }

    #[test]
    fn test_slot_display() {
        let next = NextUpdate::At(brasilia(2026, 1, 5, 12, 0));
        assert_eq!(next.to_string(), "05/01/2026 12:00");
    }
}
