use std::cell::RefCell;

use jiff::tz::TimeZone;
use jiff::Timestamp;
use proptest::prelude::*;
use tzdigest::{DispatchError, Matcher, NotificationKind, Notifier, ZoneTable};

const ZONES: &[&str] = &[
    "Etc/UTC",
    "America/New_York",
    "America/Los_Angeles",
    "Europe/Lisbon",
    "Asia/Kolkata",
    "Asia/Kathmandu",
    "Australia/Adelaide",
    "Pacific/Chatham",
];

#[derive(Default)]
struct Recorder {
    sent: RefCell<Vec<(String, NotificationKind)>>,
}

impl Notifier for Recorder {
    fn notify(&self, zone: &str, kind: NotificationKind) -> Result<(), DispatchError> {
        self.sent.borrow_mut().push((zone.to_string(), kind));
        Ok(())
    }
}

fn table() -> ZoneTable {
    ZoneTable::new(ZONES.iter().map(|z| (*z, vec![*z]))).unwrap()
}

/// Any second between 2020-01-01 and 2030-01-01.
fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
    (1_577_836_800i64..1_893_456_000).prop_map(|s| Timestamp::from_second(s).unwrap())
}

/// Kinds a zone should receive at `now`, computed straight from its wall
/// clock.
fn expected(zone: &str, now: Timestamp) -> Vec<NotificationKind> {
    let local = now.to_zoned(TimeZone::get(zone).unwrap());
    let mut kinds = Vec::new();
    if local.hour() == 16 && local.minute() < 15 {
        kinds.push(NotificationKind::DailyEvening);
    }
    if local.hour() == 9 && local.minute() < 15 && local.weekday() == jiff::civil::Weekday::Monday
    {
        kinds.push(NotificationKind::WeeklyMondayMorning);
    }
    kinds
}

proptest! {
    #[test]
    fn dispatches_match_wall_clock(now in arb_timestamp()) {
        let table = table();
        let matcher = Matcher::new(Recorder::default()).with_table(&table);
        let report = matcher.run_tick(now).unwrap();

        prop_assert!(report.skips.is_empty());
        for zone in ZONES {
            let got: Vec<_> = report
                .matches()
                .filter(|(z, _)| z == zone)
                .map(|(_, k)| k)
                .collect();
            prop_assert_eq!(got, expected(zone, now), "zone {}", zone);
        }
    }

    #[test]
    fn same_instant_same_dispatches(now in arb_timestamp()) {
        let table = table();
        let matcher = Matcher::new(Recorder::default()).with_table(&table);
        let first = matcher.run_tick(now).unwrap();
        let second = matcher.run_tick(now).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sixteen_hundred_local_always_fires(
        zone_idx in 0..ZONES.len(),
        days in 0i64..3650,
        minute in 0i8..15,
    ) {
        let zone = ZONES[zone_idx];
        let tz = TimeZone::get(zone).unwrap();
        let date = jiff::civil::date(2020, 1, 1)
            .checked_add(jiff::Span::new().days(days))
            .unwrap();
        let now = date.at(16, minute, 0, 0).to_zoned(tz).unwrap().timestamp();

        let table = table();
        let matcher = Matcher::new(Recorder::default()).with_table(&table);
        let report = matcher.run_tick(now).unwrap();
        let daily = report
            .matches()
            .filter(|(z, k)| *z == zone && *k == NotificationKind::DailyEvening)
            .count();
        prop_assert_eq!(daily, 1);
    }
}
