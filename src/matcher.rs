use std::fmt;

use jiff::civil::DateTime;
use jiff::tz::TimeZoneDatabase;
use jiff::Timestamp;
use serde::Serialize;

use crate::error::{ConfigError, TickError};
use crate::kind::NotificationKind;
use crate::notify::Notifier;
use crate::observe::{TickObserver, TracingObserver};
use crate::threshold::TickConfig;
use crate::zones::ZoneTable;

/// Why a zone identifier was not evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The zone database does not know the identifier.
    UnresolvableZone { message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvableZone { message } => write!(f, "unknown time zone: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skip {
    pub group: String,
    pub zone: String,
    #[serde(flatten)]
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Delivered,
    Failed { error: String },
}

/// One matched (zone, kind) pair and what happened when it was sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    pub group: String,
    pub zone: String,
    pub kind: NotificationKind,
    /// Wall-clock time in `zone` at the tick instant.
    pub local: DateTime,
    #[serde(flatten)]
    pub outcome: DispatchOutcome,
}

impl Dispatch {
    pub fn is_delivered(&self) -> bool {
        self.outcome == DispatchOutcome::Delivered
    }
}

/// Everything one tick matched and skipped. Built fresh per tick and never
/// compared with earlier ticks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickReport {
    pub now: Timestamp,
    /// (group, identifier) pairs visited, resolvable or not.
    pub zones_checked: usize,
    pub dispatches: Vec<Dispatch>,
    pub skips: Vec<Skip>,
}

impl TickReport {
    fn new(now: Timestamp) -> Self {
        Self {
            now,
            zones_checked: 0,
            dispatches: Vec::new(),
            skips: Vec::new(),
        }
    }

    /// The (zone, kind) pairs that matched, in dispatch order. A zone listed
    /// under several groups appears once per group.
    pub fn matches(&self) -> impl Iterator<Item = (&str, NotificationKind)> + '_ {
        self.dispatches.iter().map(|d| (d.zone.as_str(), d.kind))
    }

    pub fn count(&self, kind: NotificationKind) -> usize {
        self.dispatches.iter().filter(|d| d.kind == kind).count()
    }

    pub fn failed_count(&self) -> usize {
        self.dispatches.iter().filter(|d| !d.is_delivered()).count()
    }

    pub fn is_quiet(&self) -> bool {
        self.dispatches.is_empty()
    }
}

/// Walks a zone table once per tick and dispatches every threshold match.
///
/// Holds no state between ticks: running the same instant twice dispatches
/// the same set twice.
pub struct Matcher<'a, N, O = TracingObserver> {
    table: &'a ZoneTable,
    db: &'a TimeZoneDatabase,
    config: TickConfig,
    notifier: N,
    observer: O,
}

impl<N: Notifier> Matcher<'static, N> {
    /// Built-in table, the global zone database and the default thresholds.
    pub fn new(notifier: N) -> Self {
        Self {
            table: ZoneTable::builtin(),
            db: jiff::tz::db(),
            config: TickConfig::default(),
            notifier,
            observer: TracingObserver,
        }
    }
}

impl<'a, N: Notifier, O: TickObserver> Matcher<'a, N, O> {
    pub fn with_table<'b>(self, table: &'b ZoneTable) -> Matcher<'b, N, O>
    where
        'a: 'b,
    {
        Matcher {
            table,
            db: self.db,
            config: self.config,
            notifier: self.notifier,
            observer: self.observer,
        }
    }

    pub fn with_database<'b>(self, db: &'b TimeZoneDatabase) -> Matcher<'b, N, O>
    where
        'a: 'b,
    {
        Matcher {
            table: self.table,
            db,
            config: self.config,
            notifier: self.notifier,
            observer: self.observer,
        }
    }

    /// Replace the thresholds. Fails when an hour or the window is out of
    /// range, since such a threshold could never fire.
    pub fn with_config(mut self, config: TickConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn with_observer<P: TickObserver>(self, observer: P) -> Matcher<'a, N, P> {
        Matcher {
            table: self.table,
            db: self.db,
            config: self.config,
            notifier: self.notifier,
            observer,
        }
    }

    pub fn config(&self) -> &TickConfig {
        &self.config
    }

    pub fn table(&self) -> &ZoneTable {
        self.table
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run one tick against the current system time.
    pub fn run_tick_now(&self) -> Result<TickReport, TickError> {
        self.run_tick(Timestamp::now())
    }

    /// Evaluate every (group, identifier) pair at `now` and dispatch each
    /// match.
    ///
    /// Unknown identifiers and failed dispatches are recorded in the report
    /// and passed to the observer; the walk always covers the whole table.
    /// Only an empty zone database fails the tick.
    pub fn run_tick(&self, now: Timestamp) -> Result<TickReport, TickError> {
        let _span = tracing::info_span!("tick", %now).entered();

        if self.db.is_definitively_empty() {
            return Err(TickError::database_unavailable(
                "no time zones could be loaded",
            ));
        }

        let mut report = TickReport::new(now);
        for group in self.table.groups() {
            let label = group.label();
            tracing::debug!(group = label, "checking time zone group");
            let mut triggered = false;

            for zone in group.members() {
                report.zones_checked += 1;

                let tz = match self.db.get(zone) {
                    Ok(tz) => tz,
                    Err(e) => {
                        let reason = SkipReason::UnresolvableZone {
                            message: e.to_string(),
                        };
                        self.observer.zone_skipped(label, zone, &reason);
                        report.skips.push(Skip {
                            group: label.to_string(),
                            zone: zone.to_string(),
                            reason,
                        });
                        continue;
                    }
                };

                let local = now.to_zoned(tz).datetime();
                for kind in self.config.matching(local) {
                    triggered = true;
                    self.observer.triggered(label, zone, kind);
                    let outcome = match self.notifier.notify(zone, kind) {
                        Ok(()) => DispatchOutcome::Delivered,
                        Err(e) => {
                            self.observer.dispatch_failed(label, zone, kind, &e);
                            DispatchOutcome::Failed {
                                error: e.to_string(),
                            }
                        }
                    };
                    report.dispatches.push(Dispatch {
                        group: label.to_string(),
                        zone: zone.to_string(),
                        kind,
                        local,
                        outcome,
                    });
                }
            }

            self.observer.group_checked(label, triggered);
        }

        tracing::info!(
            checked = report.zones_checked,
            dispatched = report.dispatches.len(),
            failed = report.failed_count(),
            skipped = report.skips.len(),
            "tick finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::DispatchError;
    use crate::threshold::{Threshold, Window};

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

    struct Refusing;

    impl Notifier for Refusing {
        fn notify(&self, _zone: &str, _kind: NotificationKind) -> Result<(), DispatchError> {
            Err(DispatchError::Status { status: 500 })
        }
    }

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn table() -> ZoneTable {
        ZoneTable::new([
            ("UTC", vec!["Etc/UTC"]),
            ("BOGUS", vec!["Not/AZone"]),
            ("JST", vec!["Asia/Tokyo"]),
        ])
        .unwrap()
    }

    #[test]
    fn daily_match_in_utc() {
        let table = table();
        let matcher = Matcher::new(Recorder::default()).with_table(&table);
        let report = matcher.run_tick(ts("2026-02-10T16:07:00Z")).unwrap();
        assert_eq!(
            *matcher.notifier().sent.borrow(),
            [("Etc/UTC".to_string(), NotificationKind::DailyEvening)]
        );
        assert_eq!(report.zones_checked, 3);
        assert_eq!(report.skips.len(), 1);
        assert_eq!(report.skips[0].zone, "Not/AZone");
        assert_eq!(report.dispatches[0].local.hour(), 16);
    }

    #[test]
    fn tokyo_daily_is_utc_seven() {
        let table = table();
        let matcher = Matcher::new(Recorder::default()).with_table(&table);
        let report = matcher.run_tick(ts("2026-02-10T07:00:00Z")).unwrap();
        let matches: Vec<_> = report.matches().collect();
        assert_eq!(matches, [("Asia/Tokyo", NotificationKind::DailyEvening)]);
    }

    #[test]
    fn failed_dispatch_is_recorded_not_raised() {
        let table = table();
        let matcher = Matcher::new(Refusing).with_table(&table);
        let report = matcher.run_tick(ts("2026-02-10T16:00:00Z")).unwrap();
        assert_eq!(report.dispatches.len(), 1);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(
            report.dispatches[0].outcome,
            DispatchOutcome::Failed {
                error: "notification endpoint rejected the request with status 500".into()
            }
        );
    }

    #[test]
    fn empty_database_fails_the_tick() {
        let db = TimeZoneDatabase::none();
        let matcher = Matcher::new(Recorder::default()).with_database(&db);
        let err = matcher.run_tick(ts("2026-02-10T16:00:00Z")).unwrap_err();
        assert!(matches!(err, TickError::DatabaseUnavailable { .. }));
        assert!(matcher.notifier().sent.borrow().is_empty());
    }

    #[test]
    fn quiet_tick_has_no_dispatches() {
        let table = table();
        let matcher = Matcher::new(Recorder::default()).with_table(&table);
        let report = matcher.run_tick(ts("2026-02-10T12:30:00Z")).unwrap();
        assert!(report.is_quiet());
        assert_eq!(report.skips.len(), 1);
    }

    #[test]
    fn invalid_hour_is_refused_by_matcher() {
        let config = TickConfig {
            daily: Threshold {
                kind: NotificationKind::DailyEvening,
                hour: 200,
                weekday: None,
            },
            ..TickConfig::default()
        };
        let err = Matcher::new(Recorder::default())
            .with_config(config)
            .err()
            .unwrap();
        assert_eq!(err, ConfigError::Hour(200));
    }

    #[test]
    fn valid_config_is_applied() {
        let table = table();
        let config = TickConfig::default().with_window(Window::new(30).unwrap());
        let matcher = Matcher::new(Recorder::default())
            .with_table(&table)
            .with_config(config)
            .unwrap();
        let report = matcher.run_tick(ts("2026-02-10T16:25:00Z")).unwrap();
        assert_eq!(report.count(NotificationKind::DailyEvening), 1);
    }

    #[test]
    fn report_serializes_flat() {
        let table = table();
        let matcher = Matcher::new(Recorder::default()).with_table(&table);
        let report = matcher.run_tick(ts("2026-02-10T16:00:00Z")).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["dispatches"][0]["zone"], "Etc/UTC");
        assert_eq!(json["dispatches"][0]["kind"], "daily_at_4P");
        assert_eq!(json["dispatches"][0]["status"], "delivered");
        assert_eq!(json["skips"][0]["reason"], "unresolvable_zone");
    }
}
