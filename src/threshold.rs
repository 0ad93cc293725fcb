//! Local-time trigger predicates.
//!
//! A [`Threshold`] fires when a zone's wall clock sits at the start of its
//! trigger hour: the hour matches, the minute falls inside the [`Window`],
//! and (for weekly thresholds) the weekday matches.

use jiff::civil::{DateTime, Weekday};

use crate::error::ConfigError;
use crate::kind::NotificationKind;

/// Minutes after the trigger hour during which a tick counts as on time.
///
/// Half-open: a window of width 15 accepts minutes 0 through 14. The
/// scheduler cadence must not exceed the width or an hour can slip between
/// two ticks; a cadence equal to the width visits every hour exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    width: u8,
}

impl Window {
    pub const DEFAULT_WIDTH: u8 = 15;

    pub fn new(width: u8) -> Result<Self, ConfigError> {
        if width == 0 || width > 60 {
            return Err(ConfigError::WindowWidth(width));
        }
        Ok(Self { width })
    }

    pub fn width(self) -> u8 {
        self.width
    }

    pub fn contains(self, minute: i8) -> bool {
        (0..self.width as i8).contains(&minute)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    pub kind: NotificationKind,
    pub hour: u8,
    /// `None` fires every day.
    pub weekday: Option<Weekday>,
}

impl Threshold {
    pub fn daily(kind: NotificationKind, hour: u8) -> Result<Self, ConfigError> {
        check_hour(hour)?;
        Ok(Self {
            kind,
            hour,
            weekday: None,
        })
    }

    pub fn weekly(kind: NotificationKind, hour: u8, weekday: Weekday) -> Result<Self, ConfigError> {
        check_hour(hour)?;
        Ok(Self {
            kind,
            hour,
            weekday: Some(weekday),
        })
    }

    pub fn matches(&self, local: DateTime, window: Window) -> bool {
        local.hour() == self.hour as i8
            && window.contains(local.minute())
            && self.weekday.is_none_or(|wd| local.weekday() == wd)
    }
}

fn check_hour(hour: u8) -> Result<(), ConfigError> {
    if hour > 23 {
        return Err(ConfigError::Hour(hour));
    }
    Ok(())
}

/// The thresholds evaluated on each tick and the window they share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickConfig {
    pub window: Window,
    pub daily: Threshold,
    pub weekly: Threshold,
}

impl TickConfig {
    pub const DAILY_HOUR: u8 = 16;
    pub const WEEKLY_HOUR: u8 = 9;
    pub const WEEKLY_DAY: Weekday = Weekday::Monday;

    /// Check both trigger hours and the window width. Struct literals can
    /// bypass the checked constructors, so the matcher re-checks here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Window::new(self.window.width())?;
        for threshold in self.thresholds() {
            check_hour(threshold.hour)?;
        }
        Ok(())
    }

    pub fn with_window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    pub fn thresholds(&self) -> [Threshold; 2] {
        [self.daily, self.weekly]
    }

    /// Kinds whose threshold `local` crosses. The two predicates are
    /// independent, so both fire when a configuration puts them on the same
    /// hour and day.
    pub fn matching(&self, local: DateTime) -> impl Iterator<Item = NotificationKind> + '_ {
        self.thresholds()
            .into_iter()
            .filter(move |t| t.matches(local, self.window))
            .map(|t| t.kind)
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            window: Window::default(),
            daily: Threshold {
                kind: NotificationKind::DailyEvening,
                hour: Self::DAILY_HOUR,
                weekday: None,
            },
            weekly: Threshold {
                kind: NotificationKind::WeeklyMondayMorning,
                hour: Self::WEEKLY_HOUR,
                weekday: Some(Self::WEEKLY_DAY),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    // 2026-02-09 is a Monday.
    fn monday(hour: i8, minute: i8) -> DateTime {
        date(2026, 2, 9).at(hour, minute, 0, 0)
    }

    fn tuesday(hour: i8, minute: i8) -> DateTime {
        date(2026, 2, 10).at(hour, minute, 0, 0)
    }

    fn kinds(config: &TickConfig, local: DateTime) -> Vec<NotificationKind> {
        config.matching(local).collect()
    }

    #[test]
    fn window_is_half_open() {
        let w = Window::default();
        assert!(w.contains(0));
        assert!(w.contains(14));
        assert!(!w.contains(15));
        assert!(!w.contains(59));
        assert!(!w.contains(-1));
    }

    #[test]
    fn window_width_bounds() {
        assert_eq!(Window::new(0), Err(ConfigError::WindowWidth(0)));
        assert_eq!(Window::new(61), Err(ConfigError::WindowWidth(61)));
        assert!(Window::new(60).unwrap().contains(59));
        assert!(Window::new(1).unwrap().contains(0));
        assert!(!Window::new(1).unwrap().contains(1));
    }

    #[test]
    fn daily_fires_any_day_at_four() {
        let config = TickConfig::default();
        assert_eq!(kinds(&config, tuesday(16, 0)), [NotificationKind::DailyEvening]);
        assert_eq!(kinds(&config, monday(16, 10)), [NotificationKind::DailyEvening]);
        assert!(kinds(&config, tuesday(16, 15)).is_empty());
        assert!(kinds(&config, tuesday(15, 59)).is_empty());
    }

    #[test]
    fn weekly_fires_only_monday_at_nine() {
        let config = TickConfig::default();
        assert_eq!(
            kinds(&config, monday(9, 5)),
            [NotificationKind::WeeklyMondayMorning]
        );
        assert!(kinds(&config, tuesday(9, 5)).is_empty());
        assert!(kinds(&config, monday(9, 15)).is_empty());
        assert!(kinds(&config, monday(10, 0)).is_empty());
    }

    #[test]
    fn predicates_are_independent() {
        let weekly = Threshold::weekly(NotificationKind::WeeklyMondayMorning, 16, Weekday::Monday)
            .unwrap();
        let config = TickConfig {
            weekly,
            ..TickConfig::default()
        };
        assert_eq!(
            kinds(&config, monday(16, 3)),
            [
                NotificationKind::DailyEvening,
                NotificationKind::WeeklyMondayMorning
            ]
        );
        assert_eq!(kinds(&config, tuesday(16, 3)), [NotificationKind::DailyEvening]);
    }

    #[test]
    fn wider_window_extends_match() {
        let config = TickConfig::default().with_window(Window::new(30).unwrap());
        assert_eq!(kinds(&config, tuesday(16, 29)), [NotificationKind::DailyEvening]);
        assert!(kinds(&config, tuesday(16, 30)).is_empty());
    }

    #[test]
    fn validate_rejects_out_of_range_hour() {
        let config = TickConfig {
            daily: Threshold {
                kind: NotificationKind::DailyEvening,
                hour: 200,
                weekday: None,
            },
            ..TickConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Hour(200)));

        let config = TickConfig {
            weekly: Threshold {
                hour: 24,
                ..TickConfig::default().weekly
            },
            ..TickConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Hour(24)));

        assert_eq!(TickConfig::default().validate(), Ok(()));
    }

    #[test]
    fn hour_is_validated() {
        assert_eq!(
            Threshold::daily(NotificationKind::DailyEvening, 24),
            Err(ConfigError::Hour(24))
        );
        assert!(Threshold::daily(NotificationKind::DailyEvening, 23).is_ok());
    }
}
