use std::fmt;

use serde::{Deserialize, Serialize};

/// Which digest a matched zone should receive.
///
/// Serialized with the tags the receiving endpoint understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NotificationKind {
    /// Local 16:00 on any day.
    #[serde(rename = "daily_at_4P")]
    DailyEvening,
    /// Local 09:00 on Mondays.
    #[serde(rename = "weekly_at_9A")]
    WeeklyMondayMorning,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 2] = [Self::DailyEvening, Self::WeeklyMondayMorning];

    /// Wire tag sent in the `type` field of the notification payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DailyEvening => "daily_at_4P",
            Self::WeeklyMondayMorning => "weekly_at_9A",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_wire_tags() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::DailyEvening).unwrap(),
            r#""daily_at_4P""#
        );
        let kind: NotificationKind = serde_json::from_str(r#""weekly_at_9A""#).unwrap();
        assert_eq!(kind, NotificationKind::WeeklyMondayMorning);
    }

    #[test]
    fn display_matches_wire_tag() {
        for kind in NotificationKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.as_str());
        }
    }
}
