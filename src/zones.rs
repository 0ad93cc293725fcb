use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::TableError;
use crate::zone_data::BUILTIN_GROUPS;

static BUILTIN: LazyLock<ZoneTable> = LazyLock::new(|| ZoneTable {
    groups: BUILTIN_GROUPS
        .iter()
        .map(|(label, members)| ZoneGroup {
            label: (*label).to_string(),
            members: members.iter().map(|m| (*m).to_string()).collect(),
        })
        .collect(),
});

/// A label and the zone identifiers listed under it.
///
/// Identifiers are kept exactly as written, including legacy aliases such
/// as `GB` or `US/Pacific`; whether they resolve is decided at tick time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneGroup {
    label: String,
    members: Vec<String>,
}

impl ZoneGroup {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn members(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.members.iter().map(String::as_str)
    }

    pub fn contains(&self, zone: &str) -> bool {
        self.members.iter().any(|m| m == zone)
    }
}

/// Immutable mapping from group label to member zone identifiers.
///
/// Labels are unique. The same identifier may be listed under several
/// labels (`WET` and `WEST` both carry `Europe/Lisbon`), and a tick visits
/// it once per listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ZoneTable {
    groups: Vec<ZoneGroup>,
}

impl ZoneTable {
    /// The table compiled into the crate.
    pub fn builtin() -> &'static ZoneTable {
        &BUILTIN
    }

    /// Build a custom table. Group order is kept as given.
    pub fn new<I, L, M, Z>(groups: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (L, M)>,
        L: Into<String>,
        M: IntoIterator<Item = Z>,
        Z: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for (label, members) in groups {
            let label = label.into();
            if label.is_empty() {
                return Err(TableError::EmptyLabel);
            }
            if !seen.insert(label.clone()) {
                return Err(TableError::DuplicateLabel(label));
            }
            out.push(ZoneGroup {
                label,
                members: members.into_iter().map(Into::into).collect(),
            });
        }
        Ok(Self { groups: out })
    }

    /// Every group, in table order. Restartable: each call walks from the
    /// start.
    pub fn groups(&self) -> impl ExactSizeIterator<Item = &ZoneGroup> + '_ {
        self.groups.iter()
    }

    pub fn get(&self, label: &str) -> Option<&ZoneGroup> {
        self.groups.iter().find(|g| g.label == label)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of (label, identifier) pairs, i.e. zone checks per tick.
    pub fn pair_count(&self) -> usize {
        self.groups.iter().map(|g| g.members.len()).sum()
    }

    /// Labels listing `zone`, in table order.
    pub fn labels_for<'a>(&'a self, zone: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.groups
            .iter()
            .filter(move |g| g.contains(zone))
            .map(|g| g.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_labels_are_unique() {
        let table = ZoneTable::builtin();
        let labels: HashSet<_> = table.groups().map(|g| g.label()).collect();
        assert_eq!(labels.len(), table.len());
    }

    #[test]
    fn builtin_has_expected_groups() {
        let table = ZoneTable::builtin();
        assert!(table.get("UTC").unwrap().contains("Etc/UTC"));
        assert!(table.get("ET").unwrap().contains("America/New_York"));
        assert!(table.get("PT").unwrap().contains("America/Los_Angeles"));
        assert!(table.get("NOPE").is_none());
    }

    #[test]
    fn lisbon_is_listed_twice() {
        let labels: Vec<_> = ZoneTable::builtin().labels_for("Europe/Lisbon").collect();
        assert!(labels.contains(&"WET"));
        assert!(labels.contains(&"WEST"));
    }

    #[test]
    fn no_group_is_empty() {
        for group in ZoneTable::builtin().groups() {
            assert!(group.members().len() > 0, "{} has no members", group.label());
        }
    }

    #[test]
    fn iteration_is_restartable() {
        let table = ZoneTable::builtin();
        let first: Vec<_> = table.groups().map(|g| g.label()).collect();
        let second: Vec<_> = table.groups().map(|g| g.label()).collect();
        assert_eq!(first, second);
        assert_eq!(
            table.pair_count(),
            table.groups().map(|g| g.members().len()).sum::<usize>()
        );
    }

    #[test]
    fn custom_table_rejects_duplicate_labels() {
        let err = ZoneTable::new([("A", vec!["UTC"]), ("A", vec!["Etc/UTC"])]).unwrap_err();
        assert_eq!(err, TableError::DuplicateLabel("A".into()));
    }

    #[test]
    fn custom_table_rejects_empty_label() {
        let err = ZoneTable::new([("", vec!["UTC"])]).unwrap_err();
        assert_eq!(err, TableError::EmptyLabel);
    }

    #[test]
    fn custom_table_keeps_order_and_members() {
        let table = ZoneTable::new([
            ("B", vec!["Asia/Tokyo"]),
            ("A", vec!["UTC", "Not/AZone"]),
        ])
        .unwrap();
        let labels: Vec<_> = table.groups().map(|g| g.label()).collect();
        assert_eq!(labels, ["B", "A"]);
        let members: Vec<_> = table.get("A").unwrap().members().collect();
        assert_eq!(members, ["UTC", "Not/AZone"]);
        assert_eq!(table.pair_count(), 3);
    }
}
