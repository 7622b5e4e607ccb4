//! Incremental change detection against downstream stored values.

use roster_model::{ComputedValues, StoredValues};

/// One field whose computed value differs from the stored value.
///
/// The caller logs each change with its before/after values for audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: &'static str,
    pub before: String,
    pub after: String,
}

/// Compare the computed triple against the stored downstream values.
///
/// Exact string equality, no normalization; an absent stored value compares
/// as the empty string. An empty result means the record is already in sync
/// and is not emitted in incremental mode.
#[must_use]
pub fn diff_stored(computed: &ComputedValues, stored: &StoredValues) -> Vec<FieldChange> {
    let pairs = [
        (
            "ethnicity",
            stored.ethnicity.as_deref().unwrap_or(""),
            computed.ethnicity.as_str(),
        ),
        (
            "race",
            stored.race.as_deref().unwrap_or(""),
            computed.race.as_str(),
        ),
        (
            "lep",
            stored.lep.as_deref().unwrap_or(""),
            computed.lep.as_str(),
        ),
    ];
    pairs
        .into_iter()
        .filter(|(_, before, after)| before != after)
        .map(|(field, before, after)| FieldChange {
            field,
            before: before.to_string(),
            after: after.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computed(ethnicity: &str, race: &str, lep: &str) -> ComputedValues {
        ComputedValues {
            ethnicity: ethnicity.to_string(),
            race: race.to_string(),
            lep: lep.to_string(),
        }
    }

    fn stored(ethnicity: &str, race: &str, lep: &str) -> StoredValues {
        StoredValues {
            ethnicity: Some(ethnicity.to_string()),
            race: Some(race.to_string()),
            lep: Some(lep.to_string()),
        }
    }

    #[test]
    fn identical_values_produce_no_changes() {
        assert!(diff_stored(&computed("Y", "B", "N"), &stored("Y", "B", "N")).is_empty());
    }

    #[test]
    fn one_differing_field_is_reported_alone() {
        let changes = diff_stored(&computed("Y", "B", "N"), &stored("N", "B", "N"));
        assert_eq!(
            changes,
            vec![FieldChange {
                field: "ethnicity",
                before: "N".to_string(),
                after: "Y".to_string(),
            }]
        );
    }

    #[test]
    fn absent_stored_values_compare_as_empty() {
        let changes = diff_stored(&computed("N", "", "N"), &StoredValues::default());
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].field, "ethnicity");
        assert_eq!(changes[1].field, "lep");
    }

    #[test]
    fn comparison_is_exact_with_no_normalization() {
        // "y" stored lowercase is a difference, not a match.
        let changes = diff_stored(&computed("Y", "B", "N"), &stored("y", "B", "N"));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].before, "y");
    }
}
