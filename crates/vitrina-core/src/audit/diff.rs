//! Before/after field diffing
//!
//! Every audited edit captures a snapshot of the watched fields before and
//! after the mutation and records the resulting change list as free text in
//! the audit row.

use std::collections::BTreeMap;

/// Sentinel recorded when an edit changed nothing. Downstream consumers must
/// be able to tell "nothing changed" apart from an empty diff, so this is a
/// fixed string rather than `""`.
pub const NO_CHANGES: &str = "Sin cambios detectados";

/// Rendering of an absent value. `None` and `Some("")` are distinct values
/// and must stay distinguishable in the recorded text.
pub const MISSING_VALUE: &str = "(sin valor)";

/// Snapshot of an entity's mutable fields, keyed by field label
pub type Snapshot = BTreeMap<&'static str, Option<String>>;

/// Build a snapshot from (label, value) pairs
pub fn snapshot<I>(fields: I) -> Snapshot
where
    I: IntoIterator<Item = (&'static str, Option<String>)>,
{
    fields.into_iter().collect()
}

/// Compare two snapshots over `watched` fields, in the caller-given order.
///
/// Returns entries of the form `campo: 'antes' → 'después'` joined with
/// `", "`, or [`NO_CHANGES`] when every watched field is equal. Fields absent
/// from a snapshot count as having no value.
#[must_use]
pub fn compute_diff(before: &Snapshot, after: &Snapshot, watched: &[&str]) -> String {
    let mut changes = Vec::new();

    for field in watched {
        let old = before.get(*field).map_or(&None, |v| v);
        let new = after.get(*field).map_or(&None, |v| v);

        if old != new {
            changes.push(format!(
                "{field}: '{}' → '{}'",
                render(old.as_deref()),
                render(new.as_deref())
            ));
        }
    }

    if changes.is_empty() {
        NO_CHANGES.to_string()
    } else {
        changes.join(", ")
    }
}

fn render(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&'static str, Option<&str>)]) -> Snapshot {
        snapshot(
            pairs
                .iter()
                .map(|(k, v)| (*k, v.map(ToString::to_string))),
        )
    }

    #[test]
    fn test_identical_snapshots_yield_sentinel() {
        let snap = fields(&[("name", Some("La Huerta")), ("zone", Some("Centro"))]);
        assert_eq!(compute_diff(&snap, &snap, &["name", "zone"]), NO_CHANGES);
    }

    #[test]
    fn test_single_changed_field_yields_single_entry() {
        let before = fields(&[("name", Some("La Huerta")), ("zone", Some("Centro"))]);
        let after = fields(&[("name", Some("La Huerta")), ("zone", Some("Norte"))]);

        let diff = compute_diff(&before, &after, &["name", "zone"]);
        assert_eq!(diff, "zone: 'Centro' → 'Norte'");
    }

    #[test]
    fn test_entries_follow_watched_order_not_map_order() {
        let before = fields(&[("a", Some("1")), ("z", Some("1"))]);
        let after = fields(&[("a", Some("2")), ("z", Some("2"))]);

        // BTreeMap iterates a before z; the watched order must win.
        let diff = compute_diff(&before, &after, &["z", "a"]);
        assert_eq!(diff, "z: '1' → '2', a: '1' → '2'");
    }

    #[test]
    fn test_unwatched_fields_are_ignored() {
        let before = fields(&[("name", Some("x")), ("secret", Some("1"))]);
        let after = fields(&[("name", Some("x")), ("secret", Some("2"))]);
        assert_eq!(compute_diff(&before, &after, &["name"]), NO_CHANGES);
    }

    #[test]
    fn test_none_and_empty_string_are_distinct() {
        let before = fields(&[("phone", None)]);
        let after = fields(&[("phone", Some(""))]);

        let diff = compute_diff(&before, &after, &["phone"]);
        assert_eq!(diff, format!("phone: '{MISSING_VALUE}' → ''"));
    }

    #[test]
    fn test_absent_key_counts_as_missing_value() {
        let before = fields(&[]);
        let after = fields(&[("plan", Some("Valvanera"))]);

        let diff = compute_diff(&before, &after, &["plan"]);
        assert_eq!(diff, format!("plan: '{MISSING_VALUE}' → 'Valvanera'"));
    }

    #[test]
    fn test_multiple_changes_joined_with_comma() {
        let before = fields(&[("name", Some("A")), ("zone", Some("B")), ("plan", Some("C"))]);
        let after = fields(&[("name", Some("A2")), ("zone", Some("B")), ("plan", Some("C2"))]);

        let diff = compute_diff(&before, &after, &["name", "zone", "plan"]);
        assert_eq!(diff, "name: 'A' → 'A2', plan: 'C' → 'C2'");
    }
}
