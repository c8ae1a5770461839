//! Selection state over the fixed model set
//!
//! `Selection` is an immutable value: every operation builds a new set and
//! leaves the previous one untouched. Reactive consumers compare old and new
//! values to detect changes, so the live set is never mutated in place.

use std::collections::BTreeSet;

use crate::data::BenchmarkDataset;

/// The set of currently selected model ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    models: BTreeSet<String>,
}

impl Selection {
    /// Empty selection. A valid terminal state: every derived view becomes
    /// an empty sequence, not an error.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every model in the dataset
    pub fn all(dataset: &BenchmarkDataset) -> Self {
        Self {
            models: dataset.records().iter().map(|r| r.model.clone()).collect(),
        }
    }

    /// The first `n` models in dataset natural order.
    ///
    /// Reads file order, never the active chart's sort. The shipped dataset
    /// is ranked by success rate, so natural order already is the ranking.
    pub fn top_n(dataset: &BenchmarkDataset, n: usize) -> Self {
        Self {
            models: dataset.leading_models(n).map(str::to_owned).collect(),
        }
    }

    /// Restore from persisted ids. Ids that no longer match a known record
    /// are kept in the set and simply never match anything when filtering.
    pub fn from_models<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            models: models.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a model is selected
    pub fn contains(&self, model: &str) -> bool {
        self.models.contains(model)
    }

    /// Number of selected ids (stale ids included)
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Selected ids in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(String::as_str)
    }

    /// Flip membership for one model, returning the new selection
    #[must_use]
    pub fn toggle(&self, model: &str) -> Self {
        let mut models = self.models.clone();
        if !models.remove(model) {
            models.insert(model.to_string());
        }
        Self { models }
    }

    /// Drop one model (scatter-point dismiss). Equivalent to `toggle` when
    /// the model is present; a no-op when it is not.
    #[must_use]
    pub fn remove(&self, model: &str) -> Self {
        let mut models = self.models.clone();
        models.remove(model);
        Self { models }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BenchmarkRecord;
    use pretty_assertions::assert_eq;

    fn make_record(model: &str, success_rate: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            model: model.to_string(),
            correct: (success_rate * 2.1) as u32,
            total_tests: 210,
            success_rate,
            average_duration: 1000.0,
            total_cost: 1.0,
            average_cost_per_test: 0.005,
        }
    }

    fn make_dataset(models: &[(&str, f64)]) -> BenchmarkDataset {
        BenchmarkDataset {
            generated_at: None,
            suite: None,
            records: models.iter().map(|(m, r)| make_record(m, *r)).collect(),
        }
    }

    #[test]
    fn toggle_adds_and_removes() {
        let selection = Selection::none();
        let with_alpha = selection.toggle("alpha");
        assert!(with_alpha.contains("alpha"));
        assert!(!selection.contains("alpha"));

        let without_alpha = with_alpha.toggle("alpha");
        assert!(!without_alpha.contains("alpha"));
        assert!(without_alpha.is_empty());
    }

    #[test]
    fn operations_produce_new_values() {
        let first = Selection::none().toggle("alpha");
        let second = first.toggle("beta");
        // the original value is unchanged, so value-equality change
        // detection sees the update
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
        assert_ne!(first, second);
    }

    #[test]
    fn all_then_none_is_empty() {
        let dataset = make_dataset(&[("a", 90.0), ("b", 80.0), ("c", 70.0)]);
        let all = Selection::all(&dataset);
        assert_eq!(all.len(), 3);

        // selectAll twice is the same state
        assert_eq!(all, Selection::all(&dataset));

        let none = Selection::none();
        assert!(none.is_empty());
    }

    #[test]
    fn top_n_uses_natural_order_and_ignores_prior_state() {
        // natural order deliberately not sorted by the rate
        let dataset = make_dataset(&[("first", 10.0), ("second", 99.0), ("third", 50.0)]);

        let top2 = Selection::top_n(&dataset, 2);
        assert!(top2.contains("first"));
        assert!(top2.contains("second"));
        assert!(!top2.contains("third"));

        // same result no matter what was selected before
        assert_eq!(Selection::top_n(&dataset, 2), top2);
    }

    #[test]
    fn top_n_larger_than_dataset_selects_everything() {
        let dataset = make_dataset(&[("a", 1.0), ("b", 2.0)]);
        assert_eq!(Selection::top_n(&dataset, 10), Selection::all(&dataset));
    }

    #[test]
    fn remove_is_noop_when_absent() {
        let selection = Selection::from_models(["alpha"]);
        let removed = selection.remove("alpha");
        assert!(removed.is_empty());

        let still_empty = removed.remove("alpha");
        assert!(still_empty.is_empty());
    }

    #[test]
    fn stale_ids_are_kept() {
        let selection = Selection::from_models(["alpha", "retired-model"]);
        assert_eq!(selection.len(), 2);
        assert!(selection.contains("retired-model"));
    }

    #[test]
    fn iter_is_sorted() {
        let selection = Selection::from_models(["zeta", "alpha", "mid"]);
        let ids: Vec<&str> = selection.iter().collect();
        assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
    }
}
