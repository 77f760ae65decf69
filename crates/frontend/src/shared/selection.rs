//! Checked-row tracking for list views.

use std::collections::HashSet;

/// Selection set scoped to one page-view instance.
///
/// Rows are keyed by a resolver function extracting the identifier from
/// a row object, so resource types with differing id fields share one
/// implementation. The set may keep identifiers the current filter
/// hides; they stay part of a bulk update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check an unchecked row, uncheck a checked one.
    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Select every given row.
    pub fn select_all_by<T>(&mut self, rows: &[T], resolver: impl Fn(&T) -> &str) {
        self.selected = rows.iter().map(|row| resolver(row).to_string()).collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// True when every given row is checked.
    pub fn all_selected_by<T>(&self, rows: &[T], resolver: impl Fn(&T) -> &str) -> bool {
        !rows.is_empty() && rows.iter().all(|row| self.contains(resolver(row)))
    }

    /// Selected identifiers, sorted for a deterministic request payload.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        key: String,
    }

    fn rows(keys: &[&str]) -> Vec<Row> {
        keys.iter()
            .map(|k| Row {
                key: k.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_toggle_twice_restores_prior_state() {
        let mut selection = Selection::new();
        selection.toggle("p1");

        let before = selection.clone();
        selection.toggle("p2");
        selection.toggle("p2");
        assert_eq!(selection, before);
    }

    #[test]
    fn test_select_all_then_clear_is_empty() {
        let mut selection = Selection::new();
        selection.toggle("stale");
        selection.select_all_by(&rows(&["p1", "p2", "p3"]), |r| &r.key);
        assert_eq!(selection.len(), 3);

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_all_selected_by() {
        let items = rows(&["p1", "p2"]);
        let mut selection = Selection::new();
        assert!(!selection.all_selected_by(&items, |r| &r.key));

        selection.toggle("p1");
        assert!(!selection.all_selected_by(&items, |r| &r.key));

        selection.toggle("p2");
        assert!(selection.all_selected_by(&items, |r| &r.key));

        // Never "all selected" over an empty row set
        assert!(!selection.all_selected_by(&rows(&[]), |r: &Row| &r.key));
    }

    #[test]
    fn test_ids_are_sorted() {
        let mut selection = Selection::new();
        selection.toggle("p2");
        selection.toggle("p1");
        assert_eq!(selection.ids(), vec!["p1".to_string(), "p2".to_string()]);
    }
}
