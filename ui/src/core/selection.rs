//! Selected-flavor state owned by the root component.
//!
//! `SelectionState` only ever holds an index into its (non-empty) table, so
//! resolving the current flavor cannot fail. Unknown names are rejected at
//! `select` time and leave the state untouched.

use thiserror::Error;

use super::config::ShowcaseConfig;
use super::flavors::{FlavorRecord, FlavorTable};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown flavor `{0}`")]
    UnknownFlavor(String),
}

/// Result of a successful `select` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Changed,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    table: FlavorTable,
    selected: usize,
}

impl SelectionState {
    /// Start on `default_flavor`, or on the first record if the table lacks it.
    pub fn new(table: FlavorTable, default_flavor: &str) -> Self {
        let selected = table.position(default_flavor).unwrap_or_else(|| {
            dioxus::logger::tracing::warn!(
                default_flavor,
                fallback = %table.first().name,
                "default flavor missing from table"
            );
            0
        });
        Self { table, selected }
    }

    pub fn from_config(table: FlavorTable, config: &ShowcaseConfig) -> Self {
        Self::new(table, &config.default_flavor)
    }

    pub fn table(&self) -> &FlavorTable {
        &self.table
    }

    pub fn selected_name(&self) -> &str {
        &self.current().name
    }

    pub fn current(&self) -> &FlavorRecord {
        self.table.get(self.selected).unwrap_or_else(|| self.table.first())
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_name() == name
    }

    /// Where selecting `name` would move the selection: `Some(index)` for a
    /// change, `None` when `name` is already selected.
    pub fn resolve(&self, name: &str) -> Result<Option<usize>, SelectionError> {
        let index = self
            .table
            .position(name)
            .ok_or_else(|| SelectionError::UnknownFlavor(name.to_string()))?;

        Ok((index != self.selected).then_some(index))
    }

    /// Apply an index previously returned by `resolve` on this state.
    pub(crate) fn apply(&mut self, index: usize) {
        if index < self.table.len() {
            self.selected = index;
        }
    }

    pub fn select(&mut self, name: &str) -> Result<SelectOutcome, SelectionError> {
        match self.resolve(name)? {
            Some(index) => {
                self.apply(index);
                Ok(SelectOutcome::Changed)
            }
            None => Ok(SelectOutcome::Unchanged),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FlavorTable {
        FlavorTable::from_json(
            r#"[
                { "name": "Strawberry", "image": "/s.png", "gradient": "pink" },
                { "name": "Chocolate", "image": "/c.png", "gradient": "brown" },
                { "name": "Mint", "image": "/m.png", "gradient": "green" }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn starts_on_default_flavor() {
        let state = SelectionState::new(table(), "Chocolate");
        assert_eq!(state.selected_name(), "Chocolate");
        assert_eq!(state.current().gradient, "brown");
    }

    #[test]
    fn falls_back_to_first_record_when_default_missing() {
        let state = SelectionState::new(table(), "Pistachio");
        assert_eq!(state.selected_name(), "Strawberry");
    }

    #[test]
    fn every_flavor_resolves_to_its_record() {
        let mut state = SelectionState::new(table(), "Strawberry");
        for record in table().all() {
            state.select(&record.name).unwrap();
            assert_eq!(state.current(), record);
        }
    }

    #[test]
    fn reselecting_is_unchanged() {
        let mut state = SelectionState::new(table(), "Strawberry");
        assert_eq!(state.select("Strawberry"), Ok(SelectOutcome::Unchanged));
        assert_eq!(state.select("Mint"), Ok(SelectOutcome::Changed));
        assert_eq!(state.select("Mint"), Ok(SelectOutcome::Unchanged));
    }

    #[test]
    fn resolve_does_not_move_the_selection() {
        let state = SelectionState::new(table(), "Strawberry");
        assert_eq!(state.resolve("Strawberry"), Ok(None));
        assert_eq!(state.resolve("Mint"), Ok(Some(2)));
        assert_eq!(state.selected_name(), "Strawberry");
    }

    #[test]
    fn unknown_flavor_is_rejected_and_ignored() {
        let mut state = SelectionState::new(table(), "Mint");
        assert_eq!(
            state.select("Pistachio"),
            Err(SelectionError::UnknownFlavor("Pistachio".into()))
        );
        assert_eq!(state.selected_name(), "Mint");
    }
}
