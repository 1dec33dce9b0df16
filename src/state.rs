use std::path::PathBuf;

use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, FilterState};
use crate::data::model::CandidateTable;
use crate::data::stats::Summary;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI session, independent of rendering.
pub struct AppState {
    /// Loaded candidates; immutable until another file is opened.
    pub table: CandidateTable,

    /// Where `table` came from.
    pub source: PathBuf,

    /// Current filter control values.
    pub filters: FilterState,

    /// Filter values computed at load time; the "Clear filters" target.
    pub defaults: FilterState,

    /// Indices of candidates passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Metrics over `visible_indices` (cached).
    pub summary: Summary,

    /// Colour per candidate level.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(table: CandidateTable, source: PathBuf) -> Self {
        let defaults = FilterState::defaults(&table);
        let mut state = Self {
            color_map: ColorMap::new(&table.levels),
            filters: defaults.clone(),
            defaults,
            visible_indices: Vec::new(),
            summary: Summary::default(),
            status_message: None,
            table,
            source,
        };
        state.refilter();
        state
    }

    /// Replace the dataset and re-initialise filters and colours.
    pub fn set_table(&mut self, table: CandidateTable, source: PathBuf) {
        *self = Self::new(table, source);
    }

    /// Recompute `visible_indices` and `summary` from scratch.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.table, &self.filters);
        self.summary = Summary::compute(&self.table, &self.visible_indices);
        log::debug!(
            "{} of {} candidates visible",
            self.visible_indices.len(),
            self.table.len()
        );
    }

    /// Reset every control to its load-time value.
    pub fn clear_filters(&mut self) {
        self.filters = self.defaults.clone();
        self.refilter();
    }

    /// Run `edit` against the filters and refilter only if it changed them.
    pub fn edit_filters(&mut self, edit: impl FnOnce(&mut FilterState, &CandidateTable)) {
        let before = self.filters.clone();
        edit(&mut self.filters, &self.table);
        if self.filters != before {
            self.refilter();
        }
    }
}
