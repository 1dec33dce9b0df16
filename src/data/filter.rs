use std::fmt;

use super::model::{CandidateRecord, CandidateTable, NumericField, YesNo};

// ---------------------------------------------------------------------------
// Filter predicates
// ---------------------------------------------------------------------------

/// A dropdown / radio selection: either unconstrained or one concrete value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection<T> {
    /// "All" – the clause always passes.
    #[default]
    Any,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selection::Any => true,
            Selection::Only(v) => v == value,
        }
    }

    /// Like [`accepts`](Self::accepts) but for cells that may be empty;
    /// an empty cell only passes `Any`.
    pub fn accepts_opt(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Selection::Any, _) => true,
            (Selection::Only(v), Some(value)) => v == value,
            (Selection::Only(_), None) => false,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Any => f.write_str("All"),
            Selection::Only(v) => write!(f, "{v}"),
        }
    }
}

/// Decimals shown and kept by the range sliders.
pub const SLIDER_DECIMALS: usize = 1;

/// Inclusive numeric range over a fixed slider domain `[floor, ceiling]`.
///
/// While the selection still spans the whole domain the clause is inactive
/// and every row passes, including rows with a missing value. Once narrowed,
/// missing values never match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter {
    pub min: f64,
    pub max: f64,
    pub floor: f64,
    pub ceiling: f64,
}

impl RangeFilter {
    /// A range selecting its entire domain.
    pub fn new(floor: f64, ceiling: f64) -> Self {
        RangeFilter {
            min: floor,
            max: ceiling,
            floor,
            ceiling,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.min <= self.floor && self.max >= self.ceiling
    }

    pub fn contains(&self, value: Option<f64>) -> bool {
        value.is_some_and(|v| v >= self.min && v <= self.max)
    }

    pub fn admits(&self, value: Option<f64>) -> bool {
        self.is_unconstrained() || self.contains(value)
    }

    /// Keep `min <= max` after one bound moved, dragging the other along.
    ///
    /// A bound within half a slider step of the domain edge is snapped onto
    /// it; the slider rounds its value to [`SLIDER_DECIMALS`], so the exact
    /// observed maximum is otherwise unreachable by dragging.
    pub fn settle(&mut self, moved_min: bool) {
        let tolerance = 0.5 * 10f64.powi(-(SLIDER_DECIMALS as i32)) + 1e-9;
        if self.min <= self.floor + tolerance {
            self.min = self.floor;
        }
        if self.max >= self.ceiling - tolerance {
            self.max = self.ceiling;
        }
        if self.min > self.max {
            if moved_min {
                self.max = self.min;
            } else {
                self.min = self.max;
            }
        }
    }
}

/// Current value of every filter control.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub city: Selection<String>,
    pub company: Selection<String>,
    pub actively_looking: Selection<YesNo>,
    pub gaming_films: Selection<YesNo>,
    /// Indexed by [`NumericField::index`].
    pub ranges: [RangeFilter; NumericField::COUNT],
}

impl FilterState {
    /// Unfiltered state for a freshly loaded table: every selector at "All"
    /// and every range spanning its domain `[0, max observed]`.
    ///
    /// A column without any values falls back to its
    /// [`fallback_ceiling`](NumericField::fallback_ceiling).
    pub fn defaults(table: &CandidateTable) -> Self {
        let ranges = NumericField::ALL.map(|field| {
            let ceiling = table
                .max_value(field)
                .unwrap_or_else(|| field.fallback_ceiling());
            RangeFilter::new(0.0, ceiling.max(0.0))
        });

        FilterState {
            city: Selection::Any,
            company: Selection::Any,
            actively_looking: Selection::Any,
            gaming_films: Selection::Any,
            ranges,
        }
    }

    pub fn range(&self, field: NumericField) -> &RangeFilter {
        &self.ranges[field.index()]
    }

    pub fn range_mut(&mut self, field: NumericField) -> &mut RangeFilter {
        &mut self.ranges[field.index()]
    }

    /// Whether a single record passes every clause.
    pub fn matches(&self, rec: &CandidateRecord) -> bool {
        NumericField::ALL
            .iter()
            .all(|&f| self.range(f).admits(rec.value(f)))
            && self.city.accepts_opt(rec.city.as_ref())
            && self.company.accepts_opt(rec.last_company.as_ref())
            && self.actively_looking.accepts(&rec.actively_looking)
            && self.gaming_films.accepts(&rec.gaming_films)
    }
}

/// Return indices of candidates that pass all clauses, in table order.
pub fn filtered_indices(table: &CandidateTable, filters: &FilterState) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| filters.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(city: &str, it: f64, tr: f64) -> CandidateRecord {
        let mut rec = CandidateRecord {
            city: Some(city.to_string()),
            ..Default::default()
        };
        rec.set_value(NumericField::TotalItExperience, Some(it));
        rec.set_value(NumericField::TroubleshootingExperience, Some(tr));
        rec.set_value(NumericField::Windows, Some(2.0));
        rec.set_value(NumericField::NetworkManagement, Some(3.0));
        rec.set_value(NumericField::Microsoft365, Some(4.0));
        rec
    }

    fn austin_dallas() -> CandidateTable {
        CandidateTable::from_records(vec![
            candidate("Austin", 5.0, 3.0),
            candidate("Dallas", 20.0, 10.0),
        ])
    }

    #[test]
    fn defaults_span_observed_maxima() {
        let state = FilterState::defaults(&austin_dallas());
        assert_eq!(
            *state.range(NumericField::TotalItExperience),
            RangeFilter::new(0.0, 20.0)
        );
        assert_eq!(
            *state.range(NumericField::TroubleshootingExperience),
            RangeFilter::new(0.0, 10.0)
        );
        assert_eq!(*state.range(NumericField::Microsoft365), RangeFilter::new(0.0, 4.0));
        assert_eq!(state.city, Selection::Any);
        assert_eq!(state.gaming_films, Selection::Any);
    }

    #[test]
    fn defaults_fall_back_when_all_missing() {
        let table = CandidateTable::from_records(vec![
            CandidateRecord::default(),
            CandidateRecord::default(),
        ]);
        let state = FilterState::defaults(&table);
        for field in NumericField::ALL {
            assert_eq!(
                *state.range(field),
                RangeFilter::new(0.0, field.fallback_ceiling()),
                "{field:?}"
            );
        }
        assert_eq!(state.range(NumericField::TotalItExperience).max, 35.0);
        assert_eq!(state.range(NumericField::Windows).max, 10.0);
    }

    #[test]
    fn default_state_returns_whole_table() {
        let table = austin_dallas();
        let state = FilterState::defaults(&table);
        assert_eq!(filtered_indices(&table, &state), vec![0, 1]);
    }

    #[test]
    fn city_filter_selects_single_row() {
        let table = austin_dallas();
        let mut state = FilterState::defaults(&table);
        state.city = Selection::Only("Austin".to_string());
        assert_eq!(filtered_indices(&table, &state), vec![0]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let table = austin_dallas();
        let mut state = FilterState::defaults(&table);
        state.range_mut(NumericField::TotalItExperience).max = 10.0;
        let first = filtered_indices(&table, &state);
        let second = filtered_indices(&table, &state);
        assert_eq!(first, second);
        assert_eq!(first, vec![0]);
    }

    #[test]
    fn ranges_are_inclusive_and_exclude_missing() {
        let mut r = RangeFilter::new(0.0, 10.0);
        assert!(r.admits(None));
        r.min = 3.0;
        r.max = 5.0;
        assert!(r.admits(Some(3.0)));
        assert!(r.admits(Some(5.0)));
        assert!(!r.admits(Some(5.01)));
        assert!(!r.admits(None));
    }

    #[test]
    fn settle_drags_the_other_bound() {
        let mut r = RangeFilter::new(0.0, 10.0);
        r.max = 4.0;
        r.min = 6.0;
        r.settle(true);
        assert_eq!((r.min, r.max), (6.0, 6.0));
        r.max = 2.0;
        r.settle(false);
        assert_eq!((r.min, r.max), (2.0, 2.0));
    }

    #[test]
    fn dragging_to_track_end_restores_full_range() {
        let mut with_value = candidate("Austin", 1.0, 1.0);
        with_value.set_value(NumericField::Windows, Some(7.25));
        let mut missing = candidate("Austin", 1.0, 1.0);
        missing.set_value(NumericField::Windows, None);
        let table = CandidateTable::from_records(vec![with_value, missing]);
        let mut state = FilterState::defaults(&table);

        // A one-decimal slider dragged to its end stores 7.2, not 7.25.
        let range = state.range_mut(NumericField::Windows);
        range.max = 7.2;
        range.settle(false);
        assert_eq!(range.max, 7.25);
        assert!(range.is_unconstrained());
        assert_eq!(filtered_indices(&table, &state), vec![0, 1]);

        let range = state.range_mut(NumericField::Windows);
        range.min = 0.04;
        range.settle(true);
        assert_eq!(range.min, 0.0);
    }

    #[test]
    fn settle_keeps_interior_values() {
        let mut r = RangeFilter::new(0.0, 7.25);
        r.min = 1.2;
        r.max = 7.1;
        r.settle(false);
        assert_eq!((r.min, r.max), (1.2, 7.1));
        assert!(!r.is_unconstrained());
    }

    #[test]
    fn missing_value_fails_narrowed_range() {
        let mut rows = vec![candidate("Austin", 5.0, 3.0)];
        let mut missing = candidate("Austin", 1.0, 1.0);
        missing.set_value(NumericField::NetworkManagement, None);
        rows.push(missing);
        let table = CandidateTable::from_records(rows);
        let mut state = FilterState::defaults(&table);
        assert_eq!(filtered_indices(&table, &state), vec![0, 1]);

        state.range_mut(NumericField::NetworkManagement).max = 2.5;
        assert!(filtered_indices(&table, &state).is_empty());
        state.range_mut(NumericField::NetworkManagement).max = 3.0;
        state.range_mut(NumericField::NetworkManagement).min = 1.0;
        assert_eq!(filtered_indices(&table, &state), vec![0]);
    }

    #[test]
    fn all_missing_table_passes_default_ranges() {
        let table = CandidateTable::from_records(vec![
            CandidateRecord::default(),
            CandidateRecord::default(),
        ]);
        let state = FilterState::defaults(&table);
        assert_eq!(filtered_indices(&table, &state), vec![0, 1]);
    }

    #[test]
    fn narrowing_a_range_never_grows_the_subset() {
        let table = CandidateTable::from_records(
            (0..20)
                .map(|i| candidate("Austin", i as f64, (20 - i) as f64 / 2.0))
                .collect(),
        );
        let mut state = FilterState::defaults(&table);
        let mut previous = filtered_indices(&table, &state).len();
        for step in 0..10 {
            let range = state.range_mut(NumericField::TotalItExperience);
            if step % 2 == 0 {
                range.min += 1.0;
            } else {
                range.max -= 1.5;
            }
            let now = filtered_indices(&table, &state).len();
            assert!(now <= previous, "step {step}: {now} > {previous}");
            previous = now;
        }
        assert!(previous < table.len());
    }

    #[test]
    fn subset_preserves_table_order() {
        let table = CandidateTable::from_records(vec![
            candidate("Dallas", 1.0, 1.0),
            candidate("Austin", 2.0, 1.0),
            candidate("Dallas", 3.0, 1.0),
        ]);
        let mut state = FilterState::defaults(&table);
        state.city = Selection::Only("Dallas".to_string());
        assert_eq!(filtered_indices(&table, &state), vec![0, 2]);
    }

    #[test]
    fn city_literally_named_all_is_a_real_value() {
        let table = CandidateTable::from_records(vec![
            candidate("All", 1.0, 1.0),
            candidate("Austin", 2.0, 1.0),
        ]);
        let mut state = FilterState::defaults(&table);
        state.city = Selection::Only("All".to_string());
        assert_eq!(filtered_indices(&table, &state), vec![0]);
    }

    #[test]
    fn empty_city_only_passes_any() {
        let mut rec = candidate("x", 1.0, 1.0);
        rec.city = None;
        let table = CandidateTable::from_records(vec![rec]);
        let mut state = FilterState::defaults(&table);
        assert_eq!(filtered_indices(&table, &state).len(), 1);
        state.city = Selection::Only(String::new());
        assert!(filtered_indices(&table, &state).is_empty());
    }

    #[test]
    fn yes_no_selectors() {
        let mut yes = candidate("Austin", 1.0, 1.0);
        yes.actively_looking = YesNo::Yes;
        let no = candidate("Austin", 1.0, 1.0);
        let table = CandidateTable::from_records(vec![yes, no]);
        let mut state = FilterState::defaults(&table);

        state.actively_looking = Selection::Only(YesNo::Yes);
        assert_eq!(filtered_indices(&table, &state), vec![0]);
        state.actively_looking = Selection::Only(YesNo::No);
        assert_eq!(filtered_indices(&table, &state), vec![1]);
        state.gaming_films = Selection::Only(YesNo::Yes);
        assert!(filtered_indices(&table, &state).is_empty());
    }

    #[test]
    fn selection_display() {
        assert_eq!(Selection::<String>::Any.to_string(), "All");
        assert_eq!(Selection::Only(YesNo::Yes).to_string(), "Yes");
    }
}
