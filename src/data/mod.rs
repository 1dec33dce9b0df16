/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  Technical Support.csv (latin1)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode + parse → CandidateTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ CandidateTable │  Vec<CandidateRecord>, option lists
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterState predicates → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  count / means over the subset
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
