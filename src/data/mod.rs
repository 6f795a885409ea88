/// Data layer: core types, loading, and the filter/sample pipeline.
///
/// Architecture:
/// ```text
///  chartData.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<Observation>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  date/value bounds → subsequence
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  sampler  │  timeframe stride → displayed sequence
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
