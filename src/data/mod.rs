/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → FeatureDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ FeatureDataset │  parallel x / y / colour series
///   └───────────────┘
/// ```

pub mod loader;
pub mod model;
