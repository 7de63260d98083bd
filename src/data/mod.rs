/// Data layer: record types, loading, and cleaning.
///
/// Architecture:
/// ```text
///  .csv (Latin-1 tolerant)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode + parse file → Vec<RawRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  unit filter, drop missing, Tukey fence → Vec<SalaryRecord>
///   └──────────┘
/// ```
pub mod clean;
pub mod loader;
pub mod model;
