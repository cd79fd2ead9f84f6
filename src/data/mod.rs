/// Data layer: core types and folder aggregation.
///
/// Architecture:
/// ```text
///   folder/
///     scan_01.txt  scan_02.txt  notes.md  broken.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse each two-column file, sum y element-wise
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  LoadResult   │  Series + files read + faulty entries
///   └──────────────┘
/// ```

pub mod loader;
pub mod model;
