pub mod directory;
pub mod export;
pub mod sink;

pub use directory::{parse_coord, StoreDirectory, StoreDraft, ALL_CATEGORIES, FALLBACK_CATEGORY};
pub use export::{stores_to_csv, CSV_HEADER, EXPORT_FILENAME, EXPORT_MIME};
pub use sink::{DemoSink, SubmissionSink};
