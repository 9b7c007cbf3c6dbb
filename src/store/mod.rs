pub mod logger;
pub mod schema;

pub use logger::{EventLogger, RecordSink};
pub use schema::{HEADERS, SCHEMA_VERSION};
