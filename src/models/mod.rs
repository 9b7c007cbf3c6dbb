pub mod context;
pub mod event_kind;
pub mod record;
pub mod request;
pub mod session;

pub use context::ActiveContext;
pub use event_kind::EventKind;
pub use record::LogRecord;
pub use request::EventRequest;
pub use session::Session;
