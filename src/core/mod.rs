pub mod context;
pub mod runner;
pub mod save;
pub mod session;
pub mod trigger;
