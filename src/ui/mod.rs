pub mod dialog;
pub mod messages;
pub mod notify;
