//! Data models for users and financial entries.

pub mod entry;
pub mod user;

pub use entry::*;
pub use user::*;
