//! Season journal: a chronological record of what happened at the theater.

pub mod entry;
pub mod log;

pub use entry::{JournalEntry, SeasonEvent};
pub use log::Journal;
