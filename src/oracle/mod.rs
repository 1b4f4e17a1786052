//! Code & feedback oracle
//!
//! Owns the secret and the history of a single game session.

mod board;
mod record;
mod source;

pub use board::Oracle;
pub use record::HistoryRecord;
pub use source::CodeSource;
