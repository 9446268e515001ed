//! Session state: the current track and the recent-plays history.
//!
//! The store is an explicitly owned value wired through the runtime by
//! reference; nothing else may mutate the current track or the history.

mod store;

pub use store::*;
