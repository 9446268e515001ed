//! Client for the song-search API.
//!
//! `api` holds the wire types and normalization into [`crate::track::Track`];
//! `worker` runs the blocking HTTP calls on a dedicated thread so the event
//! loop never stalls on the network.

mod api;
mod worker;

pub use api::search_songs;
pub use worker::{SearchResults, SearchWorker};

#[cfg(test)]
mod tests;
