//! Search worker thread.
//!
//! Every request carries a generation number and every response echoes it
//! back. The event loop only applies the response whose generation matches
//! the most recently issued one, so a slow response can never clobber the
//! results of a newer query.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crate::config::ApiSettings;
use crate::track::Track;

use super::api::search_songs;

#[derive(Debug)]
struct SearchRequest {
    generation: u64,
    query: String,
}

/// One finished search, tagged with the generation of its request.
#[derive(Debug)]
pub struct SearchResults {
    pub generation: u64,
    pub tracks: Vec<Track>,
}

/// Handle to the worker thread. Dropping it closes the request channel,
/// which ends the thread.
pub struct SearchWorker {
    tx: Sender<SearchRequest>,
    rx: Receiver<SearchResults>,
}

impl SearchWorker {
    pub fn spawn(api: ApiSettings) -> anyhow::Result<Self> {
        let (req_tx, req_rx) = mpsc::channel::<SearchRequest>();
        let (res_tx, res_rx) = mpsc::channel::<SearchResults>();

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;

        thread::spawn(move || {
            while let Ok(req) = req_rx.recv() {
                // Collapse any backlog: older pending queries are already
                // stale, only the newest one is worth the round trip.
                let mut req = req;
                while let Ok(newer) = req_rx.try_recv() {
                    req = newer;
                }

                let tracks = search_songs(&client, &api, &req.query);
                let results = SearchResults {
                    generation: req.generation,
                    tracks,
                };
                if res_tx.send(results).is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            tx: req_tx,
            rx: res_rx,
        })
    }

    pub fn request(&self, generation: u64, query: String) {
        let _ = self.tx.send(SearchRequest { generation, query });
    }

    pub fn try_recv(&self) -> Option<SearchResults> {
        self.rx.try_recv().ok()
    }
}
