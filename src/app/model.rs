//! Application model: search state, selection and the transport snapshot.

use crate::player::TransportInfo;
use crate::track::Track;

/// Which list currently has the selection cursor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Pane {
    /// The search results list.
    #[default]
    Results,
    /// The recent-plays sidebar.
    Recent,
}

/// The main application model.
pub struct App {
    /// Latest applied search results.
    pub results: Vec<Track>,
    /// Selection cursor within the focused pane.
    pub selected: usize,
    pub pane: Pane,

    /// Whether keystrokes currently edit the search query.
    pub search_mode: bool,
    pub query: String,
    /// Generation of the most recently issued search. Responses carrying
    /// an older generation are stale and must be dropped.
    pub search_generation: u64,
    /// Set when the query changed and a new search should be issued.
    pub search_dirty: bool,
    /// Set while a search response is outstanding.
    pub search_in_flight: bool,

    /// Set when `results` changed and the player's playlist needs syncing.
    pub playlist_dirty: bool,

    /// Latest transport snapshot from the player thread.
    pub transport: TransportInfo,
}

impl App {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            selected: 0,
            pane: Pane::default(),
            search_mode: false,
            query: String::new(),
            search_generation: 0,
            search_dirty: false,
            search_in_flight: false,
            playlist_dirty: false,
            transport: TransportInfo::default(),
        }
    }

    /// Reserve the next search generation. The caller tags its request
    /// with the returned value.
    pub fn next_search_generation(&mut self) -> u64 {
        self.search_generation += 1;
        self.search_generation
    }

    /// Apply a finished search. Returns false (and changes nothing) when
    /// the response is stale, i.e. a newer search was issued since.
    pub fn apply_results(&mut self, generation: u64, tracks: Vec<Track>) -> bool {
        if generation != self.search_generation {
            return false;
        }
        self.results = tracks;
        self.search_in_flight = false;
        self.playlist_dirty = true;
        if self.pane == Pane::Results {
            self.clamp_selection(self.results.len());
        }
        true
    }

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    /// Append a character to the query. Every edit triggers a fresh
    /// search; there is deliberately no debounce.
    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.search_dirty = true;
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.search_dirty = true;
    }

    /// Move focus between results and the recent sidebar.
    pub fn toggle_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Results => Pane::Recent,
            Pane::Recent => Pane::Results,
        };
        self.selected = 0;
    }

    /// Move the cursor down, wrapping. `len` is the focused pane's length.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// Move the cursor up, wrapping.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
    }

    fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
