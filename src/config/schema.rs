use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/sargam/config.toml` or
/// `~/.config/sargam/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SARGAM__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub playback: PlaybackSettings,
    pub controls: ControlsSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the song-search API.
    pub base_url: String,
    /// Query issued at startup and whenever the search box is empty.
    pub default_query: String,
    /// Cap on how many results a single search keeps.
    pub max_results: usize,
    /// Per-request timeout for search calls (seconds).
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://saavn.dev".to_string(),
            default_query: "punjabi".to_string(),
            max_results: 20,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Initial output volume in `[0, 1]`.
    pub volume: f32,
    /// Whether looping starts enabled.
    pub looping: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: 0.5,
            looping: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing `H` / `L`.
    pub scrub_seconds: u64,
    /// Volume change applied by `+` / `-`.
    pub volume_step: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            scrub_seconds: 5,
            volume_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Override for the session storage directory. Defaults to the
    /// platform data dir when unset.
    pub dir: Option<String>,
}
