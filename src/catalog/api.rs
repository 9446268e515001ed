//! Wire format of the search endpoint and normalization into track records.

use serde::Deserialize;

use crate::config::ApiSettings;
use crate::track::{FALLBACK_ARTIST, FALLBACK_IMAGE, FALLBACK_TITLE, Track};

/// `GET {base_url}/api/search/songs?query=...` response envelope. The API
/// returns far more fields than this; serde drops the rest.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: SearchData,
}

#[derive(Debug, Default, Deserialize)]
struct SearchData {
    #[serde(default)]
    results: Vec<RawSong>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawSong {
    /// Ids arrive as strings or numbers depending on the provider.
    id: Option<serde_json::Value>,
    name: Option<String>,
    title: Option<String>,
    /// Artwork variants ordered small to large.
    image: Vec<UrlVariant>,
    #[serde(rename = "primaryArtists")]
    primary_artists: Option<String>,
    artists: Option<Artists>,
    /// Stream variants ordered by bitrate.
    #[serde(rename = "downloadUrl")]
    download_url: Vec<UrlVariant>,
}

#[derive(Debug, Default, Deserialize)]
struct UrlVariant {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Artists {
    #[serde(default)]
    primary: Vec<NamedArtist>,
}

#[derive(Debug, Default, Deserialize)]
struct NamedArtist {
    #[serde(default)]
    name: String,
}

fn pick_url(variants: &[UrlVariant], preferred: &[usize]) -> Option<String> {
    preferred
        .iter()
        .filter_map(|&i| variants.get(i))
        .find_map(|v| v.url.clone())
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl RawSong {
    /// Normalize a raw result: medium artwork variant preferred, then the
    /// smaller ones; `primaryArtists` preferred over the artist list; the
    /// highest-bitrate stream variant preferred, then the next one down.
    pub(crate) fn into_track(self) -> Track {
        let id = match self.id {
            Some(serde_json::Value::String(s)) => s,
            Some(other) => other.to_string(),
            None => String::new(),
        };

        let image =
            pick_url(&self.image, &[2, 1, 0]).unwrap_or_else(|| FALLBACK_IMAGE.to_string());

        let title = self
            .name
            .and_then(non_empty)
            .or_else(|| self.title.and_then(non_empty))
            .unwrap_or_else(|| FALLBACK_TITLE.to_string());

        let subtitle = self
            .primary_artists
            .and_then(non_empty)
            .or_else(|| {
                self.artists.and_then(|a| {
                    let joined = a
                        .primary
                        .iter()
                        .map(|p| p.name.trim())
                        .filter(|n| !n.is_empty())
                        .collect::<Vec<_>>()
                        .join(", ");
                    non_empty(joined)
                })
            })
            .unwrap_or_else(|| FALLBACK_ARTIST.to_string());

        let audio = pick_url(&self.download_url, &[2, 1]);

        Track {
            id,
            image,
            title,
            subtitle,
            audio,
        }
    }
}

pub(crate) fn normalize(response: SearchResponse, max_results: usize) -> Vec<Track> {
    if !response.success {
        return Vec::new();
    }
    response
        .data
        .results
        .into_iter()
        .take(max_results)
        .map(RawSong::into_track)
        .collect()
}

/// Fetch songs matching `query`. Failures of any kind degrade to an empty
/// list; the search surface never raises an error at the user.
pub fn search_songs(client: &reqwest::blocking::Client, api: &ApiSettings, query: &str) -> Vec<Track> {
    match fetch(client, api, query) {
        Ok(tracks) => tracks,
        Err(e) => {
            log::warn!("catalog: search for '{query}' failed: {e}");
            Vec::new()
        }
    }
}

fn fetch(
    client: &reqwest::blocking::Client,
    api: &ApiSettings,
    query: &str,
) -> Result<Vec<Track>, reqwest::Error> {
    let url = format!("{}/api/search/songs", api.base_url.trim_end_matches('/'));
    let response: SearchResponse = client
        .get(&url)
        .query(&[("query", query)])
        .send()?
        .error_for_status()?
        .json()?;
    Ok(normalize(response, api.max_results))
}
