use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LoadError;

use super::date::{format_published_at, parse_published_at};
use super::duration::{coerce_duration, convert_duration_to_time_string};

/// Audio file attached to an episode, as served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeFile {
    pub url: String,
    #[serde(rename = "type", default)]
    pub mime_type: String,
    /// Duration in seconds, kept exactly as the API sent it
    #[serde(default)]
    pub duration: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Episode record as served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEpisode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: String,
    pub published_at: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    pub file: EpisodeFile,
    /// Attributes not modelled above, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Keys the display episode derives itself
const DERIVED_KEYS: [&str; 4] = ["publishedAt", "duration", "url", "durationAsString"];

/// Display-ready episode: the raw record plus fields derived from it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    #[serde(flatten)]
    pub raw: RawEpisode,
    /// Publish date formatted as `d MMM yy` (pt-BR)
    pub published_at: String,
    /// Duration in whole seconds
    pub duration: u64,
    /// Audio URL, copied from `file.url`
    pub url: String,
    /// Duration formatted as `HH:MM:SS`
    pub duration_as_string: String,
}

impl Episode {
    /// Project a raw API record into its display form.
    ///
    /// Extra API attributes named like a derived field are dropped; the derived
    /// value wins, so every key is serialized once.
    pub fn from_raw(mut raw: RawEpisode) -> Result<Self, LoadError> {
        for key in DERIVED_KEYS {
            raw.extra.remove(key);
        }

        let published_at = format_published_at(parse_published_at(&raw.published_at)?);
        let duration = coerce_duration(&raw.file.duration);

        Ok(Self {
            published_at,
            duration,
            url: raw.file.url.clone(),
            duration_as_string: convert_duration_to_time_string(duration),
            raw,
        })
    }

    pub fn id(&self) -> &str {
        &self.raw.id
    }

    pub fn title(&self) -> &str {
        &self.raw.title
    }

    pub fn members(&self) -> &str {
        &self.raw.members
    }

    pub fn thumbnail(&self) -> &str {
        &self.raw.thumbnail
    }

    /// Route of the episode detail page
    pub fn href(&self) -> String {
        format!("/episodes/{}", self.raw.id)
    }
}
