// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Serialize;

use crate::api::{ApiClient, EpisodeQuery};
use crate::episode::{Episode, RawEpisode};
use crate::error::LoadError;
use crate::http::HttpClient;
use crate::progress::{ProgressEvent, SharedProgressReporter};

/// Number of episodes featured in the "latest" section
pub const LATEST_EPISODE_COUNT: usize = 2;

/// Everything the homepage renders from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeProps {
    pub latest_episodes: Vec<Episode>,
    pub all_episodes: Vec<Episode>,
}

impl HomeProps {
    /// Split an API-ordered episode list into the two homepage sections
    pub fn from_episodes(episodes: Vec<Episode>) -> Self {
        let (latest_episodes, all_episodes) = partition_episodes(episodes);
        Self {
            latest_episodes,
            all_episodes,
        }
    }

    /// Both sections joined back together, latest first
    pub fn episode_list(&self) -> Vec<Episode> {
        self.latest_episodes
            .iter()
            .chain(&self.all_episodes)
            .cloned()
            .collect()
    }
}

/// Split off the first [`LATEST_EPISODE_COUNT`] episodes; the rest keep their order
pub fn partition_episodes(mut episodes: Vec<Episode>) -> (Vec<Episode>, Vec<Episode>) {
    let split = episodes.len().min(LATEST_EPISODE_COUNT);
    let rest = episodes.split_off(split);
    (episodes, rest)
}

/// Map raw API records to display episodes, failing on the first bad record
pub fn to_display_episodes(raw: Vec<RawEpisode>) -> Result<Vec<Episode>, LoadError> {
    raw.into_iter().map(Episode::from_raw).collect()
}

/// Fetch the latest episodes and shape them into homepage props.
///
/// Issues exactly one request. Any failure is returned as is; no partial
/// props are ever produced.
pub async fn load_home_props<C: HttpClient>(
    api: &ApiClient<C>,
    reporter: &SharedProgressReporter,
) -> Result<HomeProps, LoadError> {
    let query = EpisodeQuery::latest();

    reporter.report(ProgressEvent::FetchingEpisodes {
        url: api.endpoint("episodes", &query.to_params())?.to_string(),
    });

    let raw = api.fetch_episodes(&query).await?;

    reporter.report(ProgressEvent::EpisodesFetched { count: raw.len() });

    let episodes = to_display_episodes(raw)?;
    Ok(HomeProps::from_episodes(episodes))
}
