use crate::episode::Episode;
use crate::player::PlayerContext;

use super::loader::HomeProps;

/// A play button, bound to a position in the combined episode list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayControl {
    pub start_index: usize,
}

impl PlayControl {
    /// Start playback of the page's combined list at this control's position
    pub fn activate<P: PlayerContext + ?Sized>(&self, page: &HomePage<'_>, player: &mut P) {
        player.handle_play_list(page.episode_list(), self.start_index);
    }
}

/// One rendered episode, either a card or a table row
#[derive(Debug, Clone, Copy)]
pub struct EpisodeEntry<'a> {
    pub episode: &'a Episode,
    pub play: PlayControl,
}

/// View model of the homepage.
///
/// Table rows are offset by the number of latest episodes, so every play
/// control addresses the right episode in `latest ++ all`.
#[derive(Debug, Clone)]
pub struct HomePage<'a> {
    props: &'a HomeProps,
    latest: Vec<EpisodeEntry<'a>>,
    all: Vec<EpisodeEntry<'a>>,
}

impl<'a> HomePage<'a> {
    pub fn new(props: &'a HomeProps) -> Self {
        let offset = props.latest_episodes.len();

        let latest = props
            .latest_episodes
            .iter()
            .enumerate()
            .map(|(index, episode)| EpisodeEntry {
                episode,
                play: PlayControl { start_index: index },
            })
            .collect();

        let all = props
            .all_episodes
            .iter()
            .enumerate()
            .map(|(index, episode)| EpisodeEntry {
                episode,
                play: PlayControl {
                    start_index: index + offset,
                },
            })
            .collect();

        Self { props, latest, all }
    }

    pub fn latest(&self) -> &[EpisodeEntry<'a>] {
        &self.latest
    }

    pub fn all(&self) -> &[EpisodeEntry<'a>] {
        &self.all
    }

    /// The list every play control hands to the player
    pub fn episode_list(&self) -> Vec<Episode> {
        self.props.episode_list()
    }
}
