use crate::episode::Episode;

/// The playback entry point the homepage relies on
pub trait PlayerContext {
    /// Replace the active playlist and start playing at `start_index`
    fn handle_play_list(&mut self, list: Vec<Episode>, start_index: usize);
}

/// Playlist and playback state for the audio player.
///
/// Owned by whoever drives the UI and handed down explicitly to the
/// components that need to start playback.
#[derive(Debug, Clone, Default)]
pub struct Player {
    episode_list: Vec<Episode>,
    current_episode_index: usize,
    is_playing: bool,
    is_looping: bool,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn episode_list(&self) -> &[Episode] {
        &self.episode_list
    }

    pub fn current_episode_index(&self) -> usize {
        self.current_episode_index
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    /// Play a single episode on its own
    pub fn play(&mut self, episode: Episode) {
        self.episode_list = vec![episode];
        self.current_episode_index = 0;
        self.is_playing = true;
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing && self.current_episode().is_some();
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    /// Sync with the audio element's own play/pause state
    pub fn set_playing_state(&mut self, is_playing: bool) {
        self.is_playing = is_playing;
    }

    pub fn has_previous(&self) -> bool {
        self.current_episode_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_episode_index + 1 < self.episode_list.len()
    }

    pub fn play_next(&mut self) {
        if self.has_next() {
            self.current_episode_index += 1;
        } else if self.is_looping && !self.episode_list.is_empty() {
            self.current_episode_index = 0;
        }
    }

    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.current_episode_index -= 1;
        }
    }

    pub fn clear_player_state(&mut self) {
        self.episode_list.clear();
        self.current_episode_index = 0;
        self.is_playing = false;
    }
}

impl PlayerContext for Player {
    fn handle_play_list(&mut self, list: Vec<Episode>, start_index: usize) {
        if list.is_empty() {
            self.clear_player_state();
            return;
        }

        self.current_episode_index = start_index.min(list.len() - 1);
        self.episode_list = list;
        self.is_playing = true;
    }
}
