mod loader;
mod render;
mod view;

pub use loader::{
    HomeProps, LATEST_EPISODE_COUNT, load_home_props, partition_episodes, to_display_episodes,
};
pub use render::{PAGE_TITLE, render_home};
pub use view::{EpisodeEntry, HomePage, PlayControl};
