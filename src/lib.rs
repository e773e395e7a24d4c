pub mod api;
pub mod episode;
pub mod error;
pub mod home;
pub mod http;
pub mod player;
pub mod progress;
pub mod publish;
pub mod revalidate;

// Re-export main types for convenience
pub use api::{ApiClient, DEFAULT_API_URL, EpisodeQuery, SortOrder};
pub use episode::{Episode, EpisodeFile, RawEpisode, convert_duration_to_time_string};
pub use error::{LoadError, PublishError, RegenerateError};
pub use home::{HomePage, HomeProps, PlayControl, load_home_props, render_home};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use player::{Player, PlayerContext};
pub use progress::{NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter};
pub use publish::{PublishedPage, publish_home};
pub use revalidate::{
    HomeLoader, REVALIDATE_INTERVAL, Refresh, RevalidateOptions, Revalidator, RunSummary,
};
