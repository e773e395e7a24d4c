mod fetch;
mod query;

pub use fetch::{ApiClient, DEFAULT_API_URL};
pub use query::{EpisodeQuery, HOME_EPISODE_LIMIT, SortOrder};
