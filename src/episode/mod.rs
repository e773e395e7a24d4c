mod date;
mod duration;
mod model;

pub use date::{format_published_at, parse_published_at};
pub use duration::{coerce_duration, convert_duration_to_time_string};
pub use model::{Episode, EpisodeFile, RawEpisode};
