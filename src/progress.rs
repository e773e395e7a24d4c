use std::path::PathBuf;
use std::sync::Arc;

/// Events emitted while regenerating the homepage
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Episodes are being requested from the API
    FetchingEpisodes { url: String },

    /// The API answered with a decodable episode list
    EpisodesFetched { count: usize },

    /// The page is being rendered
    Rendering {
        /// Number of episodes in the latest section
        latest: usize,
        /// Number of episodes in the table section
        all: usize,
    },

    /// The page has been written to disk
    PagePublished {
        path: PathBuf,
        /// `sha256:<hex>` of the rendered HTML
        content_hash: String,
    },

    /// A regeneration failed; the previously published page stays in place
    RegenerationFailed { error: String },

    /// The next regeneration is scheduled
    NextRegeneration { in_secs: u64 },
}

/// Trait for reporting progress events during regeneration.
///
/// Implementations can use this to display spinners, log messages,
/// or collect events in tests.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {
        // Intentionally empty
    }
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_reporter_handles_all_events() {
        let reporter = NoopReporter;

        reporter.report(ProgressEvent::FetchingEpisodes {
            url: "http://localhost:3333/episodes".to_string(),
        });

        reporter.report(ProgressEvent::EpisodesFetched { count: 12 });

        reporter.report(ProgressEvent::Rendering { latest: 2, all: 10 });

        reporter.report(ProgressEvent::PagePublished {
            path: PathBuf::from("public/index.html"),
            content_hash: "sha256:abc123".to_string(),
        });

        reporter.report(ProgressEvent::RegenerationFailed {
            error: "Connection refused".to_string(),
        });

        reporter.report(ProgressEvent::NextRegeneration { in_secs: 28_800 });
    }
}
