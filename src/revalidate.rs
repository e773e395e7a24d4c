// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{Instant, MissedTickBehavior};

use crate::api::ApiClient;
use crate::error::{LoadError, RegenerateError};
use crate::home::{HomePage, HomeProps, load_home_props, render_home};
use crate::http::HttpClient;
use crate::progress::{ProgressEvent, SharedProgressReporter};
use crate::publish::{PublishedPage, publish_home};

/// How long a generated homepage stays fresh (8 hours)
pub const REVALIDATE_INTERVAL: Duration = Duration::from_secs(60 * 60 * 8);

/// Shortest period the loop will tick at
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// A source of fresh homepage props, invoked by whatever schedules regeneration
#[async_trait]
pub trait Refresh: Send + Sync {
    async fn refresh(&self) -> Result<HomeProps, LoadError>;
}

/// Loads homepage props from the episodes API
pub struct HomeLoader<C> {
    api: ApiClient<C>,
    reporter: SharedProgressReporter,
}

impl<C: HttpClient> HomeLoader<C> {
    pub fn new(api: ApiClient<C>, reporter: SharedProgressReporter) -> Self {
        Self { api, reporter }
    }
}

#[async_trait]
impl<C: HttpClient> Refresh for HomeLoader<C> {
    async fn refresh(&self) -> Result<HomeProps, LoadError> {
        load_home_props(&self.api, &self.reporter).await
    }
}

/// Options for page regeneration
#[derive(Debug, Clone)]
pub struct RevalidateOptions {
    /// Directory the page is published into
    pub output_dir: PathBuf,
    /// Time between regenerations
    pub interval: Duration,
}

impl Default for RevalidateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("public"),
            interval: REVALIDATE_INTERVAL,
        }
    }
}

/// Outcome counts of a revalidation loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Regenerates and publishes the homepage, once or on an interval
pub struct Revalidator<R> {
    source: R,
    options: RevalidateOptions,
    reporter: SharedProgressReporter,
}

impl<R: Refresh> Revalidator<R> {
    pub fn new(source: R, options: RevalidateOptions, reporter: SharedProgressReporter) -> Self {
        Self {
            source,
            options,
            reporter,
        }
    }

    /// Refresh, render and publish the page once.
    ///
    /// On error the previously published page and props stay in place.
    pub async fn run_once(&self) -> Result<PublishedPage, RegenerateError> {
        let props = self.source.refresh().await?;
        let page = HomePage::new(&props);

        self.reporter.report(ProgressEvent::Rendering {
            latest: page.latest().len(),
            all: page.all().len(),
        });

        let html = render_home(&page)
            .map_err(RegenerateError::Render)?
            .into_string();
        let published = publish_home(&self.options.output_dir, &html, &props)?;

        self.reporter.report(ProgressEvent::PagePublished {
            path: published.html_path.clone(),
            content_hash: published.content_hash.clone(),
        });

        Ok(published)
    }

    /// Regenerate immediately, then once per interval until `shutdown` resolves.
    ///
    /// Failures are reported and leave the last good page in place; the loop
    /// keeps going. A zero interval is raised to one millisecond.
    pub async fn run<F: Future<Output = ()>>(&self, shutdown: F) -> RunSummary {
        tokio::pin!(shutdown);

        let mut summary = RunSummary::default();
        self.regenerate(&mut summary).await;

        let interval = self.options.interval.max(MIN_INTERVAL);
        let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            self.reporter.report(ProgressEvent::NextRegeneration {
                in_secs: interval.as_secs(),
            });

            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = ticker.tick() => self.regenerate(&mut summary).await,
            }
        }

        summary
    }

    async fn regenerate(&self, summary: &mut RunSummary) {
        match self.run_once().await {
            Ok(_) => summary.succeeded += 1,
            Err(e) => {
                self.reporter.report(ProgressEvent::RegenerationFailed {
                    error: e.to_string(),
                });
                summary.failed += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::fixtures::make_props;
    use crate::progress::NoopReporter;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;
    use tokio::sync::Notify;

    /// Serves props with one more episode per call; listed calls fail
    struct ScriptedSource {
        calls: AtomicUsize,
        failing_calls: Vec<usize>,
        stop_after: usize,
        done: Arc<Notify>,
    }

    impl ScriptedSource {
        fn new(failing_calls: Vec<usize>, stop_after: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                failing_calls,
                stop_after,
                done: Arc::new(Notify::new()),
            }
        }
    }

    #[async_trait]
    impl Refresh for ScriptedSource {
        async fn refresh(&self) -> Result<HomeProps, LoadError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call >= self.stop_after {
                self.done.notify_one();
            }

            if self.failing_calls.contains(&call) {
                Err(LoadError::HttpStatus {
                    url: "http://localhost:3333/episodes".to_string(),
                    status: 502,
                })
            } else {
                Ok(make_props(call + 2))
            }
        }
    }

    fn options(output_dir: PathBuf, interval: Duration) -> RevalidateOptions {
        RevalidateOptions {
            output_dir,
            interval,
        }
    }

    #[test]
    fn default_interval_is_eight_hours() {
        let options = RevalidateOptions::default();
        assert_eq!(options.interval.as_secs(), 28_800);
        assert_eq!(options.output_dir, PathBuf::from("public"));
    }

    #[tokio::test]
    async fn run_once_publishes_page() {
        let dir = tempdir().unwrap();
        let revalidator = Revalidator::new(
            ScriptedSource::new(vec![], usize::MAX),
            options(dir.path().to_path_buf(), REVALIDATE_INTERVAL),
            NoopReporter::shared(),
        );

        let published = revalidator.run_once().await.unwrap();

        let html = std::fs::read_to_string(&published.html_path).unwrap();
        assert!(html.contains("<title>Home | podcastr</title>"));
        assert_eq!(html.matches("data-play-index=").count(), 3);
        assert!(published.content_hash.starts_with("sha256:"));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_page() {
        let dir = tempdir().unwrap();
        let revalidator = Revalidator::new(
            ScriptedSource::new(vec![2], usize::MAX),
            options(dir.path().to_path_buf(), REVALIDATE_INTERVAL),
            NoopReporter::shared(),
        );

        let published = revalidator.run_once().await.unwrap();
        let before = std::fs::read_to_string(&published.html_path).unwrap();

        let result = revalidator.run_once().await;
        assert!(matches!(
            result,
            Err(RegenerateError::Load(LoadError::HttpStatus { status: 502, .. }))
        ));

        let after = std::fs::read_to_string(&published.html_path).unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn run_stops_on_shutdown_after_first_pass() {
        let dir = tempdir().unwrap();
        let revalidator = Revalidator::new(
            ScriptedSource::new(vec![], usize::MAX),
            options(dir.path().to_path_buf(), REVALIDATE_INTERVAL),
            NoopReporter::shared(),
        );

        let summary = revalidator.run(async {}).await;

        assert_eq!(
            summary,
            RunSummary {
                succeeded: 1,
                failed: 0
            }
        );
        assert!(dir.path().join("index.html").exists());
    }

    #[tokio::test]
    async fn run_survives_failed_regeneration() {
        let dir = tempdir().unwrap();
        let source = ScriptedSource::new(vec![2], 3);
        let done = source.done.clone();
        let revalidator = Revalidator::new(
            source,
            options(dir.path().to_path_buf(), Duration::from_millis(5)),
            NoopReporter::shared(),
        );

        let summary = revalidator.run(async move { done.notified().await }).await;

        assert_eq!(
            summary,
            RunSummary {
                succeeded: 2,
                failed: 1
            }
        );

        // The third pass served five episodes
        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert_eq!(html.matches("data-play-index=").count(), 5);
    }

    #[tokio::test]
    async fn zero_interval_still_ticks() {
        let dir = tempdir().unwrap();
        let source = ScriptedSource::new(vec![], 3);
        let done = source.done.clone();
        let revalidator = Revalidator::new(
            source,
            options(dir.path().to_path_buf(), Duration::ZERO),
            NoopReporter::shared(),
        );

        let summary = revalidator.run(async move { done.notified().await }).await;

        assert_eq!(
            summary,
            RunSummary {
                succeeded: 3,
                failed: 0
            }
        );
        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert_eq!(html.matches("data-play-index=").count(), 5);
    }
}
