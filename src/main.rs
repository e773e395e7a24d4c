use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};

use podcastr::{
    ApiClient, DEFAULT_API_URL, HomeLoader, NoopReporter, ProgressEvent, ProgressReporter,
    ReqwestClient, RevalidateOptions, Revalidator, SharedProgressReporter,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static PAINT: Emoji<'_, '_> = Emoji("🎨 ", "[r] ");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[+] ");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[!] ");
static CLOCK: Emoji<'_, '_> = Emoji("⏰ ", "[z] ");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");

/// Generate the podcastr homepage from the episodes API
#[derive(Parser, Debug)]
#[command(name = "podcastr")]
#[command(about = "Generate the podcastr homepage from the episodes API")]
#[command(version)]
struct Args {
    /// Base URL of the episodes API
    #[arg(long, env = "PODCASTR_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Directory the page is written to
    #[arg(short, long, default_value = "public")]
    output_dir: PathBuf,

    /// Keep running and regenerate the page every revalidation interval
    #[arg(short, long)]
    watch: bool,

    /// Seconds between regenerations in watch mode
    #[arg(long, default_value = "28800")]
    revalidate: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Quiet mode - suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

/// Progress reporter using an indicatif spinner for terminal output
struct IndicatifReporter {
    bar: ProgressBar,
}

impl IndicatifReporter {
    fn new() -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap();

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }
}

impl ProgressReporter for IndicatifReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::FetchingEpisodes { url } => {
                self.bar
                    .set_message(format!("{SEARCH}Fetching episodes: {}", url.cyan()));
            }

            ProgressEvent::EpisodesFetched { count } => {
                self.bar.set_message(format!(
                    "{HEADPHONES}{} episodes received",
                    count.to_string().cyan()
                ));
            }

            ProgressEvent::Rendering { latest, all } => {
                self.bar.set_message(format!(
                    "{PAINT}Rendering {} latest, {} in table",
                    latest.to_string().cyan(),
                    all.to_string().cyan()
                ));
            }

            ProgressEvent::PagePublished { path, content_hash } => {
                self.bar.println(format!(
                    "{SUCCESS}{} {} {}",
                    "Published".bold().green(),
                    path.display().to_string().cyan(),
                    content_hash.dimmed()
                ));
            }

            ProgressEvent::RegenerationFailed { error } => {
                self.bar.println(format!(
                    "{FAILURE}{} {}",
                    "Regeneration failed, keeping previous page:".red().bold(),
                    error.red()
                ));
            }

            ProgressEvent::NextRegeneration { in_secs } => {
                self.bar.set_message(format!(
                    "{CLOCK}Next regeneration in {}",
                    format_interval(in_secs).yellow()
                ));
            }
        }
    }
}

impl Drop for IndicatifReporter {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

fn format_interval(secs: u64) -> String {
    match (secs / 3600, (secs % 3600) / 60, secs % 60) {
        (0, 0, s) => format!("{s}s"),
        (0, m, s) => format!("{m}m {s}s"),
        (h, m, _) => format!("{h}h {m}m"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if !args.quiet {
        println!(
            "\n{}{} {}\n",
            MICROPHONE,
            "podcastr".bold().magenta(),
            "- Homepage Generator".dimmed()
        );
    }

    let client = ReqwestClient::with_timeout(Duration::from_secs(args.timeout))
        .context("Failed to build HTTP client")?;
    let api = ApiClient::new(client, &args.api_url).context("Invalid API URL")?;

    let reporter: SharedProgressReporter = if args.quiet {
        NoopReporter::shared()
    } else {
        std::sync::Arc::new(IndicatifReporter::new())
    };

    let options = RevalidateOptions {
        output_dir: args.output_dir.clone(),
        interval: Duration::from_secs(args.revalidate.max(1)),
    };
    let revalidator = Revalidator::new(
        HomeLoader::new(api, reporter.clone()),
        options,
        reporter.clone(),
    );

    if args.watch {
        let summary = revalidator
            .run(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await;

        drop(revalidator);
        drop(reporter);

        if !args.quiet {
            println!(
                "\n{} {} regenerated, {} failed",
                "Stopped:".bold(),
                summary.succeeded.to_string().green().bold(),
                if summary.failed > 0 {
                    summary.failed.to_string().red().bold()
                } else {
                    summary.failed.to_string().green()
                }
            );
        }
    } else {
        let published = revalidator
            .run_once()
            .await
            .context("Failed to generate homepage")?;

        drop(revalidator);
        drop(reporter);

        if !args.quiet {
            println!(
                "\n{FOLDER}Output: {}\n",
                published.html_path.display().to_string().cyan()
            );
        }
    }

    Ok(())
}
