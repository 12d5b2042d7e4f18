// SPDX-License-Identifier: GPL-3.0-or-later
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use coverart_archive::{CoverArt, CoverArtClient, CoverArtImage, ThumbnailSize};
use coverart_config::{load as load_config, ArchiveConfig, TelemetryConfig};
use tracing::info;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// List the cover art the Cover Art Archive holds for a MusicBrainz entity.
#[derive(Debug, Parser)]
#[command(name = "coverart", version)]
struct Cli {
    /// Entity kind: `release` or `release-group`
    resource_type: String,

    /// MusicBrainz identifier of the release or release group
    mbid: String,

    /// Path to a TOML configuration file
    #[arg(long, env = "COVERART_CONFIG")]
    config: Option<PathBuf>,

    /// Print thumbnail URLs of this size (250, 500 or 1200) instead of full-size images
    #[arg(long, value_parser = parse_thumbnail_size)]
    thumbnail: Option<ThumbnailSize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = init_tracing();

    let config = load_config(cli.config.as_deref())?;
    apply_telemetry(&filter, &config.telemetry)?;

    let client = build_client(&config.archive)?;
    let cover_art = client
        .fetch(&cli.resource_type, &cli.mbid)
        .await
        .with_context(|| format!("fetching cover art for {} {}", cli.resource_type, cli.mbid))?;
    info!(target: "cli", images = cover_art.len(), "cover art listing fetched");

    let mut stdout = std::io::stdout().lock();
    for line in render(&cover_art, cli.thumbnail) {
        writeln!(stdout, "{line}")?;
    }

    Ok(())
}

/// Install the subscriber before configuration is read, so config loading is
/// logged; the configured level is applied afterwards through the handle.
fn init_tracing() -> FilterHandle {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);
    let (env_filter, handle) = reload::Layer::new(log_filter(
        &TelemetryConfig::default().log_level,
    ));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    handle
}

fn log_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn apply_telemetry(filter: &FilterHandle, telemetry: &TelemetryConfig) -> Result<()> {
    filter.reload(log_filter(&telemetry.log_level))?;
    Ok(())
}

fn build_client(archive: &ArchiveConfig) -> Result<CoverArtClient> {
    let mut builder = CoverArtClient::builder()
        .base_url(archive.base_url.clone())
        .timeout(Duration::from_secs(archive.timeout_secs));

    if let Some(user_agent) = &archive.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }

    Ok(builder.build()?)
}

fn parse_thumbnail_size(value: &str) -> Result<ThumbnailSize, String> {
    match value {
        "250" | "small" => Ok(ThumbnailSize::Small),
        "500" | "large" => Ok(ThumbnailSize::Large),
        "1200" => Ok(ThumbnailSize::ExtraLarge),
        other => Err(format!("unsupported thumbnail size {other:?}")),
    }
}

fn render(cover_art: &CoverArt, thumbnail: Option<ThumbnailSize>) -> Vec<String> {
    if cover_art.is_empty() {
        return vec![format!(
            "no cover art for {} {}",
            cover_art.resource_type(),
            cover_art.mbid()
        )];
    }

    cover_art
        .images()
        .iter()
        .map(|image| describe(image, thumbnail))
        .collect()
}

fn describe(image: &CoverArtImage, thumbnail: Option<ThumbnailSize>) -> String {
    let side = match (image.is_front(), image.is_back()) {
        (true, true) => "front+back",
        (true, false) => "front",
        (false, true) => "back",
        (false, false) => "-",
    };
    let url = match thumbnail {
        Some(size) => image.url_for(size),
        None => image.image_url(),
    };

    let mut line = format!("{side:<10} {url}");
    if !image.types().is_empty() {
        line.push_str(&format!(" [{}]", image.types().join(", ")));
    }
    if !image.is_approved() {
        line.push_str(" (pending approval)");
    }
    line
}
