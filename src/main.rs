//! Tramwise departure board simulator.
//!
//! Runs the device's refresh loop on the desktop: canned stationboard
//! responses stand in for the transit API, and every cycle's canvas is
//! written to a PNG instead of the e-paper panel.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod feed;
mod output;
mod timing;

use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{info, warn};
use tramwise_common::config::layout::EPAPER_37_LANDSCAPE;
use tramwise_common::config::{PROFILES, stations_for_network};
use tramwise_common::timestamp::epoch_seconds;
use tramwise_common::{Connectivity, EpaperCanvas, RawRecord, assemble_board, render_board, render_splash};

use crate::feed::FeedFixture;
use crate::timing::{REFRESH_INTERVAL, REFRESH_STEP_SECS};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the Tramwise departure board to a PNG", long_about = None)]
struct Cli {
    /// JSON file mapping station names to stationboard responses
    #[arg(long, value_name = "FILE", default_value = "demos/stationboard.json")]
    feed: PathBuf,

    /// Current time, e.g. 2024-03-01T08:05:00+0100 (default: system clock)
    #[arg(long, value_name = "TIMESTAMP")]
    now: Option<String>,

    /// Output image
    #[arg(long, value_name = "PNG", default_value = "board.png")]
    out: PathBuf,

    /// Wi-Fi network name used to pick the station profile
    #[arg(long, value_name = "NAME")]
    ssid: Option<String>,

    /// Simulate a lost Wi-Fi connection
    #[arg(long)]
    wifi_down: bool,

    /// Also write the startup splash screen to this image
    #[arg(long, value_name = "PNG")]
    splash: Option<PathBuf>,

    /// Number of refresh cycles to run
    #[arg(long, value_name = "N", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    cycles: u32,
}

fn start_time(now: Option<&str>) -> Result<i64> {
    match now {
        Some(timestamp) => match epoch_seconds(timestamp) {
            Some(secs) => Ok(secs),
            None => bail!("invalid --now timestamp: {timestamp}"),
        },
        None => Ok(chrono::Utc::now().timestamp()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let fixture = FeedFixture::load(&cli.feed)?;
    let start = start_time(cli.now.as_deref())?;
    let params = EPAPER_37_LANDSCAPE;
    let mut canvas = EpaperCanvas::epaper();

    if let Some(path) = &cli.splash {
        render_splash(&mut canvas, &params);
        output::save_png(&canvas, path).context("Failed to export splash screen")?;
        info!("splash written to {}", path.display());
    }

    for cycle in 0..cli.cycles {
        if cycle > 0 {
            thread::sleep(REFRESH_INTERVAL);
        }
        let now = start + i64::from(cycle) * REFRESH_STEP_SECS;

        let wifi = !cli.wifi_down;
        let ssid = if wifi { cli.ssid.as_deref() } else { None };
        let stations = stations_for_network(PROFILES, ssid);

        // One fetch per station; a missing fixture entry is a failed request.
        let mut api_ok = true;
        let fetched: Vec<Vec<RawRecord>> = stations
            .iter()
            .map(|station| {
                let records = if wifi { fixture.records(station.name) } else { None };
                records.unwrap_or_else(|| {
                    warn!("no stationboard for {}", station.name);
                    api_ok = false;
                    Vec::new()
                })
            })
            .collect();

        let mut feeds = fetched.iter();
        let board = assemble_board(stations, |_| feeds.next().map_or(&[][..], Vec::as_slice), now);

        let status = Connectivity {
            wifi,
            api: Some(api_ok),
        };
        let summary = render_board(&mut canvas, &board, &params, status);
        info!(
            "cycle {}: {} stations, {} rows{}",
            cycle + 1,
            summary.stations_drawn,
            summary.rows_drawn,
            if summary.truncated { " (cut off)" } else { "" }
        );

        output::save_png(&canvas, &cli.out).context("Failed to export board")?;
    }

    info!("board written to {}", cli.out.display());
    Ok(())
}
