//! Orbis site binary.
//!
//! Parses the command line, loads scene settings, builds the route table and
//! hands the site to the engine runtime.

mod app;
mod cli;
mod config;
mod site;
mod views;

use anyhow::Context;
use orbis_engine::device::GpuInit;
use orbis_engine::logging::{init_logging, LoggingConfig};
use orbis_engine::paint::Color;
use orbis_engine::window::{Runtime, RuntimeConfig};

use crate::app::SiteApp;
use crate::site::Site;

fn main() -> anyhow::Result<()> {
    let args = cli::parse();
    init_logging(args.log.clone().map(LoggingConfig::with_filter).unwrap_or_default());

    let settings = config::load_settings(args.settings.as_deref())?;
    let clear = Color::from_hex_srgb(settings.clear_color);
    let site = Site::new(settings, &args.route).context("failed to build the route table")?;

    let config = RuntimeConfig {
        title: site.view().title(),
        ..RuntimeConfig::default()
    };
    log::info!("starting orbis at `{}`", args.route);
    Runtime::run(config, GpuInit::default(), SiteApp::new(site, clear))
}
