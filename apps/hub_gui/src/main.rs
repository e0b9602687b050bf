mod controller;
mod media;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use hub_core::AssetBase;

use crate::controller::events::MediaEvent;
use crate::media::commands::MediaCommand;
use crate::media::worker::spawn_media_worker;
use crate::ui::HubGuiApp;

#[derive(Debug, Parser)]
#[command(name = "hub_gui", about = "PRJCTR Institute AI tool hub")]
struct Args {
    /// Base directory for static assets; deployments under a non-default
    /// path set this so the mentor clip still resolves.
    #[arg(long, env = "HUB_ASSETS_BASE", default_value = "assets")]
    assets_base: PathBuf,

    /// Logical path of the mentor onboarding clip, relative to the assets
    /// base.
    #[arg(long, default_value = hub_core::MENTOR_CLIP_LOGICAL_PATH)]
    mentor_clip: String,

    /// Print the dashboard card catalog as JSON and exit.
    #[arg(long)]
    print_catalog: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    if args.print_catalog {
        println!("{}", serde_json::to_string_pretty(hub_core::card_catalog())?);
        return Ok(());
    }

    let clip_path = AssetBase::new(&args.assets_base).resolve(&args.mentor_clip)?;
    tracing::info!(path = %clip_path.display(), "mentor clip resolved");

    let (cmd_tx, cmd_rx) = bounded::<MediaCommand>(4);
    let (event_tx, event_rx) = bounded::<MediaEvent>(4);
    spawn_media_worker(cmd_rx, event_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PRJCTR Institute AI Hub")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([820.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "PRJCTR Institute AI Hub",
        options,
        Box::new(move |_cc| Ok(Box::new(HubGuiApp::new(cmd_tx, event_rx, clip_path)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run hub window: {err}"))
}
