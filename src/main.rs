mod app;
mod screens;

use app::WortWunderApp;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wortwunder_app::config::{Args, Services};
use wortwunder_app::database::db::{init_database, load_profile};

fn main() -> eframe::Result<()> {
    // a missing .env file is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wortwunder=info,wortwunder_app=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let services = match Services::from_args(&args) {
        Ok(services) => services,
        Err(e) => {
            error!("Failed to set up services: {e}");
            std::process::exit(1);
        }
    };

    let conn = match init_database(&args.db_path) {
        Ok(conn) => conn,
        Err(e) => {
            error!("Failed to open settings database {}: {e}", args.db_path.display());
            std::process::exit(1);
        }
    };

    let profile = load_profile(&conn).unwrap_or_else(|e| {
        error!("Failed to load profile settings: {e}");
        Default::default()
    });
    info!(
        "Starting WortWunder (preferred level {})",
        profile.preferred_level
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "WortWunder",
        options,
        Box::new(|_cc| Ok(Box::new(WortWunderApp::new(services, conn, profile)))),
    )
}
