mod app;
mod facility;
mod layout;
mod util;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "energomap-state.json")]
    state_path: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1400.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Расчет параметров электроснабжения и отопления",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::EnergomapApp::new(
                cc,
                args.state_path.clone(),
            )))
        }),
    )
}
