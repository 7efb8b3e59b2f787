mod app;
mod basemap;
mod config;
mod overlay;
mod ui;

use clap::Parser;
use eframe::egui;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Desktop map of live USGS earthquake activity and tectonic plate
/// boundaries.
#[derive(Debug, Parser)]
#[command(name = "quakemap-desktop", version, about)]
pub struct Args {
    /// Override the earthquake feed URL (useful with a local fixture).
    #[arg(long)]
    pub quakes_url: Option<String>,

    /// Override the plate boundary dataset URL.
    #[arg(long)]
    pub plates_url: Option<String>,

    /// Startup map center as "LAT,LON", overriding the saved config.
    #[arg(long, value_parser = parse_center)]
    pub center: Option<(f64, f64)>,

    /// Startup zoom level, overriding the saved config.
    #[arg(long)]
    pub zoom: Option<f64>,
}

fn parse_center(raw: &str) -> Result<(f64, f64), String> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| "expected LAT,LON".to_string())?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("bad latitude: {e}"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|e| format!("bad longitude: {e}"))?;
    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("latitude {lat} out of range"));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(format!("longitude {lon} out of range"));
    }
    Ok((lat, lon))
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_title("QuakeMap Desktop"),
        ..Default::default()
    };

    eframe::run_native(
        "QuakeMap Desktop",
        options,
        Box::new(move |cc| Ok(Box::new(app::QuakeMapApp::new(cc, &args)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_center() {
        assert_eq!(parse_center("36.7783,-119.4179"), Ok((36.7783, -119.4179)));
        assert_eq!(parse_center(" 10 , 20 "), Ok((10.0, 20.0)));
        assert!(parse_center("36.7783").is_err());
        assert!(parse_center("91,0").is_err());
        assert!(parse_center("0,181").is_err());
        assert!(parse_center("a,b").is_err());
    }
}
