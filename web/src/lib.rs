use clap::Parser;
use lights_out_core::Coord;
use wasm_bindgen::prelude::*;

mod game;
mod settings;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::OffLevel>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of rows, overrides the stored setting for this page load
    #[arg(long)]
    rows: Option<Coord>,

    /// Number of columns, overrides the stored setting for this page load
    #[arg(long)]
    cols: Option<Coord>,

    /// Chance each light starts on, overrides the stored setting for this page load
    #[arg(long)]
    chance: Option<f64>,
}

impl Args {
    /// Arguments are read from the location hash, e.g. `#-vv&--rows=7&--seed=42`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn props(&self) -> game::GameViewProps {
        game::GameViewProps {
            seed: self.seed,
            overrides: settings::BoardOverrides {
                rows: self.rows,
                cols: self.cols,
                chance: self.chance,
            },
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.props()).render();
}
