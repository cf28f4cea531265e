mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use eframe::egui;
use snake_common::config::Validate;
use snake_common::games::snake::SnakeSessionSettings;
use snake_common::{log, GrowthRule, Mode, ScoringFormula};

use config::{get_config_store, Config};
use offline::start_local_session;
use state::SharedState;
use ui::SnakeApp;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Normal,
    Infinite,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Normal => Mode::Normal,
            ModeArg::Infinite => Mode::Infinite,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScoringArg {
    Linear,
    Weighted,
}

impl From<ScoringArg> for ScoringFormula {
    fn from(value: ScoringArg) -> Self {
        match value {
            ScoringArg::Linear => ScoringFormula::Linear,
            ScoringArg::Weighted => ScoringFormula::Weighted,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GrowthArg {
    Immediate,
    Digest,
}

impl From<GrowthArg> for GrowthRule {
    fn from(value: GrowthArg) -> Self {
        match value {
            GrowthArg::Immediate => GrowthRule::Immediate,
            GrowthArg::Digest => GrowthRule::Digest,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "snake_desktop")]
#[command(about = "Single-player snake", long_about = None)]
struct Args {
    /// Config file, defaults to snake_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length in cells
    #[arg(long)]
    size: Option<u32>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long, value_enum)]
    scoring: Option<ScoringArg>,

    #[arg(long, value_enum)]
    growth: Option<GrowthArg>,

    /// Fixed seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Prefix log lines with "Snake"
    #[arg(long, default_value_t = false)]
    use_log_prefix: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(size) = self.size {
            config.game.size = size;
        }
        if let Some(mode) = self.mode {
            config.game.mode = mode.into();
        }
        if let Some(scoring) = self.scoring {
            config.game.scoring_formula = scoring.into();
        }
        if let Some(growth) = self.growth {
            config.game.growth_rule = growth.into();
        }
        if self.seed.is_some() {
            config.game.seed = self.seed;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    snake_common::logger::init_logger(prefix);

    let store = get_config_store(args.config.clone());
    let mut config = store.load()?;
    args.apply(&mut config);
    config.validate()?;

    log!(
        "Starting {}x{} {} snake ({:?}, {:?})",
        config.game.size,
        config.game.size,
        config.game.mode,
        config.game.scoring_formula,
        config.game.growth_rule
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let shared_state = SharedState::new();
    let session = start_local_session(
        runtime.handle(),
        SnakeSessionSettings::from(&config.game),
        shared_state.clone(),
    );

    let board_pixels = config.window.board_pixels;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_pixels + 60.0, board_pixels + 200.0])
            .with_title("Snake"),
        ..Default::default()
    };

    let ui_session = session.clone();
    eframe::run_native(
        "Snake",
        options,
        Box::new(move |cc| {
            Ok(Box::new(SnakeApp::new(
                cc,
                ui_session,
                shared_state,
                board_pixels,
            )))
        }),
    )?;

    session.shutdown();
    runtime.shutdown_timeout(std::time::Duration::from_secs(1));
    Ok(())
}
