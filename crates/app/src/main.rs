use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use helix_core::model::RoundSettings;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

mod config;

use config::HelixConfig;

const DEFAULT_LOG_FILTER: &str = "helix=info,helix_core=info,services=info,ui=info";

#[derive(Parser, Debug)]
#[command(name = "helix", version, about = "Maths drilling with bookwork checks")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "HELIX_CONFIG")]
    config: Option<PathBuf>,

    /// Fixed RNG seed for reproducible rounds
    #[arg(long, env = "HELIX_SEED")]
    seed: Option<u64>,

    /// Questions per round
    #[arg(long)]
    questions_per_round: Option<u32>,

    /// Catalog index of the highest topic unlocked at launch
    #[arg(long)]
    unlocked: Option<usize>,
}

impl Cli {
    /// Flags win over the config file.
    fn apply(&self, config: &mut HelixConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(questions) = self.questions_per_round {
            config.questions_per_round = questions;
        }
        if let Some(unlocked) = self.unlocked {
            config.unlocked = unlocked;
        }
    }
}

struct DesktopApp {
    settings: RoundSettings,
    seed: Option<u64>,
    unlocked: usize,
    advance_delay: Duration,
}

impl UiApp for DesktopApp {
    fn round_settings(&self) -> RoundSettings {
        self.settings.clone()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn unlocked(&self) -> usize {
        self.unlocked
    }

    fn advance_delay(&self) -> Duration {
        self.advance_delay
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = config::load_config_from(cli.config.as_deref())?;
    cli.apply(&mut config);
    let settings = config.round_settings()?;

    info!(
        questions = settings.questions_per_round(),
        bookwork_chance = settings.bookwork_chance(),
        unlocked = config.unlocked,
        seed = ?config.seed,
        "launching helix"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        settings,
        seed: config.seed,
        unlocked: config.unlocked,
        advance_delay: config.advance_delay(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Helix")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        error!(error = %err, "startup failed");
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tracing::Level;
    use tracing_subscriber::filter::Targets;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config_values() {
        let cli = Cli::try_parse_from([
            "helix",
            "--seed",
            "9",
            "--questions-per-round",
            "3",
            "--unlocked",
            "4",
        ])
        .unwrap();
        let mut config = HelixConfig {
            seed: Some(1),
            ..HelixConfig::default()
        };

        cli.apply(&mut config);

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.questions_per_round, 3);
        assert_eq!(config.unlocked, 4);
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let cli = Cli::try_parse_from(["helix"]).unwrap();
        let mut config = HelixConfig {
            questions_per_round: 7,
            ..HelixConfig::default()
        };

        cli.apply(&mut config);

        assert_eq!(config.questions_per_round, 7);
        assert_eq!(config.unlocked, 0);
    }

    #[test]
    fn default_log_filter_keeps_ui_warnings() {
        let targets: Targets = DEFAULT_LOG_FILTER.parse().unwrap();
        for target in ["helix", "helix_core", "services", "ui"] {
            assert!(targets.would_enable(target, &Level::WARN), "{target}");
            assert!(targets.would_enable(target, &Level::INFO), "{target}");
        }
        assert!(!targets.would_enable("ui", &Level::DEBUG));
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Cli::try_parse_from(["helix", "--seed", "abc"]).is_err());
    }
}
