mod config;
mod environment;
mod policies;

use config::AppConfig;
use environment::Bandit;
use policies::Strategy;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env().expect("Cannot read config");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let experiment = config.experiment;
    info!(
        arms = experiment.arms,
        turns = experiment.turns,
        seed = ?experiment.seed,
        "starting experiment"
    );

    let mut world = Bandit::new(
        experiment.arms,
        experiment.turns,
        experiment.seed,
        experiment.distribution,
    )?;

    for strategy in config.strategies {
        info!(strategy = ?strategy, "running strategy");
        strategy.into_inner().run(&mut world)?;
    }

    println!("{}", serde_json::to_string_pretty(world.scores())?);
    Ok(())
}
