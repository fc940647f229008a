use crate::environment::ProbDistribution;
use crate::policies::StrategyType;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExperimentConfig {
    pub arms: usize,
    pub turns: u32,
    pub seed: Option<u64>,
    pub distribution: ProbDistribution,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    pub experiment: ExperimentConfig,
    pub strategies: Vec<StrategyType>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("APP"))
            .build()?;

        builder.try_deserialize()
    }
}
