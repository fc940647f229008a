pub mod bayesian_dp;
pub mod errors;
pub mod greedy;
mod strategy;
pub mod ucb;

pub use errors::PolicyError;
pub use strategy::{Strategy, StrategyType};
