use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("The number of arms must be a positive integer")]
    InvalidArmCount,
    #[error("The number of turns must be a positive integer")]
    InvalidHorizon,
    #[error("Invalid beta parameters a={a}, b={b}")]
    InvalidBetaParams { a: f64, b: f64 },
    #[error("Arm {arm} out of range for a {arms}-armed bandit")]
    ArmOutOfRange { arm: usize, arms: usize },
    #[error("Turn {turn} outside the horizon of {horizon} pulls")]
    HorizonExhausted { turn: u32, horizon: u32 },
}
