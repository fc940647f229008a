use crate::environment::EnvironmentError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
    #[error("No best arm found with {remaining} pulls remaining")]
    NoBestArm { remaining: u32 },
}
