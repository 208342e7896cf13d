use robot_core::CoreError;
use robot_village::VillageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("robot gave up after {turns} turns with {remaining} parcels undelivered")]
    DidNotConverge {
        turns:     u64,
        remaining: usize,
    },

    #[error("village error: {0}")]
    Village(#[from] VillageError),
}

pub type SimResult<T> = Result<T, SimError>;
