use robot_village::VillageError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("a fixed route needs at least one stop")]
    EmptyRoute,

    #[error("no outstanding parcel to plan for")]
    NothingToPlan,

    #[error(transparent)]
    Village(#[from] VillageError),
}

pub type StrategyResult<T> = Result<T, StrategyError>;
