use thiserror::Error;

use crate::internal::utils::MAX_HEIGHT;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipListError {
    #[error("max level {max_level} is outside of the supported range 1..={limit}")]
    InvalidMaxLevel { max_level: usize, limit: usize },
    #[error("key is not comparable with itself and cannot be ordered")]
    IncomparableKey,
}

impl SkipListError {
    pub(crate) fn invalid_max_level(max_level: usize) -> Self {
        SkipListError::InvalidMaxLevel {
            max_level,
            limit: MAX_HEIGHT,
        }
    }
}

pub type Result<T> = std::result::Result<T, SkipListError>;
