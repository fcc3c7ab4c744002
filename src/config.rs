use crate::error::{Result, SkipListError};
use crate::internal::utils::MAX_HEIGHT;

/// The number of levels a list may grow to when no other limit is configured.
pub const DEFAULT_MAX_LEVEL: usize = 16;

/// Construction time settings of a [SkipList](crate::SkipList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_level: usize,
    seed: Option<u64>,
}

impl Config {
    pub fn new() -> Self {
        Config {
            max_level: DEFAULT_MAX_LEVEL,
            seed: None,
        }
    }

    /// Caps the height any node, and therefore the list, may reach.
    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
        self
    }

    /// Seeds the height generator, making tower heights reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_level == 0 || self.max_level > MAX_HEIGHT {
            return Err(SkipListError::invalid_max_level(self.max_level));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
