//! Entry id allocation.

use crate::config::DriveConfig;
use crate::{DriveError, Result};

/// Hands out decimal string ids from one counter shared by folders and files.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Allocate the next id. Ids are never handed out twice.
    ///
    /// The counter never wraps; once it cannot advance, every call fails.
    pub fn allocate(&mut self) -> Result<String> {
        let id = self.next;
        self.next = id
            .checked_add(1)
            .ok_or(DriveError::IdsExhausted { last_id: id })?;
        Ok(id.to_string())
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::starting_at(DriveConfig::FIRST_ALLOCATED_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_after_seed_ids() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.allocate().unwrap(), "13");
        assert_eq!(ids.allocate().unwrap(), "14");
    }

    #[test]
    fn test_exhausted_counter_does_not_wrap() {
        let mut ids = IdAllocator::starting_at(u64::MAX - 1);
        assert_eq!(ids.allocate().unwrap(), (u64::MAX - 1).to_string());
        assert_eq!(
            ids.allocate().unwrap_err(),
            DriveError::IdsExhausted { last_id: u64::MAX }
        );
        assert!(ids.allocate().is_err());
    }
}
