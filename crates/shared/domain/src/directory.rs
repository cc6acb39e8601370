//! Person directory - answers whether a person id is known.

use std::collections::BTreeSet;

use crate::constants::{DEFAULT_KNOWN_PERSON_IDS, PERSON_NOT_FOUND_MESSAGE};
use crate::error::{DomainError, DomainResult};

/// Lookup capability used by the existence check.
///
/// Implementations are read-only at request time.
pub trait PersonDirectory: Send + Sync {
    /// Check whether `id` belongs to a known person
    fn contains(&self, id: i64) -> bool;

    /// Fail with a not-found error when `id` is unknown
    fn ensure_exists(&self, id: i64) -> DomainResult<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(DomainError::not_found(PERSON_NOT_FOUND_MESSAGE))
        }
    }
}

/// Directory backed by a fixed set of ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPersonDirectory {
    ids: BTreeSet<i64>,
}

impl FixedPersonDirectory {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.ids.iter().copied()
    }
}

impl Default for FixedPersonDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_KNOWN_PERSON_IDS.iter().copied())
    }
}

impl PersonDirectory for FixedPersonDirectory {
    fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directory_knows_one_to_five() {
        let directory = FixedPersonDirectory::default();
        assert_eq!(directory.ids().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert!(directory.contains(3));
        assert!(!directory.contains(0));
        assert!(!directory.contains(6));
        assert!(!directory.contains(99));
    }

    #[test]
    fn test_ensure_exists_reports_not_found() {
        let directory = FixedPersonDirectory::new([7, 8]);
        assert!(directory.ensure_exists(7).is_ok());

        match directory.ensure_exists(3) {
            Err(DomainError::NotFound(msg)) => assert_eq!(msg, "¡This person doesn't exist!"),
            other => panic!("expected not found, got {:?}", other),
        }
    }
}
