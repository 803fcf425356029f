//! Pagination for list operations.

use serde::Deserialize;

use crate::error::{DomainError, DomainResult};

/// Raw pagination arguments as supplied by a caller.
///
/// `None` means "no limit" / "start from the beginning".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PageRequest {
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self { limit, offset }
    }

    /// Check bounds and convert into a [`Page`].
    pub fn validate(self) -> DomainResult<Page> {
        Ok(Page {
            limit: non_negative("limit", self.limit)?,
            offset: non_negative("offset", self.offset)?,
        })
    }
}

fn non_negative(field: &str, value: Option<i64>) -> DomainResult<Option<u64>> {
    match value {
        None => Ok(None),
        Some(v) => u64::try_from(v)
            .map(Some)
            .map_err(|_| DomainError::validation(format!("{} must not be negative", field))),
    }
}

/// Validated pagination window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_mean_unbounded() {
        assert_eq!(PageRequest::default().validate().unwrap(), Page::default());
    }

    #[test]
    fn zero_is_accepted() {
        let page = PageRequest::new(Some(1), Some(0)).validate().unwrap();
        assert_eq!(page.limit, Some(1));
        assert_eq!(page.offset, Some(0));
    }

    #[test]
    fn negative_values_are_rejected() {
        let err = PageRequest::new(Some(-1), Some(0)).validate().unwrap_err();
        assert_eq!(err, DomainError::validation("limit must not be negative"));

        let err = PageRequest::new(None, Some(-5)).validate().unwrap_err();
        assert_eq!(err, DomainError::validation("offset must not be negative"));
    }
}
