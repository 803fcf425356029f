//! Classification of storage constraint violations.

use sea_orm::{DbErr, SqlErr};

/// Constraint a rejected statement ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Violation {
    Unique,
    ForeignKey,
}

/// Identify the constraint behind a database error, if any.
pub(crate) fn violation(err: &DbErr) -> Option<Violation> {
    match err.sql_err()? {
        SqlErr::UniqueConstraintViolation(_) => Some(Violation::Unique),
        SqlErr::ForeignKeyConstraintViolation(_) => Some(Violation::ForeignKey),
        _ => None,
    }
}

/// True when the statement reached the database and was rejected there.
pub(crate) fn is_rejected_statement(err: &DbErr) -> bool {
    matches!(err, DbErr::Exec(_) | DbErr::Query(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_sql_errors_are_not_violations() {
        assert_eq!(violation(&DbErr::Custom("boom".to_string())), None);
        assert_eq!(violation(&DbErr::RecordNotFound("users".to_string())), None);
        assert!(!is_rejected_statement(&DbErr::Custom("boom".to_string())));
    }
}
