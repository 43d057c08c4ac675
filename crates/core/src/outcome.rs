//! Tagged result of a ledger operation.
//!
//! Ledger operations "fail soft": nothing is propagated as `Err`. Instead each
//! operation logs what happened and returns an [`Outcome`] so callers (and
//! tests) can branch on it without parsing log output.

use crate::error::{LedgerError, LedgerWarning};

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    /// The operation applied.
    Ok(T),
    /// The operation fell back to a defined no-op (or empty state).
    Warning(LedgerWarning),
    /// The operation failed; the fallback was applied and the failure logged.
    Error(LedgerError),
}

impl<T> Outcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Outcome::Warning(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(v) => Some(v),
            _ => None,
        }
    }

    pub fn warning(&self) -> Option<&LedgerWarning> {
        match self {
            Outcome::Warning(w) => Some(w),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LedgerError> {
        match self {
            Outcome::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Ok(v) => Outcome::Ok(f(v)),
            Outcome::Warning(w) => Outcome::Warning(w),
            Outcome::Error(e) => Outcome::Error(e),
        }
    }
}

impl<T> From<LedgerWarning> for Outcome<T> {
    fn from(value: LedgerWarning) -> Self {
        Outcome::Warning(value)
    }
}

impl<T> From<LedgerError> for Outcome<T> {
    fn from(value: LedgerError) -> Self {
        Outcome::Error(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_the_tag() {
        let ok: Outcome<u8> = Outcome::Ok(3);
        assert!(ok.is_ok());
        assert_eq!(ok.clone().map(|n| n * 2), Outcome::Ok(6));
        assert_eq!(ok.ok(), Some(3));

        let warn: Outcome<u8> = LedgerWarning::EmptyItemName.into();
        assert!(warn.is_warning());
        assert_eq!(warn.warning(), Some(&LedgerWarning::EmptyItemName));
        assert!(warn.error().is_none());

        let err: Outcome<u8> = LedgerError::overflow("apple").into();
        assert!(err.is_error());
        assert_eq!(err.map(|n| n + 1).ok(), None);
    }
}
