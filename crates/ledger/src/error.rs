//! The module contains the errors the ledger engine can return.
//!
//! Every variant is a rejection of a proposed operation, recoverable by the
//! caller correcting its input and resubmitting. The engine has no fatal
//! error class: it never panics on bad input, never logs, and never retries.

use thiserror::Error;

use crate::MoneyCents;

/// Ledger engine rejections.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("total amount must be > 0")]
    NonPositiveAmount,
    #[error("unknown split rule: {0}")]
    UnknownSplitRule(String),
    #[error("an expense needs at least one split")]
    NoSplits,
    #[error("participant \"{0}\" appears more than once in the splits")]
    DuplicateParticipant(String),
    #[error("split amount for \"{0}\" is negative")]
    NegativeSplitAmount(String),
    #[error("split amounts sum to {actual}, expected {expected}")]
    SplitSumMismatch {
        expected: MoneyCents,
        actual: MoneyCents,
    },
    #[error("split percentages sum to {actual}, expected 100")]
    PercentageSumMismatch { actual: f64 },
    #[error("share for \"{0}\" is missing the input its rule requires")]
    MissingShare(String),
    #[error("settlement amount must be > 0")]
    NonPositiveSettlement,
    #[error("settlement of {requested} exceeds the open balance of {available}")]
    ExceedsBalance {
        requested: MoneyCents,
        available: MoneyCents,
    },
}
