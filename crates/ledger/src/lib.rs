//! Ledger engine for a shared-expense tracker.
//!
//! Users front shared costs, record them with a split rule, and ask who
//! owes whom. This crate owns the arithmetic core of that system:
//!
//! - [`compute_splits`] turns one total plus a rule into per-participant
//!   shares;
//! - [`validate`] gates every expense on the invariants that must hold
//!   before it is persisted;
//! - [`net_balances`] reduces an expense history to one signed net amount
//!   per counterparty;
//! - [`plan_settlement`] turns a pay-down request into a validated
//!   settlement record that the same netting pass later consumes.
//!
//! Everything is a pure, synchronous function over caller-supplied data.
//! Storage, transport and authentication live outside; the caller feeds the
//! engine the viewer's expense history and persists whatever records the
//! engine hands back. All rejections come back as typed [`LedgerError`]
//! values — the engine never logs, retries, or panics on bad input.

pub use balances::{Balance, BalanceDirection, balance_between, net_balances};
pub use error::LedgerError;
pub use expenses::{
    DEFAULT_CATEGORY, Expense, ExpenseSplit, NewExpense, SETTLEMENT_PREFIX, SplitRule,
    create_expense,
};
pub use money::{MoneyCents, round2};
pub use participants::ParticipantId;
pub use settlements::plan_settlement;
pub use splits::{ShareInput, compute_splits};
pub use validate::{AMOUNT_EPSILON, PERCENT_EPSILON, amount_tolerance, validate};

mod balances;
mod error;
mod expenses;
mod money;
mod participants;
mod settlements;
mod splits;
mod validate;

type ResultLedger<T> = Result<T, LedgerError>;
