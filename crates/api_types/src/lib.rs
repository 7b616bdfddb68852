//! Wire types for the ledger engine boundary.
//!
//! The engine itself only speaks plain in-memory structs; these DTOs pin the
//! JSON shapes a transport layer exchanges with clients. Amounts travel as
//! integer minor units (cents) to keep the wire format exact.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod expense {
    use super::*;

    /// One participant's raw share input for a new expense.
    ///
    /// `raw_amount_minor` is read under the `"unequal"` rule,
    /// `raw_percentage` under `"percentage"`; both are ignored under
    /// `"equal"`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ShareNew {
        pub id: String,
        pub raw_amount_minor: Option<i64>,
        pub raw_percentage: Option<f64>,
    }

    /// Request body for recording a new expense.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub description: String,
        pub total_amount_minor: i64,
        pub payer: String,
        /// Split rule tag: `"equal"`, `"percentage"` or `"unequal"`.
        pub rule: String,
        pub participants: Vec<ShareNew>,
        /// Defaults server-side to `"Uncategorized"` when absent.
        pub category: Option<String>,
    }

    /// One split of a recorded expense.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SplitView {
        pub participant: String,
        pub amount_minor: i64,
        /// Only meaningful for `"percentage"` expenses.
        pub percentage: Option<f64>,
    }

    /// A recorded expense as returned to clients.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: Uuid,
        pub description: String,
        pub total_amount_minor: i64,
        pub payer: String,
        pub rule: String,
        pub splits: Vec<SplitView>,
        pub creator: String,
        /// `"Settlement - <method>"` categories mark settlement payments.
        pub category: String,
        /// RFC3339 timestamp, including timezone offset.
        pub created_at: DateTime<FixedOffset>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseCreated {
        pub id: Uuid,
    }
}

pub mod balance {
    use super::*;

    /// Direction of a net balance, seen from the requesting user.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum DirectionTag {
        OwesYou,
        YouOwe,
    }

    /// Net position against one counterparty.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BalanceView {
        pub counterparty: String,
        pub amount_minor: i64,
        pub direction: DirectionTag,
    }

    /// Response body for a balance query, one entry per counterparty with a
    /// non-negligible net.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BalancesResponse {
        pub balances: Vec<BalanceView>,
    }
}

pub mod settlement {
    use super::*;

    /// Request body for settling (part of) a balance.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SettlementNew {
        pub counterparty: String,
        pub amount_minor: i64,
        /// Free-form payment channel label, e.g. `"Cash"`.
        pub method: String,
    }
}
