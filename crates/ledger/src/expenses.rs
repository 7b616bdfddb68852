//! Expense primitives.
//!
//! An `Expense` is one shared cost split among participants. Settlements are
//! expenses too, tagged through their category, so a single record type flows
//! through validation, storage and balance netting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    LedgerError, MoneyCents, ParticipantId, ResultLedger,
    splits::{ShareInput, compute_splits},
    validate::validate,
};

/// Category assigned when the caller does not provide one.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Category prefix marking an expense as a settlement payment.
pub const SETTLEMENT_PREFIX: &str = "Settlement";

/// How per-participant amounts are derived from an expense total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitRule {
    Equal,
    Percentage,
    Unequal,
}

impl SplitRule {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Percentage => "percentage",
            Self::Unequal => "unequal",
        }
    }
}

impl TryFrom<&str> for SplitRule {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "equal" => Ok(Self::Equal),
            "percentage" => Ok(Self::Percentage),
            "unequal" => Ok(Self::Unequal),
            other => Err(LedgerError::UnknownSplitRule(other.to_string())),
        }
    }
}

/// One participant's share of an expense.
///
/// `amount` is always populated, whatever the rule. `percentage` is only
/// meaningful under [`SplitRule::Percentage`]; for the other rules it carries
/// an informational value or nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSplit {
    pub participant: ParticipantId,
    pub amount: MoneyCents,
    pub percentage: Option<f64>,
}

/// A recorded shared cost.
///
/// Immutable once created: edits replace the whole record. The invariants
/// (split amounts sum to the total within one cent, percentages sum to 100
/// under the percentage rule, at least one split, positive total, no
/// duplicate participants) are enforced by [`create_expense`] and hold for
/// every record the engine hands out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub total_amount: MoneyCents,
    pub payer: ParticipantId,
    pub rule: SplitRule,
    pub splits: Vec<ExpenseSplit>,
    pub creator: ParticipantId,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Returns `true` if this expense records a settlement payment rather
    /// than a new shared cost.
    #[must_use]
    pub fn is_settlement(&self) -> bool {
        self.category.starts_with(SETTLEMENT_PREFIX)
    }

    /// Returns the split entry belonging to `participant`, if any.
    #[must_use]
    pub fn split_for(&self, participant: &ParticipantId) -> Option<&ExpenseSplit> {
        self.splits.iter().find(|s| &s.participant == participant)
    }
}

/// Input for composing a new expense.
///
/// `rule` is the wire tag (`"equal"`, `"percentage"`, `"unequal"`); parsing
/// it here keeps the rejection order of the validator observable from the
/// outside. `created_at` is supplied by the caller so composition stays a
/// pure function.
#[derive(Clone, Debug)]
pub struct NewExpense {
    pub description: String,
    pub total_amount: MoneyCents,
    pub payer: ParticipantId,
    pub rule: String,
    pub shares: Vec<ShareInput>,
    pub creator: ParticipantId,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Composes and validates a new expense.
///
/// Runs the same checks whether it is called as a client-side pre-check or
/// as the authoritative gate before persistence: description, total, rule
/// tag, then split computation, then the full invariant check on the
/// assembled record.
pub fn create_expense(input: NewExpense) -> ResultLedger<Expense> {
    let description = input.description.trim();
    if description.is_empty() {
        return Err(LedgerError::EmptyDescription);
    }
    if !input.total_amount.is_positive() {
        return Err(LedgerError::NonPositiveAmount);
    }
    let rule = SplitRule::try_from(input.rule.as_str())?;

    let splits = compute_splits(input.total_amount, rule, &input.shares)?;

    let expense = Expense {
        id: Uuid::new_v4(),
        description: description.to_string(),
        total_amount: input.total_amount,
        payer: input.payer,
        rule,
        splits,
        creator: input.creator,
        category: input
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        created_at: input.created_at,
    };

    validate(&expense)?;
    Ok(expense)
}
