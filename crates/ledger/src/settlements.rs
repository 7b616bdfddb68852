//! Settlement planning: turns "pay down this balance" into a validated
//! expense record.
//!
//! A settlement is an ordinary [`Expense`] with an unequal split and a
//! `"Settlement - <method>"` category, so persistence and netting treat it
//! like any other record: the payer hands over money, the receiving side
//! carries the full amount, and the pairing's net shrinks (or zeroes) on
//! the next aggregation pass.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    Balance, BalanceDirection, LedgerError, MoneyCents, ParticipantId, ResultLedger,
    expenses::{Expense, ExpenseSplit, SETTLEMENT_PREFIX, SplitRule},
    validate::validate,
};

/// Plans a settlement of `amount` against the viewer's current balance with
/// `counterparty`.
///
/// The caller must recompute `current` as close as possible to persistence;
/// the planner only checks the amount against the balance it is handed.
/// `method` is a free-form payment-channel label ("Cash", "Bank transfer").
///
/// Sign convention: whoever the balance says is in debt becomes the payer.
/// The payer's split is zero and the other side's split carries the full
/// amount, so the record nets the pairing down by exactly `amount`.
pub fn plan_settlement(
    viewer: &ParticipantId,
    counterparty: &ParticipantId,
    current: &Balance,
    amount: MoneyCents,
    method: &str,
    created_at: DateTime<Utc>,
) -> ResultLedger<Expense> {
    if !amount.is_positive() {
        return Err(LedgerError::NonPositiveSettlement);
    }
    if amount > current.amount {
        return Err(LedgerError::ExceedsBalance {
            requested: amount,
            available: current.amount,
        });
    }

    let (payer, viewer_share, counterparty_share) = match current.direction {
        // The viewer owes: the viewer pays, the counterparty's side carries
        // the amount.
        BalanceDirection::YouOwe => (viewer.clone(), MoneyCents::ZERO, amount),
        // The counterparty owes: roles flip.
        BalanceDirection::OwesYou => (counterparty.clone(), amount, MoneyCents::ZERO),
    };

    let category = format!("{SETTLEMENT_PREFIX} - {method}");
    let settlement = Expense {
        id: Uuid::new_v4(),
        description: category.clone(),
        total_amount: amount,
        payer,
        rule: SplitRule::Unequal,
        splits: vec![
            ExpenseSplit {
                participant: viewer.clone(),
                amount: viewer_share,
                percentage: None,
            },
            ExpenseSplit {
                participant: counterparty.clone(),
                amount: counterparty_share,
                percentage: None,
            },
        ],
        creator: viewer.clone(),
        category,
        created_at,
    };

    // By construction the zero/full split pair sums to the settled amount,
    // so this cannot fail; running it anyway keeps the "every accepted
    // expense passed the validator" guarantee airtight.
    validate(&settlement)?;
    Ok(settlement)
}
