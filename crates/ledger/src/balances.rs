//! Balance netting: reduces an expense history to one signed amount per
//! counterparty.
//!
//! Balances are derived values with no identity of their own; every query
//! recomputes them from the expense records the caller supplies. Settlement
//! expenses flow through the same reduction, which is what makes a full
//! settlement zero a pairing out on the next pass.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{MoneyCents, ParticipantId, expenses::Expense, validate::AMOUNT_EPSILON};

/// Which way a net balance points, seen from the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceDirection {
    /// The counterparty owes the viewer.
    OwesYou,
    /// The viewer owes the counterparty.
    YouOwe,
}

/// Net position against one counterparty. `amount` is always positive; the
/// sign lives in `direction`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub counterparty: ParticipantId,
    pub amount: MoneyCents,
    pub direction: BalanceDirection,
}

impl Balance {
    /// Reconstructs the signed net value (positive = owed to the viewer).
    #[must_use]
    pub fn signed(&self) -> MoneyCents {
        match self.direction {
            BalanceDirection::OwesYou => self.amount,
            BalanceDirection::YouOwe => -self.amount,
        }
    }
}

/// Nets the viewer's expense history down to one balance per counterparty.
///
/// Accumulation is exact (integer cents), so the result cannot depend on
/// the order expenses arrive in; the output is sorted by counterparty id,
/// making repeated runs over the same history bit-identical.
///
/// Per qualifying expense:
/// - viewer paid: every other participant owes the viewer their split;
/// - someone else paid and the viewer has a split: the viewer owes the
///   payer that split.
/// A self-pay (viewer is payer and sole participant, or appears in its own
/// splits) nets to zero and is never double-counted. Pairings whose net
/// ends within one cent of zero are treated as settled and dropped.
pub fn net_balances(viewer: &ParticipantId, expenses: &[Expense]) -> Vec<Balance> {
    let mut net: HashMap<&ParticipantId, MoneyCents> = HashMap::new();

    for expense in expenses {
        if &expense.payer == viewer {
            for split in &expense.splits {
                if &split.participant != viewer {
                    *net.entry(&split.participant).or_default() += split.amount;
                }
            }
        } else if let Some(own) = expense.split_for(viewer) {
            *net.entry(&expense.payer).or_default() -= own.amount;
        }
    }

    let mut balances: Vec<Balance> = net
        .into_iter()
        .filter(|(_, value)| value.abs() > AMOUNT_EPSILON)
        .map(|(counterparty, value)| Balance {
            counterparty: counterparty.clone(),
            amount: value.abs(),
            direction: if value.is_positive() {
                BalanceDirection::OwesYou
            } else {
                BalanceDirection::YouOwe
            },
        })
        .collect();

    balances.sort_by(|a, b| a.counterparty.cmp(&b.counterparty));
    balances
}

/// The viewer's net balance against a single counterparty, if any remains
/// above the settled-noise floor.
#[must_use]
pub fn balance_between(
    viewer: &ParticipantId,
    counterparty: &ParticipantId,
    expenses: &[Expense],
) -> Option<Balance> {
    net_balances(viewer, expenses)
        .into_iter()
        .find(|balance| &balance.counterparty == counterparty)
}
