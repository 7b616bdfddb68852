//! Split calculation: turns one total and a split rule into per-participant
//! shares.

use serde::{Deserialize, Serialize};

use crate::{
    LedgerError, MoneyCents, ParticipantId, ResultLedger,
    expenses::{ExpenseSplit, SplitRule},
    money::round2,
};

/// One participant's raw input to the split calculation.
///
/// Which field matters depends on the rule: `raw_amount` under
/// [`SplitRule::Unequal`], `raw_percentage` under [`SplitRule::Percentage`],
/// neither under [`SplitRule::Equal`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShareInput {
    pub participant: ParticipantId,
    pub raw_amount: Option<MoneyCents>,
    pub raw_percentage: Option<f64>,
}

impl ShareInput {
    /// A share with no raw input, as used under the equal rule.
    #[must_use]
    pub fn bare(participant: impl Into<ParticipantId>) -> Self {
        Self {
            participant: participant.into(),
            raw_amount: None,
            raw_percentage: None,
        }
    }

    /// A share carrying an explicit amount, for the unequal rule.
    #[must_use]
    pub fn amount(participant: impl Into<ParticipantId>, amount: MoneyCents) -> Self {
        Self {
            participant: participant.into(),
            raw_amount: Some(amount),
            raw_percentage: None,
        }
    }

    /// A share carrying a percentage, for the percentage rule.
    #[must_use]
    pub fn percentage(participant: impl Into<ParticipantId>, percentage: f64) -> Self {
        Self {
            participant: participant.into(),
            raw_amount: None,
            raw_percentage: Some(percentage),
        }
    }
}

/// Computes each participant's share of `total` under `rule`.
///
/// Pure and deterministic; preserves the input order. The result still has
/// to pass [`crate::validate::validate`] as part of an assembled expense —
/// the calculator itself does not re-check sums, it only derives them.
///
/// - `Equal`: every participant gets `total / n` rounded half-up to the
///   cent, with the matching `100 / n` percentage annotation.
/// - `Percentage`: each amount is the given percentage of the total, the
///   percentage itself passes through unrounded.
/// - `Unequal`: amounts pass through verbatim; the percentage annotation is
///   derived and never validated against 100.
pub fn compute_splits(
    total: MoneyCents,
    rule: SplitRule,
    shares: &[ShareInput],
) -> ResultLedger<Vec<ExpenseSplit>> {
    if !total.is_positive() {
        return Err(LedgerError::NonPositiveAmount);
    }
    if shares.is_empty() {
        return Err(LedgerError::NoSplits);
    }

    let splits = match rule {
        SplitRule::Equal => {
            let heads = shares.len() as u32;
            let amount = total.equal_share(heads);
            let percentage = round2(100.0 / f64::from(heads));
            shares
                .iter()
                .map(|share| ExpenseSplit {
                    participant: share.participant.clone(),
                    amount,
                    percentage: Some(percentage),
                })
                .collect()
        }
        SplitRule::Percentage => shares
            .iter()
            .map(|share| {
                let percentage = share
                    .raw_percentage
                    .ok_or_else(|| LedgerError::MissingShare(share.participant.to_string()))?;
                Ok(ExpenseSplit {
                    participant: share.participant.clone(),
                    amount: total.percent_share(percentage),
                    percentage: Some(percentage),
                })
            })
            .collect::<ResultLedger<Vec<_>>>()?,
        SplitRule::Unequal => shares
            .iter()
            .map(|share| {
                let amount = share
                    .raw_amount
                    .ok_or_else(|| LedgerError::MissingShare(share.participant.to_string()))?;
                Ok(ExpenseSplit {
                    participant: share.participant.clone(),
                    amount,
                    percentage: Some(amount.percent_of(total)),
                })
            })
            .collect::<ResultLedger<Vec<_>>>()?,
    };

    Ok(splits)
}
