//! Invariant checks every expense must pass before it is accepted.
//!
//! The same function runs as the client-side pre-check and as the
//! authoritative gate immediately before persistence; only the latter
//! rejection is final. Checks run in a fixed order and stop at the first
//! failure.

use std::collections::HashSet;

use crate::{LedgerError, MoneyCents, ParticipantId, ResultLedger, expenses::Expense, SplitRule};

/// Baseline allowed gap between the split sum and the expense total, and
/// the noise floor below which a net balance counts as settled.
///
/// The sum check scales this with the number of splits (see
/// [`amount_tolerance`]): per-head half-up rounding under the equal and
/// percentage rules can legitimately drift half a cent per participant, and
/// an exact-match check would reject the common case.
pub const AMOUNT_EPSILON: MoneyCents = MoneyCents::new(1);

/// Allowed gap between the split sum and the total for `heads` splits:
/// half a cent of rounding drift per participant, never less than
/// [`AMOUNT_EPSILON`].
#[must_use]
pub fn amount_tolerance(heads: usize) -> MoneyCents {
    MoneyCents::new(heads.div_ceil(2) as i64).max(AMOUNT_EPSILON)
}

/// Maximum allowed gap between the percentage sum and 100.
///
/// One hundredth per rounding direction: entering thirds as 33.34 each
/// (sum 100.02) must not bounce.
pub const PERCENT_EPSILON: f64 = 0.02;

/// Checks the arithmetic invariants of an assembled expense.
///
/// Order, short-circuiting on the first failure:
/// 1. non-blank description
/// 2. positive total
/// 3. at least one split
/// 4. no participant listed twice, no negative split amount
/// 5. under the percentage rule, percentages sum to 100 within
///    [`PERCENT_EPSILON`]
/// 6. split amounts sum to the total within the per-head
///    [`amount_tolerance`]
///
/// The unknown-rule rejection of the creation path happens where the wire
/// tag is parsed ([`SplitRule::try_from`]); a typed [`Expense`] always
/// carries a known rule.
pub fn validate(expense: &Expense) -> ResultLedger<()> {
    if expense.description.trim().is_empty() {
        return Err(LedgerError::EmptyDescription);
    }
    if !expense.total_amount.is_positive() {
        return Err(LedgerError::NonPositiveAmount);
    }
    if expense.splits.is_empty() {
        return Err(LedgerError::NoSplits);
    }

    let mut seen: HashSet<&ParticipantId> = HashSet::with_capacity(expense.splits.len());
    for split in &expense.splits {
        if !seen.insert(&split.participant) {
            return Err(LedgerError::DuplicateParticipant(
                split.participant.to_string(),
            ));
        }
        if split.amount < MoneyCents::ZERO {
            return Err(LedgerError::NegativeSplitAmount(
                split.participant.to_string(),
            ));
        }
    }

    // Under the percentage rule the percentages are the user's actual input
    // and the amounts are derived from them, so a bad percentage sum is
    // reported before the amount mismatch it causes.
    if expense.rule == SplitRule::Percentage {
        let percent_sum: f64 = expense
            .splits
            .iter()
            .map(|s| s.percentage.unwrap_or(0.0))
            .sum();
        // round2 before comparing so float slop on the sum (100.02 stored as
        // 100.020000...01) cannot push a boundary case over the tolerance.
        if crate::money::round2((percent_sum - 100.0).abs()) > PERCENT_EPSILON {
            return Err(LedgerError::PercentageSumMismatch {
                actual: percent_sum,
            });
        }
    }

    let amount_sum: MoneyCents = expense.splits.iter().map(|s| s.amount).sum();
    if (amount_sum - expense.total_amount).abs() > amount_tolerance(expense.splits.len()) {
        return Err(LedgerError::SplitSumMismatch {
            expected: expense.total_amount,
            actual: amount_sum,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use crate::expenses::ExpenseSplit;

    use super::*;

    fn expense(rule: SplitRule, splits: Vec<(&str, i64, Option<f64>)>) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            description: "Dinner".to_string(),
            total_amount: MoneyCents::new(100_00),
            payer: "alice".into(),
            rule,
            splits: splits
                .into_iter()
                .map(|(who, cents, percentage)| ExpenseSplit {
                    participant: who.into(),
                    amount: MoneyCents::new(cents),
                    percentage,
                })
                .collect(),
            creator: "alice".into(),
            category: "Food".to_string(),
            created_at: Utc.timestamp_opt(0, 0).unwrap(),
        }
    }

    #[test]
    fn accepts_exact_equal_split() {
        let expense = expense(
            SplitRule::Equal,
            vec![("alice", 50_00, Some(50.0)), ("bob", 50_00, Some(50.0))],
        );
        assert_eq!(validate(&expense), Ok(()));
    }

    #[test]
    fn accepts_one_cent_rounding_residual() {
        // 100.00 split three ways: 33.33 * 3 = 99.99.
        let expense = expense(
            SplitRule::Equal,
            vec![
                ("a", 33_33, Some(33.33)),
                ("b", 33_33, Some(33.33)),
                ("c", 33_33, Some(33.33)),
            ],
        );
        assert_eq!(validate(&expense), Ok(()));
    }

    #[test]
    fn rejects_blank_description() {
        let mut expense = expense(SplitRule::Equal, vec![("a", 100_00, None)]);
        expense.description = " \t ".to_string();
        assert_eq!(validate(&expense), Err(LedgerError::EmptyDescription));
    }

    #[test]
    fn rejects_non_positive_total() {
        let mut expense = expense(SplitRule::Equal, vec![("a", 100_00, None)]);
        expense.total_amount = MoneyCents::ZERO;
        assert_eq!(validate(&expense), Err(LedgerError::NonPositiveAmount));
    }

    #[test]
    fn rejects_empty_splits() {
        let expense = expense(SplitRule::Equal, vec![]);
        assert_eq!(validate(&expense), Err(LedgerError::NoSplits));
    }

    #[test]
    fn tolerance_scales_with_the_number_of_splits() {
        // 100.00 equal among 6: 16.67 * 6 = 100.02, two cents of per-head
        // rounding drift, inside the 3-cent tolerance for 6 heads.
        let sixth = 16_67;
        let drifted = expense(
            SplitRule::Equal,
            vec![
                ("a", sixth, None),
                ("b", sixth, None),
                ("c", sixth, None),
                ("d", sixth, None),
                ("e", sixth, None),
                ("f", sixth, None),
            ],
        );
        assert_eq!(validate(&drifted), Ok(()));
        assert_eq!(amount_tolerance(6), MoneyCents::new(3));

        // A gap beyond the per-head bound is still a real mismatch.
        let off = expense(
            SplitRule::Unequal,
            vec![
                ("a", 16_67, None),
                ("b", 16_67, None),
                ("c", 16_67, None),
                ("d", 16_67, None),
                ("e", 16_67, None),
                ("f", 16_71, None),
            ],
        );
        assert_eq!(
            validate(&off),
            Err(LedgerError::SplitSumMismatch {
                expected: MoneyCents::new(100_00),
                actual: MoneyCents::new(100_06),
            })
        );
    }

    #[test]
    fn rejects_negative_split_amount() {
        let expense = expense(
            SplitRule::Unequal,
            vec![("alice", 150_00, None), ("bob", -50_00, None)],
        );
        assert_eq!(
            validate(&expense),
            Err(LedgerError::NegativeSplitAmount("bob".to_string()))
        );
    }

    #[test]
    fn rejects_duplicate_participant() {
        let expense = expense(
            SplitRule::Unequal,
            vec![("alice", 60_00, None), ("alice", 40_00, None)],
        );
        assert_eq!(
            validate(&expense),
            Err(LedgerError::DuplicateParticipant("alice".to_string()))
        );
    }

    #[test]
    fn rejects_split_sum_off_by_more_than_a_cent() {
        let expense = expense(
            SplitRule::Unequal,
            vec![("alice", 60_00, None), ("bob", 39_98, None)],
        );
        assert_eq!(
            validate(&expense),
            Err(LedgerError::SplitSumMismatch {
                expected: MoneyCents::new(100_00),
                actual: MoneyCents::new(99_98),
            })
        );
    }

    #[test]
    fn percentage_sum_tolerance() {
        // Exactly 100: accepted.
        let exact = expense(
            SplitRule::Percentage,
            vec![("a", 60_00, Some(60.0)), ("b", 40_00, Some(40.0))],
        );
        assert_eq!(validate(&exact), Ok(()));

        // 100.02 (thirds entered as 33.34 each): accepted.
        let high = expense(
            SplitRule::Percentage,
            vec![
                ("a", 33_33, Some(33.34)),
                ("b", 33_33, Some(33.34)),
                ("c", 33_34, Some(33.34)),
            ],
        );
        assert_eq!(validate(&high), Ok(()));

        // 60: rejected as a percentage mismatch, not as the amount
        // mismatch the bad percentages also cause downstream.
        let low = expense(
            SplitRule::Percentage,
            vec![("a", 30_00, Some(30.0)), ("b", 30_00, Some(30.0))],
        );
        assert!(matches!(
            validate(&low),
            Err(LedgerError::PercentageSumMismatch { .. })
        ));
    }

    #[test]
    fn percentage_rule_treats_missing_percentage_as_zero() {
        let expense = expense(
            SplitRule::Percentage,
            vec![("a", 100_00, Some(100.0)), ("b", 0, None)],
        );
        assert_eq!(validate(&expense), Ok(()));
    }

    #[test]
    fn non_percentage_rules_ignore_percentages() {
        let expense = expense(
            SplitRule::Unequal,
            vec![("a", 70_00, Some(12.0)), ("b", 30_00, None)],
        );
        assert_eq!(validate(&expense), Ok(()));
    }
}
