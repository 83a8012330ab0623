use crate::{
    error::ValidationError,
    model::{Balances, Money, Participant, ParticipantId, SharedExpense, SplitPolicy},
};
use fxhash::FxHashSet;

/// Turns a group's shared expenses into per-participant net balances.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Credits each payer with the full amount and debits every beneficiary
    /// its share.
    ///
    /// Every participant appears in the result, including those with no
    /// activity. The result always sums to zero. On error nothing is
    /// returned; there are no partial balances.
    pub fn calculate(
        &self,
        participants: &[Participant],
        expenses: &[SharedExpense],
    ) -> Result<Balances, ValidationError> {
        let known = validate_participants(participants)?;
        for expense in expenses {
            validate_expense(expense, &known).inspect_err(|err| {
                tracing::warn!(expense = %expense.id, error = %err, "Rejected shared expense");
            })?;
        }

        let mut balances: Balances = participants
            .iter()
            .map(|participant| (participant.id.clone(), Money::ZERO))
            .collect();

        for expense in expenses {
            let overflow = || ValidationError::AmountOverflow {
                expense: expense.id.clone(),
            };

            let payer = balances.entry(expense.payer.clone()).or_default();
            *payer = payer.checked_add(expense.amount).ok_or_else(overflow)?;

            for (beneficiary, share) in split_shares(expense) {
                let balance = balances.entry(beneficiary.clone()).or_default();
                // A debt of `i64::MIN` could never be paid as a positive transfer.
                *balance = balance
                    .checked_sub(share)
                    .filter(|next| next.checked_abs().is_some())
                    .ok_or_else(overflow)?;
            }
        }

        debug_assert!(balances.values().sum::<Money>().is_zero());
        tracing::debug!(
            participant_count = participants.len(),
            expense_count = expenses.len(),
            "Computed group balances"
        );

        Ok(balances)
    }
}

/// Splits an expense among its beneficiaries according to its policy.
///
/// Shares are returned in ascending id order and always add up to the
/// expense amount.
pub fn split_shares(expense: &SharedExpense) -> Vec<(&ParticipantId, Money)> {
    match expense.split {
        SplitPolicy::Equal => equal_shares(expense.amount, &expense.beneficiaries),
    }
}

fn equal_shares(amount: Money, beneficiaries: &[ParticipantId]) -> Vec<(&ParticipantId, Money)> {
    if beneficiaries.is_empty() {
        return Vec::new();
    }

    let mut ordered: Vec<&ParticipantId> = beneficiaries.iter().collect();
    ordered.sort_unstable();

    let count = ordered.len() as i64;
    let base = amount.amount() / count;
    let remainder = (amount.amount() % count).unsigned_abs() as usize;

    ordered
        .into_iter()
        .enumerate()
        .map(|(idx, beneficiary)| {
            let share = if idx < remainder { base + 1 } else { base };
            (beneficiary, Money::from_i64(share))
        })
        .collect()
}

fn validate_participants(
    participants: &[Participant],
) -> Result<FxHashSet<&ParticipantId>, ValidationError> {
    if participants.is_empty() {
        return Err(ValidationError::EmptyParticipants);
    }

    let mut known = FxHashSet::default();
    for participant in participants {
        if !known.insert(&participant.id) {
            return Err(ValidationError::DuplicateParticipant(
                participant.id.clone(),
            ));
        }
    }
    Ok(known)
}

fn validate_expense(
    expense: &SharedExpense,
    known: &FxHashSet<&ParticipantId>,
) -> Result<(), ValidationError> {
    if !expense.amount.is_positive() {
        return Err(ValidationError::NonPositiveAmount {
            expense: expense.id.clone(),
            amount: expense.amount,
        });
    }
    if expense.beneficiaries.is_empty() {
        return Err(ValidationError::EmptyBeneficiaries {
            expense: expense.id.clone(),
        });
    }

    let unknown = |participant: &ParticipantId| ValidationError::UnknownParticipant {
        expense: expense.id.clone(),
        participant: participant.clone(),
    };

    if !known.contains(&expense.payer) {
        return Err(unknown(&expense.payer));
    }

    let mut seen = FxHashSet::default();
    for beneficiary in &expense.beneficiaries {
        if !known.contains(beneficiary) {
            return Err(unknown(beneficiary));
        }
        if !seen.insert(beneficiary) {
            return Err(ValidationError::DuplicateBeneficiary {
                expense: expense.id.clone(),
                participant: beneficiary.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn calculator() -> BalanceCalculator {
        BalanceCalculator
    }

    fn participants(ids: &[&str]) -> Vec<Participant> {
        ids.iter().map(|id| Participant::new(*id, *id)).collect()
    }

    fn balances(entries: &[(&str, i64)]) -> Balances {
        entries
            .iter()
            .map(|(id, amount)| (ParticipantId::from(*id), Money::from_i64(*amount)))
            .collect()
    }

    #[rstest]
    #[case::remainder_to_lowest_id(
        SharedExpense::equal("e1", Money::from_i64(100), "a", ["a", "b", "c"]),
        &[("a", 66), ("b", -33), ("c", -33)]
    )]
    #[case::remainder_follows_sorted_order_not_listing_order(
        SharedExpense::equal("e1", Money::from_i64(100), "c", ["c", "b", "a"]),
        &[("a", -34), ("b", -33), ("c", 67)]
    )]
    #[case::payer_not_beneficiary(
        SharedExpense::equal("e1", Money::from_i64(90), "a", ["b", "c"]),
        &[("a", 90), ("b", -45), ("c", -45)]
    )]
    #[case::two_units_of_remainder(
        SharedExpense::equal("e1", Money::from_i64(11), "b", ["a", "b", "c"]),
        &[("a", -4), ("b", 7), ("c", -3)]
    )]
    #[case::self_only(
        SharedExpense::equal("e1", Money::from_i64(42), "a", ["a"]),
        &[("a", 0), ("b", 0), ("c", 0)]
    )]
    fn balance_calculator_cases(
        calculator: BalanceCalculator,
        #[case] expense: SharedExpense,
        #[case] expected: &[(&str, i64)],
    ) {
        let result = calculator
            .calculate(&participants(&["a", "b", "c"]), &[expense])
            .expect("balances should compute");

        assert_eq!(result, balances(expected));
    }

    #[test]
    fn equal_split_shares_are_deterministic() {
        let expense = SharedExpense::equal("e1", Money::from_i64(100), "a", ["c", "a", "b"]);
        let shares: Vec<(&str, i64)> = split_shares(&expense)
            .into_iter()
            .map(|(id, share)| (id.as_str(), share.amount()))
            .collect();

        assert_eq!(shares, vec![("a", 34), ("b", 33), ("c", 33)]);
    }

    #[test]
    fn idle_participants_are_reported_with_zero() {
        let result = BalanceCalculator
            .calculate(&participants(&["a", "b", "idle"]), &[])
            .expect("balances should compute");

        assert_eq!(result, balances(&[("a", 0), ("b", 0), ("idle", 0)]));
    }

    #[rstest]
    #[case::unknown_beneficiary(
        SharedExpense::equal("e1", Money::from_i64(10), "a", ["a", "z"]),
        ValidationError::UnknownParticipant {
            expense: "e1".to_string(),
            participant: ParticipantId::from("z"),
        }
    )]
    #[case::unknown_payer(
        SharedExpense::equal("e1", Money::from_i64(10), "z", ["a"]),
        ValidationError::UnknownParticipant {
            expense: "e1".to_string(),
            participant: ParticipantId::from("z"),
        }
    )]
    #[case::zero_amount(
        SharedExpense::equal("e1", Money::ZERO, "a", ["a"]),
        ValidationError::NonPositiveAmount {
            expense: "e1".to_string(),
            amount: Money::ZERO,
        }
    )]
    #[case::negative_amount(
        SharedExpense::equal("e1", Money::from_i64(-5), "a", ["a"]),
        ValidationError::NonPositiveAmount {
            expense: "e1".to_string(),
            amount: Money::from_i64(-5),
        }
    )]
    #[case::empty_beneficiaries(
        SharedExpense::equal("e1", Money::from_i64(10), "a", Vec::<&str>::new()),
        ValidationError::EmptyBeneficiaries { expense: "e1".to_string() }
    )]
    #[case::duplicate_beneficiary(
        SharedExpense::equal("e1", Money::from_i64(10), "a", ["b", "b"]),
        ValidationError::DuplicateBeneficiary {
            expense: "e1".to_string(),
            participant: ParticipantId::from("b"),
        }
    )]
    fn rejects_invalid_expenses(
        calculator: BalanceCalculator,
        #[case] expense: SharedExpense,
        #[case] expected: ValidationError,
    ) {
        let result = calculator.calculate(&participants(&["a", "b"]), &[expense]);
        assert_eq!(result, Err(expected));
    }

    #[rstest]
    fn rejects_empty_participants(calculator: BalanceCalculator) {
        assert_eq!(
            calculator.calculate(&[], &[]),
            Err(ValidationError::EmptyParticipants)
        );
    }

    #[rstest]
    fn rejects_duplicate_participants(calculator: BalanceCalculator) {
        assert_eq!(
            calculator.calculate(&participants(&["a", "b", "a"]), &[]),
            Err(ValidationError::DuplicateParticipant(ParticipantId::from(
                "a"
            )))
        );
    }

    #[rstest]
    fn one_bad_expense_discards_everything(calculator: BalanceCalculator) {
        let expenses = [
            SharedExpense::equal("ok", Money::from_i64(10), "a", ["a", "b"]),
            SharedExpense::equal("bad", Money::from_i64(10), "a", ["z"]),
        ];

        assert!(matches!(
            calculator.calculate(&participants(&["a", "b"]), &expenses),
            Err(ValidationError::UnknownParticipant { expense, .. }) if expense == "bad"
        ));
    }

    #[rstest]
    fn reports_overflow_instead_of_wrapping(calculator: BalanceCalculator) {
        let expenses = [
            SharedExpense::equal("big1", Money::from_i64(i64::MAX), "a", ["b"]),
            SharedExpense::equal("big2", Money::from_i64(i64::MAX), "a", ["b"]),
        ];

        assert_eq!(
            calculator.calculate(&participants(&["a", "b"]), &expenses),
            Err(ValidationError::AmountOverflow {
                expense: "big2".to_string()
            })
        );
    }

    #[rstest]
    fn rejects_debt_without_positive_counterpart(calculator: BalanceCalculator) {
        let expenses = [
            SharedExpense::equal("big", Money::from_i64(i64::MAX), "a", ["b"]),
            SharedExpense::equal("small", Money::from_i64(1), "c", ["b"]),
        ];

        let result = calculator.calculate(&participants(&["a", "b", "c"]), &expenses);

        assert_eq!(
            result,
            Err(ValidationError::AmountOverflow {
                expense: "small".to_string()
            })
        );
        assert_eq!(
            crate::services::settle_group(&participants(&["a", "b", "c"]), &expenses).map(|_| ()),
            result.map(|_| ())
        );
    }
}
