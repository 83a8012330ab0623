use crate::{
    error::ValidationError,
    model::{Money, Participant, ParticipantId, SharedExpense},
    services::balance_calculator::split_shares,
};
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTotal {
    /// `None` collects expenses without a category.
    pub category: Option<String>,
    pub total: Money,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantTotals {
    pub id: ParticipantId,
    pub paid: Money,
    pub share: Money,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetStatus {
    pub budget: Money,
    pub remaining: Money,
    pub percent_used: i64,
}

/// Spending overview of a trip or household.
///
/// Expects expenses already accepted by the balance calculator; amounts are
/// summed without re-validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripSummary {
    pub total_spent: Money,
    pub categories: Vec<CategoryTotal>,
    pub participants: Vec<ParticipantTotals>,
    pub budget: Option<BudgetStatus>,
}

impl TripSummary {
    pub fn from_expenses(
        participants: &[Participant],
        expenses: &[SharedExpense],
        budget: Option<Money>,
    ) -> Result<Self, ValidationError> {
        let mut categories: IndexMap<Option<&str>, Money> = IndexMap::new();
        let mut totals: IndexMap<&ParticipantId, (Money, Money)> = participants
            .iter()
            .map(|participant| (&participant.id, (Money::ZERO, Money::ZERO)))
            .collect();
        let mut total_spent = Money::ZERO;

        for expense in expenses {
            let overflow = || ValidationError::AmountOverflow {
                expense: expense.id.clone(),
            };
            total_spent = total_spent
                .checked_add(expense.amount)
                .ok_or_else(overflow)?;
            *categories
                .entry(expense.category.as_deref())
                .or_default() += expense.amount;

            let (paid, _) = totals.entry(&expense.payer).or_default();
            *paid += expense.amount;
            for (beneficiary, share) in split_shares(expense) {
                let (_, owed) = totals.entry(beneficiary).or_default();
                *owed += share;
            }
        }

        let budget = budget.map(|budget| budget_status(budget, total_spent)).transpose()?;

        Ok(Self {
            total_spent,
            categories: categories
                .into_iter()
                .map(|(category, total)| CategoryTotal {
                    category: category.map(str::to_owned),
                    total,
                })
                .collect(),
            participants: totals
                .into_iter()
                .map(|(id, (paid, share))| ParticipantTotals {
                    id: id.clone(),
                    paid,
                    share,
                })
                .collect(),
            budget,
        })
    }
}

fn budget_status(budget: Money, spent: Money) -> Result<BudgetStatus, ValidationError> {
    if !budget.is_positive() {
        return Err(ValidationError::NonPositiveBudget(budget));
    }
    let percent_used = i128::from(spent.amount()) * 100 / i128::from(budget.amount());
    Ok(BudgetStatus {
        budget,
        remaining: budget - spent,
        percent_used: i64::try_from(percent_used).unwrap_or(i64::MAX),
    })
}
