pub mod balance_calculator;
pub mod currency;
pub mod settle_group_policy;
pub mod settlement_resolver;
pub mod trip_summary;

pub use balance_calculator::{BalanceCalculator, split_shares};
pub use currency::CurrencyContext;
pub use settle_group_policy::SettleGroupPolicy;
pub use settlement_resolver::SettlementResolver;
pub use trip_summary::{BudgetStatus, CategoryTotal, ParticipantTotals, TripSummary};

use crate::{
    error::ValidationError,
    model::{Balances, Participant, Settlement, SharedExpense, Transfer},
};

pub fn compute_balances(
    participants: &[Participant],
    expenses: &[SharedExpense],
) -> Result<Balances, ValidationError> {
    BalanceCalculator.calculate(participants, expenses)
}

pub fn resolve_settlements(balances: &Balances) -> Result<Vec<Transfer>, ValidationError> {
    SettlementResolver.resolve(balances)
}

pub fn settle_group(
    participants: &[Participant],
    expenses: &[SharedExpense],
) -> Result<Settlement, ValidationError> {
    SettleGroupPolicy::settle(participants, expenses)
}
