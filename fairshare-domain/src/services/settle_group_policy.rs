use crate::{
    error::ValidationError,
    model::{Participant, Settlement, SharedExpense},
    services::{BalanceCalculator, SettlementResolver},
};

pub struct SettleGroupPolicy;

impl SettleGroupPolicy {
    /// Balance computation followed by settlement resolution.
    pub fn settle(
        participants: &[Participant],
        expenses: &[SharedExpense],
    ) -> Result<Settlement, ValidationError> {
        let balances = BalanceCalculator.calculate(participants, expenses)?;
        let transfers = SettlementResolver.resolve(&balances)?;
        Ok(Settlement {
            balances,
            transfers,
        })
    }
}
