use crate::{
    error::LedgerError,
    model::{Group, PersonBalance, SettlementReport},
    ports::LedgerParser,
};
use fairshare_domain::{CurrencyContext, SettleGroupPolicy, TripSummary};

#[derive(Clone, Copy)]
pub struct LedgerProcessor<'a> {
    parser: &'a dyn LedgerParser,
    currency: CurrencyContext,
}

impl<'a> LedgerProcessor<'a> {
    pub fn new(parser: &'a dyn LedgerParser, currency: CurrencyContext) -> Self {
        Self { parser, currency }
    }

    pub fn currency(&self) -> CurrencyContext {
        self.currency
    }

    pub fn parse_group(&self, content: &str) -> Result<Group, LedgerError> {
        self.parser.parse(content, self.currency)
    }

    /// Balances, transfers, and spending summary for a group.
    ///
    /// Fails as a whole when any expense is invalid.
    pub fn build_report(&self, group: &Group) -> Result<SettlementReport, LedgerError> {
        let settlement = SettleGroupPolicy::settle(&group.participants, &group.expenses)?;
        let summary =
            TripSummary::from_expenses(&group.participants, &group.expenses, group.budget)?;

        let balances = group
            .participants
            .iter()
            .map(|participant| PersonBalance {
                id: participant.id.clone(),
                balance: settlement
                    .balances
                    .get(&participant.id)
                    .copied()
                    .unwrap_or_default(),
            })
            .collect();

        tracing::info!(
            participant_count = group.participants.len(),
            expense_count = group.expenses.len(),
            transfer_count = settlement.transfers.len(),
            total_spent = %summary.total_spent,
            "Built settlement report"
        );

        Ok(SettlementReport {
            balances,
            transfers: settlement.transfers,
            summary,
            currency: self.currency,
        })
    }

    pub fn process(&self, content: &str) -> Result<(Group, SettlementReport), LedgerError> {
        let group = self.parse_group(content)?;
        let report = self.build_report(&group)?;
        Ok((group, report))
    }
}
