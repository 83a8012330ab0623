use crate::ports::ParticipantDirectory;
use fairshare_domain::{
    CurrencyContext, Money, Participant, ParticipantId, SharedExpense, Transfer, TripSummary,
};

/// A group's caller-owned state: who takes part and what was spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub participants: Vec<Participant>,
    pub expenses: Vec<SharedExpense>,
    pub budget: Option<Money>,
}

impl ParticipantDirectory for Group {
    fn display_name(&self, id: &ParticipantId) -> Option<&str> {
        self.participants
            .iter()
            .find(|participant| &participant.id == id)
            .map(|participant| participant.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonBalance {
    pub id: ParticipantId,
    pub balance: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementReport {
    /// In participant declaration order.
    pub balances: Vec<PersonBalance>,
    pub transfers: Vec<Transfer>,
    pub summary: TripSummary,
    pub currency: CurrencyContext,
}

impl SettlementReport {
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}
