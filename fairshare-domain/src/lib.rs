#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::{AmountConversionError, ValidationError};
pub use model::{
    Balances, Money, Participant, ParticipantId, Settlement, SharedExpense, SplitPolicy, Transfer,
};
pub use services::{
    BalanceCalculator, BudgetStatus, CategoryTotal, CurrencyContext, ParticipantTotals,
    SettleGroupPolicy, SettlementResolver, TripSummary, compute_balances, resolve_settlements,
    settle_group,
};
