use crate::model::{Money, ParticipantId};
use thiserror::Error;

/// Rejection of malformed engine input. Never retried; the input itself is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Participant list must not be empty")]
    EmptyParticipants,
    #[error("Participant '{0}' is declared more than once")]
    DuplicateParticipant(ParticipantId),
    #[error("Expense '{expense}' references unknown participant '{participant}'")]
    UnknownParticipant {
        expense: String,
        participant: ParticipantId,
    },
    #[error("Expense '{expense}' has non-positive amount {amount}")]
    NonPositiveAmount { expense: String, amount: Money },
    #[error("Expense '{expense}' has no beneficiaries")]
    EmptyBeneficiaries { expense: String },
    #[error("Expense '{expense}' lists beneficiary '{participant}' more than once")]
    DuplicateBeneficiary {
        expense: String,
        participant: ParticipantId,
    },
    #[error("Sum of balances must be zero (found {0})")]
    ImbalancedTotal(Money),
    #[error("Balance of '{0}' cannot be settled as a positive transfer")]
    BalanceOutOfRange(ParticipantId),
    #[error("Amount overflow while accumulating expense '{expense}'")]
    AmountOverflow { expense: String },
    #[error("Budget must be positive (found {0})")]
    NonPositiveBudget(Money),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountConversionError {
    #[error("Amount has more decimal places than the currency allows")]
    NonIntegral,
    #[error("Amount is out of range")]
    OutOfRange,
    #[error("Currency scale {scale} exceeds the supported maximum {max_supported}")]
    UnsupportedScale { scale: u32, max_supported: u32 },
}
