use fairshare_domain::{AmountConversionError, ValidationError};
use fairshare_parser::ParseError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Invalid amount at line {line}: {source}")]
    InvalidAmount {
        line: usize,
        source: AmountConversionError,
    },
    #[error("Invalid budget: {0}")]
    InvalidBudget(AmountConversionError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
