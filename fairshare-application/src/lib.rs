#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod ledger_processor;
pub mod model;
pub mod notation;
pub mod ports;

pub use error::LedgerError;
pub use fairshare_parser::ParseError;
pub use ledger_processor::LedgerProcessor;
pub use model::{Group, PersonBalance, SettlementReport};
pub use notation::NotationLedgerParser;
pub use ports::{LedgerParser, ParticipantDirectory};
