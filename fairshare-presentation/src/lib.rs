#![warn(clippy::uninlined_format_args)]

pub mod settlement_presenter;
pub mod text_table;

pub use settlement_presenter::{AmountFormat, SettlementPresenter, SettlementView};
