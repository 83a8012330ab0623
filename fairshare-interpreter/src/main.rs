#![warn(clippy::uninlined_format_args)]

mod bootstrap;

use bootstrap::{AppConfig, init_logging};
use fairshare_application::{LedgerError, LedgerProcessor, NotationLedgerParser, ParseError};
use fairshare_domain::ValidationError;
use fairshare_i18n as i18n;
use fairshare_presentation::SettlementPresenter;
use std::{borrow::Cow, env, fs, process};

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let Some(path) = env::args().nth(1) else {
        return Err("Usage: fairshare <ledger-file>".into());
    };

    let config = AppConfig::from_env()?;
    let source =
        fs::read_to_string(&path).map_err(|err| format!("Failed to read '{path}': {err}"))?;

    tracing::debug!(%path, scale = config.currency.scale, "Settling ledger");
    let processor = LedgerProcessor::new(&NotationLedgerParser, config.currency);
    let (group, report) = processor.process(&source).map_err(format_ledger_error)?;

    let view =
        SettlementPresenter::render_with_participants(&report, &group, &config.amount_format());
    print!("{}", view.to_text());

    Ok(())
}

fn format_ledger_error(err: LedgerError) -> Cow<'static, str> {
    let message = match err {
        LedgerError::Parse(ParseError::MissingParticipantsDeclaration) => {
            return Cow::Borrowed(i18n::MISSING_PARTICIPANTS_DECLARATION);
        }
        LedgerError::Parse(ParseError::SyntaxError { line, detail }) => {
            i18n::syntax_error(line, detail)
        }
        LedgerError::Parse(other) => other.to_string(),
        LedgerError::InvalidAmount { line, source } => i18n::invalid_amount(line, source),
        LedgerError::InvalidBudget(source) => i18n::invalid_budget(source),
        LedgerError::Validation(ValidationError::UnknownParticipant {
            expense,
            participant,
        }) => i18n::unknown_participant(expense, participant),
        LedgerError::Validation(ValidationError::DuplicateParticipant(id)) => {
            i18n::duplicate_participant(id)
        }
        LedgerError::Validation(other) => {
            format!("{}: {other}", i18n::SETTLEMENT_CALCULATION_FAILED)
        }
    };
    Cow::Owned(message)
}
