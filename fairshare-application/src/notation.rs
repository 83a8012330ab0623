use crate::{error::LedgerError, model::Group, ports::LedgerParser};
use fairshare_domain::{CurrencyContext, Participant, ParticipantId, SharedExpense, SplitPolicy};
use fairshare_parser::{Beneficiaries, ExpenseWithLine, Ledger, parse_ledger};

/// Reads groups written in the plain-text ledger notation.
#[derive(Default)]
pub struct NotationLedgerParser;

impl LedgerParser for NotationLedgerParser {
    fn parse(&self, content: &str, currency: CurrencyContext) -> Result<Group, LedgerError> {
        let ledger = parse_ledger(content)?;
        to_group(ledger, currency)
    }
}

fn to_group(ledger: Ledger<'_>, currency: CurrencyContext) -> Result<Group, LedgerError> {
    let participants: Vec<Participant> = ledger
        .participants
        .iter()
        .map(|decl| Participant::new(decl.id, decl.display_name()))
        .collect();

    let budget = ledger
        .budget
        .map(|amount| currency.to_minor_units(amount))
        .transpose()
        .map_err(LedgerError::InvalidBudget)?;

    let expenses = ledger
        .expenses
        .into_iter()
        .map(|entry| to_expense(entry, &participants, currency))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Group {
        participants,
        expenses,
        budget,
    })
}

fn to_expense(
    ExpenseWithLine { line, expense }: ExpenseWithLine<'_>,
    participants: &[Participant],
    currency: CurrencyContext,
) -> Result<SharedExpense, LedgerError> {
    let amount = currency
        .to_minor_units(expense.amount)
        .map_err(|source| LedgerError::InvalidAmount { line, source })?;

    let beneficiaries: Vec<ParticipantId> = match expense.beneficiaries {
        Beneficiaries::All => participants
            .iter()
            .map(|participant| participant.id.clone())
            .collect(),
        Beneficiaries::Listed(ids) => ids.into_iter().map(ParticipantId::from).collect(),
    };

    Ok(SharedExpense {
        id: expense.id.to_owned(),
        amount,
        payer: ParticipantId::from(expense.payer),
        beneficiaries,
        split: SplitPolicy::Equal,
        category: expense.category.map(str::to_owned),
        description: expense.description.map(str::to_owned),
    })
}
