#![warn(clippy::uninlined_format_args)]

//! Plain-text ledger notation.
//!
//! ```text
//! participants := you "You", alex "Alex", jamie "Jamie"
//! budget 1200
//! hotel: you paid 450 for all #Accommodation "Hotel Booking"
//! train: alex paid 180.50 for you jamie // comment
//! ```

mod i18n;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_till, take_while1},
    character::complete::{char, digit1, one_of, space1},
    combinator::{map_res, opt, recognize},
    multi::{many0, many1, separated_list1},
    sequence::{delimited, preceded, terminated},
};
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantDecl<'a> {
    pub id: &'a str,
    /// Display name; falls back to the id when absent.
    pub name: Option<&'a str>,
}

impl<'a> ParticipantDecl<'a> {
    pub fn display_name(&self) -> &'a str {
        self.name.unwrap_or(self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Beneficiaries<'a> {
    All,
    Listed(Vec<&'a str>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseEntry<'a> {
    pub id: &'a str,
    pub payer: &'a str,
    pub amount: Decimal,
    pub beneficiaries: Beneficiaries<'a>,
    pub category: Option<&'a str>,
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    Participants(Vec<ParticipantDecl<'a>>),
    Budget(Decimal),
    Expense(ExpenseEntry<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseWithLine<'a> {
    pub line: usize,
    pub expense: ExpenseEntry<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger<'a> {
    pub participants: Vec<ParticipantDecl<'a>>,
    pub budget: Option<Decimal>,
    pub expenses: Vec<ExpenseWithLine<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Missing `participants := ...` declaration.")]
    MissingParticipantsDeclaration,
    #[error("Participants are declared again at line {line}.")]
    DuplicateParticipantsDeclaration { line: usize },
    #[error("Budget is declared again at line {line}.")]
    DuplicateBudget { line: usize },
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-').parse(input)
}

fn sp(input: &str) -> IResult<&str, &str> {
    fn line_comment(input: &str) -> IResult<&str, &str> {
        recognize((tag("//"), take_till(|c| c == '\n'))).parse(input)
    }

    recognize(many0(alt((space1, line_comment)))).parse(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till(|c| c == '"'), char('"')).parse(input)
}

// 450, 180.50, $12.99
fn amount(input: &str) -> IResult<&str, Decimal> {
    preceded(
        opt(one_of("$€£¥")),
        map_res(recognize((digit1, opt((char('.'), digit1)))), Decimal::from_str),
    )
    .parse(input)
}

// you "You"
fn participant_decl(input: &str) -> IResult<&str, ParticipantDecl<'_>> {
    (identifier, opt(preceded(sp, quoted)))
        .map(|(id, name)| ParticipantDecl { id, name })
        .parse(input)
}

// participants := you "You", alex "Alex"
fn participants(input: &str) -> IResult<&str, Vec<ParticipantDecl<'_>>> {
    (
        tag_no_case("participants"),
        sp,
        tag(":="),
        sp,
        separated_list1((sp, char(','), sp), participant_decl),
    )
        .map(|(_, _, _, _, decls)| decls)
        .parse(input)
}

// budget 1200
fn budget(input: &str) -> IResult<&str, Decimal> {
    preceded((tag_no_case("budget"), space1), amount).parse(input)
}

fn beneficiaries(input: &str) -> IResult<&str, Beneficiaries<'_>> {
    many1(terminated(identifier, sp))
        .map(|ids| {
            if ids.len() == 1 && ids[0].eq_ignore_ascii_case("all") {
                Beneficiaries::All
            } else {
                Beneficiaries::Listed(ids)
            }
        })
        .parse(input)
}

// {id}: {payer} paid {amount} for {beneficiaries} [#category] ["description"]
fn expense(input: &str) -> IResult<&str, ExpenseEntry<'_>> {
    let head = (
        identifier, // id
        sp,
        char(':'),
        sp,
        identifier, // payer
        sp,
        tag_no_case("paid"),
        sp,
        amount,
    );
    let tail = (
        sp,
        tag_no_case("for"),
        sp,
        beneficiaries,
        opt(preceded((sp, char('#')), identifier)),
        opt(preceded(sp, quoted)),
    );

    (head, tail)
        .map(
            |(
                (id, _, _, _, payer, _, _, _, amount),
                (_, _, _, beneficiaries, category, description),
            )| ExpenseEntry {
                id,
                payer,
                amount,
                beneficiaries,
                category,
                description,
            },
        )
        .parse(input)
}

fn statement(input: &str) -> IResult<&str, Statement<'_>> {
    alt((
        participants.map(Statement::Participants),
        budget.map(Statement::Budget),
        expense.map(Statement::Expense),
    ))
    .parse(input)
}

fn statement_with_sp(input: &str) -> IResult<&str, Statement<'_>> {
    (sp, statement, sp).map(|(_, stmt, _)| stmt).parse(input)
}

// Points at the first token nom could not consume, 1-based column.
fn syntax_error(line_no: usize, line: &str, err: nom::Err<nom::error::Error<&str>>) -> ParseError {
    let rest = match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e.input,
        nom::Err::Incomplete(_) => "",
    };
    let offset = line.len().saturating_sub(rest.len());
    let column = line.get(..offset).map_or(0, |consumed| consumed.chars().count()) + 1;
    let detail = match rest.split_whitespace().next() {
        Some(token) => i18n::syntax_error_detail(column, token),
        None => i18n::syntax_error_end_of_line(column),
    };
    ParseError::SyntaxError {
        line: line_no,
        detail,
    }
}

/// Parse a whole ledger, one statement per line.
///
/// Blank lines and `//` comments are skipped. Line numbers in errors are
/// 1-based.
pub fn parse_ledger(input: &str) -> Result<Ledger<'_>, ParseError> {
    let mut participants: Option<Vec<ParticipantDecl<'_>>> = None;
    let mut budget = None;
    let mut expenses = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let (rest, _) = sp(line).map_err(|e| syntax_error(line_no, line, e))?;
        if rest.trim().is_empty() {
            continue;
        }

        let stmt = match statement_with_sp(rest) {
            Ok((rest, stmt)) => {
                if !rest.trim().is_empty() {
                    return Err(ParseError::SyntaxError {
                        line: line_no,
                        detail: i18n::syntax_error_unparsed_detail(rest.trim()),
                    });
                }
                stmt
            }
            Err(e) => return Err(syntax_error(line_no, line, e)),
        };

        match stmt {
            Statement::Participants(decls) => {
                if participants.replace(decls).is_some() {
                    return Err(ParseError::DuplicateParticipantsDeclaration { line: line_no });
                }
            }
            Statement::Budget(amount) => {
                if budget.replace(amount).is_some() {
                    return Err(ParseError::DuplicateBudget { line: line_no });
                }
            }
            Statement::Expense(expense) => expenses.push(ExpenseWithLine {
                line: line_no,
                expense,
            }),
        }
    }

    let participants = participants.ok_or(ParseError::MissingParticipantsDeclaration)?;

    Ok(Ledger {
        participants,
        budget,
        expenses,
    })
}
