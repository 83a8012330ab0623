use crate::text_table::{Alignment, TextTableBuilder};
use fairshare_application::{ParticipantDirectory, PersonBalance, SettlementReport};
use fairshare_domain::{CurrencyContext, Money, ParticipantId, Transfer, TripSummary};
use fairshare_i18n as i18n;
use std::borrow::Cow;

/// How amounts in minor units are shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AmountFormat {
    pub currency: CurrencyContext,
    pub symbol: String,
}

impl AmountFormat {
    pub fn new(currency: CurrencyContext, symbol: impl Into<String>) -> Self {
        Self {
            currency,
            symbol: symbol.into(),
        }
    }

    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let value = self.currency.to_decimal(amount).abs();
        format!("{sign}{}{value}", self.symbol)
    }

    /// Like [`format`](Self::format) but with an explicit `+` for credits.
    pub fn format_signed(&self, amount: Money) -> String {
        if amount.is_negative() {
            self.format(amount)
        } else {
            format!("+{}", self.format(amount))
        }
    }
}

pub struct SettlementPresenter;

pub struct SettlementView {
    pub balance_table: String,
    /// `None` when nobody owes anything.
    pub transfer_table: Option<String>,
    pub summary_table: String,
}

impl SettlementView {
    pub fn to_text(&self) -> String {
        let transfers = self
            .transfer_table
            .as_deref()
            .map(Cow::Borrowed)
            .unwrap_or_else(|| Cow::Owned(format!("{}\n", i18n::ALL_SETTLED)));
        format!(
            "{}\n{}\n{}",
            self.balance_table, transfers, self.summary_table
        )
    }
}

impl SettlementPresenter {
    pub fn render(report: &SettlementReport) -> SettlementView {
        let empty_directory = EmptyParticipantDirectory;
        let format = AmountFormat::new(report.currency, "");
        Self::render_with_participants(report, &empty_directory, &format)
    }

    pub fn render_with_participants(
        report: &SettlementReport,
        directory: &dyn ParticipantDirectory,
        format: &AmountFormat,
    ) -> SettlementView {
        let balance_table = Self::build_balance_table(&report.balances, directory, format);
        let transfer_table = if report.transfers.is_empty() {
            None
        } else {
            Some(Self::build_transfer_table(
                &report.transfers,
                directory,
                format,
            ))
        };
        let summary_table = Self::build_summary_table(&report.summary, directory, format);

        SettlementView {
            balance_table,
            transfer_table,
            summary_table,
        }
    }

    pub fn build_balance_table(
        balances: &[PersonBalance],
        directory: &dyn ParticipantDirectory,
        format: &AmountFormat,
    ) -> String {
        let headers = [Cow::Borrowed(i18n::PARTICIPANT), Cow::Borrowed(i18n::BALANCE)];
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&headers);

        for person in balances {
            builder = builder.row([
                participant_label(&person.id, directory),
                Cow::Owned(format.format_signed(person.balance)),
            ]);
        }

        builder.build()
    }

    /// Transfers are listed in the order the resolver produced them.
    pub fn build_transfer_table(
        transfers: &[Transfer],
        directory: &dyn ParticipantDirectory,
        format: &AmountFormat,
    ) -> String {
        let headers = [
            Cow::Borrowed(i18n::FROM),
            Cow::Borrowed(i18n::TO),
            Cow::Borrowed(i18n::AMOUNT),
        ];
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&headers);

        for transfer in transfers {
            builder = builder.row([
                participant_label(&transfer.from, directory),
                participant_label(&transfer.to, directory),
                Cow::Owned(format.format(transfer.amount)),
            ]);
        }

        builder.build()
    }

    pub fn build_summary_table(
        summary: &TripSummary,
        directory: &dyn ParticipantDirectory,
        format: &AmountFormat,
    ) -> String {
        let headers = [Cow::Borrowed(i18n::CATEGORY), Cow::Borrowed(i18n::AMOUNT)];
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&headers);

        for category in &summary.categories {
            let label = category.category.as_deref().unwrap_or(i18n::UNCATEGORIZED);
            builder = builder.row([
                Cow::Owned(label.to_owned()),
                Cow::Owned(format.format(category.total)),
            ]);
        }
        builder = builder.row([
            Cow::Borrowed(i18n::TOTAL_SPENT),
            Cow::Owned(format.format(summary.total_spent)),
        ]);
        if let Some(budget) = &summary.budget {
            builder = builder.rows([
                [
                    Cow::Borrowed(i18n::BUDGET),
                    Cow::Owned(format.format(budget.budget)),
                ],
                [
                    Cow::Borrowed(i18n::REMAINING),
                    Cow::Owned(format.format(budget.remaining)),
                ],
                [
                    Cow::Borrowed(i18n::USED),
                    Cow::Owned(format!("{}%", budget.percent_used)),
                ],
            ]);
        }
        let categories = builder.build();

        let headers = [
            Cow::Borrowed(i18n::PARTICIPANT),
            Cow::Borrowed(i18n::PAID),
            Cow::Borrowed(i18n::SHARE),
        ];
        let participants = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right, Alignment::Right])
            .headers(&headers)
            .rows(summary.participants.iter().map(|totals| {
                [
                    participant_label(&totals.id, directory),
                    Cow::Owned(format.format(totals.paid)),
                    Cow::Owned(format.format(totals.share)),
                ]
            }))
            .build();

        format!("{categories}\n{participants}")
    }
}

struct EmptyParticipantDirectory;

impl ParticipantDirectory for EmptyParticipantDirectory {
    fn display_name(&self, _id: &ParticipantId) -> Option<&str> {
        None
    }
}

fn participant_label<'a>(
    id: &ParticipantId,
    directory: &'a dyn ParticipantDirectory,
) -> Cow<'a, str> {
    match directory.display_name(id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("@{id}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairshare_domain::{CategoryTotal, ParticipantTotals, services::BudgetStatus};
    use rstest::rstest;
    use std::collections::HashMap;

    fn sample_report() -> SettlementReport {
        SettlementReport {
            balances: vec![
                PersonBalance {
                    id: ParticipantId::from("p1"),
                    balance: Money::from_i64(1500),
                },
                PersonBalance {
                    id: ParticipantId::from("p2"),
                    balance: Money::from_i64(-1500),
                },
            ],
            transfers: vec![Transfer {
                from: ParticipantId::from("p2"),
                to: ParticipantId::from("p1"),
                amount: Money::from_i64(1500),
            }],
            summary: TripSummary {
                total_spent: Money::from_i64(3000),
                categories: vec![
                    CategoryTotal {
                        category: Some("Food".to_string()),
                        total: Money::from_i64(2000),
                    },
                    CategoryTotal {
                        category: None,
                        total: Money::from_i64(1000),
                    },
                ],
                participants: vec![ParticipantTotals {
                    id: ParticipantId::from("p1"),
                    paid: Money::from_i64(3000),
                    share: Money::from_i64(1500),
                }],
                budget: Some(BudgetStatus {
                    budget: Money::from_i64(5000),
                    remaining: Money::from_i64(2000),
                    percent_used: 60,
                }),
            },
            currency: CurrencyContext::default(),
        }
    }

    #[test]
    fn render_uses_display_name_when_available() {
        let mut directory = HashMap::new();
        directory.insert(ParticipantId::from("p1"), "Alice".to_string());
        let format = AmountFormat::new(CurrencyContext::default(), "$");

        let view =
            SettlementPresenter::render_with_participants(&sample_report(), &directory, &format);

        assert!(view.balance_table.contains("Alice"));
        assert!(view.balance_table.contains("+$15.00"));
        assert!(view.balance_table.contains("-$15.00"));
        let transfers = view.transfer_table.as_ref().expect("transfer table");
        assert!(transfers.contains("Alice"));
        assert!(transfers.contains("@p2"));
    }

    #[test]
    fn render_falls_back_to_ids_when_missing() {
        let view = SettlementPresenter::render(&sample_report());

        assert!(view.balance_table.contains("@p1"));
        assert!(view.balance_table.contains("+15.00"));
    }

    #[test]
    fn summary_lists_categories_and_budget() {
        let view = SettlementPresenter::render(&sample_report());

        assert!(view.summary_table.contains("Food"));
        assert!(view.summary_table.contains(i18n::UNCATEGORIZED));
        assert!(view.summary_table.contains("30.00"));
        assert!(view.summary_table.contains("60%"));
    }

    #[test]
    fn settled_report_has_no_transfer_table() {
        let mut report = sample_report();
        report.transfers.clear();

        let view = SettlementPresenter::render(&report);

        assert!(view.transfer_table.is_none());
        assert!(view.to_text().contains(i18n::ALL_SETTLED));
    }

    #[rstest]
    #[case::cents(2, "$", -1500, "-$15.00", "-$15.00")]
    #[case::yen(0, "¥", 1200, "¥1200", "+¥1200")]
    #[case::zero_is_a_credit(0, "¥", 0, "¥0", "+¥0")]
    #[case::no_symbol(2, "", 5, "0.05", "+0.05")]
    #[case::minimum_amount(0, "", i64::MIN, "-9223372036854775808", "-9223372036854775808")]
    fn formats_amounts_with_scale_and_symbol(
        #[case] scale: u32,
        #[case] symbol: &str,
        #[case] amount: i64,
        #[case] plain: &str,
        #[case] signed: &str,
    ) {
        let format = AmountFormat::new(CurrencyContext::new(scale).expect("valid scale"), symbol);
        assert_eq!(format.format(Money::from_i64(amount)), plain);
        assert_eq!(format.format_signed(Money::from_i64(amount)), signed);
    }
}
