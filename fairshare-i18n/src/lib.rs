#![warn(clippy::uninlined_format_args)]

#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const PARTICIPANT: &str = "参加者";
    pub const BALANCE: &str = "収支";
    pub const PAID: &str = "支払額";
    pub const SHARE: &str = "負担額";
    pub const FROM: &str = "支払人";
    pub const TO: &str = "受取人";
    pub const AMOUNT: &str = "金額";
    pub const CATEGORY: &str = "カテゴリ";
    pub const UNCATEGORIZED: &str = "未分類";
    pub const TOTAL_SPENT: &str = "合計支出";
    pub const BUDGET: &str = "予算";
    pub const REMAINING: &str = "残り";
    pub const USED: &str = "使用率";
    pub const ALL_SETTLED: &str = "精算は不要です";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "清算の計算に失敗しました";
    pub const MISSING_PARTICIPANTS_DECLARATION: &str =
        "`participants := ...` の宣言が見つかりません。";
}

#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const PARTICIPANT: &str = "Participant";
    pub const BALANCE: &str = "Balance";
    pub const PAID: &str = "Paid";
    pub const SHARE: &str = "Share";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const CATEGORY: &str = "Category";
    pub const UNCATEGORIZED: &str = "Uncategorized";
    pub const TOTAL_SPENT: &str = "Total spent";
    pub const BUDGET: &str = "Budget";
    pub const REMAINING: &str = "Remaining";
    pub const USED: &str = "Used";
    pub const ALL_SETTLED: &str = "Everyone is settled up";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "Settlement calculation failed";
    pub const MISSING_PARTICIPANTS_DECLARATION: &str =
        "Could not find a `participants := ...` declaration.";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn unknown_participant(expense: impl std::fmt::Display, id: impl std::fmt::Display) -> String {
    format!("支出 '{expense}' に未定義の参加者 '{id}' が含まれています")
}

#[cfg(feature = "ja")]
pub fn duplicate_participant(id: impl std::fmt::Display) -> String {
    format!("参加者 '{id}' が重複しています")
}

#[cfg(feature = "ja")]
pub fn invalid_amount(line: usize, detail: impl std::fmt::Display) -> String {
    format!("行 {line}: 金額が不正です - {detail}")
}

#[cfg(feature = "ja")]
pub fn invalid_budget(detail: impl std::fmt::Display) -> String {
    format!("予算が不正です - {detail}")
}

#[cfg(feature = "ja")]
pub fn syntax_error(line: usize, detail: impl std::fmt::Display) -> String {
    format!("行 {line}: 構文エラー - {detail}")
}

#[cfg(not(feature = "ja"))]
pub fn unknown_participant(expense: impl std::fmt::Display, id: impl std::fmt::Display) -> String {
    format!("Expense '{expense}' references unknown participant '{id}'")
}

#[cfg(not(feature = "ja"))]
pub fn duplicate_participant(id: impl std::fmt::Display) -> String {
    format!("Participant '{id}' is declared more than once")
}

#[cfg(not(feature = "ja"))]
pub fn invalid_amount(line: usize, detail: impl std::fmt::Display) -> String {
    format!("Line {line}: Invalid amount - {detail}")
}

#[cfg(not(feature = "ja"))]
pub fn invalid_budget(detail: impl std::fmt::Display) -> String {
    format!("Invalid budget - {detail}")
}

#[cfg(not(feature = "ja"))]
pub fn syntax_error(line: usize, detail: impl std::fmt::Display) -> String {
    format!("Line {line}: Syntax error - {detail}")
}
