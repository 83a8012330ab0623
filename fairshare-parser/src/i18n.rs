#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub fn syntax_error_detail(column: usize, near: impl std::fmt::Display) -> String {
    format!("{column} 文字目の '{near}' を解析できません")
}

#[cfg(feature = "ja")]
pub fn syntax_error_end_of_line(column: usize) -> String {
    format!("{column} 文字目で行が途切れています")
}

#[cfg(feature = "ja")]
pub fn syntax_error_unparsed_detail(input: impl std::fmt::Display) -> String {
    format!("解析されていない入力: {input}")
}

#[cfg(not(feature = "ja"))]
pub fn syntax_error_detail(column: usize, near: impl std::fmt::Display) -> String {
    format!("unexpected '{near}' at column {column}")
}

#[cfg(not(feature = "ja"))]
pub fn syntax_error_end_of_line(column: usize) -> String {
    format!("unexpected end of line at column {column}")
}

#[cfg(not(feature = "ja"))]
pub fn syntax_error_unparsed_detail(input: impl std::fmt::Display) -> String {
    format!("Unparsed input: {input}")
}
