use std::{borrow::Cow, fmt::Write};

const CELL_PADDING: usize = 1;
const COLUMN_SEPARATOR: char = '|';
const RULE: char = '-';
const RULE_JOINT: char = '+';

#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Renders a pipe-separated table with a rule under the header.
    ///
    /// Cells beyond the header count are dropped.
    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| text_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().enumerate().take(col_count) {
                col_widths[i] = col_widths[i].max(text_width(cell));
            }
        }

        let mut out = String::with_capacity(256);
        self.write_line(&mut out, self.headers, &col_widths);

        let rule: Vec<String> = col_widths
            .iter()
            .map(|width| RULE.to_string().repeat(width + CELL_PADDING * 2))
            .collect();
        let _ = writeln!(&mut out, "{}", rule.join(&RULE_JOINT.to_string()));

        for row in &self.rows {
            self.write_line(&mut out, row.as_ref(), &col_widths);
        }

        out
    }

    fn write_line(&self, out: &mut String, cells: &[Cow<'a, str>], col_widths: &[usize]) {
        let padding = " ".repeat(CELL_PADDING);
        let rendered: Vec<String> = col_widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let cell = cells.get(i).map(|c| &**c).unwrap_or("");
                let alignment = self.alignments.get(i).copied().unwrap_or_default();
                format!("{padding}{}{padding}", pad(cell, width, alignment))
            })
            .collect();
        let _ = writeln!(
            out,
            "{}",
            rendered
                .join(&COLUMN_SEPARATOR.to_string())
                .trim_end()
        );
    }
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    let fill = width.saturating_sub(text_width(text));
    match alignment {
        Alignment::Left => format!("{text}{}", " ".repeat(fill)),
        Alignment::Right => format!("{}{text}", " ".repeat(fill)),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}
