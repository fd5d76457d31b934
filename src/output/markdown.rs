//! Markdown Attendance Table
//!
//! ヘッダー行から日付列（講義列）を検出し、Markdownの出席表を出力するフォーマッター。

use std::io::Write;

use tracing::warn;
use unicode_width::UnicodeWidthStr;

use crate::api::AttendanceLayout;
use crate::dates::{is_date_like, parse_date};
use crate::error::RosterError;
use crate::types::{cell_at, CellValue, Sheet};

/// 表の前に出力するスタイルブロック
const STYLE_BLOCK: &str = "<style>
table, th, td {
  border: 1px solid black;
  border-collapse: collapse;
}
</style>
";

/// Markdown形式のフォーマッター
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// 出席表をMarkdownとして出力する
    ///
    /// 日付列が1つも見つからない場合は何も出力しません（呼び出し側は
    /// 空の結果を「書き込むものなし」として扱います）。
    pub fn render<W: Write>(
        &self,
        sheet: &Sheet,
        layout: &AttendanceLayout,
        writer: &mut W,
    ) -> Result<(), RosterError> {
        let lecture_cols = detect_lecture_columns(sheet, layout);
        if lecture_cols.is_empty() {
            warn!(sheet = %sheet.name, "no date columns found in header row");
            return Ok(());
        }

        let grid = build_grid(sheet, layout, &lecture_cols);
        let col_widths = calculate_column_widths(&grid);

        writeln!(writer, "{}", STYLE_BLOCK)?;

        for (row_idx, row) in grid.iter().enumerate() {
            write!(writer, "|")?;
            for (col_idx, content) in row.iter().enumerate() {
                let width = col_widths[col_idx];
                let padding = width.saturating_sub(content.width());
                write!(writer, " {}{} |", content, " ".repeat(padding))?;
            }
            writeln!(writer)?;

            // ヘッダー行の後に区切り行を挿入
            if row_idx == 0 {
                writeln!(writer, "{}", generate_separator(&col_widths))?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}

/// 識別子列より右にあり、ヘッダーが日付として扱える列を検出
fn detect_lecture_columns(sheet: &Sheet, layout: &AttendanceLayout) -> Vec<usize> {
    let Some(header) = sheet.header() else {
        return Vec::new();
    };

    header
        .iter()
        .enumerate()
        .skip(layout.id_col + 1)
        .filter(|(_, value)| is_date_like(value))
        .map(|(idx, _)| idx)
        .collect()
}

/// ヘッダー行とデータ行（識別子の昇順）からなる文字列グリッドを構築
fn build_grid(sheet: &Sheet, layout: &AttendanceLayout, lecture_cols: &[usize]) -> Vec<Vec<String>> {
    let empty_header = Vec::new();
    let header = sheet.header().unwrap_or(&empty_header);

    let mut header_row = Vec::with_capacity(lecture_cols.len() + 1);
    header_row.push(cell_at(header, layout.id_col).display_string().trim().to_string());
    header_row.extend(
        lecture_cols
            .iter()
            .map(|&col| header_label(cell_at(header, col))),
    );

    let mut body: Vec<Vec<String>> = sheet
        .data_rows()
        .filter_map(|row| {
            let id = identifier_label(cell_at(row, layout.id_col))?;
            Some((row, id))
        })
        .map(|(row, id)| {
            let mut cells = Vec::with_capacity(lecture_cols.len() + 1);
            cells.push(id);
            cells.extend(lecture_cols.iter().map(|&col| {
                if cell_at(row, col).is_truthy() {
                    "+".to_string()
                } else {
                    String::new()
                }
            }));
            cells
        })
        .collect();

    // 識別子の文字列で昇順（安定ソート）
    body.sort_by(|a, b| a[0].cmp(&b[0]));

    let mut grid = Vec::with_capacity(body.len() + 1);
    grid.push(header_row);
    grid.extend(body);
    grid
}

/// 識別子の表示文字列（空白のみ・偽値は`None`、`|`はエスケープ）
fn identifier_label(value: &CellValue) -> Option<String> {
    if !value.is_truthy() {
        return None;
    }
    let label = value.display_string();
    let label = label.trim();
    if label.is_empty() {
        return None;
    }
    Some(escape_pipe(label))
}

fn escape_pipe(s: &str) -> String {
    s.replace('|', "\\|")
}

/// 日付列のヘッダーは `YYYY-MM-DD`、それ以外は表示用文字列
fn header_label(value: &CellValue) -> String {
    match parse_date(value) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => value.display_string(),
    }
}

/// 各列の最大表示幅を計算（最小3）
fn calculate_column_widths(grid: &[Vec<String>]) -> Vec<usize> {
    let cols = grid.first().map(Vec::len).unwrap_or(0);
    let mut widths = vec![3; cols];

    for row in grid {
        for (col_idx, content) in row.iter().enumerate() {
            widths[col_idx] = widths[col_idx].max(content.width());
        }
    }

    widths
}

/// ヘッダー区切り行を生成
fn generate_separator(col_widths: &[usize]) -> String {
    let mut separator = String::from("|");
    for &width in col_widths {
        separator.push(' ');
        separator.push_str(&"-".repeat(width));
        separator.push_str(" |");
    }
    separator
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn render(sheet: &Sheet) -> String {
        let mut buffer = Vec::new();
        MarkdownFormatter
            .render(sheet, &AttendanceLayout::default(), &mut buffer)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn header(dates: &[CellValue]) -> Vec<CellValue> {
        let mut row = vec![text("Imię"), text("Nazwisko"), text("Nr indeksu")];
        row.extend_from_slice(dates);
        row
    }

    fn student(id: &str, marks: &[CellValue]) -> Vec<CellValue> {
        let mut row = vec![text("Jan"), text("Kowalski"), text(id)];
        row.extend_from_slice(marks);
        row
    }

    #[test]
    fn test_detect_only_date_columns_after_identifier() {
        let mut row = vec![text("2025-10-01"), text("Nazwisko"), text("Nr indeksu")];
        row.extend([text("Uwagi"), text("09.10.2025"), CellValue::Number(3.0), text("2025/10/16")]);
        let sheet = Sheet::new("Agile", vec![row]);

        assert_eq!(
            detect_lecture_columns(&sheet, &AttendanceLayout::default()),
            vec![4, 6]
        );
    }

    #[test]
    fn test_no_date_columns_yields_empty_output() {
        let sheet = Sheet::new(
            "Agile",
            vec![
                header(&[text("Lab 1"), text("Lab 2")]),
                student("1", &[text("x"), text("x")]),
            ],
        );
        assert_eq!(render(&sheet), "");
    }

    #[test]
    fn test_empty_sheet_yields_empty_output() {
        assert_eq!(render(&Sheet::new("Agile", Vec::new())), "");
    }

    #[test]
    fn test_full_table() {
        let dt = NaiveDate::from_ymd_opt(2025, 10, 16)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let sheet = Sheet::new(
            "Agile",
            vec![
                header(&[text("09.10.2025"), CellValue::DateTime(dt)]),
                student("300", &[CellValue::Number(1.0), CellValue::Empty]),
                student("100", &[CellValue::Empty, text("ok")]),
                student("", &[CellValue::Number(1.0), CellValue::Number(1.0)]),
                student("200", &[CellValue::Bool(true), CellValue::Number(1.0)]),
            ],
        );

        let expected = "<style>
table, th, td {
  border: 1px solid black;
  border-collapse: collapse;
}
</style>

| Nr indeksu | 2025-10-09 | 2025-10-16 |
| ---------- | ---------- | ---------- |
| 100        |            | +          |
| 200        | +          | +          |
| 300        | +          |            |
";
        assert_eq!(render(&sheet), expected);
    }

    #[test]
    fn test_rows_sorted_lexicographically() {
        let sheet = Sheet::new(
            "Agile",
            vec![
                header(&[text("2025-10-09")]),
                student("9", &[]),
                student("10", &[]),
                student("100", &[]),
            ],
        );
        let output = render(&sheet);
        let ids: Vec<&str> = output
            .lines()
            .skip(9)
            .map(|line| line.trim_start_matches("| ").split(' ').next().unwrap())
            .collect();
        assert_eq!(ids, vec!["10", "100", "9"]);
    }

    #[test]
    fn test_blank_identifier_is_skipped() {
        let sheet = Sheet::new(
            "Agile",
            vec![
                header(&[text("2025-10-09")]),
                student("   ", &[CellValue::Number(1.0)]),
                student(" 42 ", &[CellValue::Number(1.0)]),
            ],
        );
        let output = render(&sheet);
        assert!(output.ends_with("| ---------- | ---------- |\n| 42         | +          |\n"));
    }

    #[test]
    fn test_pipe_in_identifier_is_escaped() {
        let sheet = Sheet::new(
            "Agile",
            vec![header(&[text("2025-10-09")]), student("12|34", &[CellValue::Empty])],
        );
        let output = render(&sheet);
        assert!(output.contains("| 12\\|34     |            |\n"));
    }

    #[test]
    fn test_short_year_headers_are_not_lecture_columns() {
        let sheet = Sheet::new(
            "Agile",
            vec![header(&[text("09/10/25"), text("1-2-3"), text("09.10.2025")])],
        );
        assert_eq!(
            detect_lecture_columns(&sheet, &AttendanceLayout::default()),
            vec![5]
        );
    }

    #[test]
    fn test_calculate_column_widths_with_polish() {
        let grid = vec![
            vec!["Nr".to_string(), "Żółć".to_string()],
            vec!["12345".to_string(), "+".to_string()],
        ];
        assert_eq!(calculate_column_widths(&grid), vec![5, 4]);
    }

    #[test]
    fn test_generate_separator() {
        assert_eq!(generate_separator(&[3, 5]), "| --- | ----- |");
    }
}
