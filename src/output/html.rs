//! HTML Attendance Table
//!
//! 固定列数のHTML出席表を出力するフォーマッター。

use std::io::Write;

use crate::api::AttendanceLayout;
use crate::error::RosterError;
use crate::types::{cell_at, Sheet};

/// HTML形式のフォーマッター
///
/// ヘッダー行は空セル1つと番号付きセル（1〜列数）。各データ行は識別子と、
/// 出席列ごとに出席マーカー（`+`）または空セルを出力します。
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn render<W: Write>(
        &self,
        sheet: &Sheet,
        layout: &AttendanceLayout,
        writer: &mut W,
    ) -> Result<(), RosterError> {
        writeln!(
            writer,
            "<table style=\"width: 100%; border-collapse: collapse;\">"
        )?;

        // ヘッダー行
        writeln!(writer, "  <tr>")?;
        writeln!(writer, "    <th></th>")?;
        for number in 1..=layout.attendance_col_count() {
            writeln!(writer, "    <th style=\"width: 5%;\">{}</th>", number)?;
        }
        writeln!(writer, "  </tr>")?;

        for row in sheet.data_rows() {
            let id = cell_at(row, layout.id_col);
            if !id.is_truthy() {
                continue;
            }

            writeln!(writer, "  <tr>")?;
            writeln!(writer, "    <td>{}</td>", escape_html(&id.display_string()))?;

            for col in layout.first_attendance_col..=layout.last_attendance_col {
                let marker = if cell_at(row, col).is_truthy() { "+" } else { "" };
                writeln!(writer, "    <td>{}</td>", marker)?;
            }

            writeln!(writer, "  </tr>")?;
        }

        writeln!(writer, "</table>")?;
        writer.flush()?;
        Ok(())
    }
}

/// HTML特殊文字をエスケープ
fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
