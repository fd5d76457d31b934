//! Output Format Module
//!
//! 出席表シートを文字列に変換する出力フォーマットの抽象化を提供するモジュール。

mod html;
mod markdown;

use crate::api::{AttendanceLayout, ReportKind};
use crate::error::RosterError;
use crate::types::Sheet;
use std::io::Write;

pub use html::HtmlFormatter;
pub use markdown::MarkdownFormatter;

/// 出席表フォーマッター（Strategy Pattern）
#[derive(Debug, Clone, Copy)]
pub enum OutputFormatter {
    Html,
    Markdown,
}

impl OutputFormatter {
    /// レポートの種類からフォーマッターを生成
    ///
    /// 出席表以外（スケジュール）の場合は`None`を返します。
    pub fn from_kind(kind: ReportKind) -> Option<Self> {
        match kind {
            ReportKind::HtmlTable => Some(OutputFormatter::Html),
            ReportKind::MarkdownTable => Some(OutputFormatter::Markdown),
            ReportKind::WeeklySchedule => None,
        }
    }

    /// シートを指定されたフォーマットで出力する
    ///
    /// # 引数
    ///
    /// * `sheet` - 出席表シート
    /// * `layout` - 識別子列と出席列の位置
    /// * `writer` - 出力先のライター
    pub fn render<W: Write>(
        &self,
        sheet: &Sheet,
        layout: &AttendanceLayout,
        writer: &mut W,
    ) -> Result<(), RosterError> {
        match self {
            OutputFormatter::Html => HtmlFormatter.render(sheet, layout, writer),
            OutputFormatter::Markdown => MarkdownFormatter.render(sheet, layout, writer),
        }
    }

    /// シートを文字列に変換する
    ///
    /// Markdown形式で日付列が見つからない場合は空文字列になります。
    pub fn render_to_string(
        &self,
        sheet: &Sheet,
        layout: &AttendanceLayout,
    ) -> Result<String, RosterError> {
        let mut buffer = Vec::new();
        self.render(sheet, layout, &mut buffer)?;

        String::from_utf8(buffer)
            .map_err(|e| RosterError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}
