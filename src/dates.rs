//! Date Recognizer Module
//!
//! セル値が日付として扱えるかを判定し、暦日に変換するモジュール。
//! 日付の判定失敗はエラーではなく、「日付ではない」という通常の結果です。

use chrono::NaiveDate;

use crate::types::CellValue;

/// 文字列の日付として認識する書式（試行順）
///
/// - `%Y-%m-%d`: 2025-10-09
/// - `%d.%m.%Y`: 09.10.2025
/// - `%Y/%m/%d`: 2025/10/09
/// - `%d/%m/%Y`: 09/10/2025
pub const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d.%m.%Y", "%Y/%m/%d", "%d/%m/%Y"];

/// `DATE_FORMATS`と同じ順の（区切り文字, 年が先頭か）
const DATE_SHAPES: [(char, bool); 4] = [('-', true), ('.', false), ('/', true), ('/', false)];

/// セル値が日付として扱えるかを判定
///
/// # 引数
///
/// * `value` - 判定するセル値
///
/// # 戻り値
///
/// 日時セル、または`DATE_FORMATS`のいずれかで解析できる文字列セルの場合は`true`
pub fn is_date_like(value: &CellValue) -> bool {
    parse_date(value).is_some()
}

/// セル値を暦日に変換
///
/// 日時セルは日付部分をそのまま返します。文字列セルは前後の空白を除去してから
/// `DATE_FORMATS`を順に試します。数値・論理値・空セルは`None`です。
pub fn parse_date(value: &CellValue) -> Option<NaiveDate> {
    match value {
        CellValue::DateTime(dt) => Some(dt.date()),
        CellValue::Text(s) => parse_date_str(s),
        _ => None,
    }
}

/// 文字列を暦日に変換
///
/// 年は符号なしの4桁、日と月は1〜2桁のみ受け付けます（`09/10/25`や
/// `+2025-10-09`は日付ではありません）。
pub fn parse_date_str(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    DATE_FORMATS
        .iter()
        .zip(DATE_SHAPES)
        .filter(|(_, (sep, year_first))| has_date_shape(trimmed, *sep, *year_first))
        .find_map(|(fmt, _)| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// 区切り文字で3つの数字フィールドに分かれ、桁数が書式どおりかを判定
///
/// chronoの`%Y`は任意桁数と符号を受け付けるため、解析前に形を確認する。
fn has_date_shape(s: &str, sep: char, year_first: bool) -> bool {
    let fields: Vec<&str> = s.split(sep).collect();
    let [a, b, c] = fields.as_slice() else {
        return false;
    };
    let (year, day_month) = if year_first { (*a, [*b, *c]) } else { (*c, [*a, *b]) };

    let is_digits = |f: &str| !f.is_empty() && f.bytes().all(|ch| ch.is_ascii_digit());
    is_digits(year)
        && year.len() == 4
        && day_month.iter().all(|&f| is_digits(f) && f.len() <= 2)
}
