//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use chrono::NaiveDateTime;

/// セルの値を表す列挙型
///
/// ワークブックのセルは文字列・数値・日時・空のいずれかを取り得ます。
/// 各利用箇所（真偽判定、文字列化、日付判定）で明示的に変換します。
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 文字列
    Text(String),

    /// 数値（f64）
    Number(f64),

    /// 論理値
    Bool(bool),

    /// 日時（日付書式のセル）
    DateTime(NaiveDateTime),

    /// エラー値（例: #DIV/0!）
    Error(String),

    /// 空セル
    Empty,
}

impl CellValue {
    /// 値が空かどうかを判定
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// 値が「真」として扱われるかを判定
    ///
    /// 出席マーカー（`+`）や識別子の有無の判定に使用します。
    /// 空セル、空文字列、0、`false`は偽。それ以外はすべて真です
    /// （空白のみの文字列も真として扱います）。
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Number(n) => *n != 0.0,
            CellValue::Bool(b) => *b,
            CellValue::DateTime(_) | CellValue::Error(_) => true,
        }
    }

    /// 値を表示用の文字列として取得
    ///
    /// 整数値の数値は小数部なしで出力します（例: `12345.0` -> `"12345"`）。
    pub fn display_string(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => b.to_string(),
            CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            CellValue::Error(e) => e.clone(),
            CellValue::Empty => String::new(),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// 1行分のセル値（列位置はシート上の絶対位置）
pub type Row = Vec<CellValue>;

/// 行から列の値を取得する。行が短い場合は空セルとして扱う。
pub(crate) fn cell_at(row: &[CellValue], col: usize) -> &CellValue {
    const EMPTY: &CellValue = &CellValue::Empty;
    row.get(col).unwrap_or(EMPTY)
}

/// 読み込まれたシート
///
/// 行0はシートの1行目（ヘッダー行）に対応します。
/// すべての行はシートの使用幅と同じ長さを持ちます。
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// シート名
    pub name: String,

    /// 行データ
    pub rows: Vec<Row>,
}

impl Sheet {
    /// 新しいシートを生成
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// ヘッダー行（行0）を取得
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// ヘッダー行を除いたデータ行を取得
    pub fn data_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().skip(1)
    }
}
