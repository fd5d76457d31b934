//! Workbook Reader
//!
//! calamineのラッパーとして、名前付きシートを行データとして提供します。

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::debug;

use crate::error::RosterError;
use crate::security::SecurityConfig;
use crate::types::{CellValue, Row, Sheet};

/// ワークブックリーダー
///
/// 入力全体をメモリに読み込み、calamineで開きます。
/// XLSX / XLS / XLSB / ODS のいずれも扱えます。
pub struct WorkbookReader {
    /// calamineのワークブック
    workbook: Sheets<Cursor<Vec<u8>>>,
}

impl WorkbookReader {
    /// ワークブックを開く
    ///
    /// # 引数
    ///
    /// * `reader` - ワークブックのバイト列を読み込むためのリーダー
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookReader)` - ワークブックの読み込みに成功した場合
    /// * `Err(RosterError::SecurityViolation)` - 入力サイズが上限を超えた場合
    /// * `Err(RosterError::Parse)` - ワークブックとして解析できなかった場合
    pub fn open<R: Read>(mut reader: R) -> Result<Self, RosterError> {
        let security_config = SecurityConfig::default();

        let mut buffer = Vec::new();
        let bytes_read = reader.read_to_end(&mut buffer)?;
        security_config.check_input_size(bytes_read as u64)?;

        let workbook = open_workbook_auto_from_rs(Cursor::new(buffer))?;
        Ok(Self { workbook })
    }

    /// パスを指定してワークブックを開く
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let file = File::open(path.as_ref())?;
        Self::open(file)
    }

    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// 指定した名前のシートが存在するか
    pub fn has_sheet(&self, name: &str) -> bool {
        self.workbook.sheet_names().iter().any(|s| s == name)
    }

    /// シートを読み込む
    ///
    /// # 引数
    ///
    /// * `name` - シート名（完全一致）
    ///
    /// # 戻り値
    ///
    /// * `Ok(Sheet)` - 行0がシートの1行目に対応するシートデータ
    /// * `Err(RosterError::SheetNotFound)` - シートが存在しない場合
    pub fn read_sheet(&mut self, name: &str) -> Result<Sheet, RosterError> {
        if !self.has_sheet(name) {
            return Err(RosterError::SheetNotFound(name.to_string()));
        }

        let range = self.workbook.worksheet_range(name)?;
        let rows = rows_from_range(&range);
        debug!(sheet = name, rows = rows.len(), "sheet loaded");

        Ok(Sheet::new(name, rows))
    }
}

/// calamineの範囲を絶対位置の行データに変換
///
/// calamineは先頭の空行・空列を範囲から除外するため、
/// 除外された分を空セルで埋め戻します。
fn rows_from_range(range: &Range<Data>) -> Vec<Row> {
    let (Some((start_row, start_col)), Some((_, end_col))) = (range.start(), range.end()) else {
        return Vec::new();
    };
    let width = end_col as usize + 1;

    let mut rows: Vec<Row> = (0..start_row)
        .map(|_| vec![CellValue::Empty; width])
        .collect();

    for row in range.rows() {
        let mut values = Vec::with_capacity(width);
        values.resize(start_col as usize, CellValue::Empty);
        values.extend(row.iter().map(convert_cell));
        rows.push(values);
    }

    rows
}

/// calamineのセルデータを`CellValue`に変換
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) if dt.is_duration() => CellValue::Number(dt.as_f64()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::Empty => CellValue::Empty,
    }
}

/// ISO 8601形式の日時文字列（ODS由来）を解析
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    s.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| s.parse::<NaiveDate>().ok().map(|d| d.and_time(NaiveTime::MIN)))
}
