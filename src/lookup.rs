//! Lookup Builder Module
//!
//! 参照シート（メールアドレス → 値）を辞書に変換するモジュール。
//! ロスターシートとの結合に使用します。

use std::collections::HashMap;

use tracing::debug;

use crate::api::LookupLayout;
use crate::types::{cell_at, CellValue, Sheet};

/// メールアドレス（前後の空白を除去済み）から値への辞書
///
/// 同じメールアドレスが複数回現れた場合は後の行が優先されます。
/// 照合は大文字・小文字を区別する完全一致です。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupMap {
    entries: HashMap<String, CellValue>,
}

impl LookupMap {
    /// 参照シートから辞書を構築
    ///
    /// # 引数
    ///
    /// * `sheet` - 参照シート（行0はヘッダーとしてスキップ）
    /// * `layout` - メールアドレス列と値列の位置
    ///
    /// # 処理
    ///
    /// - 設定された列を含まない短い行はスキップ
    /// - メールアドレスが空の行はスキップ
    /// - 既存のキーは上書き
    pub fn from_sheet(sheet: &Sheet, layout: &LookupLayout) -> Self {
        let min_len = layout.email_col.max(layout.value_col) + 1;
        let mut entries = HashMap::new();

        for row in sheet.data_rows() {
            if row.len() < min_len {
                continue;
            }

            let email = cell_at(row, layout.email_col).display_string();
            let email = email.trim();
            if email.is_empty() {
                continue;
            }

            entries.insert(email.to_string(), cell_at(row, layout.value_col).clone());
        }

        debug!(sheet = %sheet.name, entries = entries.len(), "lookup built");
        Self { entries }
    }

    /// メールアドレスに対応する値を取得
    pub fn get(&self, email: &str) -> Option<&CellValue> {
        self.entries.get(email)
    }

    /// 登録件数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
