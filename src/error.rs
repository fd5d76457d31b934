//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// xlsxrosterクレート全体で使用するエラー型
///
/// ワークブックの読み込み、シートの解決、レポート生成、ファイル書き込みの
/// 途中で発生するすべてのエラーを統一的に扱うために使用されます。
///
/// 短い行や解析できない日付文字列はエラーではありません。
/// それらは「値なし」として扱われ、このエラー型には現れません。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxroster::RosterError;
/// use std::fs::File;
///
/// fn open_roster(path: &str) -> Result<(), RosterError> {
///     let _file = File::open(path)?;  // Ioエラーが自動的に変換される
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum RosterError {
    /// I/O操作中に発生したエラー
    ///
    /// 入力ファイルの読み込み失敗や出力ファイルの書き込み失敗など。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ワークブックの解析中に発生したエラー（calamine由来）
    #[error("Failed to parse Excel file: {0}")]
    Parse(#[from] calamine::Error),

    /// 必要なシートがワークブックに存在しない
    ///
    /// ロスターシート、`-daty`シート、`-tematy`シートのいずれかが
    /// 見つからない場合に発生します。CLIではこのエラーで終了コード1になります。
    #[error("Sheet '{0}' not found in the Excel file.")]
    SheetNotFound(String),

    /// 設定の検証に失敗したエラー
    ///
    /// `ReportBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。例えば、出席列の範囲の開始が終了より大きい場合や、
    /// 週の間隔が0日の場合などです。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use xlsxroster::{ReportBuilder, RosterError};
    ///
    /// let result = ReportBuilder::new()
    ///     .with_roster_sheets(Vec::<String>::new())
    ///     .build();
    ///
    /// match result {
    ///     Err(RosterError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON設定ファイルの解析エラー
    #[error("Invalid configuration file: {0}")]
    ConfigFile(#[from] serde_json::Error),

    /// 入力サイズ制限に違反したエラー
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}
