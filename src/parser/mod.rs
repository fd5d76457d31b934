//! Parser Module
//!
//! calamineを使用したワークブック読み込みの実装。
//! シートを絶対位置の行データ（`Sheet`）として取り出します。

mod workbook;

pub use workbook::WorkbookReader;
