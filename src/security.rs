//! Security Module
//!
//! 入力ワークブックのサイズ制限を実装するモジュール。
//! calamineに渡す前に、メモリに読み込むバイト数を制限します。

use crate::error::RosterError;

/// セキュリティ設定
#[derive(Debug, Clone)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 512MB (536_870_912 bytes)
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 536_870_912, // 512MB
        }
    }
}

impl SecurityConfig {
    /// 読み込んだバイト数が上限以内かを検証
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 上限以内の場合
    /// * `Err(RosterError::SecurityViolation)` - 上限を超えた場合
    pub fn check_input_size(&self, bytes_read: u64) -> Result<(), RosterError> {
        if bytes_read > self.max_input_file_size {
            return Err(RosterError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                bytes_read, self.max_input_file_size
            )));
        }
        Ok(())
    }
}
