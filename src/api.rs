//! Public API Types
//!
//! 公開APIで使用する設定型と列挙型を定義するモジュール。
//! シートのレイアウト（列の役割と位置）は、ロジックに埋め込まず
//! ここで名前付きの設定として表現します。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 日付シートの名前に付ける接尾辞（例: `Agile-daty`）
pub const DATE_SHEET_SUFFIX: &str = "-daty";

/// タイトルシートの名前に付ける接尾辞（例: `Agile-tematy`）
pub const TITLE_SHEET_SUFFIX: &str = "-tematy";

/// デフォルトで処理するロスターシート
pub const DEFAULT_ROSTER_SHEETS: [&str; 2] = ["Agile", "Narzędzia"];

/// 出力レポートの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportKind {
    /// 固定15列のHTML出席表
    ///
    /// # 出力例
    ///
    /// ```html
    /// <table style="width: 100%; border-collapse: collapse;">
    ///   <tr>
    ///     <th></th>
    ///     <th style="width: 5%;">1</th>
    ///   </tr>
    ///   <tr>
    ///     <td>12345</td>
    ///     <td>+</td>
    ///   </tr>
    /// </table>
    /// ```
    HtmlTable,

    /// 日付列を自動検出するMarkdown出席表
    ///
    /// # 出力例
    ///
    /// ```markdown
    /// | Nr indeksu | 2025-10-09 |
    /// | ---------- | ---------- |
    /// | 12345      | +          |
    /// ```
    MarkdownTable,

    /// 週ごとの講義スケジュール（Markdown）
    WeeklySchedule,
}

impl ReportKind {
    /// 指定したシートの出力ファイル名
    ///
    /// 出席表はシート名そのもの（`Agile.txt`）、スケジュールは
    /// 接尾辞付き（`Agile_weekly_schedule.txt`）になります。
    pub fn output_file_name(&self, sheet_name: &str) -> String {
        match self {
            ReportKind::HtmlTable | ReportKind::MarkdownTable => format!("{}.txt", sheet_name),
            ReportKind::WeeklySchedule => format!("{}_weekly_schedule.txt", sheet_name),
        }
    }

    /// ログ出力用の短い名前
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::HtmlTable => "table",
            ReportKind::MarkdownTable => "table",
            ReportKind::WeeklySchedule => "schedule",
        }
    }
}

/// 出席表シートのレイアウト
///
/// 列インデックスは0始まり（A列 = 0）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceLayout {
    /// 学生の識別子（学籍番号）の列。デフォルト: 2 (C)
    pub id_col: usize,

    /// HTML出席表の最初の出席列。デフォルト: 6 (G)
    pub first_attendance_col: usize,

    /// HTML出席表の最後の出席列（この列を含む）。デフォルト: 20 (U)
    pub last_attendance_col: usize,
}

impl Default for AttendanceLayout {
    fn default() -> Self {
        Self {
            id_col: 2,
            first_attendance_col: 6,
            last_attendance_col: 20,
        }
    }
}

impl AttendanceLayout {
    /// HTML出席表の列数
    pub fn attendance_col_count(&self) -> usize {
        (self.last_attendance_col + 1).saturating_sub(self.first_attendance_col)
    }
}

/// 参照シート（`-daty` / `-tematy`）のレイアウト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupLayout {
    /// メールアドレスの列。デフォルト: 2 (C)
    pub email_col: usize,

    /// 値（日付またはタイトル）の列。デフォルト: 4 (E)
    pub value_col: usize,
}

impl Default for LookupLayout {
    fn default() -> Self {
        Self {
            email_col: 2,
            value_col: 4,
        }
    }
}

/// ロスターシートのレイアウト（スケジュール生成用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterLayout {
    /// 名の列。デフォルト: 0 (A)
    pub name_col: usize,

    /// 姓の列。デフォルト: 1 (B)
    pub surname_col: usize,

    /// メールアドレスの列。デフォルト: 3 (D)
    pub email_col: usize,

    /// 英語講義フラグの列（`Yes`で英語）。デフォルト: 5 (F)
    pub english_col: usize,
}

impl Default for RosterLayout {
    fn default() -> Self {
        Self {
            name_col: 0,
            surname_col: 1,
            email_col: 3,
            english_col: 5,
        }
    }
}

/// 週間スケジュールの設定
///
/// 終了日は `start_date + 30 × duration_months` 日で近似します
/// （実際の月の長さは考慮しません）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// 最初の週の日付。デフォルト: 2025-10-09
    #[serde(with = "flexible_date")]
    pub start_date: NaiveDate,

    /// 週の間隔（日数）。デフォルト: 7
    pub week_interval_days: u32,

    /// 期間（月数）。デフォルト: 4
    pub duration_months: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2025, 10, 9).unwrap_or(NaiveDate::MIN),
            week_interval_days: 7,
            duration_months: 4,
        }
    }
}

impl ScheduleConfig {
    /// スケジュールの最終日（この日を含む）
    pub fn end_date(&self) -> NaiveDate {
        let days = 30 * u64::from(self.duration_months);
        self.start_date
            .checked_add_days(chrono::Days::new(days))
            .unwrap_or(NaiveDate::MAX)
    }
}

/// JSON設定ファイルの日付（認識できる4書式のいずれか）
mod flexible_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        crate::dates::parse_date_str(&s)
            .ok_or_else(|| de::Error::custom(format!("unrecognized date: '{}'", s)))
    }
}
