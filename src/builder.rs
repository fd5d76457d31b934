//! Builder Module
//!
//! Fluent Builder APIを提供し、`Reporter`インスタンスを段階的に構築する。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::{
    AttendanceLayout, LookupLayout, ReportKind, RosterLayout, ScheduleConfig,
    DATE_SHEET_SUFFIX, DEFAULT_ROSTER_SHEETS, TITLE_SHEET_SUFFIX,
};
use crate::error::RosterError;
use crate::lookup::LookupMap;
use crate::output::OutputFormatter;
use crate::parser::WorkbookReader;
use crate::schedule::compose_schedule;

/// レポート生成の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ReportConfig {
    /// 処理するロスターシート名
    pub roster_sheets: Vec<String>,

    /// 出席表のレイアウト
    pub attendance: AttendanceLayout,

    /// 参照シートのレイアウト
    pub lookup: LookupLayout,

    /// ロスターシートのレイアウト（スケジュール用）
    pub roster: RosterLayout,

    /// 週間スケジュールの設定
    pub schedule: ScheduleConfig,

    /// 出力ディレクトリ
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            roster_sheets: DEFAULT_ROSTER_SHEETS.iter().map(|s| s.to_string()).collect(),
            attendance: AttendanceLayout::default(),
            lookup: LookupLayout::default(),
            roster: RosterLayout::default(),
            schedule: ScheduleConfig::default(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// JSON設定ファイルの内容
///
/// すべての項目は省略可能で、省略された項目はデフォルト値のままです。
///
/// ```json
/// {
///   "roster_sheets": ["Agile"],
///   "schedule": { "start_date": "06.10.2025", "duration_months": 3 },
///   "lookup": { "email_col": 2, "value_col": 4 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    pub roster_sheets: Option<Vec<String>>,
    pub attendance: Option<AttendanceLayout>,
    pub lookup: Option<LookupLayout>,
    pub roster: Option<RosterLayout>,
    pub schedule: Option<ScheduleConfig>,
    pub output_dir: Option<PathBuf>,
}

impl ReportSettings {
    /// JSON文字列から設定を読み込む
    pub fn from_json_str(json: &str) -> Result<Self, RosterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSONファイルから設定を読み込む
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxroster::{ReportBuilder, ScheduleConfig};
///
/// # fn main() -> Result<(), xlsxroster::RosterError> {
/// let reporter = ReportBuilder::new()
///     .with_roster_sheets(["Agile"])
///     .with_schedule(ScheduleConfig::default())
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ReportBuilder {
    /// 内部設定（構築中）
    config: ReportConfig,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - ロスターシート: `Agile`, `Narzędzia`
    /// - 識別子列: C、出席列: G〜U
    /// - 参照シート: メールC列、値E列
    /// - ロスター: 名A列、姓B列、メールD列、英語フラグF列
    /// - スケジュール: 2025-10-09開始、7日間隔、4か月
    /// - 出力先: カレントディレクトリ
    pub fn new() -> Self {
        Self {
            config: ReportConfig::default(),
        }
    }

    /// 処理するロスターシートを指定する
    pub fn with_roster_sheets<I, S>(mut self, sheets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.roster_sheets = sheets.into_iter().map(Into::into).collect();
        self
    }

    /// 出席表のレイアウトを指定する
    pub fn with_attendance_layout(mut self, layout: AttendanceLayout) -> Self {
        self.config.attendance = layout;
        self
    }

    /// 参照シート（`-daty` / `-tematy`）のレイアウトを指定する
    pub fn with_lookup_layout(mut self, layout: LookupLayout) -> Self {
        self.config.lookup = layout;
        self
    }

    /// ロスターシートのレイアウトを指定する
    pub fn with_roster_layout(mut self, layout: RosterLayout) -> Self {
        self.config.roster = layout;
        self
    }

    /// 週間スケジュールの設定を指定する
    pub fn with_schedule(mut self, schedule: ScheduleConfig) -> Self {
        self.config.schedule = schedule;
        self
    }

    /// 出力ディレクトリを指定する
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// 設定ファイルの内容を適用する（指定された項目のみ上書き）
    pub fn with_settings(mut self, settings: ReportSettings) -> Self {
        if let Some(sheets) = settings.roster_sheets {
            self.config.roster_sheets = sheets;
        }
        if let Some(attendance) = settings.attendance {
            self.config.attendance = attendance;
        }
        if let Some(lookup) = settings.lookup {
            self.config.lookup = lookup;
        }
        if let Some(roster) = settings.roster {
            self.config.roster = roster;
        }
        if let Some(schedule) = settings.schedule {
            self.config.schedule = schedule;
        }
        if let Some(output_dir) = settings.output_dir {
            self.config.output_dir = output_dir;
        }
        self
    }

    /// 設定を検証し、`Reporter`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `RosterError::Config(String)`: 設定の検証に失敗した場合
    ///   * ロスターシートが指定されていない、または空のシート名
    ///   * 出席列の開始が終了より大きい
    ///   * 週の間隔が0日、または期間が0か月
    pub fn build(self) -> Result<Reporter, RosterError> {
        // 1. ロスターシートの検証
        if self.config.roster_sheets.is_empty() {
            return Err(RosterError::Config(
                "At least one roster sheet is required".to_string(),
            ));
        }
        if self.config.roster_sheets.iter().any(|s| s.trim().is_empty()) {
            return Err(RosterError::Config(
                "Roster sheet name must not be empty".to_string(),
            ));
        }

        // 2. 出席列の範囲の検証
        let attendance = &self.config.attendance;
        if attendance.first_attendance_col > attendance.last_attendance_col {
            return Err(RosterError::Config(format!(
                "Invalid attendance range: first col ({}) > last col ({})",
                attendance.first_attendance_col, attendance.last_attendance_col
            )));
        }

        // 3. スケジュール設定の検証
        let schedule = &self.config.schedule;
        if schedule.week_interval_days == 0 {
            return Err(RosterError::Config(
                "Week interval must be at least 1 day".to_string(),
            ));
        }
        if schedule.duration_months == 0 {
            return Err(RosterError::Config(
                "Schedule duration must be at least 1 month".to_string(),
            ));
        }

        Ok(Reporter {
            config: self.config,
        })
    }
}

/// レポート生成のファサード
///
/// ワークブックから出席表・週間スケジュールを生成し、ファイルに書き出します。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxroster::{ReportBuilder, ReportKind, WorkbookReader};
///
/// # fn main() -> Result<(), xlsxroster::RosterError> {
/// let reporter = ReportBuilder::new().build()?;
/// let mut workbook = WorkbookReader::open_path("roster.xlsx")?;
/// let written = reporter.run(ReportKind::WeeklySchedule, &mut workbook)?;
/// println!("{} files written", written.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    /// 処理対象のロスターシート名
    pub fn roster_sheets(&self) -> &[String] {
        &self.config.roster_sheets
    }

    /// 出力ディレクトリ
    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    /// 1つのロスターシートについてレポート文字列を生成
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - レポート本文。Markdown出席表で日付列がない場合は空文字列
    /// * `Err(RosterError::SheetNotFound)` - 必要なシートが存在しない場合
    pub fn render(
        &self,
        kind: ReportKind,
        workbook: &mut WorkbookReader,
        sheet_name: &str,
    ) -> Result<String, RosterError> {
        match OutputFormatter::from_kind(kind) {
            Some(formatter) => {
                let sheet = workbook.read_sheet(sheet_name)?;
                formatter.render_to_string(&sheet, &self.config.attendance)
            }
            None => self.render_schedule(workbook, sheet_name),
        }
    }

    /// 週間スケジュールを生成
    ///
    /// `<sheet>`、`<sheet>-daty`、`<sheet>-tematy`の3シートを使用します。
    pub fn render_schedule(
        &self,
        workbook: &mut WorkbookReader,
        sheet_name: &str,
    ) -> Result<String, RosterError> {
        let roster = workbook.read_sheet(sheet_name)?;
        let date_sheet = workbook.read_sheet(&format!("{}{}", sheet_name, DATE_SHEET_SUFFIX))?;
        let title_sheet = workbook.read_sheet(&format!("{}{}", sheet_name, TITLE_SHEET_SUFFIX))?;

        let dates = LookupMap::from_sheet(&date_sheet, &self.config.lookup);
        let titles = LookupMap::from_sheet(&title_sheet, &self.config.lookup);

        Ok(compose_schedule(
            &roster,
            &dates,
            &titles,
            &self.config.roster,
            &self.config.schedule,
        ))
    }

    /// すべてのロスターシートについてレポートを生成し、ファイルに書き出す
    ///
    /// すべてのシートのレポートを生成してから書き出すため、途中のシートで
    /// エラーになった場合はファイルを1つも書き出しません。
    /// 出力ファイルは既存の内容を上書きします。空のレポートは書き出しません。
    ///
    /// # 戻り値
    ///
    /// * `Ok(Vec<PathBuf>)` - 書き出したファイルのパス
    /// * `Err(RosterError)` - シートが見つからない、または書き込みに失敗した場合
    pub fn run(
        &self,
        kind: ReportKind,
        workbook: &mut WorkbookReader,
    ) -> Result<Vec<PathBuf>, RosterError> {
        let mut reports = Vec::with_capacity(self.config.roster_sheets.len());

        for sheet_name in &self.config.roster_sheets {
            let report = self.render(kind, workbook, sheet_name)?;
            if report.is_empty() {
                info!(sheet = %sheet_name, "nothing to write");
                continue;
            }

            let path = self.config.output_dir.join(kind.output_file_name(sheet_name));
            reports.push((path, report));
        }

        let mut written = Vec::with_capacity(reports.len());
        for (path, report) in reports {
            fs::write(&path, report)?;
            info!("Saved {}: {}", kind.label(), path.display());
            written.push(path);
        }

        Ok(written)
    }
}
