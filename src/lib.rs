//! xlsxroster - Attendance grids and weekly lecture schedules from roster workbooks
//!
//! このクレートは、学生名簿のワークブック（出席表、講義日の参照シート、
//! 講義タイトルの参照シート）から、テキスト形式のレポートを生成します。
//!
//! - HTML出席表（固定15列）
//! - Markdown出席表（ヘッダーの日付列を自動検出）
//! - 週間講義スケジュール（Markdown）
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xlsxroster::{ReportBuilder, ReportKind, WorkbookReader};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // デフォルト設定（Agile / Narzędzia シート）
//!     let reporter = ReportBuilder::new().build()?;
//!
//!     let mut workbook = WorkbookReader::open_path("roster.xlsx")?;
//!
//!     // Agile_weekly_schedule.txt, Narzędzia_weekly_schedule.txt を出力
//!     reporter.run(ReportKind::WeeklySchedule, &mut workbook)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Render to String
//!
//! ```rust,no_run
//! use xlsxroster::{ReportBuilder, ReportKind, WorkbookReader};
//!
//! # fn main() -> Result<(), xlsxroster::RosterError> {
//! let reporter = ReportBuilder::new().build()?;
//! let mut workbook = WorkbookReader::open_path("roster.xlsx")?;
//! let html = reporter.render(ReportKind::HtmlTable, &mut workbook, "Agile")?;
//! println!("{}", html);
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Schedule
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use xlsxroster::{ReportBuilder, ScheduleConfig};
//!
//! # fn main() -> Result<(), xlsxroster::RosterError> {
//! let reporter = ReportBuilder::new()
//!     .with_roster_sheets(["Agile"])
//!     .with_schedule(ScheduleConfig {
//!         start_date: NaiveDate::from_ymd_opt(2026, 2, 26).unwrap(),
//!         week_interval_days: 7,
//!         duration_months: 3,
//!     })
//!     .with_output_dir("reports")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod dates;
mod error;
mod lookup;
mod output;
mod parser;
mod schedule;
mod security;
mod types;

// 公開API
pub use api::{
    AttendanceLayout, LookupLayout, ReportKind, RosterLayout, ScheduleConfig, DATE_SHEET_SUFFIX,
    DEFAULT_ROSTER_SHEETS, TITLE_SHEET_SUFFIX,
};
pub use builder::{ReportBuilder, ReportSettings, Reporter};
pub use dates::{is_date_like, parse_date, parse_date_str, DATE_FORMATS};
pub use error::RosterError;
pub use lookup::LookupMap;
pub use output::OutputFormatter;
pub use parser::WorkbookReader;
pub use schedule::{collect_lectures, compose_schedule, render_schedule, LectureEvent};
pub use types::{CellValue, Row, Sheet};
