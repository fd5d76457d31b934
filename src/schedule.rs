//! Schedule Composer Module
//!
//! ロスターシートと参照シート（日付・タイトル）をメールアドレスで結合し、
//! 週ごとの講義スケジュールをMarkdownで生成するモジュール。

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::api::{RosterLayout, ScheduleConfig};
use crate::dates::parse_date;
use crate::lookup::LookupMap;
use crate::types::{cell_at, Sheet};

/// 講義イベント
///
/// 日付とタイトルの両方が解決できた学生についてのみ生成されます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LectureEvent {
    /// 講義日
    pub date: NaiveDate,

    /// 講義タイトル（前後の空白を除去済み）
    pub title: String,

    /// 発表者のフルネーム（名 + 姓）
    pub presenter: String,

    /// 英語で行われる講義か
    pub english: bool,
}

/// ロスターシートから講義イベントを収集
///
/// # 引数
///
/// * `roster` - ロスターシート（行0はヘッダー）
/// * `dates` - メールアドレス → 講義日
/// * `titles` - メールアドレス → 講義タイトル
/// * `layout` - ロスターシートの列配置
///
/// # 戻り値
///
/// 日付の昇順に並んだ講義イベント。同じ日付のイベントはロスターの出現順を保ちます。
pub fn collect_lectures(
    roster: &Sheet,
    dates: &LookupMap,
    titles: &LookupMap,
    layout: &RosterLayout,
) -> Vec<LectureEvent> {
    let mut lectures = Vec::new();

    for row in roster.data_rows() {
        let email = cell_at(row, layout.email_col).display_string();
        let email = email.trim();
        if email.is_empty() {
            continue;
        }

        let Some(date) = dates.get(email).and_then(parse_date) else {
            continue;
        };

        let title = titles
            .get(email)
            .map(|value| value.display_string().trim().to_string())
            .unwrap_or_default();
        if title.is_empty() {
            continue;
        }

        let name = cell_at(row, layout.name_col).display_string();
        let surname = cell_at(row, layout.surname_col).display_string();
        let english = cell_at(row, layout.english_col)
            .display_string()
            .trim()
            .to_lowercase()
            == "yes";

        lectures.push(LectureEvent {
            date,
            title,
            presenter: format!("{} {}", name, surname).trim().to_string(),
            english,
        });
    }

    // Vec::sort_by_key は安定ソート
    lectures.sort_by_key(|lecture| lecture.date);

    debug!(sheet = %roster.name, lectures = lectures.len(), "lectures collected");
    lectures
}

/// 講義イベントから週間スケジュールを生成
///
/// 開始日から`week_interval_days`日ごとに、終了日（開始日 + 30 × 月数）まで
/// 1週につき1段落を出力します。同じ日に複数の講義がある場合は講義ごとに
/// 1段落です。講義番号は実行全体で通し番号になり、講義のない週では進みません。
pub fn render_schedule(lectures: &[LectureEvent], config: &ScheduleConfig) -> String {
    let mut md = String::new();
    let end_date = config.end_date();
    let step = Days::new(u64::from(config.week_interval_days));
    let mut current = config.start_date;
    let mut lecture_number = 1;

    while current <= end_date {
        let display_date = current.format("%d.%m.%Y");
        let mut week_lectures = lectures.iter().filter(|lecture| lecture.date == current).peekable();

        if week_lectures.peek().is_none() {
            md.push_str(&format!(
                "{} - **Wykład nie odbędzie się**\n\n",
                display_date
            ));
        }

        for lecture in week_lectures {
            if lecture.english {
                md.push_str(&format!(
                    "{} – Lecture {}: **{}** – *{}* (open lecture) *Lecture will be held in English*\n\n",
                    display_date, lecture_number, lecture.title, lecture.presenter
                ));
            } else {
                md.push_str(&format!(
                    "{} – Wykład {}: **{}** – *{}* (wykład otwarty)\n\n",
                    display_date, lecture_number, lecture.title, lecture.presenter
                ));
            }
            lecture_number += 1;
        }

        match current.checked_add_days(step) {
            Some(next) if next > current => current = next,
            _ => break,
        }
    }

    md
}

/// ロスターと参照シートから週間スケジュールを生成
pub fn compose_schedule(
    roster: &Sheet,
    dates: &LookupMap,
    titles: &LookupMap,
    layout: &RosterLayout,
    config: &ScheduleConfig,
) -> String {
    let lectures = collect_lectures(roster, dates, titles, layout);
    render_schedule(&lectures, config)
}
