//! 마크다운/텍스트 리포트
//!
//! 시험 정보 헤더 + 채점 응답 원문

use super::{report_title, TIMESTAMP_FORMAT};
use crate::score::ScoreSummary;
use crate::table::parse_md_table;
use crate::types::TestResult;
use chrono::NaiveDateTime;

/// 리포트 헤더 생성
pub fn render_header(result: &TestResult, summary: &ScoreSummary, now: NaiveDateTime) -> String {
    let mut header = format!("# {}\n\n", report_title(&result.date_str));
    header.push_str(&format!("시험 일시: {}\n", now.format(TIMESTAMP_FORMAT)));
    header.push_str(&format!("총 문제 수: {}문제\n", result.words.len()));

    if summary.has_manual() {
        header.push_str(&format!("자동 채점: {}/{}점\n", summary.correct, summary.auto_total));
        header.push_str(&format!("수동 확인 필요: {}개\n", summary.manual_count));
        header.push_str("💡 '?' 표시된 답안은 정답과 비교하여 수동으로 채점해주세요.\n\n");
    } else {
        header.push_str(&format!(
            "점수: {}/{}점 ({:.1}%)\n\n",
            summary.correct, summary.total, summary.percentage
        ));
    }

    header
}

/// 저장용 마크다운 리포트 생성
pub fn render_markdown_report(result: &TestResult, now: NaiveDateTime) -> String {
    let table = parse_md_table(&result.grading_result);
    let summary = ScoreSummary::from_rows(&table.rows);
    render_header(result, &summary, now) + &result.grading_result
}
