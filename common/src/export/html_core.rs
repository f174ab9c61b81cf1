//! HTML 리포트
//!
//! 채점 열을 색으로 구분한다 (초록=O, 빨강=X, 노랑=?).

use super::{report_title, TIMESTAMP_FORMAT};
use crate::score::ScoreSummary;
use crate::table::parse_md_table;
use crate::types::{GradeMark, TestResult};
use chrono::NaiveDateTime;

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; margin: 20px; }
        table { border-collapse: collapse; width: 100%; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; }
        .correct { background-color: #d4edda; }
        .incorrect { background-color: #f8d7da; }
        .manual { background-color: #fff3cd; }
        .header { margin-bottom: 20px; }
        .legend { margin-top: 20px; font-size: 0.9em; }
"#;

/// HTML 특수문자 이스케이프
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn grade_class(cell: &str) -> Option<&'static str> {
    match GradeMark::from_cell(cell)? {
        GradeMark::Correct => Some("correct"),
        GradeMark::Incorrect => Some("incorrect"),
        GradeMark::Manual => Some("manual"),
        GradeMark::Error => None,
    }
}

/// HTML 리포트 생성
pub fn render_html_report(result: &TestResult, now: NaiveDateTime) -> String {
    let table = parse_md_table(&result.grading_result);
    let summary = ScoreSummary::from_rows(&table.rows);
    let title = escape_html(&report_title(&result.date_str));

    let mut html = format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{STYLE}    </style>
</head>
<body>
    <div class="header">
        <h1>{title}</h1>
        <p>시험 일시: {}</p>
"#,
        now.format(TIMESTAMP_FORMAT)
    );

    if summary.has_manual() {
        html.push_str(&format!(
            "        <p>자동 채점: {}/{}점</p>\n        <p>수동 확인 필요: {}개</p>\n",
            summary.correct, summary.auto_total, summary.manual_count
        ));
    } else {
        html.push_str(&format!(
            "        <p>점수: {}/{}점 ({:.1}%)</p>\n",
            summary.correct, summary.total, summary.percentage
        ));
    }

    html.push_str("    </div>\n    <table>\n        <tr>\n");
    for col in &table.header {
        html.push_str(&format!("            <th>{}</th>\n", escape_html(col)));
    }
    html.push_str("        </tr>\n");

    for row in &table.rows {
        html.push_str("        <tr>\n");
        for (i, cell) in row.iter().enumerate() {
            let class = if i + 1 == row.len() { grade_class(cell) } else { None };
            match class {
                Some(class) => html.push_str(&format!(
                    "            <td class=\"{}\">{}</td>\n",
                    class,
                    escape_html(cell)
                )),
                None => html.push_str(&format!("            <td>{}</td>\n", escape_html(cell))),
            }
        }
        html.push_str("        </tr>\n");
    }

    html.push_str(
        r#"    </table>
    <div class="legend">
        <p><strong>범례:</strong></p>
        <p><span style="background-color: #d4edda; padding: 2px 6px;">초록</span> = 정답 (O)</p>
        <p><span style="background-color: #f8d7da; padding: 2px 6px;">빨강</span> = 오답 (X)</p>
"#,
    );

    if summary.has_manual() {
        html.push_str("        <p><span style=\"background-color: #fff3cd; padding: 2px 6px;\">노랑</span> = 수동 확인 필요 (?)</p>\n");
    }

    html.push_str("    </div>\n</body>\n</html>\n");
    html
}
