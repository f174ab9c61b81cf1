//! Report rendering shared by the CLI save/export paths.

pub mod markdown_core;
pub mod html_core;

pub use markdown_core::render_markdown_report;
pub use html_core::render_html_report;

/// 시험 일시 표시 형식
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 리포트 제목
pub fn report_title(date_str: &str) -> String {
    format!("영어 단어 시험 결과 - {}", date_str)
}
