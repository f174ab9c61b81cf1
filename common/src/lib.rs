//! Word Quiz Common Library
//!
//! 단어 파일 파싱, 채점표 파싱, 점수 집계, 리포트 렌더링 등
//! I/O 없이 문자열만 다루는 핵심 로직

pub mod types;
pub mod error;
pub mod parser;
pub mod table;
pub mod score;
pub mod prompts;
pub mod export;

pub use types::{GradeMark, TestResult, WordPair};
pub use error::{Error, Result};
pub use parser::{parse_words, HEADER_KEYWORDS};
pub use table::{extract_md_table, parse_md_table, GradingTable};
pub use score::{ScoreSummary, Statistics};
pub use prompts::{
    build_error_fallback_result, build_grading_prompt, build_manual_grading_result,
};
pub use export::{render_html_report, render_markdown_report};
