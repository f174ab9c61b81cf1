//! 영어 단어 시험 · AI 채점 도구
//!
//! 단어 파일 → 시험 → 채점 → 결과 표시/저장 흐름의 CLI 쪽 구현.
//! 파싱과 점수 계산은 `word_quiz_common` 에 있다.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod grader;
pub mod logging;
pub mod quiz;
pub mod scanner;
pub mod selector;
