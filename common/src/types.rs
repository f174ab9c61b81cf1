//! 단어 시험 데이터 타입
//!
//! - WordPair: 영어 단어와 한국어 뜻 한 쌍
//! - TestResult: 시험 1회분의 결과 (단어, 답안, 채점표)
//! - GradeMark: 채점표 마지막 열의 채점 기호

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// 영어 단어와 한국어 뜻
///
/// 생성 시 양쪽 모두 앞뒤 공백이 제거된다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    pub eng: String,
    pub kor: String,
}

impl WordPair {
    pub fn new(eng: impl AsRef<str>, kor: impl AsRef<str>) -> Self {
        Self {
            eng: eng.as_ref().trim().to_string(),
            kor: kor.as_ref().trim().to_string(),
        }
    }
}

impl std::fmt::Display for WordPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.eng, self.kor)
    }
}

/// 시험 결과
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestResult {
    pub words: Vec<WordPair>,

    /// 영어 단어 → 제출한 답
    #[serde(default)]
    pub user_answers: BTreeMap<String, String>,

    /// 채점 결과 (마크다운 표 원문)
    #[serde(alias = "gpt_result")]
    pub grading_result: String,

    /// 단어 파일 이름 (확장자 제외)
    pub date_str: String,

    /// 맞힌 개수
    #[serde(default)]
    pub score: Option<u32>,
}

impl TestResult {
    pub fn new(
        words: Vec<WordPair>,
        user_answers: BTreeMap<String, String>,
        grading_result: String,
        date_str: impl Into<String>,
    ) -> Self {
        Self {
            words,
            user_answers,
            grading_result,
            date_str: date_str.into(),
            score: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 채점 기호
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeMark {
    /// O: 정답
    #[serde(rename = "O")]
    Correct,
    /// X: 오답
    #[serde(rename = "X")]
    Incorrect,
    /// ?: 수동 확인 필요
    #[serde(rename = "?")]
    Manual,
    /// -: 채점 오류
    #[serde(rename = "-")]
    Error,
}

impl GradeMark {
    pub fn symbol(&self) -> &'static str {
        match self {
            GradeMark::Correct => "O",
            GradeMark::Incorrect => "X",
            GradeMark::Manual => "?",
            GradeMark::Error => "-",
        }
    }

    /// 셀 값에서 채점 기호를 읽는다. 알 수 없는 값이면 None
    pub fn from_cell(cell: &str) -> Option<Self> {
        cell.parse().ok()
    }
}

impl FromStr for GradeMark {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "O" => Ok(GradeMark::Correct),
            "X" => Ok(GradeMark::Incorrect),
            "?" => Ok(GradeMark::Manual),
            "-" => Ok(GradeMark::Error),
            other => Err(Error::Parse(format!("알 수 없는 채점 기호: {}", other))),
        }
    }
}

impl std::fmt::Display for GradeMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
