//! 채점 서비스
//!
//! 원격 API로 채점하고, 실패하면 로컬 대체 채점표를 만든다.
//! 어떤 경우에도 `parse_md_table`로 읽을 수 있는 표 문자열을 돌려준다.
//!
//! - API 키 없음: 정확히 일치하면 O, 빈 답은 X, 나머지는 ?
//! - 호출 실패/취소: 모든 채점 칸이 `-` + 오류 안내

pub mod openai;

use crate::config::{is_usable_api_key, OpenAiConfig};
use crate::error::{QuizError, Result};
use openai::OpenAiClient;
use std::collections::BTreeMap;
use std::future::Future;
use word_quiz_common::{
    build_error_fallback_result, build_grading_prompt, build_manual_grading_result, WordPair,
};

/// 채점 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradingMode {
    /// 원격 API 채점
    Remote,
    /// API 키가 없어 로컬 채점
    Manual,
}

pub struct GradingService {
    client: Option<OpenAiClient>,
}

impl GradingService {
    /// API 키는 호출하는 쪽에서 결정해서 넘긴다
    pub fn new(settings: &OpenAiConfig, api_key: Option<String>) -> Result<Self> {
        let client = match api_key.filter(|key| is_usable_api_key(key)) {
            Some(key) => Some(OpenAiClient::new(settings, key)?),
            None => None,
        };
        Ok(Self { client })
    }

    pub fn mode(&self) -> GradingMode {
        if self.client.is_some() {
            GradingMode::Remote
        } else {
            GradingMode::Manual
        }
    }

    /// 채점 (취소 없음)
    pub async fn grade_test(&self, words: &[WordPair], answers: &BTreeMap<String, String>) -> String {
        self.grade_test_with_cancel(words, answers, std::future::pending::<()>())
            .await
    }

    /// 채점 (`cancel`이 먼저 끝나면 요청을 버리고 오류 대체표 반환)
    pub async fn grade_test_with_cancel<C>(
        &self,
        words: &[WordPair],
        answers: &BTreeMap<String, String>,
        cancel: C,
    ) -> String
    where
        C: Future,
    {
        let Some(client) = &self.client else {
            tracing::warn!("API 키가 설정되지 않았습니다. 수동 채점용 결과를 생성합니다.");
            return build_manual_grading_result(words, answers);
        };

        let prompt = build_grading_prompt(words, answers);
        let outcome = tokio::select! {
            biased;
            _ = cancel => Err(QuizError::Cancelled),
            result = client.complete(&prompt) => result,
        };

        match outcome {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("채점 중 오류 발생: {}", e);
                build_error_fallback_result(words, answers, &e.to_string())
            }
        }
    }

    /// API 키 확인용 요청
    pub async fn check_connection(&self) -> Result<String> {
        let client = self.client.as_ref().ok_or(QuizError::MissingApiKey)?;
        client.complete("Reply with the single word: OK").await
    }
}
