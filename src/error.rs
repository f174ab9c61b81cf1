use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("API 키가 설정되지 않았습니다. `word-quiz config --set-api-key YOUR_KEY` 로 설정해주세요")]
    MissingApiKey,

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("폴더를 찾을 수 없습니다: {0}")]
    FolderNotFound(String),

    #[error("단어를 추출할 수 없습니다: {0}")]
    NoWordsFound(String),

    #[error("API 호출 오류: {0}")]
    ApiCall(String),

    #[error("API 응답 해석 실패: {0}")]
    ApiParse(String),

    #[error("입력 오류: {0}")]
    Prompt(String),

    #[error("사용자가 취소했습니다")]
    Cancelled,

    #[error("HTTP 오류: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON 해석 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] word_quiz_common::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
