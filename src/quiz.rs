//! 대화식 단어 시험
//!
//! 단어마다 뜻을 입력받아 영어 단어 → 답 맵을 만든다.
//! `:q` 를 입력하면 시험을 중단하고 채점하지 않는다.

use crate::error::{QuizError, Result};
use dialoguer::Input;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;
use word_quiz_common::WordPair;

/// 시험 중단 명령
pub const ABORT_COMMAND: &str = ":q";

/// 한 문제에 대한 입력
pub enum QuizAction {
    /// 답 입력 (빈 답 허용)
    Answer(String),
    /// 시험 중단
    Abort,
}

pub fn shuffle_words(words: &mut [WordPair]) {
    words.shuffle(&mut rand::thread_rng());
}

/// 각 단어에 대해 `ask`를 호출해 답을 모은다
///
/// 중단되면 `None`. 같은 영어 단어가 여러 번 나오면 마지막 답이 남는다.
pub fn collect_answers<F>(words: &[WordPair], mut ask: F) -> Result<Option<BTreeMap<String, String>>>
where
    F: FnMut(usize, &WordPair) -> Result<QuizAction>,
{
    let mut answers = BTreeMap::new();

    for (idx, word) in words.iter().enumerate() {
        match ask(idx, word)? {
            QuizAction::Answer(answer) => {
                answers.insert(word.eng.clone(), answer.trim().to_string());
            }
            QuizAction::Abort => {
                tracing::info!("시험 중단: {}/{}번째 문제", idx + 1, words.len());
                return Ok(None);
            }
        }
    }

    Ok(Some(answers))
}

/// 터미널에서 시험 진행
pub fn run_interactive_quiz(words: &[WordPair]) -> Result<Option<BTreeMap<String, String>>> {
    println!("📝 단어 시험: {}문제", words.len());
    println!("---");
    println!("뜻을 입력하고 Enter. 모르면 빈 칸으로 넘어가세요. [{}] 중단", ABORT_COMMAND);
    println!("---\n");

    let total = words.len();
    collect_answers(words, |idx, word| prompt_answer(idx, total, word))
}

fn prompt_answer(idx: usize, total: usize, word: &WordPair) -> Result<QuizAction> {
    let input: String = Input::new()
        .with_prompt(format!("[{}/{}] {}", idx + 1, total, word.eng))
        .allow_empty(true)
        .interact_text()
        .map_err(|e| QuizError::Prompt(e.to_string()))?;

    Ok(parse_action(&input))
}

fn parse_action(input: &str) -> QuizAction {
    match input.trim() {
        ABORT_COMMAND => QuizAction::Abort,
        answer => QuizAction::Answer(answer.to_string()),
    }
}
