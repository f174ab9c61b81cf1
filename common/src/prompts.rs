//! 채점 프롬프트 / 대체 채점표 생성
//!
//! - build_grading_prompt: 원격 채점용 프롬프트
//! - build_manual_grading_result: API 키가 없을 때의 로컬 채점표
//! - build_error_fallback_result: API 호출 실패 시의 채점표
//!
//! 대체 채점표는 원격 채점 결과와 같은 열 구성을 쓰므로
//! `parse_md_table`로 그대로 읽을 수 있다.

use crate::types::{GradeMark, WordPair};
use std::collections::BTreeMap;

/// 채점표 헤더 (번호 | 영어 | 정답 | 내 답 | 채점)
pub const GRADED_TABLE_HEADER: &str = "| 번호 | 영어 | 정답 | 내 답 | 채점 |\n|---|---|---|---|---|\n";

/// 채점 전 표 헤더 (채점 열 없음)
const UNGRADED_TABLE_HEADER: &str = "| 번호 | 영어 | 정답 | 내 답 |\n|---|---|---|---|\n";

/// 답안을 표 셀에 넣을 수 있게 정리
///
/// `|`와 줄바꿈이 들어가면 표가 깨지므로 치환한다.
pub fn sanitize_cell(text: &str) -> String {
    text.trim()
        .replace('|', "/")
        .replace(['\r', '\n'], " ")
}

fn answer_for<'a>(answers: &'a BTreeMap<String, String>, word: &WordPair) -> &'a str {
    answers.get(&word.eng).map(String::as_str).unwrap_or("")
}

fn graded_table<F>(words: &[WordPair], answers: &BTreeMap<String, String>, mut grade: F) -> String
where
    F: FnMut(&WordPair, &str) -> GradeMark,
{
    let mut table = String::from(GRADED_TABLE_HEADER);
    for (i, word) in words.iter().enumerate() {
        let answer = sanitize_cell(answer_for(answers, word));
        let mark = grade(word, &answer);
        table.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            i + 1,
            word.eng,
            word.kor,
            answer,
            mark
        ));
    }
    table
}

/// 원격 채점 프롬프트 생성
pub fn build_grading_prompt(words: &[WordPair], answers: &BTreeMap<String, String>) -> String {
    let mut table = String::from(UNGRADED_TABLE_HEADER);
    for (i, word) in words.iter().enumerate() {
        let answer = sanitize_cell(answer_for(answers, word));
        table.push_str(&format!("| {} | {} | {} | {} |\n", i + 1, word.eng, word.kor, answer));
    }

    format!(
        r#"아래는 영어 단어 시험 결과입니다.
토익 단어 기준으로, 정답(뜻)과 '내 답'이 의미가 거의 같거나 맞춤법이 약간 틀린 경우에도 'O'(정답)으로 처리해주세요.
단, 의미가 확실히 다르거나 빈칸인 경우 'X'로 처리해주세요.
아래 표를 채점해서, 맨 오른쪽에 '채점' 열을 추가해서 O/X를 표로 표시해주세요.

{table}
- 설명, 해설 등은 필요 없고, 채점된 표만 깔끔하게 마크다운으로 보내주세요.
- 표 형식을 정확히 유지해주세요."#
    )
}

/// 로컬 채점 규칙
///
/// 대소문자를 무시하고 정확히 같을 때만 O, 빈 답은 X, 나머지는 ?
pub fn grade_locally(correct: &str, answer: &str) -> GradeMark {
    let answer = answer.trim();
    if answer.to_lowercase() == correct.trim().to_lowercase() {
        GradeMark::Correct
    } else if answer.is_empty() {
        GradeMark::Incorrect
    } else {
        GradeMark::Manual
    }
}

/// API 키가 없을 때의 수동 채점용 결과
pub fn build_manual_grading_result(words: &[WordPair], answers: &BTreeMap<String, String>) -> String {
    let mut table = graded_table(words, answers, |word, answer| grade_locally(&word.kor, answer));

    table.push_str("\n**📝 수동 채점 안내**\n");
    table.push_str("• O: 정답 (자동 확인됨)\n");
    table.push_str("• X: 오답 (빈 답안)\n");
    table.push_str("• ?: 수동 확인 필요 - 정답과 비교하여 O 또는 X로 수정하세요\n\n");
    table.push_str("💡 **OpenAI API 키를 설정하면 자동 채점이 가능합니다**\n");
    table.push_str("`word-quiz config --set-api-key YOUR_KEY` 로 설정해주세요.");
    table
}

/// 채점 API 오류 시의 결과 (모든 채점 칸이 `-`)
pub fn build_error_fallback_result(
    words: &[WordPair],
    answers: &BTreeMap<String, String>,
    error_msg: &str,
) -> String {
    let mut table = graded_table(words, answers, |_, _| GradeMark::Error);
    table.push_str("\n**오류 발생으로 인한 수동 채점 필요**\n");
    table.push_str(&format!("오류 내용: {}", sanitize_cell(error_msg)));
    table
}
