//! 단어 파일 파서
//!
//! 마크다운/텍스트 파일의 `|` 표에서 영어-뜻 쌍을 추출한다.
//!
//! ```markdown
//! | 영어 | 뜻 |
//! |------|----|
//! | apple | 사과 |
//! | book | 책 | desk | 책상 |
//! ```
//!
//! - 2~3열: 한 쌍 (영어, 뜻)
//! - 4열 이상: 두 쌍 (영어1, 뜻1), (영어2, 뜻2). 5열째부터는 무시
//! - 구분선(`---`)과 헤더 행은 건너뛴다

use crate::types::WordPair;

/// 헤더 행으로 판단하는 키워드 (영어 칸에 포함되면 제외)
pub const HEADER_KEYWORDS: &[&str] = &["word", "english", "영어", "vocabulary", "단어", "meaning", "뜻"];

/// 파일 내용에서 단어 쌍을 추출
///
/// 표가 없으면 빈 Vec을 반환한다. 오류는 내지 않는다.
///
/// # Examples
/// ```
/// use word_quiz_common::parse_words;
///
/// let words = parse_words("| apple | 사과 | book | 책 |");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].kor, "책");
/// ```
pub fn parse_words(content: &str) -> Vec<WordPair> {
    extract_table_lines(content)
        .into_iter()
        .flat_map(parse_table_row)
        .collect()
}

/// 표 행만 추출 (구분선 제외)
pub fn extract_table_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('|') && !line.contains("---"))
        .collect()
}

/// 행 양끝의 `|`를 떼고 셀로 분할
pub(crate) fn split_cells(line: &str) -> Vec<String> {
    let line = line.trim();
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);

    if inner.trim().is_empty() {
        return Vec::new();
    }

    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// 표 한 행을 단어 쌍으로 변환
pub fn parse_table_row(line: &str) -> Vec<WordPair> {
    let cells = split_cells(line);

    let candidates = match cells.len() {
        n if n >= 4 => vec![
            WordPair::new(&cells[0], &cells[1]),
            WordPair::new(&cells[2], &cells[3]),
        ],
        2 | 3 => vec![WordPair::new(&cells[0], &cells[1])],
        _ => Vec::new(),
    };

    candidates.into_iter().filter(is_valid_word).collect()
}

/// 유효한 단어인지 확인 (빈 칸 / 헤더 키워드 제외)
pub fn is_valid_word(word: &WordPair) -> bool {
    if word.eng.is_empty() || word.kor.is_empty() {
        return false;
    }

    let eng = word.eng.to_lowercase();
    !HEADER_KEYWORDS.iter().any(|keyword| eng.contains(keyword))
}
