//! 채점표 파서
//!
//! 채점 응답(마크다운 표 + 앞뒤 설명문)에서 헤더와 데이터 행을 분리한다.
//! 모델 출력은 형식이 조금씩 어긋나므로 구분선이 없거나 설명문이 붙어도
//! 오류 없이 최대한 해석한다.

use crate::parser::split_cells;
use serde::{Deserialize, Serialize};

/// 파싱된 채점표
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl GradingTable {
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }
}

/// 마크다운 표를 헤더와 데이터 행으로 파싱
///
/// 두 번째 행의 모든 셀에 `-`가 있으면 구분선으로 보고 건너뛴다.
/// 아니면 첫 행을 헤더, 나머지를 모두 데이터로 취급한다.
/// 행 길이와 헤더 길이가 달라도 그대로 둔다.
pub fn parse_md_table(md_result: &str) -> GradingTable {
    let mut rows: Vec<Vec<String>> = md_result
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.starts_with('|'))
        .map(split_cells)
        .collect();

    if rows.is_empty() {
        return GradingTable::default();
    }

    let has_separator = rows.len() >= 2 && rows[1].iter().all(|cell| cell.contains('-'));
    let header = rows.remove(0);
    if has_separator {
        rows.remove(0);
    }

    GradingTable { header, rows }
}

/// 채점 응답에서 표 부분만 추출
///
/// 첫 `|` 행부터 연속된 `|` 행까지만 모은다. 표 앞의 설명문과
/// 표 뒤에 오는 모든 줄은 버린다.
pub fn extract_md_table(md_result: &str) -> String {
    md_result
        .lines()
        .skip_while(|line| !line.trim().starts_with('|'))
        .take_while(|line| line.trim().starts_with('|'))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRADED: &str = "| 번호 | 영어 | 정답 | 내 답 | 채점 |
|---|---|---|---|---|
| 1 | apple | 사과 | 사과 | O |
| 2 | book | 책 | 공책 | O |
| 3 | desk | 책상 |  | X |
| 4 | run | 달리다 | 뛰다 | ? |";

    #[test]
    fn test_parse_with_separator() {
        let table = parse_md_table(GRADED);
        assert_eq!(table.header, vec!["번호", "영어", "정답", "내 답", "채점"]);
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[0], vec!["1", "apple", "사과", "사과", "O"]);
        assert_eq!(table.rows[2][3], "");
    }

    #[test]
    fn test_parse_without_separator() {
        let response = "| 번호 | 영어 | 채점 |\n| 1 | apple | O |\n| 2 | book | X |";
        let table = parse_md_table(response);
        assert_eq!(table.header, vec!["번호", "영어", "채점"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["2", "book", "X"]);
    }

    #[test]
    fn test_parse_ignores_surrounding_prose() {
        let response = format!("채점 결과입니다.\n\n{}\n\n수고하셨습니다!", GRADED);
        let table = parse_md_table(&response);
        assert_eq!(table.header.len(), 5);
        assert_eq!(table.rows.len(), 4);
    }

    #[test]
    fn test_parse_empty_response() {
        let table = parse_md_table("");
        assert!(table.header.is_empty());
        assert!(table.rows.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_header_only() {
        let table = parse_md_table("| 번호 | 영어 |");
        assert_eq!(table.header, vec!["번호", "영어"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_separator_requires_dash_in_every_cell() {
        // 두 번째 행에 '-'가 없는 셀이 있으면 데이터로 취급
        let response = "| 번호 | 영어 | 채점 |\n| 1 | well-known | - |\n| 2 | book | O |";
        let table = parse_md_table(response);
        assert_eq!(table.rows.len(), 2);

        let response = "| a | b |\n| :---: | -- |\n| 1 | O |";
        let table = parse_md_table(response);
        assert_eq!(table.rows, vec![vec!["1".to_string(), "O".to_string()]]);
    }

    #[test]
    fn test_rows_keep_their_own_length() {
        let response = "| 번호 | 영어 | 정답 | 내 답 | 채점 |\n|---|---|---|---|---|\n| 1 | apple | O |";
        let table = parse_md_table(response);
        assert_eq!(table.rows[0].len(), 3);
    }

    #[test]
    fn test_extract_md_table_stops_at_first_non_table_line() {
        let response = "설명\n| a | b |\n|---|---|\n| 1 | O |\n\n추가 설명\n| x | y |";
        assert_eq!(extract_md_table(response), "| a | b |\n|---|---|\n| 1 | O |");
    }

    #[test]
    fn test_extract_md_table_without_table() {
        assert_eq!(extract_md_table("표가 없습니다"), "");
        assert_eq!(extract_md_table(""), "");
    }

    #[test]
    fn test_extract_md_table_keeps_line_text() {
        let response = "  | a | b |\n  | 1 | O |";
        assert_eq!(extract_md_table(response), "  | a | b |\n  | 1 | O |");
    }
}
