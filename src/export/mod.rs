use crate::cli::ExportFormat;
use crate::error::Result;
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use word_quiz_common::{render_html_report, render_markdown_report, TestResult};

/// 기본 파일 이름: `{date_str}_result.{ext}`
pub fn default_file_name(result: &TestResult, format: &ExportFormat) -> String {
    format!("{}_result.{}", result.date_str, format.extension())
}

/// 출력 경로 결정
///
/// 폴더이거나 확장자가 없으면 그 아래에 기본 파일 이름으로 만든다.
pub fn output_path_for_format(output: &Path, result: &TestResult, format: &ExportFormat) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(default_file_name(result, format))
    } else {
        output.to_path_buf()
    }
}

/// 형식별 내용 생성
pub fn render(result: &TestResult, format: &ExportFormat, now: NaiveDateTime) -> Result<String> {
    let content = match format {
        ExportFormat::Markdown | ExportFormat::Text => render_markdown_report(result, now),
        ExportFormat::Html => render_html_report(result, now),
        ExportFormat::Json => result.to_json()?,
    };
    Ok(content)
}

/// 결과를 파일로 저장하고 경로를 반환
pub fn save_result(result: &TestResult, format: &ExportFormat, output: &Path) -> Result<PathBuf> {
    let output_path = output_path_for_format(output, result, format);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let content = render(result, format, Local::now().naive_local())?;
    std::fs::write(&output_path, content)?;
    tracing::info!("결과 저장: {}", output_path.display());

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::tempdir;
    use word_quiz_common::WordPair;

    fn result() -> TestResult {
        TestResult::new(
            vec![WordPair::new("apple", "사과")],
            BTreeMap::new(),
            "| 번호 | 영어 | 정답 | 내 답 | 채점 |\n|---|---|---|---|---|\n| 1 | apple | 사과 | 사과 | O |".into(),
            "day01",
        )
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(default_file_name(&result(), &ExportFormat::Markdown), "day01_result.md");
        assert_eq!(default_file_name(&result(), &ExportFormat::Html), "day01_result.html");
    }

    #[test]
    fn test_output_path_for_directory() {
        let dir = tempdir().unwrap();
        let path = output_path_for_format(dir.path(), &result(), &ExportFormat::Text);
        assert_eq!(path, dir.path().join("day01_result.txt"));
    }

    #[test]
    fn test_output_path_for_file() {
        let path = output_path_for_format(Path::new("out/my.html"), &result(), &ExportFormat::Html);
        assert_eq!(path, PathBuf::from("out/my.html"));
    }

    #[test]
    fn test_output_path_for_missing_folder() {
        let path = output_path_for_format(Path::new("results"), &result(), &ExportFormat::Markdown);
        assert_eq!(path, PathBuf::from("results/day01_result.md"));
    }
}
