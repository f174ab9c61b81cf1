use crate::error::{QuizError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use word_quiz_common::{parse_words, WordPair};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFile {
    pub path: PathBuf,
    pub file_name: String,
}

const WORD_FILE_EXTENSIONS: &[&str] = &["md", "txt"];

fn is_word_file_extension(ext: &str) -> bool {
    WORD_FILE_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}

/// 폴더 바로 아래의 단어 파일(.md / .txt) 목록
pub fn scan_word_files(folder: &Path) -> Result<Vec<WordFile>> {
    if !folder.is_dir() {
        return Err(QuizError::FolderNotFound(folder.display().to_string()));
    }

    let mut files: Vec<WordFile> = WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| is_word_file_extension(&ext.to_string_lossy()))
                .unwrap_or(false)
        })
        .map(|e| WordFile {
            path: e.path().to_path_buf(),
            file_name: e.file_name().to_string_lossy().to_string(),
        })
        .collect();

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(files)
}

/// 단어 파일을 읽어 단어 쌍을 추출
///
/// 읽기 실패(없는 파일, UTF-8이 아닌 내용)는 로그만 남기고 빈 Vec을 반환한다.
pub fn load_words(path: &Path) -> Vec<WordPair> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("단어 파일 읽기 실패: {} ({})", path.display(), e);
            return Vec::new();
        }
    };

    let words = parse_words(&content);
    if words.is_empty() {
        tracing::warn!("단어 표를 찾을 수 없습니다: {}", path.display());
    } else {
        tracing::info!("추출된 단어 수: {}", words.len());
        tracing::debug!("첫 번째 단어: {}", words[0]);
    }
    words
}

/// 시험 결과 이름 (파일 이름에서 확장자 제외)
pub fn date_str_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "result".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_word_file_extension() {
        assert!(is_word_file_extension("md"));
        assert!(is_word_file_extension("MD"));
        assert!(is_word_file_extension("txt"));
        assert!(!is_word_file_extension("json"));
        assert!(!is_word_file_extension("pdf"));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_word_files(Path::new("/nonexistent/words"));
        assert!(matches!(result, Err(QuizError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("day02.md"), "| b | 나 |").unwrap();
        fs::write(dir.path().join("day01.txt"), "| a | 가 |").unwrap();
        fs::write(dir.path().join("notes.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("day03.md"), "| c | 다 |").unwrap();

        let files = scan_word_files(dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["day01.txt", "day02.md"]);
    }

    #[test]
    fn test_load_words() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("day01.md");
        fs::write(&path, "| 영어 | 뜻 |\n|---|---|\n| apple | 사과 |\n| book | 책 |\n").unwrap();

        let words = load_words(&path);
        assert_eq!(words, vec![WordPair::new("apple", "사과"), WordPair::new("book", "책")]);
    }

    #[test]
    fn test_load_words_missing_file() {
        assert!(load_words(Path::new("/nonexistent/day01.md")).is_empty());
    }

    #[test]
    fn test_load_words_non_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.md");
        fs::write(&path, [0xff, 0xfe, b'|', b' ', b'a']).unwrap();
        assert!(load_words(&path).is_empty());
    }

    #[test]
    fn test_date_str_for() {
        assert_eq!(date_str_for(Path::new("words/day01.md")), "day01");
        assert_eq!(date_str_for(Path::new("2026-10-15.txt")), "2026-10-15");
    }
}
