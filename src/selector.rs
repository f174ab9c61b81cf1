//! 단어 파일 대화식 선택

use crate::config::Config;
use crate::error::{QuizError, Result};
use crate::scanner;
use dialoguer::Select;
use std::path::{Path, PathBuf};

/// 선택 후보 (최근 파일 먼저, 그다음 단어 폴더의 파일)
pub fn list_candidates(config: &Config) -> Vec<(String, PathBuf)> {
    let mut candidates: Vec<(String, PathBuf)> = config
        .recent_files
        .iter()
        .map(PathBuf::from)
        .filter(|path| path.is_file())
        .map(|path| (format!("🕘 {}", path.display()), path))
        .collect();

    let words_folder = Path::new(&config.paths.words_folder);
    match scanner::scan_word_files(words_folder) {
        Ok(files) => {
            for file in files {
                if candidates.iter().all(|(_, p)| !same_file(p, &file.path)) {
                    candidates.push((format!("📄 {}", file.file_name), file.path));
                }
            }
        }
        Err(e) => tracing::debug!("단어 폴더를 읽을 수 없습니다: {}", e),
    }

    candidates
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// 대화식으로 단어 파일 선택
pub fn select_word_file(config: &Config) -> Result<Option<PathBuf>> {
    let candidates = list_candidates(config);

    if candidates.is_empty() {
        println!("⚠ 선택할 단어 파일이 없습니다 (단어 폴더: {})", config.paths.words_folder);
        return Ok(None);
    }

    let labels: Vec<&str> = candidates.iter().map(|(label, _)| label.as_str()).collect();
    let selection = Select::new()
        .with_prompt("단어 파일을 선택하세요")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(|e| QuizError::Prompt(e.to_string()))?;

    Ok(selection.map(|idx| candidates[idx].1.clone()))
}
