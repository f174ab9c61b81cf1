//! 설정 관리
//!
//! `~/.config/word-quiz/config.json` 에 저장되는 JSON 설정.
//! 누락된 키는 기본값으로 채우고, `ui.theme` 같은 점 표기 경로로 읽고 쓴다.

use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 최근 파일 최대 개수
pub const MAX_RECENT_FILES: usize = 10;

/// API 키 자리표시자 (설정되지 않은 것으로 취급)
pub const API_KEY_PLACEHOLDER: &str = "YOUR_OPENAI_API_KEY";

const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
    pub font_family: String,
    pub font_size: u32,
    pub window_geometry: BTreeMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        let window_geometry = [("main", "500x350"), ("test", "600x800"), ("result", "900x700")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self {
            theme: "dark".into(),
            font_family: "Arial".into(),
            font_size: 12,
            window_geometry,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o".into(),
            temperature: 0.1,
            max_tokens: 2000,
            base_url: "https://api.openai.com/v1".into(),
            timeout_seconds: 120,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub results_folder: String,
    pub words_folder: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            results_folder: "results".into(),
            words_folder: "words".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub openai: OpenAiConfig,
    pub paths: PathsConfig,
    pub recent_files: Vec<String>,

    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Config {
    /// 기본 경로에서 설정 로드
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 지정한 경로에서 설정 로드
    ///
    /// 파일이 없거나 내용이 잘못되었으면 기본값을 쓴다.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let loaded = std::fs::read_to_string(path)
                .map_err(QuizError::from)
                .and_then(|content| serde_json::from_str::<Config>(&content).map_err(QuizError::from));
            match loaded {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("설정 파일 로드 실패, 기본값 사용: {} ({})", path.display(), e);
                    Config::default()
                }
            }
        } else {
            tracing::debug!("설정 파일 없음, 기본값 사용: {}", path.display());
            Config::default()
        };

        config.path = Some(path.to_path_buf());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = match &self.path {
            Some(path) => path.clone(),
            None => Self::config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        tracing::info!("설정 저장: {}", config_path.display());
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| QuizError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("word-quiz").join("config.json"))
    }

    /// 설정 파일 경로 (로드한 위치)
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // =============================================
    // 점 표기 경로 접근
    // =============================================

    /// 점 표기 경로로 값 조회 (예: "openai.model")
    pub fn get(&self, key_path: &str) -> Option<Value> {
        let root = serde_json::to_value(self).ok()?;
        key_path
            .split('.')
            .try_fold(&root, |value, key| value.get(key))
            .cloned()
    }

    /// 점 표기 경로로 값 설정
    ///
    /// 중간 객체가 없으면 만든다. 결과가 설정 형식에 맞지 않으면 오류를 내고
    /// 기존 설정은 바뀌지 않는다.
    pub fn set(&mut self, key_path: &str, value: Value) -> Result<()> {
        let keys: Vec<&str> = key_path.split('.').collect();
        if keys.iter().any(|k| k.is_empty()) {
            return Err(QuizError::Config(format!("잘못된 설정 키: {}", key_path)));
        }

        let mut root = serde_json::to_value(&*self)?;
        let mut current = &mut root;
        for key in &keys[..keys.len() - 1] {
            let map = current
                .as_object_mut()
                .ok_or_else(|| QuizError::Config(format!("객체가 아닌 값 아래에 설정할 수 없습니다: {}", key_path)))?;
            current = map
                .entry(key.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }

        let map = current
            .as_object_mut()
            .ok_or_else(|| QuizError::Config(format!("객체가 아닌 값 아래에 설정할 수 없습니다: {}", key_path)))?;
        let last = keys[keys.len() - 1];
        let old = map.insert(last.to_string(), value.clone());

        let mut updated: Config = serde_json::from_value(root)
            .map_err(|e| QuizError::Config(format!("{} 값이 올바르지 않습니다: {}", key_path, e)))?;
        if updated.get(key_path).is_none() {
            return Err(QuizError::Config(format!("알 수 없는 설정 키: {}", key_path)));
        }
        updated.path = self.path.take();
        *self = updated;

        tracing::debug!("설정 변경: {} = {:?} → {}", key_path, old, value);
        Ok(())
    }

    // =============================================
    // 최근 파일
    // =============================================

    /// 최근 파일 맨 앞에 추가 (중복 제거, 최대 10개)
    pub fn add_recent_file(&mut self, file_path: &str) {
        self.recent_files.retain(|p| p != file_path);
        self.recent_files.insert(0, file_path.to_string());
        self.recent_files.truncate(MAX_RECENT_FILES);
    }

    pub fn remove_recent_file(&mut self, file_path: &str) -> bool {
        let before = self.recent_files.len();
        self.recent_files.retain(|p| p != file_path);
        before != self.recent_files.len()
    }

    pub fn clear_recent_files(&mut self) {
        self.recent_files.clear();
    }

    /// 단어/결과 폴더를 기본값으로 되돌리고 폴더를 만든다
    pub fn reset_default_folders(&mut self) -> Result<()> {
        self.paths = PathsConfig::default();
        for folder in [&self.paths.words_folder, &self.paths.results_folder] {
            std::fs::create_dir_all(folder)?;
        }
        Ok(())
    }

    // =============================================
    // API 키
    // =============================================

    /// API 키 결정 (환경 변수 우선)
    ///
    /// 빈 값과 자리표시자는 설정되지 않은 것으로 본다.
    pub fn resolve_api_key(&self) -> Option<String> {
        let from_env = std::env::var(API_KEY_ENV).ok();
        from_env
            .into_iter()
            .chain(self.openai.api_key.clone())
            .map(|key| key.trim().to_string())
            .find(|key| is_usable_api_key(key))
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.openai.api_key = Some(key);
        self.save()
    }
}

pub fn is_usable_api_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != API_KEY_PLACEHOLDER
}

/// 명령줄 값 해석: JSON으로 읽을 수 있으면 JSON, 아니면 문자열
pub fn parse_cli_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.openai.model, "gpt-4o");
        assert_eq!(config.openai.max_tokens, 2000);
        assert_eq!(config.paths.words_folder, "words");
        assert_eq!(config.ui.window_geometry.get("result").map(String::as_str), Some("900x700"));
        assert!(config.recent_files.is_empty());
    }

    #[test]
    fn test_partial_file_is_merged_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"openai": {"model": "gpt-4o-mini"}, "recent_files": ["a.md"]}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert_eq!(config.openai.max_tokens, 2000);
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.recent_files, vec!["a.md"]);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.openai, OpenAiConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::load_from(&path).unwrap();
        config.add_recent_file("day01.md");
        config.save().unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.recent_files, vec!["day01.md"]);
        assert_eq!(loaded.path(), Some(path.as_path()));
    }

    #[test]
    fn test_get_dotted_path() {
        let config = Config::default();
        assert_eq!(config.get("ui.theme"), Some(json!("dark")));
        assert_eq!(config.get("openai.max_tokens"), Some(json!(2000)));
        assert_eq!(config.get("ui.missing"), None);
        assert_eq!(config.get("ui.theme.deeper"), None);
    }

    #[test]
    fn test_set_dotted_path() {
        let mut config = Config::default();
        config.set("openai.model", json!("gpt-4o-mini")).unwrap();
        config.set("ui.window_geometry.settings", json!("400x300")).unwrap();

        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert_eq!(config.get("openai.model"), Some(json!("gpt-4o-mini")));
        assert_eq!(
            config.ui.window_geometry.get("settings").map(String::as_str),
            Some("400x300")
        );
    }

    #[test]
    fn test_set_rejects_wrong_type() {
        let mut config = Config::default();
        let result = config.set("openai.temperature", json!("hot"));
        assert!(matches!(result, Err(QuizError::Config(_))));
        assert_eq!(config.openai.temperature, 0.1);
    }

    #[test]
    fn test_set_rejects_empty_key() {
        let mut config = Config::default();
        assert!(config.set("ui..theme", json!("light")).is_err());
        assert!(config.set("", json!("light")).is_err());
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = Config::default();
        let result = config.set("ui.colour", json!("red"));
        assert!(matches!(result, Err(QuizError::Config(ref msg)) if msg.contains("ui.colour")));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_set_keeps_config_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::load_from(&path).unwrap();
        config.set("ui.theme", json!("light")).unwrap();
        assert_eq!(config.path(), Some(path.as_path()));
    }

    #[test]
    fn test_recent_files_are_capped_and_deduplicated() {
        let mut config = Config::default();
        for i in 0..12 {
            config.add_recent_file(&format!("day{:02}.md", i));
        }
        assert_eq!(config.recent_files.len(), MAX_RECENT_FILES);
        assert_eq!(config.recent_files[0], "day11.md");

        config.add_recent_file("day05.md");
        assert_eq!(config.recent_files[0], "day05.md");
        assert_eq!(config.recent_files.iter().filter(|p| *p == "day05.md").count(), 1);
        assert_eq!(config.recent_files.len(), MAX_RECENT_FILES);
    }

    #[test]
    fn test_remove_and_clear_recent_files() {
        let mut config = Config::default();
        config.add_recent_file("a.md");
        config.add_recent_file("b.md");

        assert!(config.remove_recent_file("a.md"));
        assert!(!config.remove_recent_file("a.md"));
        assert_eq!(config.recent_files, vec!["b.md"]);

        config.clear_recent_files();
        assert!(config.recent_files.is_empty());
    }

    #[test]
    fn test_is_usable_api_key() {
        assert!(is_usable_api_key("sk-test"));
        assert!(!is_usable_api_key(""));
        assert!(!is_usable_api_key("   "));
        assert!(!is_usable_api_key(API_KEY_PLACEHOLDER));
    }

    #[test]
    fn test_parse_cli_value() {
        assert_eq!(parse_cli_value("0.5"), json!(0.5));
        assert_eq!(parse_cli_value("true"), json!(true));
        assert_eq!(parse_cli_value("light"), json!("light"));
        assert_eq!(parse_cli_value("\"12\""), json!("12"));
    }
}
