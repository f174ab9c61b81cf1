use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "word-quiz")]
#[command(about = "영어 단어 시험 · AI 채점 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 설정 파일 경로 (기본: ~/.config/word-quiz/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 단어 파일로 시험을 보고 채점
    Quiz {
        /// 단어 파일 (.md / .txt). 생략하면 최근 파일·단어 폴더에서 선택
        file: Option<PathBuf>,

        /// 단어를 섞지 않음
        #[arg(long)]
        no_shuffle: bool,

        /// 출제할 최대 문제 수
        #[arg(short, long)]
        limit: Option<usize>,

        /// 저장 형식 (md/txt/html/json)
        #[arg(short, long, default_value = "md")]
        format: ExportFormat,

        /// 저장 경로 (파일 또는 폴더, 기본: 결과 폴더)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 결과를 저장하지 않음
        #[arg(long)]
        no_save: bool,
    },

    /// 단어 파일에서 추출되는 단어 확인
    Parse {
        /// 단어 파일
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 저장된 결과 / 채점표의 점수 표시
    Show {
        /// 결과 파일 (.md / .txt)
        #[arg(required = true)]
        file: PathBuf,

        /// 채점표만 출력 (붙여넣기용)
        #[arg(long)]
        table_only: bool,

        /// 상세 통계 출력
        #[arg(long)]
        stats: bool,
    },

    /// 저장된 결과(JSON)를 다른 형식으로 출력
    Export {
        /// 결과 JSON 파일
        #[arg(required = true)]
        input: PathBuf,

        /// 출력 형식 (md/txt/html/json)
        #[arg(short, long, default_value = "html")]
        format: ExportFormat,

        /// 출력 파일/폴더 (기본: 입력 파일과 같은 폴더)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 설정 표시/편집
    Config {
        /// 설정 표시
        #[arg(long)]
        show: bool,

        /// 값 조회 (예: openai.model)
        #[arg(long, value_name = "KEY")]
        get: Option<String>,

        /// 값 설정 (예: --set ui.theme light)
        #[arg(long, num_args = 2, value_names = ["KEY", "VALUE"])]
        set: Option<Vec<String>>,

        /// API 키 설정
        #[arg(long)]
        set_api_key: Option<String>,

        /// API 키로 연결 확인
        #[arg(long)]
        test_api: bool,

        /// 단어/결과 폴더를 기본값으로
        #[arg(long)]
        reset_folders: bool,
    },

    /// 최근 파일 목록
    Recent {
        /// 목록 지우기
        #[arg(long)]
        clear: bool,
    },

    /// 단어 폴더의 파일 목록
    Words {
        /// 폴더 (기본: 설정의 단어 폴더)
        folder: Option<PathBuf>,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Markdown,
    Text,
    Html,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }

    /// 파일 확장자로 형식 추측
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            "txt" | "text" => Ok(ExportFormat::Text),
            "html" | "htm" => Ok(ExportFormat::Html),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Unknown format: {}. Use md, txt, html, or json", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
