use clap::Parser;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::time::Duration;
use word_quiz::cli::{Cli, Commands, ExportFormat};
use word_quiz::config::{self, Config};
use word_quiz::error::{QuizError, Result};
use word_quiz::grader::{GradingMode, GradingService};
use word_quiz::{export, logging, quiz, scanner, selector};
use word_quiz_common::{extract_md_table, parse_md_table, ScoreSummary, Statistics, TestResult};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::debug!("{:?}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Quiz { file, no_shuffle, limit, format, output, no_save } => {
            println!("📚 word-quiz - 단어 시험\n");

            let file = match file {
                Some(file) => file,
                None => match selector::select_word_file(&config)? {
                    Some(file) => file,
                    None => return Ok(()),
                },
            };

            if !file.is_file() {
                if config.remove_recent_file(&file.display().to_string()) {
                    config.save()?;
                }
                return Err(QuizError::FileNotFound(file.display().to_string()));
            }

            remember_word_file(&mut config, &file);
            config.save()?;

            // 1. 단어 추출
            println!("[1/4] 단어 추출 중...");
            let mut words = scanner::load_words(&file);
            if words.is_empty() {
                return Err(QuizError::NoWordsFound(file.display().to_string()));
            }
            println!("✔ {}개 단어 추출\n", words.len());

            if !no_shuffle {
                quiz::shuffle_words(&mut words);
            }
            if let Some(limit) = limit {
                words.truncate(limit.max(1));
            }

            // 2. 시험
            println!("[2/4] 시험");
            let answers = match quiz::run_interactive_quiz(&words)? {
                Some(answers) => answers,
                None => {
                    println!("\n시험이 취소되었습니다.");
                    return Ok(());
                }
            };
            println!("✔ 답안 {}개 제출\n", answers.len());

            // 3. 채점
            let service = GradingService::new(&config.openai, config.resolve_api_key())?;
            match service.mode() {
                GradingMode::Remote => println!("[3/4] AI 채점 중... (Ctrl-C로 취소)"),
                GradingMode::Manual => println!("[3/4] API 키 미설정: 로컬 채점"),
            }

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("채점하고 있습니다. 잠시만 기다려주세요...");
            spinner.enable_steady_tick(Duration::from_millis(120));
            let grading = service
                .grade_test_with_cancel(&words, &answers, tokio::signal::ctrl_c())
                .await;
            spinner.finish_and_clear();

            let table = parse_md_table(&grading);
            let summary = ScoreSummary::from_rows(&table.rows);

            let mut result = TestResult::new(words, answers, grading, scanner::date_str_for(&file));
            result.score = Some(summary.correct as u32);

            println!("{}\n", extract_md_table(&result.grading_result));
            println!("✔ {}\n", summary.score_line());
            println!("{}", Statistics::from_rows(&table.rows).render());

            // 4. 저장
            if no_save {
                println!("✅ 시험 완료");
                return Ok(());
            }

            println!("[4/4] 결과 저장 중...");
            let is_default_output = output.is_none();
            let output = output.unwrap_or_else(|| PathBuf::from(&config.paths.results_folder));
            let saved = export::save_result(&result, &format, &output)?;
            if is_default_output {
                if let Some(parent) = saved.parent().filter(|p| !p.as_os_str().is_empty()) {
                    config.paths.results_folder = parent.display().to_string();
                    config.save()?;
                }
            }
            println!("✔ 결과 저장: {}", saved.display());

            println!("\n✅ 시험 완료");
        }

        Commands::Parse { file } => {
            if !file.is_file() {
                return Err(QuizError::FileNotFound(file.display().to_string()));
            }

            let words = scanner::load_words(&file);
            if words.is_empty() {
                return Err(QuizError::NoWordsFound(file.display().to_string()));
            }

            for (i, word) in words.iter().enumerate() {
                println!("{:>4}. {}", i + 1, word);
            }
            println!("\n✔ {}개 단어 추출: {}", words.len(), file.display());
        }

        Commands::Show { file, table_only, stats } => {
            if !file.is_file() {
                return Err(QuizError::FileNotFound(file.display().to_string()));
            }
            let content = std::fs::read_to_string(&file)?;

            if table_only {
                println!("{}", extract_md_table(&content));
                return Ok(());
            }

            let table = parse_md_table(&content);
            if table.rows.is_empty() {
                println!("⚠ 채점 데이터가 없습니다: {}", file.display());
                return Ok(());
            }

            let summary = ScoreSummary::from_rows(&table.rows);
            println!("{}", summary.score_line());
            if stats {
                println!("\n{}", Statistics::from_rows(&table.rows).render());
            }
        }

        Commands::Export { input, format, output } => {
            println!("📄 word-quiz - 내보내기\n");

            let content = std::fs::read_to_string(&input)?;
            let result = TestResult::from_json(&content)?;

            let output = output.unwrap_or_else(|| {
                input
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or(Path::new("."))
                    .to_path_buf()
            });
            let format = effective_format(format, &output);
            let saved = export::save_result(&result, &format, &output)?;

            println!("✔ {} 출력: {}", format, saved.display());
        }

        Commands::Config { show, get, set, set_api_key, test_api, reset_folders } => {
            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API 키를 설정했습니다");
            }

            if let Some(pair) = set {
                if let [key, value] = pair.as_slice() {
                    config.set(key, config::parse_cli_value(value))?;
                    config.save()?;
                    println!("✔ {} = {}", key, value);
                }
            }

            if reset_folders {
                config.reset_default_folders()?;
                config.save()?;
                println!(
                    "✔ 기본 폴더로 재설정: {}, {}",
                    config.paths.words_folder, config.paths.results_folder
                );
            }

            if let Some(key) = get {
                match config.get(&key) {
                    Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                    None => println!("(없음) {}", key),
                }
            }

            if show {
                print_config(&config);
            }

            if test_api {
                let service = GradingService::new(&config.openai, config.resolve_api_key())?;
                println!("- API 연결 확인 중... ({})", config.openai.model);
                let reply = service.check_connection().await?;
                println!("✔ API 연결 성공: {}", reply.trim());
            }
        }

        Commands::Recent { clear } => {
            if clear {
                config.clear_recent_files();
                config.save()?;
                println!("✔ 최근 파일 목록을 지웠습니다");
            } else if config.recent_files.is_empty() {
                println!("최근 파일 없음");
            } else {
                println!("최근 파일:");
                for (i, path) in config.recent_files.iter().enumerate() {
                    let missing = if Path::new(path).is_file() { "" } else { " (없음)" };
                    println!("  {}) {}{}", i + 1, path, missing);
                }
            }
        }

        Commands::Words { folder } => {
            let folder = folder.unwrap_or_else(|| PathBuf::from(&config.paths.words_folder));
            let files = scanner::scan_word_files(&folder)?;

            if files.is_empty() {
                println!("단어 파일이 없습니다: {}", folder.display());
            } else {
                println!("단어 파일 ({}):", folder.display());
                for file in &files {
                    let count = scanner::load_words(&file.path).len();
                    println!("  {} ({}개)", file.file_name, count);
                }
            }
        }
    }

    Ok(())
}

/// 최근 파일과 단어 폴더 기억
fn remember_word_file(config: &mut Config, file: &Path) {
    config.add_recent_file(&file.display().to_string());
    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        config.paths.words_folder = parent.display().to_string();
    }
}

/// 출력 파일의 확장자가 형식을 지정하면 그쪽을 따른다
fn effective_format(format: ExportFormat, output: &Path) -> ExportFormat {
    if output.is_dir() {
        return format;
    }
    ExportFormat::from_path(output).unwrap_or(format)
}

fn print_config(config: &Config) {
    println!("설정:");
    if let Some(path) = config.path() {
        println!("  파일: {}", path.display());
    }
    println!("  테마: {} ({} {}pt)", config.ui.theme, config.ui.font_family, config.ui.font_size);
    println!("  모델: {}", config.openai.model);
    println!("  temperature: {}", config.openai.temperature);
    println!("  max_tokens: {}", config.openai.max_tokens);
    println!("  API 주소: {}", config.openai.base_url);
    println!("  타임아웃: {}초", config.openai.timeout_seconds);
    println!(
        "  API 키: {}",
        if config.resolve_api_key().is_some() { "설정됨" } else { "미설정" }
    );
    println!("  단어 폴더: {}", config.paths.words_folder);
    println!("  결과 폴더: {}", config.paths.results_folder);
    println!("  최근 파일: {}개", config.recent_files.len());
}
