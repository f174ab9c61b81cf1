//! 로그 초기화
//!
//! `RUST_LOG` 가 있으면 그대로 쓰고, 없으면 warn (`--verbose` 면 debug).
//! 사용자용 진행 메시지는 stdout, 로그는 stderr로 나간다.

use tracing_subscriber::EnvFilter;

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "word_quiz=debug,word_quiz_common=debug,info"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
