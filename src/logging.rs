//! tracing 구독자 초기화.

use tracing_subscriber::{fmt, EnvFilter};

/// 로그 구독자를 설치한다.
///
/// RUST_LOG가 설정되어 있으면 그것을, 아니면 `default_level`(설정 파일의 log_level)을 쓴다.
/// 결과 출력(stdout)과 섞이지 않도록 stderr로 기록한다.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // 이미 설치된 경우(테스트 등)에는 무시한다.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
