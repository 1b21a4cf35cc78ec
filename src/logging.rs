//! ログ初期化
//!
//! 出力はstderr。stdoutは結果表示（JSON等）専用。

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` を優先し、未設定なら `--verbose` で debug、通常は warn
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // テスト等で二重初期化された場合は無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
