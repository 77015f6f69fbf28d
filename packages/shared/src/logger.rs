//! Logger setup backed by `tracing-subscriber`.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` wins when it is set. Otherwise the binary's own crate, the server
/// library and `tower_http` log at `default_level`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}

const LIBRARY_TARGETS: [&str; 2] = ["hearth_server", "tower_http"];

fn default_directives(bin_name: &str, default_level: &str) -> String {
    let bin_target = bin_name.replace('-', "_");
    let mut targets = vec![bin_target.as_str()];
    targets.extend(LIBRARY_TARGETS.into_iter().filter(|t| *t != bin_target));

    targets
        .iter()
        .map(|target| format!("{target}={default_level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_normalizes_bin_name() {
        // テスト項目: バイナリ名のハイフンはアンダースコアに変換され、ライブラリと同名のターゲットは重複しない
        // when (操作):
        let directives = default_directives("hearth-server", "debug");

        // then (期待する結果):
        assert_eq!(directives, "hearth_server=debug,tower_http=debug");
    }

    #[test]
    fn test_default_directives_for_other_binary() {
        // テスト項目: 別名のバイナリではバイナリとライブラリの両方のターゲットが含まれる
        // when (操作):
        let directives = default_directives("relay-bench", "info");

        // then (期待する結果):
        assert_eq!(
            directives,
            "relay_bench=info,hearth_server=info,tower_http=info"
        );
    }

    #[test]
    fn test_default_directives_parse_as_env_filter() {
        // テスト項目: 生成したディレクティブは EnvFilter として解釈できる
        // when (操作):
        let result = EnvFilter::try_new(default_directives("relay", "info"));

        // then (期待する結果):
        assert!(result.is_ok());
    }
}
