//! Logging setup for weft: a log file plus optional stderr output.
//!
//! The file always receives `warn` and above, or the configured filter when
//! one is set. Terminal output is enabled when `WEFT_LOG` or `RUST_LOG` is set,
//! and always in debug builds.
//!
//! ## Filter priority
//!
//! 1. **`WEFT_LOG`** - a bare level applies to every weft crate, anything with
//!    directive syntax is used verbatim
//! 2. **`RUST_LOG`** - standard tracing directives
//! 3. **Default** - `warn` globally, `info` for weft crates
//!
//! ## Log file location
//!
//! Default: `<data_local_dir>/weft/logs/weft-<pid>.log`. Override it with
//! [`LogConfig::log_file_path`], which accepts either a file or a directory.

use std::{
    env,
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Crates that a bare `WEFT_LOG` level applies to.
const WEFT_CRATES: &[&str] = &["weft_display_map", "weft_bin", "weft"];

/// Returned from [`init`]. Dropping it flushes and stops the file writer.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

#[derive(Debug, Default, Clone)]
pub struct LogConfig {
    pub log_file_path: Option<PathBuf>,
}

/// Install the global subscriber.
///
/// Fails if the filter does not parse or a subscriber is already installed.
pub fn init(config: LogConfig) -> Result<LogGuard, BoxError> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(create_file_filter()?);

    let terminal_enabled = env_is_set() || cfg!(debug_assertions);
    let terminal_layer = if terminal_enabled {
        Some(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(create_filter()?),
        )
    } else {
        None
    };

    Registry::default()
        .with(file_layer)
        .with(terminal_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

/// Logging for tests: terminal only, and a no-op once any subscriber exists.
pub fn test() {
    let _ = test_init();
}

fn test_init() -> Result<(), BoxError> {
    fmt()
        .with_env_filter(create_filter()?)
        .with_test_writer()
        .try_init()?;
    Ok(())
}

fn env_is_set() -> bool {
    env::var("WEFT_LOG").is_ok() || env::var("RUST_LOG").is_ok()
}

/// Split an override into directory and file name. A path with an extension
/// names the file, anything else is a directory.
fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("weft-{}.log", std::process::id());

    match override_path {
        Some(path) if path.extension().is_some() => {
            let dir = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf();
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or(filename);
            (dir, name)
        }
        Some(dir) => (dir, filename),
        None => {
            let dir = dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("weft")
                .join("logs");
            (dir, filename)
        }
    }
}

fn create_file_filter() -> Result<EnvFilter, BoxError> {
    if env_is_set() {
        return create_filter();
    }
    Ok(EnvFilter::new("warn"))
}

/// `WEFT_LOG` > `RUST_LOG` > defaults.
fn create_filter() -> Result<EnvFilter, BoxError> {
    if let Ok(weft_log) = env::var("WEFT_LOG") {
        return Ok(EnvFilter::try_new(expand_weft_log(&weft_log))?);
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return Ok(EnvFilter::try_new(rust_log)?);
    }

    Ok(EnvFilter::new(expand_weft_log("info")))
}

/// `debug` becomes `warn,weft_display_map=debug,...`; directive syntax passes
/// through untouched.
fn expand_weft_log(weft_log: &str) -> String {
    if weft_log.contains(['=', ':', ',']) {
        return weft_log.to_string();
    }

    let mut filter = String::from("warn");
    for name in WEFT_CRATES {
        filter.push_str(&format!(",{name}={weft_log}"));
    }
    filter
}
