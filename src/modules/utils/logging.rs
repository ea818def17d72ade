use log::{error, info, warn, LevelFilter};

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

/// Initialize the logging system, writing to `log_file`.
///
/// The terminal host draws the page on stdout, so log lines go to a file
/// instead of the console.
#[cfg(not(target_arch = "wasm32"))]
pub fn initialize_logging(level: LevelFilter, log_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    use env_logger::{Builder, WriteStyle};
    use std::fs::OpenOptions;

    // Create or append to log file
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .write_style(WriteStyle::Never)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    info!("Logging system initialized at level {}", level);
    Ok(())
}

/// Parse a level name such as `info` or `DEBUG`
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Helper function to format sensitive data for logging
pub fn format_sensitive(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Log line for a form submission; the password never appears in it
pub fn format_login_attempt(login: &str) -> String {
    format!(
        "Login attempt: login={}, password=<hidden>",
        format_sensitive(login)
    )
}

/// Structured log line for authentication events
pub fn log_auth_event(event_type: &str, login: &str, success: bool, details: Option<&str>) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    if success {
        info!(
            "Auth event: type={}, login={}, success=true, timestamp={}, details={:?}",
            event_type,
            format_sensitive(login),
            timestamp,
            details
        );
    } else {
        warn!(
            "Auth event: type={}, login={}, success=false, timestamp={}, details={:?}",
            event_type,
            format_sensitive(login),
            timestamp,
            details
        );
    }
}

/// Structured log line for operations on the credential store
pub fn log_storage_operation(operation: &str, key: &str, success: bool, details: Option<&str>) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    if success {
        info!(
            "Storage operation: op={}, key={}, success=true, timestamp={}, details={:?}",
            operation, key, timestamp, details
        );
    } else {
        error!(
            "Storage operation: op={}, key={}, success=false, timestamp={}, details={:?}",
            operation, key, timestamp, details
        );
    }
}
