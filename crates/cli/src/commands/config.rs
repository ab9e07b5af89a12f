use std::fs;
use std::path::{Path, PathBuf};

use puppyparent_core::config::{read_env, AppConfig, LogFormat, OutputFormat};
use toml::Value;

use super::CommandResult;

/// `flagged` lists the key paths overridden from the command line.
pub fn run(config: &AppConfig, explicit_path: Option<&Path>, flagged: &[&str]) -> CommandResult {
    let config_file_path = detect_config_path(explicit_path);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, env_keys: &[&str]| {
        if flagged.contains(&key_path) {
            return "flag".to_string();
        }
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let mut lines =
        vec!["effective config (source precedence: flag > env > file > default):".to_string()];

    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        source("logging.level", &["PUPPYPARENT_LOGGING_LEVEL", "PUPPYPARENT_LOG_LEVEL"]),
    ));
    lines.push(render_line(
        "logging.format",
        log_format_name(config.logging.format),
        source("logging.format", &["PUPPYPARENT_LOGGING_FORMAT", "PUPPYPARENT_LOG_FORMAT"]),
    ));
    lines.push(render_line(
        "output.format",
        output_format_name(config.output.format),
        source("output.format", &["PUPPYPARENT_OUTPUT_FORMAT"]),
    ));

    let reference_date = config
        .calendar
        .reference_date
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "<local date>".to_string());
    lines.push(render_line(
        "calendar.reference_date",
        &reference_date,
        source("calendar.reference_date", &["PUPPYPARENT_CALENDAR_REFERENCE_DATE"]),
    ));

    CommandResult { exit_code: 0, output: lines.join("\n") }
}

fn log_format_name(format: LogFormat) -> &'static str {
    match format {
        LogFormat::Compact => "compact",
        LogFormat::Pretty => "pretty",
        LogFormat::Json => "json",
    }
}

fn output_format_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
    }
}

fn detect_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then(|| path.to_path_buf());
    }

    let root = PathBuf::from("puppyparent.toml");
    if root.exists() {
        return Some(root);
    }

    let nested = PathBuf::from("config/puppyparent.toml");
    if nested.exists() {
        return Some(nested);
    }

    None
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| read_env(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
