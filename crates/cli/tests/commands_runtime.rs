use std::env;
use std::sync::{Mutex, OnceLock};

use clap::Parser;
use puppyparent_cli::commands::CommandResult;
use puppyparent_cli::{execute, Cli};
use serde_json::Value;

const TODAY: &str = "2026-10-16";

#[test]
fn feeding_returns_json_plan() {
    with_env(&[], || {
        let result = run_cli(&[
            "--json",
            "feeding",
            "--age",
            "10",
            "--weight",
            "8",
            "--breed-size",
            "medium",
            "--activity-level",
            "moderate",
            "--food-type",
            "dry",
        ]);
        assert_eq!(result.exit_code, 0, "expected successful feeding run: {}", result.output);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "feeding");
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["result"]["daily_amount_cups"], "1.58");
        assert_eq!(payload["result"]["amount_per_meal_cups"], "0.39");
        assert_eq!(payload["result"]["meals_per_day"], 4);
        assert_eq!(payload["result"]["calories_per_day"], 552);
        assert_eq!(payload["result"]["expected_adult_weight_lbs"], 24);
    });
}

#[test]
fn feeding_rejects_non_numeric_weight() {
    with_env(&[], || {
        let result = run_cli(&[
            "--json",
            "feeding",
            "--age",
            "10",
            "--weight",
            "heavy",
            "--breed-size",
            "medium",
            "--activity-level",
            "moderate",
            "--food-type",
            "dry",
        ]);
        assert_eq!(result.exit_code, 2, "expected invalid input exit code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "invalid_input");
        assert_eq!(payload["field"], "weight_lbs");
        assert!(payload.get("result").is_none());
    });
}

#[test]
fn training_text_uses_long_completion_date() {
    with_env(&[], || {
        let result = run_cli(&[
            "training",
            "--age-weeks",
            "10",
            "--weekly-hours",
            "7",
            "--goal",
            "potty",
        ]);
        assert_eq!(result.exit_code, 0, "expected successful training run: {}", result.output);
        assert!(result.output.starts_with("training timeline: 12 weeks, 60 minutes/day"));
        assert!(result.output.ends_with("estimated completion: January 8, 2027"));
    });
}

#[test]
fn training_without_goals_is_rejected() {
    with_env(&[], || {
        let result = run_cli(&["--json", "training", "--age-weeks", "10", "--weekly-hours", "7"]);
        assert_eq!(result.exit_code, 2);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "training");
        assert_eq!(payload["field"], "goals");
    });
}

#[test]
fn vaccination_reports_next_appointment_after_today() {
    with_env(&[], || {
        let result = run_cli(&[
            "--json",
            "vaccination",
            "--birth-date",
            "2026-08-01",
            "--lifestyle",
            "social",
            "--region",
            "midwest",
        ]);
        assert_eq!(result.exit_code, 0, "expected successful vaccination run: {}", result.output);

        let payload = parse_payload(&result.output);
        let weeks: Vec<u64> = payload["result"]["schedule"]
            .as_array()
            .expect("schedule array")
            .iter()
            .filter_map(|appointment| appointment["week"].as_u64())
            .collect();
        assert_eq!(weeks, vec![6, 9, 12, 16]);
        assert_eq!(payload["result"]["total_cost"], "200");
        assert_eq!(payload["result"]["next_appointment"]["status"], "scheduled");
        assert_eq!(payload["result"]["next_appointment"]["date"], "2026-10-24");
    });
}

#[test]
fn reference_date_can_come_from_env() {
    with_env(&[("PUPPYPARENT_CALENDAR_REFERENCE_DATE", "2027-06-01")], || {
        let cli = Cli::try_parse_from([
            "puppyparent",
            "vaccination",
            "--birth-date",
            "2026-08-01",
            "--lifestyle",
            "indoor",
            "--region",
            "west",
        ])
        .expect("arguments should parse");
        let result = execute(cli);
        assert_eq!(result.exit_code, 0);
        assert!(result.output.ends_with("next appointment: All appointments complete"));
    });
}

#[test]
fn grooming_text_lists_tasks_and_cost() {
    with_env(&[], || {
        let result = run_cli(&[
            "grooming",
            "--coat-type",
            "curly",
            "--coat-length",
            "long",
            "--activity-level",
            "moderate",
            "--environment",
            "indoor",
        ]);
        assert_eq!(result.exit_code, 0, "expected successful grooming run: {}", result.output);
        assert!(result.output.starts_with("grooming routine:"));
        assert!(result.output.contains("annual professional cost: $525"));
    });
}

#[test]
fn insurance_rejects_unknown_breed() {
    with_env(&[], || {
        let result = run_cli(&[
            "--json",
            "insurance",
            "--age-weeks",
            "10",
            "--breed",
            "wolf",
            "--location",
            "urban",
            "--coverage",
            "comprehensive",
            "--deductible",
            "250",
            "--reimbursement",
            "80",
        ]);
        assert_eq!(result.exit_code, 2);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["field"], "breed");
        assert!(payload["message"].as_str().unwrap_or_default().contains("brachycephalic"));
    });
}

#[test]
fn insurance_returns_three_ordered_plans() {
    with_env(&[], || {
        let result = run_cli(&[
            "--json",
            "insurance",
            "--age-weeks",
            "10",
            "--breed",
            "medium",
            "--location",
            "suburban",
            "--coverage",
            "accident-illness",
            "--deductible",
            "250",
            "--reimbursement",
            "80",
        ]);
        assert_eq!(result.exit_code, 0, "expected successful insurance run: {}", result.output);

        let payload = parse_payload(&result.output);
        let tiers: Vec<&str> = payload["result"]["plans"]
            .as_array()
            .expect("plans array")
            .iter()
            .filter_map(|plan| plan["tier"].as_str())
            .collect();
        assert_eq!(tiers, vec!["basic", "standard", "premium"]);
        assert_eq!(payload["result"]["recommended_plan"], "standard");
    });
}

#[test]
fn invalid_log_level_is_a_configuration_failure() {
    with_env(&[("PUPPYPARENT_LOGGING_LEVEL", "chatty")], || {
        let result = run_cli(&[
            "--json",
            "grooming",
            "--coat-type",
            "straight",
            "--coat-length",
            "short",
            "--activity-level",
            "low",
            "--environment",
            "indoor",
        ]);
        assert_eq!(result.exit_code, 3, "expected configuration failure exit code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "grooming");
        assert_eq!(payload["error_class"], "configuration");
    });
}

#[test]
fn missing_explicit_config_file_fails() {
    with_env(&[], || {
        let cli = Cli::try_parse_from([
            "puppyparent",
            "--config",
            "does-not-exist/puppyparent.toml",
            "config",
        ])
        .expect("arguments should parse");
        let result = execute(cli);
        assert_eq!(result.exit_code, 3);
        assert!(result.output.starts_with("error[configuration]"));
    });
}

#[test]
fn config_command_attributes_sources() {
    with_env(&[("PUPPYPARENT_LOG_LEVEL", "debug")], || {
        let result = run_cli(&["config"]);
        assert_eq!(result.exit_code, 0);
        assert!(result
            .output
            .contains("- logging.level = debug (source: env (PUPPYPARENT_LOG_LEVEL))"));
        assert!(result.output.contains("- calendar.reference_date = 2026-10-16 (source: flag)"));
        assert!(result.output.contains("- output.format = text (source: default)"));
    });
}

#[test]
fn blank_env_values_are_reported_as_default() {
    with_env(&[("PUPPYPARENT_LOG_LEVEL", "  ")], || {
        let result = run_cli(&["config"]);
        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("- logging.level = info (source: default)"));
    });
}

fn run_cli(args: &[&str]) -> CommandResult {
    let argv = ["puppyparent", "--today", TODAY].iter().chain(args.iter()).copied();
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");
    execute(cli)
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "PUPPYPARENT_LOGGING_LEVEL",
        "PUPPYPARENT_LOGGING_FORMAT",
        "PUPPYPARENT_LOG_LEVEL",
        "PUPPYPARENT_LOG_FORMAT",
        "PUPPYPARENT_OUTPUT_FORMAT",
        "PUPPYPARENT_CALENDAR_REFERENCE_DATE",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
