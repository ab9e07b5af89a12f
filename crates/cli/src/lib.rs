pub mod commands;
pub mod logging;
pub mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use puppyparent_core::config::{AppConfig, ConfigOverrides, LoadOptions, OutputFormat};
use puppyparent_core::{
    Clock, DeterministicRecommendationEngine, FeedingForm, FixedClock, GroomingForm,
    InsuranceForm, SystemClock, TrainingForm, VaccinationForm,
};

use commands::{CommandContext, CommandResult, EXIT_CONFIGURATION};

#[derive(Debug, Parser)]
#[command(
    name = "puppyparent",
    about = "Puppy care planning calculators",
    long_about = "Compute feeding, training, vaccination, grooming, and insurance plans for a puppy.",
    after_help = "Examples:\n  puppyparent feeding --age 10 --weight 8 --breed-size medium \
                  --activity-level moderate --food-type dry\n  puppyparent training \
                  --age-weeks 10 --weekly-hours 7 --goal potty,crate\n  puppyparent --json \
                  vaccination --birth-date 2026-08-01 --lifestyle social --region midwest"
)]
pub struct Cli {
    #[arg(long, global = true, value_name = "PATH", help = "Read configuration from this file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit machine-readable JSON output")]
    json: bool,
    #[arg(
        long,
        global = true,
        value_name = "YYYY-MM-DD",
        help = "Treat this date as today for completion and appointment dates"
    )]
    today: Option<NaiveDate>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Daily food amount, meal split, and expected adult weight")]
    Feeding(FeedingArgs),
    #[command(about = "Week-by-week training milestones for the selected goals")]
    Training(TrainingArgs),
    #[command(about = "Puppy vaccination appointments, costs, and the next due date")]
    Vaccination(VaccinationArgs),
    #[command(about = "Grooming task frequencies and professional grooming cost")]
    Grooming(GroomingArgs),
    #[command(about = "Basic, Standard, and Premium insurance plan estimates")]
    Insurance(InsuranceArgs),
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

#[derive(Debug, Args)]
struct FeedingArgs {
    #[arg(long)]
    age: Option<String>,
    #[arg(long, value_name = "weeks|months")]
    age_unit: Option<String>,
    #[arg(long = "weight", value_name = "LBS")]
    weight_lbs: Option<String>,
    #[arg(long, value_name = "small|medium|large|giant")]
    breed_size: Option<String>,
    #[arg(long, value_name = "low|moderate|high")]
    activity_level: Option<String>,
    #[arg(long, value_name = "dry|wet|raw")]
    food_type: Option<String>,
}

#[derive(Debug, Args)]
struct TrainingArgs {
    #[arg(long = "age-weeks")]
    current_age_weeks: Option<String>,
    #[arg(long)]
    weekly_hours: Option<String>,
    #[arg(long = "experienced", num_args = 0..=1, default_missing_value = "true")]
    has_experience: Option<String>,
    #[arg(long = "goal", help = "Training goal; repeat the flag or pass a comma-separated list")]
    goals: Vec<String>,
}

#[derive(Debug, Args)]
struct VaccinationArgs {
    #[arg(long, value_name = "YYYY-MM-DD")]
    birth_date: Option<String>,
    #[arg(long, value_name = "indoor|outdoor|social|active")]
    lifestyle: Option<String>,
    #[arg(long, value_name = "northeast|southeast|midwest|southwest|west")]
    region: Option<String>,
}

#[derive(Debug, Args)]
struct GroomingArgs {
    #[arg(long, value_name = "straight|wavy|curly|wire|double")]
    coat_type: Option<String>,
    #[arg(long, value_name = "short|medium|long")]
    coat_length: Option<String>,
    #[arg(long, value_name = "low|moderate|high")]
    activity_level: Option<String>,
    #[arg(long, value_name = "indoor|mixed|outdoor")]
    environment: Option<String>,
}

#[derive(Debug, Args)]
struct InsuranceArgs {
    #[arg(long)]
    age_weeks: Option<String>,
    #[arg(long, value_name = "small|medium|large|giant|brachycephalic")]
    breed: Option<String>,
    #[arg(long, value_name = "urban|suburban|rural")]
    location: Option<String>,
    #[arg(long, value_name = "accident|accident-illness|comprehensive")]
    coverage: Option<String>,
    #[arg(long, value_name = "100|250|500|1000")]
    deductible: Option<String>,
    #[arg(long = "reimbursement", value_name = "70|80|90")]
    reimbursement_pct: Option<String>,
}

impl From<FeedingArgs> for FeedingForm {
    fn from(args: FeedingArgs) -> Self {
        Self {
            age: args.age,
            age_unit: args.age_unit,
            weight_lbs: args.weight_lbs,
            breed_size: args.breed_size,
            activity_level: args.activity_level,
            food_type: args.food_type,
        }
    }
}

impl From<TrainingArgs> for TrainingForm {
    fn from(args: TrainingArgs) -> Self {
        Self {
            current_age_weeks: args.current_age_weeks,
            weekly_hours: args.weekly_hours,
            has_experience: args.has_experience,
            goals: args.goals,
        }
    }
}

impl From<VaccinationArgs> for VaccinationForm {
    fn from(args: VaccinationArgs) -> Self {
        Self { birth_date: args.birth_date, lifestyle: args.lifestyle, region: args.region }
    }
}

impl From<GroomingArgs> for GroomingForm {
    fn from(args: GroomingArgs) -> Self {
        Self {
            coat_type: args.coat_type,
            coat_length: args.coat_length,
            activity_level: args.activity_level,
            environment: args.environment,
        }
    }
}

impl From<InsuranceArgs> for InsuranceForm {
    fn from(args: InsuranceArgs) -> Self {
        Self {
            age_weeks: args.age_weeks,
            breed: args.breed,
            location: args.location,
            coverage: args.coverage,
            deductible: args.deductible,
            reimbursement_pct: args.reimbursement_pct,
        }
    }
}

impl Cli {
    fn command_name(&self) -> &'static str {
        match self.command {
            Command::Feeding(_) => "feeding",
            Command::Training(_) => "training",
            Command::Vaccination(_) => "vaccination",
            Command::Grooming(_) => "grooming",
            Command::Insurance(_) => "insurance",
            Command::Config => "config",
        }
    }

    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            config_path: self.config.clone(),
            require_file: self.config.is_some(),
            overrides: ConfigOverrides {
                output_format: self.json.then_some(OutputFormat::Json),
                reference_date: self.today,
                ..ConfigOverrides::default()
            },
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.load_options()) {
        Ok(config) => config,
        Err(error) => {
            let result = config_failure(&cli, &error.to_string());
            println!("{}", result.output);
            return ExitCode::from(result.exit_code);
        }
    };
    if let Err(error) = logging::init(&config.logging) {
        eprintln!("{error:#}");
    }

    let result = execute_with_config(cli, &config);
    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

/// Loads configuration and runs one parsed command without touching the
/// global log subscriber.
pub fn execute(cli: Cli) -> CommandResult {
    match AppConfig::load(cli.load_options()) {
        Ok(config) => execute_with_config(cli, &config),
        Err(error) => config_failure(&cli, &error.to_string()),
    }
}

fn execute_with_config(cli: Cli, config: &AppConfig) -> CommandResult {
    let command_name = cli.command_name();
    let clock: Box<dyn Clock> = match config.calendar.reference_date {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let context = CommandContext {
        engine: DeterministicRecommendationEngine,
        format: config.output.format,
        today: clock.today(),
    };

    tracing::debug!(
        event_name = "cli.command.started",
        command = command_name,
        today = %context.today,
        "running calculator command"
    );

    match cli.command {
        Command::Feeding(args) => commands::feeding::run(&context, &args.into()),
        Command::Training(args) => commands::training::run(&context, &args.into()),
        Command::Vaccination(args) => commands::vaccination::run(&context, &args.into()),
        Command::Grooming(args) => commands::grooming::run(&context, &args.into()),
        Command::Insurance(args) => commands::insurance::run(&context, &args.into()),
        Command::Config => {
            let mut flagged = Vec::new();
            if cli.json {
                flagged.push("output.format");
            }
            if cli.today.is_some() {
                flagged.push("calendar.reference_date");
            }
            commands::config::run(config, cli.config.as_deref(), &flagged)
        }
    }
}

fn config_failure(cli: &Cli, message: &str) -> CommandResult {
    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };
    CommandResult::failure(
        cli.command_name(),
        "configuration",
        format!("config validation failed: {message}"),
        EXIT_CONFIGURATION,
        format,
    )
}
