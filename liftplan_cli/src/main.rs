use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use liftplan_core::rng::week_token;
use liftplan_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "liftplan")]
#[command(about = "Deterministic weekly training plan generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use a custom exercise catalog (JSON)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Plan for the week containing this date (YYYY-MM-DD, default today)
    #[arg(long, global = true)]
    date: Option<String>,

    /// Experience level (beginner, intermediate, advanced)
    #[arg(long, global = true)]
    experience: Option<String>,

    /// Training focus (strength, hypertrophy, endurance, general_fitness)
    #[arg(long, global = true)]
    focus: Option<String>,

    /// Training days per week (clamped to 1-7)
    #[arg(long, global = true)]
    days: Option<u32>,

    /// Preferred session length in minutes
    #[arg(long, global = true)]
    duration: Option<u32>,

    /// Available equipment (repeatable, replaces the configured list)
    #[arg(long, global = true)]
    equipment: Vec<String>,

    /// Exercise id to exclude (repeatable, adds to the configured list)
    #[arg(long, global = true)]
    dislike: Vec<String>,

    /// Emit JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate this week's full training plan (default)
    Generate,

    /// Show only today's session from this week's plan
    Today,

    /// Suggest a replacement for an exercise
    Swap {
        /// Exercise id to replace
        #[arg(long)]
        exercise: String,
    },

    /// Check the exercise catalog for structural problems
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_with_level(logging::level_for_verbosity(cli.verbose));

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // The catalog comes from --catalog, then the config, then the built-in set
    let loaded;
    let catalog = match cli.catalog.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => {
            loaded = Catalog::load_from_file(path)?;
            &loaded
        }
        None => get_default_catalog(),
    };

    if matches!(cli.command, Some(Commands::Validate)) {
        return cmd_validate(catalog);
    }

    ensure_valid_catalog(catalog)?;
    let params = build_params(&cli, &config)?;
    let date = resolve_date(cli.date.as_deref())?;

    match cli.command {
        Some(Commands::Today) => cmd_today(catalog, &params, date, cli.json),
        Some(Commands::Swap { ref exercise }) => {
            cmd_swap(catalog, exercise, &params, date, cli.json)
        }
        _ => cmd_generate(catalog, &params, date, cli.json),
    }
}

/// Merge CLI overrides over the configured defaults
fn build_params(cli: &Cli, config: &Config) -> Result<GenerationParameters> {
    let mut params = config.params();

    if let Some(ref experience) = cli.experience {
        params.experience = experience.parse().map_err(Error::Config)?;
    }
    if let Some(ref focus) = cli.focus {
        params.focus = focus.parse().map_err(Error::Config)?;
    }
    if let Some(days) = cli.days {
        params.weekly_availability = days;
    }
    if let Some(duration) = cli.duration {
        params.preferred_duration_minutes = duration;
    }
    if !cli.equipment.is_empty() {
        params.available_equipment = cli.equipment.iter().cloned().collect();
    }
    for dislike in &cli.dislike {
        params.disliked_exercises.insert(dislike.clone());
    }

    Ok(params)
}

fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| Error::Config(format!("Invalid date '{}': {}", raw, e))),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn ensure_valid_catalog(catalog: &Catalog) -> Result<()> {
    let errors = catalog.validate();
    if errors.is_empty() {
        return Ok(());
    }
    eprintln!("Catalog validation errors:");
    for error in &errors {
        eprintln!("  - {}", error);
    }
    Err(Error::CatalogValidation(format!(
        "{} validation errors",
        errors.len()
    )))
}

fn cmd_generate(
    catalog: &Catalog,
    params: &GenerationParameters,
    date: NaiveDate,
    json: bool,
) -> Result<()> {
    let program = generate_program(catalog, params, date);

    if json {
        println!("{}", serde_json::to_string_pretty(&program)?);
    } else {
        display_program(&program, date);
    }

    Ok(())
}

fn cmd_today(
    catalog: &Catalog,
    params: &GenerationParameters,
    date: NaiveDate,
    json: bool,
) -> Result<()> {
    let program = generate_program(catalog, params, date);

    match todays_session(&program, date) {
        Some(session) => {
            if json {
                println!("{}", serde_json::to_string_pretty(session)?);
            } else {
                display_session(session);
            }
        }
        None => println!("No session scheduled."),
    }

    Ok(())
}

fn cmd_swap(
    catalog: &Catalog,
    exercise_id: &str,
    params: &GenerationParameters,
    date: NaiveDate,
    json: bool,
) -> Result<()> {
    let week = week_token(date);

    match find_alternative(catalog, exercise_id, params, &week)? {
        Some(alternative) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&alternative)?);
            } else {
                let original = catalog
                    .get(exercise_id)
                    .map(|e| e.name.as_str())
                    .unwrap_or(exercise_id);
                println!();
                println!("Instead of {}, try:", original);
                println!("  {}  ({})", alternative.name, alternative.movement_pattern);
                if let Some(ref instructions) = alternative.instructions {
                    println!("  {}", instructions);
                }
            }
        }
        None => {
            println!("No suitable alternative found for '{}'", exercise_id);
        }
    }

    Ok(())
}

fn cmd_validate(catalog: &Catalog) -> Result<()> {
    let errors = catalog.validate();

    if errors.is_empty() {
        println!(
            "✓ Catalog valid: {} exercises, {} alternative lists",
            catalog.exercises.len(),
            catalog.alternatives.len()
        );
        return Ok(());
    }

    println!("Catalog has {} problems:", errors.len());
    for error in &errors {
        println!("  - {}", error);
    }
    Err(Error::CatalogValidation(format!(
        "{} validation errors",
        errors.len()
    )))
}

fn display_program(program: &GeneratedProgram, date: NaiveDate) {
    println!("\n╭─────────────────────────────────────────╮");
    println!(
        "│  {} PLAN, WEEK {}",
        program.archetype.to_string().to_uppercase(),
        week_token(date)
    );
    println!("╰─────────────────────────────────────────╯");

    for session in &program.sessions {
        display_session(session);
    }
    println!();
}

fn display_session(session: &GeneratedSession) {
    println!();
    println!(
        "── {} ── {} session, ~{} min",
        session.name, session.session_type, session.estimated_minutes
    );

    if let Some(ref warmup) = session.warmup {
        println!("  Warm-up:");
        for entry in warmup {
            display_exercise(entry);
        }
    }

    println!("  Main:");
    for entry in &session.main {
        display_exercise(entry);
    }

    if let Some(ref cooldown) = session.cooldown {
        println!("  Cool-down:");
        for entry in cooldown {
            display_exercise(entry);
        }
    }
}

fn display_exercise(entry: &ResolvedExercise) {
    println!(
        "    {}  {} x {}  ({}s rest)",
        entry.name, entry.sets, entry.reps, entry.rest_seconds
    );
}
