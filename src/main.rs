use anyhow::{Context, Result};
use clap::Parser;
use dsa_planner_lib::logging::{init_logging, LogFormat};
use dsa_planner_lib::config::get_planner_config;
use dsa_planner_lib::{PlannerConfig, StudyPlanGenerator, TopicCatalog, UserRatings};
use std::path::PathBuf;

/// Generate a 7-day data structures and algorithms study plan from skill ratings
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file of topic -> skill level (1-5)
    #[arg(short, long, required_unless_present = "list_topics")]
    ratings: Option<PathBuf>,

    /// Planner TOML config (day capacities, problem tiers). Without it,
    /// $DSA_PLANNER_CONFIG is used when set.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Topic catalog TOML replacing the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Write the plan here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// Print the catalog topics and exit
    #[arg(long)]
    list_topics: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_format)?;

    let custom_catalog = match &args.catalog {
        Some(path) => Some(
            TopicCatalog::load(path)
                .with_context(|| format!("loading catalog {}", path.display()))?,
        ),
        None => None,
    };
    let catalog = custom_catalog.as_ref().unwrap_or_else(|| TopicCatalog::builtin());

    if args.list_topics {
        for topic in catalog.topics() {
            println!(
                "{:<22} {}h  difficulty {}  prerequisites: {}",
                topic.name,
                topic.estimated_hours,
                topic.difficulty,
                if topic.prerequisites.is_empty() {
                    "-".to_string()
                } else {
                    topic.prerequisites.join(", ")
                }
            );
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => PlannerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => get_planner_config().clone(),
    };

    let ratings_path = args
        .ratings
        .as_ref()
        .context("--ratings is required")?;
    let ratings = UserRatings::load(ratings_path)
        .with_context(|| format!("loading ratings {}", ratings_path.display()))?;

    let generator = StudyPlanGenerator::new(catalog).with_config(config);
    let plan = match generator.generate_plan(&ratings) {
        Ok(plan) => plan,
        Err(e) if e.is_rejection() => {
            anyhow::bail!("{}. Please rate at least one known topic (see --list-topics)", e)
        }
        Err(e) => return Err(e.into()),
    };

    let json = if args.compact {
        serde_json::to_string(&plan)?
    } else {
        serde_json::to_string_pretty(&plan)?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("writing plan to {}", path.display()))?;
            tracing::info!(path = ?path, "Study plan written");
        }
        None => println!("{}", json),
    }

    Ok(())
}
