use backpage::{
    AnthropicClient, BackpageResult, Cli, Commands, ConfigError, DEFAULT_MODEL, JsonFileSink,
    SportsDbClient, StoryPipeline, TeamId, TeamOutcome, TeamRegistry,
};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            teams,
            all,
            output,
            model,
            timeout,
        } => match run_stories(teams, all, output, model, timeout).await {
            Ok(any_succeeded) => {
                if any_succeeded {
                    ExitCode::SUCCESS
                } else {
                    eprintln!("No Stories were generated.");
                    ExitCode::FAILURE
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },

        Commands::Teams => {
            list_teams();
            ExitCode::SUCCESS
        }
    }
}

/// Run the pipeline for the selected teams; returns whether any succeeded.
async fn run_stories(
    teams: Vec<String>,
    all: bool,
    output: PathBuf,
    model: Option<String>,
    timeout: u64,
) -> BackpageResult<bool> {
    let registry = TeamRegistry::default_teams();

    let selections: Vec<TeamId> = if all {
        registry.keys()
    } else {
        teams.iter().map(|key| TeamId::from(key.as_str())).collect()
    };
    if selections.is_empty() {
        return Err(ConfigError::new(
            "no teams selected; pass --team KEY (repeatable) or --all",
        )
        .into());
    }

    let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
        ConfigError::new(
            "ANTHROPIC_API_KEY not found; check your .env file is present and correctly formatted",
        )
    })?;

    let timeout = Duration::from_secs(timeout);
    let source = SportsDbClient::new(timeout)?;
    let model = AnthropicClient::new(
        api_key,
        model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        timeout,
    )?;
    let sink = JsonFileSink::new(output)?;

    let pipeline = StoryPipeline::new(source, model, sink, registry);
    let report = pipeline.run(&selections).await;
    info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "Batch complete"
    );

    println!("\nGeneration complete: {} succeeded, {} failed\n", report.succeeded(), report.failed());
    for team_report in report.iter() {
        match team_report.outcome() {
            TeamOutcome::Success {
                matchup,
                result,
                path,
            } => {
                println!("  ok    {}", team_report.team());
                println!("        match:  {}", matchup);
                println!("        result: {}", result);
                println!("        saved:  {}", path.display());
            }
            TeamOutcome::Failure { error } => {
                println!("  fail  {}", team_report.team());
                println!("        {}", error);
            }
        }
    }

    Ok(report.any_succeeded())
}

/// Print the registered teams.
fn list_teams() {
    let registry = TeamRegistry::default_teams();
    println!("Registered teams:\n");
    for entry in registry.iter() {
        println!(
            "  {:10} {} ({}, {})",
            entry.key().as_str(),
            entry.name(),
            entry.sport(),
            entry.league()
        );
    }
}
