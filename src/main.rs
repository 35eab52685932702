use anyhow::Result;
use clap::Parser;

use buli_scores::config::AppConfig;
use buli_scores::matchday::filter_by_team;
use buli_scores::matchday_fetch::fetch_matchday;
use buli_scores::report::render_report;

/// Print all scores from the current day of play in the German soccer
/// Bundesliga to stdout.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Show only games from teams with names containing TEAM
    #[arg(long)]
    team: Option<String>,
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let matches = fetch_matchday(&config)?;
    let matches = filter_by_team(matches, cli.team.as_deref());

    let report = render_report(&matches, cli.team.is_none(), &config);
    print!("{report}");
    Ok(())
}
