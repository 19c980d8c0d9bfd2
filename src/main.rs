use clap::Parser;
use indicatif::ProgressBar;
use scout_report::analysis::draft::DraftTally;
use scout_report::analysis::{insights, map_stats, player_stats, rounds, streaks};
use scout_report::config::Config;
use scout_report::display::output::{
    display_draft_tendencies, display_error, display_info, display_insights, display_map_stats,
    display_player_stats, display_report_header, display_streaks, display_success,
    display_warning,
};
use scout_report::error::AppError;
use scout_report::ingest::loader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "Scout Report")]
#[command(about = "Generate a scouting report for one team from series and draft-event data", long_about = None)]
struct Args {
    /// Target team name (falls back to SCOUT_TEAM from .env)
    team: Option<String>,

    /// Directory holding series .json and event .jsonl files
    /// (falls back to SCOUT_DATA_DIR, then ./data)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Abort on malformed event-log lines instead of skipping them
    #[arg(long)]
    strict: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let team = config.target_team(args.team)?;
    let data_dir = args.data_dir.unwrap_or_else(|| config.data_dir.clone());

    display_info(&format!("Scouting {} from {}", team, data_dir.display()));

    let files = loader::scan_data_dir(&data_dir)?;
    if files.series.is_empty() && files.events.is_empty() {
        return Err(AppError::NoDataFiles(data_dir.display().to_string()));
    }

    // Series documents → rounds
    let pb = ProgressBar::new(files.series.len() as u64);
    pb.set_message("Loading series data");
    let mut series_states = Vec::new();
    for path in &files.series {
        series_states.push(loader::load_series(path)?);
        pb.inc(1);
    }
    pb.finish_with_message("✓ Series data loaded");

    let rounds = rounds::extract_rounds(&series_states, &team);
    if rounds.is_empty() {
        display_warning(&format!("no finished rounds found for {}", team));
    } else {
        display_success(&format!("{} finished rounds found for {}", rounds.len(), team));
    }

    let map_stats = map_stats::map_win_rates(&rounds);
    let player_totals = player_stats::player_totals(&rounds);
    let star = player_stats::star_player(&player_totals);
    let patterns = streaks::round_patterns(&rounds);

    // Event logs → draft tally
    let mut tally = DraftTally::new();
    let mut skipped_lines = 0;
    for path in &files.events {
        let log = loader::load_event_batches(path, args.strict)?;
        skipped_lines += log.skipped_lines;
        for batch in &log.batches {
            tally.record(batch);
        }
    }
    if skipped_lines > 0 {
        display_warning(&format!("{} malformed event lines skipped", skipped_lines));
    }
    if tally.skipped_events() > 0 {
        display_warning(&format!(
            "{} draft events without actor/target ignored",
            tally.skipped_events()
        ));
    }

    let identity = insights::team_identity(&player_totals, &map_stats);
    let recommendations = insights::how_to_win(&map_stats, &player_totals, &team);

    display_report_header(&team);
    display_map_stats(&map_stats);
    display_player_stats(&player_totals, star);
    display_streaks(&patterns);
    display_draft_tendencies(&tally, &team);
    display_insights(&identity, &recommendations);

    Ok(())
}
