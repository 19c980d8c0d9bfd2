use crate::analysis::draft::{DraftTally, DECIDER};
use crate::analysis::insights::{Insight, InsightKind};
use crate::analysis::map_stats::MapStat;
use crate::analysis::player_stats::PlayerStat;
use crate::analysis::streaks::StreakMetrics;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

const BAR_WIDTH: usize = 40;

#[derive(Tabled)]
struct MapRow {
    map: String,
    wins: String,
    total: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
}

#[derive(Tabled)]
struct PlayerRow {
    player: String,
    kills: String,
    deaths: String,
    assists: String,
}

#[derive(Tabled)]
struct DraftRow {
    map: String,
    bans: String,
    picks: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

pub fn display_report_header(team: &str) {
    println!(
        "\n{}",
        format!("📊 SCOUTING REPORT — {}", team).bold().cyan()
    );
    println!(
        "Generated {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );
    println!("{}\n", "=".repeat(70).cyan());
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}

pub fn display_map_stats(maps: &[MapStat]) {
    println!("{}", "🗺️  MAP-BASED TENDENCIES".bold().cyan());

    if maps.is_empty() {
        println!("{}\n", "No finished rounds observed".yellow());
        return;
    }

    let rows: Vec<MapRow> = maps
        .iter()
        .map(|m| MapRow {
            map: m.map.clone(),
            wins: m.wins.to_string(),
            total: m.total.to_string(),
            win_rate: format!("{:.0}%", m.win_rate * 100.0),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);

    let widest = maps.iter().map(|m| m.map.len()).max().unwrap_or(0);
    for stat in maps {
        let chart_bar = bar(stat.win_rate, 1.0);
        let colored_bar = if stat.win_rate >= 0.6 {
            chart_bar.green()
        } else if stat.win_rate <= 0.45 {
            chart_bar.red()
        } else {
            chart_bar.yellow()
        };
        println!(
            "  {:width$}  {} {:.0}%",
            stat.map,
            colored_bar,
            stat.win_rate * 100.0,
            width = widest
        );
    }
    println!();
}

pub fn display_player_stats(players: &[PlayerStat], star: Option<&PlayerStat>) {
    println!("{}", "👥 PLAYER TENDENCIES".bold().cyan());

    if players.is_empty() {
        println!("{}\n", "No player data observed".yellow());
        return;
    }

    let star_name = star.map(|s| s.name.as_str());
    let rows: Vec<PlayerRow> = players
        .iter()
        .map(|p| PlayerRow {
            player: if Some(p.name.as_str()) == star_name {
                format!("⭐ {}", p.name)
            } else {
                p.name.clone()
            },
            kills: p.kills.to_string(),
            deaths: p.deaths.to_string(),
            assists: p.assists.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);

    // Grouped K/D/A comparison, one block per player
    let max_stat = players
        .iter()
        .flat_map(|p| [p.kills, p.deaths, p.assists])
        .max()
        .unwrap_or(0) as f64;
    let widest = players.iter().map(|p| p.name.len()).max().unwrap_or(0);

    for p in players {
        println!(
            "  {:width$}  K {}",
            p.name,
            bar(p.kills as f64, max_stat).green(),
            width = widest
        );
        println!(
            "  {:width$}  D {}",
            "",
            bar(p.deaths as f64, max_stat).red(),
            width = widest
        );
        println!(
            "  {:width$}  A {}",
            "",
            bar(p.assists as f64, max_stat).cyan(),
            width = widest
        );
    }
    println!();

    if let Some(star) = star {
        println!("{}", "⭐ STAR PLAYER".bold().cyan());
        println!(
            "{} is the most impactful player with {} kills and {} assists.\n",
            star.name.bold().green(),
            star.kills,
            star.assists
        );
    }
}

pub fn display_streaks(metrics: &StreakMetrics) {
    println!("{}", "📈 WIN CONVERSION & LOSS COLLAPSE".bold().cyan());
    println!(
        "  {} {}%",
        "🔥 Win Snowball Rate: ".bold(),
        (metrics.win_snowball_rate * 100.0) as u32
    );
    println!(
        "  {} {}%\n",
        "⚠️  Loss Collapse Rate:".bold(),
        (metrics.loss_collapse_rate * 100.0) as u32
    );
}

pub fn display_draft_tendencies(tally: &DraftTally, team: &str) {
    println!("{}", "🗺️  DRAFT TENDENCIES".bold().cyan());

    let bans = tally.bans_for(team);
    let picks = tally.picks_for(team);

    if bans.is_empty() && picks.is_empty() {
        println!("{}\n", format!("No draft events observed for {}", team).yellow());
    } else {
        // Union of banned and picked maps, one row per map
        let mut maps: Vec<String> = bans.iter().map(|(m, _)| m.clone()).collect();
        for (map, _) in &picks {
            if !maps.contains(map) {
                maps.push(map.clone());
            }
        }
        maps.sort();

        let count_for = |counts: &[(String, u32)], map: &str| {
            counts
                .iter()
                .find(|(m, _)| m == map)
                .map(|(_, n)| *n)
                .unwrap_or(0)
        };

        let rows: Vec<DraftRow> = maps
            .iter()
            .map(|map| DraftRow {
                map: map.clone(),
                bans: count_for(&bans, map).to_string(),
                picks: count_for(&picks, map).to_string(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}\n", table);
    }

    let decider = tally.picks_for(DECIDER);
    if !decider.is_empty() {
        let summary = decider
            .iter()
            .map(|(map, n)| format!("{} ×{}", map, n))
            .collect::<Vec<String>>()
            .join(", ");
        println!("  {} {}\n", "Decider maps:".bold(), summary);
    }
}

pub fn display_insights(identity: &[Insight], recommendations: &[Insight]) {
    println!("{}", "🧠 TEAM-WIDE STRATEGIES".bold().cyan());
    if identity.is_empty() {
        println!("{}", "Not enough data for identity analysis".yellow());
    }
    for insight in identity {
        println!("  • {}", insight.text);
    }
    println!();

    println!("{}", "🏆 HOW TO WIN".bold().cyan());
    if recommendations.is_empty() {
        println!("{}", "Not enough data for recommendations".yellow());
    }
    for insight in recommendations {
        let text = match insight.kind {
            InsightKind::ForceMap => insight.text.green().to_string(),
            InsightKind::AvoidMap => insight.text.red().to_string(),
            InsightKind::TargetPlayer => insight.text.bold().to_string(),
            _ => insight.text.clone(),
        };
        println!("  • {}", text);
    }
    println!();
}
