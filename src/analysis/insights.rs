use super::map_stats::MapStat;
use super::player_stats::{top_fragger, PlayerStat};

// Kill share above which the team is considered carried by one player
const KILL_SHARE_DEPENDENCY: f64 = 0.35;
// Identity partition thresholds
const IDENTITY_STRONG: f64 = 0.6;
const IDENTITY_WEAK: f64 = 0.45;
// Draft recommendation thresholds
const FORCE_BELOW: f64 = 0.45;
const AVOID_ABOVE: f64 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    ForceMap,
    AvoidMap,
    NeutralMaps,
    TargetPlayer,
    TeamIdentity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: String,
}

impl Insight {
    fn new(kind: InsightKind, text: String) -> Self {
        Insight { kind, text }
    }
}

/// Truncating percentage: 0.667 renders as 66, not 67.
fn pct(rate: f64) -> u32 {
    (rate * 100.0) as u32
}

fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Team-identity statements: kill distribution, support-heavy rosters, and
/// the strong/weak map split.
pub fn team_identity(players: &[PlayerStat], maps: &[MapStat]) -> Vec<Insight> {
    let mut insights = Vec::new();

    let total_kills: u32 = players.iter().map(|p| p.kills).sum();
    if total_kills > 0 {
        if let Some(leader) = top_fragger(players) {
            let share = leader.kills as f64 / total_kills as f64;
            let text = if share > KILL_SHARE_DEPENDENCY {
                format!(
                    "High dependency on {}, who contributes {}% of total team kills.",
                    leader.name,
                    pct(share)
                )
            } else {
                "Distributed fragging model with multiple players contributing consistently."
                    .to_string()
            };
            insights.push(Insight::new(InsightKind::TeamIdentity, text));
        }
    }

    let support_players: Vec<&str> = players
        .iter()
        .filter(|p| p.assists > p.kills)
        .map(|p| p.name.as_str())
        .collect();
    if support_players.len() >= 2 {
        insights.push(Insight::new(
            InsightKind::TeamIdentity,
            format!(
                "Utility- and support-heavy playstyle driven by {}.",
                support_players.join(", ")
            ),
        ));
    }

    let strong: Vec<&str> = maps
        .iter()
        .filter(|m| m.win_rate >= IDENTITY_STRONG)
        .map(|m| m.map.as_str())
        .collect();
    if !strong.is_empty() {
        insights.push(Insight::new(
            InsightKind::TeamIdentity,
            format!(
                "Team performs best on structured maps such as {}.",
                strong.join(", ")
            ),
        ));
    }

    let weak: Vec<&str> = maps
        .iter()
        .filter(|m| m.win_rate <= IDENTITY_WEAK)
        .map(|m| m.map.as_str())
        .collect();
    if !weak.is_empty() {
        insights.push(Insight::new(
            InsightKind::TeamIdentity,
            format!(
                "Team struggles on looser, high-variance maps like {}.",
                weak.join(", ")
            ),
        ));
    }

    insights
}

/// Draft recommendations against the target team: force its weak maps,
/// avoid its strong ones, note the neutral remainder, and name the player
/// to shut down early.
pub fn how_to_win(maps: &[MapStat], players: &[PlayerStat], team: &str) -> Vec<Insight> {
    let mut insights = Vec::new();

    let mut weak = Vec::new();
    let mut strong = Vec::new();
    let mut neutral = Vec::new();
    for stat in maps {
        if stat.win_rate <= FORCE_BELOW {
            weak.push(stat);
        } else if stat.win_rate >= AVOID_ABOVE {
            strong.push(stat);
        } else {
            neutral.push(stat);
        }
    }

    for stat in weak {
        insights.push(Insight::new(
            InsightKind::ForceMap,
            format!(
                "Force {} — {} wins only {}% of rounds here.",
                title_case(&stat.map),
                team,
                pct(stat.win_rate)
            ),
        ));
    }

    for stat in strong {
        insights.push(Insight::new(
            InsightKind::AvoidMap,
            format!(
                "Avoid {} — {} is very strong with a {}% win rate.",
                title_case(&stat.map),
                team,
                pct(stat.win_rate)
            ),
        ));
    }

    if !neutral.is_empty() {
        let names = neutral
            .iter()
            .map(|s| format!("{} ({}%)", title_case(&s.map), pct(s.win_rate)))
            .collect::<Vec<String>>()
            .join(", ");
        insights.push(Insight::new(
            InsightKind::NeutralMaps,
            format!(
                "{} are neutral maps for {} and not priority draft targets.",
                names, team
            ),
        ));
    }

    if let Some(target) = top_fragger(players) {
        insights.push(Insight::new(
            InsightKind::TargetPlayer,
            format!(
                "Target {} early — highest damage output on {} with {} total kills.",
                target.name, team, target.kills
            ),
        ));
    }

    insights
}
