use crate::ingest::models::{PlayerState, SeriesState};

#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub map: String,
    pub won: bool,
    pub players: Vec<PlayerRoundStat>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRoundStat {
    pub name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
}

impl From<&PlayerState> for PlayerRoundStat {
    fn from(player: &PlayerState) -> Self {
        PlayerRoundStat {
            name: player.name.clone(),
            kills: player.kills,
            deaths: player.deaths,
            assists: player.kill_assists_given,
        }
    }
}

/// Flatten nested series → game → segment records into one round outcome per
/// finished segment the target team played. Emission order follows the input
/// traversal order; the streak analysis depends on it.
pub fn extract_rounds(series_states: &[SeriesState], team: &str) -> Vec<Round> {
    let mut rounds = Vec::new();

    for series in series_states {
        for game in &series.games {
            for segment in &game.segments {
                if !segment.finished {
                    continue;
                }

                for entry in &segment.teams {
                    if entry.name == team {
                        rounds.push(Round {
                            map: game.map.name.clone(),
                            won: entry.won,
                            players: entry.players.iter().map(PlayerRoundStat::from).collect(),
                        });
                    }
                }
            }
        }
    }

    rounds
}
