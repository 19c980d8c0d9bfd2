use super::rounds::Round;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStat {
    pub name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
}

impl PlayerStat {
    fn new(name: String) -> Self {
        PlayerStat {
            name,
            kills: 0,
            deaths: 0,
            assists: 0,
        }
    }

    /// Star-player ranking metric.
    pub fn impact(&self) -> u32 {
        self.kills + self.assists
    }
}

/// Sum kills/deaths/assists per player name across all rounds, in
/// first-encounter order. That order doubles as the tie-break for the
/// star-player selection below.
pub fn player_totals(rounds: &[Round]) -> Vec<PlayerStat> {
    let mut totals: Vec<PlayerStat> = Vec::new();

    for round in rounds {
        for player in &round.players {
            let idx = match totals.iter().position(|p| p.name == player.name) {
                Some(i) => i,
                None => {
                    totals.push(PlayerStat::new(player.name.clone()));
                    totals.len() - 1
                }
            };

            totals[idx].kills += player.kills;
            totals[idx].deaths += player.deaths;
            totals[idx].assists += player.assists;
        }
    }

    totals
}

/// Most impactful player by kills + assists; the first maximum wins on ties.
pub fn star_player(totals: &[PlayerStat]) -> Option<&PlayerStat> {
    totals
        .iter()
        .reduce(|best, p| if p.impact() > best.impact() { p } else { best })
}

/// Highest raw kill count, used for the "target early" call-out. Same
/// tie-break as star_player.
pub fn top_fragger(totals: &[PlayerStat]) -> Option<&PlayerStat> {
    totals
        .iter()
        .reduce(|best, p| if p.kills > best.kills { p } else { best })
}
