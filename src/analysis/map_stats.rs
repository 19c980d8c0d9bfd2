use super::round2;
use super::rounds::Round;

#[derive(Debug, Clone, PartialEq)]
pub struct MapStat {
    pub map: String,
    pub wins: u32,
    pub total: u32,
    pub win_rate: f64,
}

impl MapStat {
    fn new(map: String) -> Self {
        MapStat {
            map,
            wins: 0,
            total: 0,
            win_rate: 0.0,
        }
    }
}

/// Per-map round win rates, grouped in first-seen order. Only maps with at
/// least one observed round appear.
pub fn map_win_rates(rounds: &[Round]) -> Vec<MapStat> {
    let mut stats: Vec<MapStat> = Vec::new();

    for round in rounds {
        let idx = match stats.iter().position(|s| s.map == round.map) {
            Some(i) => i,
            None => {
                stats.push(MapStat::new(round.map.clone()));
                stats.len() - 1
            }
        };

        stats[idx].total += 1;
        if round.won {
            stats[idx].wins += 1;
        }
    }

    for stat in &mut stats {
        stat.win_rate = round2(stat.wins as f64 / stat.total as f64);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn round(map: &str, won: bool) -> Round {
        Round {
            map: map.to_string(),
            won,
            players: vec![],
        }
    }

    #[test]
    fn two_of_three_on_bind_rounds_to_67() {
        let rounds = vec![round("Bind", true), round("Bind", true), round("Bind", false)];

        let stats = map_win_rates(&rounds);
        assert_eq!(
            stats,
            vec![MapStat {
                map: "Bind".to_string(),
                wins: 2,
                total: 3,
                win_rate: 0.67,
            }]
        );
    }

    #[test]
    fn totals_sum_to_round_count() {
        let rounds = vec![
            round("Bind", true),
            round("Haven", false),
            round("Bind", false),
            round("Ascent", true),
            round("Haven", false),
        ];

        let stats = map_win_rates(&rounds);
        let total: u32 = stats.iter().map(|s| s.total).sum();
        assert_eq!(total as usize, rounds.len());
    }

    #[test]
    fn win_rate_hits_both_bounds() {
        let rounds = vec![
            round("Icebox", true),
            round("Icebox", true),
            round("Sunset", false),
        ];

        let stats = map_win_rates(&rounds);
        assert_eq!(stats[0].win_rate, 1.0);
        assert_eq!(stats[1].win_rate, 0.0);
    }

    #[test]
    fn values_are_order_independent() {
        let mut rounds = vec![
            round("Bind", true),
            round("Haven", false),
            round("Bind", false),
        ];
        let forward = map_win_rates(&rounds);
        rounds.reverse();
        let backward = map_win_rates(&rounds);

        for stat in &forward {
            let other = backward.iter().find(|s| s.map == stat.map).unwrap();
            assert_eq!((other.wins, other.total, other.win_rate), (stat.wins, stat.total, stat.win_rate));
        }
    }

    #[test]
    fn no_rounds_means_no_maps() {
        assert_eq!(map_win_rates(&[]), Vec::<MapStat>::new());
    }
}
