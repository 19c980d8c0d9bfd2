use super::round2;
use super::rounds::Round;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StreakMetrics {
    pub loss_collapse_rate: f64,
    pub win_snowball_rate: f64,
}

/// Conditional conversion rates over consecutive round pairs: how often a
/// win follows a win, and a loss follows a loss. The rounds must be in their
/// original chronological order.
pub fn round_patterns(rounds: &[Round]) -> StreakMetrics {
    let mut loss_sequences = 0u32;
    let mut loss_after_loss = 0u32;
    let mut win_sequences = 0u32;
    let mut win_after_win = 0u32;

    for pair in rounds.windows(2) {
        if pair[0].won {
            win_sequences += 1;
            if pair[1].won {
                win_after_win += 1;
            }
        } else {
            loss_sequences += 1;
            if !pair[1].won {
                loss_after_loss += 1;
            }
        }
    }

    StreakMetrics {
        loss_collapse_rate: round2(ratio(loss_after_loss, loss_sequences)),
        win_snowball_rate: round2(ratio(win_after_win, win_sequences)),
    }
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rounds(outcomes: &[bool]) -> Vec<Round> {
        outcomes
            .iter()
            .map(|&won| Round {
                map: "bind".to_string(),
                won,
                players: vec![],
            })
            .collect()
    }

    #[test]
    fn short_sequences_yield_zero_rates() {
        assert_eq!(round_patterns(&rounds(&[])), StreakMetrics::default());
        assert_eq!(round_patterns(&rounds(&[true])), StreakMetrics::default());
        assert_eq!(round_patterns(&rounds(&[false])), StreakMetrics::default());
    }

    #[test]
    fn mixed_sequence_matches_pairwise_counts() {
        // Pairs: (t,t) (t,f) (f,f) (f,f)
        let metrics = round_patterns(&rounds(&[true, true, false, false, false]));
        assert_eq!(metrics.win_snowball_rate, 0.5);
        assert_eq!(metrics.loss_collapse_rate, 1.0);
    }

    #[test]
    fn alternating_outcomes_never_convert() {
        let metrics = round_patterns(&rounds(&[true, false, true, false]));
        assert_eq!(metrics.win_snowball_rate, 0.0);
        assert_eq!(metrics.loss_collapse_rate, 0.0);
    }

    #[test]
    fn rates_stay_in_unit_interval() {
        let metrics = round_patterns(&rounds(&[true, true, true, false, false, true, false]));
        assert!((0.0..=1.0).contains(&metrics.win_snowball_rate));
        assert!((0.0..=1.0).contains(&metrics.loss_collapse_rate));
    }

    #[test]
    fn partial_conversion_rounds_to_two_decimals() {
        // Win pairs: (t,t) (t,f) (t,t) → 2/3
        let metrics = round_patterns(&rounds(&[true, true, false, true, true]));
        assert_eq!(metrics.win_snowball_rate, 0.67);
    }
}
