use crate::ingest::models::EventBatch;
use std::collections::HashMap;

/// Synthetic team key for maps settled by decider logic rather than a pick.
pub const DECIDER: &str = "DECIDER";

const BAN_EVENT: &str = "team-banned-map";
const PICK_EVENT: &str = "team-picked-map";
const DECIDER_EVENT: &str = "series-picked-map";

type CountsByTeam = HashMap<String, HashMap<String, u32>>;

/// Pick/ban counts per team per map, tallied from draft events.
#[derive(Debug, Default)]
pub struct DraftTally {
    bans: CountsByTeam,
    picks: CountsByTeam,
    skipped_events: usize,
}

impl DraftTally {
    pub fn new() -> Self {
        DraftTally::default()
    }

    pub fn record(&mut self, batch: &EventBatch) {
        for event in &batch.events {
            match event.kind.as_str() {
                BAN_EVENT | PICK_EVENT => {
                    match (event.actor_name(), event.target_name()) {
                        (Some(team), Some(map)) => {
                            let counts = if event.kind == BAN_EVENT {
                                &mut self.bans
                            } else {
                                &mut self.picks
                            };
                            increment(counts, team, map);
                        }
                        _ => self.skipped_events += 1,
                    }
                }
                DECIDER_EVENT => match event.target_name() {
                    Some(map) => increment(&mut self.picks, DECIDER, map),
                    None => self.skipped_events += 1,
                },
                _ => {}
            }
        }
    }

    pub fn bans_for(&self, team: &str) -> Vec<(String, u32)> {
        sorted_counts(self.bans.get(team))
    }

    pub fn picks_for(&self, team: &str) -> Vec<(String, u32)> {
        sorted_counts(self.picks.get(team))
    }

    /// Draft events that named no actor/target and could not be attributed.
    pub fn skipped_events(&self) -> usize {
        self.skipped_events
    }
}

fn increment(counts: &mut CountsByTeam, team: &str, map: &str) {
    *counts
        .entry(team.to_string())
        .or_default()
        .entry(map.to_string())
        .or_insert(0) += 1;
}

fn sorted_counts(counts: Option<&HashMap<String, u32>>) -> Vec<(String, u32)> {
    let mut out: Vec<(String, u32)> = counts
        .map(|m| m.iter().map(|(map, n)| (map.clone(), *n)).collect())
        .unwrap_or_default();
    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn batch(raw: &str) -> EventBatch {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn ban_event_increments_the_actor_bucket() {
        let mut tally = DraftTally::new();
        tally.record(&batch(
            r#"{"events": [{"type": "team-banned-map", "actor": {"state": {"name": "NRG"}}, "target": {"state": {"name": "Bind"}}}]}"#,
        ));

        assert_eq!(tally.bans_for("NRG"), vec![("Bind".to_string(), 1)]);
        assert!(tally.picks_for("NRG").is_empty());
    }

    #[test]
    fn repeat_picks_accumulate() {
        let mut tally = DraftTally::new();
        let line = r#"{"events": [{"type": "team-picked-map", "actor": {"state": {"name": "NRG"}}, "target": {"state": {"name": "Haven"}}}]}"#;
        tally.record(&batch(line));
        tally.record(&batch(line));

        assert_eq!(tally.picks_for("NRG"), vec![("Haven".to_string(), 2)]);
    }

    #[test]
    fn decider_picks_go_to_the_synthetic_bucket() {
        let mut tally = DraftTally::new();
        tally.record(&batch(
            r#"{"events": [{"type": "series-picked-map", "target": {"state": {"name": "Lotus"}}}]}"#,
        ));

        assert_eq!(tally.picks_for(DECIDER), vec![("Lotus".to_string(), 1)]);
        assert!(tally.bans_for(DECIDER).is_empty());
    }

    #[test]
    fn unrelated_event_types_are_ignored() {
        let mut tally = DraftTally::new();
        tally.record(&batch(
            r#"{"events": [{"type": "team-won-round", "actor": {"state": {"name": "NRG"}}, "target": {"state": {"name": "round-3"}}}, {"type": "series-started"}]}"#,
        ));

        assert!(tally.bans_for("NRG").is_empty());
        assert!(tally.picks_for("NRG").is_empty());
        assert_eq!(tally.skipped_events(), 0);
    }

    #[test]
    fn draft_event_without_actor_is_counted_as_skipped() {
        let mut tally = DraftTally::new();
        tally.record(&batch(
            r#"{"events": [{"type": "team-banned-map", "target": {"state": {"name": "Bind"}}}]}"#,
        ));

        assert_eq!(tally.skipped_events(), 1);
        assert!(tally.bans_for("NRG").is_empty());
    }

    #[test]
    fn counts_list_in_sorted_map_order() {
        let mut tally = DraftTally::new();
        for map in ["Sunset", "Bind", "Icebox"] {
            tally.record(&batch(&format!(
                r#"{{"events": [{{"type": "team-banned-map", "actor": {{"state": {{"name": "NRG"}}}}, "target": {{"state": {{"name": "{}"}}}}}}]}}"#,
                map
            )));
        }

        let maps: Vec<String> = tally.bans_for("NRG").into_iter().map(|(m, _)| m).collect();
        assert_eq!(maps, vec!["Bind", "Icebox", "Sunset"]);
    }
}
