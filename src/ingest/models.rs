use serde::Deserialize;

// Series-state document: {data: {seriesState: {games: [...]}}}
#[derive(Debug, Deserialize)]
pub struct SeriesDocument {
    pub data: SeriesData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesData {
    pub series_state: SeriesState,
}

#[derive(Debug, Deserialize)]
pub struct SeriesState {
    pub games: Vec<Game>,
}

#[derive(Debug, Deserialize)]
pub struct Game {
    pub map: MapInfo,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Deserialize)]
pub struct MapInfo {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Segment {
    pub finished: bool,
    pub teams: Vec<TeamState>,
}

#[derive(Debug, Deserialize)]
pub struct TeamState {
    pub name: String,
    pub won: bool,
    pub players: Vec<PlayerState>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub name: String,
    pub kills: u32,
    pub deaths: u32,
    pub kill_assists_given: u32,
}

// One line of a newline-delimited event log: {events: [...]}
#[derive(Debug, Deserialize)]
pub struct EventBatch {
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    // Absent on event types we do not tally
    #[serde(default)]
    pub actor: Option<EventEntity>,
    #[serde(default)]
    pub target: Option<EventEntity>,
}

impl Event {
    pub fn actor_name(&self) -> Option<&str> {
        self.actor.as_ref().map(|a| a.state.name.as_str())
    }

    pub fn target_name(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.state.name.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct EventEntity {
    pub state: EntityState,
}

#[derive(Debug, Deserialize)]
pub struct EntityState {
    pub name: String,
}
