use crate::data_fetcher::models::{PlayByPlayResponse, PlayEvent};
use std::collections::HashMap;

/// Event types left out of the narrative.
const SKIPPED_EVENTS: &[&str] = &[
    "period-start",
    "period-end",
    "game-end",
    "stoppage",
    "giveaway",
    "takeaway",
    "delayed-penalty",
];

/// Maps player ids to `First Last (#)` labels from the roster spots.
pub fn roster_names(pbp: &PlayByPlayResponse) -> HashMap<i64, String> {
    pbp.roster_spots
        .iter()
        .map(|spot| {
            (
                spot.player_id,
                format!(
                    "{} {} ({})",
                    spot.first_name.default, spot.last_name.default, spot.sweater_number
                ),
            )
        })
        .collect()
}

fn name_of(names: &HashMap<i64, String>, id: Option<i64>) -> &str {
    id.and_then(|id| names.get(&id))
        .map(String::as_str)
        .unwrap_or("Unknown")
}

/// Narrative line for one play, or `None` for events that are skipped.
pub fn describe_play(play: &PlayEvent, names: &HashMap<i64, String>) -> Option<String> {
    let kind = play.type_desc_key.as_str();
    if SKIPPED_EVENTS.contains(&kind) {
        return None;
    }

    let d = &play.details;
    let description = match kind {
        "shot-on-goal" => format!(
            "Shot by {}, saved by {}",
            name_of(names, d.shooting_player_id),
            name_of(names, d.goalie_in_net_id)
        ),
        "goal" => {
            let mut text = format!("GOAL! Scored by {}", name_of(names, d.scoring_player_id));
            let first = d.assist1_player_id.filter(|id| *id > 0);
            let second = d.assist2_player_id.filter(|id| *id > 0);
            match (first, second) {
                (Some(_), Some(_)) => text.push_str(&format!(
                    " (Assists: {}, {})",
                    name_of(names, first),
                    name_of(names, second)
                )),
                (Some(_), None) => {
                    text.push_str(&format!(" (Assist: {})", name_of(names, first)))
                }
                _ => {}
            }
            text
        }
        "blocked-shot" => format!(
            "Shot by {} blocked by {}",
            name_of(names, d.shooting_player_id),
            name_of(names, d.blocking_player_id)
        ),
        "missed-shot" => format!(
            "Shot by {} ({})",
            name_of(names, d.shooting_player_id),
            d.reason.as_deref().unwrap_or("missed")
        ),
        "hit" => format!(
            "{} hit {}",
            name_of(names, d.hitting_player_id),
            name_of(names, d.hittee_player_id)
        ),
        "faceoff" => format!(
            "Faceoff won by {} vs {}",
            name_of(names, d.winning_player_id),
            name_of(names, d.losing_player_id)
        ),
        "penalty" => format!(
            "{} {} ({} min) drawn by {}",
            name_of(names, d.committed_by_player_id),
            d.desc_key.as_deref().unwrap_or("penalty"),
            d.duration.unwrap_or(0),
            name_of(names, d.drawn_by_player_id)
        ),
        other => other.to_string(),
    };
    Some(description)
}
