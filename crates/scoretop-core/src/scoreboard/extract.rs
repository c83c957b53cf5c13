use std::collections::HashMap;

use tracing::debug;

use super::{Objective, PlayerScore};
use crate::error::{Error, Result};
use crate::nbt::Tag;

/// Extracts objectives and per-player scores from a decoded scoreboard
/// document.
///
/// A score entry referencing an objective that is not declared under
/// `data.Objectives` makes the whole document unusable for this run.
pub fn extract_scores(root: &Tag) -> Result<HashMap<String, Objective>> {
    let data = root
        .get("data")
        .ok_or_else(|| Error::MalformedData("missing data compound".to_string()))?;

    let mut objectives: HashMap<String, Objective> = HashMap::new();
    for tag in list(data, "Objectives")? {
        let name = string_child(tag, "Name")?.to_string();
        let display_name = display_text(string_child(tag, "DisplayName")?);
        objectives.insert(
            name.clone(),
            Objective { name, display_name, scores: Vec::new() },
        );
    }

    for tag in list(data, "PlayerScores")? {
        let player = string_child(tag, "Name")?;
        let objective = string_child(tag, "Objective")?;
        let score = tag.get("Score").and_then(Tag::as_int).ok_or_else(|| {
            Error::MalformedData(format!("score entry for {} has no Score value", player))
        })?;

        let entry = objectives.get_mut(objective).ok_or_else(|| {
            Error::MalformedData(format!("score references unknown objective {}", objective))
        })?;
        entry.scores.push(PlayerScore { player_name: player.to_string(), score });
    }

    debug!("extracted {} objectives", objectives.len());
    Ok(objectives)
}

/// Display names are stored as JSON text components (`{"text":"..."}`);
/// older saves carry the plain string.
fn display_text(raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|v| v.get("text").and_then(|t| t.as_str()).map(str::to_string))
        .unwrap_or_else(|| raw.to_string())
}

fn list<'a>(data: &'a Tag, name: &str) -> Result<&'a [Tag]> {
    data.get(name)
        .and_then(Tag::as_list)
        .ok_or_else(|| Error::MalformedData(format!("missing {} list", name)))
}

fn string_child<'a>(tag: &'a Tag, name: &str) -> Result<&'a str> {
    tag.get(name)
        .and_then(Tag::as_str)
        .ok_or_else(|| Error::MalformedData(format!("missing {} string", name)))
}
