use std::collections::HashMap;

use crate::config::CombineRule;
use crate::scoreboard::{Objective, PlayerScore};

/// Merges objectives matched by combine rules into synthetic objectives.
///
/// Returns the combined objectives and the surviving sources. Rules are
/// evaluated in declared order and the first match owns an objective;
/// later rules are not consulted for it. Matched sources survive unless
/// `delete_sources` is set; unmatched sources always survive. A rule that
/// matches nothing produces nothing.
pub fn combine_scores(
    objectives: HashMap<String, Objective>,
    rules: &[CombineRule],
    delete_sources: bool,
) -> (HashMap<String, Objective>, HashMap<String, Objective>) {
    let mut totals: HashMap<String, HashMap<String, i64>> = HashMap::new();
    let mut remaining = HashMap::new();

    for (name, objective) in objectives {
        match rules.iter().find(|rule| rule.pattern.is_match(&name)) {
            Some(rule) => {
                let bucket = totals.entry(rule.target_name.clone()).or_default();
                for entry in &objective.scores {
                    *bucket.entry(entry.player_name.clone()).or_insert(0) += entry.score;
                }
                if !delete_sources {
                    remaining.insert(name, objective);
                }
            }
            None => {
                remaining.insert(name, objective);
            }
        }
    }

    let combined = totals
        .into_iter()
        .map(|(target, players)| {
            let scores = players
                .into_iter()
                .map(|(player_name, score)| PlayerScore { player_name, score })
                .collect();
            let objective = Objective {
                name: target.clone(),
                display_name: target.clone(),
                scores,
            };
            (target, objective)
        })
        .collect();

    (combined, remaining)
}
