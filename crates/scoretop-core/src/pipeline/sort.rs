use std::collections::{HashMap, HashSet};

use crate::scoreboard::Objective;

/// Sorts every objective's entries into a deterministic total order.
///
/// The direction for an objective is the global default, inverted for
/// names in `reversed_names`. Ties on score break by player name
/// ascending, so equal scores land in the same order on every run.
pub fn sort_scores(
    objectives: &mut HashMap<String, Objective>,
    descending_by_default: bool,
    reversed_names: &HashSet<String>,
) {
    for (name, objective) in objectives.iter_mut() {
        let descending = descending_by_default != reversed_names.contains(name);
        objective.scores.sort_by(|a, b| {
            let primary = if descending {
                b.score.cmp(&a.score)
            } else {
                a.score.cmp(&b.score)
            };
            primary.then_with(|| a.player_name.cmp(&b.player_name))
        });
    }
}

/// Keeps at most `limit` entries per objective; `limit == 0` keeps all.
/// Applied after sorting and before rank assignment.
pub fn truncate_scores(objectives: &mut HashMap<String, Objective>, limit: usize) {
    if limit == 0 {
        return;
    }
    for objective in objectives.values_mut() {
        objective.scores.truncate(limit);
    }
}

#[cfg(test)]
mod tests {
    use crate::scoreboard::PlayerScore;

    use super::*;

    fn objectives_with(name: &str, scores: Vec<(&str, i64)>) -> HashMap<String, Objective> {
        [(
            name.to_string(),
            Objective {
                name: name.to_string(),
                display_name: name.to_string(),
                scores: scores
                    .into_iter()
                    .map(|(player, score)| PlayerScore {
                        player_name: player.to_string(),
                        score,
                    })
                    .collect(),
            },
        )]
        .into_iter()
        .collect()
    }

    fn order(objectives: &HashMap<String, Objective>, name: &str) -> Vec<String> {
        objectives[name].scores.iter().map(|s| s.player_name.clone()).collect()
    }

    #[test]
    fn test_sort_descending_ties_break_by_name() {
        let mut objectives = objectives_with("obj", vec![("a", 5), ("b", 5), ("c", 10)]);
        sort_scores(&mut objectives, true, &HashSet::new());
        assert_eq!(order(&objectives, "obj"), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_ascending() {
        let mut objectives = objectives_with("obj", vec![("a", 5), ("b", 5), ("c", 10)]);
        sort_scores(&mut objectives, false, &HashSet::new());
        assert_eq!(order(&objectives, "obj"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_reversed_names_invert_the_default() {
        let mut objectives = objectives_with("obj", vec![("a", 5), ("c", 10)]);
        let reversed: HashSet<String> = ["obj".to_string()].into_iter().collect();
        sort_scores(&mut objectives, true, &reversed);
        assert_eq!(order(&objectives, "obj"), vec!["a", "c"]);
    }

    #[test]
    fn test_sort_is_deterministic_across_runs() {
        let build = || objectives_with("obj", vec![("b", 5), ("a", 5), ("d", 5), ("c", 5)]);
        let mut first = build();
        let mut second = build();
        sort_scores(&mut first, true, &HashSet::new());
        sort_scores(&mut second, true, &HashSet::new());
        assert_eq!(order(&first, "obj"), order(&second, "obj"));
        assert_eq!(order(&first, "obj"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_truncate_keeps_leading_entries() {
        let mut objectives = objectives_with("obj", vec![("a", 5), ("b", 5), ("c", 10)]);
        sort_scores(&mut objectives, true, &HashSet::new());
        truncate_scores(&mut objectives, 2);

        assert_eq!(order(&objectives, "obj"), vec!["c", "a"]);
    }

    #[test]
    fn test_truncate_zero_keeps_everything() {
        let mut objectives = objectives_with("obj", vec![("a", 5), ("b", 5), ("c", 10)]);
        truncate_scores(&mut objectives, 0);
        assert_eq!(objectives["obj"].scores.len(), 3);
    }
}
