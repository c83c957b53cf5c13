use std::collections::{HashMap, HashSet};

/// Decides final report membership for each objective.
///
/// Combined objectives are always kept: combining is an explicit opt-in
/// and must not be silently dropped. Every other objective must clear the
/// blacklist and, when a whitelist is present, appear in it. An empty
/// whitelist means no restriction.
pub fn filter_objectives<V>(
    objectives: HashMap<String, V>,
    combined_names: &HashSet<String>,
    whitelist: &HashSet<String>,
    blacklist: &HashSet<String>,
) -> HashMap<String, V> {
    objectives
        .into_iter()
        .filter(|(name, _)| {
            combined_names.contains(name)
                || (!blacklist.contains(name)
                    && (whitelist.is_empty() || whitelist.contains(name)))
        })
        .collect()
}
