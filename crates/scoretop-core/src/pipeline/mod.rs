//! The report pipeline.
//!
//! One run is a single pass: snapshot the source, extract, combine, sort,
//! truncate, rank, filter, convert, and assemble the report. The whole
//! pass sits inside a bounded retry; a failed attempt releases its
//! snapshot and the next attempt restarts from scratch.

mod combine;
mod filter;
mod sort;

pub use combine::combine_scores;
pub use filter::filter_objectives;
pub use sort::{sort_scores, truncate_scores};

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::Utc;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::convert;
use crate::error::Result;
use crate::identity;
use crate::nbt;
use crate::report::{RankedObjective, RankedScore, Report, ScoreValue};
use crate::retry::RetryStrategy;
use crate::scoreboard::{self, Objective};
use crate::snapshot::SourceSnapshot;

/// Runs the whole pipeline once: one source snapshot, one report.
pub fn run_once(config: &Config) -> Result<Report> {
    let objectives = {
        let snapshot = SourceSnapshot::create(&config.input_file)?;
        let root = nbt::read_file(snapshot.path())?;
        scoreboard::extract_scores(&root)?
    };

    let (combined, remaining) =
        combine_scores(objectives, &config.combine, config.delete_combined);
    let combined_names: HashSet<String> = combined.keys().cloned().collect();

    // Combined objectives shadow same-named sources.
    let mut merged = remaining;
    merged.extend(combined);

    sort_scores(&mut merged, config.sort_descending, &config.reverse);
    truncate_scores(&mut merged, config.number);

    let ranked = rank_objectives(merged);
    let filtered =
        filter_objectives(ranked, &combined_names, &config.whitelist, &config.blacklist);

    let converted = convert::convert_scores(&filtered, &config.convert);
    let mut scores: BTreeMap<String, RankedObjective> = filtered.into_iter().collect();
    // Converted objectives replace their raw counterparts on key collision.
    scores.extend(converted);
    debug!("report holds {} objectives", scores.len());

    let identities = match &config.playerdata_dir {
        Some(dir) => Some(identity::read_identities(dir)?),
        None => None,
    };

    Ok(Report { timestamp: epoch_seconds(), scores, identities })
}

/// Runs the pipeline under the given retry strategy.
///
/// Each failed attempt logs the error kind, its message, and the attempts
/// remaining; exhaustion returns the last error and nothing is written.
pub fn run(config: &Config, strategy: &impl RetryStrategy) -> Result<Report> {
    let max = strategy.max_attempts();
    strategy.execute(|attempt| {
        if attempt > 0 {
            info!("retrying report generation (attempt {}/{})", attempt + 1, max);
        }
        run_once(config).inspect_err(|e| {
            let remaining = max.saturating_sub(attempt + 1);
            error!("{} error: {} ({} attempts remaining)", e.kind(), e, remaining);
        })
    })
}

/// Assigns dense 1-based ranks in the already-sorted entry order.
fn rank_objectives(objectives: HashMap<String, Objective>) -> HashMap<String, RankedObjective> {
    objectives
        .into_iter()
        .map(|(name, objective)| {
            let scores = objective
                .scores
                .into_iter()
                .enumerate()
                .map(|(i, entry)| RankedScore {
                    index: i + 1,
                    player_name: entry.player_name,
                    score: ScoreValue::Raw(entry.score),
                })
                .collect();
            (
                name,
                RankedObjective { display_name: objective.display_name, scores },
            )
        })
        .collect()
}

fn epoch_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
