//! Converts raw integer scores into human-readable strings.
//!
//! A convert-rule key names a converter, optionally prefixed by a unit:
//! `"hms"` formats play ticks as hours/minutes/seconds, `"K_si"`
//! pre-scales the raw value by 1000 and si-formats it. Converters are a
//! closed set; an unknown converter name fails only its own rule.

mod si;
mod time;

use std::collections::HashMap;
use std::str::FromStr;

use strum::EnumString;
use tracing::warn;

use crate::config::ConvertDirective;
use crate::error::{Error, Result};
use crate::report::{RankedObjective, ScoreValue};

pub use si::{PREFIXES, blocks, format_si};

/// Closed registry of score converters. Each is a pure `i64 -> String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Converter {
    Seconds,
    Minutes,
    Hours,
    Hm,
    Ms,
    Hms,
    Blocks,
    Si,
}

impl Converter {
    pub fn apply(&self, raw: i64) -> String {
        match self {
            Converter::Seconds => time::seconds(raw),
            Converter::Minutes => time::minutes(raw),
            Converter::Hours => time::hours(raw),
            Converter::Hm => time::hours_minutes(raw),
            Converter::Ms => time::minutes_seconds(raw),
            Converter::Hms => time::hours_minutes_seconds(raw),
            Converter::Blocks => si::blocks(raw),
            Converter::Si => si::format_si(raw as f64),
        }
    }
}

/// Parses a rule key into its pre-scaling multiplier and converter.
///
/// Keys are `"<unit>_<converter>"` or a bare converter name. An unknown
/// unit prefix falls back to identity scaling; an unknown converter is an
/// error the caller reports and skips.
pub fn parse_key(key: &str) -> Result<(i64, Converter)> {
    let (unit, name) = match key.rsplit_once('_') {
        Some((unit, name)) => (Some(unit), name),
        None => (None, key),
    };
    let converter =
        Converter::from_str(name).map_err(|_| Error::UnknownConverter(key.to_string()))?;
    let multiplier = match unit {
        None => 1,
        Some(unit) => unit_multiplier(unit).unwrap_or_else(|| {
            warn!("{}, using identity scaling", Error::UnknownUnit(unit.to_string()));
            1
        }),
    };
    Ok((multiplier, converter))
}

/// Multiplier for a unit prefix. The SI prefix table doubles as the unit
/// registry: the prefix at index i scales by 1000^i.
fn unit_multiplier(unit: &str) -> Option<i64> {
    PREFIXES
        .iter()
        .position(|p| !p.is_empty() && p.eq_ignore_ascii_case(unit))
        .map(|i| 1000i64.pow(i as u32))
}

/// Applies resolved convert directives to the final objectives.
///
/// Returns a fresh mapping keyed by target objective name. Targets are
/// deep-copied before conversion, so the numeric originals stay intact
/// for callers that serve both forms.
pub fn convert_scores(
    objectives: &HashMap<String, RankedObjective>,
    directives: &[ConvertDirective],
) -> HashMap<String, RankedObjective> {
    let mut converted = HashMap::new();
    for directive in directives {
        for target in &directive.targets {
            let Some(original) = objectives.get(target) else {
                warn!("convert target {:?} is not in the final objectives", target);
                continue;
            };
            let mut copy = original.clone();
            for entry in &mut copy.scores {
                if let ScoreValue::Raw(raw) = entry.score {
                    let scaled = raw.saturating_mul(directive.multiplier);
                    entry.score = ScoreValue::Text(directive.converter.apply(scaled));
                }
            }
            converted.insert(target.clone(), copy);
        }
    }
    converted
}
