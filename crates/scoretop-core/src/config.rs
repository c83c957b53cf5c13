//! Run configuration.
//!
//! Configuration arrives in layers: CLI values override config-file
//! values, which override built-in defaults. Resolution compiles combine
//! patterns and resolves convert-rule keys up front, so the pipeline only
//! ever sees a validated, immutable [`Config`].

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;
use tracing::error;

use crate::convert::{self, Converter};
use crate::error::{Error, Result};

/// Pipeline retry configuration.
pub mod retry {
    /// Attempts for one report generation, including the first.
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Pause between attempts, giving a live writer time to finish.
    pub const RETRY_DELAY_MS: u64 = 250;
}

/// A combine rule: objectives whose name matches `pattern` are summed
/// into a synthetic objective called `target_name`.
#[derive(Debug, Clone)]
pub struct CombineRule {
    pub pattern: Regex,
    pub target_name: String,
}

/// A convert-rule key resolved against the converter registry.
#[derive(Debug, Clone)]
pub struct ConvertDirective {
    pub multiplier: i64,
    pub converter: Converter,
    pub targets: Vec<String>,
}

/// Raw combine entry as written in a config file.
#[derive(Debug, Clone, Deserialize)]
pub struct CombineEntry {
    pub regex: String,
    pub new_name: String,
}

/// One configuration layer; unset fields fall through to the next layer
/// down.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigLayer {
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub playerdata: Option<PathBuf>,
    pub number: Option<usize>,
    pub sort_descending: Option<bool>,
    pub reverse: Option<Vec<String>>,
    pub whitelist: Option<Vec<String>>,
    pub blacklist: Option<Vec<String>>,
    pub combine: Option<Vec<CombineEntry>>,
    pub delete_combined: Option<bool>,
    pub convert: Option<BTreeMap<String, Vec<String>>>,
}

impl ConfigLayer {
    /// Loads a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(&path)?;
        serde_json::from_str(&text)
            .map_err(|e| Error::ConfigParse(format!("{}: {}", path.as_ref().display(), e)))
    }

    /// Fills unset fields from `fallback`.
    pub fn or(self, fallback: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            input_file: self.input_file.or(fallback.input_file),
            output_file: self.output_file.or(fallback.output_file),
            playerdata: self.playerdata.or(fallback.playerdata),
            number: self.number.or(fallback.number),
            sort_descending: self.sort_descending.or(fallback.sort_descending),
            reverse: self.reverse.or(fallback.reverse),
            whitelist: self.whitelist.or(fallback.whitelist),
            blacklist: self.blacklist.or(fallback.blacklist),
            combine: self.combine.or(fallback.combine),
            delete_combined: self.delete_combined.or(fallback.delete_combined),
            convert: self.convert.or(fallback.convert),
        }
    }
}

/// Fully resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub playerdata_dir: Option<PathBuf>,
    /// Scores kept per objective after sorting; 0 keeps all.
    pub number: usize,
    pub sort_descending: bool,
    /// Objectives sorted opposite to the default direction.
    pub reverse: HashSet<String>,
    pub whitelist: HashSet<String>,
    pub blacklist: HashSet<String>,
    pub combine: Vec<CombineRule>,
    pub delete_combined: bool,
    pub convert: Vec<ConvertDirective>,
}

impl Config {
    /// Resolves a merged layer against the built-in defaults.
    ///
    /// Combine patterns must compile. Convert keys with an unknown
    /// converter are reported and dropped here so the pipeline never sees
    /// them; the run itself continues.
    pub fn resolve(layer: ConfigLayer) -> Result<Config> {
        let mut combine = Vec::new();
        for entry in layer.combine.unwrap_or_default() {
            combine.push(CombineRule {
                pattern: Regex::new(&entry.regex)?,
                target_name: entry.new_name,
            });
        }

        let mut directives = Vec::new();
        for (key, targets) in layer.convert.unwrap_or_default() {
            match convert::parse_key(&key) {
                Ok((multiplier, converter)) => {
                    directives.push(ConvertDirective { multiplier, converter, targets });
                }
                Err(e) => error!("skipping convert rule {:?}: {}", key, e),
            }
        }

        Ok(Config {
            input_file: layer.input_file.unwrap_or_else(|| PathBuf::from("scoreboard.dat")),
            output_file: layer.output_file.unwrap_or_else(|| PathBuf::from("top_scores.txt")),
            playerdata_dir: layer.playerdata,
            number: layer.number.unwrap_or(0),
            sort_descending: layer.sort_descending.unwrap_or(true),
            reverse: layer.reverse.unwrap_or_default().into_iter().collect(),
            whitelist: layer.whitelist.unwrap_or_default().into_iter().collect(),
            blacklist: layer.blacklist.unwrap_or_default().into_iter().collect(),
            combine,
            delete_combined: layer.delete_combined.unwrap_or(false),
            convert: directives,
        })
    }
}
