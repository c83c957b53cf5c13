mod cli;

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::Parser;
use scoretop_core::config::{CombineEntry, Config, ConfigLayer};
use scoretop_core::{FixedDelay, pipeline};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("scoretop=info".parse()?)
                .add_directive("scoretop_core=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut layer = layer_from_args(&args)?;
    if let Some(config_path) = &args.config {
        let file_layer = ConfigLayer::load(config_path)
            .with_context(|| format!("failed to load config {}", config_path.display()))?;
        layer = layer.or(file_layer);
    }
    let config = Config::resolve(layer)?;

    let report = pipeline::run(&config, &FixedDelay::default())
        .context("report generation failed after all retries")?;
    report.write(&config.output_file)?;

    info!("wrote report to {}", config.output_file.display());
    Ok(())
}

/// Builds the highest-precedence configuration layer from CLI arguments.
fn layer_from_args(args: &Args) -> Result<ConfigLayer> {
    let mut combine = Vec::new();
    for rule in &args.combine {
        let (regex, new_name) = rule
            .split_once(' ')
            .with_context(|| format!("combine rule {:?} is not \"<regex> <name>\"", rule))?;
        combine.push(CombineEntry {
            regex: regex.to_string(),
            new_name: new_name.to_string(),
        });
    }

    let mut convert: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for rule in &args.convert {
        let (key, objective) = rule
            .split_once(' ')
            .with_context(|| format!("convert rule {:?} is not \"<key> <objective>\"", rule))?;
        convert
            .entry(key.to_string())
            .or_default()
            .push(objective.to_string());
    }

    let sort_descending = if args.ascending {
        Some(false)
    } else if args.descending {
        Some(true)
    } else {
        None
    };

    Ok(ConfigLayer {
        input_file: args.input.clone(),
        output_file: args.output.clone(),
        playerdata: args.playerdata.clone(),
        number: args.number,
        sort_descending,
        reverse: none_if_empty(&args.reverse),
        whitelist: none_if_empty(&args.whitelist),
        blacklist: none_if_empty(&args.blacklist),
        combine: if combine.is_empty() { None } else { Some(combine) },
        delete_combined: args.delete_combined.then_some(true),
        convert: if convert.is_empty() { None } else { Some(convert) },
    })
}

fn none_if_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}
