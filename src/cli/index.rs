//! The `index` command: drive the full SVG pipeline and report a summary.

use anyhow::Result;

use super::args::IndexArgs;
use crate::config::{FitprepConfig, IndexConfig};
use crate::log;
use crate::svg::emit::emit;
use crate::svg::index::{DocumentIndex, aggregate};

/// Run the indexer with CLI overrides applied over the config file.
pub fn run_index(args: &IndexArgs, config: &FitprepConfig) -> Result<()> {
    crate::logger::set_verbose(args.verbose);

    let config = merged_config(args, &config.index);
    let combined = aggregate(&config)?;
    emit(&combined, &config.output)?;

    log!("index"; "wrote {}", config.output.display());
    summarize("front", &combined.front);
    summarize("back", &combined.back);
    Ok(())
}

/// Apply flag overrides on top of the `[index]` section.
fn merged_config(args: &IndexArgs, base: &IndexConfig) -> IndexConfig {
    let mut config = base.clone();
    if let Some(front) = &args.front {
        config.front = front.clone();
    }
    if let Some(back) = &args.back {
        config.back = back.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    config.front_side = args.front_side.or(config.front_side);
    config.back_side = args.back_side.or(config.back_side);
    config
}

/// Print counts plus a short id/class preview for manual inspection.
fn summarize(label: &str, index: &DocumentIndex) {
    let counts = &index.counts;
    log!(
        "index";
        "{label} counts: total={} groups={} with_id={} with_class={}",
        counts.total, counts.groups, counts.with_id, counts.with_class
    );

    let ids: Vec<&str> = index.by_id.keys().take(10).map(String::as_str).collect();
    let classes: Vec<&str> = index
        .class_to_ids
        .keys()
        .take(20)
        .map(String::as_str)
        .collect();
    log!("index"; "{label} ids: {ids:?}");
    log!("index"; "{label} classes: {classes:?}");
}
