//! Command implementations: score a table, list indices.

use anyhow::{Context, Result};
use comfy_table::Table;
use polars::prelude::DataFrame;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use dqi_score::{DietIndex, Scores, all_indices, attach_scores, summarize};
use dqi_validate::{CoercionMode, ValidateOptions};

use crate::cli::{MappingArg, ScoreArgs};
use crate::summary::apply_table_style;
use crate::types::{IndexOutcome, ScoreResult};

pub fn run_indices() -> Result<()> {
    let parameters =
        dqi_standards::load_default_dii_parameters().context("load DII parameters")?;
    let indices = all_indices(&parameters);

    let mut table = Table::new();
    table.set_header(vec!["Index", "Required columns"]);
    apply_table_style(&mut table);
    for index in &indices {
        table.add_row(vec![
            index.name().to_string(),
            index.required_columns().join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_score(args: &ScoreArgs) -> Result<ScoreResult> {
    let mut df = dqi_ingest::read_table(&args.input)
        .with_context(|| format!("read input table {}", args.input.display()))?;
    debug!(rows = df.height(), columns = df.width(), "input table loaded");

    for mapping in &args.apply_map {
        df = apply_named_mapping(&df, *mapping).context("apply column mapping")?;
    }
    if args.normalize_units {
        let defaults = dqi_standards::load_defaults().context("load default units")?;
        df = dqi_transform::normalize_units(&df, &defaults).context("normalize units")?;
    }

    let parameters =
        dqi_standards::load_default_dii_parameters().context("load DII parameters")?;
    let indices = all_indices(&parameters);
    let selected = select_indices(indices, &args.indices)?;
    let options = ValidateOptions {
        mode: if args.permissive {
            CoercionMode::Permissive
        } else {
            CoercionMode::Strict
        },
        id_column: args.id_column.clone(),
    };
    let coerced = dqi_validate::coerce_numeric(&df, &options).context("coerce input table")?;

    // calculators are pure over the read-only frame; score them in parallel
    let scored: Vec<(String, Result<Scores, dqi_score::ScoreError>)> = selected
        .par_iter()
        .map(|index| (index.name().to_string(), index.evaluate(&coerced)))
        .collect();

    let mut outcomes = Vec::with_capacity(scored.len());
    let mut out = df.clone();
    for (name, result) in scored {
        match result {
            Ok(scores) => {
                attach_scores(&mut out, &name, &scores)
                    .with_context(|| format!("attach {name} scores"))?;
                outcomes.push(IndexOutcome {
                    summary: summarize(&scores),
                    name,
                    error: None,
                });
            }
            Err(error) => {
                warn!(index = %name, %error, "index skipped");
                outcomes.push(IndexOutcome {
                    name,
                    summary: None,
                    error: Some(error.to_string()),
                });
            }
        }
    }

    if let Some(path) = &args.output {
        dqi_ingest::write_table(&mut out, path)
            .with_context(|| format!("write scored table {}", path.display()))?;
        info!(path = %path.display(), "scored table written");
    }

    Ok(ScoreResult {
        rows: df.height(),
        outcomes,
        output: args.output.clone(),
    })
}

fn apply_named_mapping(df: &DataFrame, mapping: MappingArg) -> Result<DataFrame> {
    let table = match mapping {
        MappingArg::UsdaHei => dqi_map::USDA_HEI_MAP,
        MappingArg::UsdaDash => dqi_map::USDA_DASH_MAP,
        MappingArg::UsdaDii => dqi_map::USDA_DII_MAP,
        MappingArg::DiiCase => dqi_map::DII_CASE_MAP,
    };
    Ok(dqi_map::apply_mapping(df, table)?)
}

/// Resolve requested index names against the registry; an empty request
/// selects every index.
fn select_indices(
    indices: Vec<Box<dyn DietIndex>>,
    requested: &[String],
) -> Result<Vec<Box<dyn DietIndex>>> {
    if requested.is_empty() {
        return Ok(indices);
    }
    let mut selected = Vec::with_capacity(requested.len());
    for name in requested {
        let wanted = name.trim().to_uppercase();
        let position = indices
            .iter()
            .position(|index| index.name() == wanted)
            .with_context(|| {
                let known: Vec<&str> = indices.iter().map(|index| index.name()).collect();
                format!("unknown index '{name}' (known: {})", known.join(", "))
            })?;
        // order follows the request, not the registry
        selected.push(position);
    }
    let mut indices: Vec<Option<Box<dyn DietIndex>>> = indices.into_iter().map(Some).collect();
    Ok(selected
        .into_iter()
        .filter_map(|position| indices[position].take())
        .collect())
}
