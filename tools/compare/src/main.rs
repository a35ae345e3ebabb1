/// Scenario comparison harness: runs one or two shoreline scenarios from
/// `ScenarioParameters` JSON and emits the results (plus unified axis
/// ranges for a pair) as JSON on stdout. Stands in for the interactive
/// presentation layer; no model logic lives here.
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use delta_core::{
    run_pair, run_scenario, unify_ranges, ModelResult, ScenarioParameters, UnifiedRanges,
};

#[derive(Parser, Debug)]
#[command(name = "compare", about = "Run and compare delta shoreline scenarios")]
struct Args {
    /// Path to scenario A parameters JSON. Defaults to the calibrated
    /// default scenario when omitted.
    #[arg(short = 'a', long)]
    scenario_a: Option<PathBuf>,

    /// Path to scenario B parameters JSON. When present, both scenarios
    /// run and unified axis ranges are included in the output.
    #[arg(short = 'b', long)]
    scenario_b: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Output {
    scenario_a: ModelResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    scenario_b: Option<ModelResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ranges: Option<UnifiedRanges>,
}

fn load_params(path: &PathBuf) -> Result<ScenarioParameters> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading scenario parameters from {}", path.display()))?;
    let params: ScenarioParameters = serde_json::from_str(&text)
        .with_context(|| format!("parsing scenario parameters in {}", path.display()))?;
    params
        .validate()
        .with_context(|| format!("invalid scenario parameters in {}", path.display()))?;
    Ok(params)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let params_a = match &args.scenario_a {
        Some(path) => load_params(path)?,
        None => ScenarioParameters::default(),
    };

    let output = match &args.scenario_b {
        Some(path) => {
            let params_b = load_params(path)?;
            let (result_a, result_b) = run_pair(&params_a, &params_b);
            for (label, result) in [("A", &result_a), ("B", &result_b)] {
                if !result.valid {
                    eprintln!(
                        "warning: scenario {label} has invalid slope ordering \
                         (need 0 < topset < basement < foreset); shoreline is NaN"
                    );
                }
            }
            let ranges = unify_ranges(&result_a, &result_b);
            Output {
                scenario_a: result_a,
                scenario_b: Some(result_b),
                ranges: Some(ranges),
            }
        }
        None => {
            let result_a = run_scenario(&params_a);
            if !result_a.valid {
                eprintln!(
                    "warning: scenario A has invalid slope ordering \
                     (need 0 < topset < basement < foreset); shoreline is NaN"
                );
            }
            Output {
                scenario_a: result_a,
                scenario_b: None,
                ranges: None,
            }
        }
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");
    Ok(())
}
