//! `plan` command: print the resolved site plan.

use super::args::PlanFormat;
use super::common::{locate_config, report_warnings, source_name};
use anyhow::{Context, Result};
use docplan::config::load;
use docplan::log;
use docplan::plan::SitePlan;
use std::fs;
use std::path::Path;

pub fn run_plan(config: &Path, format: PlanFormat, output: Option<&Path>) -> Result<()> {
    let path = locate_config(config)?;
    let resolved = load(&path).with_context(|| format!("Failed to resolve '{}'", path.display()))?;
    report_warnings(&resolved.warnings, &source_name(&path));

    let text = render(&resolved.plan, format)?;
    match output {
        Some(output) => {
            fs::write(output, &text)
                .with_context(|| format!("Failed to write '{}'", output.display()))?;
            log!("plan"; "written to {}", output.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

/// Plan text in `format`, newline-terminated.
fn render(plan: &SitePlan, format: PlanFormat) -> Result<String> {
    let mut text = match format {
        PlanFormat::Json => plan.to_json().context("Failed to serialize plan")?,
        PlanFormat::Yaml => plan.to_yaml().context("Failed to serialize plan")?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
