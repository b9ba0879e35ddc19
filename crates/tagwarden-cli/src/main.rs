//! CLI entry point for tagwarden.
//!
//! This module is intentionally thin: it handles argument parsing, file IO,
//! and exit codes. All business logic lives in the `tagwarden-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use tagwarden_app::{run_classify, serialize_report, write_report, write_text, ClassifyInput};
use tagwarden_settings::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "tagwarden",
    version,
    about = "Classify cloud resource inventories against tagging and lifecycle policy"
)]
struct Cli {
    /// Path to the inventory JSON file.
    inventory_file: Utf8PathBuf,

    /// Where to write the JSON report (default: stdout).
    #[arg(long, short)]
    output: Option<Utf8PathBuf>,

    /// Path to the policy spec YAML.
    #[arg(long, default_value = "infrastructure/infrastructure-spec.yaml")]
    spec: Utf8PathBuf,

    /// Path to the inventory config YAML (missing file is allowed; defaults apply).
    #[arg(long, default_value = "infrastructure/aws-inventory-config.yaml")]
    config: Utf8PathBuf,

    /// Override the product name used for the naming prefix.
    #[arg(long)]
    product: Option<String>,

    /// Where to write a Markdown rendering of the report (if given).
    #[arg(long)]
    markdown_out: Option<Utf8PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let inventory_text = std::fs::read_to_string(&cli.inventory_file)
        .with_context(|| format!("read inventory: {}", cli.inventory_file))?;

    let spec_text = std::fs::read_to_string(&cli.spec)
        .with_context(|| format!("read policy spec: {}", cli.spec))?;

    // Missing config is allowed; defaults apply.
    let config_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

    let output = run_classify(ClassifyInput {
        spec_text: &spec_text,
        config_text: &config_text,
        inventory_text: &inventory_text,
        overrides: Overrides {
            product: cli.product,
        },
    })?;

    match &cli.output {
        Some(path) => write_report(path, &output.report)
            .with_context(|| format!("write report: {}", path))?,
        None => print!("{}", serialize_report(&output.report)?),
    }

    if let Some(path) = &cli.markdown_out {
        let md = tagwarden_render::render_markdown(&output.report);
        write_text(path, &md).with_context(|| format!("write markdown: {}", path))?;
    }

    Ok(())
}
