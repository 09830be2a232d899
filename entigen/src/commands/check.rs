use std::path::PathBuf;

use clap::Args;
use entigen_codegen::{Diagnostic, Generator, GeneratorOptions, Severity};
use entigen_manifest::{EntigenToml, MANIFEST_FILE, ManifestSource};
use eyre::{Context, Result};
use serde::Serialize;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to entigen.toml (defaults to ./entigen.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub manifest: PathBuf,

    /// Print diagnostics as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    valid: bool,
    entities: usize,
    diagnostics: &'a [Diagnostic],
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = EntigenToml::open(&self.manifest)
            .unwrap_or_exit()
            .into_manifest();
        let entities = manifest.entities.len();
        let options = GeneratorOptions::from(&manifest.generator);
        let report = Generator::new(options)
            .run(&ManifestSource::new(manifest))
            .wrap_err("Validation failed")?;

        // Entity failures become error diagnostics alongside the lints.
        let mut diagnostics: Vec<Diagnostic> = report
            .failures
            .iter()
            .map(|failure| {
                Diagnostic::error(
                    &failure.entity,
                    "generation-failed",
                    failure.error.to_string(),
                )
            })
            .collect();
        diagnostics.extend(report.diagnostics.iter().cloned());
        let valid = !diagnostics.iter().any(|d| d.severity.is_error());

        if self.json {
            let out = CheckReport {
                valid,
                entities,
                diagnostics: &diagnostics,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            for diag in &diagnostics {
                match diag.severity {
                    Severity::Error | Severity::Warning => {
                        eprintln!("{}: {}", diag.severity, diag.message);
                        eprintln!("  --> {} [{}]", diag.entity, diag.code);
                    }
                    Severity::Info => {
                        println!("info: {}", diag.message);
                        println!("  --> {} [{}]", diag.entity, diag.code);
                    }
                }
            }
            if valid {
                if !diagnostics.is_empty() {
                    println!();
                }
                println!(
                    "✓ {} is valid ({} entit{})",
                    self.manifest.display(),
                    entities,
                    if entities == 1 { "y" } else { "ies" }
                );
            }
        }

        if !valid {
            std::process::exit(1);
        }
        Ok(())
    }
}
