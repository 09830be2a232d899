use std::path::PathBuf;

use clap::Args;
use entigen_codegen::{GenerationReport, Generator, GeneratorOptions, Severity, WriteResult};
use entigen_manifest::{EntigenToml, MANIFEST_FILE, ManifestSource};
use eyre::{Context, Result};
use tracing::info;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to entigen.toml (defaults to ./entigen.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub manifest: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = EntigenToml::open(&self.manifest)
            .unwrap_or_exit()
            .into_manifest();
        let options = GeneratorOptions::from(&manifest.generator);
        let report = Generator::new(options)
            .run(&ManifestSource::new(manifest))
            .wrap_err("Failed to read entities")?;

        for diag in &report.diagnostics {
            if matches!(diag.severity, Severity::Warning) {
                eprintln!("warning: {} ({})", diag.message, diag.entity);
            }
        }

        if self.dry_run {
            self.run_preview(&report);
        } else {
            self.write_units(&report)?;
        }

        for failure in &report.failures {
            eprintln!("error: {}: {}", failure.entity, failure.error);
        }
        if !report.is_success() {
            std::process::exit(1);
        }

        Ok(())
    }

    fn write_units(&self, report: &GenerationReport) -> Result<()> {
        let mut written = 0;
        let mut unchanged = 0;
        for unit in &report.units {
            let result = unit
                .write(&self.output)
                .wrap_err_with(|| format!("Failed to write unit for {}", unit.entity))?;
            match result {
                WriteResult::Written => {
                    written += 1;
                    println!("  + {}", unit.path(&self.output).display());
                }
                WriteResult::Unchanged => {
                    unchanged += 1;
                    info!(file = %unit.file_name, "unchanged");
                }
            }
        }

        println!();
        println!(
            "Generated: {} written, {} unchanged in {}",
            written,
            unchanged,
            self.output.display()
        );
        Ok(())
    }

    fn run_preview(&self, report: &GenerationReport) {
        for unit in &report.units {
            println!("── {} ──", unit.file_name);
            println!("{}", unit.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", report.units.len());
    }
}
