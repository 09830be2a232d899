use std::path::PathBuf;

use clap::Args;
use entigen_ir::EntitySchema;
use entigen_manifest::{EntigenToml, MANIFEST_FILE};
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to entigen.toml (defaults to ./entigen.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub manifest: PathBuf,

    /// Print resolved entities as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = EntigenToml::open(&self.manifest)
            .unwrap_or_exit()
            .into_manifest();
        let runtime = manifest.generator.runtime();

        let mut schemas = Vec::new();
        for descriptor in manifest.descriptors() {
            match EntitySchema::resolve(&descriptor, &runtime) {
                Ok(schema) => schemas.push(schema),
                Err(error) => eprintln!("error: {}: {}", descriptor.qualified_name(), error),
            }
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&schemas)?);
            return Ok(());
        }

        if schemas.is_empty() {
            println!("No entities defined");
            return Ok(());
        }

        println!("Entities:");
        for schema in &schemas {
            println!(
                "  {} -> {}, {} ({})",
                schema.qualified_name(),
                schema.entity_name,
                schema.collection_name,
                schema.unit_file_name()
            );
            if let Some(back_reference) = &schema.back_reference {
                println!("    {} (entity)", back_reference);
            }
            for component in &schema.components {
                println!(
                    "    {}: {} ({:?}, {})",
                    component.property_name,
                    component.declared_type,
                    component.kind,
                    component.field_name
                );
            }
            if !schema.excluded.is_empty() {
                println!("    without {}", schema.excluded.join(", "));
            }
        }

        Ok(())
    }
}
