use entigen_emit::{
    BuildError, Node, SourceBuilder,
    builders::{empty, lines, namespace, using},
};
use entigen_ir::{EntitySchema, EntitySource, ResolveError, SourceError};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    Diagnostic, GeneratedUnit, GeneratorOptions, collection::collection, entity_view::entity_view,
    lint,
};

/// First line of every unit when headers are enabled.
pub const AUTO_GENERATED_HEADER: &str = "// <auto-generated/>";

/// Namespaces imported by every unit, before the runtime namespace.
pub const SYSTEM_USINGS: [&str; 4] = [
    "System",
    "System.Collections",
    "System.Collections.Generic",
    "System.Runtime.CompilerServices",
];

/// Why one entity produced no unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("failed to build unit for '{entity}': {source}")]
    Build {
        entity: String,
        #[source]
        source: BuildError,
    },

    #[error("'{entity}' would overwrite '{file_name}', already generated for '{first}'")]
    DuplicateUnit {
        entity: String,
        file_name: String,
        first: String,
    },
}

/// An entity that failed, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityFailure {
    pub entity: String,
    pub error: GenerateError,
}

/// Outcome of one generation run: one unit or one failure per entity.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub units: Vec<GeneratedUnit>,
    pub failures: Vec<EntityFailure>,
    /// Lint findings for every entity that resolved.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renders entity schemas into units, reusing one buffer across entities.
#[derive(Debug, Clone, Default)]
pub struct EntityGenerator {
    options: GeneratorOptions,
    buffer: SourceBuilder,
}

impl EntityGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        let buffer = SourceBuilder::new(options.indent);
        Self { options, buffer }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Build the node tree of the complete unit for `schema`.
    pub fn unit_tree(&self, schema: &EntitySchema) -> Node {
        let runtime = &self.options.runtime;
        let mut items: Vec<Node> = Vec::new();

        if self.options.header {
            items.push(AUTO_GENERATED_HEADER.into());
        }
        items.extend(SYSTEM_USINGS.iter().map(|ns| Node::from(using(ns))));
        if !runtime.namespace().is_empty() {
            items.push(using(runtime.namespace()).into());
        }
        items.push(empty().into());

        let declarations = [
            Node::from(entity_view(schema, runtime)),
            empty().into(),
            collection(schema, runtime).into(),
        ];
        if schema.namespace.is_empty() {
            items.extend(declarations);
        } else {
            items.push(namespace(schema.namespace.clone()).body(declarations).into());
        }

        lines(items).into()
    }

    /// Generate the unit for one entity.
    #[tracing::instrument(level = "debug", skip_all, fields(entity = %schema.qualified_name()))]
    pub fn generate(&mut self, schema: &EntitySchema) -> Result<GeneratedUnit, GenerateError> {
        let entity = schema.qualified_name();
        let sealed = self
            .unit_tree(schema)
            .seal()
            .map_err(|source| GenerateError::Build {
                entity: entity.clone(),
                source,
            })?;

        self.buffer.clear();
        sealed.render(&mut self.buffer);
        self.buffer.new_line();

        let unit = GeneratedUnit {
            file_name: schema.unit_file_name(),
            entity,
            content: self.buffer.as_str().to_string(),
        };
        debug!(file = %unit.file_name, bytes = unit.content.len(), "rendered unit");
        Ok(unit)
    }
}

/// Runs an [`EntityGenerator`] over every entity of a source.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    entities: EntityGenerator,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            entities: EntityGenerator::new(options),
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        self.entities.options()
    }

    /// Generate every entity of `source`.
    ///
    /// Fails only when the source itself fails. Each entity is handled on its
    /// own: a failing entity is recorded in the report and the run continues.
    pub fn run(&mut self, source: &impl EntitySource) -> Result<GenerationReport, SourceError> {
        let descriptors = source.entities()?;
        debug!(count = descriptors.len(), "generating entities");

        let mut report = GenerationReport::default();
        // file name -> entity that produced it
        let mut produced: IndexMap<String, String> = IndexMap::new();

        for descriptor in &descriptors {
            let entity = descriptor.qualified_name();
            let outcome = EntitySchema::resolve(descriptor, &self.options().runtime)
                .map_err(GenerateError::from)
                .and_then(|schema| {
                    let unit = self.entities.generate(&schema)?;
                    Ok((unit, lint::check(&schema)))
                })
                .and_then(|(unit, lints)| match produced.get(&unit.file_name) {
                    Some(first) => Err(GenerateError::DuplicateUnit {
                        entity: entity.clone(),
                        file_name: unit.file_name,
                        first: first.clone(),
                    }),
                    None => Ok((unit, lints)),
                });

            // Lints only describe entities that made it into the report.
            match outcome {
                Ok((unit, lints)) => {
                    report.diagnostics.extend(lints);
                    produced.insert(unit.file_name.clone(), entity);
                    report.units.push(unit);
                }
                Err(error) => {
                    warn!(entity = %entity, %error, "skipping entity");
                    report.failures.push(EntityFailure { entity, error });
                }
            }
        }

        Ok(report)
    }
}
