use entigen_emit::Indent;
use entigen_ir::RuntimeContract;
use entigen_manifest::GeneratorSection;

/// Settings shared by every unit of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub runtime: RuntimeContract,
    pub indent: Indent,
    /// Emit a `// <auto-generated/>` first line.
    pub header: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            runtime: RuntimeContract::default(),
            indent: Indent::CSHARP,
            header: true,
        }
    }
}

impl From<&GeneratorSection> for GeneratorOptions {
    fn from(section: &GeneratorSection) -> Self {
        Self {
            runtime: section.runtime(),
            indent: section.indent(),
            header: section.header,
        }
    }
}
