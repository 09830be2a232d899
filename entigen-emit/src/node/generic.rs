use super::{Decorate, Decoration, ListBuilder, Node, Render};
use crate::{BuildError, SourceBuilder};

/// Generic type spelling such as `IReadOnlyList<IEntityCollection>`.
#[derive(Debug)]
pub struct GenericBuilder {
    name: Box<Node>,
    args: ListBuilder,
    decor: Decoration,
}

impl GenericBuilder {
    pub fn new(name: impl Into<Node>) -> Self {
        Self {
            name: Box::new(name.into()),
            args: ListBuilder::new(),
            decor: Decoration::default(),
        }
    }

    pub fn arg(mut self, arg: impl Into<Node>) -> Self {
        self.args.push(arg);
        self
    }

    pub fn args<I, N>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.args.extend(args);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        self.decor.validate()?;
        super::require_name("generic type", &self.name)?;
        if self.args.is_empty() {
            return Err(BuildError::EmptyTypeArguments {
                name: self.name.to_text(),
            });
        }
        self.args.validate()
    }
}

impl Decorate for GenericBuilder {
    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.decor
    }
}

impl Render for GenericBuilder {
    fn render(&self, sb: &mut SourceBuilder) {
        self.decor.wrap(sb, |sb| {
            self.name.render(sb);
            sb.append("<");
            self.args.render(sb);
            sb.append(">");
        });
    }
}
