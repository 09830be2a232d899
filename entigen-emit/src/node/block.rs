use super::{Decorate, Decoration, ListBuilder, Node, Render};
use crate::{BuildError, SourceBuilder};

/// A header node followed by a brace-scoped body, one child per line.
#[derive(Debug)]
pub struct BlockBuilder {
    header: Box<Node>,
    body: ListBuilder,
    decor: Decoration,
}

impl BlockBuilder {
    pub fn new(header: impl Into<Node>) -> Self {
        Self {
            header: Box::new(header.into()),
            body: body_list(),
            decor: Decoration::default(),
        }
    }

    pub fn body<I, N>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.body.extend(elements);
        self
    }

    pub fn statement(mut self, element: impl Into<Node>) -> Self {
        self.body.push(element);
        self
    }

    pub fn when(self, condition: bool, build: impl FnOnce(Self) -> Self) -> Self {
        if condition { build(self) } else { self }
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        self.decor.validate()?;
        self.header.validate()?;
        self.body.validate()
    }
}

impl Decorate for BlockBuilder {
    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.decor
    }
}

impl Render for BlockBuilder {
    fn render(&self, sb: &mut SourceBuilder) {
        self.decor.wrap(sb, |sb| {
            self.header.render(sb);
            render_body(sb, &self.body);
        });
    }
}

/// The list every declaration uses for its body.
pub(crate) fn body_list() -> ListBuilder {
    ListBuilder::new().without_delimiter().each_on_new_line()
}

/// Open a block and render `body` inside it.
pub(crate) fn render_body(sb: &mut SourceBuilder, body: &ListBuilder) {
    let mut block = sb.block();
    if !body.is_empty() {
        block.new_line();
        body.render(&mut block);
    }
}
