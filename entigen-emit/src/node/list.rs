use std::borrow::Cow;

use super::{Decorate, Decoration, Node, Render};
use crate::{BuildError, SourceBuilder};

/// Ordered sequence of child nodes.
///
/// Children are separated by the delimiter (`", "` unless changed) and, when
/// [`each_on_new_line`](Self::each_on_new_line) is set, by a line break. A list
/// without children renders nothing but its prefix and suffix.
#[derive(Debug)]
pub struct ListBuilder {
    elements: Vec<Node>,
    delimiter: Option<Cow<'static, str>>,
    each_on_new_line: bool,
    indented: bool,
    new_line_before: bool,
    new_line_after: bool,
    decor: Decoration,
}

impl ListBuilder {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            delimiter: Some(Cow::Borrowed(", ")),
            each_on_new_line: false,
            indented: false,
            new_line_before: false,
            new_line_after: false,
            decor: Decoration::default(),
        }
    }

    pub fn without_delimiter(mut self) -> Self {
        self.delimiter = None;
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<Cow<'static, str>>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Put every child after the first on its own line.
    pub fn each_on_new_line(mut self) -> Self {
        self.each_on_new_line = true;
        self
    }

    /// Render the children one level deeper than the surrounding text.
    pub fn indented(mut self) -> Self {
        self.indented = true;
        self
    }

    /// Break the line before the first child (inside the indent scope).
    pub fn new_line_before(mut self) -> Self {
        self.new_line_before = true;
        self
    }

    /// Break the line after the last child (outside the indent scope).
    pub fn new_line_after(mut self) -> Self {
        self.new_line_after = true;
        self
    }

    /// Apply `build` only when `condition` holds.
    pub fn when(self, condition: bool, build: impl FnOnce(Self) -> Self) -> Self {
        if condition { build(self) } else { self }
    }

    pub fn element(mut self, element: impl Into<Node>) -> Self {
        self.elements.push(element.into());
        self
    }

    pub fn elements<I, N>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.elements.extend(elements.into_iter().map(Into::into));
        self
    }

    pub(crate) fn push(&mut self, element: impl Into<Node>) {
        self.elements.push(element.into());
    }

    pub(crate) fn extend<I, N>(&mut self, elements: I)
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.elements.extend(elements.into_iter().map(Into::into));
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        self.decor.validate()?;
        self.elements.iter().try_for_each(Node::validate)
    }

    fn write_elements(&self, sb: &mut SourceBuilder) {
        let delimiter = self.delimiter.as_deref().map(|d| {
            if self.each_on_new_line {
                d.trim_end()
            } else {
                d
            }
        });

        let mut scope = sb.indent_if(self.indented);
        if self.new_line_before {
            scope.new_line();
        }
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                if let Some(delimiter) = delimiter {
                    scope.append(delimiter);
                }
                if self.each_on_new_line {
                    scope.new_line();
                }
            }
            element.render(&mut scope);
        }
        scope.release();

        if self.new_line_after {
            sb.new_line();
        }
    }
}

impl Default for ListBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decorate for ListBuilder {
    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.decor
    }
}

impl Render for ListBuilder {
    fn render(&self, sb: &mut SourceBuilder) {
        self.decor.wrap(sb, |sb| {
            if !self.elements.is_empty() {
                self.write_elements(sb);
            }
        });
    }
}
