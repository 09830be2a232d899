//! Append-only text buffer with an indentation counter.

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use crate::Indent;

/// Text buffer every builder node writes through.
///
/// Indentation is applied lazily: [`new_line`](Self::new_line) records the
/// depth active at that moment, and the indent units are written right before
/// the next non-empty append. Blank lines therefore never carry trailing
/// whitespace, while every non-blank line starts with exactly `depth` units.
///
/// Scopes are acquired through [`indent`](Self::indent) and
/// [`block`](Self::block). The returned guards borrow the buffer mutably and
/// deref to it, so scopes nest strictly and are released on drop.
///
/// # Example
///
/// ```
/// use entigen_emit::SourceBuilder;
///
/// let mut sb = SourceBuilder::csharp();
/// sb.append("class Foo");
/// {
///     let mut body = sb.block();
///     body.new_line_with("int x;");
/// }
///
/// assert_eq!(sb.as_str(), "class Foo\n{\n    int x;\n}");
/// ```
///
/// # Preconditions
///
/// [`clear`](Self::clear) must only be called between independent runs, when
/// no scope is active.
#[derive(Debug, Clone, Default)]
pub struct SourceBuilder {
    buffer: String,
    depth: usize,
    indent: Indent,
    pending_indent: Option<usize>,
}

impl SourceBuilder {
    /// Create an empty buffer with the given indent unit.
    pub fn new(indent: Indent) -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            indent,
            pending_indent: None,
        }
    }

    /// Create an empty buffer with 4-space indentation.
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Append text verbatim.
    pub fn append(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.flush_indent();
            self.buffer.push_str(text);
        }
        self
    }

    /// Append a single character verbatim.
    pub fn append_char(&mut self, c: char) -> &mut Self {
        self.flush_indent();
        self.buffer.push(c);
        self
    }

    /// Append text only when `condition` holds.
    pub fn when(&mut self, condition: bool, text: &str) -> &mut Self {
        if condition {
            self.append(text);
        }
        self
    }

    /// Terminate the current line; the next line is indented to the current depth.
    pub fn new_line(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self.pending_indent = Some(self.depth);
        self
    }

    /// Start a new line and append `text` to it.
    pub fn new_line_with(&mut self, text: &str) -> &mut Self {
        self.new_line().append(text)
    }

    /// Increase the depth by one until the returned guard is dropped.
    pub fn indent(&mut self) -> IndentGuard<'_> {
        IndentGuard::new(self, true)
    }

    /// Like [`indent`](Self::indent), but a no-op scope when `enabled` is false.
    pub fn indent_if(&mut self, enabled: bool) -> IndentGuard<'_> {
        IndentGuard::new(self, enabled)
    }

    /// Open a brace-delimited block; the closing brace is written on drop.
    pub fn block(&mut self) -> BlockGuard<'_> {
        BlockGuard::new(self)
    }

    /// Reset the content for the next independent run.
    pub fn clear(&mut self) {
        debug_assert_eq!(self.depth, 0, "SourceBuilder cleared inside an open scope");
        self.buffer.clear();
        self.pending_indent = None;
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The indent unit written once per depth level.
    pub fn indent_unit(&self) -> Indent {
        self.indent
    }

    /// Length of the accumulated text in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The accumulated text.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the buffer and return the accumulated text.
    pub fn into_string(self) -> String {
        self.buffer
    }

    fn flush_indent(&mut self) {
        if let Some(levels) = self.pending_indent.take() {
            let unit = self.indent.as_str();
            for _ in 0..levels {
                self.buffer.push_str(unit);
            }
        }
    }
}

impl fmt::Display for SourceBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

/// One level of indentation, held until dropped.
#[must_use = "the indentation is released as soon as the guard is dropped"]
pub struct IndentGuard<'a> {
    builder: &'a mut SourceBuilder,
    active: bool,
}

impl<'a> IndentGuard<'a> {
    fn new(builder: &'a mut SourceBuilder, enabled: bool) -> Self {
        if enabled {
            builder.depth += 1;
        }
        Self {
            builder,
            active: enabled,
        }
    }

    /// Release the scope now instead of at the end of the enclosing block.
    pub fn release(self) {}
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            self.builder.depth -= 1;
        }
    }
}

impl Deref for IndentGuard<'_> {
    type Target = SourceBuilder;

    fn deref(&self) -> &SourceBuilder {
        self.builder
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut SourceBuilder {
        self.builder
    }
}

/// An open `{ ... }` block, closed at the outer depth when dropped.
#[must_use = "the block is closed as soon as the guard is dropped"]
pub struct BlockGuard<'a> {
    builder: &'a mut SourceBuilder,
}

impl<'a> BlockGuard<'a> {
    fn new(builder: &'a mut SourceBuilder) -> Self {
        builder.new_line_with("{");
        builder.depth += 1;
        Self { builder }
    }

    /// Close the block now instead of at the end of the enclosing block.
    pub fn release(self) {}
}

impl Drop for BlockGuard<'_> {
    fn drop(&mut self) {
        self.builder.depth -= 1;
        self.builder.new_line_with("}");
    }
}

impl Deref for BlockGuard<'_> {
    type Target = SourceBuilder;

    fn deref(&self) -> &SourceBuilder {
        self.builder
    }
}

impl DerefMut for BlockGuard<'_> {
    fn deref_mut(&mut self) -> &mut SourceBuilder {
        self.builder
    }
}
