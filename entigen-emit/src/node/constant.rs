use std::{borrow::Cow, fmt};

use super::{Decorate, Decoration, Render};
use crate::{BuildError, SourceBuilder};

/// Fixed literal text.
#[derive(Debug, Default)]
pub struct Constant {
    text: Cow<'static, str>,
    decor: Decoration,
}

impl Constant {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            text: text.into(),
            decor: Decoration::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        self.decor.validate()
    }
}

impl Decorate for Constant {
    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.decor
    }
}

impl Render for Constant {
    fn render(&self, sb: &mut SourceBuilder) {
        self.decor.wrap(sb, |sb| {
            sb.append(&self.text);
        });
    }
}

/// Escape hatch that writes straight into the buffer.
pub struct Callback {
    write: Box<dyn Fn(&mut SourceBuilder)>,
    decor: Decoration,
}

impl Callback {
    pub fn new(write: impl Fn(&mut SourceBuilder) + 'static) -> Self {
        Self {
            write: Box::new(write),
            decor: Decoration::default(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        self.decor.validate()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("decor", &self.decor)
            .finish_non_exhaustive()
    }
}

impl Decorate for Callback {
    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.decor
    }
}

impl Render for Callback {
    fn render(&self, sb: &mut SourceBuilder) {
        self.decor.wrap(sb, |sb| (self.write)(sb));
    }
}
