use super::{
    Decorate, Decoration, ListBuilder, Node, Render,
    block::{body_list, render_body},
};
use crate::{AccessModifier, BuildError, SourceBuilder};

/// Which accessor of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Get,
    Set,
}

impl AccessorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
        }
    }
}

/// Property declaration holding a getter and/or a setter.
///
/// A by-reference property renders as `ref T Name`; its getter is expected to
/// `return ref` a storage slot.
#[derive(Debug)]
pub struct PropertyBuilder {
    ty: Box<Node>,
    name: Box<Node>,
    access: AccessModifier,
    is_static: bool,
    by_ref: bool,
    getter: Option<AccessorBuilder>,
    setter: Option<AccessorBuilder>,
    decor: Decoration,
}

impl PropertyBuilder {
    pub fn new(ty: impl Into<Node>, name: impl Into<Node>) -> Self {
        Self {
            ty: Box::new(ty.into()),
            name: Box::new(name.into()),
            access: AccessModifier::Public,
            is_static: false,
            by_ref: false,
            getter: None,
            setter: None,
            decor: Decoration::default(),
        }
    }

    pub fn access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn by_ref(self) -> Self {
        self.by_ref_if(true)
    }

    pub fn by_ref_if(mut self, by_ref: bool) -> Self {
        self.by_ref = by_ref;
        self
    }

    /// Configure the getter, starting from an empty `get` accessor.
    pub fn getter(mut self, build: impl FnOnce(AccessorBuilder) -> AccessorBuilder) -> Self {
        self.getter = Some(build(AccessorBuilder::new(AccessorKind::Get)));
        self
    }

    /// Configure the setter, starting from an empty `set` accessor.
    pub fn setter(mut self, build: impl FnOnce(AccessorBuilder) -> AccessorBuilder) -> Self {
        self.setter = Some(build(AccessorBuilder::new(AccessorKind::Set)));
        self
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        self.decor.validate()?;
        super::require_name("property type", &self.ty)?;
        super::require_name("property", &self.name)?;
        if self.getter.is_none() && self.setter.is_none() {
            return Err(BuildError::MissingAccessors {
                name: self.name.to_text(),
            });
        }
        if let Some(getter) = &self.getter {
            getter.validate()?;
        }
        if let Some(setter) = &self.setter {
            setter.validate()?;
        }
        Ok(())
    }
}

impl Decorate for PropertyBuilder {
    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.decor
    }
}

impl Render for PropertyBuilder {
    fn render(&self, sb: &mut SourceBuilder) {
        self.decor.wrap(sb, |sb| {
            sb.append(self.access.as_str())
                .append(" ")
                .when(self.is_static, "static ")
                .when(self.by_ref, "ref ");
            self.ty.render(sb);
            sb.append(" ");
            self.name.render(sb);

            let mut block = sb.block();
            for accessor in [&self.getter, &self.setter].into_iter().flatten() {
                block.new_line();
                accessor.render(&mut block);
            }
        });
    }
}

/// A `get` or `set` accessor with a statement body.
#[derive(Debug)]
pub struct AccessorBuilder {
    kind: AccessorKind,
    body: ListBuilder,
    decor: Decoration,
}

impl AccessorBuilder {
    pub fn new(kind: AccessorKind) -> Self {
        Self {
            kind,
            body: body_list(),
            decor: Decoration::default(),
        }
    }

    pub fn statement(mut self, statement: impl Into<Node>) -> Self {
        self.body.push(statement);
        self
    }

    pub fn body<I, N>(mut self, statements: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.body.extend(statements);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        self.decor.validate()?;
        self.body.validate()
    }
}

impl Decorate for AccessorBuilder {
    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.decor
    }
}

impl Render for AccessorBuilder {
    fn render(&self, sb: &mut SourceBuilder) {
        self.decor.wrap(sb, |sb| {
            sb.append(self.kind.as_str());
            render_body(sb, &self.body);
        });
    }
}
