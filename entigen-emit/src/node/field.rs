use super::{Decorate, Decoration, Node, Render};
use crate::{AccessModifier, BuildError, SourceBuilder};

/// Field declaration: `access [static ][readonly ]type name;`.
#[derive(Debug)]
pub struct FieldBuilder {
    ty: Box<Node>,
    name: Box<Node>,
    access: AccessModifier,
    is_static: bool,
    is_readonly: bool,
    decor: Decoration,
}

impl FieldBuilder {
    pub fn new(ty: impl Into<Node>, name: impl Into<Node>) -> Self {
        Self {
            ty: Box::new(ty.into()),
            name: Box::new(name.into()),
            access: AccessModifier::Public,
            is_static: false,
            is_readonly: false,
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

    pub fn readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        self.decor.validate()?;
        super::require_name("field type", &self.ty)?;
        super::require_name("field", &self.name)
    }
}

impl Decorate for FieldBuilder {
    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.decor
    }
}

impl Render for FieldBuilder {
    fn render(&self, sb: &mut SourceBuilder) {
        self.decor.wrap(sb, |sb| {
            sb.append(self.access.as_str())
                .append(" ")
                .when(self.is_static, "static ")
                .when(self.is_readonly, "readonly ");
            self.ty.render(sb);
            sb.append(" ");
            self.name.render(sb);
            sb.append(";");
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{field, generic_type};

    #[test]
    fn test_public_field() {
        assert_eq!(field("int", "count").to_text(), "public int count;");
    }

    #[test]
    fn test_modifiers() {
        let node = field("int", "Instances")
            .access(AccessModifier::Private)
            .static_()
            .readonly();
        assert_eq!(node.to_text(), "private static readonly int Instances;");
    }

    #[test]
    fn test_generic_field_type() {
        let node =
            FieldBuilder::new(generic_type("ComponentAccessor", ["Position"]), "component_0");
        assert_eq!(
            node.to_text(),
            "public ComponentAccessor<Position> component_0;"
        );
    }

    #[test]
    fn test_blank_field_name_rejected() {
        let err = Node::from(field("int", " ")).seal().unwrap_err();
        assert_eq!(err, BuildError::BlankName { kind: "field" });
    }
}
