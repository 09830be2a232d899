use super::{
    Decorate, Decoration, ListBuilder, Node, Render,
    block::{body_list, render_body},
};
use crate::{AccessModifier, BuildError, SourceBuilder};

/// What kind of callable a [`MethodBuilder`] declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    General,
    Constructor,
    Destructor,
}

impl MethodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodKind::General => "method",
            MethodKind::Constructor => "constructor",
            MethodKind::Destructor => "destructor",
        }
    }
}

/// Method, constructor or destructor declaration with a statement body.
///
/// Header forms:
///
/// - general: `access [static ]ReturnType Name(args)`
/// - constructor: `access Name(args)[ : this(..)][ : base(..)]`
/// - static constructor: `static Name()`
/// - destructor: `~Name()`
///
/// Combinations C# rejects (both initializers, a static constructor with
/// arguments, ...) are reported by [`Node::seal`].
#[derive(Debug)]
pub struct MethodBuilder {
    kind: MethodKind,
    name: Box<Node>,
    returns: Box<Node>,
    access: AccessModifier,
    is_static: bool,
    arguments: ListBuilder,
    this_args: Option<ListBuilder>,
    base_args: Option<ListBuilder>,
    body: ListBuilder,
    decor: Decoration,
}

impl MethodBuilder {
    pub fn new(kind: MethodKind, name: impl Into<Node>) -> Self {
        Self {
            kind,
            name: Box::new(name.into()),
            returns: Box::new(Node::from("void")),
            access: AccessModifier::Public,
            is_static: false,
            arguments: ListBuilder::new(),
            this_args: None,
            base_args: None,
            body: body_list(),
            decor: Decoration::default(),
        }
    }

    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    /// Return type of a general method. Defaults to `void`.
    pub fn returns(mut self, ty: impl Into<Node>) -> Self {
        self.returns = Box::new(ty.into());
        self
    }

    pub fn access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn argument(mut self, argument: impl Into<Node>) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn arguments<I, N>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.arguments.extend(arguments);
        self
    }

    /// Put each parameter on its own indented line after the opening paren.
    pub fn wrap_arguments(mut self) -> Self {
        self.arguments = self
            .arguments
            .each_on_new_line()
            .indented()
            .new_line_before();
        self
    }

    /// Chain to another constructor of the same type. An empty iterator
    /// renders `: this()`.
    pub fn this_args<I, N>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.this_args
            .get_or_insert_with(ListBuilder::new)
            .extend(arguments);
        self
    }

    /// Chain to a base-class constructor. An empty iterator renders `: base()`.
    pub fn base_args<I, N>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.base_args
            .get_or_insert_with(ListBuilder::new)
            .extend(arguments);
        self
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

    pub fn when(self, condition: bool, build: impl FnOnce(Self) -> Self) -> Self {
        if condition { build(self) } else { self }
    }

    fn has_initializer(&self) -> bool {
        self.this_args.is_some() || self.base_args.is_some()
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        self.decor.validate()?;
        super::require_name(self.kind.as_str(), &self.name)?;
        let name = || self.name.to_text();

        match self.kind {
            MethodKind::General => {
                super::require_name("return type", &self.returns)?;
                if self.has_initializer() {
                    return Err(BuildError::UnexpectedInitializer {
                        name: name(),
                        kind: self.kind.as_str(),
                    });
                }
            }
            MethodKind::Constructor if self.is_static => {
                if !self.arguments.is_empty() {
                    return Err(BuildError::StaticConstructorArguments { name: name() });
                }
                if self.has_initializer() {
                    return Err(BuildError::UnexpectedInitializer {
                        name: name(),
                        kind: "static constructor",
                    });
                }
            }
            MethodKind::Constructor => {
                if self.this_args.is_some() && self.base_args.is_some() {
                    return Err(BuildError::ConflictingInitializers { name: name() });
                }
            }
            MethodKind::Destructor => {
                if self.is_static || !self.arguments.is_empty() {
                    return Err(BuildError::DestructorArguments { name: name() });
                }
                if self.has_initializer() {
                    return Err(BuildError::UnexpectedInitializer {
                        name: name(),
                        kind: self.kind.as_str(),
                    });
                }
            }
        }

        self.arguments.validate()?;
        for initializer in [&self.this_args, &self.base_args].into_iter().flatten() {
            initializer.validate()?;
        }
        self.body.validate()
    }

    fn render_header(&self, sb: &mut SourceBuilder) {
        match self.kind {
            MethodKind::General => {
                sb.append(self.access.as_str())
                    .append(" ")
                    .when(self.is_static, "static ");
                self.returns.render(sb);
                sb.append(" ");
                self.name.render(sb);
                self.render_arguments(sb);
            }
            MethodKind::Constructor if self.is_static => {
                sb.append("static ");
                self.name.render(sb);
                sb.append("()");
            }
            MethodKind::Constructor => {
                sb.append(self.access.as_str()).append(" ");
                self.name.render(sb);
                self.render_arguments(sb);
                let forwards = [(" : this(", &self.this_args), (" : base(", &self.base_args)];
                for (keyword, args) in forwards {
                    if let Some(args) = args {
                        sb.append(keyword);
                        args.render(sb);
                        sb.append(")");
                    }
                }
            }
            MethodKind::Destructor => {
                sb.append("~");
                self.name.render(sb);
                sb.append("()");
            }
        }
    }

    fn render_arguments(&self, sb: &mut SourceBuilder) {
        sb.append("(");
        self.arguments.render(sb);
        sb.append(")");
    }
}

impl Decorate for MethodBuilder {
    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.decor
    }
}

impl Render for MethodBuilder {
    fn render(&self, sb: &mut SourceBuilder) {
        self.decor.wrap(sb, |sb| {
            self.render_header(sb);
            render_body(sb, &self.body);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{argument, constructor, destructor, method};

    #[test]
    fn test_general_method() {
        let node = method("GetEnumerator")
            .returns("Enumerator")
            .statement("return new Enumerator(this);");
        assert_eq!(
            node.to_text(),
            "public Enumerator GetEnumerator()\n{\n    return new Enumerator(this);\n}"
        );
    }

    #[test]
    fn test_static_method_has_single_spaces() {
        let node = method("FromWorld")
            .static_()
            .returns("Players")
            .argument(argument("World", "world"));
        assert_eq!(
            node.to_text(),
            "public static Players FromWorld(World world)\n{\n}"
        );
    }

    #[test]
    fn test_constructor_with_empty_this_initializer() {
        let node = constructor("Enumerator")
            .argument(argument("Players", "players"))
            .this_args(Vec::<Node>::new())
            .statement("index = -1;");
        assert_eq!(
            node.to_text(),
            "public Enumerator(Players players) : this()\n{\n    index = -1;\n}"
        );
    }

    #[test]
    fn test_constructor_with_wrapped_arguments() {
        let node = constructor("PlayerEntity")
            .wrap_arguments()
            .arguments([argument("int", "a"), argument("int", "b")]);
        assert_eq!(
            node.to_text(),
            "public PlayerEntity(\n    int a,\n    int b)\n{\n}"
        );
    }

    #[test]
    fn test_base_initializer() {
        let node = constructor("Players")
            .argument(argument("World", "world"))
            .base_args(["world"]);
        assert_eq!(
            node.to_text(),
            "public Players(World world) : base(world)\n{\n}"
        );
    }

    #[test]
    fn test_static_constructor_ignores_access() {
        let node = constructor("Registry")
            .static_()
            .access(AccessModifier::Private);
        assert_eq!(node.to_text(), "static Registry()\n{\n}");
    }

    #[test]
    fn test_destructor() {
        assert_eq!(destructor("Handle").to_text(), "~Handle()\n{\n}");
    }

    #[test]
    fn test_conflicting_initializers_rejected() {
        let node = constructor("A").this_args(["1"]).base_args(["2"]);
        assert_eq!(
            Node::from(node).seal().unwrap_err(),
            BuildError::ConflictingInitializers {
                name: "A".to_string()
            }
        );
    }

    #[test]
    fn test_static_constructor_arguments_rejected() {
        let node = constructor("A").static_().argument(argument("int", "x"));
        assert_eq!(
            Node::from(node).seal().unwrap_err(),
            BuildError::StaticConstructorArguments {
                name: "A".to_string()
            }
        );
    }

    #[test]
    fn test_initializer_on_method_rejected() {
        let node = method("Run").base_args(["x"]);
        assert!(matches!(
            Node::from(node).seal().unwrap_err(),
            BuildError::UnexpectedInitializer { kind: "method", .. }
        ));
    }

    #[test]
    fn test_destructor_arguments_rejected() {
        let node = destructor("A").argument(argument("int", "x"));
        assert!(matches!(
            Node::from(node).seal().unwrap_err(),
            BuildError::DestructorArguments { .. }
        ));
    }

    #[test]
    fn test_blank_method_name_rejected() {
        assert_eq!(
            Node::from(method(" ")).seal().unwrap_err(),
            BuildError::BlankName { kind: "method" }
        );
    }
}
