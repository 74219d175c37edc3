use crate::model::*;

/// What kind of element a filter is being asked about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    ClassLike,
    Constant,
    Property,
    Method,
}

/// The facts a render filter decides on
#[derive(Debug, Clone, Copy)]
pub struct ElementMeta<'a> {
    pub kind: ElementKind,
    pub name: &'a str,
    pub visibility: Visibility,
    pub doc: Option<&'a DocBlock>,
}

impl ElementMeta<'_> {
    pub fn is_internal(&self) -> bool {
        self.doc.is_some_and(|doc| doc.has_tag("internal"))
    }
}

/// Anything that can be described to a render filter
pub trait Element {
    fn meta(&self) -> ElementMeta<'_>;
}

impl Element for ClassLike {
    fn meta(&self) -> ElementMeta<'_> {
        ElementMeta {
            kind: ElementKind::ClassLike,
            name: &self.name,
            visibility: Visibility::Public,
            doc: self.doc.as_ref(),
        }
    }
}

impl Element for Constant {
    fn meta(&self) -> ElementMeta<'_> {
        ElementMeta {
            kind: ElementKind::Constant,
            name: &self.name,
            visibility: self.visibility,
            doc: self.doc.as_ref(),
        }
    }
}

impl Element for Property {
    fn meta(&self) -> ElementMeta<'_> {
        ElementMeta {
            kind: ElementKind::Property,
            name: &self.name,
            visibility: self.visibility,
            doc: self.doc.as_ref(),
        }
    }
}

impl Element for Method {
    fn meta(&self) -> ElementMeta<'_> {
        ElementMeta {
            kind: ElementKind::Method,
            name: &self.name,
            visibility: self.visibility,
            doc: self.doc.as_ref(),
        }
    }
}

/// Pure predicate deciding whether an element appears in the output
pub trait RenderFilter {
    fn should_render(&self, element: &ElementMeta<'_>) -> bool;
}

impl<F> RenderFilter for F
where
    F: Fn(&ElementMeta<'_>) -> bool,
{
    fn should_render(&self, element: &ElementMeta<'_>) -> bool {
        self(element)
    }
}

/// Lowest visibility that still gets documented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum VisibilityLevel {
    #[default]
    Public,
    Protected,
    All,
}

impl VisibilityLevel {
    pub fn allows(&self, visibility: Visibility) -> bool {
        match self {
            VisibilityLevel::Public => visibility == Visibility::Public,
            VisibilityLevel::Protected => visibility != Visibility::Private,
            VisibilityLevel::All => true,
        }
    }
}

/// The configured policy: a visibility threshold plus whether `@internal`
/// elements are kept
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityPolicy {
    pub level: VisibilityLevel,
    pub include_internal: bool,
}

impl VisibilityPolicy {
    pub fn new(level: VisibilityLevel) -> Self {
        Self {
            level,
            include_internal: false,
        }
    }

    pub fn with_internal(self, include_internal: bool) -> Self {
        Self {
            include_internal,
            ..self
        }
    }
}

impl RenderFilter for VisibilityPolicy {
    fn should_render(&self, element: &ElementMeta<'_>) -> bool {
        if element.is_internal() && !self.include_internal {
            return false;
        }
        self.level.allows(element.visibility)
    }
}
