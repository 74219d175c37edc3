use serde::Deserialize;
use std::collections::HashMap;

/// Declared visibility of a class member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

/// Which flavour of class-like element this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Trait,
}

impl ClassKind {
    /// Directive name used by the PHP domain
    pub fn directive(&self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Trait => "trait",
        }
    }
}

/// A single `@name [type] [$variable] description` annotation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    #[serde(default)]
    pub variable: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Tag {
    /// Variable name without the leading `$`
    pub fn variable_name(&self) -> Option<&str> {
        self.variable.as_deref().map(|v| v.trim_start_matches('$'))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocBlock {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl DocBlock {
    pub fn tags_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.tags.iter().filter(move |tag| tag.name == name)
    }

    pub fn first_tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.name == name)
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.first_tag(name).is_some()
    }

    /// `@param` tags keyed by variable name. Later tags for the same name win.
    pub fn params(&self) -> HashMap<&str, &Tag> {
        self.tags_named("param")
            .filter_map(|tag| tag.variable_name().map(|name| (name, tag)))
            .collect()
    }

    /// Summary and long description joined by a blank line
    pub fn text(&self) -> String {
        let summary = self.summary.trim();
        let description = self.description.trim();
        match (summary.is_empty(), description.is_empty()) {
            (_, true) => summary.to_string(),
            (true, false) => description.to_string(),
            (false, false) => format!("{}\n\n{}", summary, description),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Argument {
    pub name: String,
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
}

impl Argument {
    /// Argument name without the leading `$`
    pub fn variable_name(&self) -> &str {
        self.name.trim_start_matches('$')
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub arguments: Vec<Argument>,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub doc: Option<DocBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub doc: Option<DocBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Constant {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    #[serde(default)]
    pub doc: Option<DocBlock>,
}

/// A class, interface or trait as produced by the reflection step
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassLike {
    pub fqsen: String,
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub doc: Option<DocBlock>,
    #[serde(default)]
    pub constants: Vec<Constant>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl ClassLike {
    /// Enclosing namespace without the leading `\`, empty for the global namespace
    pub fn namespace(&self) -> &str {
        self.fqsen
            .strip_suffix(self.name.as_str())
            .and_then(|rest| rest.strip_suffix('\\'))
            .map(|namespace| namespace.trim_start_matches('\\'))
            .unwrap_or("")
    }
}
