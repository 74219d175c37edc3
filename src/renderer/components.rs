use crate::model::*;
use crate::renderer::emitter::Emitter;

/// Helper for turning references into PHP domain roles
pub struct LinkRenderer;

impl LinkRenderer {
    /// `:php:<kind>:`<target>``, falling back to the escaped reference text when
    /// there is no usable target
    pub fn render_link(&self, kind: &str, fqsen: &str) -> String {
        let target = fqsen.trim().trim_start_matches('\\');
        if target.is_empty() {
            return Emitter::escape(fqsen);
        }
        format!(":php:{}:`{}`", kind, Emitter::escape(target))
    }

    /// Space-separated links, empty when there are no references
    pub fn render_links(&self, kind: &str, fqsens: &[String]) -> String {
        let links: Vec<String> = fqsens
            .iter()
            .map(|fqsen| self.render_link(kind, fqsen))
            .collect();
        links.join(" ")
    }
}

/// Helper for rendering doc comment content
pub struct DocRenderer;

impl DocRenderer {
    /// Description text of an optional doc block. Always emits at least one
    /// line; a non-empty description is followed by a blank line.
    pub fn render_description(&self, out: &mut Emitter, doc: Option<&DocBlock>) {
        let text = doc.map(DocBlock::text).unwrap_or_default();
        out.add_multiline(&text, false);
        if !text.is_empty() {
            out.add_blank();
        }
    }

    /// `<type> <description>` for a tag, skipping whichever part is missing.
    /// `fallback_ty` stands in when the tag carries no type.
    pub fn render_tag_body(&self, tag: &Tag, fallback_ty: Option<&str>) -> String {
        let ty = tag
            .ty
            .as_deref()
            .or(fallback_ty)
            .filter(|ty| !ty.trim().is_empty())
            .map(Emitter::escape);
        let description = tag.description.trim();
        match (ty, description.is_empty()) {
            (Some(ty), false) => format!("{} {}", ty, description),
            (Some(ty), true) => ty,
            (None, _) => description.to_string(),
        }
    }

    /// Type of a constant or property: the declared one, else its `@var` tag
    pub fn resolve_type(&self, declared: Option<&str>, doc: Option<&DocBlock>) -> Option<String> {
        declared
            .or_else(|| doc.and_then(|d| d.first_tag("var")).and_then(|t| t.ty.as_deref()))
            .filter(|ty| !ty.trim().is_empty())
            .map(Emitter::escape)
    }
}
