use crate::error::EmitError;
use crate::model::*;
use crate::renderer::components::*;
use crate::renderer::emitter::Emitter;
use crate::renderer::traits::*;

impl Render for Constant {
    fn render(&self, out: &mut Emitter, _context: &RenderContext<'_>) -> Result<(), EmitError> {
        let doc_renderer = DocRenderer;

        out.begin_block("const", &self.name, true);
        doc_renderer.render_description(out, self.doc.as_ref());

        if let Some(ty) = doc_renderer.resolve_type(self.ty.as_deref(), self.doc.as_ref()) {
            out.add_field_list("Type", &ty);
        }
        out.add_field_list("Value", &Emitter::escape(&self.value));

        out.end_block(Some("const"))?;
        Ok(())
    }
}

impl Render for Property {
    fn render(&self, out: &mut Emitter, _context: &RenderContext<'_>) -> Result<(), EmitError> {
        let doc_renderer = DocRenderer;

        let mut modifiers = self.visibility.as_str().to_string();
        if self.is_static {
            modifiers.push_str(" static");
        }
        out.add_line(&format!(".. rst-class:: {}", modifiers)).add_blank();

        out.indent();
        out.begin_block("attr", &self.name, true);
        doc_renderer.render_description(out, self.doc.as_ref());

        if let Some(ty) = doc_renderer.resolve_type(self.ty.as_deref(), self.doc.as_ref()) {
            out.add_field_list("Type", &ty);
        }
        if let Some(default) = &self.default {
            out.add_field_list("Default", &Emitter::escape(default));
        }

        out.end_block(Some("attr"))?;
        out.unindent()?;
        Ok(())
    }
}

impl Method {
    /// `visibility[ abstract][ final][ static]`
    pub fn modifiers(&self) -> String {
        let mut modifiers = self.visibility.as_str().to_string();
        if self.is_abstract {
            modifiers.push_str(" abstract");
        }
        if self.is_final {
            modifiers.push_str(" final");
        }
        if self.is_static {
            modifiers.push_str(" static");
        }
        modifiers
    }

    /// `name($a, $b)`. Argument types and defaults are not part of the signature.
    pub fn signature(&self) -> String {
        let args: Vec<String> = self
            .arguments
            .iter()
            .map(|arg| format!("${}", arg.variable_name()))
            .collect();
        format!("{}({})", self.name, args.join(", "))
    }
}

impl Render for Method {
    fn render(&self, out: &mut Emitter, _context: &RenderContext<'_>) -> Result<(), EmitError> {
        let doc_renderer = DocRenderer;
        let params = self.doc.as_ref().map(DocBlock::params).unwrap_or_default();

        out.add_line(&format!(".. rst-class:: {}", self.modifiers()))
            .add_blank();
        out.indent();
        out.begin_block("method", &self.signature(), true);
        doc_renderer.render_description(out, self.doc.as_ref());
        out.add_blank();

        for argument in &self.arguments {
            let Some(param) = params.get(argument.variable_name()) else {
                continue;
            };
            let field = match param.ty.as_deref().filter(|ty| !ty.is_empty()) {
                Some(ty) => format!(
                    ":param {} ${}: {}",
                    Emitter::escape(ty),
                    argument.variable_name(),
                    param.description
                ),
                None => format!(":param ${}: {}", argument.variable_name(), param.description),
            };
            out.add_multiline(&field, true);
        }

        let returns = match self.doc.as_ref().and_then(|doc| doc.first_tag("return")) {
            Some(tag) => doc_renderer.render_tag_body(tag, self.return_type.as_deref()),
            None => self
                .return_type
                .as_deref()
                .map(Emitter::escape)
                .unwrap_or_default(),
        };
        if !returns.is_empty() {
            out.add_multiline(&format!(":returns: {}", returns), true);
        }

        if let Some(doc) = &self.doc {
            for throws in doc.tags_named("throws") {
                let body = doc_renderer.render_tag_body(throws, None);
                if !body.is_empty() {
                    out.add_multiline(&format!(":throws: {}", body), true);
                }
            }
        }

        out.end_block(Some("method"))?;
        out.unindent()?;
        Ok(())
    }
}
