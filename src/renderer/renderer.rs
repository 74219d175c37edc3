use crate::error::EmitError;
use crate::model::*;
use crate::renderer::components::*;
use crate::renderer::emitter::Emitter;
use crate::renderer::filter::*;
use crate::renderer::traits::*;
use tracing::{debug, trace};

/// Renders one class-like element into a reStructuredText document
pub struct ClassRenderer<F> {
    filter: F,
}

impl<F: RenderFilter> ClassRenderer<F> {
    pub fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Render `class`, or return an empty string if the filter rejects it.
    ///
    /// Each call owns a fresh [`Emitter`]; the output depends only on `class`
    /// and the filter.
    pub fn render(&self, class: &ClassLike) -> Result<String, EmitError> {
        let context = RenderContext::new(&self.filter);
        if !context.should_render(class) {
            debug!(class = %class.fqsen, "class filtered out");
            return Ok(String::new());
        }

        let mut out = Emitter::new();
        self.render_class(&mut out, class, &context)?;
        out.extract()
    }

    fn render_class(
        &self,
        out: &mut Emitter,
        class: &ClassLike,
        context: &RenderContext<'_>,
    ) -> Result<(), EmitError> {
        debug!(class = %class.fqsen, kind = class.kind.directive(), "rendering class-like element");

        out.add_h1(&Emitter::escape(&class.name));

        let namespace = class.namespace();
        if !namespace.is_empty() {
            out.begin_block("namespace", namespace, false);
        }

        // final wins when both flags are set
        let mut modifier = "";
        if class.is_abstract {
            modifier = "abstract";
        }
        if class.is_final {
            modifier = "final";
        }
        if !modifier.is_empty() {
            out.add_line(&format!(".. rst-class:: {}", modifier)).add_blank();
        }

        let block_kind = class.kind.directive();
        out.begin_block(block_kind, &class.name, false);
        out.indent();
        self.render_header_fields(out, class);
        out.unindent()?;
        out.add_blank().add_blank();

        self.render_constants(out, &class.constants, context)?;
        self.render_properties(out, &class.properties, context)?;
        self.render_methods(out, &class.methods, context)?;

        out.end_block(Some(block_kind))?;
        if !namespace.is_empty() {
            out.end_block(Some("namespace"))?;
        }
        Ok(())
    }

    fn render_header_fields(&self, out: &mut Emitter, class: &ClassLike) {
        let doc_renderer = DocRenderer;
        let link_renderer = LinkRenderer;

        doc_renderer.render_description(out, class.doc.as_ref());

        if let Some(parent) = &class.parent {
            out.add_field_list("Extends", &link_renderer.render_link("class", parent));
        }

        let interfaces = link_renderer.render_links("interface", &class.interfaces);
        if !interfaces.is_empty() {
            let label = match class.kind {
                ClassKind::Interface => "Extends",
                _ => "Implements",
            };
            out.add_field_list(label, &interfaces);
        }

        let traits = link_renderer.render_links("trait", &class.traits);
        if !traits.is_empty() {
            out.add_field_list("Used traits", &traits);
        }
    }

    fn render_constants(
        &self,
        out: &mut Emitter,
        constants: &[Constant],
        context: &RenderContext<'_>,
    ) -> Result<(), EmitError> {
        self.render_section(out, "Constants", constants, context)
    }

    fn render_properties(
        &self,
        out: &mut Emitter,
        properties: &[Property],
        context: &RenderContext<'_>,
    ) -> Result<(), EmitError> {
        self.render_section(out, "Properties", properties, context)
    }

    fn render_methods(
        &self,
        out: &mut Emitter,
        methods: &[Method],
        context: &RenderContext<'_>,
    ) -> Result<(), EmitError> {
        self.render_section(out, "Methods", methods, context)
    }

    /// H2 `title` followed by every member that passes the filter, in
    /// reflection order. Nothing at all is emitted when no member passes.
    fn render_section<T: Element + Render>(
        &self,
        out: &mut Emitter,
        title: &str,
        members: &[T],
        context: &RenderContext<'_>,
    ) -> Result<(), EmitError> {
        if !members.iter().any(|member| context.should_render(member)) {
            return Ok(());
        }

        out.add_h2(title);
        for member in members {
            if !context.should_render(member) {
                trace!(section = title, member = member.meta().name, "member filtered out");
                continue;
            }
            member.render(out, context)?;
        }
        Ok(())
    }
}
