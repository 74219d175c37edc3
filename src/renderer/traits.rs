use crate::error::EmitError;
use crate::renderer::emitter::Emitter;
use crate::renderer::filter::*;

/// Configuration context shared by every member render of one class
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub filter: &'a dyn RenderFilter,
}

impl<'a> RenderContext<'a> {
    pub fn new(filter: &'a dyn RenderFilter) -> Self {
        Self { filter }
    }

    pub fn should_render<E: Element + ?Sized>(&self, element: &E) -> bool {
        self.filter.should_render(&element.meta())
    }
}

/// Core rendering trait for class members
pub trait Render {
    fn render(&self, out: &mut Emitter, context: &RenderContext<'_>) -> Result<(), EmitError>;
}
