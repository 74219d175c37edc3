//! # phpdoc-rst
//!
//! Renders reflected PHP classes, interfaces and traits into reStructuredText
//! for the Sphinx PHP domain.
//!
//! ```
//! use phpdoc_rst::{ClassLike, ClassRenderer, VisibilityLevel, VisibilityPolicy};
//!
//! let class = ClassLike {
//!     fqsen: "\\App\\Foo".to_string(),
//!     name: "Foo".to_string(),
//!     ..Default::default()
//! };
//! let renderer = ClassRenderer::new(VisibilityPolicy::new(VisibilityLevel::Public));
//! let rst = renderer.render(&class).unwrap();
//! assert!(rst.starts_with("Foo\n===\n"));
//! ```

pub mod error;
pub mod model;
pub mod renderer;

pub use error::EmitError;
pub use model::*;
pub use renderer::*;
