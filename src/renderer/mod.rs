pub mod components;
pub mod emitter;
pub mod filter;
pub mod renderer;
pub mod renders;
pub mod traits;

pub use components::*;
pub use emitter::*;
pub use filter::*;
pub use renderer::*;
pub use traits::*;
