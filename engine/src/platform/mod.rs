//! Desktop host: a winit window presenting a `pixels` framebuffer.

mod framebuffer;
mod window;

pub use framebuffer::PixelsContext;
pub use window::{WinitHost, WinitSurface};
