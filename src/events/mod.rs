pub mod drag;
pub mod input;
pub mod keyboard;

pub use input::{wire_delta_sources, wire_resize};
pub use keyboard::{escape_listener, wire_global_keydown};
