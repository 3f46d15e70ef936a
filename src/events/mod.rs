pub mod keyboard;
pub mod scroll;

pub use keyboard::wire_scroll_keys;
pub use scroll::{wire_native_scroll, wire_touch, wire_wheel};
