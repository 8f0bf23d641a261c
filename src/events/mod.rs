pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_dismiss_key;
pub use pointer::wire_pointer_tracking;
