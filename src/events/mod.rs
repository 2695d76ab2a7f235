pub mod check;
pub mod pointer;

pub use check::wire_check_button;
pub use pointer::wire_pointer_handlers;
