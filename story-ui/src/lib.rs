pub mod api;
pub mod components;
pub mod diff;
pub mod nav;
pub mod session;

pub use components::*;
pub use diff::{diff_lines, DiffSegment};
pub use nav::{transition, NavEvent, Surface};
