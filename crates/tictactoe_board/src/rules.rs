//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Grid`](crate::Grid). Rules are kept apart from
//! board storage so the invariant checks can reuse them.

mod draw;
mod line;
mod win;

pub use draw::is_full;
pub use line::Line;
pub use win::{winner, winning_line, winning_line_through};
