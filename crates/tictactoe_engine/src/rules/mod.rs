//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They never mutate the
//! board and are cheap enough to call at every node of the game-tree search.

pub mod draw;
pub mod win;

pub use draw::{empty_cells, is_draw, is_full};
pub use win::{WIN_LINES, check_winner, has_won};
