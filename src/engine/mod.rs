pub mod board;
pub mod game;
pub mod geometry;
pub mod layout;
pub mod movegen;
pub mod selection;
pub mod types;

pub use board::{Board, Cell};
pub use game::Game;
pub use movegen::moves_for;
pub use selection::{ClickEvent, Selection, Transition, click};
pub use types::*;
