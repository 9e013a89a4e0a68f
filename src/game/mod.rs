//! Game session orchestration

mod session;

pub use session::{GameState, GuessError, Phase, QUIT_KEYWORD, Session, Turn, Victory};
