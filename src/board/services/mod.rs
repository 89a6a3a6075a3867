//! Application services for the board.

mod board;
mod config;

pub use board::{BoardService, BoardServiceError, BoardServiceResult};
pub use config::BoardConfig;
