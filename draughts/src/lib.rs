pub use board::*;
pub use config::*;
pub use errors::*;
pub use game::*;
pub use piece::*;
pub use protocol_types::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod config;
mod errors;
mod game;
mod piece;
mod protocol_types;
pub mod rules;
mod visualization;
