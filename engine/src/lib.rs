pub mod game;
pub mod logger;
