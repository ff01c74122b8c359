mod config;
mod engine;
mod event;
mod response;

pub use config::*;
pub use engine::*;
pub use event::*;
pub use response::*;
