mod color;
mod coordinate;
mod kind;
mod label;
mod piece;
mod preset;
mod registry;
mod state;
mod topology;
mod view;

pub use color::*;
pub use coordinate::*;
pub use kind::*;
pub use label::*;
pub use piece::*;
pub use preset::*;
pub use registry::*;
pub use state::*;
pub use topology::*;
pub use view::*;

#[cfg(test)]
mod fixture;

#[cfg(test)]
pub use fixture::*;
