//! Application module: the presentation model shared by the event loop
//! and the renderer.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
