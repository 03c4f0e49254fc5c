//! View layer: renders the model, never mutates it

pub mod components;
mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
