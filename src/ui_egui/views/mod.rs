pub mod grid_view;
mod palette;

pub use grid_view::{GridInput, GridView};
