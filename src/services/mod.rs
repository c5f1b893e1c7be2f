// Service module exports

pub mod error;
pub mod event;
pub mod grid;
pub mod interaction;
pub mod layout;
pub mod palette;
pub mod settings;
