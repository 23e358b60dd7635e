// Slotgrid Library
// Calendar slot-grid layout engine: exports all modules for testing and reuse

pub mod dnd;
pub mod layout;
pub mod models;
pub mod state;
pub mod utils;
