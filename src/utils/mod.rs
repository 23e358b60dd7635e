// Utility functions

pub mod date;
