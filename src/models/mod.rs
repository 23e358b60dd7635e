// Data models
// Caller-owned event data consumed by the layout engine

pub mod event;
