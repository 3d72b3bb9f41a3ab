// Application layer - use cases over the loaded table
pub mod aggregate;
pub mod binder;
pub mod charts;
pub mod dataset_source;
