// Domain layer - pure data models shared by every flow
pub mod figure;
pub mod metric;
pub mod record;
