pub mod classifier;
pub mod dataset;
pub mod meta;
pub mod predict;
pub mod train;
