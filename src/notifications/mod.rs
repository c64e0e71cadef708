pub mod mutations;
pub mod queries;
