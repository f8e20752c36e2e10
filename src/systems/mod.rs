pub mod bodies;
pub mod boundary;
