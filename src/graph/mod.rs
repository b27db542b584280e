//! Graph representation and construction module

pub mod compressed;
pub mod builder;
pub mod generator;

pub use builder::GraphBuilder;
pub use compressed::CompressedGraph;
