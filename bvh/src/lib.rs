pub mod config;
pub mod factory;
pub mod object;
pub mod partition;
pub mod tree;

mod node;

pub use config::Config;
pub use factory::{AabbBvFactory, BvFactory};
pub use object::{Object2d, WorldObject};
pub use partition::{MedianCut, Partition, PartitionItem, PartitionStrategy};
pub use tree::{BvhTree, TreeStats};
