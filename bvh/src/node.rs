use crate::config::Config;
use crate::factory::BvFactory;
use crate::object::WorldObject;
use crate::partition::{PartitionItem, PartitionStrategy};
use common::shapes::ShapeEnum;

// One slot of the node arena. A node is a leaf iff it has no children;
// leaves hold indices into the tree's backing object list.
pub(crate) struct Node {
    pub(crate) bv: ShapeEnum,
    pub(crate) left: Option<u32>,
    pub(crate) right: Option<u32>,
    pub(crate) depth: u32,
    pub(crate) objects: Vec<u32>,
}

impl Node {
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

// Flat node storage addressed by handle. A rebuild resets the whole arena;
// nodes are never reclaimed individually.
#[derive(Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    pub(crate) fn get(&self, handle: u32) -> &Node {
        &self.nodes[handle as usize]
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn push(&mut self, node: Node) -> u32 {
        let handle = self.nodes.len() as u32;
        self.nodes.push(node);
        handle
    }

    // Top-down construction. A node becomes a leaf when the item count fits
    // the leaf capacity, the depth cap is reached, or the partition leaves
    // one side empty -- recursing on a one-sided split would never terminate.
    pub(crate) fn build<T: WorldObject>(
        &mut self,
        items: Vec<PartitionItem>,
        depth: u32,
        objects: &[T],
        config: &Config,
        factory: &dyn BvFactory,
        partition: &dyn PartitionStrategy,
    ) -> u32 {
        if items.len() <= config.leaf_capacity || depth as usize >= config.max_depth {
            return self.push_leaf(items, depth, objects, factory);
        }

        let split = partition.solve(&items);
        if split.left.is_empty() || split.right.is_empty() {
            return self.push_leaf(items, depth, objects, factory);
        }

        let left = self.build(split.left, depth + 1, objects, config, factory, partition);
        let right = self.build(split.right, depth + 1, objects, config, factory, partition);
        let bv = factory.merge(&self.get(left).bv, &self.get(right).bv);
        self.push(Node {
            bv,
            left: Some(left),
            right: Some(right),
            depth,
            objects: Vec::new(),
        })
    }

    fn push_leaf<T: WorldObject>(
        &mut self,
        items: Vec<PartitionItem>,
        depth: u32,
        objects: &[T],
        factory: &dyn BvFactory,
    ) -> u32 {
        let mut bv = factory.place_holder();
        for (i, item) in items.iter().enumerate() {
            let volume = objects[item.index as usize].bounding_volume();
            bv = if i == 0 {
                factory.from_shape(volume)
            } else {
                factory.merge(&bv, volume)
            };
        }
        let object_indices = items.into_iter().map(|item| item.index).collect();
        self.push(Node {
            bv,
            left: None,
            right: None,
            depth,
            objects: object_indices,
        })
    }
}
