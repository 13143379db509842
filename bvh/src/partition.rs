use nalgebra::Point2;

// One positioned entry handed to a partition strategy: the index of the
// object in the tree's backing list and the center of its bounding volume.
#[derive(Debug, Clone, Copy)]
pub struct PartitionItem {
    pub index: u32,
    pub center: Point2<f32>,
}

#[derive(Debug, Default)]
pub struct Partition {
    pub left: Vec<PartitionItem>,
    pub right: Vec<PartitionItem>,
}

// Splits a set of positioned entries in two. Every input entry lands in
// exactly one side; either side may come back empty.
pub trait PartitionStrategy {
    fn solve(&self, items: &[PartitionItem]) -> Partition;
}

// Splits along the axis with the larger center spread, at the midpoint of
// that spread. No sorting and no balancing beyond this single pass; skewed
// populations produce skewed trees.
#[derive(Debug, Default)]
pub struct MedianCut;

impl PartitionStrategy for MedianCut {
    fn solve(&self, items: &[PartitionItem]) -> Partition {
        let mut result = Partition::default();
        if items.is_empty() {
            return result;
        }

        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for item in items {
            min_x = f32::min(min_x, item.center.x);
            max_x = f32::max(max_x, item.center.x);
            min_y = f32::min(min_y, item.center.y);
            max_y = f32::max(max_y, item.center.y);
        }

        let split_x = (max_x - min_x) >= (max_y - min_y);
        let split = if split_x {
            min_x + (max_x - min_x) / 2.0
        } else {
            min_y + (max_y - min_y) / 2.0
        };

        for item in items {
            let coord = if split_x { item.center.x } else { item.center.y };
            if coord > split {
                result.right.push(*item);
            } else {
                result.left.push(*item);
            }
        }
        result
    }
}
