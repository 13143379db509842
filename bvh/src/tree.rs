use crate::config::Config;
use crate::factory::{AabbBvFactory, BvFactory};
use crate::node::NodeArena;
use crate::object::WorldObject;
use crate::partition::{MedianCut, PartitionItem, PartitionStrategy};
use collisions::{shape_point, shape_ray, shape_shape, CollisionChecker, SatCollisionChecker};
use common::shapes::{Ray, Shape, ShapeEnum};
use fxhash::FxHashSet;
use nalgebra::Point2;
use smallvec::SmallVec;

type NodeStack = SmallVec<[u32; 64]>;

// Top-down bounding volume hierarchy over a flat object list.
//
// `add`/`remove` only touch the backing list; the tree itself is refreshed
// exclusively by `rebuild`. Until then queries keep answering from the
// previous build and `is_stale` reports the mismatch. Callers own the
// mutate-then-rebuild cadence.
pub struct BvhTree<T: WorldObject> {
    objects: Vec<T>,
    arena: NodeArena,
    root: Option<u32>,
    stale: bool,
    config: Config,
    factory: Box<dyn BvFactory>,
    partition: Box<dyn PartitionStrategy>,
    checker: Box<dyn CollisionChecker>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub max_depth: u32,
}

impl<T: WorldObject> BvhTree<T> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_parts(
            config,
            Box::new(AabbBvFactory::new()),
            Box::new(MedianCut),
            Box::new(SatCollisionChecker::new()),
        )
    }

    pub fn with_parts(
        config: Config,
        factory: Box<dyn BvFactory>,
        partition: Box<dyn PartitionStrategy>,
        checker: Box<dyn CollisionChecker>,
    ) -> Self {
        Self {
            objects: Vec::new(),
            arena: NodeArena::default(),
            root: None,
            stale: false,
            config,
            factory,
            partition,
            checker,
        }
    }

    pub fn add(&mut self, object: T) {
        self.objects.push(object);
        self.stale = true;
    }

    pub fn remove(&mut self, id: u32) -> Option<T> {
        let index = self.objects.iter().position(|object| object.id() == id)?;
        self.stale = true;
        Some(self.objects.remove(index))
    }

    // Discards the previous tree and constructs a new one from the current
    // object list. Deterministic for a given list, factory and partition
    // strategy.
    pub fn rebuild(&mut self) {
        self.arena.clear();
        self.root = None;
        self.stale = false;
        if self.objects.is_empty() {
            return;
        }
        let items: Vec<PartitionItem> = self
            .objects
            .iter()
            .enumerate()
            .map(|(index, object)| PartitionItem {
                index: index as u32,
                center: object.bounding_volume().position(),
            })
            .collect();
        let root = self.arena.build(
            items,
            0,
            &self.objects,
            &self.config,
            self.factory.as_ref(),
            self.partition.as_ref(),
        );
        self.root = Some(root);
    }

    pub fn clear(&mut self) {
        self.objects.clear();
        self.arena.clear();
        self.root = None;
        self.stale = false;
    }

    // Forwards the frame delta to every stored object. Does not rebuild.
    pub fn update(&mut self, dt: f32) {
        for object in &mut self.objects {
            object.update(dt);
        }
    }

    pub fn query(&self, region: &ShapeEnum) -> Vec<&T> {
        self.query_with(|bv| shape_shape(self.checker.as_ref(), region, bv))
    }

    pub fn query_point(&self, point: Point2<f32>) -> Vec<&T> {
        self.query_with(|bv| shape_point(self.checker.as_ref(), bv, point))
    }

    pub fn query_ray(&self, ray: &Ray) -> Vec<&T> {
        self.query_with(|bv| shape_ray(self.checker.as_ref(), bv, ray))
    }

    fn query_with<F>(&self, overlaps: F) -> Vec<&T>
    where
        F: Fn(&ShapeEnum) -> bool,
    {
        let mut hits = Vec::new();
        let root = match self.root {
            Some(root) => root,
            None => return hits,
        };
        let mut stack = NodeStack::new();
        stack.push(root);
        while let Some(handle) = stack.pop() {
            let node = self.arena.get(handle);
            if !overlaps(&node.bv) {
                continue;
            }
            if node.is_leaf() {
                for &index in &node.objects {
                    // A stale tree may hold indices past the end of the list.
                    if let Some(object) = self.objects.get(index as usize) {
                        if overlaps(object.bounding_volume()) {
                            hits.push(object);
                        }
                    }
                }
            } else {
                if let Some(right) = node.right {
                    stack.push(right);
                }
                if let Some(left) = node.left {
                    stack.push(left);
                }
            }
        }
        hits
    }

    // Reports every overlapping object pair exactly once, in id order within
    // the pair.
    pub fn for_each_collision_pair<F>(&self, mut f: F)
    where
        F: FnMut(&T, &T),
    {
        let mut seen: FxHashSet<(u32, u32)> = FxHashSet::default();
        for object in &self.objects {
            for other in self.query(object.bounding_volume()) {
                if other.id() == object.id() {
                    continue;
                }
                let pair = if object.id() < other.id() {
                    (object.id(), other.id())
                } else {
                    (other.id(), object.id())
                };
                if seen.insert(pair) {
                    f(object, other);
                }
            }
        }
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[T] {
        &self.objects
    }

    pub fn factory(&self) -> &dyn BvFactory {
        self.factory.as_ref()
    }

    pub fn checker(&self) -> &dyn CollisionChecker {
        self.checker.as_ref()
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        for node in self.arena.nodes() {
            stats.nodes += 1;
            if node.is_leaf() {
                stats.leaves += 1;
            }
            stats.max_depth = stats.max_depth.max(node.depth);
        }
        stats
    }

    // Appends every node's bounding volume, for debug overlays.
    pub fn all_node_bounding_volumes(&self, volumes: &mut Vec<ShapeEnum>) {
        for node in self.arena.nodes() {
            volumes.push(node.bv.clone());
        }
    }
}

impl<T: WorldObject> Default for BvhTree<T> {
    fn default() -> Self {
        Self::new()
    }
}
