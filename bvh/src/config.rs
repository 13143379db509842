#[derive(Debug, Clone)]
pub struct Config {
    // Largest object count a leaf holds before a split is attempted.
    pub leaf_capacity: usize,
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            leaf_capacity: 2,
            max_depth: 50,
        }
    }
}
