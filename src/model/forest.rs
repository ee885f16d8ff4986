//! Random-forest regressor used to predict fantasy points on the fly.
//!
//! Each tree is a CART regression tree grown on a bootstrap sample until its
//! leaves are pure or too small to split. Trees are grown in parallel, each
//! from its own RNG seeded with `seed + tree_index`, so a given config always
//! yields the same forest regardless of thread scheduling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Training parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestConfig {
    pub n_trees: usize,
    pub seed: u64,
    pub min_samples_split: usize,
    pub max_depth: Option<usize>,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            seed: 42,
            min_samples_split: 2,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf(f64),
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn predict(&self, row: &[f64]) -> f64 {
        match self {
            Node::Leaf(value) => *value,
            Node::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                let x = row.get(*feature).copied().unwrap_or(0.0);
                if x <= *threshold {
                    left.predict(row)
                } else {
                    right.predict(row)
                }
            }
        }
    }
}

struct SplitCandidate {
    feature: usize,
    threshold: f64,
    sse: f64,
}

struct TreeBuilder<'a> {
    features: &'a [Vec<f64>],
    targets: &'a [f64],
    config: &'a ForestConfig,
}

impl TreeBuilder<'_> {
    fn build(&self, samples: &[usize], depth: usize) -> Node {
        let mean = mean_of(samples.iter().map(|&i| self.targets[i]));

        let depth_reached = self.config.max_depth.is_some_and(|d| depth >= d);
        if samples.len() < self.config.min_samples_split || depth_reached || self.is_pure(samples) {
            return Node::Leaf(mean);
        }

        let Some(best) = self.best_split(samples) else {
            return Node::Leaf(mean);
        };

        let (left, right): (Vec<usize>, Vec<usize>) = samples
            .iter()
            .partition(|&&i| self.features[i][best.feature] <= best.threshold);

        Node::Split {
            feature: best.feature,
            threshold: best.threshold,
            left: Box::new(self.build(&left, depth + 1)),
            right: Box::new(self.build(&right, depth + 1)),
        }
    }

    fn is_pure(&self, samples: &[usize]) -> bool {
        let first = self.targets[samples[0]];
        samples.iter().all(|&i| self.targets[i] == first)
    }

    /// Lowest summed squared error over every feature and midpoint threshold.
    fn best_split(&self, samples: &[usize]) -> Option<SplitCandidate> {
        let n_features = self.features[samples[0]].len();
        let mut best: Option<SplitCandidate> = None;

        for feature in 0..n_features {
            let mut sorted: Vec<(f64, f64)> = samples
                .iter()
                .map(|&i| (self.features[i][feature], self.targets[i]))
                .collect();
            sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

            let total_sum: f64 = sorted.iter().map(|(_, y)| y).sum();
            let total_sq: f64 = sorted.iter().map(|(_, y)| y * y).sum();
            let n = sorted.len() as f64;

            let (mut left_sum, mut left_sq) = (0.0, 0.0);
            for k in 0..sorted.len() - 1 {
                let (x, y) = sorted[k];
                left_sum += y;
                left_sq += y * y;

                let next_x = sorted[k + 1].0;
                if x == next_x {
                    continue;
                }

                let left_n = (k + 1) as f64;
                let right_n = n - left_n;
                let right_sum = total_sum - left_sum;
                let right_sq = total_sq - left_sq;
                let sse = (left_sq - left_sum * left_sum / left_n)
                    + (right_sq - right_sum * right_sum / right_n);

                if best.as_ref().map_or(true, |b| sse < b.sse) {
                    best = Some(SplitCandidate {
                        feature,
                        threshold: (x + next_x) / 2.0,
                        sse,
                    });
                }
            }
        }

        best
    }
}

fn mean_of(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// An ensemble of regression trees; predictions are the mean over trees.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomForest {
    trees: Vec<Node>,
}

impl RandomForest {
    /// Fit on `features` (one row per sample) against `targets`.
    ///
    /// An empty training set yields a forest with no trees, which predicts 0.
    pub fn fit(features: &[Vec<f64>], targets: &[f64], config: &ForestConfig) -> Self {
        let n = features.len().min(targets.len());
        if n == 0 {
            return Self { trees: Vec::new() };
        }

        let builder = TreeBuilder {
            features,
            targets,
            config,
        };

        let trees = (0..config.n_trees)
            .into_par_iter()
            .map(|t| {
                let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(t as u64));
                let sample: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
                builder.build(&sample, 0)
            })
            .collect();

        Self { trees }
    }

    pub fn predict(&self, row: &[f64]) -> f64 {
        mean_of(self.trees.iter().map(|tree| tree.predict(row)))
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}
