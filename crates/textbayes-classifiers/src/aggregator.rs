//! Parallel scoring of category partitions
//!
//! The category list is cut into contiguous partitions. Each partition is
//! scored on the worker pool into a local map, and local maps are merged into
//! the shared result under a mutex. [`ConcurrentAggregator::score_all`] only
//! returns once every partition has been merged.
//!
//! Scoring only reads the frequency store, so the partition count changes
//! wall-clock time and nothing else.

use crate::config::NaiveBayesConfig;
use crate::scorer::CategoryScorer;
use parking_lot::Mutex;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use textbayes_core::{Error, Result, ScoreMap, Token};
use tracing::{debug, trace};

/// How a category list is split for scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionPlan {
    /// Non-empty partitions that will be scored
    pub partitions: usize,

    /// Categories per partition; the last one may hold fewer
    pub group_size: usize,
}

impl PartitionPlan {
    /// Plan the split of `category_count` categories
    ///
    /// Below `parallel_threshold` categories everything goes into one
    /// partition. Otherwise the group size is `ceil(count / partitions)`, so
    /// trailing partitions may be smaller or never materialize.
    pub fn new(category_count: usize, partitions: usize, parallel_threshold: usize) -> Self {
        if category_count == 0 {
            return Self {
                partitions: 0,
                group_size: 1,
            };
        }

        let requested = if category_count < parallel_threshold {
            1
        } else {
            partitions.max(1)
        };

        let group_size = category_count.div_ceil(requested);

        Self {
            partitions: category_count.div_ceil(group_size),
            group_size,
        }
    }
}

/// Fans category scoring out over a worker pool
pub struct ConcurrentAggregator {
    pool: ThreadPool,
    partitions: usize,
    parallel_threshold: usize,
}

impl ConcurrentAggregator {
    /// Create an aggregator with its own worker pool
    pub fn new(partitions: usize, parallel_threshold: usize, threads: usize) -> Result<Self> {
        if partitions == 0 {
            return Err(Error::config("partitions must be at least 1"));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("textbayes-score-{i}"))
            .build()
            .map_err(|e| Error::internal(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            pool,
            partitions,
            parallel_threshold,
        })
    }

    /// Create an aggregator from classifier configuration
    pub fn from_config(config: &NaiveBayesConfig) -> Result<Self> {
        Self::new(
            config.partitions,
            config.parallel_threshold,
            config.thread_count(),
        )
    }

    /// Configured partition count
    pub fn partitions(&self) -> usize {
        self.partitions
    }

    /// Worker threads in the pool
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Plan for a given number of categories
    pub fn plan(&self, category_count: usize) -> PartitionPlan {
        PartitionPlan::new(category_count, self.partitions, self.parallel_threshold)
    }

    /// Score every category in `categories`
    ///
    /// Blocks until all partitions are scored and merged.
    pub fn score_all(
        &self,
        scorer: &CategoryScorer<'_>,
        categories: &[&str],
        tokens: &[Token],
    ) -> ScoreMap {
        let plan = self.plan(categories.len());
        debug!(
            categories = categories.len(),
            partitions = plan.partitions,
            group_size = plan.group_size,
            "Scoring categories"
        );

        if plan.partitions <= 1 {
            return score_partition(scorer, categories, tokens);
        }

        let merged = Mutex::new(ScoreMap::new());

        self.pool.install(|| {
            categories
                .par_chunks(plan.group_size)
                .enumerate()
                .for_each(|(index, partition)| {
                    let local = score_partition(scorer, partition, tokens);
                    trace!(partition = index, scored = local.len(), "Merging partition");

                    merged.lock().extend(local);
                });
        });

        merged.into_inner()
    }
}

fn score_partition(scorer: &CategoryScorer<'_>, partition: &[&str], tokens: &[Token]) -> ScoreMap {
    partition
        .iter()
        .map(|category| (category.to_string(), scorer.score(tokens, category)))
        .collect()
}
