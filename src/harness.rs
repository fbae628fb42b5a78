//! Lightweight timing driver contrasting the two sequence implementations.
//!
//! Each measurement builds a sequence of `0..n`, runs a warmup phase whose
//! timings are discarded, then reports the average wall-clock time per
//! operation over `reps` repetitions. Sub-100ns figures are noisy; the
//! criterion benches give sound numbers, this is for quick trend reading.

use crate::array::ArraySequence;
use crate::error::Result;
use crate::linked::LinkedSequence;
use crate::sequence::Sequence;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::debug;

/// Sequence lengths measured by default.
pub const DEFAULT_SIZES: [usize; 3] = [1_000, 5_000, 20_000];

/// Parameters of a measurement run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Sequence lengths to measure. Each must be non-zero.
    pub sizes: Vec<usize>,
    /// Timed repetitions per operation.
    pub reps: usize,
    /// Untimed repetitions per operation before timing starts.
    pub warmup: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            reps: 500,
            warmup: 200,
        }
    }
}

impl HarnessConfig {
    /// Defaults for the node-level versus index-level comparison.
    pub fn node_pair() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            reps: 200,
            warmup: 10,
        }
    }

    pub fn with_sizes<I: IntoIterator<Item = usize>>(mut self, sizes: I) -> Self {
        self.sizes = sizes.into_iter().collect();
        self
    }

    pub fn with_reps(mut self, reps: usize) -> Self {
        self.reps = reps;
        self
    }

    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }
}

/// Average per-operation latencies for one sequence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitReport {
    pub size: usize,
    /// `get(n / 2)`.
    pub get: Duration,
    /// `insert(0, _)` followed by `remove(0)`.
    pub insert_remove_front: Duration,
    /// `split_copy(n / 2)`.
    pub split_copy: Duration,
    /// Rebuild of `0..n` followed by `split_transfer(n / 2)`.
    pub split_transfer: Duration,
}

/// Array and linked reports for the same length, side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitComparison {
    pub array: SplitReport,
    pub linked: SplitReport,
}

/// Node-handle versus index-based insert/remove pairs at the midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodePairReport {
    pub size: usize,
    /// `add_after(mid, _)` followed by `remove_after(mid)`.
    pub node_pair: Duration,
    /// `insert(mid + 1, _)` followed by `remove(mid + 1)`.
    pub index_pair: Duration,
}

fn build<S: FromIterator<i64>>(n: usize) -> S {
    (0..n as i64).collect()
}

fn per_op(elapsed: Duration, reps: usize) -> Duration {
    let nanos = elapsed.as_nanos() / reps.max(1) as u128;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

fn time_get<S: Sequence<i64>>(seq: &S, reps: usize) -> Result<Duration> {
    let index = seq.len() / 2;
    let mut sink = 0i64;
    let start = Instant::now();
    for _ in 0..reps {
        sink = sink.wrapping_add(*seq.get(black_box(index))?);
    }
    let elapsed = start.elapsed();
    black_box(sink);
    Ok(per_op(elapsed, reps))
}

fn time_insert_remove_front<S: Sequence<i64>>(seq: &mut S, reps: usize) -> Result<Duration> {
    let start = Instant::now();
    for _ in 0..reps {
        seq.insert(0, -1)?;
        black_box(seq.remove(0)?);
    }
    Ok(per_op(start.elapsed(), reps))
}

fn time_split_copy<S: Sequence<i64>>(seq: &S, reps: usize) -> Result<Duration> {
    let index = seq.len() / 2;
    let mut sink = 0usize;
    let start = Instant::now();
    for _ in 0..reps {
        let out = seq.split_copy(black_box(index))?;
        sink += out.len();
    }
    let elapsed = start.elapsed();
    black_box(sink);
    Ok(per_op(elapsed, reps))
}

fn time_split_transfer<S>(size: usize, reps: usize) -> Result<Duration>
where
    S: Sequence<i64> + FromIterator<i64>,
{
    let index = size / 2;
    let mut sink = 0usize;
    let start = Instant::now();
    for _ in 0..reps {
        let mut fresh: S = build(size);
        let out = fresh.split_transfer(black_box(index))?;
        sink += out.len();
    }
    let elapsed = start.elapsed();
    black_box(sink);
    Ok(per_op(elapsed, reps))
}

fn run_splits<S>(seq: &mut S, size: usize, reps: usize) -> Result<SplitReport>
where
    S: Sequence<i64> + FromIterator<i64>,
{
    Ok(SplitReport {
        size,
        get: time_get(seq, reps)?,
        insert_remove_front: time_insert_remove_front(seq, reps)?,
        split_copy: time_split_copy(seq, reps)?,
        split_transfer: time_split_transfer::<S>(size, reps)?,
    })
}

/// Measures `get`, front insert/remove, and both split kinds on `S` for every
/// configured size.
pub fn measure_splits<S>(config: &HarnessConfig) -> Result<Vec<SplitReport>>
where
    S: Sequence<i64> + FromIterator<i64>,
{
    let mut reports = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let mut seq: S = build(size);
        run_splits(&mut seq, size, config.warmup)?;
        let report = run_splits(&mut seq, size, config.reps)?;
        debug!(
            size,
            sequence = std::any::type_name::<S>(),
            "measured split operations"
        );
        reports.push(report);
    }
    Ok(reports)
}

/// Runs [`measure_splits`] for both implementations and pairs the results.
pub fn compare_splits(config: &HarnessConfig) -> Result<Vec<SplitComparison>> {
    let array = measure_splits::<ArraySequence<i64>>(config)?;
    let linked = measure_splits::<LinkedSequence<i64>>(config)?;
    Ok(array
        .into_iter()
        .zip(linked)
        .map(|(array, linked)| SplitComparison { array, linked })
        .collect())
}

fn run_node_pairs(list: &mut LinkedSequence<i64>, mid: usize, reps: usize) -> Result<Duration> {
    let here = list.handle_at(mid)?;
    let start = Instant::now();
    for _ in 0..reps {
        // SAFETY: `here` stays linked, only the node after it comes and goes.
        unsafe {
            list.add_after(Some(here), -1);
            black_box(list.remove_after(Some(here))?);
        }
    }
    Ok(per_op(start.elapsed(), reps))
}

fn run_index_pairs(list: &mut LinkedSequence<i64>, index: usize, reps: usize) -> Result<Duration> {
    let start = Instant::now();
    for _ in 0..reps {
        list.insert(index, -1)?;
        black_box(list.remove(index)?);
    }
    Ok(per_op(start.elapsed(), reps))
}

/// Compares O(1) handle-based splicing against O(index) index-based splicing
/// at the middle of a linked sequence.
pub fn measure_node_pairs(config: &HarnessConfig) -> Result<Vec<NodePairReport>> {
    let mut reports = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let mut list: LinkedSequence<i64> = build(size);
        let mid = size / 2;

        run_node_pairs(&mut list, mid, config.warmup)?;
        run_index_pairs(&mut list, mid + 1, config.warmup)?;

        let node_pair = run_node_pairs(&mut list, mid, config.reps)?;
        let index_pair = run_index_pairs(&mut list, mid + 1, config.reps)?;
        debug!(size, "measured node pairs");
        reports.push(NodePairReport {
            size,
            node_pair,
            index_pair,
        });
    }
    Ok(reports)
}

impl fmt::Display for SplitComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("get(mid)", self.array.get, self.linked.get),
            (
                "insert+remove(0)",
                self.array.insert_remove_front,
                self.linked.insert_remove_front,
            ),
            ("split_copy(mid)", self.array.split_copy, self.linked.split_copy),
            (
                "split_transfer(mid)",
                self.array.split_transfer,
                self.linked.split_transfer,
            ),
        ];
        writeln!(f, "n = {}", self.array.size)?;
        for (name, array, linked) in rows {
            writeln!(
                f,
                "  {:<20} ArraySequence {} ns/op, LinkedSequence {} ns/op",
                format!("{}:", name),
                array.as_nanos(),
                linked.as_nanos()
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for NodePairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n = {}", self.size)?;
        writeln!(
            f,
            "  node add_after/remove_after: {} ns/op",
            self.node_pair.as_nanos()
        )?;
        writeln!(f, "  index insert/remove: {} ns/op", self.index_pair.as_nanos())
    }
}
