//! Batches of independent queries over one shared sequence.
//!
//! Every query only reads the shared [`SequenceView`] and writes its own
//! result, so a batch can be spread over the rayon thread pool without locks.
//! Results come back in query order either way.

use crate::analytics::accumulate::Accumulate;
use crate::analytics::primitives::{ReduceKind, WindowValue};
use crate::analytics::{enumerate_windows, window_reduce, window_sums};
use crate::config::{BatchConfig, SearchStrategy};
use crate::sequence::SequenceView;
use crate::threshold::{count_windows_below_with, minimal_window_at_least_with};
use crate::unique_run::longest_unique_run;
use crate::window::{SearchResult, UniqueRun, Window, WindowError, WindowResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// One windowed query. `S` is the accumulator type thresholds are given in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum WindowQuery<S> {
    EnumerateWindows { length: usize, step: usize },
    WindowSums { length: usize },
    WindowReduce { length: usize, kind: ReduceKind },
    MinimalWindowAtLeast { target: S },
    CountWindowsBelow { target: S },
    LongestUniqueRun,
}

impl<S> WindowQuery<S> {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            WindowQuery::EnumerateWindows { .. } => "enumerate_windows",
            WindowQuery::WindowSums { .. } => "window_sums",
            WindowQuery::WindowReduce { .. } => "window_reduce",
            WindowQuery::MinimalWindowAtLeast { .. } => "minimal_window_at_least",
            WindowQuery::CountWindowsBelow { .. } => "count_windows_below",
            WindowQuery::LongestUniqueRun => "longest_unique_run",
        }
    }
}

/// Result of one [`WindowQuery`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all = "snake_case",
    bound(
        serialize = "T: Serialize, T::Sum: Serialize",
        deserialize = "T: Deserialize<'de>, T::Sum: Deserialize<'de>"
    )
)]
pub enum QueryOutput<T: Accumulate> {
    Windows(Vec<Window>),
    Sums(Vec<T::Sum>),
    Reduced(Vec<WindowResult<WindowValue<T>>>),
    Search(SearchResult),
    Count(usize),
    UniqueRun(UniqueRun),
}

/// Executes a single query against the sequence.
///
/// The unique-run query compares elements through [`Accumulate::unique_key`],
/// so plain float sequences are accepted.
pub fn execute_query<T>(
    sequence: SequenceView<'_, T>,
    query: &WindowQuery<T::Sum>,
    strategy: SearchStrategy,
) -> Result<QueryOutput<T>, WindowError>
where
    T: Accumulate + PartialOrd,
{
    trace!(query = query.name(), len = sequence.len(), "execute_query");
    let output = match query {
        WindowQuery::EnumerateWindows { length, step } => {
            QueryOutput::Windows(enumerate_windows(sequence, *length, *step)?.iter().collect())
        }
        WindowQuery::WindowSums { length } => QueryOutput::Sums(window_sums(sequence, *length)?),
        WindowQuery::WindowReduce { length, kind } => {
            QueryOutput::Reduced(window_reduce(sequence, *length, *kind)?)
        }
        WindowQuery::MinimalWindowAtLeast { target } => {
            QueryOutput::Search(minimal_window_at_least_with(sequence, *target, strategy)?)
        }
        WindowQuery::CountWindowsBelow { target } => {
            QueryOutput::Count(count_windows_below_with(sequence, *target, strategy)?)
        }
        WindowQuery::LongestUniqueRun => {
            let keys: Vec<T::Key> = sequence.iter().map(|&value| value.unique_key()).collect();
            QueryOutput::UniqueRun(longest_unique_run(SequenceView::from(&keys)))
        }
    };
    Ok(output)
}

/// Runs every query against the same sequence, one result per query, in order.
///
/// Queries run on the rayon pool when `config.parallel` is set and the batch
/// holds at least `config.min_parallel_queries` queries. A failing query does
/// not affect the others.
///
/// # Examples
/// ```
/// use window_analytics::{run_batch, BatchConfig, QueryOutput, SequenceView, WindowQuery};
///
/// let data = [2i32, 3, 1, 2, 4, 3];
/// let queries = vec![
///     WindowQuery::MinimalWindowAtLeast { target: 7 },
///     WindowQuery::WindowSums { length: 0 },
/// ];
/// let results = run_batch(SequenceView::from(&data), &queries, &BatchConfig::default());
/// assert!(matches!(results[0], Ok(QueryOutput::Search(_))));
/// assert!(results[1].is_err());
/// ```
pub fn run_batch<T>(
    sequence: SequenceView<'_, T>,
    queries: &[WindowQuery<T::Sum>],
    config: &BatchConfig,
) -> Vec<Result<QueryOutput<T>, WindowError>>
where
    T: Accumulate + PartialOrd + Send + Sync,
    T::Sum: Send + Sync,
{
    let parallel = config.parallel && queries.len() >= config.min_parallel_queries;
    debug!(
        queries = queries.len(),
        len = sequence.len(),
        parallel,
        strategy = ?config.strategy,
        "run_batch: dispatching queries"
    );

    let results: Vec<_> = if parallel {
        queries
            .par_iter()
            .map(|query| execute_query(sequence, query, config.strategy))
            .collect()
    } else {
        queries
            .iter()
            .map(|query| execute_query(sequence, query, config.strategy))
            .collect()
    };

    debug!(
        failed = results.iter().filter(|result| result.is_err()).count(),
        "run_batch: completed"
    );
    results
}
