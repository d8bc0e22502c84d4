pub mod sequence;
pub mod window;
pub mod analytics;
pub mod threshold;
pub mod unique_run;
pub mod config;
pub mod batch;


pub use sequence::SequenceView;
pub use window::{SearchResult, UniqueRun, Window, WindowError, WindowResult};
pub use analytics::{
    enumerate_windows,
    rolling_averages,
    window_all_unique_flags,
    window_reduce,
    window_sums,
    window_sums_naive,
    accumulate::Accumulate,
    primitives::{
        reduce_window, window_all_unique, window_all_unique_numeric, window_average, window_max,
        window_min, window_sum, ReduceKind, WindowValue,
    },
    rolling::RollingSum,
    windows::{FixedWindows, WindowIter},
};
pub use threshold::{
    count_windows_below,
    count_windows_below_naive,
    count_windows_below_two_pointer,
    count_windows_below_with,
    minimal_window_at_least,
    minimal_window_at_least_naive,
    minimal_window_at_least_two_pointer,
    minimal_window_at_least_with,
};
pub use unique_run::{longest_unique_run, longest_unique_run_naive, longest_unique_run_str};
pub use config::{BatchConfig, SearchStrategy};
pub use batch::{execute_query, run_batch, QueryOutput, WindowQuery};
