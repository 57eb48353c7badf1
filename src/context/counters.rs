use std::time::Duration;

/// Counts from the most recent solve.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// The number of molecules in the tube at each stage.
    ///
    /// The first entry is the size of the initial tube, followed by the size after each clause processed.
    pub tube_sizes: Vec<usize>,

    /// The total number of molecules removed by clauses.
    pub molecules_removed: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
