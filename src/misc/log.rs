/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide a trace of a solve, from the encodings drawn to the molecules kept or removed by each clause.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [encoding generation](crate::encoding)
    pub const ENCODING: &str = "encoding";

    /// Logs related to [tubes](crate::structures::tube)
    pub const TUBE: &str = "tube";

    /// Logs related to [clause filtering](crate::procedures::clause_filter)
    pub const FILTER: &str = "filter";

    /// Logs related to the [solve procedure](crate::procedures::solve)
    pub const SOLVE: &str = "solve";

    /// Logs related to [PCR simulation](crate::procedures::pcr)
    pub const PCR: &str = "pcr";

    /// Logs related to [DIMACS parsing](crate::builder::dimacs)
    pub const PARSE: &str = "parse";
}
