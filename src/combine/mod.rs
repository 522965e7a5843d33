//! Branch combination engine
//!
//! 1. Select - search candidates, narrow interactively, drop failing checks
//! 2. Title - derive the combined title and branch name (pure)
//! 3. Execute - build the combined branch, merging each PR in turn

mod execute;
mod select;
mod title;

pub use execute::{CombineResult, ORIGIN, UPSTREAM, combine};
pub use select::{CheckFilterResult, checks_passing, filter_passing, select_pull_requests};
pub use title::{
    BUMP_PREFIX, COMBINED_BRANCH_PREFIX, UPDATE_PREFIX, combine_titles, combined_branch_name,
    fnv1a_32,
};
