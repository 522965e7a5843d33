//! gh-multi-merge-prs - combine open pull requests into a single PR
//!
//! Selects pull requests matching a search query, drops the ones with
//! failing or pending checks, merges the rest into a combined branch and
//! submits one pull request for the lot.
//!
//! All access to the hosting platform and the local repository goes through
//! the [`platform::HostingService`] and [`vcs::VcsService`] ports, so the
//! workflow can run against the `gh`/`git` adapters or against test doubles.

pub mod combine;
pub mod config;
pub mod error;
pub mod platform;
mod process;
pub mod progress;
pub mod prompt;
pub mod submit;
pub mod types;
pub mod vcs;
pub mod workflow;
