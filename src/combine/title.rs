//! Combined title and branch naming - pure functions

use crate::types::PullRequest;

/// Dependabot-style prefix for version bumps
pub const BUMP_PREFIX: &str = "chore(deps): bump";

/// Renovate-style prefix for dependency updates
pub const UPDATE_PREFIX: &str = "chore(deps): update";

/// Prefix of every combined branch name
pub const COMBINED_BRANCH_PREFIX: &str = "combined-pr-branch";

/// Combine PR titles into a single title
///
/// A single PR keeps its title verbatim. Otherwise the known prefix of the
/// first title (if any) leads, followed by each title with the known
/// prefixes removed, comma separated in input order:
///
/// ```text
/// chore(deps): bump foo from 1 to 2     ─┐
/// chore(deps): bump bar from 3 to 4     ─┴─> chore(deps): bump foo from 1 to 2, bar from 3 to 4
/// ```
pub fn combine_titles(prs: &[PullRequest]) -> String {
    if let [only] = prs {
        return only.title.clone();
    }

    let prefix = prs.first().map_or("", |first| {
        if first.title.starts_with(BUMP_PREFIX) {
            BUMP_PREFIX
        } else if first.title.starts_with(UPDATE_PREFIX) {
            UPDATE_PREFIX
        } else {
            ""
        }
    });

    let remainders: Vec<String> = prs.iter().map(|pr| strip_known_prefixes(&pr.title)).collect();

    format!("{prefix} {}", remainders.join(", ")).trim().to_string()
}

/// Remove every occurrence of the known prefixes, then surrounding whitespace
fn strip_known_prefixes(title: &str) -> String {
    title
        .replace(BUMP_PREFIX, "")
        .replace(UPDATE_PREFIX, "")
        .trim()
        .to_string()
}

/// 32-bit FNV-1a over the UTF-8 bytes of `input`
pub fn fnv1a_32(input: &str) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;

    input.bytes().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(PRIME)
    })
}

/// Deterministic combined branch name for a combined title
///
/// Same title, same branch: re-running with the same selection converges on
/// the same branch.
pub fn combined_branch_name(title: &str) -> String {
    format!("{COMBINED_BRANCH_PREFIX}-{}", fnv1a_32(title))
}
