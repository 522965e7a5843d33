//! Combined PR body rendering - pure

use crate::types::MergedPullRequest;
use std::fmt::Write as _;

/// Render the body of the combined PR
///
/// ```text
/// This PR was created by gh-multi-merge-prs, running `<invocation>`.
/// It combines the following PRs:
///
/// - <summary>
///
/// ## Related Issues:
///
/// - Closes #<n>
/// ```
pub fn render_body(invocation: &str, merged: &[MergedPullRequest]) -> String {
    let mut body = format!(
        "This PR was created by {}, running `{invocation}`.\nIt combines the following PRs:\n\n",
        env!("CARGO_PKG_NAME")
    );

    for item in merged {
        let _ = writeln!(body, "- {}", item.summary);
    }

    body.push_str("\n## Related Issues:\n\n");
    for item in merged {
        let _ = writeln!(body, "- Closes #{}", item.pr.number);
    }

    body
}
