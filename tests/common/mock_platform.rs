//! Mock hosting service for testing

use async_trait::async_trait;
use multi_merge_prs::error::{Error, Result};
use multi_merge_prs::platform::HostingService;
use multi_merge_prs::types::{CreatePrRequest, PullRequest};
use std::collections::HashMap;
use std::sync::Mutex;

/// Passing `gh pr checks` report
pub const PASSING_CHECKS: &str = "build\tpass\t1m2s\thttps://ci/1\nlint\tpass\t8s\thttps://ci/2\n";

/// Failing `gh pr checks` report
pub const FAILING_CHECKS: &str = "build\tfail\t1m2s\thttps://ci/1\nlint\tpass\t8s\thttps://ci/2\n";

/// Pending `gh pr checks` report
pub const PENDING_CHECKS: &str = "build\tpending\t0\thttps://ci/1\n";

fn gh_error(msg: &str) -> Error {
    Error::Command {
        program: "gh".to_string(),
        args: Vec::new(),
        message: msg.to_string(),
    }
}

/// Simple mock hosting service
///
/// Manually implements `HostingService` with call tracking, configurable
/// responses and error injection. PRs returned by the search are passing
/// checks unless configured otherwise.
pub struct MockHostingService {
    search_response: Mutex<Vec<PullRequest>>,
    checks_responses: Mutex<HashMap<u64, String>>,
    default_branch: Mutex<String>,
    login: Mutex<String>,
    fork_owner: Mutex<String>,
    repository: Mutex<String>,
    // Call tracking
    search_calls: Mutex<Vec<(String, usize)>>,
    checks_calls: Mutex<Vec<u64>>,
    checkout_calls: Mutex<Vec<u64>>,
    view_calls: Mutex<Vec<u64>>,
    create_pr_calls: Mutex<Vec<CreatePrRequest>>,
    // Error injection
    error_on_search: Mutex<Option<String>>,
    error_on_checks: Mutex<HashMap<u64, String>>,
    error_on_checkout: Mutex<Option<String>>,
    error_on_view: Mutex<Option<String>>,
    error_on_create_pr: Mutex<Option<String>>,
    error_on_default_branch: Mutex<Option<String>>,
    error_on_login: Mutex<Option<String>>,
    error_on_fork_owner: Mutex<Option<String>>,
    error_on_repository: Mutex<Option<String>>,
}

impl MockHostingService {
    /// Create a mock whose search returns `prs`
    pub fn with_prs(prs: Vec<PullRequest>) -> Self {
        Self {
            search_response: Mutex::new(prs),
            checks_responses: Mutex::new(HashMap::new()),
            default_branch: Mutex::new("main".to_string()),
            login: Mutex::new("octocat".to_string()),
            fork_owner: Mutex::new("octocat".to_string()),
            repository: Mutex::new("test/repo".to_string()),
            search_calls: Mutex::new(Vec::new()),
            checks_calls: Mutex::new(Vec::new()),
            checkout_calls: Mutex::new(Vec::new()),
            view_calls: Mutex::new(Vec::new()),
            create_pr_calls: Mutex::new(Vec::new()),
            error_on_search: Mutex::new(None),
            error_on_checks: Mutex::new(HashMap::new()),
            error_on_checkout: Mutex::new(None),
            error_on_view: Mutex::new(None),
            error_on_create_pr: Mutex::new(None),
            error_on_default_branch: Mutex::new(None),
            error_on_login: Mutex::new(None),
            error_on_fork_owner: Mutex::new(None),
            error_on_repository: Mutex::new(None),
        }
    }

    // === Response setup ===

    /// Set the `gh pr checks` report for a PR
    pub fn set_checks(&self, pr_number: u64, report: &str) {
        self.checks_responses
            .lock()
            .unwrap()
            .insert(pr_number, report.to_string());
    }

    /// Set the default branch name
    pub fn set_default_branch(&self, name: &str) {
        *self.default_branch.lock().unwrap() = name.to_string();
    }

    /// Set the current user login
    pub fn set_login(&self, login: &str) {
        *self.login.lock().unwrap() = login.to_string();
    }

    /// Set the repository owner
    pub fn set_fork_owner(&self, owner: &str) {
        *self.fork_owner.lock().unwrap() = owner.to_string();
    }

    // === Error injection ===

    /// Make `search_pull_requests` fail
    pub fn fail_search(&self, msg: &str) {
        *self.error_on_search.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `pr_checks` fail for one PR
    pub fn fail_checks(&self, pr_number: u64, msg: &str) {
        self.error_on_checks
            .lock()
            .unwrap()
            .insert(pr_number, msg.to_string());
    }

    /// Make `checkout_pr` fail
    pub fn fail_checkout(&self, msg: &str) {
        *self.error_on_checkout.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `view_pr_summary` fail
    pub fn fail_view(&self, msg: &str) {
        *self.error_on_view.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_pr` fail
    pub fn fail_create_pr(&self, msg: &str) {
        *self.error_on_create_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `default_branch` fail
    pub fn fail_default_branch(&self, msg: &str) {
        *self.error_on_default_branch.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `current_user_login` fail
    pub fn fail_login(&self, msg: &str) {
        *self.error_on_login.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `fork_owner` fail
    pub fn fail_fork_owner(&self, msg: &str) {
        *self.error_on_fork_owner.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `repository` fail
    pub fn fail_repository(&self, msg: &str) {
        *self.error_on_repository.lock().unwrap() = Some(msg.to_string());
    }

    // === Call inspection ===

    /// Recorded `(query, limit)` search calls
    pub fn get_search_calls(&self) -> Vec<(String, usize)> {
        self.search_calls.lock().unwrap().clone()
    }

    /// PR numbers whose checks were queried
    pub fn get_checks_calls(&self) -> Vec<u64> {
        self.checks_calls.lock().unwrap().clone()
    }

    /// PR numbers checked out
    pub fn get_checkout_calls(&self) -> Vec<u64> {
        self.checkout_calls.lock().unwrap().clone()
    }

    /// PR numbers viewed
    pub fn get_view_calls(&self) -> Vec<u64> {
        self.view_calls.lock().unwrap().clone()
    }

    /// Recorded create requests
    pub fn get_create_pr_calls(&self) -> Vec<CreatePrRequest> {
        self.create_pr_calls.lock().unwrap().clone()
    }

    /// Assert that no PR was created
    pub fn assert_create_pr_not_called(&self) {
        let calls = self.get_create_pr_calls();
        assert!(calls.is_empty(), "Expected no create_pr calls, got: {calls:?}");
    }

    /// The single create request, panicking unless exactly one was made
    pub fn single_create_pr_call(&self) -> CreatePrRequest {
        let calls = self.get_create_pr_calls();
        assert_eq!(calls.len(), 1, "Expected one create_pr call, got: {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl HostingService for MockHostingService {
    async fn search_pull_requests(&self, query: &str, limit: usize) -> Result<Vec<PullRequest>> {
        self.search_calls
            .lock()
            .unwrap()
            .push((query.to_string(), limit));
        if let Some(msg) = self.error_on_search.lock().unwrap().as_ref() {
            return Err(gh_error(msg));
        }
        let prs = self.search_response.lock().unwrap();
        Ok(prs.iter().take(limit).cloned().collect())
    }

    async fn pr_checks(&self, pr_number: u64) -> Result<String> {
        self.checks_calls.lock().unwrap().push(pr_number);
        if let Some(msg) = self.error_on_checks.lock().unwrap().get(&pr_number) {
            return Err(gh_error(msg));
        }
        Ok(self
            .checks_responses
            .lock()
            .unwrap()
            .get(&pr_number)
            .cloned()
            .unwrap_or_else(|| PASSING_CHECKS.to_string()))
    }

    async fn checkout_pr(&self, pr_number: u64) -> Result<()> {
        self.checkout_calls.lock().unwrap().push(pr_number);
        if let Some(msg) = self.error_on_checkout.lock().unwrap().as_ref() {
            return Err(gh_error(msg));
        }
        Ok(())
    }

    async fn view_pr_summary(&self, pr_number: u64) -> Result<String> {
        self.view_calls.lock().unwrap().push(pr_number);
        if let Some(msg) = self.error_on_view.lock().unwrap().as_ref() {
            return Err(gh_error(msg));
        }
        let title = self
            .search_response
            .lock()
            .unwrap()
            .iter()
            .find(|pr| pr.number == pr_number)
            .map(|pr| pr.title.clone())
            .unwrap_or_default();
        Ok(format!("{title} (#{pr_number}) @dependabot"))
    }

    async fn create_pr(&self, request: &CreatePrRequest) -> Result<()> {
        self.create_pr_calls.lock().unwrap().push(request.clone());
        if let Some(msg) = self.error_on_create_pr.lock().unwrap().as_ref() {
            return Err(gh_error(msg));
        }
        Ok(())
    }

    async fn default_branch(&self) -> Result<String> {
        if let Some(msg) = self.error_on_default_branch.lock().unwrap().as_ref() {
            return Err(gh_error(msg));
        }
        Ok(self.default_branch.lock().unwrap().clone())
    }

    async fn current_user_login(&self) -> Result<String> {
        if let Some(msg) = self.error_on_login.lock().unwrap().as_ref() {
            return Err(gh_error(msg));
        }
        Ok(self.login.lock().unwrap().clone())
    }

    async fn repository(&self) -> Result<String> {
        if let Some(msg) = self.error_on_repository.lock().unwrap().as_ref() {
            return Err(gh_error(msg));
        }
        Ok(self.repository.lock().unwrap().clone())
    }

    async fn fork_owner(&self) -> Result<String> {
        if let Some(msg) = self.error_on_fork_owner.lock().unwrap().as_ref() {
            return Err(gh_error(msg));
        }
        Ok(self.fork_owner.lock().unwrap().clone())
    }
}
