use crate::error::Result;
use crate::git::Repository;
use std::collections::HashMap;
use std::sync::Mutex;

/// A repository interaction recorded by [MockRepository].
///
/// Tests use the call log to assert ordering (create before push) and the
/// absence of calls after a failed precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    FetchTags { remote: String },
    ListTags,
    CreateTag { name: String, message: String },
    PushTag { remote: String, name: String },
}

impl MockCall {
    /// True for calls that would mutate a real repository.
    pub fn is_mutation(&self) -> bool {
        matches!(self, MockCall::CreateTag { .. } | MockCall::PushTag { .. })
    }
}

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    current_branch: String,
    dirty: bool,
    tags: Mutex<Vec<String>>,
    branch_commits: HashMap<String, String>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockRepository {
    /// Create a new mock repository on branch "main" with a clean tree
    pub fn new() -> Self {
        MockRepository {
            current_branch: "main".to_string(),
            dirty: false,
            tags: Mutex::new(Vec::new()),
            branch_commits: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Set the currently checked-out branch
    pub fn set_current_branch(&mut self, branch: impl Into<String>) {
        self.current_branch = branch.into();
    }

    /// Mark the working tree dirty or clean
    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Add an existing tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.lock().unwrap().push(name.into());
    }

    /// Map a refname (e.g., "main" or "origin/main") to a commit id
    pub fn set_branch_commit(&mut self, refname: impl Into<String>, commit: impl Into<String>) {
        self.branch_commits.insert(refname.into(), commit.into());
    }

    /// Snapshot of every recorded call, in invocation order
    pub fn recorded_calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Only the calls that would mutate a real repository
    pub fn mutating_calls(&self) -> Vec<MockCall> {
        self.recorded_calls()
            .into_iter()
            .filter(MockCall::is_mutation)
            .collect()
    }

    /// Current tag list, including tags created through the trait
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.lock().unwrap().clone()
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<String> {
        Ok(self.current_branch.clone())
    }

    fn has_uncommitted_changes(&self) -> Result<bool> {
        Ok(self.dirty)
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        self.record(MockCall::FetchTags {
            remote: remote.to_string(),
        });
        Ok(())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        self.record(MockCall::ListTags);
        let mut tags = self.tags.lock().unwrap().clone();
        tags.sort();
        Ok(tags)
    }

    fn branch_commit(&self, refname: &str) -> Result<Option<String>> {
        Ok(self.branch_commits.get(refname).cloned())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        self.record(MockCall::CreateTag {
            name: name.to_string(),
            message: message.to_string(),
        });
        self.tags.lock().unwrap().push(name.to_string());
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.record(MockCall::PushTag {
            remote: remote.to_string(),
            name: name.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_defaults() {
        let repo = MockRepository::new();
        assert_eq!(repo.current_branch().unwrap(), "main");
        assert!(!repo.has_uncommitted_changes().unwrap());
        assert!(repo.list_tags().unwrap().is_empty());
    }

    #[test]
    fn test_mock_repository_branch_commits() {
        let mut repo = MockRepository::new();
        repo.set_branch_commit("main", "abc123");

        assert_eq!(repo.branch_commit("main").unwrap(), Some("abc123".into()));
        assert_eq!(repo.branch_commit("origin/main").unwrap(), None);
    }

    #[test]
    fn test_mock_repository_list_tags_sorted() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.2.0");
        repo.add_tag("v1.0.0");

        assert_eq!(repo.list_tags().unwrap(), vec!["v1.0.0", "v1.2.0"]);
    }

    #[test]
    fn test_mock_repository_records_calls_in_order() {
        let repo = MockRepository::new();
        repo.fetch_tags("origin").unwrap();
        repo.create_annotated_tag("v1.0.0", "Release v1.0.0").unwrap();
        repo.push_tag("origin", "v1.0.0").unwrap();

        let calls = repo.recorded_calls();
        assert_eq!(calls.len(), 3);
        assert!(matches!(calls[0], MockCall::FetchTags { .. }));
        assert!(matches!(calls[1], MockCall::CreateTag { .. }));
        assert!(matches!(calls[2], MockCall::PushTag { .. }));
    }

    #[test]
    fn test_mock_repository_mutating_calls_filter() {
        let repo = MockRepository::new();
        repo.fetch_tags("origin").unwrap();
        repo.list_tags().unwrap();

        assert!(repo.mutating_calls().is_empty());

        repo.create_annotated_tag("v1.0.0", "Release v1.0.0").unwrap();
        assert_eq!(repo.mutating_calls().len(), 1);
    }

    #[test]
    fn test_mock_repository_created_tag_becomes_visible() {
        let repo = MockRepository::new();
        repo.create_annotated_tag("v1.0.0", "Release v1.0.0").unwrap();
        assert!(repo.tag_names().contains(&"v1.0.0".to_string()));
    }
}
