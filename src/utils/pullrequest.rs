use serde::{Deserialize, Serialize};

use super::user::BitbucketUser;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PullRequest {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: Option<BitbucketUser>,
    source: Revision,
    destination: Revision,
}

/// One side of a pull request: branch, tip commit and owning repository.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Revision {
    #[serde(default)]
    branch: Option<Branch>,
    #[serde(default)]
    commit: Option<Commit>,
    #[serde(default)]
    repository: Option<RepositoryRef>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Branch {
    name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Commit {
    hash: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    full_name: String,
}

impl Revision {
    pub fn new(branch: &str, commit: &str, repository: &str) -> Self {
        Self {
            branch: Some(Branch { name: branch.to_string() }),
            commit: Some(Commit { hash: commit.to_string() }),
            repository: Some(RepositoryRef { full_name: repository.to_string() }),
        }
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_ref().map(|b| b.name.as_str())
    }

    pub fn commit(&self) -> Option<&str> {
        self.commit.as_ref().map(|c| c.hash.as_str())
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository.as_ref().map(|r| r.full_name.as_str())
    }
}

impl PullRequest {
    pub fn new(
        id: u64,
        title: String,
        author: Option<BitbucketUser>,
        source: Revision,
        destination: Revision,
    ) -> Self {
        Self {
            id,
            title,
            author,
            source,
            destination,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &String {
        &self.title
    }

    pub fn author(&self) -> Option<&BitbucketUser> {
        self.author.as_ref()
    }

    pub fn source(&self) -> &Revision {
        &self.source
    }

    pub fn destination(&self) -> &Revision {
        &self.destination
    }

    pub fn source_branch(&self) -> Option<&str> {
        self.source.branch()
    }

    pub fn source_commit(&self) -> Option<&str> {
        self.source.commit()
    }

    pub fn destination_branch(&self) -> Option<&str> {
        self.destination.branch()
    }

    pub fn destination_commit(&self) -> Option<&str> {
        self.destination.commit()
    }
}

/// First page of the 2.0 pull request collection. Later pages are not followed.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PullRequestPage {
    #[serde(default)]
    values: Vec<PullRequest>,
    #[serde(default)]
    next: Option<String>,
}

impl PullRequestPage {
    pub fn values(&self) -> &Vec<PullRequest> {
        &self.values
    }

    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn into_values(self) -> Vec<PullRequest> {
        self.values
    }
}
