use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::BitbucketUser;

// shape of the 1.0 pull request comments endpoint
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Comment {
    #[serde(rename = "comment_id")]
    id: u64,
    #[serde(default)]
    pull_request_id: Option<u64>,
    #[serde(default)]
    author_info: Option<BitbucketUser>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    utc_last_updated: Option<String>,
}

impl Comment {
    pub fn new(
        id: u64,
        pull_request_id: Option<u64>,
        author_info: Option<BitbucketUser>,
        content: String,
        utc_last_updated: Option<String>,
    ) -> Self {
        Self {
            id,
            pull_request_id,
            author_info,
            content: Some(content),
            utc_last_updated,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn pull_request_id(&self) -> Option<u64> {
        self.pull_request_id
    }

    pub fn author(&self) -> Option<&BitbucketUser> {
        self.author_info.as_ref()
    }

    /// Deleted comments come back with a null body, read as empty.
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    pub fn utc_last_updated(&self) -> Option<&str> {
        self.utc_last_updated.as_deref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        let timestamp_str = self.utc_last_updated.as_deref()?;
        parse_timestamp(timestamp_str)
    }
}

fn parse_timestamp(timestamp_str: &str) -> Option<DateTime<Utc>> {
    // 1.0 uses "2014-06-26 04:32:49+00:00", fall back to RFC 3339 and naive UTC
    if let Ok(datetime) = DateTime::parse_from_str(timestamp_str, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(datetime.with_timezone(&Utc));
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(timestamp_str) {
        return Some(datetime.with_timezone(&Utc));
    }
    match NaiveDateTime::parse_from_str(timestamp_str, "%Y-%m-%d %H:%M:%S") {
        Ok(naive) => Some(naive.and_utc()),
        Err(e) => {
            log::debug!("[parse_timestamp] Unable to parse {}: {:?}", timestamp_str, e);
            None
        }
    }
}
