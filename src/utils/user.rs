use serde::{Deserialize, Serialize};

// 2.0 payloads carry nickname/uuid/account_id, 1.0 payloads carry username
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitbucketUser {
    #[serde(default)]
    account_id: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    uuid: Option<String>,
}

impl BitbucketUser {
    pub fn new(display_name: String, nickname: String) -> Self {
        Self {
            display_name: Some(display_name),
            nickname: Some(nickname),
            ..Default::default()
        }
    }

    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    /// Login handle, whichever API version the user came from.
    pub fn handle(&self) -> Option<&str> {
        self.nickname.as_deref().or(self.username.as_deref())
    }
}
