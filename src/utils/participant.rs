use serde::{Deserialize, Serialize};

use super::user::BitbucketUser;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Participant {
    #[serde(default)]
    user: Option<BitbucketUser>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    approved: bool,
}

impl Participant {
    pub fn new(user: Option<BitbucketUser>, role: Option<String>, approved: bool) -> Self {
        Self { user, role, approved }
    }

    pub fn user(&self) -> Option<&BitbucketUser> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn approved(&self) -> bool {
        self.approved
    }
}
