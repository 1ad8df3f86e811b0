use crate::utils::build_state::BuildState;
use crate::utils::comment::Comment;
use crate::utils::participant::Participant;
use crate::utils::pullrequest::{PullRequest, PullRequestPage};

use super::codec::{decode, decode_list};
use super::config::{Endpoints, ProxyConfig, RepositoryConfig};
use super::error::TransportError;
use super::transport::{HttpTransport, ReqwestTransport};

/// Client bound to a single repository.
///
/// Every call is one best-effort round trip: failures are logged and come
/// back as an empty list, `false` or `None`, never as an error.
pub struct RepositoryClient<T: HttpTransport = ReqwestTransport> {
    config: RepositoryConfig,
    endpoints: Endpoints,
    transport: T,
}

impl RepositoryClient<ReqwestTransport> {
    pub fn new(
        config: RepositoryConfig,
        endpoints: Endpoints,
        proxy: Option<ProxyConfig>,
    ) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(config.credentials().clone(), proxy.as_ref())?;
        Ok(Self::with_transport(config, endpoints, transport))
    }
}

impl<T: HttpTransport> RepositoryClient<T> {
    pub fn with_transport(config: RepositoryConfig, endpoints: Endpoints, transport: T) -> Self {
        Self {
            config,
            endpoints,
            transport,
        }
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn list_pull_requests(&self) -> Vec<PullRequest> {
        let url = self.v2("/pullrequests/");
        let body = match self.transport.get(&url) {
            Ok(body) => body,
            Err(e) => {
                log::warn!("[list_pull_requests] Unable to get pull requests: {}", e);
                return Vec::new();
            }
        };
        match decode::<PullRequestPage>(&body) {
            Ok(page) => page.into_values(),
            Err(e) => {
                log::warn!(
                    "[list_pull_requests] Invalid pull request response from {}: {}",
                    url,
                    e
                );
                Vec::new()
            }
        }
    }

    pub fn list_pull_request_comments(&self, pull_request_id: &str) -> Vec<Comment> {
        let url = self.v1(&format!("/pullrequests/{}/comments", pull_request_id));
        let body = match self.transport.get(&url) {
            Ok(body) => body,
            Err(e) => {
                log::warn!("[list_pull_request_comments] Unable to get comments: {}", e);
                return Vec::new();
            }
        };
        match decode_list::<Comment>(&body) {
            Ok(comments) => comments,
            Err(e) => {
                log::warn!(
                    "[list_pull_request_comments] Invalid comments response from {}: {}",
                    url,
                    e
                );
                Vec::new()
            }
        }
    }

    /// Probes the raw body for a `"state"` key rather than decoding it, so
    /// any error page without that token reads as "no status yet".
    pub fn has_build_status(&self, revision: &str) -> bool {
        let path = format!("/commit/{}/statuses/build/{}", revision, self.config.status_key());
        let url = self.v2(&path);
        match self.transport.get(&url) {
            Ok(body) => body.contains("\"state\""),
            Err(e) => {
                log::warn!("[has_build_status] Unable to query build status: {}", e);
                false
            }
        }
    }

    pub fn set_build_status(
        &self,
        revision: &str,
        state: BuildState,
        build_url: &str,
        description: &str,
    ) {
        let url = self.v2(&format!("/commit/{}/statuses/build", revision));
        let state_str = state.to_string();
        let fields = [
            ("description", description),
            ("key", self.config.status_key().as_str()),
            ("name", self.config.status_name().as_str()),
            ("state", state_str.as_str()),
            ("url", build_url),
        ];
        log::info!("[set_build_status] POST state {} to {}", state, url);
        if let Err(e) = self.transport.post_form(&url, &fields) {
            log::warn!("[set_build_status] Unable to post build status: {}", e);
        }
    }

    pub fn delete_pull_request_approval(&self, pull_request_id: &str) {
        let url = self.v2(&format!("/pullrequests/{}/approve", pull_request_id));
        if let Err(e) = self.transport.delete(&url) {
            log::warn!("[delete_pull_request_approval] Unable to delete approval: {}", e);
        }
    }

    pub fn post_pull_request_approval(&self, pull_request_id: &str) -> Option<Participant> {
        let url = self.v2(&format!("/pullrequests/{}/approve", pull_request_id));
        let body = match self.transport.post_form(&url, &[]) {
            Ok(body) => body,
            Err(e) => {
                log::warn!("[post_pull_request_approval] Unable to post approval: {}", e);
                return None;
            }
        };
        match decode::<Participant>(&body) {
            Ok(participant) => Some(participant),
            Err(e) => {
                log::warn!(
                    "[post_pull_request_approval] Invalid approval response from {}: {}",
                    url,
                    e
                );
                None
            }
        }
    }

    fn v1(&self, path: &str) -> String {
        self.endpoints.v1(self.config.owner(), self.config.repo_name(), path)
    }

    fn v2(&self, path: &str) -> String {
        self.endpoints.v2(self.config.owner(), self.config.repo_name(), path)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::bitbucket::config::Credentials;
    use crate::utils::user::BitbucketUser;

    #[derive(Debug, Clone, PartialEq)]
    struct RecordedRequest {
        method: &'static str,
        url: String,
        fields: Vec<(String, String)>,
    }

    struct RecordingTransport {
        body: String,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl RecordingTransport {
        fn responding(body: &str) -> Self {
            Self {
                body: body.to_string(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn record(
            &self,
            method: &'static str,
            url: &str,
            fields: &[(&str, &str)],
        ) -> Result<String, TransportError> {
            let fields = fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            self.requests.lock().unwrap().push(RecordedRequest {
                method,
                url: url.to_string(),
                fields,
            });
            Ok(self.body.clone())
        }

        fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl HttpTransport for RecordingTransport {
        fn get(&self, url: &str) -> Result<String, TransportError> {
            self.record("GET", url, &[])
        }

        fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<String, TransportError> {
            self.record("POST", url, fields)
        }

        fn delete(&self, url: &str) -> Result<String, TransportError> {
            self.record("DELETE", url, &[])
        }
    }

    fn client(body: &str) -> RepositoryClient<RecordingTransport> {
        let config = RepositoryConfig::new(
            "acme".to_string(),
            "widgets".to_string(),
            Credentials::new("builder".to_string(), "secret".to_string()),
            "jenkins-key".to_string(),
            "Jenkins".to_string(),
        );
        let transport = RecordingTransport::responding(body);
        RepositoryClient::with_transport(config, Endpoints::default(), transport)
    }

    #[test]
    fn test_set_build_status_posts_all_fields_once() {
        let client = client("");
        client.set_build_status("abc123", BuildState::Successful, "http://ci/1", "build ok");

        let requests = client.transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(
            requests[0].url,
            "https://bitbucket.org/api/2.0/repositories/acme/widgets/commit/abc123/statuses/build"
        );
        let expected: Vec<(String, String)> = [
            ("description", "build ok"),
            ("key", "jenkins-key"),
            ("name", "Jenkins"),
            ("state", "SUCCESSFUL"),
            ("url", "http://ci/1"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(requests[0].fields, expected);
    }

    #[test]
    fn test_list_pull_requests_keeps_response_order() {
        let body = r#"{"values": [
            {"id": 5, "title": "five", "source": {}, "destination": {}},
            {"id": 2, "title": "two", "source": {}, "destination": {}},
            {"id": 9, "title": "nine", "source": {}, "destination": {}}
        ], "next": "https://bitbucket.org/api/2.0/repositories/acme/widgets/pullrequests/?page=2"
        }"#;
        let client = client(body);
        let ids: Vec<u64> = client.list_pull_requests().iter().map(|pr| pr.id()).collect();
        assert_eq!(ids, vec![5, 2, 9]);
        // only the first page is read
        assert_eq!(client.transport.requests().len(), 1);
    }

    #[test]
    fn test_list_pull_requests_bad_body_is_empty() {
        let client = client("<html>Service Unavailable</html>");
        assert!(client.list_pull_requests().is_empty());
    }

    #[test]
    fn test_comments_use_legacy_endpoint() {
        let client = client(r#"[{"comment_id": 1, "content": "test this please"}]"#);
        let comments = client.list_pull_request_comments("42");
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].content(), "test this please");
        assert_eq!(
            client.transport.requests()[0].url,
            "https://bitbucket.org/api/1.0/repositories/acme/widgets/pullrequests/42/comments"
        );
    }

    #[test]
    fn test_comments_error_object_is_empty() {
        let client = client(r#"{"error": {"message": "Pull request not found"}}"#);
        assert!(client.list_pull_request_comments("42").is_empty());
    }

    #[test]
    fn test_has_build_status_probes_for_state_key() {
        let client_with_status = client(r#"{"key": "jenkins-key", "state": "INPROGRESS"}"#);
        assert!(client_with_status.has_build_status("abc123"));
        assert_eq!(
            client_with_status.transport.requests()[0].url,
            "https://bitbucket.org/api/2.0/repositories/acme/widgets/commit/abc123/\
             statuses/build/jenkins-key"
        );

        let not_found = client(r#"{"type": "error", "error": {"message": "Not found"}}"#);
        assert!(!not_found.has_build_status("abc123"));
        assert!(!client("").has_build_status("abc123"));
        // bare word without quotes does not count
        assert!(!client("state unknown").has_build_status("abc123"));
    }

    #[test]
    fn test_approval_round_trip() {
        let client = client(
            r#"{"approved": true, "role": "PARTICIPANT",
                "user": {"display_name": "Build Bot", "nickname": "builder"}}"#,
        );
        let participant = client.post_pull_request_approval("7");
        let expected = Participant::new(
            Some(BitbucketUser::new("Build Bot".to_string(), "builder".to_string())),
            Some("PARTICIPANT".to_string()),
            true,
        );
        assert_eq!(participant, Some(expected));

        client.delete_pull_request_approval("7");
        let requests = client.transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, "POST");
        assert!(requests[0].fields.is_empty());
        assert_eq!(requests[1].method, "DELETE");
        assert_eq!(requests[0].url, requests[1].url);
        assert!(requests[1].url.ends_with("/acme/widgets/pullrequests/7/approve"));
    }

    #[test]
    fn test_post_approval_undecodable_is_none() {
        let client = client("");
        assert_eq!(client.post_pull_request_approval("7"), None);
    }
}
