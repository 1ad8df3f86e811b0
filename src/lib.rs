//! Client for the Bitbucket Cloud REST API used by a pull request builder:
//! listing pull requests and their comments, reporting commit build status
//! and toggling approval on behalf of the build user.

pub mod bitbucket;
pub mod logger;
pub mod utils;

pub use bitbucket::client::RepositoryClient;
pub use bitbucket::config::{Credentials, Endpoints, ProxyConfig, RepositoryConfig};
pub use bitbucket::error::{DecodeError, TransportError};
pub use bitbucket::transport::{HttpTransport, ReqwestTransport};
pub use utils::build_state::BuildState;
pub use utils::comment::Comment;
pub use utils::participant::Participant;
pub use utils::pullrequest::PullRequest;
