use std::env;
use std::fmt;

pub const V1_API_BASE_URL: &str = "https://bitbucket.org/api/1.0/repositories/";
pub const V2_API_BASE_URL: &str = "https://bitbucket.org/api/2.0/repositories/";

/// Base URLs of the two API versions. Comment listing is only served by the
/// legacy 1.0 API, everything else goes through 2.0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    v1_base_url: String,
    v2_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(V1_API_BASE_URL, V2_API_BASE_URL)
    }
}

impl Endpoints {
    pub fn new(v1_base_url: &str, v2_base_url: &str) -> Self {
        Self {
            v1_base_url: with_trailing_slash(v1_base_url),
            v2_base_url: with_trailing_slash(v2_base_url),
        }
    }

    pub fn from_env() -> Self {
        let v1_base_url =
            env::var("BITBUCKET_V1_BASE_URL").unwrap_or_else(|_| V1_API_BASE_URL.to_string());
        let v2_base_url =
            env::var("BITBUCKET_V2_BASE_URL").unwrap_or_else(|_| V2_API_BASE_URL.to_string());
        Self::new(&v1_base_url, &v2_base_url)
    }

    pub fn v1(&self, owner: &str, repo_name: &str, path: &str) -> String {
        format!("{}{}/{}{}", self.v1_base_url, owner, repo_name, path)
    }

    pub fn v2(&self, owner: &str, repo_name: &str, path: &str) -> String {
        format!("{}{}/{}{}", self.v2_base_url, owner, repo_name, path)
    }

    pub fn v1_base_url(&self) -> &String {
        &self.v1_base_url
    }

    pub fn v2_base_url(&self) -> &String {
        &self.v2_base_url
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    pub fn username(&self) -> &String {
        &self.username
    }

    pub fn password(&self) -> &String {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    owner: String,
    repo_name: String,
    credentials: Credentials,
    status_key: String,
    status_name: String,
}

impl RepositoryConfig {
    pub fn new(
        owner: String,
        repo_name: String,
        credentials: Credentials,
        status_key: String,
        status_name: String,
    ) -> Self {
        Self {
            owner,
            repo_name,
            credentials,
            status_key,
            status_name,
        }
    }

    pub fn from_env() -> Option<Self> {
        let username = required_env("BITBUCKET_USERNAME")?;
        let password = required_env("BITBUCKET_PASSWORD")?;
        let owner = required_env("BITBUCKET_OWNER")?;
        let repo_name = required_env("BITBUCKET_REPOSITORY")?;
        let status_key = required_env("BUILD_STATUS_KEY")?;
        let status_name = required_env("BUILD_STATUS_NAME")?;
        Some(Self::new(
            owner,
            repo_name,
            Credentials::new(username, password),
            status_key,
            status_name,
        ))
    }

    pub fn owner(&self) -> &String {
        &self.owner
    }

    pub fn repo_name(&self) -> &String {
        &self.repo_name
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn status_key(&self) -> &String {
        &self.status_key
    }

    pub fn status_name(&self) -> &String {
        &self.status_name
    }
}

fn required_env(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("[required_env] {} is not set: {}", name, e);
            None
        }
    }
}

/// Outbound proxy handed to the transport by the embedding host.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    host: String,
    port: u16,
    username: Option<String>,
    password: Option<String>,
}

impl ProxyConfig {
    pub fn new(
        host: String,
        port: u16,
        username: Option<String>,
        password: Option<String>,
    ) -> Self {
        Self {
            host,
            port,
            username,
            password,
        }
    }

    pub fn from_env() -> Option<Self> {
        let host = env::var("BITBUCKET_PROXY_HOST").ok()?;
        let port_str = env::var("BITBUCKET_PROXY_PORT").unwrap_or_else(|_| "80".to_string());
        let port = match port_str.trim().parse::<u16>() {
            Ok(port) => port,
            Err(e) => {
                log::error!("[ProxyConfig::from_env] Invalid proxy port {}: {}", port_str, e);
                return None;
            }
        };
        Some(Self::new(
            host,
            port,
            env::var("BITBUCKET_PROXY_USERNAME").ok(),
            env::var("BITBUCKET_PROXY_PASSWORD").ok(),
        ))
    }

    pub fn host(&self) -> &String {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Proxy credentials count only when a non-blank username is given.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref()?;
        if username.trim().is_empty() {
            return None;
        }
        Some((username, self.password.as_deref().unwrap_or("")))
    }
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
