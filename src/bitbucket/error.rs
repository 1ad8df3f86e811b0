use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("unable to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("invalid proxy {host}:{port}: {source}")]
    Proxy {
        host: String,
        port: u16,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
#[error("unable to decode {shape} from response: {source}")]
pub struct DecodeError {
    shape: &'static str,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    pub fn new(shape: &'static str, source: serde_json::Error) -> Self {
        Self { shape, source }
    }

    /// Name of the type the body was being decoded into.
    pub fn shape(&self) -> &'static str {
        self.shape
    }
}
