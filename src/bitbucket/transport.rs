use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Proxy;

use super::config::{Credentials, ProxyConfig};
use super::error::TransportError;

/// One blocking HTTP round trip per call. Implementations return the body
/// text whatever the status code, so a 404 page still comes back as `Ok`.
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &str) -> Result<String, TransportError>;

    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<String, TransportError>;

    fn delete(&self, url: &str) -> Result<String, TransportError>;
}

pub struct ReqwestTransport {
    client: Client,
    credentials: Credentials,
}

impl ReqwestTransport {
    pub fn new(
        credentials: Credentials,
        proxy: Option<&ProxyConfig>,
    ) -> Result<Self, TransportError> {
        let builder = match proxy {
            Some(proxy_config) => {
                log::info!(
                    "[ReqwestTransport::new] Using proxy: {}:{}",
                    proxy_config.host(),
                    proxy_config.port()
                );
                Client::builder().proxy(build_proxy(proxy_config)?)
            }
            // only the injected proxy is honoured, not HTTP_PROXY and friends
            None => Client::builder().no_proxy(),
        };
        let client = builder.build().map_err(TransportError::Client)?;
        Ok(Self { client, credentials })
    }

    fn send(&self, request: RequestBuilder, url: &str) -> Result<String, TransportError> {
        let response = request
            .basic_auth(self.credentials.username(), Some(self.credentials.password()))
            .send()
            .map_err(|source| TransportError::Request { url: url.to_string(), source })?;
        let status = response.status();
        if !status.is_success() {
            log::debug!("[send] {} responded with status {}", url, status);
        }
        response
            .text()
            .map_err(|source| TransportError::Request { url: url.to_string(), source })
    }
}

fn build_proxy(proxy_config: &ProxyConfig) -> Result<Proxy, TransportError> {
    let into_err = |source| TransportError::Proxy {
        host: proxy_config.host().to_owned(),
        port: proxy_config.port(),
        source,
    };
    let mut proxy = Proxy::all(proxy_config.url()).map_err(into_err)?;
    if let Some((username, password)) = proxy_config.credentials() {
        log::info!("[build_proxy] Using proxy authentication (user={})", username);
        proxy = proxy.basic_auth(username, password);
    }
    Ok(proxy)
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        log::debug!("[get] GET {}", url);
        self.send(self.client.get(url), url)
    }

    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<String, TransportError> {
        log::debug!("[post_form] POST {}", url);
        self.send(self.client.post(url).form(fields), url)
    }

    fn delete(&self, url: &str) -> Result<String, TransportError> {
        log::debug!("[delete] DELETE {}", url);
        self.send(self.client.delete(url), url)
    }
}
