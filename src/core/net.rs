// src/core/net.rs
//
// Blocking page fetch. The paginator only sees `PageSource`, so tests can
// feed canned pages without a network.

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::Result;

/// One fetched listing page. Dropped right after extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait PageSource {
    /// GET `url`. A non-2xx status is *not* an error here; only transport failures are.
    fn fetch(&mut self, url: &str) -> Result<FetchedPage>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&mut self, url: &str) -> Result<FetchedPage> {
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        // Decode as UTF-8 whatever the server declares.
        let bytes = resp.bytes()?;
        let body = String::from_utf8_lossy(&bytes).into_owned();
        logd!(url, status, bytes = bytes.len(), "fetched page");
        Ok(FetchedPage { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        assert!(FetchedPage::ok("").is_success());
        assert!(FetchedPage { status: 204, body: s!() }.is_success());
        assert!(!FetchedPage { status: 404, body: s!() }.is_success());
        assert!(!FetchedPage { status: 500, body: s!() }.is_success());
        assert!(!FetchedPage { status: 302, body: s!() }.is_success());
    }
}
