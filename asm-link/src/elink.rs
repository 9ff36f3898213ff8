//! E-utilities elink transport
//!
//! Thin wrapper around the NCBI elink endpoint, requesting the
//! `assembly_nuccore_refseq` links of one Assembly ID at a time with
//! `retmode=json`. The lookup sits behind the [`LinkSource`] trait so
//! the resolver core can be driven by a scripted fake in tests.

use anyhow::{bail, Result};
use serde::Deserialize;
use std::time::Duration;

use config::{ELINK_DB, ELINK_DBFROM, ELINK_LINKNAME, EUTILS_ELINK_URL};

const CONNECT_TIMEOUT_SECS: u64 = 10;
const READ_TIMEOUT_SECS: u64 = 60;

/// One elink lookup: Assembly ID in, parsed linkset response out.
pub trait LinkSource {
    fn elink(&self, ass_id: &str) -> Result<ElinkResponse>;
}

#[derive(Debug, Default, Deserialize)]
pub struct ElinkResponse {
    #[serde(default)]
    pub linksets: Vec<LinkSet>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LinkSet {
    #[serde(rename = "ERROR", default)]
    pub error: Vec<String>,
    #[serde(default)]
    pub linksetdbs: Vec<LinkSetDb>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LinkSetDb {
    #[serde(default)]
    pub dbto: String,
    #[serde(default)]
    pub linkname: String,
    #[serde(default)]
    pub links: Vec<String>,
}

impl ElinkResponse {
    /// Server-side errors reported inside the first linkset.
    pub fn server_errors(&self) -> &[String] {
        self.linksets
            .first()
            .map(|ls| ls.error.as_slice())
            .unwrap_or_default()
    }

    /// Linked identifiers of the first linkset db; empty when the
    /// assembly has no refseq links.
    pub fn links(&self) -> Vec<String> {
        self.linksets
            .first()
            .and_then(|ls| ls.linksetdbs.first())
            .map(|db| db.links.clone())
            .unwrap_or_default()
    }
}

/// Blocking reqwest client against the live E-utilities endpoint.
pub struct EutilsClient {
    client: reqwest::blocking::Client,
}

impl EutilsClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .user_agent(concat!("asmtools/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

impl LinkSource for EutilsClient {
    fn elink(&self, ass_id: &str) -> Result<ElinkResponse> {
        let response = self
            .client
            .get(EUTILS_ELINK_URL)
            .query(&[
                ("dbfrom", ELINK_DBFROM),
                ("db", ELINK_DB),
                ("linkname", ELINK_LINKNAME),
                ("id", ass_id),
                ("retmode", "json"),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            bail!("HTTP {} from elink for `{}`", status.as_u16(), ass_id);
        }

        Ok(response.json::<ElinkResponse>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_elink_payload() {
        let payload = r#"{
            "header": {"type": "elink", "version": "0.3"},
            "linksets": [{
                "dbfrom": "assembly",
                "ids": ["10601591"],
                "linksetdbs": [{
                    "dbto": "nuccore",
                    "linkname": "assembly_nuccore_refseq",
                    "links": ["2075061612", "2075061613"]
                }]
            }]
        }"#;

        let response: ElinkResponse = serde_json::from_str(payload).unwrap();

        assert!(response.server_errors().is_empty());
        assert_eq!(response.links(), vec!["2075061612", "2075061613"]);
    }

    #[test]
    fn test_parse_error_list() {
        let payload = r#"{
            "linksets": [{
                "dbfrom": "assembly",
                "ERROR": ["cannot get document summary"]
            }]
        }"#;

        let response: ElinkResponse = serde_json::from_str(payload).unwrap();

        assert_eq!(response.server_errors(), ["cannot get document summary"]);
        assert!(response.links().is_empty());
    }

    #[test]
    fn test_no_linksetdbs_means_no_links() {
        let response: ElinkResponse = serde_json::from_str(r#"{"linksets": []}"#).unwrap();

        assert!(response.links().is_empty());
        assert!(response.server_errors().is_empty());
    }
}
