use super::{client::DnsApiClient, models::*};
use crate::error::{Error, Result};
use async_trait::async_trait;
use log::{debug, warn};
use serde::Serialize;

pub const API_URL: &str = "https://ccp.netcup.net/run/webservice/servers/endpoint.php?JSON";

pub struct NetcupClient {
    client: reqwest::Client,
    api_url: String,
    credentials: Credentials,
}

#[async_trait]
impl DnsApiClient for NetcupClient {
    async fn login(&self) -> Result<String> {
        let response = self
            .call(
                "login",
                LoginParam {
                    customernumber: &self.credentials.customernumber,
                    apikey: &self.credentials.apikey,
                    apipassword: &self.credentials.apipassword,
                },
            )
            .await?;

        let data: LoginData = if response.responsedata.is_object() {
            serde_json::from_value(response.responsedata.clone())
                .map_err(|e| Error::parse("login response", e))?
        } else {
            LoginData::default()
        };

        if data.apisessionid.is_empty() {
            return Err(Error::Login(format!(
                "no session id returned ({})",
                response.describe()
            )));
        }

        Ok(data.apisessionid)
    }

    async fn info_dns_records(&self, session_id: &str, domain: &str) -> Result<Vec<DnsRecord>> {
        let response = self
            .call("infoDnsRecords", self.session_param(session_id, domain))
            .await?;

        let data: DnsRecordsData = serde_json::from_value(response.responsedata.clone())
            .map_err(|e| {
                Error::parse(
                    format!("infoDnsRecords response ({})", response.describe()),
                    e,
                )
            })?;

        debug!("Fetched {} records for {}", data.dnsrecords.len(), domain);
        Ok(data.dnsrecords)
    }

    async fn update_dns_records(
        &self,
        session_id: &str,
        domain: &str,
        records: &[DnsRecordUpdate],
    ) -> Result<()> {
        let response = self
            .call(
                "updateDnsRecords",
                UpdateParam {
                    session: self.session_param(session_id, domain),
                    dnsrecordset: DnsRecordSet {
                        dnsrecords: records,
                    },
                },
            )
            .await?;

        if !response.is_success() {
            warn!("updateDnsRecords refused: {}", response.describe());
            return Err(Error::UpdateRejected(response.describe()));
        }

        Ok(())
    }
}

impl NetcupClient {
    pub fn new(api_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            credentials,
        }
    }

    fn session_param<'a>(&'a self, session_id: &'a str, domain: &'a str) -> SessionParam<'a> {
        SessionParam {
            domainname: domain,
            customernumber: &self.credentials.customernumber,
            apikey: &self.credentials.apikey,
            apisessionid: session_id,
        }
    }

    // Every action is a JSON POST to the same endpoint. The body is read in
    // full before parsing so the connection is released on every path.
    async fn call<P: Serialize + Send>(&self, action: &str, param: P) -> Result<ApiResponse> {
        debug!("POST {} action={}", self.api_url, action);
        let request = self
            .client
            .post(&self.api_url)
            .json(&ApiRequest { action, param });
        let response = request.send().await?;

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| Error::parse(format!("{action} response"), e))
    }
}
