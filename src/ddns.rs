use crate::api::{DnsApiClient, NetcupClient};
use crate::config::Config;
use crate::error::Result;
use crate::records;
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Updated,
}

pub struct NetcupDdns<C = NetcupClient> {
    config: Config,
    client: C,
    http: reqwest::Client,
}

impl NetcupDdns<NetcupClient> {
    pub fn new(config: Config) -> Self {
        let client = NetcupClient::new(config.api_url.clone(), config.credentials());
        Self::with_client(config, client)
    }
}

impl<C: DnsApiClient> NetcupDdns<C> {
    pub fn with_client(config: Config, client: C) -> Self {
        Self {
            config,
            client,
            http: reqwest::Client::new(),
        }
    }

    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    // The body is passed through untouched; ipify answers with the bare address.
    async fn get_current_ip(&self) -> Result<String> {
        let response = self.http.get(&self.config.ip_service_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(
                "IP service {} answered {}, using its body anyway",
                self.config.ip_service_url, status
            );
        }
        Ok(response.text().await?)
    }

    /// One full pass: resolve the public IP, log in, compare against the root
    /// A record and rewrite the root and wildcard records if they differ.
    pub async fn run(&self) -> Result<Outcome> {
        let public_ip = self.get_current_ip().await?;
        info!("Public IP: {}", public_ip);

        let session_id = self.client.login().await?;
        let domain = self.config.domain.as_str();

        let dns_records = self.client.info_dns_records(&session_id, domain).await?;
        let current_ip = records::root_destination(&dns_records, domain)?;
        info!("Current DNS A record: {}", current_ip);

        if current_ip == public_ip {
            info!("No update needed. IP is already correct.");
            return Ok(Outcome::Unchanged);
        }

        info!("Updating DNS record...");
        let updates = records::build_updates(&dns_records, domain, &public_ip)?;
        self.client
            .update_dns_records(&session_id, domain, &updates)
            .await?;

        info!("DNS record updated successfully.");
        Ok(Outcome::Updated)
    }
}
