use super::models::*;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DnsApiClient: Send + Sync {
    /// Opens an API session and returns its id.
    async fn login(&self) -> Result<String>;

    async fn info_dns_records(&self, session_id: &str, domain: &str) -> Result<Vec<DnsRecord>>;

    async fn update_dns_records(
        &self,
        session_id: &str,
        domain: &str,
        records: &[DnsRecordUpdate],
    ) -> Result<()>;
}
