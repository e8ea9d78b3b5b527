use serde::{Deserialize, Serialize};
use std::fmt;

/// Long-lived account credentials used to open a session.
#[derive(Clone)]
pub struct Credentials {
    pub customernumber: String,
    pub apikey: String,
    pub apipassword: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("customernumber", &self.customernumber)
            .field("apikey", &"<redacted>")
            .field("apipassword", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsRecord {
    pub id: String,
    pub hostname: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub destination: String,
}

/// Entry of the `dnsrecordset` sent with `updateDnsRecords`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsRecordUpdate {
    pub id: i64,
    pub hostname: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub destination: String,
    pub deleterecord: bool,
}

#[derive(Debug, Serialize)]
pub struct ApiRequest<'a, P> {
    pub action: &'a str,
    pub param: P,
}

#[derive(Serialize)]
pub struct LoginParam<'a> {
    pub customernumber: &'a str,
    pub apikey: &'a str,
    pub apipassword: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SessionParam<'a> {
    pub domainname: &'a str,
    pub customernumber: &'a str,
    pub apikey: &'a str,
    pub apisessionid: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateParam<'a> {
    #[serde(flatten)]
    pub session: SessionParam<'a>,
    pub dnsrecordset: DnsRecordSet<'a>,
}

#[derive(Debug, Serialize)]
pub struct DnsRecordSet<'a> {
    pub dnsrecords: &'a [DnsRecordUpdate],
}

// The endpoint sends `responsedata` as an empty string when a call fails,
// so it stays untyped until the status has been looked at.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub statuscode: i64,
    #[serde(default)]
    pub shortmessage: String,
    #[serde(default)]
    pub longmessage: String,
    #[serde(default)]
    pub responsedata: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    pub fn describe(&self) -> String {
        let mut out = format!("status {:?}", self.status);
        if self.statuscode != 0 {
            out.push_str(&format!(" ({})", self.statuscode));
        }
        if !self.shortmessage.is_empty() {
            out.push_str(&format!(": {}", self.shortmessage));
        }
        if !self.longmessage.is_empty() {
            out.push_str(&format!(" - {}", self.longmessage));
        }
        out
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub apisessionid: String,
}

#[derive(Debug, Deserialize)]
pub struct DnsRecordsData {
    pub dnsrecords: Vec<DnsRecord>,
}
