use serde::Deserialize;
use std::fmt;
use validator::Validate;

use crate::api::models::Credentials;
use crate::api::netcup::API_URL;

pub const IP_SERVICE_URL: &str = "https://api.ipify.org";

#[derive(Clone, Deserialize, Validate)]
pub struct Config {
    #[validate(length(min = 1, message = "Customer number cannot be empty"))]
    pub customernumber: String,

    #[validate(length(min = 1, message = "API key cannot be empty"))]
    pub apikey: String,

    #[validate(length(min = 1, message = "API password cannot be empty"))]
    pub apipassword: String,

    #[validate(length(min = 1, message = "Domain cannot be empty"))]
    pub domain: String,

    #[serde(default = "default_api_url")]
    #[validate(length(min = 1, message = "API URL cannot be empty"))]
    pub api_url: String,

    #[serde(default = "default_ip_service_url")]
    #[validate(length(min = 1, message = "IP service URL cannot be empty"))]
    pub ip_service_url: String,
}

pub(crate) fn default_api_url() -> String {
    API_URL.to_string()
}

pub(crate) fn default_ip_service_url() -> String {
    IP_SERVICE_URL.to_string()
}

impl Config {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            customernumber: self.customernumber.clone(),
            apikey: self.apikey.clone(),
            apipassword: self.apipassword.clone(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("customernumber", &self.customernumber)
            .field("apikey", &"<redacted>")
            .field("apipassword", &"<redacted>")
            .field("domain", &self.domain)
            .field("api_url", &self.api_url)
            .field("ip_service_url", &self.ip_service_url)
            .finish()
    }
}
