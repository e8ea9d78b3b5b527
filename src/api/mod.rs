pub mod client;
pub mod models;
pub mod netcup;

pub use client::DnsApiClient;
pub use netcup::NetcupClient;
