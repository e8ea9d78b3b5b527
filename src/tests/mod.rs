
use crate::config::Config;
use std::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ENDPOINT_PATH: &str = "/endpoint.php";

pub fn test_config(api_url: String, ip_service_url: String) -> Config {
    Config {
        customernumber: "12345".to_string(),
        apikey: "test_key".to_string(),
        apipassword: "test_password".to_string(),
        domain: "example.com".to_string(),
        api_url,
        ip_service_url,
    }
}

/// Base URL of a local port that nothing listens on.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn endpoint_url(server: &MockServer) -> String {
    format!("{}{}?JSON", server.uri(), ENDPOINT_PATH)
}

/// Serves `ip` as the plain-text body of `GET /ip`.
pub async fn mount_ip_service(server: &MockServer, ip: &str) -> String {
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ip))
        .expect(1)
        .mount(server)
        .await;
    format!("{}/ip", server.uri())
}
