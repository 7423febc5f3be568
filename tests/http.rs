mod common;

use common::{RecordingTransport, json_response, test_config};
use ledgerlink_tools::ToolError;
use ledgerlink_tools::client::Client;
use ledgerlink_tools::config::ClientConfig;
use ledgerlink_tools::io::{ApiRequest, HttpTransport};
use ledgerlink_tools::model::Customer;
use serde_json::json;

/// The request `fetch_by_id` issues for `id`, as seen by the transport.
fn fetch_by_id_request(id: &str) -> ApiRequest {
    let transport = RecordingTransport::new(|_| {
        json_response(200, json!({ "Customer": { "Id": "58" } }))
    });
    let client = Client::new(&transport, test_config(10));
    client
        .fetch_by_id::<Customer>(id)
        .expect("customer fetched");
    transport.requests().remove(0)
}

#[test]
fn identifiers_are_encoded_as_one_segment() {
    let transport = HttpTransport::new(&test_config(10)).expect("transport built");

    let url = transport
        .url_for(&fetch_by_id_request("58?x=1#a/b"))
        .expect("url built");

    assert_eq!(url.host_str(), Some("api.example.test"));
    assert_eq!(url.path(), "/v3/company/4620816365/customer/58%3Fx=1%23a%2Fb");
    assert_eq!(url.fragment(), None);
    assert_eq!(url.query(), Some("minorversion=65"));
}

#[test]
fn relative_identifiers_stay_under_the_entity_path() {
    let transport = HttpTransport::new(&test_config(10)).expect("transport built");

    let url = transport
        .url_for(&fetch_by_id_request("../../invoice/5"))
        .expect("url built");

    assert_eq!(
        url.path(),
        "/v3/company/4620816365/customer/..%2F..%2Finvoice%2F5"
    );
}

#[test]
fn dot_segments_are_rejected() {
    let transport = HttpTransport::new(&test_config(10)).expect("transport built");

    let result = transport.url_for(&fetch_by_id_request(".."));

    assert!(matches!(result, Err(ToolError::InvalidPathSegment(segment)) if segment == ".."));
}

#[test]
fn realm_id_is_encoded_too() {
    let config = ClientConfig::new("https://api.example.test", "46/20?x");
    let transport = HttpTransport::new(&config).expect("transport built");

    let url = transport
        .url_for(&ApiRequest::get(config.company_segments()))
        .expect("url built");

    assert_eq!(url.path(), "/v3/company/46%2F20%3Fx");
    assert_eq!(url.query(), None);
}

#[test]
fn report_paths_keep_their_trailing_slash() {
    let transport = HttpTransport::new(&test_config(10)).expect("transport built");
    let request = ApiRequest::get(["v3", "company", "1", "reports", "CashFlow", ""])
        .param("customer", "58");

    let url = transport.url_for(&request).expect("url built");

    assert_eq!(
        url.as_str(),
        "https://api.example.test/v3/company/1/reports/CashFlow/?customer=58"
    );
}

#[test]
fn endpoint_path_prefix_is_preserved() {
    let config = ClientConfig::new("https://gateway.example.test/accounting/", "7");
    let transport = HttpTransport::new(&config).expect("transport built");

    let url = transport
        .url_for(&ApiRequest::get(config.company_segments()))
        .expect("url built");

    assert_eq!(url.path(), "/accounting/v3/company/7");
}

#[test]
fn opaque_endpoint_is_rejected() {
    let config = ClientConfig::new("mailto:books@example.test", "7");

    assert!(matches!(
        HttpTransport::new(&config),
        Err(ToolError::InvalidEndpoint(_))
    ));
}
