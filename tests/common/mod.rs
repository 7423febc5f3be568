#![allow(dead_code)]

use std::cell::RefCell;

use ledgerlink_tools::Result;
use ledgerlink_tools::config::{ClientConfig, PageSize};
use ledgerlink_tools::io::{ApiRequest, ApiResponse, Transport};

type Responder = Box<dyn Fn(&ApiRequest) -> Result<ApiResponse>>;

/// In-memory transport that records every request and answers through a
/// caller-provided closure.
pub struct RecordingTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responder: Responder,
}

impl RecordingTransport {
    pub fn new(responder: impl Fn(&ApiRequest) -> Result<ApiResponse> + 'static) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            responder: Box::new(responder),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// The `query` parameter of every recorded request, in order.
    pub fn statements(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .filter_map(|request| request.query_value("query").map(str::to_string))
            .collect()
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.requests.borrow_mut().push(request.clone());
        (self.responder)(request)
    }
}

pub fn test_config(page_size: usize) -> ClientConfig {
    ClientConfig::new("https://api.example.test", "4620816365")
        .with_page_size(PageSize::new(page_size).expect("non-zero page size"))
}

pub fn json_response(status: u16, body: serde_json::Value) -> Result<ApiResponse> {
    Ok(ApiResponse::new(
        status,
        serde_json::to_vec(&body).expect("JSON encoded"),
    ))
}

/// Parses `STARTPOSITION n` out of a page statement.
pub fn start_position(statement: &str) -> Option<usize> {
    let mut words = statement.split_whitespace();
    words.find(|word| *word == "STARTPOSITION")?;
    words.next()?.parse().ok()
}

pub fn customer_json(id: usize) -> serde_json::Value {
    serde_json::json!({
        "Id": id.to_string(),
        "SyncToken": "0",
        "DisplayName": format!("Customer {id}"),
        "Active": true
    })
}
