use serde::Deserialize as _;
use serde::de::Error as _;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use crate::ledgerlink::tools::config::{ClientConfig, PageSize};
use crate::ledgerlink::tools::error::{Result, ToolError};
use crate::ledgerlink::tools::io::query;
use crate::ledgerlink::tools::io::{ApiRequest, ApiResponse, HttpTransport, Transport};
use crate::ledgerlink::tools::model::{Customer, Entity, FaultEnvelope, Report, ReportKind};
use crate::ledgerlink::tools::paginate;

/// Body of a query answer, keyed by entity name plus paging metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResponse {
    fields: Map<String, Value>,
}

impl QueryResponse {
    /// Decodes the `QueryResponse` envelope of a query answer.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let mut envelope: Map<String, Value> = serde_json::from_slice(body)?;
        let fields = match envelope.remove("QueryResponse") {
            Some(Value::Object(fields)) => fields,
            Some(other) => {
                return Err(ToolError::Json(serde_json::Error::custom(format!(
                    "QueryResponse is not an object: {other}"
                ))));
            }
            None => Map::new(),
        };
        Ok(Self { fields })
    }

    /// Value of `totalCount`, zero when the service omits it.
    pub fn total_count(&self) -> usize {
        self.fields
            .get("totalCount")
            .and_then(Value::as_u64)
            .map_or(0, |count| count as usize)
    }

    /// Records of type `E`; empty when the service returned none.
    pub fn records<E: Entity>(&self) -> Result<Vec<E>> {
        match self.fields.get(E::NAME) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => Ok(Vec::<E>::deserialize(value)?),
        }
    }
}

/// Client for a single company file.
pub struct Client<T: Transport> {
    transport: T,
    config: ClientConfig,
}

impl Client<HttpTransport> {
    /// Creates a client talking HTTP to the configured endpoint.
    pub fn connect(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::new(transport, config))
    }
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn versioned(&self, request: ApiRequest) -> ApiRequest {
        request.param("minorversion", self.config.minor_version.as_str())
    }

    fn read(&self, request: ApiRequest) -> Result<ApiResponse> {
        let response = self.transport.execute(&self.versioned(request))?;
        if !response.is_success() {
            warn!(status = response.status, "read request rejected");
            return Err(ToolError::Status {
                status: response.status,
            });
        }
        Ok(response)
    }

    fn write(&self, request: ApiRequest) -> Result<ApiResponse> {
        let response = self.transport.execute(&self.versioned(request))?;
        if !response.is_success() {
            warn!(status = response.status, "write request rejected");
            return Err(parse_failure(&response));
        }
        Ok(response)
    }

    /// Runs a query statement and returns the decoded envelope.
    #[instrument(level = "debug", skip(self))]
    pub fn query(&self, statement: &str) -> Result<QueryResponse> {
        let request = ApiRequest::get(self.company_path(&["query"])).param("query", statement);
        let response = self.read(request)?;
        QueryResponse::from_slice(&response.body)
    }

    /// Number of `E` records the service currently holds.
    pub fn count<E: Entity>(&self) -> Result<usize> {
        let total = self.query(&query::count_query(E::NAME))?.total_count();
        debug!(entity = E::NAME, total, "counted records");
        Ok(total)
    }

    /// One page of `E` records ordered by identifier.
    pub fn fetch_page<E: Entity>(
        &self,
        start_position: usize,
        page_size: PageSize,
    ) -> Result<Vec<E>> {
        let statement = query::page_query(E::NAME, start_position, page_size.get());
        self.query(&statement)?.records()
    }

    /// Every `E` record, in identifier order.
    #[instrument(level = "info", skip(self), fields(entity = E::NAME))]
    pub fn fetch_all<E: Entity>(&self) -> Result<Vec<E>> {
        paginate::fetch_all(
            self.config.page_size,
            || self.count::<E>(),
            |start_position, page_size| self.fetch_page::<E>(start_position, page_size),
        )
    }

    pub fn fetch_customers(&self) -> Result<Vec<Customer>> {
        self.fetch_all::<Customer>()
    }

    /// Retrieves a single `E` by identifier.
    #[instrument(level = "info", skip(self), fields(entity = E::NAME))]
    pub fn fetch_by_id<E: Entity>(&self, id: &str) -> Result<E> {
        let response = self.read(ApiRequest::get(self.company_path(&[E::PATH, id])))?;
        decode_entity(&response.body)
    }

    /// Retrieves the single `E` whose `field` equals `value`.
    ///
    /// Zero matches yield [`ToolError::NotFound`], several yield
    /// [`ToolError::AmbiguousMatch`].
    #[instrument(level = "info", skip(self), fields(entity = E::NAME))]
    pub fn query_by_name<E: Entity>(&self, field: &str, value: &str) -> Result<E> {
        let statement = query::equals_query(E::NAME, field, value);
        let mut matches = self.query(&statement)?.records::<E>()?;
        match matches.len() {
            0 => Err(ToolError::NotFound {
                entity: E::NAME.to_string(),
                name: value.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            count => Err(ToolError::AmbiguousMatch {
                entity: E::NAME.to_string(),
                name: value.to_string(),
                count,
            }),
        }
    }

    pub fn query_customer_by_name(&self, name: &str) -> Result<Customer> {
        self.query_by_name::<Customer>("DisplayName", name)
    }

    /// Creates `entity` and returns the record as stored by the service.
    #[instrument(level = "info", skip_all, fields(entity = E::NAME))]
    pub fn create<E: Entity>(&self, entity: &E) -> Result<E> {
        let body = serde_json::to_vec(entity)?;
        let response = self.write(ApiRequest::post(self.company_path(&[E::PATH]), body))?;
        info!("record created");
        decode_entity(&response.body)
    }

    /// Sparse update: fields absent from `entity` are left untouched remotely.
    #[instrument(level = "info", skip_all, fields(entity = E::NAME))]
    pub fn update<E: Entity>(&self, entity: &E) -> Result<E> {
        let mut payload = serde_json::to_value(entity)?;
        if let Value::Object(fields) = &mut payload {
            fields.insert("sparse".to_string(), Value::Bool(true));
        }
        let body = serde_json::to_vec(&payload)?;
        let response = self.write(ApiRequest::post(self.company_path(&[E::PATH]), body))?;
        info!("record updated");
        decode_entity(&response.body)
    }

    /// Runs report `kind` filtered to one customer.
    #[instrument(level = "info", skip(self))]
    pub fn report(&self, kind: ReportKind, customer_id: &str) -> Result<Report> {
        // Trailing empty segment keeps the slash the reports endpoint expects.
        let mut request = ApiRequest::get(self.company_path(&["reports", kind.url_name(), ""]));
        for (key, value) in kind.fixed_params() {
            request = request.param(*key, *value);
        }
        let request = request.param("customer", customer_id);

        let response = self.read(request)?;
        let report: Report = serde_json::from_slice(&response.body)?;
        debug!(
            report_name = %report.header.report_name,
            rows = report.rows.row.len(),
            "report decoded"
        );
        Ok(report)
    }

    fn company_path(&self, segments: &[&str]) -> Vec<String> {
        let mut path = self.config.company_segments();
        path.extend(segments.iter().map(|segment| segment.to_string()));
        path
    }
}

/// Decodes a `{ "<Entity>": { ... }, "time": ... }` body.
fn decode_entity<E: Entity>(body: &[u8]) -> Result<E> {
    let mut envelope: Map<String, Value> = serde_json::from_slice(body)?;
    let value = envelope
        .remove(E::NAME)
        .ok_or_else(|| serde_json::Error::missing_field(E::NAME))?;
    Ok(serde_json::from_value(value)?)
}

/// Builds the error for a rejected write, keeping the service's explanation
/// when the body carries one.
fn parse_failure(response: &ApiResponse) -> ToolError {
    match serde_json::from_slice::<FaultEnvelope>(&response.body) {
        Ok(envelope) => ToolError::Fault {
            status: response.status,
            fault: envelope.fault,
        },
        Err(_) => ToolError::Status {
            status: response.status,
        },
    }
}
