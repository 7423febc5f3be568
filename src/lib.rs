//! Client library for the ledgerlink command line application.
//!
//! The library talks to a hosted accounting service's REST API. Transport and
//! query-language helpers live under [`ledgerlink::tools::io`], wire records in
//! [`ledgerlink::tools::model`], the report flattening logic in
//! [`ledgerlink::tools::flatten`], collection paging in
//! [`ledgerlink::tools::paginate`], and the remote operations under
//! [`ledgerlink::tools::client`].

pub mod ledgerlink;

pub use ledgerlink::tools::{
    Result, ToolError, client, config, error, flatten, io, model, paginate,
};
