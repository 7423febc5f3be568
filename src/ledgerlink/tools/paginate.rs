//! Fetching complete collections one bounded page at a time.

use tracing::{debug, info};

use crate::ledgerlink::tools::config::PageSize;
use crate::ledgerlink::tools::error::Result;

/// 1-based start positions of every page needed to cover `total` records.
pub fn start_positions(total: usize, page_size: PageSize) -> impl Iterator<Item = usize> {
    (1..=total).step_by(page_size.get())
}

/// Retrieves a whole collection.
///
/// `count` runs once and reports how many records exist. `page` is then
/// called with increasing start positions, advancing by `page_size` whatever
/// the size of the page actually returned. Pages are appended in the order
/// they were requested. The first failing call aborts the fetch and nothing
/// gathered so far is returned.
pub fn fetch_all<T, C, P>(page_size: PageSize, count: C, mut page: P) -> Result<Vec<T>>
where
    C: FnOnce() -> Result<usize>,
    P: FnMut(usize, PageSize) -> Result<Vec<T>>,
{
    let total = count()?;
    if total == 0 {
        debug!("collection is empty, no pages requested");
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for start_position in start_positions(total, page_size) {
        let batch = page(start_position, page_size)?;
        debug!(start_position, returned = batch.len(), "page fetched");
        records.extend(batch);
    }

    info!(total, fetched = records.len(), "collection fetched");
    Ok(records)
}
