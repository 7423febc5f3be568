use std::cell::RefCell;

use ledgerlink_tools::ToolError;
use ledgerlink_tools::config::PageSize;
use ledgerlink_tools::paginate::{fetch_all, start_positions};

fn page_of(start: usize, size: usize, total: usize) -> Vec<usize> {
    (start..start + size).take_while(|n| *n <= total).collect()
}

#[test]
fn requests_every_page_in_order() {
    let page_size = PageSize::new(10).expect("valid page size");
    let total = 2 * 10 + 1;
    let calls = RefCell::new(Vec::new());

    let records = fetch_all(
        page_size,
        || Ok(total),
        |start, size| {
            calls.borrow_mut().push(start);
            Ok(page_of(start, size.get(), total))
        },
    )
    .expect("fetch succeeds");

    assert_eq!(calls.into_inner(), vec![1, 11, 21]);
    assert_eq!(records, (1..=total).collect::<Vec<_>>());
}

#[test]
fn zero_count_issues_no_page_requests() {
    let page_size = PageSize::new(5).expect("valid page size");
    let mut calls = 0;

    let records: Vec<usize> = fetch_all(
        page_size,
        || Ok(0),
        |_, _| {
            calls += 1;
            Ok(Vec::new())
        },
    )
    .expect("fetch succeeds");

    assert!(records.is_empty());
    assert_eq!(calls, 0);
}

#[test]
fn page_failure_discards_partial_results() {
    let page_size = PageSize::new(2).expect("valid page size");
    let mut calls = Vec::new();

    let result = fetch_all(
        page_size,
        || Ok(5),
        |start, size| {
            calls.push(start);
            if start == 3 {
                Err(ToolError::Status { status: 503 })
            } else {
                Ok(page_of(start, size.get(), 5))
            }
        },
    );

    assert!(matches!(result, Err(ToolError::Status { status: 503 })));
    assert_eq!(calls, vec![1, 3]);
}

#[test]
fn oversized_count_still_reports_page_failure() {
    let page_size = PageSize::new(1000).expect("valid page size");
    let mut calls = 0;

    let result: Result<Vec<u8>, _> = fetch_all(
        page_size,
        || Ok(usize::MAX),
        |_, _| {
            calls += 1;
            Err(ToolError::Status { status: 503 })
        },
    );

    assert!(matches!(result, Err(ToolError::Status { status: 503 })));
    assert_eq!(calls, 1);
}

#[test]
fn count_failure_is_propagated() {
    let page_size = PageSize::new(2).expect("valid page size");

    let result: Result<Vec<u8>, _> = fetch_all(
        page_size,
        || Err(ToolError::Transport("connection reset".to_string())),
        |_, _| panic!("no page should be requested"),
    );

    assert!(matches!(result, Err(ToolError::Transport(_))));
}

#[test]
fn short_pages_do_not_shift_start_positions() {
    let page_size = PageSize::new(4).expect("valid page size");
    let calls = RefCell::new(Vec::new());

    let records = fetch_all(
        page_size,
        || Ok(10),
        |start, _| {
            calls.borrow_mut().push(start);
            Ok(vec![start])
        },
    )
    .expect("fetch succeeds");

    assert_eq!(calls.into_inner(), vec![1, 5, 9]);
    assert_eq!(records, vec![1, 5, 9]);
}

#[test]
fn start_positions_cover_exact_multiples() {
    let page_size = PageSize::new(3).expect("valid page size");

    assert_eq!(start_positions(6, page_size).collect::<Vec<_>>(), vec![1, 4]);
    assert_eq!(start_positions(7, page_size).collect::<Vec<_>>(), vec![1, 4, 7]);
    assert_eq!(start_positions(0, page_size).count(), 0);
}

#[test]
fn zero_page_size_is_rejected() {
    assert!(matches!(PageSize::new(0), Err(ToolError::InvalidPageSize)));
}
