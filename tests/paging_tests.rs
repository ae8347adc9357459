//! Integration tests for record and page budgets across multi-page reads.

mod common;

use std::sync::Arc;

use serde_json::{json, Value};
use twilio_api::rest::resources::ReadOptions;
use twilio_api::rest::{Operation, RestError};
use twilio_api::HttpResponse;

use common::{client, Holodeck, ACCOUNT_SID};

fn list_uri(page: u32) -> String {
    format!("/2010-04-01/Accounts/{ACCOUNT_SID}/Queues.json?PageSize=2&Page={page}&PageToken=PAQU{page}")
}

fn queue(n: u32) -> Value {
    json!({"account_sid": ACCOUNT_SID, "sid": format!("QU{n:032}"), "max_size": n})
}

/// Queues `pages` pages of two queues each, linked through `next_page_uri`.
fn mock_pages(holodeck: &Arc<Holodeck>, pages: u32) {
    for page in 0..pages {
        let next = (page + 1 < pages).then(|| list_uri(page + 1));
        holodeck.mock_json(
            200,
            &json!({
                "queues": [queue(page * 2 + 1), queue(page * 2 + 2)],
                "next_page_uri": next,
                "page": page,
                "page_size": 2,
                "start": page * 2,
                "end": page * 2 + 1,
                "uri": list_uri(page)
            }),
        );
    }
}

fn max_sizes(options: ReadOptions, pages: u32) -> (Vec<i64>, usize) {
    let (client, holodeck) = client();
    mock_pages(&holodeck, pages);

    let sizes = client
        .api()
        .v2010()
        .account()
        .queues()
        .read(options)
        .unwrap()
        .into_iter()
        .map(|queue| queue.max_size.unwrap())
        .collect();
    (sizes, holodeck.request_count())
}

// ============================================================================
// Record limits
// ============================================================================

#[test]
fn test_unbounded_read_drains_every_page() {
    let (sizes, requests) = max_sizes(ReadOptions::default(), 3);
    assert_eq!(sizes, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(requests, 3);
}

#[test]
fn test_limit_stops_mid_page() {
    let options = ReadOptions {
        limit: Some(3),
        page_size: Some(2),
    };
    let (sizes, requests) = max_sizes(options, 3);
    assert_eq!(sizes, vec![1, 2, 3]);
    assert_eq!(requests, 2);
}

#[test]
fn test_limit_on_page_boundary_fetches_no_extra_page() {
    let options = ReadOptions {
        limit: Some(4),
        page_size: Some(2),
    };
    let (sizes, requests) = max_sizes(options, 3);
    assert_eq!(sizes, vec![1, 2, 3, 4]);
    assert_eq!(requests, 2);
}

#[test]
fn test_limit_sets_page_size() {
    let (client, holodeck) = client();
    mock_pages(&holodeck, 1);

    client
        .api()
        .v2010()
        .account()
        .queues()
        .read(ReadOptions::limit(2))
        .unwrap();

    assert_eq!(
        holodeck.requests()[0].params.to_pairs(),
        vec![("PageSize".to_string(), "2".to_string())]
    );
}

#[test]
fn test_large_limit_caps_page_size() {
    let (client, holodeck) = client();
    mock_pages(&holodeck, 1);

    client
        .api()
        .v2010()
        .account()
        .queues()
        .read(ReadOptions::limit(5000))
        .unwrap();

    assert_eq!(
        holodeck.requests()[0].params.to_pairs(),
        vec![("PageSize".to_string(), "1000".to_string())]
    );
}

#[test]
fn test_zero_limit_yields_nothing() {
    let (sizes, requests) = max_sizes(ReadOptions::limit(0), 3);
    assert!(sizes.is_empty());
    assert_eq!(requests, 1);
}

// ============================================================================
// Stream behaviour
// ============================================================================

#[test]
fn test_stream_is_lazy() {
    let (client, holodeck) = client();
    mock_pages(&holodeck, 3);

    let mut stream = client
        .api()
        .v2010()
        .account()
        .queues()
        .stream(ReadOptions::default())
        .unwrap();
    assert_eq!(holodeck.request_count(), 1);

    stream.next().unwrap().unwrap();
    stream.next().unwrap().unwrap();
    assert_eq!(holodeck.request_count(), 1);

    stream.next().unwrap().unwrap();
    assert_eq!(holodeck.request_count(), 2);
    assert_eq!(stream.pages_fetched(), 2);
    assert_eq!(stream.yielded(), 3);
}

#[test]
fn test_read_equals_collected_stream() {
    let options = ReadOptions {
        limit: Some(5),
        page_size: Some(2),
    };
    let (read, _) = max_sizes(options, 3);

    let (client, holodeck) = client();
    mock_pages(&holodeck, 3);
    let streamed: Vec<_> = client
        .api()
        .v2010()
        .account()
        .queues()
        .stream(options)
        .unwrap()
        .map(|queue| queue.unwrap().max_size.unwrap())
        .collect();

    assert_eq!(read, streamed);
}

#[test]
fn test_error_on_later_page_is_yielded_once() {
    let (client, holodeck) = client();
    holodeck.mock_json(
        200,
        &json!({"queues": [queue(1)], "next_page_uri": list_uri(1), "page": 0, "uri": list_uri(0)}),
    );
    holodeck.mock(HttpResponse::new(503, "{}"));

    let mut stream = client
        .api()
        .v2010()
        .account()
        .queues()
        .stream(ReadOptions::default())
        .unwrap();

    assert!(stream.next().unwrap().is_ok());
    assert!(matches!(
        stream.next(),
        Some(Err(RestError::Request(e))) if e.status_code == 503 && e.operation == Operation::Page
    ));
    assert!(stream.next().is_none());
    assert_eq!(holodeck.request_count(), 2);
}

#[test]
fn test_read_surfaces_later_page_error() {
    let (client, holodeck) = client();
    holodeck.mock_json(
        200,
        &json!({"queues": [queue(1)], "next_page_uri": list_uri(1), "page": 0, "uri": list_uri(0)}),
    );
    holodeck.mock(HttpResponse::new(200, "not json"));

    let error = client
        .api()
        .v2010()
        .account()
        .queues()
        .read(ReadOptions::default())
        .unwrap_err();
    assert!(matches!(error, RestError::Decode { operation: Operation::Page, .. }));
}
