//! Integration tests for the queue resource.
//!
//! Every test runs against the in-memory holodeck transport and checks both
//! the request the client produced and how the response was classified.

mod common;

use serde_json::{json, Value};
use twilio_api::rest::resources::api::v2010::queue::{QueueCreateParams, QueueUpdateParams};
use twilio_api::rest::resources::{PageOptions, ReadOptions};
use twilio_api::rest::{Operation, RestError};
use twilio_api::{HttpMethod, HttpResponse, Param};

use common::{client, ACCOUNT_SID};

const QUEUE_SID: &str = "QUaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

fn queue_json(sid: &str) -> Value {
    json!({
        "account_sid": ACCOUNT_SID,
        "average_wait_time": 0,
        "current_size": 0,
        "date_created": "Tue, 04 Aug 2015 18:39:09 +0000",
        "date_updated": "Tue, 04 Aug 2015 18:39:09 +0000",
        "friendly_name": "0.361280134646222",
        "max_size": 100,
        "sid": sid,
        "uri": format!("/2010-04-01/Accounts/{ACCOUNT_SID}/Queues/{sid}.json")
    })
}

fn queues_page(queues: Vec<Value>, next_page_uri: Option<&str>) -> Value {
    json!({
        "end": 0,
        "first_page_uri": format!("/2010-04-01/Accounts/{ACCOUNT_SID}/Queues.json?PageSize=50&Page=0"),
        "next_page_uri": next_page_uri,
        "page": 0,
        "page_size": 50,
        "previous_page_uri": null,
        "queues": queues,
        "start": 0,
        "uri": format!("/2010-04-01/Accounts/{ACCOUNT_SID}/Queues.json?PageSize=50&Page=0")
    })
}

fn queues_url() -> String {
    format!("https://api.twilio.com/2010-04-01/Accounts/{ACCOUNT_SID}/Queues.json")
}

fn queue_url() -> String {
    format!("https://api.twilio.com/2010-04-01/Accounts/{ACCOUNT_SID}/Queues/{QUEUE_SID}.json")
}

// ============================================================================
// Fetch / update
// ============================================================================

#[test]
fn test_fetch_sends_get_to_instance_url() {
    let (client, holodeck) = client();
    holodeck.mock_json(200, &queue_json(QUEUE_SID));

    let queue = client
        .api()
        .v2010()
        .accounts(ACCOUNT_SID)
        .queue(QUEUE_SID)
        .fetch()
        .unwrap();

    assert_eq!(queue.sid.as_deref(), Some(QUEUE_SID));
    assert_eq!(queue.max_size, Some(100));
    holodeck.assert_has_request(HttpMethod::Get, &queue_url());
}

#[test]
fn test_fetch_500_is_request_error() {
    let (client, holodeck) = client();
    holodeck.mock(HttpResponse::new(500, "{}"));

    let error = client
        .api()
        .v2010()
        .account()
        .queue(QUEUE_SID)
        .fetch()
        .unwrap_err();

    assert!(matches!(
        error,
        RestError::Request(ref e) if e.status_code == 500 && e.operation == Operation::Fetch
    ));
    assert_eq!(holodeck.request_count(), 1);
}

#[test]
fn test_fetch_201_is_not_success() {
    let (client, holodeck) = client();
    holodeck.mock_json(201, &queue_json(QUEUE_SID));

    let error = client.api().v2010().account().queue(QUEUE_SID).fetch();
    assert!(matches!(error, Err(RestError::Request(e)) if e.status_code == 201));
}

#[test]
fn test_update_posts_form_data() {
    let (client, holodeck) = client();
    let mut updated = queue_json(QUEUE_SID);
    updated["max_size"] = json!(250);
    holodeck.mock_json(200, &updated);

    let queue = client
        .api()
        .v2010()
        .account()
        .queue(QUEUE_SID)
        .update(&QueueUpdateParams {
            max_size: Param::Value(250),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(queue.max_size, Some(250));
    let request = holodeck.assert_has_request(HttpMethod::Post, &queue_url());
    assert_eq!(
        request.data.to_pairs(),
        vec![("MaxSize".to_string(), "250".to_string())]
    );
    assert_eq!(
        request.header("Content-Type"),
        Some("application/x-www-form-urlencoded")
    );
}

#[test]
fn test_instance_context_round_trips_to_same_url() {
    let (client, holodeck) = client();
    holodeck.mock_json(200, &queue_json(QUEUE_SID));
    holodeck.mock(HttpResponse::new(204, ""));

    let queue = client.api().v2010().account().queue(QUEUE_SID).fetch().unwrap();
    assert!(queue.context().unwrap().delete().unwrap());

    let requests = holodeck.requests();
    assert_eq!(requests[1].method, HttpMethod::Delete);
    assert_eq!(requests[1].url, queue_url());
}

// ============================================================================
// Create
// ============================================================================

#[test]
fn test_create_posts_to_list_url() {
    let (client, holodeck) = client();
    holodeck.mock_json(201, &queue_json(QUEUE_SID));

    let queue = client
        .api()
        .v2010()
        .account()
        .queues()
        .create(&QueueCreateParams {
            friendly_name: Param::Value("support".to_string()),
            max_size: Param::Unset,
        })
        .unwrap();

    assert_eq!(queue.sid.as_deref(), Some(QUEUE_SID));
    let request = holodeck.assert_has_request(HttpMethod::Post, &queues_url());
    assert_eq!(
        request.data.to_pairs(),
        vec![("FriendlyName".to_string(), "support".to_string())]
    );
}

#[test]
fn test_create_accepts_200() {
    let (client, holodeck) = client();
    holodeck.mock_json(200, &queue_json(QUEUE_SID));

    let result = client
        .api()
        .v2010()
        .account()
        .queues()
        .create(&QueueCreateParams::default());
    assert!(result.is_ok());
}

#[test]
fn test_create_error_carries_body() {
    let (client, holodeck) = client();
    let body = r#"{"code": 21212, "message": "Invalid friendly name", "status": 400}"#;
    holodeck.mock(HttpResponse::new(400, body));

    let error = client
        .api()
        .v2010()
        .account()
        .queues()
        .create(&QueueCreateParams::default())
        .unwrap_err();

    match error {
        RestError::Request(e) => {
            assert_eq!(e.status_code, 400);
            assert_eq!(e.operation, Operation::Create);
            assert_eq!(e.body.as_deref(), Some(body));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn test_delete_204_is_true() {
    let (client, holodeck) = client();
    holodeck.mock(HttpResponse::new(204, ""));

    let deleted = client.api().v2010().account().queue(QUEUE_SID).delete().unwrap();

    assert!(deleted);
    holodeck.assert_has_request(HttpMethod::Delete, &queue_url());
}

#[test]
fn test_delete_404_is_false() {
    let (client, holodeck) = client();
    holodeck.mock(HttpResponse::new(404, r#"{"status": 404}"#));

    let deleted = client.api().v2010().account().queue(QUEUE_SID).delete().unwrap();
    assert!(!deleted);
}

#[test]
fn test_delete_500_is_error() {
    let (client, holodeck) = client();
    holodeck.mock(HttpResponse::new(500, ""));

    let error = client.api().v2010().account().queue(QUEUE_SID).delete();
    assert!(matches!(
        error,
        Err(RestError::Request(e)) if e.status_code == 500 && e.operation == Operation::Delete
    ));
}

// ============================================================================
// Read
// ============================================================================

#[test]
fn test_read_full_page() {
    let (client, holodeck) = client();
    holodeck.mock_json(200, &queues_page(vec![queue_json(QUEUE_SID)], None));

    let queues = client
        .api()
        .v2010()
        .account()
        .queues()
        .read(ReadOptions::default())
        .unwrap();

    assert_eq!(queues.len(), 1);
    assert_eq!(queues[0].friendly_name.as_deref(), Some("0.361280134646222"));
    let request = holodeck.assert_has_request(HttpMethod::Get, &queues_url());
    assert!(request.params.is_empty());
}

#[test]
fn test_read_empty_page() {
    let (client, holodeck) = client();
    holodeck.mock_json(200, &queues_page(vec![], None));

    let queues = client
        .api()
        .v2010()
        .account()
        .queues()
        .read(ReadOptions::default())
        .unwrap();

    assert!(queues.is_empty());
    assert_eq!(holodeck.request_count(), 1);
}

#[test]
fn test_read_follows_next_page_uri() {
    let (client, holodeck) = client();
    let next = format!("/2010-04-01/Accounts/{ACCOUNT_SID}/Queues.json?PageSize=50&Page=1&PageToken=PAQU1");
    holodeck.mock_json(
        200,
        &queues_page(vec![queue_json("QU00000000000000000000000000000001")], Some(&next)),
    );
    holodeck.mock_json(
        200,
        &queues_page(vec![queue_json("QU00000000000000000000000000000002")], None),
    );

    let sids: Vec<_> = client
        .api()
        .v2010()
        .account()
        .queues()
        .stream(ReadOptions::default())
        .unwrap()
        .map(|queue| queue.unwrap().sid.unwrap())
        .collect();

    assert_eq!(
        sids,
        vec![
            "QU00000000000000000000000000000001",
            "QU00000000000000000000000000000002"
        ]
    );
    let requests = holodeck.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].url, format!("https://api.twilio.com{next}"));
    assert!(requests[1].params.is_empty());
}

#[test]
fn test_page_sends_page_options() {
    let (client, holodeck) = client();
    holodeck.mock_json(200, &queues_page(vec![queue_json(QUEUE_SID)], None));

    let page = client
        .api()
        .v2010()
        .account()
        .queues()
        .page(PageOptions {
            page_token: Some("PAQU1".to_string()),
            page_size: Some(20),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(page.len(), 1);
    assert!(page.next_page_url().is_none());
    let request = holodeck.assert_has_request(HttpMethod::Get, &queues_url());
    assert_eq!(
        request.params.to_pairs(),
        vec![
            ("PageToken".to_string(), "PAQU1".to_string()),
            ("PageSize".to_string(), "20".to_string()),
        ]
    );
}

#[test]
fn test_page_with_single_record_and_large_counts() {
    let (client, holodeck) = client();
    let mut page = queues_page(vec![queue_json(QUEUE_SID)], None);
    page["end"] = json!(12858);
    page["page"] = json!(12858);
    page["page_size"] = json!(1);
    page["start"] = json!(12858);
    holodeck.mock_json(200, &page);

    let page = client
        .api()
        .v2010()
        .account()
        .queues()
        .page(PageOptions::default())
        .unwrap();

    assert_eq!(page.len(), 1);
    let queues: Vec<_> = page.into_iter().collect::<Result<_, _>>().unwrap();
    assert_eq!(queues[0].sid.as_deref(), Some(QUEUE_SID));
}

#[test]
fn test_page_error_status_is_request_error() {
    let (client, holodeck) = client();
    holodeck.mock(HttpResponse::new(404, "{}"));

    let error = client
        .api()
        .v2010()
        .account()
        .queues()
        .read(ReadOptions::default())
        .unwrap_err();
    assert!(matches!(
        error,
        RestError::Request(e) if e.status_code == 404 && e.operation == Operation::Page
    ));
}
