//! Dashboard client behavior against a mock gateway: bulk loads are
//! all-or-nothing, mutations refresh every collection, and the per-row demo
//! polls isolate failures instead of aborting the batch.

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use cabletv::dashboard::{ApiClient, ApiError, Dashboard, DeleteTarget, ModalKind};
use cabletv::db::models::{Customer, Subscription};

const COLLECTION_PATHS: [&str; 10] = [
    "/api/customers",
    "/api/employees",
    "/api/installations",
    "/api/shows",
    "/api/episodes",
    "/api/packages",
    "/api/channels",
    "/api/subscriptions",
    "/api/billing",
    "/api/views/package-summary",
];

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(server.base_url(), Duration::from_secs(5)).unwrap()
}

async fn mock_empty_collections(server: &MockServer) -> Vec<httpmock::Mock<'_>> {
    let mut mocks = Vec::new();
    for path in COLLECTION_PATHS {
        mocks.push(
            server
                .mock_async(|when, then| {
                    when.method(GET).path(path);
                    then.status(200).json_body(json!([]));
                })
                .await,
        );
    }
    mocks
}

fn sample_customer(id: &str) -> Customer {
    serde_json::from_value(json!({
        "Customer_ID": id,
        "First_Name": "Jack",
        "Last_Name": null,
        "Phone_No": null,
        "City": "Tacoma",
        "Date_of_Birth": "1990-01-01",
        "Age": 36
    }))
    .unwrap()
}

fn sample_subscription(id: &str) -> Subscription {
    serde_json::from_value(json!({
        "Subscription_Id": id,
        "Start_Date": "2026-08-01",
        "End_Date": "2027-08-01",
        "Customer_Id": "C101",
        "Package_Id": "P001",
        "Status": "ACTIVE"
    }))
    .unwrap()
}

#[tokio::test]
async fn bulk_load_populates_all_collections_in_server_order() {
    let server = MockServer::start_async().await;
    for path in COLLECTION_PATHS {
        if path == "/api/customers" {
            continue;
        }
        server
            .mock_async(|when, then| {
                when.method(GET).path(path);
                then.status(200).json_body(json!([]));
            })
            .await;
    }
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/customers");
            then.status(200).json_body(json!([
                { "Customer_ID": "C103", "First_Name": "Zed", "Last_Name": null,
                  "Phone_No": null, "City": null, "Date_of_Birth": null, "Age": null },
                { "Customer_ID": "C101", "First_Name": "Amy", "Last_Name": null,
                  "Phone_No": null, "City": null, "Date_of_Birth": null, "Age": 30 }
            ]));
        })
        .await;

    let mut dashboard = Dashboard::new(client_for(&server));
    dashboard.load_all().await.unwrap();

    // Server order is authoritative: the client must not re-sort.
    let ids: Vec<_> = dashboard
        .collections
        .customers
        .iter()
        .map(|c| c.customer_id.as_str())
        .collect();
    assert_eq!(ids, vec!["C103", "C101"]);
}

#[tokio::test]
async fn bulk_load_is_all_or_nothing() {
    let server = MockServer::start_async().await;
    for path in COLLECTION_PATHS {
        if path == "/api/subscriptions" {
            continue;
        }
        server
            .mock_async(|when, then| {
                when.method(GET).path(path);
                then.status(200).json_body(json!([
                    // Non-empty payloads would be dropped on failure anyway;
                    // an empty array keeps the fixture honest per entity type.
                ]));
            })
            .await;
    }
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/subscriptions");
            then.status(500)
                .json_body(json!({ "error": "Lost connection to MySQL server" }));
        })
        .await;

    let mut dashboard = Dashboard::new(client_for(&server));
    let err = dashboard.load_all().await.unwrap_err();

    match err {
        ApiError::Gateway { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Lost connection to MySQL server");
        }
        other => panic!("expected gateway error, got {other:?}"),
    }
    // No partial state survives a failed load.
    assert!(dashboard.collections.customers.is_empty());
    assert!(dashboard.collections.packages.is_empty());
}

#[tokio::test]
async fn successful_submit_closes_modal_and_refreshes_everything() {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/employees")
                .json_body_partial(r#"{ "Employee_Id": "E005", "Name": "John Smith" }"#);
            then.status(200).json_body(json!({ "message": "Employee added!" }));
        })
        .await;
    let collection_mocks = mock_empty_collections(&server).await;

    let mut dashboard = Dashboard::new(client_for(&server));
    dashboard.open_modal(ModalKind::AddEmployee);
    dashboard.set_field("Employee_Id", "E005");
    dashboard.set_field("Name", "John Smith");
    dashboard.submit_modal().await.unwrap();

    assert!(dashboard.modal.is_none());
    create.assert_async().await;
    for mock in &collection_mocks {
        assert_eq!(mock.hits_async().await, 1, "every collection re-fetched");
    }
}

#[tokio::test]
async fn failed_submit_surfaces_error_and_keeps_modal_open() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/installations");
            then.status(500).json_body(json!({
                "error": "Employee does not exist. Cannot schedule installation.",
                "kind": "data_access"
            }));
        })
        .await;
    let collection_mocks = mock_empty_collections(&server).await;

    let mut dashboard = Dashboard::new(client_for(&server));
    dashboard.open_modal(ModalKind::AddInstallation);
    dashboard.set_field("Installation_Id", "I003");
    dashboard.set_field("Employee_Id", "E999");
    dashboard.set_field("Customer_Id", "C101");

    let err = dashboard.submit_modal().await.unwrap_err();
    match err {
        ApiError::Gateway { message, .. } => {
            // The trigger's message passes through verbatim.
            assert!(message.contains("Employee does not exist"));
        }
        other => panic!("expected gateway error, got {other:?}"),
    }
    assert!(dashboard.modal.is_some(), "modal stays open for manual retry");
    for mock in &collection_mocks {
        assert_eq!(mock.hits_async().await, 0, "no refresh after a failure");
    }
}

#[tokio::test]
async fn channels_by_city_keeps_modal_open_and_skips_refresh() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/procedures/channels-by-city");
            then.status(200).json_body(json!({
                "results": [ { "Channel_Id": "CH05", "Name": "Discovery Channel" } ]
            }));
        })
        .await;
    let collection_mocks = mock_empty_collections(&server).await;

    let mut dashboard = Dashboard::new(client_for(&server));
    dashboard.open_modal(ModalKind::ChannelsByCity);
    dashboard.set_field("category", "Documentary");
    dashboard.set_field("city", "Seattle");
    dashboard.submit_modal().await.unwrap();

    assert!(dashboard.modal.is_some(), "lookup modal stays open");
    let results = dashboard.procedure_results.as_ref().unwrap();
    assert_eq!(results[0]["Channel_Id"], "CH05");
    for mock in &collection_mocks {
        assert_eq!(mock.hits_async().await, 0, "read-only lookup never refreshes");
    }
}

#[tokio::test]
async fn record_payment_stores_results_and_refreshes() {
    let server = MockServer::start_async().await;
    let call = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/procedures/record-payment")
                .json_body_partial(r#"{ "billing_id": "B604", "amount": 79.99 }"#);
            then.status(200).json_body(json!({
                "message": "Payment recorded via stored procedure.",
                "results": [ { "Billing_Id": "B604", "Amount": "79.99" } ]
            }));
        })
        .await;
    let collection_mocks = mock_empty_collections(&server).await;

    let mut dashboard = Dashboard::new(client_for(&server));
    dashboard.open_modal(ModalKind::RecordNewPayment);
    dashboard.set_field("billing_id", "B604");
    dashboard.set_field("customer_id", "C101");
    dashboard.set_field("amount", "79.99");
    dashboard.set_field("discount", "0");
    dashboard.submit_modal().await.unwrap();

    call.assert_async().await;
    assert!(dashboard.modal.is_none());
    assert_eq!(
        dashboard.procedure_results.as_ref().unwrap()[0]["Billing_Id"],
        "B604"
    );
    for mock in &collection_mocks {
        assert_eq!(mock.hits_async().await, 1);
    }
}

#[tokio::test]
async fn delete_refreshes_all_collections() {
    let server = MockServer::start_async().await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/customers/C105");
            then.status(200).json_body(json!({ "message": "Customer deleted!" }));
        })
        .await;
    let collection_mocks = mock_empty_collections(&server).await;

    let mut dashboard = Dashboard::new(client_for(&server));
    dashboard
        .delete_record(DeleteTarget::Customer, "C105")
        .await
        .unwrap();

    delete.assert_async().await;
    for mock in &collection_mocks {
        assert_eq!(mock.hits_async().await, 1);
    }
}

#[tokio::test]
async fn blocked_delete_surfaces_foreign_key_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/employees/E002");
            then.status(500).json_body(json!({
                "error": "Cannot delete or update a parent row: a foreign key constraint fails",
                "kind": "constraint_violation"
            }));
        })
        .await;

    let mut dashboard = Dashboard::new(client_for(&server));
    let err = dashboard
        .delete_record(DeleteTarget::Employee, "E002")
        .await
        .unwrap_err();
    match err {
        ApiError::Gateway { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("foreign key constraint fails"));
        }
        other => panic!("expected gateway error, got {other:?}"),
    }
}

#[tokio::test]
async fn per_row_polling_is_bounded_and_isolates_failures() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/functions/has-active-installation/C101");
            then.status(200).json_body(json!({ "installed": 1 }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/functions/has-active-installation/C102");
            then.status(500)
                .json_body(json!({ "error": "Lost connection to MySQL server" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/functions/has-active-installation/C103");
            then.status(200).json_body(json!({ "installed": 0 }));
        })
        .await;
    let fourth = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/functions/has-active-installation/C104");
            then.status(200).json_body(json!({ "installed": 1 }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/functions/subscription-status/S501");
            then.status(200).json_body(json!({ "status": "ACTIVE" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/functions/subscription-status/S502");
            then.status(500)
                .json_body(json!({ "error": "Lost connection to MySQL server" }));
        })
        .await;

    let mut dashboard = Dashboard::new(client_for(&server));
    dashboard.collections.customers = vec![
        sample_customer("C101"),
        sample_customer("C102"),
        sample_customer("C103"),
        sample_customer("C104"),
    ];
    dashboard.collections.subscriptions =
        vec![sample_subscription("S501"), sample_subscription("S502")];

    dashboard.poll_demo_statuses().await;

    assert_eq!(
        dashboard.install_statuses,
        vec![
            ("C101".to_string(), "1".to_string()),
            ("C102".to_string(), "ERROR".to_string()),
            ("C103".to_string(), "0".to_string()),
        ]
    );
    assert_eq!(
        dashboard.subscription_statuses,
        vec![
            ("S501".to_string(), "ACTIVE".to_string()),
            ("S502".to_string(), "ERROR".to_string()),
        ]
    );
    // Fan-out is bounded to the demo subset.
    assert_eq!(fourth.hits_async().await, 0);
}
