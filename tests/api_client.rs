//! HTTP client behavior against a mock inventory server.

mod common;

use chrono::NaiveDate;
use common::mock_backend::{MockBackend, MockResponse};
use common::{free_port, DEVICE_JSON};
use medtrack::api::{ApiClient, ApiError, DeviceQuery, RecordQuery};
use medtrack::domain::{
    DeviceId, DevicePayload, DeviceStatus, DeviceType, DocumentId, DocumentPayload, DocumentType,
    MaintenanceId, MaintenancePayload, MaintenanceType,
};

const MAINTENANCE_JSON: &str = r#"{"id": 3, "device": 7, "maintenance_type": "CALIBRATION",
    "maintenance_date": "2024-05-02", "performed_by": "Biomed", "description": "Flow check",
    "cost": "85.00", "next_maintenance_due": "2024-11-02"}"#;

const DOCUMENT_JSON: &str = r#"{"id": 5, "device": 7, "document_type": "WARRANTY",
    "title": "Warranty card", "file_path": "https://files.example/w.pdf",
    "upload_date": "2024-05-03T10:00:00Z", "description": ""}"#;

fn maintenance_payload() -> MaintenancePayload {
    MaintenancePayload {
        device: DeviceId(7),
        maintenance_type: MaintenanceType::Calibration,
        maintenance_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        performed_by: "Biomed".into(),
        description: "Flow check".into(),
        cost: Some(85.0),
        next_maintenance_due: None,
    }
}

fn document_payload() -> DocumentPayload {
    DocumentPayload {
        device: DeviceId(7),
        document_type: DocumentType::Warranty,
        title: "Warranty card".into(),
        file_path: "https://files.example/w.pdf".into(),
        description: String::new(),
    }
}

fn payload() -> DevicePayload {
    DevicePayload {
        name: "Ventilator A".into(),
        device_type: DeviceType::Ventilator,
        manufacturer: "Draeger".into(),
        model_number: String::new(),
        serial_number: "VT-0007".into(),
        location: String::new(),
        status: DeviceStatus::Available,
        acquisition_date: None,
        warranty_expiration: None,
        last_maintenance_date: None,
        next_maintenance_date: None,
        description: String::new(),
        purchase_price: Some(1200.5),
    }
}

#[tokio::test]
async fn test_list_devices_sends_filters_as_query() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"count": 0, "results": []}"#))
        .await;
    let client = ApiClient::new(&backend.base_url()).unwrap();

    let query = DeviceQuery {
        page: 2,
        status: Some(DeviceStatus::InMaintenance),
        device_type: Some(DeviceType::Mri),
        search: Some("icu".into()),
    };
    client.list_devices(&query).await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/devices/");
    assert_eq!(
        requests[0].query.as_deref(),
        Some("page=2&status=IN_MAINTENANCE&device_type=MRI&search=icu")
    );
}

#[tokio::test]
async fn test_list_devices_accepts_both_shapes() {
    let backend = MockBackend::start().await;
    let item = r#"{"id": 1, "name": "Pump", "device_type": "INFUSION_PUMP", "serial_number": "P-1"}"#;
    backend
        .enqueue_response(MockResponse::json(&format!("[{item}]")))
        .await;
    backend
        .enqueue_response(MockResponse::json(&format!(
            r#"{{"count": 23, "next": null, "previous": null, "results": [{item}]}}"#
        )))
        .await;
    let client = ApiClient::new(&backend.base_url()).unwrap();

    let bare = client.list_devices(&DeviceQuery::default()).await.unwrap();
    assert_eq!(bare.items.len(), 1);
    assert_eq!(bare.total_pages(), None);

    let paged = client.list_devices(&DeviceQuery::default()).await.unwrap();
    assert_eq!(paged.items[0].device_type, DeviceType::InfusionPump);
    assert_eq!(paged.total_pages(), Some(3));
}

#[tokio::test]
async fn test_get_device_decodes_string_decimals() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::json(DEVICE_JSON)).await;
    let client = ApiClient::new(&backend.base_url()).unwrap();

    let device = client.get_device(DeviceId(7)).await.unwrap();
    assert_eq!(device.purchase_price, Some(15999.9));
    assert_eq!(device.status, DeviceStatus::InUse);

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/api/devices/7/");
}

#[tokio::test]
async fn test_create_device_posts_null_for_missing_dates() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::status(201, DEVICE_JSON))
        .await;
    let client = ApiClient::new(&backend.base_url()).unwrap();

    client.create_device(&payload()).await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    let body = requests[0].json();
    assert_eq!(body["device_type"], "VENTILATOR");
    assert_eq!(body["status"], "AVAILABLE");
    assert!(body["acquisition_date"].is_null());
    assert_eq!(body["purchase_price"], 1200.5);
}

#[tokio::test]
async fn test_update_and_delete_use_device_path() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::json(DEVICE_JSON)).await;
    backend.enqueue_response(MockResponse::no_content()).await;
    let client = ApiClient::new(&backend.base_url()).unwrap();

    client.update_device(DeviceId(7), &payload()).await.unwrap();
    client.delete_device(DeviceId(7)).await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/api/devices/7/");
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(requests[1].path, "/api/devices/7/");
}

#[tokio::test]
async fn test_validation_rejection_carries_field_errors() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::status(
            400,
            r#"{"serial_number": ["device with this serial number already exists."]}"#,
        ))
        .await;
    let client = ApiClient::new(&backend.base_url()).unwrap();

    let err = client.create_device(&payload()).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    let errors = err.field_errors().unwrap();
    assert_eq!(
        errors["serial_number"],
        "device with this serial number already exists."
    );
}

#[tokio::test]
async fn test_server_error_without_json_has_no_payload() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::status(500, "Internal Server Error"))
        .await;
    let client = ApiClient::new(&backend.base_url()).unwrap();

    let err = client.device_statistics().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.payload().is_none());
    assert!(err.field_errors().is_none());
}

#[tokio::test]
async fn test_refused_connection_is_network_error() {
    let client = ApiClient::new(&format!("http://127.0.0.1:{}/api", free_port())).unwrap();

    let err = client.device_statistics().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.status(), None);
    assert_eq!(err.user_message(), "Server unreachable");
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"unexpected": true}"#))
        .await;
    let client = ApiClient::new(&backend.base_url()).unwrap();

    let err = client.get_device(DeviceId(1)).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_maintenance_list_filters_by_device() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"[{"id": 3, "device": 7, "maintenance_type": "PREVENTIVE",
                 "maintenance_date": "2024-05-02", "performed_by": "Biomed",
                 "description": "Filter swap", "cost": "85.00"}]"#,
        ))
        .await;
    let client = ApiClient::new(&backend.base_url()).unwrap();

    let page = client
        .list_maintenance(&RecordQuery::for_device(DeviceId(7)))
        .await
        .unwrap();
    assert_eq!(page.items[0].maintenance_type, MaintenanceType::Preventive);
    assert_eq!(page.items[0].cost, Some(85.0));

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/api/maintenance/");
    assert_eq!(requests[0].query.as_deref(), Some("device=7"));
}

#[tokio::test]
async fn test_get_maintenance_uses_record_path() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::json(MAINTENANCE_JSON)).await;
    let client = ApiClient::new(&backend.base_url()).unwrap();

    let record = client.get_maintenance(MaintenanceId(3)).await.unwrap();
    assert_eq!(record.id, MaintenanceId(3));
    assert_eq!(record.maintenance_type, MaintenanceType::Calibration);
    assert_eq!(record.cost, Some(85.0));
    assert_eq!(record.next_maintenance_due, NaiveDate::from_ymd_opt(2024, 11, 2));

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/maintenance/3/");
}

#[tokio::test]
async fn test_create_maintenance_posts_payload() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::status(201, MAINTENANCE_JSON))
        .await;
    let client = ApiClient::new(&backend.base_url()).unwrap();

    let created = client
        .create_maintenance(&maintenance_payload())
        .await
        .unwrap();
    assert_eq!(created.id, MaintenanceId(3));

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/maintenance/");
    let body = requests[0].json();
    assert_eq!(body["device"], 7);
    assert_eq!(body["maintenance_type"], "CALIBRATION");
    assert_eq!(body["maintenance_date"], "2024-05-02");
    assert_eq!(body["performed_by"], "Biomed");
    assert_eq!(body["cost"], 85.0);
    assert!(body["next_maintenance_due"].is_null());
}

#[tokio::test]
async fn test_update_and_delete_use_maintenance_path() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::json(MAINTENANCE_JSON)).await;
    backend.enqueue_response(MockResponse::no_content()).await;
    let client = ApiClient::new(&backend.base_url()).unwrap();

    client
        .update_maintenance(MaintenanceId(3), &maintenance_payload())
        .await
        .unwrap();
    let deleted = client.delete_maintenance(MaintenanceId(3)).await;
    assert!(matches!(deleted, Ok(())));

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/api/maintenance/3/");
    assert_eq!(requests[0].json()["description"], "Flow check");
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(requests[1].path, "/api/maintenance/3/");
    assert!(requests[1].body.is_empty());
}

#[tokio::test]
async fn test_document_list_filters_by_device() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(&format!(
            r#"{{"count": 1, "results": [{DOCUMENT_JSON}]}}"#
        )))
        .await;
    let client = ApiClient::new(&backend.base_url()).unwrap();

    let page = client
        .list_documents(&RecordQuery::for_device(DeviceId(7)))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].document_type, DocumentType::Warranty);
    assert_eq!(page.items[0].device, Some(DeviceId(7)));

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/documents/");
    assert_eq!(requests[0].query.as_deref(), Some("device=7"));
}

#[tokio::test]
async fn test_get_and_create_document() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::json(DOCUMENT_JSON)).await;
    backend
        .enqueue_response(MockResponse::status(201, DOCUMENT_JSON))
        .await;
    let client = ApiClient::new(&backend.base_url()).unwrap();

    let fetched = client.get_document(DocumentId(5)).await.unwrap();
    assert_eq!(fetched.title, "Warranty card");
    assert!(fetched.upload_date.is_some());
    let created = client.create_document(&document_payload()).await.unwrap();
    assert_eq!(created.id, DocumentId(5));

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/documents/5/");
    assert_eq!(requests[1].method, "POST");
    assert_eq!(requests[1].path, "/api/documents/");
    let body = requests[1].json();
    assert_eq!(body["device"], 7);
    assert_eq!(body["document_type"], "WARRANTY");
    assert_eq!(body["title"], "Warranty card");
    assert_eq!(body["file_path"], "https://files.example/w.pdf");
}

#[tokio::test]
async fn test_update_and_delete_use_document_path() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::json(DOCUMENT_JSON)).await;
    backend.enqueue_response(MockResponse::no_content()).await;
    let client = ApiClient::new(&backend.base_url()).unwrap();

    client
        .update_document(DocumentId(5), &document_payload())
        .await
        .unwrap();
    let deleted = client.delete_document(DocumentId(5)).await;
    assert!(matches!(deleted, Ok(())));

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/api/documents/5/");
    assert_eq!(requests[0].json()["document_type"], "WARRANTY");
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(requests[1].path, "/api/documents/5/");
}
