use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use parking_control_api::{
    handlers, repository::InMemoryParkingSpotRepository, service::ParkingSpotService,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn setup() -> Router {
    let repository = Arc::new(InMemoryParkingSpotRepository::new());
    handlers::app(ParkingSpotService::new(repository))
}

async fn call(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let body = match body {
        Some(v) => Body::from(serde_json::to_string(&v).unwrap()),
        None => Body::empty(),
    };
    let req = builder.body(body).unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        json!(null)
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}

fn spot_json(number: &str, plate: &str, apartment: &str, block: &str) -> Value {
    json!({
        "parkingSpotNumber": number,
        "licensePlateCar": plate,
        "brandCar": "Fiat",
        "modelCar": "Uno",
        "colorCar": "Red",
        "responsibleName": "Maria",
        "apartment": apartment,
        "block": block
    })
}

#[tokio::test]
async fn test_full_lifecycle_scenario() {
    let r = setup();

    let (status, a) = call(&r, "POST", "/parking-spot", Some(spot_json("10", "ABC123", "5", "B"))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = a["id"].as_str().unwrap().to_string();
    let registration_date = a["registrationDate"].clone();
    assert!(registration_date.is_string());

    let (status, body) = call(&r, "POST", "/parking-spot", Some(spot_json("11", "ABC123", "6", "C"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, "Licence Place Car in use!");

    let (status, fetched) = call(&r, "GET", &format!("/parking-spot/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, a);

    let (status, updated) = call(
        &r,
        "PUT",
        &format!("/parking-spot/{}", id),
        Some(spot_json("10", "ABC123", "6", "B")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], a["id"]);
    assert_eq!(updated["registrationDate"], registration_date);
    assert_eq!(updated["apartment"], "6");

    let (status, body) = call(&r, "DELETE", &format!("/parking-spot/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Parking Spot deleted successfully!");

    let (status, body) = call(&r, "GET", &format!("/parking-spot/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Parking Spot not found!");
}

#[tokio::test]
async fn test_create_conflicts_are_reported_in_check_order() {
    let r = setup();
    call(&r, "POST", "/parking-spot", Some(spot_json("10", "ABC123", "5", "B"))).await;

    let (status, body) = call(&r, "POST", "/parking-spot", Some(spot_json("10", "XYZ999", "5", "B"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, "Parking Spot Number in use!");

    let (status, body) = call(&r, "POST", "/parking-spot", Some(spot_json("11", "XYZ999", "5", "B"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, "Apartment and Block in use!");

    let (_, page) = call(&r, "GET", "/parking-spot", None).await;
    assert_eq!(page["totalElements"], 1);
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id_and_date() {
    let r = setup();
    let mut payload = spot_json("10", "ABC123", "5", "B");
    payload["id"] = json!("00000000-0000-0000-0000-000000000001");
    payload["registrationDate"] = json!("1999-01-01T00:00:00Z");

    let (status, body) = call(&r, "POST", "/parking-spot", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(body["id"], "00000000-0000-0000-0000-000000000001");
    assert!(!body["registrationDate"].as_str().unwrap().starts_with("1999"));
}

#[tokio::test]
async fn test_blank_field_is_rejected_before_checks() {
    let r = setup();
    let (status, body) = call(&r, "POST", "/parking-spot", Some(spot_json("10", "  ", "5", "B"))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("license_plate_car"));
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let r = setup();
    let mut payload = spot_json("10", "ABC123", "5", "B");
    payload.as_object_mut().unwrap().remove("block");

    let (status, _) = call(&r, "POST", "/parking-spot", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unknown_id_returns_not_found() {
    let r = setup();
    let uri = "/parking-spot/7f1d2a9e-4a43-4b9a-9d6e-5f2d8c1f0a11";

    let (status, body) = call(&r, "PUT", uri, Some(spot_json("10", "ABC123", "5", "B"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Parking Spot not found!");

    let (status, body) = call(&r, "DELETE", uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Parking Spot not found!");
}

#[tokio::test]
async fn test_malformed_id_is_a_client_error() {
    let r = setup();
    let (status, _) = call(&r, "GET", "/parking-spot/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_defaults_and_pagination() {
    let r = setup();
    for i in 0..12 {
        let (status, _) = call(
            &r,
            "POST",
            "/parking-spot",
            Some(spot_json(&i.to_string(), &format!("P{:03}", i), &format!("{:02}", i), "A")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, page) = call(&r, "GET", "/parking-spot", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["content"].as_array().unwrap().len(), 10);
    assert_eq!(page["content"][0]["apartment"], "11");
    assert_eq!(page["number"], 0);
    assert_eq!(page["size"], 10);
    assert_eq!(page["totalElements"], 12);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["first"], true);
    assert_eq!(page["last"], false);

    let (_, page) = call(&r, "GET", "/parking-spot?page=1&size=5&sort=apartment,asc", None).await;
    let apartments: Vec<&str> = page["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["apartment"].as_str().unwrap())
        .collect();
    assert_eq!(apartments, vec!["05", "06", "07", "08", "09"]);

    let (_, page) = call(&r, "GET", "/parking-spot?page=2&size=5&sort=parkingSpotNumber,desc", None).await;
    assert_eq!(page["numberOfElements"], 2);
    assert_eq!(page["last"], true);
}

#[tokio::test]
async fn test_list_sort_without_direction_is_ascending() {
    let r = setup();
    for (i, block) in ["A", "C", "B"].iter().enumerate() {
        call(&r, "POST", "/parking-spot", Some(spot_json(&i.to_string(), &format!("P{}", i), "1", block))).await;
    }

    let (status, page) = call(&r, "GET", "/parking-spot?sort=block", None).await;
    assert_eq!(status, StatusCode::OK);
    let blocks: Vec<&str> = page["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["block"].as_str().unwrap())
        .collect();
    assert_eq!(blocks, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_list_accepts_repeated_sort_params() {
    let r = setup();
    for (number, block) in [("2", "B"), ("1", "A"), ("3", "B"), ("4", "A")] {
        call(&r, "POST", "/parking-spot", Some(spot_json(number, &format!("P{}", number), number, block))).await;
    }

    let (status, page) = call(&r, "GET", "/parking-spot?sort=block,asc&sort=parkingSpotNumber,desc", None).await;
    assert_eq!(status, StatusCode::OK);
    let numbers: Vec<&str> = page["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["parkingSpotNumber"].as_str().unwrap())
        .collect();
    assert_eq!(numbers, vec!["4", "1", "3", "2"]);
}

#[tokio::test]
async fn test_list_unparsable_page_and_size_use_defaults() {
    let r = setup();
    call(&r, "POST", "/parking-spot", Some(spot_json("10", "ABC123", "5", "B"))).await;

    let (status, page) = call(&r, "GET", "/parking-spot?page=abc&size=xyz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["number"], 0);
    assert_eq!(page["size"], 10);
    assert_eq!(page["totalElements"], 1);
}

#[tokio::test]
async fn test_list_rejects_unknown_sort_field() {
    let r = setup();
    let (status, body) = call(&r, "GET", "/parking-spot?sort=secret", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Unknown sort field: secret");
}

#[tokio::test]
async fn test_health_check_should_return_ok() {
    let r = setup();
    let (status, body) = call(&r, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
