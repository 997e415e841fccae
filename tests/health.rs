use axum_starwars_api::routes::health::health_check;

#[tokio::test]
async fn health_check_reports_ok_status() {
    let resp = health_check().await;
    assert_eq!(resp.0.message, "Health check");

    let data = resp.0.data.expect("health payload");
    assert_eq!(data.status, "ok");
    assert!(resp.0.meta.is_some());
}
