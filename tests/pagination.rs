use axum_starwars_api::routes::params::Pagination;

#[test]
fn defaults_apply_when_unset() {
    let p = Pagination {
        page: None,
        per_page: None,
    };
    assert_eq!(p.normalize(), (1, 20, 0));
}

#[test]
fn page_and_per_page_are_clamped() {
    let p = Pagination {
        page: Some(0),
        per_page: Some(1000),
    };
    assert_eq!(p.normalize(), (1, 100, 0));
}

#[test]
fn offset_follows_page() {
    let p = Pagination {
        page: Some(3),
        per_page: Some(10),
    };
    assert_eq!(p.normalize(), (3, 10, 20));
}
