//! `StoreClient` and `HttpImageSource` against a local mock store.

mod common;

use common::mock_backend::{MockResponse, MockStore};
use common::{api_config, free_port, product, products_json};
use fakestore::catalog::{CatalogApi, CatalogError, Resource, StoreClient};
use fakestore::images::{HttpImageSource, ImageError, ImageSource};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 200, 30, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    image
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("Failed to encode png");
    out.into_inner()
}

#[tokio::test]
async fn all_products_decodes_body_in_order() {
    let store = MockStore::start().await;
    let products = vec![product(2, "electronics"), product(1, "jewelery")];
    store
        .route("/products", MockResponse::json(&products_json(&products)))
        .await;

    let client = StoreClient::new(&api_config(&store.base_url())).unwrap();
    let fetched = client.all_products().await.unwrap();

    assert_eq!(fetched, products);
    let requests = store.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/products");
}

#[tokio::test]
async fn categories_are_plain_strings() {
    let store = MockStore::start().await;
    store
        .route(
            "/products/categories",
            MockResponse::json(r#"["electronics","jewelery","men's clothing"]"#),
        )
        .await;

    let client = StoreClient::new(&api_config(&store.base_url())).unwrap();
    let categories = client.categories().await.unwrap();
    assert_eq!(categories, vec!["electronics", "jewelery", "men's clothing"]);
}

#[tokio::test]
async fn unknown_fields_are_ignored() {
    let store = MockStore::start().await;
    store
        .route(
            "/products",
            MockResponse::json(
                r#"[{"id":1,"title":"Backpack","price":109.95,"description":"d",
                     "category":"men's clothing","image":"https://img/1.jpg",
                     "rating":{"rate":3.9,"count":120}}]"#,
            ),
        )
        .await;

    let client = StoreClient::new(&api_config(&store.base_url())).unwrap();
    let products = client.all_products().await.unwrap();
    assert_eq!(products[0].title, "Backpack");
    assert_eq!(products[0].display_price(), "$109.95");
}

#[tokio::test]
async fn category_with_space_stays_one_segment() {
    let store = MockStore::start().await;
    let client = StoreClient::new(&api_config(&store.base_url())).unwrap();

    let products = client.products_in("men's clothing").await.unwrap();
    assert!(products.is_empty());

    let requests = store.captured_requests().await;
    assert_eq!(requests[0].path, "/products/category/men's%20clothing");
}

#[tokio::test]
async fn base_path_prefix_is_kept() {
    let store = MockStore::start().await;
    let base = format!("{}api/v1/", store.base_url());
    let client = StoreClient::new(&api_config(&base)).unwrap();

    client.categories().await.unwrap();
    let requests = store.captured_requests().await;
    assert_eq!(requests[0].path, "/api/v1/products/categories");
}

#[tokio::test]
async fn error_status_maps_to_request_failed() {
    let store = MockStore::start().await;
    store
        .route("/products/categories", MockResponse::error(500, "boom"))
        .await;

    let client = StoreClient::new(&api_config(&store.base_url())).unwrap();
    let err = client.categories().await.unwrap_err();

    assert!(matches!(
        err,
        CatalogError::RequestFailed { status: 500, .. }
    ));
    assert_eq!(
        err.user_message(Resource::Categories),
        "Failed to load categories"
    );
}

#[tokio::test]
async fn malformed_body_is_a_transport_error() {
    let store = MockStore::start().await;
    store
        .route("/products", MockResponse::json(r#"{"not":"a list"}"#))
        .await;

    let client = StoreClient::new(&api_config(&store.base_url())).unwrap();
    let err = client.all_products().await.unwrap_err();

    assert!(matches!(err, CatalogError::Transport { .. }));
    let message = err.user_message(Resource::Products);
    assert!(message.starts_with("Network error: unexpected response body ("));
    // The decoder's own explanation is carried through
    assert!(message.contains("expected a sequence"), "{message}");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let base = format!("http://127.0.0.1:{}/", free_port());
    let client = StoreClient::new(&api_config(&base)).unwrap();

    let err = client.all_products().await.unwrap_err();
    assert!(matches!(err, CatalogError::Transport { .. }));
    let message = err.user_message(Resource::Products);
    assert!(message.starts_with("Network error: "), "{message}");
    assert!(message.ends_with(')'));
}

#[tokio::test]
async fn slow_server_times_out() {
    let store = MockStore::start().await;
    store
        .route("/products", MockResponse::json("[]").with_delay(3_000))
        .await;

    let mut config = api_config(&store.base_url());
    config.timeout_seconds = 1;
    let client = StoreClient::new(&config).unwrap();

    let err = client.all_products().await.unwrap_err();
    assert!(err
        .user_message(Resource::Products)
        .starts_with("Network error: request timed out ("));
}

#[tokio::test]
async fn image_source_decodes_png() {
    let store = MockStore::start().await;
    store
        .route("/img/1.png", MockResponse::bytes("image/png", png_bytes(4, 2)))
        .await;

    let source = HttpImageSource::new(&api_config(&store.base_url())).unwrap();
    let url = format!("{}img/1.png", store.base_url());
    let thumbnail = source.load(&url).await.unwrap();

    assert_eq!((thumbnail.width(), thumbnail.height()), (4, 2));
}

#[tokio::test]
async fn image_source_reports_status_and_garbage() {
    let store = MockStore::start().await;
    store
        .route("/img/missing.jpg", MockResponse::error(404, "not found"))
        .await;
    store
        .route(
            "/img/garbage.jpg",
            MockResponse::bytes("image/jpeg", b"definitely not a jpeg".to_vec()),
        )
        .await;

    let source = HttpImageSource::new(&api_config(&store.base_url())).unwrap();

    let missing = source
        .load(&format!("{}img/missing.jpg", store.base_url()))
        .await
        .unwrap_err();
    assert!(matches!(missing, ImageError::Status { status: 404, .. }));

    let garbage = source
        .load(&format!("{}img/garbage.jpg", store.base_url()))
        .await
        .unwrap_err();
    assert!(matches!(garbage, ImageError::Decode(_)));
}
