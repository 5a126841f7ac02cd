//! Integration tests for the gRPC service.
//!
//! Starts an in-process vegd server on an ephemeral port and drives all
//! four RPC shapes through a [`ServiceClient`], validating the full
//! round-trip through proto conversions.

use std::sync::Arc;
use std::time::Duration;

use futures_util::{StreamExt, stream};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

use vegvisir::client::ServiceClient;
use vegvisir::server::VegvisirService;
use vegvisir::server::proto::vegvisir_server::VegvisirServer;
use vegvisir::{Feature, FeatureStore, Point, RecommendationRequest, Rectangle, geo};

fn point_a() -> Point {
    Point::new(310_020_000, 123_440_000)
}

fn point_b() -> Point {
    Point::new(310_022_514, 123_440_410)
}

fn point_c() -> Point {
    Point::new(151_421_410, 151_454_241)
}

fn abc_store() -> FeatureStore {
    FeatureStore::new(vec![
        Feature::new("A", point_a()),
        Feature::new("B", point_b()),
        Feature::new("C", point_c()),
    ])
}

/// Start a test server over `service` and return its address string.
async fn start_test_server(service: VegvisirService) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        Server::builder()
            .add_service(VegvisirServer::new(service))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    format!("http://{addr}")
}

async fn connect_abc() -> ServiceClient {
    let addr = start_test_server(VegvisirService::new(Arc::new(abc_store()))).await;
    ServiceClient::connect(&addr).await.unwrap()
}

#[tokio::test]
async fn client_connects() {
    let addr = start_test_server(VegvisirService::new(Arc::new(abc_store()))).await;
    let client = ServiceClient::connect(&addr).await;
    assert!(client.is_ok(), "failed to connect: {:?}", client.err());
}

#[tokio::test]
async fn get_feature_exact_hit() {
    let client = connect_abc().await;
    let feature = client.get_feature(point_a()).await.unwrap();
    assert!(feature.is_present());
    assert_eq!(feature.name, "A");
    assert_eq!(feature.location, point_a());
}

#[tokio::test]
async fn get_feature_miss_returns_sentinel() {
    let client = connect_abc().await;
    let feature = client.get_feature(Point::new(0, 0)).await.unwrap();
    assert!(!feature.is_present());
    assert_eq!(feature.location, Point::new(0, 0));
}

#[tokio::test]
async fn list_features_whole_space_in_store_order() {
    let client = connect_abc().await;
    let mut features = client.list_features(Rectangle::everywhere()).await.unwrap();

    let mut names = Vec::new();
    while let Some(feature) = features.next().await {
        names.push(feature.unwrap().name);
    }
    assert_eq!(names, ["A", "B", "C"]);
}

#[tokio::test]
async fn list_features_filters_and_normalizes_corners() {
    let client = connect_abc().await;
    // Corners deliberately swapped: hi below/left of lo. Covers A and B
    // but not C.
    let rect = Rectangle::new(
        Point::new(310_030_000, 123_450_000),
        Point::new(310_010_000, 123_430_000),
    );
    let mut features = client.list_features(rect).await.unwrap();

    let mut names = Vec::new();
    while let Some(feature) = features.next().await {
        names.push(feature.unwrap().name);
    }
    assert_eq!(names, ["A", "B"]);
}

#[tokio::test]
async fn list_features_paced_still_delivers_everything() {
    let service = VegvisirService::new(Arc::new(abc_store()))
        .with_pace(Duration::from_millis(10));
    let addr = start_test_server(service).await;
    let client = ServiceClient::connect(&addr).await.unwrap();

    let features = client.list_features(Rectangle::everywhere()).await.unwrap();
    let count = features.filter(|item| std::future::ready(item.is_ok())).count().await;
    assert_eq!(count, 3);
}

#[tokio::test]
async fn record_route_empty_stream() {
    let client = connect_abc().await;
    let summary = client
        .record_route(stream::iter(Vec::<Point>::new()))
        .await
        .unwrap();
    assert_eq!(summary.point_count, 0);
    assert_eq!(summary.distance, 0);
    assert!(summary.elapsed_seconds >= 0);
}

#[tokio::test]
async fn record_route_single_point_has_no_distance() {
    let client = connect_abc().await;
    let summary = client
        .record_route(stream::iter(vec![point_a()]))
        .await
        .unwrap();
    assert_eq!(summary.point_count, 1);
    assert_eq!(summary.distance, 0);
}

#[tokio::test]
async fn record_route_sums_pairwise_legs() {
    let client = connect_abc().await;
    let summary = client
        .record_route(stream::iter(vec![point_a(), point_b(), point_c()]))
        .await
        .unwrap();
    assert_eq!(summary.point_count, 3);
    assert_eq!(
        summary.distance,
        geo::distance(point_a(), point_b()) + geo::distance(point_b(), point_c())
    );
}

#[tokio::test]
async fn recommend_nearest_at_feature_location() {
    let client = connect_abc().await;
    let mut session = client.recommend().await.unwrap();

    session
        .send(RecommendationRequest::nearest(point_b()))
        .await
        .unwrap();
    let feature = session.recv().await.unwrap().unwrap();
    assert_eq!(feature.name, "B");
}

#[tokio::test]
async fn recommend_replies_in_request_order() {
    let client = connect_abc().await;
    let session = client.recommend().await.unwrap();
    let (requests, responses) = session.into_parts();

    // Push every request before reading a single reply: send and receive
    // sides must progress independently.
    requests
        .send(RecommendationRequest::nearest(point_a()))
        .await
        .unwrap();
    requests
        .send(RecommendationRequest::farthest(point_a()))
        .await
        .unwrap();
    requests
        .send(RecommendationRequest::nearest(point_c()))
        .await
        .unwrap();
    drop(requests);

    let names: Vec<_> = responses
        .map(|item| item.unwrap().name)
        .collect()
        .await;
    assert_eq!(names, ["A", "C", "C"]);
}

#[tokio::test]
async fn recommend_session_ends_cleanly_on_sender_drop() {
    let client = connect_abc().await;
    let session = client.recommend().await.unwrap();
    let (requests, mut responses) = session.into_parts();

    requests
        .send(RecommendationRequest::farthest(point_a()))
        .await
        .unwrap();
    drop(requests);

    let first = responses.next().await.unwrap().unwrap();
    assert_eq!(first.name, "C");
    assert!(responses.next().await.is_none(), "stream should end after EOF");
}

#[tokio::test]
async fn recommend_empty_session_yields_no_replies() {
    let client = connect_abc().await;
    let session = client.recommend().await.unwrap();
    let (requests, mut responses) = session.into_parts();
    drop(requests);

    assert!(responses.next().await.is_none());
}

#[tokio::test]
async fn concurrent_sessions_share_the_store() {
    let client = connect_abc().await;

    let lookup = client.get_feature(point_a());
    let listing = client.list_features(Rectangle::everywhere());
    let (feature, features) = tokio::join!(lookup, listing);

    assert_eq!(feature.unwrap().name, "A");
    let count = features
        .unwrap()
        .filter(|item| std::future::ready(item.is_ok()))
        .count()
        .await;
    assert_eq!(count, 3);
}
