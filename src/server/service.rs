//! gRPC service implementation.
//!
//! One handler per RPC shape. The store is shared read-only across all
//! sessions, so handlers never lock. Streaming handlers move their producer
//! side onto a spawned task and hand tonic a bounded [`ReceiverStream`]:
//! the bounded channel suspends the producer when the consumer lags, and a
//! dropped consumer stops the producer via the failed send.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status, Streaming};
use tracing::{debug, info, warn};

use crate::geo;
use crate::store::FeatureStore;
use crate::telemetry;
use crate::types::{Feature, Point, RecommendationRequest, Rectangle, RouteSummary};

use super::proto;
use super::proto::vegvisir_server::Vegvisir;

/// Items buffered between a producer task and the transport.
const STREAM_BUFFER: usize = 4;

/// The Vegvisir location-advisory service.
pub struct VegvisirService {
    store: Arc<FeatureStore>,
    pace: Option<Duration>,
}

impl VegvisirService {
    /// Create a service over the given store, emitting streams eagerly.
    pub fn new(store: Arc<FeatureStore>) -> Self {
        Self { store, pace: None }
    }

    /// Delay each `ListFeatures` emission by `delay`, simulating a slow
    /// producer. Zero disables pacing.
    pub fn with_pace(mut self, delay: Duration) -> Self {
        self.pace = (!delay.is_zero()).then_some(delay);
        self
    }
}

/// Incremental fold over a stream of route points.
#[derive(Debug, Default)]
struct RouteRecorder {
    point_count: i32,
    distance: i32,
    prev: Option<Point>,
}

impl RouteRecorder {
    fn observe(&mut self, point: Point) {
        self.point_count += 1;
        if let Some(prev) = self.prev {
            self.distance += geo::distance(prev, point);
        }
        self.prev = Some(point);
    }

    fn summarize(self, elapsed: Duration) -> RouteSummary {
        RouteSummary {
            point_count: self.point_count,
            distance: self.distance,
            elapsed_seconds: elapsed.as_secs() as i32,
        }
    }
}

#[tonic::async_trait]
impl Vegvisir for VegvisirService {
    async fn get_feature(
        &self,
        request: Request<proto::Point>,
    ) -> Result<Response<proto::Feature>, Status> {
        let point = Point::from(request.into_inner());
        // A miss is a valid domain answer, not a fault: reply with the
        // empty-name sentinel at the queried location.
        let feature = self
            .store
            .get_by_location(point)
            .cloned()
            .unwrap_or_else(|| Feature::missing(point));
        debug!(%point, found = feature.is_present(), "get_feature");
        metrics::counter!(telemetry::REQUESTS_TOTAL, "method" => "get_feature", "status" => "ok")
            .increment(1);
        Ok(Response::new(feature.into()))
    }

    type ListFeaturesStream = ReceiverStream<Result<proto::Feature, Status>>;

    async fn list_features(
        &self,
        request: Request<proto::Rectangle>,
    ) -> Result<Response<Self::ListFeaturesStream>, Status> {
        let rect = Rectangle::from(request.into_inner());
        let store = Arc::clone(&self.store);
        let pace = self.pace;
        let (tx, rx) = mpsc::channel(STREAM_BUFFER);

        tokio::spawn(async move {
            for feature in store.iter() {
                if !geo::contains(feature.location, rect) {
                    continue;
                }
                if let Some(delay) = pace {
                    tokio::time::sleep(delay).await;
                }
                if tx.send(Ok(feature.clone().into())).await.is_err() {
                    // consumer dropped the stream
                    return;
                }
                metrics::counter!(telemetry::STREAM_MESSAGES_TOTAL,
                    "method" => "list_features", "direction" => "outbound")
                .increment(1);
            }
            metrics::counter!(telemetry::REQUESTS_TOTAL, "method" => "list_features", "status" => "ok")
                .increment(1);
        });

        debug!(?rect, "list_features stream opened");
        Ok(Response::new(ReceiverStream::new(rx)))
    }

    async fn record_route(
        &self,
        request: Request<Streaming<proto::Point>>,
    ) -> Result<Response<proto::RouteSummary>, Status> {
        let mut stream = request.into_inner();
        let start = Instant::now();
        let mut recorder = RouteRecorder::default();

        loop {
            match stream.message().await {
                Ok(Some(point)) => {
                    metrics::counter!(telemetry::STREAM_MESSAGES_TOTAL,
                        "method" => "record_route", "direction" => "inbound")
                    .increment(1);
                    recorder.observe(point.into());
                }
                Ok(None) => break,
                Err(status) => {
                    warn!(%status, "record_route receive failed");
                    metrics::counter!(telemetry::REQUESTS_TOTAL,
                        "method" => "record_route", "status" => "error")
                    .increment(1);
                    return Err(status);
                }
            }
        }

        let summary = recorder.summarize(start.elapsed());
        info!(
            points = summary.point_count,
            metres = summary.distance,
            seconds = summary.elapsed_seconds,
            "route recorded"
        );
        metrics::counter!(telemetry::REQUESTS_TOTAL, "method" => "record_route", "status" => "ok")
            .increment(1);
        Ok(Response::new(summary.into()))
    }

    type RecommendStream = ReceiverStream<Result<proto::Feature, Status>>;

    async fn recommend(
        &self,
        request: Request<Streaming<proto::RecommendationRequest>>,
    ) -> Result<Response<Self::RecommendStream>, Status> {
        let mut inbound = request.into_inner();
        let store = Arc::clone(&self.store);
        let (tx, rx) = mpsc::channel(STREAM_BUFFER);

        // Intake loop: one reply per request, in request order, for the
        // life of the stream. The channel decouples intake from emission;
        // nothing requires the client to read replies in lockstep.
        tokio::spawn(async move {
            loop {
                match inbound.message().await {
                    Ok(Some(raw)) => {
                        metrics::counter!(telemetry::STREAM_MESSAGES_TOTAL,
                            "method" => "recommend", "direction" => "inbound")
                        .increment(1);
                        let req = RecommendationRequest::from(raw);
                        let best = store
                            .recommend(req.point, req.mode)
                            .cloned()
                            .unwrap_or_else(|| Feature::missing(req.point));
                        debug!(point = %req.point, mode = ?req.mode, pick = %best, "recommend");
                        if tx.send(Ok(best.into())).await.is_err() {
                            return;
                        }
                        metrics::counter!(telemetry::STREAM_MESSAGES_TOTAL,
                            "method" => "recommend", "direction" => "outbound")
                        .increment(1);
                    }
                    Ok(None) => {
                        metrics::counter!(telemetry::REQUESTS_TOTAL,
                            "method" => "recommend", "status" => "ok")
                        .increment(1);
                        return;
                    }
                    Err(status) => {
                        warn!(%status, "recommend receive failed");
                        metrics::counter!(telemetry::REQUESTS_TOTAL,
                            "method" => "recommend", "status" => "error")
                        .increment(1);
                        let _ = tx.send(Err(status)).await;
                        return;
                    }
                }
            }
        });

        Ok(Response::new(ReceiverStream::new(rx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_route_summarizes_to_zeros() {
        let recorder = RouteRecorder::default();
        let summary = recorder.summarize(Duration::from_secs(2));
        assert_eq!(summary.point_count, 0);
        assert_eq!(summary.distance, 0);
        assert_eq!(summary.elapsed_seconds, 2);
    }

    #[test]
    fn route_distance_sums_pairwise_legs() {
        let p1 = Point::new(310_020_000, 123_440_000);
        let p2 = Point::new(310_022_514, 123_440_410);
        let p3 = Point::new(151_421_410, 151_454_241);

        let mut recorder = RouteRecorder::default();
        for p in [p1, p2, p3] {
            recorder.observe(p);
        }
        let summary = recorder.summarize(Duration::ZERO);
        assert_eq!(summary.point_count, 3);
        assert_eq!(summary.distance, geo::distance(p1, p2) + geo::distance(p2, p3));
    }

    #[test]
    fn single_point_route_has_no_distance() {
        let mut recorder = RouteRecorder::default();
        recorder.observe(Point::new(5, 5));
        let summary = recorder.summarize(Duration::ZERO);
        assert_eq!(summary.point_count, 1);
        assert_eq!(summary.distance, 0);
    }

    #[test]
    fn pace_of_zero_disables_delay() {
        let service = VegvisirService::new(Arc::new(FeatureStore::seed()))
            .with_pace(Duration::ZERO);
        assert!(service.pace.is_none());
    }
}
