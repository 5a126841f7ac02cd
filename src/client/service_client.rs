//! [`ServiceClient`] — typed driver for the Vegvisir service over gRPC.
//!
//! All proto ↔ native type conversions are centralized in
//! [`crate::server::convert`]. Each RPC shape gets one method:
//!
//! - [`get_feature`](ServiceClient::get_feature) — unary
//! - [`list_features`](ServiceClient::list_features) — server-streaming
//! - [`record_route`](ServiceClient::record_route) — client-streaming
//! - [`recommend`](ServiceClient::recommend) — bidirectional
//!
//! The bidirectional driver returns a [`RecommendSession`] whose request
//! sender and response stream progress independently. Nothing guarantees
//! the server interleaves sends and receives in lockstep at the framing
//! layer, so coupling them in one loop risks deadlock once either side
//! buffers; [`RecommendSession::into_parts`] exists precisely so callers
//! can run the two directions as separate tasks.

use std::pin::Pin;

use futures_util::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::transport::Channel;

use crate::server::proto;
use crate::server::proto::vegvisir_client::VegvisirClient;
use crate::types::{Feature, Point, RecommendationRequest, Rectangle, RouteSummary};
use crate::{Result, VegvisirError};

/// Outbound requests buffered on a bidirectional session.
const REQUEST_BUFFER: usize = 16;

/// A typed client for a remote vegd instance.
pub struct ServiceClient {
    inner: VegvisirClient<Channel>,
}

impl ServiceClient {
    /// Connect to a vegd server at the given address.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let client = ServiceClient::connect("http://127.0.0.1:9470").await?;
    /// ```
    pub async fn connect(addr: impl Into<String>) -> Result<Self> {
        let addr = addr.into();
        let inner = VegvisirClient::connect(addr.clone())
            .await
            .map_err(|e| VegvisirError::Transport(format!("failed to connect to {addr}: {e}")))?;
        Ok(Self { inner })
    }

    /// Look up the feature at an exact coordinate.
    ///
    /// A miss is not an error: the returned [`Feature`] has an empty name
    /// (check [`Feature::is_present`]).
    pub async fn get_feature(&self, point: Point) -> Result<Feature> {
        let response = self
            .inner
            .clone()
            .get_feature(proto::Point::from(point))
            .await
            .map_err(from_status)?;
        Ok(response.into_inner().into())
    }

    /// Stream every stored feature inside `rect`, in store order.
    pub async fn list_features(
        &self,
        rect: Rectangle,
    ) -> Result<Pin<Box<dyn Stream<Item = Result<Feature>> + Send>>> {
        let response = self
            .inner
            .clone()
            .list_features(proto::Rectangle::from(rect))
            .await
            .map_err(from_status)?;
        let stream = response
            .into_inner()
            .map(|result| result.map(Into::into).map_err(from_status));
        Ok(Box::pin(stream))
    }

    /// Send a stream of route points and receive the single summary
    /// emitted after end-of-input.
    pub async fn record_route<S>(&self, points: S) -> Result<RouteSummary>
    where
        S: Stream<Item = Point> + Send + 'static,
    {
        let outbound = points.map(proto::Point::from);
        let response = self
            .inner
            .clone()
            .record_route(outbound)
            .await
            .map_err(from_status)?;
        Ok(response.into_inner().into())
    }

    /// Open a bidirectional recommendation session.
    ///
    /// Requests are pushed through the session's sender; one [`Feature`]
    /// reply arrives per request, in request order. Dropping the sender is
    /// the clean end-of-input signal that ends the session.
    pub async fn recommend(&self) -> Result<RecommendSession> {
        let (tx, rx) = mpsc::channel::<RecommendationRequest>(REQUEST_BUFFER);
        let outbound = ReceiverStream::new(rx).map(proto::RecommendationRequest::from);
        let response = self
            .inner
            .clone()
            .recommend(outbound)
            .await
            .map_err(from_status)?;
        let responses = response
            .into_inner()
            .map(|result| result.map(Into::into).map_err(from_status));
        Ok(RecommendSession {
            requests: tx,
            responses: Box::pin(responses),
        })
    }
}

/// One live bidirectional recommendation stream.
///
/// [`send`](Self::send) and [`recv`](Self::recv) cover the common
/// ask-then-read pattern; [`into_parts`](Self::into_parts) splits the
/// session so the two directions can run on independent tasks.
pub struct RecommendSession {
    requests: mpsc::Sender<RecommendationRequest>,
    responses: Pin<Box<dyn Stream<Item = Result<Feature>> + Send>>,
}

impl RecommendSession {
    /// Submit one recommendation request.
    pub async fn send(&self, request: RecommendationRequest) -> Result<()> {
        self.requests
            .send(request)
            .await
            .map_err(|_| VegvisirError::Stream("recommend session closed".to_string()))
    }

    /// Receive the next recommended feature; `None` once the server ends
    /// the stream.
    pub async fn recv(&mut self) -> Option<Result<Feature>> {
        self.responses.next().await
    }

    /// Split into the request sender and the response stream.
    ///
    /// Dropping the returned sender signals end-of-input; the response
    /// stream then drains any replies still in flight.
    pub fn into_parts(
        self,
    ) -> (
        mpsc::Sender<RecommendationRequest>,
        Pin<Box<dyn Stream<Item = Result<Feature>> + Send>>,
    ) {
        (self.requests, self.responses)
    }
}

/// Convert [`tonic::Status`] to [`VegvisirError`].
fn from_status(status: tonic::Status) -> VegvisirError {
    match status.code() {
        tonic::Code::Unavailable | tonic::Code::DeadlineExceeded => {
            VegvisirError::Transport(status.message().to_string())
        }
        tonic::Code::InvalidArgument => VegvisirError::InvalidInput(status.message().to_string()),
        code => VegvisirError::Stream(format!("{code:?}: {}", status.message())),
    }
}
