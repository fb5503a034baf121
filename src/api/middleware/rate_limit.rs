//! Per-IP rate limiting using the token bucket algorithm.
//!
//! Requests exceeding the limit receive `429 Too Many Requests`. Keys are
//! taken from the socket peer address, so the router must be served with
//! `into_make_service_with_connect_info::<SocketAddr>()`.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

type IpRateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

fn build(per_second: u64, burst_size: u32) -> IpRateLimitLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .expect("rate limit quotas are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Limiter for read-only browsing endpoints.
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
pub fn layer() -> IpRateLimitLayer {
    build(2, 100)
}

/// Stricter limiter for the planner, which issues one database query per
/// itinerary step.
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
pub fn planner_layer() -> IpRateLimitLayer {
    build(1, 10)
}
