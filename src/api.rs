use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tokio::net::ToSocketAddrs;

use crate::local::LocalFacts;
use crate::snapshot;
use crate::source::Sources;

/// Shared collection context for the snapshot route.
#[derive(Clone)]
pub struct Collector {
    sources: Sources,
    local: Arc<dyn LocalFacts>,
}

impl Collector {
    pub fn new(sources: Sources, local: Arc<dyn LocalFacts>) -> Self {
        Self { sources, local }
    }
}

async fn get_snapshot(State(collector): State<Collector>) -> Response {
    let result = tokio::task::spawn_blocking(move || {
        snapshot::collect(&collector.sources, collector.local.as_ref())
    })
    .await;

    match result {
        Ok(snapshot) => (axum::http::StatusCode::OK, Json(snapshot)).into_response(),
        // an escaped panic in an extractor is a bug, not an expected condition
        Err(err) => {
            log::error!("snapshot collection failed: {}", err);
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "snapshot unavailable",
            )
                .into_response()
        }
    }
}

pub struct APIServer {
    router: axum::Router,
}

impl APIServer {
    pub async fn new(collector: Collector) -> Self {
        let router = axum::Router::new()
            .route("/snapshot", get(get_snapshot))
            .with_state(collector);
        Self { router }
    }

    pub async fn listen(self, addr: impl ToSocketAddrs) {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("TCP Listener bind");
        axum::serve(listener, self.router.into_make_service())
            .await
            .unwrap()
    }
}
