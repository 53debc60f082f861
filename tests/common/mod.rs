//! Fake PokeAPI served with axum on an ephemeral port.
//!
//! Six location areas paged two at a time, two Pokémon, and a request
//! counter so tests can tell cache hits from network calls.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use pokedex::{Config, PokeApiClient};

pub const AREA_COUNT: usize = 6;
pub const PAGE_SIZE: usize = 2;

#[derive(Clone)]
struct FakeState {
    base: String,
    requests: Arc<AtomicUsize>,
}

pub struct FakeApi {
    pub base_url: String,
    requests: Arc<AtomicUsize>,
}

impl FakeApi {
    /// Number of HTTP requests the fake has answered so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn config(&self, cache_interval_ms: u64) -> Config {
        Config {
            cache_interval_ms,
            base_url: self.base_url.clone(),
            http_timeout_secs: 5,
        }
    }

    pub fn client(&self) -> PokeApiClient {
        PokeApiClient::new(&self.config(60_000)).unwrap()
    }
}

pub async fn spawn_fake_api() -> FakeApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api/v2/", listener.local_addr().unwrap());
    let requests = Arc::new(AtomicUsize::new(0));

    let state = FakeState {
        base: base_url.clone(),
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/api/v2/location-area", get(list_areas))
        .route("/api/v2/location-area/:name", get(get_area))
        .route("/api/v2/pokemon/:name", get(get_pokemon))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeApi { base_url, requests }
}

pub fn area_name(index: usize) -> String {
    format!("area-{}", index)
}

async fn list_areas(
    State(state): State<FakeState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let offset: usize = params
        .get("offset")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let page_link = |offset: usize| format!("{}location-area?offset={}", state.base, offset);
    let next = (offset + PAGE_SIZE < AREA_COUNT).then(|| page_link(offset + PAGE_SIZE));
    let previous = (offset > 0).then(|| page_link(offset.saturating_sub(PAGE_SIZE)));
    let results: Vec<Value> = (offset..(offset + PAGE_SIZE).min(AREA_COUNT))
        .map(|i| json!({ "name": area_name(i), "url": format!("{}location-area/{}/", state.base, i) }))
        .collect();

    Json(json!({
        "count": AREA_COUNT,
        "next": next,
        "previous": previous,
        "results": results,
    }))
}

async fn get_area(
    State(state): State<FakeState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    state.requests.fetch_add(1, Ordering::SeqCst);
    if !(0..AREA_COUNT).any(|i| area_name(i) == name) {
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(Json(json!({
        "id": 1,
        "name": name,
        "pokemon_encounters": [
            { "pokemon": { "name": "bulbasaur", "url": "u" }, "version_details": [] },
            { "pokemon": { "name": "mewtwo", "url": "u" }, "version_details": [] }
        ]
    })))
}

async fn get_pokemon(
    State(state): State<FakeState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    state.requests.fetch_add(1, Ordering::SeqCst);
    // Zero experience always gets caught, 400 always escapes
    let (id, base_experience) = match name.as_str() {
        "bulbasaur" => (1, 0),
        "mewtwo" => (150, 400),
        _ => return Err(StatusCode::NOT_FOUND),
    };

    Ok(Json(json!({
        "id": id,
        "name": name,
        "base_experience": base_experience,
        "height": 7,
        "weight": 69,
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "u" } },
            { "base_stat": 49, "effort": 1, "stat": { "name": "attack", "url": "u" } }
        ],
        "types": [
            { "slot": 1, "type": { "name": "grass", "url": "u" } }
        ]
    })))
}
