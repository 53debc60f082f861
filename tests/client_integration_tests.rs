//! Integration Tests for the PokeAPI client
//!
//! Exercises the cache-or-fetch path against a fake API over real HTTP.

mod common;

use std::time::Duration;

use pokedex::error::PokedexError;
use pokedex::PokeApiClient;
use reqwest::StatusCode;

use common::{area_name, spawn_fake_api, PAGE_SIZE};

#[tokio::test]
async fn test_first_page_then_cached() {
    let api = spawn_fake_api().await;
    let client = api.client();

    let first = client.location_areas(None).await.unwrap();
    let again = client.location_areas(None).await.unwrap();

    assert_eq!(first.results.len(), PAGE_SIZE);
    assert_eq!(first.results[0].name, area_name(0));
    assert!(first.previous.is_none());
    assert_eq!(again.results[0].name, first.results[0].name);
    assert_eq!(api.requests(), 1, "second call should be served from cache");

    client.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_following_next_link() {
    let api = spawn_fake_api().await;
    let client = api.client();

    let first = client.location_areas(None).await.unwrap();
    let second = client.location_areas(first.next.as_deref()).await.unwrap();

    assert_eq!(second.results[0].name, area_name(PAGE_SIZE));
    assert!(second.previous.is_some());
    assert_eq!(api.requests(), 2);

    client.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cache_keyed_by_full_url() {
    let api = spawn_fake_api().await;
    let client = api.client();

    client.pokemon("bulbasaur").await.unwrap();
    client.pokemon("mewtwo").await.unwrap();
    client.pokemon("bulbasaur").await.unwrap();

    assert_eq!(api.requests(), 2);
    assert_eq!(client.cache().len().await, 2);

    client.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_not_found_is_status_error_and_not_cached() {
    let api = spawn_fake_api().await;
    let client = api.client();

    let result = client.pokemon("missingno").await;
    assert!(matches!(
        result,
        Err(PokedexError::Status { status, .. }) if status == StatusCode::NOT_FOUND
    ));

    let _ = client.pokemon("missingno").await;
    assert_eq!(api.requests(), 2, "failed responses must not be cached");
    assert!(client.cache().is_empty().await);

    client.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_expired_entry_is_refetched() {
    let api = spawn_fake_api().await;
    let client = PokeApiClient::new(&api.config(50)).unwrap();

    client.location_area(&area_name(0)).await.unwrap();
    // Two full intervals plus margin: guaranteed past the staleness window
    tokio::time::sleep(Duration::from_millis(200)).await;
    client.location_area(&area_name(0)).await.unwrap();

    assert_eq!(api.requests(), 2);
    assert!(client.cache().stats().await.reaped >= 1);

    client.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    let api = spawn_fake_api().await;
    let mut config = api.config(60_000);
    config.base_url = "http://127.0.0.1:1/api/v2/".to_string();
    let client = PokeApiClient::new(&config).unwrap();

    let result = client.location_areas(None).await;
    assert!(matches!(result, Err(PokedexError::Http(_))));

    client.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_zero_interval_config_rejected() {
    let api = spawn_fake_api().await;

    let result = PokeApiClient::new(&api.config(0));
    assert!(matches!(result, Err(PokedexError::Cache(_))));
}
