//! Per-process REPL state: the API client, the paging cursor over location
//! areas, the caught Pokémon and the RNG used for catch rolls.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::PokeApiClient;
use crate::models::{LocationAreaPage, Pokemon};

/// A Pokémon in the Pokédex and when it was caught.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Local>,
}

#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    next_url: Option<String>,
    previous_url: Option<String>,
    pokedex: BTreeMap<String, CaughtPokemon>,
    rng: StdRng,
}

impl Session {
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Creates a session with a caller-supplied RNG, for reproducible catches.
    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        Self {
            client,
            next_url: None,
            previous_url: None,
            pokedex: BTreeMap::new(),
            rng,
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    /// Link to the page after the last one shown; `None` means the first page.
    pub fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }

    /// Link to the page before the last one shown; `None` on the first page.
    pub fn previous_url(&self) -> Option<&str> {
        self.previous_url.as_deref()
    }

    /// Moves the cursor to the links of the page just displayed.
    pub fn set_page_links(&mut self, page: &LocationAreaPage) {
        self.next_url = page.next.clone().filter(|u| !u.is_empty());
        self.previous_url = page.previous.clone().filter(|u| !u.is_empty());
    }

    /// Uniform roll in `[0, 1)`.
    pub fn roll(&mut self) -> f64 {
        self.rng.gen()
    }

    pub fn record_catch(&mut self, pokemon: Pokemon) {
        self.pokedex.insert(
            pokemon.name.clone(),
            CaughtPokemon {
                pokemon,
                caught_at: Local::now(),
            },
        );
    }

    pub fn caught(&self, name: &str) -> Option<&CaughtPokemon> {
        self.pokedex.get(name)
    }

    /// Caught Pokémon in name order.
    pub fn pokedex(&self) -> impl Iterator<Item = &CaughtPokemon> {
        self.pokedex.values()
    }

    pub fn pokedex_len(&self) -> usize {
        self.pokedex.len()
    }
}
