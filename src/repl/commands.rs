//! REPL command registry and handlers.

use std::io::Write;

use tracing::debug;

use crate::error::{PokedexError, Result};
use crate::repl::Session;

/// Catch threshold divisor: a Pokémon with this much base experience always escapes.
pub const CATCH_DIFFICULTY: f64 = 400.0;

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Show the next location areas",
            Command::MapBack => "Show the previous location areas",
            Command::Explore => "Explore a location area",
            Command::Catch => "Catch a pokémon",
            Command::Inspect => "Inspect a pokémon you have caught",
            Command::Pokedex => "List the pokémon you have caught",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Runs the command against `session`, writing user-facing text to `out`.
    pub async fn execute<W: Write>(
        self,
        session: &mut Session,
        args: &[String],
        out: &mut W,
    ) -> Result<Flow> {
        debug!("executing {} {:?}", self.name(), args);
        match self {
            Command::Help => help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => map(session, out).await?,
            Command::MapBack => map_back(session, out).await?,
            Command::Explore => explore(session, args, out).await?,
            Command::Catch => catch(session, args, out).await?,
            Command::Inspect => inspect(session, args, out)?,
            Command::Pokedex => pokedex(session, out)?,
        }
        Ok(Flow::Continue)
    }
}

/// A catch fails when `roll` falls below `base_experience / CATCH_DIFFICULTY`.
pub fn catch_escapes(base_experience: u32, roll: f64) -> bool {
    roll < f64::from(base_experience) / CATCH_DIFFICULTY
}

fn first_arg<'a>(
    args: &'a [String],
    command: &'static str,
    what: &'static str,
) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or(PokedexError::MissingArgument(command, what))
}

fn help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to the Pokedex!\n\nUsage:\n")?;
    for command in Command::ALL {
        writeln!(out, "{}: {}", command.name(), command.description())?;
    }
    Ok(())
}

async fn map<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    let next = session.next_url().map(str::to_owned);
    show_page(session, next.as_deref(), out).await
}

async fn map_back<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    let Some(previous) = session.previous_url().map(str::to_owned) else {
        writeln!(out, "you're on the first page")?;
        return Ok(());
    };
    show_page(session, Some(&previous), out).await
}

async fn show_page<W: Write>(
    session: &mut Session,
    page_url: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let page = session.client().location_areas(page_url).await?;
    session.set_page_links(&page);

    for name in page.names() {
        writeln!(out, "{}", name)?;
    }
    writeln!(
        out,
        "\n'explore' an area, 'map' for the next page, or 'mapb' the previous page"
    )?;
    Ok(())
}

async fn explore<W: Write>(session: &mut Session, args: &[String], out: &mut W) -> Result<()> {
    let area_name = first_arg(args, "explore", "an area name")?;
    let area = session.client().location_area(area_name).await?;

    writeln!(out, "Exploring {}...", area.name)?;
    for name in area.pokemon_names() {
        writeln!(out, " - {}", name)?;
    }
    writeln!(out, "\nTry to 'catch' a pokémon...")?;
    Ok(())
}

async fn catch<W: Write>(session: &mut Session, args: &[String], out: &mut W) -> Result<()> {
    let name = first_arg(args, "catch", "a pokémon name")?;
    let pokemon = session.client().pokemon(name).await?;

    writeln!(out, "throwing a poké ball at {}...", pokemon.name)?;

    let roll = session.roll();
    if catch_escapes(pokemon.base_experience.unwrap_or(0), roll) {
        writeln!(out, "{} escaped!", pokemon.name)?;
    } else {
        writeln!(out, "{} was caught! Check your 'pokedex'", pokemon.name)?;
        session.record_catch(pokemon);
    }
    Ok(())
}

fn inspect<W: Write>(session: &Session, args: &[String], out: &mut W) -> Result<()> {
    let name = first_arg(args, "inspect", "a pokémon name")?;
    let caught = session
        .caught(name)
        .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;
    let pokemon = &caught.pokemon;

    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Caught: {}", caught.caught_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, " - {}: {}", stat.stat.name, stat.total())?;
    }
    writeln!(out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(out, " - {}", kind.kind.name)?;
    }
    Ok(())
}

fn pokedex<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    writeln!(out, "Your pokédex:")?;

    if session.pokedex_len() == 0 {
        writeln!(out, "There's nothing here yet! Try catching some pokémon!")?;
        return Ok(());
    }

    for caught in session.pokedex() {
        writeln!(out, " - {}", caught.pokemon.name)?;
    }
    writeln!(out, "\nWhy not 'inspect' a pokémon...")?;
    Ok(())
}
