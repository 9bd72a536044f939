//! Shadowdark-style party generator
//!
//! Command line entry point: rolls a party and prints it as markdown
//! sheets or a JSON array.

use anyhow::{bail, Result};
use clap::Parser;

use sd_core::{generate_party, CharacterClass, GameRng, Limits};

/// Roll random characters ready for a first dungeon crawl
#[derive(Parser, Debug)]
#[command(name = "shadowgen")]
#[command(author, version, about = "Generate a Shadowdark-style adventuring party", long_about = None)]
struct Args {
    /// Party size
    #[arg(short = 'n', long = "size", default_value_t = 4)]
    size: usize,

    /// RNG seed for reproducible parties (omitted: OS entropy)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Allow repeated classes within the party
    #[arg(long = "allow-duplicates")]
    allow_duplicates: bool,

    /// Print the party as a JSON array instead of markdown
    #[arg(long = "json")]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !args.allow_duplicates && args.size > CharacterClass::DISTINCT_ARCHETYPES {
        bail!(
            "a unique party caps at {} members; pass --allow-duplicates for {}",
            CharacterClass::DISTINCT_ARCHETYPES,
            args.size
        );
    }

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let party = generate_party(
        &mut rng,
        args.size,
        !args.allow_duplicates,
        &Limits::default(),
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&party)?);
    } else {
        print!("{}", sd_sheet::render_party(&party));
    }

    Ok(())
}
