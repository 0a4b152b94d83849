//! Solsave - save inspector
//!
//! Prints what a save directory holds: the previous ship, hired
//! mercenaries, the world parameters and the extra-data modules.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use solsave::codec::{parse_object, IniFile};
use solsave::files::{FsStorage, PathSettings, ResourceLocator, Storage};
use solsave::save::{ExtraScope, SaveManager, SAVE_FILE_NAME};

/// Settings file looked up in the working directory by default
const DEFAULT_SETTINGS: &str = "solsave.ron";

struct Args {
    settings: PathBuf,
    root: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        settings: PathBuf::from(DEFAULT_SETTINGS),
        root: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => {
                args.settings = iter.next().map(PathBuf::from).context("--settings needs a path")?;
            }
            "--root" => {
                args.root = Some(iter.next().map(PathBuf::from).context("--root needs a directory")?);
            }
            "-h" | "--help" => {
                println!("usage: solsave [--settings FILE] [--root DIR]");
                std::process::exit(0);
            }
            other => bail!("unknown argument: {}", other),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    log::info!("Starting solsave v{}", env!("CARGO_PKG_VERSION"));

    let args = parse_args()?;
    let settings = PathSettings::load(&args.settings);
    let locator = match args.root {
        Some(root) => ResourceLocator::new(root),
        None => ResourceLocator::from_settings(&settings),
    };
    println!("Save root: {}", locator.root().display());

    let manager = SaveManager::new(locator);
    print_ship(&manager)?;
    print_mercenaries(&manager);
    print_world(&manager);
    for scope in [ExtraScope::Player, ExtraScope::World] {
        print_extra(&manager, scope);
    }

    Ok(())
}

fn print_ship(manager: &SaveManager) -> Result<()> {
    if !manager.has_prev_ship() {
        println!("Previous ship: none");
        return Ok(());
    }
    let path = manager.locator().resource_path(SAVE_FILE_NAME);
    let text = FsStorage
        .read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let ini = IniFile::parse(&text);

    println!("Previous ship:");
    for (key, value) in ini.entries() {
        println!("  {:<6} {}", key, value);
    }
    Ok(())
}

fn print_mercenaries(manager: &SaveManager) {
    let mercs = manager.read_mercenary_records();
    println!("Mercenaries: {}", mercs.len());
    for merc in mercs {
        println!("  {} ({} money): {}", merc.hull, merc.money, merc.items.trim_end());
    }
}

fn print_world(manager: &SaveManager) {
    match manager.load_world() {
        Some(world) => println!(
            "World: seed {} with {} systems",
            world.seed, world.number_of_systems
        ),
        None => println!("World: none"),
    }
}

fn print_extra(manager: &SaveManager, scope: ExtraScope) {
    let path = manager.locator().resource_path(scope.file_name());
    let modules = FsStorage
        .read_to_string(&path)
        .ok()
        .and_then(|text| parse_object(&text).ok())
        .map(|blob| blob.keys().cloned().collect::<Vec<_>>())
        .unwrap_or_default();

    if modules.is_empty() {
        println!("Extra {} data: none", scope.name());
    } else {
        println!("Extra {} data: {}", scope.name(), modules.join(", "));
    }
}
