use anyhow::{anyhow, Error};
use dungeon::{app, navigate, Dungeon, Settings};
use std::fs::File;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, Error>;

fn load_dungeon(filename: Option<&str>) -> Result<Dungeon> {
    let reader: Box<dyn ::std::io::Read + 'static> = match filename {
        Some("-") | None => Box::new(::std::io::stdin()),
        Some(path) => {
            let f: File = File::open(path)?;
            Box::new(f)
        }
    };

    Ok(Dungeon::read(reader)?)
}

fn main() -> Result<()> {
    let matches = app().get_matches();
    let settings = Settings::from_matches(&matches)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    let dungeon = load_dungeon(settings.map.as_deref())?;
    let navigation = navigate(&dungeon, &settings)?;

    match navigation.path {
        Some(ref path) => {
            print!("{}", dungeon.render(Some(path)));
            println!("Distance: {}", path.distance());
            Ok(())
        }
        None => {
            print!("{}", dungeon);
            Err(anyhow!(
                "No path from {} to {}, search stopped at {} after {} steps",
                navigation.origin,
                navigation.destination,
                navigation.route.terminal().position(),
                navigation.route.expanded()
            ))
        }
    }
}
