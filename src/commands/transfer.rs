use clap::{Arg, ArgMatches, Command, value_parser};
use color_eyre::eyre::{Result, WrapErr};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use waymark::{WaypointStore, error::WaymarkError};

/// Register the import command
pub fn register_import() -> Command {
    Command::new("import").about("Merge waypoints from a JSON export").arg(
        Arg::new("file")
            .default_value("-")
            .value_parser(value_parser!(PathBuf))
            .help("Export file to read, or - for stdin"),
    )
}

/// Register the export command
pub fn register_export() -> Command {
    Command::new("export").about("Write every waypoint as JSON").arg(
        Arg::new("output")
            .long("output")
            .short('o')
            .value_parser(value_parser!(PathBuf))
            .help("File to write instead of stdout"),
    )
}

pub fn execute_import(store: &WaypointStore, args: &ArgMatches) -> Result<()> {
    let source = args.get_one::<PathBuf>("file").cloned().unwrap_or_else(|| PathBuf::from("-"));

    let data = if source.as_os_str() == "-" {
        let mut data = String::new();
        std::io::stdin().read_to_string(&mut data).wrap_err("Failed to read stdin")?;
        data
    } else {
        std::fs::read_to_string(&source)
            .wrap_err_with(|| format!("Failed to read {}", source.display()))?
    };

    let count = store.import_from(&data).map_err(WaymarkError::from)?;
    info!("Imported {} waypoints ({} total)", count, store.len());
    Ok(())
}

pub fn execute_export(store: &WaypointStore, args: &ArgMatches) -> Result<()> {
    let document = store.export_all().map_err(WaymarkError::from)?;
    match args.get_one::<PathBuf>("output") {
        Some(path) => {
            std::fs::write(path, document)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            info!("Exported {} waypoints to {}", store.len(), path.display());
        },
        None => println!("{}", document),
    }
    Ok(())
}
