use clap::{Arg, ArgAction, ArgMatches, Command};
use color_eyre::eyre::{Result, eyre};
use tracing::{info, warn};
use waymark::{WaypointId, WaypointStore};

/// Register the remove command
pub fn register_remove() -> Command {
    Command::new("remove")
        .about("Remove waypoints by id")
        .arg(Arg::new("ids").required(true).num_args(1..).help("Waypoint ids"))
}

/// Register the clear command
pub fn register_clear() -> Command {
    Command::new("clear").about("Remove every waypoint in every dimension").arg(
        Arg::new("yes")
            .long("yes")
            .help("Confirm deleting everything")
            .action(ArgAction::SetTrue),
    )
}

pub fn execute_remove(store: &WaypointStore, args: &ArgMatches) -> Result<()> {
    let ids: Vec<&String> =
        args.get_many::<String>("ids").ok_or_else(|| eyre!("No ids given"))?.collect();

    for id in ids {
        match store.remove(&WaypointId::new(id.as_str())) {
            Some(removed) => info!("Removed {}", removed),
            None => warn!("No waypoint with id {}", id),
        }
    }
    Ok(())
}

pub fn execute_clear(store: &WaypointStore, args: &ArgMatches) -> Result<()> {
    if !args.get_flag("yes") {
        println!("This deletes all {} waypoints. Re-run with --yes to confirm.", store.len());
        return Ok(());
    }

    let count = store.len();
    store.clear();
    info!("Cleared {} waypoints", count);
    Ok(())
}
