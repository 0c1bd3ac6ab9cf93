pub mod edit;
pub mod manage;
pub mod query;
pub mod transfer;

use clap::{ArgMatches, Command};
use color_eyre::eyre::Result;
use waymark::{
    WaypointStore,
    core::{Waypoint, util::get_time_diff},
};

/// Register all application commands
pub fn register_commands(app: Command) -> Command {
    app.subcommand(edit::register_add())
        .subcommand(edit::register_edit())
        .subcommand(manage::register_remove())
        .subcommand(manage::register_clear())
        .subcommand(query::register_list())
        .subcommand(query::register_search())
        .subcommand(query::register_nearest())
        .subcommand(query::register_groups())
        .subcommand(query::register_dimensions())
        .subcommand(transfer::register_import())
        .subcommand(transfer::register_export())
}

/// Handle all application commands
pub fn handle_commands(matches: &ArgMatches, store: &WaypointStore) -> Result<()> {
    match matches.subcommand() {
        Some(("add", args)) => edit::execute_add(store, args),
        Some(("edit", args)) => edit::execute_edit(store, args),
        Some(("remove", args)) => manage::execute_remove(store, args),
        Some(("clear", args)) => manage::execute_clear(store, args),
        Some(("list", args)) => query::execute_list(store, args),
        Some(("search", args)) => query::execute_search(store, args),
        Some(("nearest", args)) => query::execute_nearest(store, args),
        Some(("groups", args)) => query::execute_groups(store, args),
        Some(("dimensions", _)) => query::execute_dimensions(),
        Some(("import", args)) => transfer::execute_import(store, args),
        Some(("export", args)) => transfer::execute_export(store, args),
        _ => {
            println!("Please specify a subcommand. Use --help for more information.");
            Ok(())
        },
    }
}

/// One line per waypoint: id, name, coordinates, dimension, color, group, age
pub fn print_waypoints(waypoints: &[Waypoint]) {
    if waypoints.is_empty() {
        println!("No waypoints.");
        return;
    }
    for wp in waypoints {
        let group = wp.group_label().map(|g| format!(" [{}]", g)).unwrap_or_default();
        let hidden = if wp.visible { "" } else { " (hidden)" };
        println!(
            "{}  {}{}{}  {:.0}, {:.0}, {:.0}  {}  {}  {}",
            wp.id(),
            wp.name,
            group,
            hidden,
            wp.x,
            wp.y,
            wp.z,
            wp.dimension,
            wp.color_hex(),
            get_time_diff(wp.created_at())
        );
    }
}
