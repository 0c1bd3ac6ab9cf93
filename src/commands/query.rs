use super::print_waypoints;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use color_eyre::eyre::{Result, eyre};
use waymark::{
    WaypointStore,
    core::{DIMENSIONS, OVERWORLD, util::format_distance},
};

fn dimension_arg() -> Arg {
    Arg::new("dimension").long("dimension").short('d').help("Only this dimension tag")
}

/// Register the list command
pub fn register_list() -> Command {
    Command::new("list")
        .about("List waypoints")
        .arg(dimension_arg())
        .arg(Arg::new("group").long("group").short('g').help("Only this exact group"))
        .arg(
            Arg::new("visible")
                .long("visible")
                .help("Only waypoints that are drawn")
                .action(ArgAction::SetTrue),
        )
}

/// Register the search command
pub fn register_search() -> Command {
    Command::new("search")
        .about("Case-insensitive search over name, group and dimension")
        .arg(Arg::new("query").default_value("").help("Text to look for"))
        .arg(dimension_arg())
}

/// Register the nearest command
pub fn register_nearest() -> Command {
    let cmd = Command::new("nearest")
        .about("Closest waypoints to a point")
        .arg(
            Arg::new("dimension")
                .long("dimension")
                .short('d')
                .default_value(OVERWORLD)
                .help("Dimension tag"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .short('n')
                .default_value("5")
                .value_parser(value_parser!(usize))
                .help("Maximum number of waypoints"),
        );
    ["x", "y", "z"].into_iter().fold(cmd, |cmd, axis| {
        cmd.arg(
            Arg::new(axis)
                .long(axis)
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
        )
    })
}

/// Register the groups command
pub fn register_groups() -> Command {
    Command::new("groups").about("List group labels in use")
}

/// Register the dimensions command
pub fn register_dimensions() -> Command {
    Command::new("dimensions").about("Show known dimensions and their defaults")
}

pub fn execute_list(store: &WaypointStore, args: &ArgMatches) -> Result<()> {
    let visible_only = args.get_flag("visible");
    let mut waypoints = match (args.get_one::<String>("dimension"), visible_only) {
        (Some(dimension), true) => store.list_visible_in_dimension(dimension),
        (Some(dimension), false) => store.list_in_dimension(dimension),
        (None, true) => store.list_visible(),
        (None, false) => store.list(),
    };
    if let Some(group) = args.get_one::<String>("group") {
        waypoints.retain(|wp| wp.group.as_deref() == Some(group.as_str()));
    }
    waypoints.sort_by(|a, b| a.created_at().cmp(&b.created_at()).then_with(|| a.id().cmp(b.id())));
    print_waypoints(&waypoints);
    Ok(())
}

pub fn execute_search(store: &WaypointStore, args: &ArgMatches) -> Result<()> {
    let query = args.get_one::<String>("query").map(String::as_str).unwrap_or_default();
    let mut waypoints = match args.get_one::<String>("dimension") {
        Some(dimension) => store.search_in_dimension(query, dimension),
        None => store.search(query),
    };
    waypoints.sort_by(|a, b| a.name.cmp(&b.name));
    print_waypoints(&waypoints);
    Ok(())
}

pub fn execute_nearest(store: &WaypointStore, args: &ArgMatches) -> Result<()> {
    let coord = |axis: &str| {
        args.get_one::<f64>(axis).copied().ok_or_else(|| eyre!("Missing --{} coordinate", axis))
    };
    let (x, y, z) = (coord("x")?, coord("y")?, coord("z")?);
    let dimension = args.get_one::<String>("dimension").map(String::as_str).unwrap_or(OVERWORLD);
    let limit = args.get_one::<usize>("limit").copied().unwrap_or(5);

    let nearest = store.nearest(x, y, z, dimension, limit);
    if nearest.is_empty() {
        println!("No waypoints in {}.", dimension);
    }
    for wp in nearest {
        println!("{:>8}  {}  {}", format_distance(wp.distance_to(x, y, z)), wp.name, wp.id());
    }
    Ok(())
}

pub fn execute_groups(store: &WaypointStore, _args: &ArgMatches) -> Result<()> {
    for group in store.groups() {
        println!("{} ({})", group, store.waypoints_in_group(&group).len());
    }
    Ok(())
}

pub fn execute_dimensions() -> Result<()> {
    for dim in DIMENSIONS.iter() {
        println!(
            "{:<22} {:<10} {}  {}",
            dim.id,
            dim.display_name,
            dim.default_color.to_hex(),
            dim.default_icon
        );
    }
    Ok(())
}
