use clap::{Arg, ArgAction, ArgMatches, Command};
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use waymark::{
    WaypointId, WaypointStore,
    core::{OVERWORLD, Position},
    edit::{SubmitOutcome, WaypointForm},
    error::WaymarkError,
};

fn coordinate_args(cmd: Command, required: bool) -> Command {
    ["x", "y", "z"].into_iter().fold(cmd, |cmd, axis| {
        cmd.arg(
            Arg::new(axis)
                .long(axis)
                .value_name("COORD")
                .help(format!("{} coordinate", axis.to_uppercase()))
                .required(required)
                .allow_negative_numbers(true),
        )
    })
}

/// Register the add command
pub fn register_add() -> Command {
    let cmd = Command::new("add")
        .about("Add a waypoint")
        .arg(Arg::new("name").required(true).help("Waypoint name"))
        .arg(
            Arg::new("dimension")
                .long("dimension")
                .short('d')
                .default_value(OVERWORLD)
                .help("Dimension tag, e.g. minecraft:the_nether"),
        )
        .arg(Arg::new("color").long("color").value_name("#RRGGBB").help("Marker color"))
        .arg(Arg::new("icon").long("icon").help("Icon reference"))
        .arg(Arg::new("group").long("group").help("Group label"));
    coordinate_args(cmd, true)
}

/// Register the edit command
pub fn register_edit() -> Command {
    let cmd = Command::new("edit")
        .about("Edit an existing waypoint")
        .arg(Arg::new("id").required(true).help("Waypoint id"))
        .arg(Arg::new("name").long("name").help("New name"))
        .arg(Arg::new("color").long("color").value_name("#RRGGBB").help("New color"))
        .arg(Arg::new("group").long("group").help("New group label (empty to clear)"))
        .arg(
            Arg::new("hide")
                .long("hide")
                .help("Stop drawing this waypoint")
                .action(ArgAction::SetTrue)
                .conflicts_with("show"),
        )
        .arg(
            Arg::new("show")
                .long("show")
                .help("Draw this waypoint again")
                .action(ArgAction::SetTrue),
        );
    coordinate_args(cmd, false)
}

fn apply_text_overrides(form: &mut WaypointForm, args: &ArgMatches) {
    let fields: [(&str, &mut String); 6] = [
        ("name", &mut form.name),
        ("x", &mut form.x),
        ("y", &mut form.y),
        ("z", &mut form.z),
        ("color", &mut form.color),
        ("group", &mut form.group),
    ];
    for (arg, field) in fields {
        if let Some(value) = args.get_one::<String>(arg) {
            *field = value.clone();
        }
    }
}

/// Add a waypoint from command line fields
pub fn execute_add(store: &WaypointStore, args: &ArgMatches) -> Result<()> {
    let dimension = args
        .get_one::<String>("dimension")
        .cloned()
        .unwrap_or_else(|| OVERWORLD.to_string());

    let mut form = WaypointForm::blank(&dimension, None::<Position>);
    apply_text_overrides(&mut form, args);
    let validated = form.validate().map_err(WaymarkError::from)?;

    let icon = args.get_one::<String>("icon").cloned();
    let waypoint = store.create(
        validated.name,
        validated.position,
        dimension.as_str(),
        Some(validated.color),
        icon,
        validated.group,
    );
    store.add(waypoint.clone());

    info!("Added {}", waypoint);
    println!("{}", waypoint.id());
    Ok(())
}

/// Edit a waypoint; fields not given keep their current values
pub fn execute_edit(store: &WaypointStore, args: &ArgMatches) -> Result<()> {
    let id = args
        .get_one::<String>("id")
        .map(|id| WaypointId::new(id.as_str()))
        .ok_or_else(|| eyre!("Missing waypoint id"))?;
    let existing = store.get(&id).ok_or_else(|| eyre!("Waypoint not found: {}", id))?;

    let mut form = WaypointForm::from_waypoint(&existing);
    // Keep full precision unless a coordinate is overridden
    form.x = existing.x.to_string();
    form.y = existing.y.to_string();
    form.z = existing.z.to_string();
    apply_text_overrides(&mut form, args);

    let outcome =
        form.submit(store, Some(&id), &existing.dimension).map_err(WaymarkError::from)?;
    let SubmitOutcome::Updated(mut waypoint) = outcome else {
        return Err(eyre!("Waypoint {} was not updated", id));
    };

    if args.get_flag("hide") || args.get_flag("show") {
        waypoint.visible = args.get_flag("show");
        store.update(waypoint.clone());
    }

    info!("Updated {}", waypoint);
    Ok(())
}
