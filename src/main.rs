// Care-Facility Map Browser - Headless Demo Driver
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/caremap
// ```
//
// Or drive a filtered search:
//
// ```console
// $ ./target/release/caremap --space-types nursing_room --search 台北車站 --verbose
// ```

use anyhow::Context;
use caremap::types::config::CliArgs;
use caremap::{
    export_annotated_jsonl, AccessMethod, AppConfig, LoggingConfig, MapScreen, SpaceSize,
    SpaceType, StaticLocationProvider, TagAddOutcome,
};
use chrono::{Duration, Utc};
use clap::Parser;
use std::collections::BTreeSet;
use std::path::Path;
use std::process;
use std::str::FromStr;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match AppConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };
    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting care-facility map driver");

    let config = match AppConfig::from_cli_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }
    info!("Configuration loaded and validated");

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - the screen will not be driven.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    if let Err(e) = run(&args, config) {
        error!("Driver failed: {:#}", e);
        process::exit(1);
    }

    info!("Care-facility map driver completed");
}

/// Drive one scripted screen session from the CLI selections
fn run(args: &CliArgs, config: AppConfig) -> anyhow::Result<()> {
    let settle_ms = config.submit_settle_ms;
    let provider = StaticLocationProvider::granted(config.fallback_center);
    let mut screen =
        MapScreen::new(config, provider).context("Failed to assemble the map screen")?;
    screen.mount();

    apply_facet_selections(&mut screen, args)?;

    for tag in &args.amenities {
        if screen.filters_mut().add_amenity_tag(tag) == TagAddOutcome::Rejected {
            let message = screen.filters().capacity_message().unwrap_or_default();
            eprintln!("Amenity tag '{}' rejected: {}", tag, message);
        }
    }

    if let Some(text) = &args.search {
        screen.set_search_text(text.clone());
        let now = Utc::now();
        if screen.submit_search(now) {
            // The demo loop has nothing else to do, so settle immediately
            screen.tick(now + Duration::milliseconds(settle_ms as i64));
        }
    }

    print_session_summary(&screen);

    if let Some(path) = &args.export {
        let annotated = screen.annotated_facilities();
        export_annotated_jsonl(Path::new(path), &annotated)
            .with_context(|| format!("Failed to export facilities to '{}'", path))?;
        eprintln!("Annotated facilities written to: {}", path);
    }

    screen.unmount();
    Ok(())
}

/// Turn the keep-selected CLI lists into facet toggles
fn apply_facet_selections(
    screen: &mut MapScreen<StaticLocationProvider>,
    args: &CliArgs,
) -> anyhow::Result<()> {
    if !args.space_types.is_empty() {
        let keep = parse_keys::<SpaceType>(&args.space_types)?;
        for space_type in SpaceType::ALL {
            if !keep.contains(&space_type) {
                screen.filters_mut().toggle_space_type(space_type);
            }
        }
    }
    if !args.access_methods.is_empty() {
        let keep = parse_keys::<AccessMethod>(&args.access_methods)?;
        for method in AccessMethod::ALL {
            if !keep.contains(&method) {
                screen.filters_mut().toggle_access_method(method);
            }
        }
    }
    if !args.space_sizes.is_empty() {
        let keep = parse_keys::<SpaceSize>(&args.space_sizes)?;
        for size in SpaceSize::ALL {
            if !keep.contains(&size) {
                screen.filters_mut().toggle_space_size(size);
            }
        }
    }
    Ok(())
}

fn parse_keys<T: FromStr<Err = String> + Ord>(raw: &[String]) -> anyhow::Result<BTreeSet<T>> {
    raw.iter()
        .map(|key| T::from_str(key).map_err(anyhow::Error::msg))
        .collect::<anyhow::Result<BTreeSet<T>>>()
        .context("Invalid facet key")
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &AppConfig) {
    eprintln!("Care-Facility Map Browser");
    eprintln!("=========================");
    eprintln!("Headless driver for the facility map state model");
    eprintln!();
    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &AppConfig) {
    eprintln!("Configuration:");
    eprintln!("  Region Delta: {}", config.region_delta);
    eprintln!(
        "  Searched Center: ({}, {})",
        config.searched_center.latitude, config.searched_center.longitude
    );
    eprintln!(
        "  Fallback Center: ({}, {})",
        config.fallback_center.latitude, config.fallback_center.longitude
    );
    eprintln!("  Submit Settle: {} ms", config.submit_settle_ms);
    eprintln!();
}

/// Print the state a presentation surface would render
fn print_session_summary(screen: &MapScreen<StaticLocationProvider>) {
    eprintln!("Session {}:", screen.session_id());
    match screen.region() {
        Some(region) => eprintln!(
            "  Region: ({}, {}) Δ({}, {})",
            region.latitude, region.longitude, region.latitude_delta, region.longitude_delta
        ),
        None => eprintln!("  Region: unset (map not rendered)"),
    }
    eprintln!("  Active Dataset: {}", screen.active_dataset());

    let snapshot = screen.filter_snapshot();
    eprintln!(
        "  Filters: {} space types, {} access methods, {} space sizes",
        snapshot.space_types.len(),
        snapshot.access_methods.len(),
        snapshot.space_sizes.len()
    );
    if !snapshot.amenities.is_empty() {
        eprintln!("  Amenity Tags: {}", snapshot.amenities.join("、"));
    }

    let annotated = screen.annotated_facilities();
    eprintln!("  Facilities ({}):", annotated.len());
    for entry in &annotated {
        let icon = entry
            .icon
            .map(|icon| icon.asset_path().to_string())
            .unwrap_or_else(|| "(no icon)".to_string());
        eprintln!(
            "    {} {} @ ({}, {}) [{}] {}",
            entry.facility.facility_id,
            entry.facility.facility_name,
            entry.facility.latitude,
            entry.facility.longitude,
            icon,
            entry.marker_title
        );
    }
    eprintln!();
}
