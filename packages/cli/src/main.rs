//! forgekit CLI entry point.
//!
//! Scaffolds JavaScript and TypeScript library projects from bundled
//! templates and runs their build tooling.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod interactive;
mod output;
mod progress;
mod tasks;

use std::env;
use std::path::Path;

use clap::Parser;

use args::{Args, Command, SyncArgs};
use forgekit_catalog::LifecycleOperation;
use forgekit_config::{ConfigFacade, load_manifest_settings};
use forgekit_package_manager::{EnvHints, PackageManager};
use forgekit_paths::{Roots, TOOL_NAME, ToolRootSearch, find_project_root, find_tool_root, locate};
use forgekit_sync::{SyncReport, SyncRequest, execute_plan, plan_sync};
use output::Output;
use tasks::Task;

fn main() {
    let args = Args::parse();

    // Set up logging
    if wants_debug(&args) {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(&args) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// `--debug`, or `"debug": true` in the project's manifest.
fn wants_debug(args: &Args) -> bool {
    if args.debug {
        return true;
    }

    env::current_dir()
        .ok()
        .and_then(|cwd| load_manifest_settings(&find_project_root(&cwd)).ok())
        .and_then(|settings| settings.debug)
        .unwrap_or(false)
}

/// Main application logic.
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = env::current_dir()?;
    let out = Output::new(args.silent);

    match &args.command {
        Command::Create { name } => {
            let manager = init_project(args, out, &cwd.join(name))?;
            out.next_step(&format!("cd {name} && {}", manager.info().install.join(" ")));
        }
        Command::Init => {
            let manager = init_project(args, out, &cwd)?;
            out.next_step(&manager.info().install.join(" "));
        }
        Command::Update(sync) => {
            sync_project(args, out, LifecycleOperation::Update, sync, &cwd)?;
        }
        Command::Eject(sync) => {
            sync_project(args, out, LifecycleOperation::Eject, sync, &cwd)?;
        }
        Command::Run { task, args: extra } => {
            let task: Task = task.parse()?;
            let config = configure(args, locate_existing(args, &cwd)?)?;
            let command = tasks::build_command(&config, task, extra)?;
            out.command(&command.to_string());
            tasks::run_command(&command)?;
        }
    }

    Ok(())
}

/// Roots for a new project at `target`; the project root is not searched for.
fn locate_new(args: &Args, target: &Path) -> Result<Roots, Box<dyn std::error::Error>> {
    let search = ToolRootSearch::from_env();
    let tool_root = progress::with_spinner(show_spinner(args), "Locating templates", || {
        find_tool_root(target, &search)
    })?;

    Ok(Roots::new(target, tool_root))
}

/// Roots of the project enclosing `cwd`.
fn locate_existing(args: &Args, cwd: &Path) -> Result<Roots, Box<dyn std::error::Error>> {
    let search = ToolRootSearch::from_env();
    let roots = progress::with_spinner(show_spinner(args), "Locating project", || {
        locate(cwd, cwd, &search)
    })?;

    Ok(roots)
}

fn show_spinner(args: &Args) -> bool {
    !args.silent && interactive::is_interactive()
}

fn configure(args: &Args, roots: Roots) -> Result<ConfigFacade, Box<dyn std::error::Error>> {
    let mut config = ConfigFacade::with_builtin_catalog(roots, EnvHints::from_env(TOOL_NAME))?;
    config.init(args.explicit())?;
    Ok(config)
}

/// Returns the package manager the project should be installed with.
fn init_project(
    args: &Args,
    out: Output,
    target: &Path,
) -> Result<PackageManager, Box<dyn std::error::Error>> {
    let config = configure(args, locate_new(args, target)?)?;
    let settings = *config.settings()?;

    out.header(&format!("Creating {} project", config.roots().project_name()));
    out.project_info(
        target,
        settings.project_type.id(),
        settings.package_manager.command(),
    );

    let request = SyncRequest {
        test_mode: settings.test,
        ..SyncRequest::new(LifecycleOperation::Init, settings.project_type)
    };
    let report = sync(out, &config, &request)?;

    out.changed_files(target, &report.copied);
    out.success("Project initialized");
    Ok(settings.package_manager)
}

fn sync_project(
    args: &Args,
    out: Output,
    operation: LifecycleOperation,
    sync_args: &SyncArgs,
    cwd: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = configure(args, locate_existing(args, cwd)?)?;
    let settings = *config.settings()?;
    let project_root = config.roots().project_root.clone();

    out.header(&format!("Running {operation}"));
    out.project_info(
        &project_root,
        settings.project_type.id(),
        settings.package_manager.command(),
    );

    let mut items = sync_args.items.clone();
    if operation == LifecycleOperation::Eject && items.is_empty() && show_spinner(args) {
        let candidates: Vec<String> = config
            .catalog()
            .filter_by_lifecycle(settings.project_type, operation)?
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        items = interactive::select_items(&candidates)?;
        if items.is_empty() {
            out.success("Nothing selected");
            return Ok(());
        }
    }

    let request = SyncRequest {
        operation,
        project_type: settings.project_type,
        overwrite: sync_args.force,
        test_mode: settings.test,
        items,
    };
    let report = sync(out, &config, &request)?;

    out.changed_files(&project_root, &report.copied);
    out.success(&format!("{operation} complete"));
    Ok(())
}

/// Plan and execute, reporting warnings and partial results.
fn sync(
    out: Output,
    config: &ConfigFacade,
    request: &SyncRequest,
) -> Result<SyncReport, Box<dyn std::error::Error>> {
    let roots = config.roots();
    let plan = plan_sync(config.catalog(), roots, request)?;

    for skipped in plan.skipped() {
        log::debug!(
            "{} skipped: {}",
            skipped.destination.display(),
            skipped.skip.map(|r| r.to_string()).unwrap_or_default()
        );
    }

    match execute_plan(&plan, &roots.project_name(), request.test_mode) {
        Ok(report) => {
            for warning in &report.warnings {
                out.warning(&warning.to_string());
            }
            Ok(report)
        }
        Err(e) => {
            output::print_partial(&roots.project_root, e.copied());
            Err(e.into())
        }
    }
}
