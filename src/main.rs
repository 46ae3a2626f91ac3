//! CLI entry point for libinput-gestures-manager
//!
//! Lists, checks, edits and repairs the gesture config, and forwards
//! daemon control to `libinput-gestures-setup`.

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use libinput_gestures_manager::{
    config::{ConfigError, ConfigStore},
    controller::Controller,
    core::{
        keys::translate_captured_sequence,
        parser::ParseError,
        tables::gesture_from_label,
        validator::{ActionDraft, BindingDraft},
        Action, Binding, BindingKey, BindingSet, Gesture,
    },
    daemon::{ClientMode, DaemonClient, DaemonCommand, DaemonStatus},
};
use serde::Serialize;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "libinput-gestures-manager")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the libinput-gestures config file
    #[arg(
        short,
        long,
        global = true,
        default_value = "~/.config/libinput-gestures.conf"
    )]
    config: PathBuf,

    /// Keep a timestamped backup before every save
    #[arg(long, global = true)]
    backup: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List gesture bindings
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Only show bindings whose gesture, finger count or action matches
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Check that every line of the config is well-formed
    Check,

    /// Add a binding, replacing any binding for the same gesture and fingers
    Add {
        /// Gesture label, e.g. "Swipe Up" (see `gestures`)
        #[arg(short, long)]
        gesture: String,

        /// Number of fingers
        #[arg(short, long)]
        fingers: u32,

        /// Keyboard shortcut as captured, e.g. "Meta+PgDown"
        #[arg(short, long, conflicts_with = "command", required_unless_present = "command")]
        shortcut: Option<String>,

        /// Shell command to run
        #[arg(long)]
        command: Option<String>,
    },

    /// Delete the binding for a gesture and finger count
    Delete {
        /// Gesture label, e.g. "Swipe Up"
        #[arg(short, long)]
        gesture: String,

        /// Number of fingers
        #[arg(short, long)]
        fingers: u32,
    },

    /// Remove malformed lines from the config
    Repair {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show how a captured key chord is written for xdotool
    Translate {
        /// Chord such as "Meta+Shift+PgUp"
        chord: String,
    },

    /// List the supported gestures
    Gestures,

    /// Control the libinput-gestures daemon
    Daemon {
        #[arg(value_enum)]
        action: DaemonAction,

        /// Print what would run without running it
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DaemonAction {
    Status,
    Start,
    Stop,
    Restart,
}

impl From<DaemonAction> for DaemonCommand {
    fn from(action: DaemonAction) -> Self {
        match action {
            DaemonAction::Status => DaemonCommand::Status,
            DaemonAction::Start => DaemonCommand::Start,
            DaemonAction::Stop => DaemonCommand::Stop,
            DaemonAction::Restart => DaemonCommand::Restart,
        }
    }
}

/// One row of `list --json`
#[derive(Serialize)]
struct BindingRow<'a> {
    gesture: &'static str,
    fingers: u32,
    action: &'a Action,
    line: String,
}

impl<'a> From<&'a Binding> for BindingRow<'a> {
    fn from(binding: &'a Binding) -> Self {
        Self {
            gesture: binding.gesture.label(),
            fingers: binding.fingers,
            action: &binding.action,
            line: binding.to_string(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging. stdout is reserved for listings.
    let directives = env::var("RUST_LOG").unwrap_or("warn,libinput_gestures_manager=info".into());
    let env_filter = EnvFilter::builder().parse_lossy(directives);
    FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let Cli {
        config,
        backup,
        command,
    } = Cli::parse();
    let controller = || -> anyhow::Result<Controller> {
        Ok(Controller::new(open_store(&config, backup)?))
    };

    match command {
        Commands::List { json, filter } => list_bindings(&controller()?, json, filter)?,
        Commands::Check => check_config(&controller()?)?,
        Commands::Add {
            gesture,
            fingers,
            shortcut,
            command,
        } => {
            let action = match (shortcut, command) {
                (Some(chord), _) => ActionDraft::Shortcut(chord),
                (None, Some(text)) => ActionDraft::Command(text),
                (None, None) => bail!("Give either --shortcut or --command"),
            };
            add_binding(&controller()?, gesture, fingers, action)?
        }
        Commands::Delete { gesture, fingers } => {
            delete_binding(&controller()?, &gesture, fingers)?
        }
        Commands::Repair { yes } => repair_config(&controller()?, yes)?,
        Commands::Translate { chord } => println!("{}", translate_captured_sequence(&chord)),
        Commands::Gestures => list_gestures(),
        Commands::Daemon { action, dry_run } => run_daemon(action.into(), dry_run)?,
    }

    Ok(())
}

/// Builds the store for a tilde-expanded config path
fn open_store(config_path: &Path, backup: bool) -> anyhow::Result<ConfigStore> {
    // Expand tilde in path
    let expanded_path = shellexpand::tilde(
        config_path
            .to_str()
            .ok_or_else(|| anyhow!("Invalid path encoding"))?,
    );
    let store = ConfigStore::new(PathBuf::from(expanded_path.as_ref()));

    Ok(if backup { store.with_backups() } else { store })
}

/// Loads the binding set, explaining parse failures
fn load_bindings(controller: &Controller) -> anyhow::Result<BindingSet> {
    match controller.load() {
        Ok(set) => Ok(set),
        Err(ConfigError::Parse(ParseError::MalformedLine { line, text, reason })) => {
            eprintln!(
                "{} {} line {}: {}",
                "✗".red().bold(),
                controller.store().path().display(),
                line,
                reason
            );
            eprintln!("  {}", text.yellow());
            eprintln!(
                "\nRun `{}` to remove malformed lines. Nothing was changed.",
                "libinput-gestures-manager repair".bold()
            );
            bail!("config contains a malformed line")
        }
        Err(e) => Err(e).with_context(|| {
            format!("Failed to load {}", controller.store().path().display())
        }),
    }
}

fn list_bindings(controller: &Controller, json: bool, filter: Option<String>) -> anyhow::Result<()> {
    let set = load_bindings(controller)?;
    let bindings = set.filter(filter.as_deref().unwrap_or_default());

    if json {
        let rows = bindings.into_iter().map(BindingRow::from).collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Gesture bindings from: {}\n", controller.store().path().display()).bold()
    );

    for binding in &bindings {
        println!(
            "{:<20} {} → {} {}",
            binding.gesture.label().cyan().bold(),
            format!("{} fingers", binding.fingers).dimmed(),
            binding.action.kind().to_string().magenta(),
            binding.action.value().green(),
        );
    }

    println!("\n{} Total: {} bindings", "✓".green(), bindings.len());

    Ok(())
}

fn check_config(controller: &Controller) -> anyhow::Result<()> {
    let set = load_bindings(controller)?;

    println!(
        "{} {} is well-formed ({} bindings)",
        "✓".green().bold(),
        controller.store().path().display(),
        set.len()
    );

    let superseded = set.superseded_lines();
    if !superseded.is_empty() {
        println!(
            "{} {} duplicate binding line{} ignored in favour of a later one: {}",
            "⚠".yellow(),
            superseded.len(),
            if superseded.len() == 1 { "" } else { "s" },
            superseded
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}

fn add_binding(
    controller: &Controller,
    gesture: String,
    fingers: u32,
    action: ActionDraft,
) -> anyhow::Result<()> {
    let draft = BindingDraft {
        gesture: Some(gesture),
        fingers: Some(fingers),
        action: Some(action),
    };
    let binding = draft.validate()?;

    let set = load_bindings(controller)?;
    let replaced = set.get(binding.key()).cloned();
    controller.upsert(set, &binding)?;

    match replaced {
        Some(old) => println!(
            "{} Replaced {} with {}",
            "✓".green(),
            old.action.to_string().dimmed(),
            binding.to_string().cyan()
        ),
        None => println!("{} Added {}", "✓".green(), binding.to_string().cyan()),
    }
    print_restart_hint();

    Ok(())
}

fn delete_binding(controller: &Controller, label: &str, fingers: u32) -> anyhow::Result<()> {
    let gesture = gesture_from_label(label.trim())
        .ok_or_else(|| anyhow!("Unknown gesture '{}'. Run `gestures` for the list.", label))?;
    let key = BindingKey { gesture, fingers };

    let set = load_bindings(controller)?;
    if controller.delete(set, key)? {
        println!("{} Deleted {} with {} fingers", "✓".green(), gesture.label().cyan(), fingers);
        print_restart_hint();
    } else {
        println!("{} Nothing bound to {} with {} fingers", "⚠".yellow(), gesture.label(), fingers);
    }

    Ok(())
}

fn repair_config(controller: &Controller, yes: bool) -> anyhow::Result<()> {
    let store = controller.store();
    let preview = libinput_gestures_manager::config::repair(&store.load()?);

    if preview.is_clean() {
        println!("{} Nothing to repair", "✓".green());
        return Ok(());
    }

    println!(
        "{} {} malformed line{} in {}:\n",
        "✗".red().bold(),
        preview.dropped.len(),
        if preview.dropped.len() == 1 { "" } else { "s" },
        store.path().display()
    );
    for dropped in &preview.dropped {
        println!(
            "  {} {} {}",
            format!("{}:", dropped.line).dimmed(),
            dropped.text.yellow(),
            format!("({})", dropped.reason).dimmed()
        );
    }
    println!();

    if !yes && !confirm("Remove these lines? This cannot be undone without --backup.")? {
        println!("Aborted. {} was not changed.", store.path().display());
        return Ok(());
    }

    let report = controller.repair()?;
    println!("{} Removed {} lines", "✓".green(), report.dropped.len());

    Ok(())
}

/// Asks a yes/no question on stdin; anything but y/yes is a no
fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn list_gestures() {
    for gesture in Gesture::ALL {
        println!(
            "{:<20} {:<28} {}",
            gesture.label().cyan(),
            gesture.token(),
            format!("min {} fingers", gesture.kind().min_fingers()).dimmed()
        );
    }
}

fn run_daemon(command: DaemonCommand, dry_run: bool) -> anyhow::Result<()> {
    let mode = if dry_run {
        ClientMode::DryRun
    } else {
        ClientMode::Live
    };
    let client = DaemonClient::new(mode);
    let output = client.run(command)?;

    if dry_run {
        println!("Would run: {} {}", client.program().display(), command);
        return Ok(());
    }

    print!("{}", output);

    if command == DaemonCommand::Status {
        let status = DaemonStatus::from_output(&output);
        println!();
        print_flag("installed", status.installed);
        print_flag("running", status.running);
        print_flag("autostart", status.autostart);
    }

    Ok(())
}

fn print_flag(name: &str, value: bool) {
    let mark = if value { "✓".green() } else { "✗".red() };
    println!("{} {}", mark, name);
}

fn print_restart_hint() {
    println!(
        "Run `{}` to apply.",
        "libinput-gestures-manager daemon restart".bold()
    );
}
