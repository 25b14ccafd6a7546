//! Interactive address book shell.
//!
//! # Responsibility
//! - Bootstrap logging, preferences and storage for one session.
//! - Read commands line by line and print their feedback.

use addressbook_core::{
    core_version, default_log_level, init_logging, sample_address_book, AddressBook,
    AddCommand, ClearCommand, DeleteCommand, EditCommand, ExitCommand, FindCommand, HelpCommand,
    JsonUserPrefsStorage, ListCommand, LogicManager, ModelManager, RemarkCommand, Storage,
    StorageManager, UserPrefs,
};
use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "addressbook")]
#[command(version, about = "Keep track of your contacts from the terminal")]
struct Cli {
    /// Preferences file; created on exit if missing.
    #[arg(long, default_value = "preferences.json")]
    prefs: PathBuf,

    /// One of trace|debug|info|warn|error.
    #[arg(long)]
    log_level: Option<String>,

    /// Directory for rolling log files.
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_dir = std::path::absolute(&cli.log_dir)
        .with_context(|| format!("cannot resolve log directory `{}`", cli.log_dir.display()))?;
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }

    let prefs_storage = JsonUserPrefsStorage::new(&cli.prefs);
    let user_prefs = match prefs_storage.read_user_prefs() {
        Ok(Some(prefs)) => prefs,
        Ok(None) => UserPrefs::default(),
        Err(err) => {
            warn!("event=prefs_load module=cli status=error error={err}");
            eprintln!("{err}; using default preferences");
            UserPrefs::default()
        }
    };

    let storage = StorageManager::open(user_prefs.address_book_file_path.clone(), prefs_storage)
        .with_context(|| {
            format!(
                "cannot open address book `{}`",
                user_prefs.address_book_file_path.display()
            )
        })?;
    let address_book = initial_address_book(&storage)?;
    let mut logic = LogicManager::new(ModelManager::new(address_book, user_prefs), storage);

    info!(
        "event=session_start module=cli status=ok version={}",
        core_version()
    );
    run_shell(&mut logic)?;

    logic
        .save_user_prefs()
        .context("cannot save preferences")?;
    info!("event=session_end module=cli status=ok");
    Ok(())
}

/// Saved book, else sample data on first run, else an empty book once the
/// unreadable one has been backed up.
fn initial_address_book(storage: &StorageManager) -> anyhow::Result<AddressBook> {
    match storage.read_address_book() {
        Ok(Some(book)) => Ok(book),
        Ok(None) => {
            info!("event=address_book_load module=cli status=ok source=sample");
            Ok(sample_address_book())
        }
        Err(err) => {
            warn!("event=address_book_load module=cli status=error error={err}");
            let backup = storage
                .back_up_address_book()
                .context("refusing to start: unreadable address book could not be backed up")?;
            eprintln!(
                "Data file could not be loaded ({err}); a copy was kept at `{}`. \
Starting with an empty address book.",
                backup.display()
            );
            Ok(AddressBook::new())
        }
    }
}

fn run_shell(logic: &mut LogicManager<StorageManager>) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    print_person_list(logic, &mut stdout)?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("cannot read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(output) => {
                writeln!(stdout, "{}", output.feedback_to_user)?;
                if output.show_help {
                    writeln!(stdout, "{}", usage_text())?;
                }
                if output.exit {
                    break;
                }
                print_person_list(logic, &mut stdout)?;
            }
            Err(err) => writeln!(stdout, "{err}")?,
        }
    }
    Ok(())
}

fn print_person_list(
    logic: &LogicManager<StorageManager>,
    out: &mut impl Write,
) -> std::io::Result<()> {
    for (position, person) in logic.filtered_person_list().iter().enumerate() {
        writeln!(out, "{:>3}. {person}", position + 1)?;
    }
    Ok(())
}

fn usage_text() -> String {
    [
        AddCommand::MESSAGE_USAGE,
        EditCommand::MESSAGE_USAGE,
        DeleteCommand::MESSAGE_USAGE,
        RemarkCommand::MESSAGE_USAGE,
        FindCommand::MESSAGE_USAGE,
        HelpCommand::MESSAGE_USAGE,
    ]
    .iter()
    .map(|usage| usage.to_string())
    .chain([
        format!("{}: Shows every person.", ListCommand::COMMAND_WORD),
        format!("{}: Deletes every person.", ClearCommand::COMMAND_WORD),
        format!("{}: Saves and quits.", ExitCommand::COMMAND_WORD),
    ])
    .collect::<Vec<_>>()
    .join("\n\n")
}
