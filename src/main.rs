//! strgen — generate a random string from the command line.
//!
//! By default the session is throwaway: nothing is written to the history
//! mirror unless `--save` is given.

use std::process::ExitCode;

use clap::Parser;

use strgen::app::App;
use strgen::logging;
use strgen::managers::charset_registry::CharsetRegistryTrait;
use strgen::services::clipboard::default_clipboard;
use strgen::services::scheduler::ThreadScheduler;
use strgen::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use strgen::storage::{self, BoxedStore, MemoryStore};
use strgen::types::notification::Notification;

#[derive(Debug, Parser)]
#[command(
    name = "strgen",
    about = "Generate a random string from selectable character sets",
    version
)]
struct CliArgs {
    /// Number of characters. Defaults to the configured length.
    length: Option<usize>,
    /// Comma-separated character set ids: uppercase, lowercase, numbers, symbols.
    #[arg(long, value_delimiter = ',', value_name = "ids")]
    sets: Option<Vec<String>>,
    /// Settings file to use instead of the platform default.
    #[arg(long, value_name = "path")]
    config: Option<String>,
    /// Record the generated string in the persisted history.
    #[arg(long)]
    save: bool,
    /// Print the persisted history instead of generating.
    #[arg(long, conflicts_with = "save")]
    history: bool,
    /// Copy the generated string to the clipboard.
    #[arg(long)]
    copy: bool,
}

fn report(notification: &Notification) {
    eprintln!("{}: {}", notification.title, notification.description);
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let mut engine = SettingsEngine::new(args.config.clone());
    let settings = match engine.load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("strgen: {}", e);
            return ExitCode::from(2);
        }
    };
    logging::init(&settings.logging);

    let (store, durable): (BoxedStore, bool) = if args.save || args.history {
        storage::open_store_or_memory(&settings.storage)
    } else {
        let memory: BoxedStore = Box::new(MemoryStore::new(&settings.storage.scope));
        (memory, false)
    };

    let mut app = App::with_parts(engine, store, default_clipboard(), Box::new(ThreadScheduler));
    if !durable {
        app = app.with_volatile_history();
    }

    if args.history {
        for record in app.history_entries() {
            println!(
                "{}  {:>3}  {}",
                record.timestamp.format("%Y-%m-%d %H:%M:%S"),
                record.length,
                record.value
            );
        }
        return ExitCode::SUCCESS;
    }

    if let Some(ids) = &args.sets {
        if let Some(unknown) = ids.iter().find(|id| app.registry.get(id).is_none()) {
            eprintln!("strgen: unknown character set '{}'", unknown);
            return ExitCode::from(2);
        }
        app.registry.apply_enabled(ids);
    }

    let generated = match app.generate(args.length) {
        Ok(generated) => generated,
        Err(e) => {
            report(&Notification::from(&e));
            return ExitCode::from(2);
        }
    };
    println!("{}", generated.record.value);

    if args.save && !generated.persisted {
        report(&Notification::persistence_unavailable());
    }
    if args.copy {
        report(&app.copy(&generated.record.value));
    }

    ExitCode::SUCCESS
}
