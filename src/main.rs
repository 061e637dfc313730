#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use contactdesk::app::config::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

fn log_dir() -> Option<PathBuf> {
    AppConfig::project_dirs().map(|dirs| dirs.data_dir().join("logs"))
}

/// Route tracing (and `log` records from eframe/egui) into a log file.
/// Returns the log file path when file logging could be set up.
fn init_logging(config: &AppConfig) -> Option<PathBuf> {
    // RUST_LOG wins over the config file
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::builder().parse(config.log_filter()))
        .unwrap_or_else(|err| {
            eprintln!("Invalid log filter ({}), using defaults", err);
            tracing_subscriber::EnvFilter::new(contactdesk::app::config::DEFAULT_LOG_FILTER)
        });

    let log_path = log_dir().and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        Some(dir.join("contactdesk.log"))
    });

    let file = log_path.as_ref().and_then(|path| {
        std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .ok()
    });

    match file {
        Some(file) => {
            // Set restrictive permissions (owner read/write only)
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let (Ok(metadata), Some(path)) = (file.metadata(), log_path.as_ref()) {
                    let mut perms = metadata.permissions();
                    perms.set_mode(0o600);
                    if let Err(e) = std::fs::set_permissions(path, perms) {
                        eprintln!("Failed to set log file permissions: {}", e);
                    }
                }
            }

            let subscriber = tracing_subscriber::registry().with(filter).with(
                tracing_subscriber::fmt::layer()
                    .with_writer(move || file.try_clone().expect("Failed to clone log file handle"))
                    .with_ansi(false), // No ANSI colors in file
            );
            tracing::subscriber::set_global_default(subscriber)
                .expect("Failed to set tracing subscriber");
        }
        None => {
            let subscriber = tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
            tracing::subscriber::set_global_default(subscriber)
                .expect("Failed to set tracing subscriber");
        }
    }

    // Bridge log crate events to tracing; must come after the subscriber is set
    tracing_log::LogTracer::init().expect("Failed to initialize log-to-tracing bridge");

    log_path
}

fn setup_panic_handler() {
    // Installed before logging so early crashes still leave a trace
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "ContactDesk crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        if let Some(dir) = log_dir() {
            let _ = std::fs::create_dir_all(&dir);
            let crash_log_path = dir.join("crash.log");

            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
            }

            eprintln!("\n{}", crash_msg);
            eprintln!("Crash log written to: {:?}", crash_log_path);
        } else {
            eprintln!("\n{}", crash_msg);
        }
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_panic_handler();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    let log_path = init_logging(&config);
    tracing::info!("contactdesk starting, log file: {:?}", log_path);
    if let Some(err) = config_error {
        tracing::warn!("Ignoring config file, using defaults: {:#}", err);
    }
    tracing::debug!("Effective config: {:?}", config);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Contact Book")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([560.0, 400.0])
            .with_maximized(config.start_maximized),
        ..Default::default()
    };

    eframe::run_native(
        "Contact Book",
        native_options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(contactdesk::ContactApp::new(cc, config)))
        }),
    )?;

    tracing::info!("contactdesk exited");
    Ok(())
}
