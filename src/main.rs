use clap::{Arg, Command};
use log::LevelFilter;
use sms_filter::config::load_config_or_default;
use sms_filter::loader::PERMISSION_NOTICE;
use sms_filter::view::{render_screen, Screen};
use sms_filter::{
    ClassificationResult, Config, FileStore, LoadOutcome, MessageLoader, MessageState, Settings,
    SpamClassifier, Theme,
};
use std::process;
use std::sync::Arc;

fn build_cli() -> Command {
    Command::new("sms-filter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort an SMS inbox into regular and spam messages")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("sms-filter.yaml"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default configuration file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("inbox")
                .short('i')
                .long("inbox")
                .value_name("FILE")
                .help("Exported inbox file (overrides inbox_path)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("view")
                .long("view")
                .value_name("SCREEN")
                .help("Screen to show: regular, spam, settings or all")
                .default_value("all"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the classification result as JSON")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .value_name("TEXT")
                .help("Classify a single message body and exit")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("dark-mode")
                .long("dark-mode")
                .help("Toggle the configured theme; only the Dark Mode setting on the Settings screen changes")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Only the message screens and JSON output read the inbox.
fn needs_inbox(screens: &[Screen], json: bool) -> bool {
    json || screens.iter().any(|screen| *screen != Screen::Settings)
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        match Config::default().to_file(generate_path) {
            Ok(()) => println!("Default configuration written to: {generate_path}"),
            Err(e) => {
                eprintln!("Error generating configuration: {e:#}");
                process::exit(1);
            }
        }
        return;
    }

    if let Some(text) = matches.get_one::<String>("check") {
        match SpamClassifier::new().first_match(text) {
            Some(keyword) => println!("spam (matched \"{keyword}\")"),
            None => println!("regular"),
        }
        return;
    }

    let screens = match matches.get_one::<String>("view").map(String::as_str) {
        Some("all") | None => Screen::ALL.to_vec(),
        Some(name) => match Screen::from_name(name) {
            Some(screen) => vec![screen],
            None => {
                eprintln!("Unknown screen: {name}. Use regular, spam, settings or all");
                process::exit(1);
            }
        },
    };

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => load_config_or_default(path),
        None => Config::default(),
    };
    if let Some(inbox) = matches.get_one::<String>("inbox") {
        config.inbox_path = inbox.clone();
    }

    let settings = Settings::new(Theme::from_dark(config.dark_theme));
    if matches.get_flag("dark-mode") {
        settings.toggle_theme();
    }

    let json = matches.get_flag("json");
    let result = if needs_inbox(&screens, json) {
        let store = FileStore::new(&config.inbox_path).with_permission(config.read_permission);
        let loader = MessageLoader::new(Arc::new(store), MessageState::new());

        match loader.load_messages().await {
            LoadOutcome::PermissionDenied => eprintln!("{PERMISSION_NOTICE}"),
            LoadOutcome::StoreUnavailable => {
                log::warn!("No messages could be read from {}", config.inbox_path)
            }
            LoadOutcome::Loaded { regular, spam } => {
                log::debug!("{regular} regular, {spam} spam")
            }
        }

        loader.state().current()
    } else {
        log::debug!("Settings only, inbox not loaded");
        Arc::new(ClassificationResult::default())
    };

    if json {
        match serde_json::to_string_pretty(result.as_ref()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing result: {e}");
                process::exit(1);
            }
        }
        return;
    }

    for screen in screens {
        println!(
            "{}",
            render_screen(screen, &result, settings.theme(), &config.timestamp_format)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_screen_alone_skips_inbox() {
        assert!(!needs_inbox(&[Screen::Settings], false));
        assert!(needs_inbox(&[Screen::Settings], true));
        assert!(needs_inbox(&[Screen::Spam], false));
        assert!(needs_inbox(&Screen::ALL, false));
    }

    #[test]
    fn test_dark_mode_help_names_what_it_changes() {
        let cli = build_cli();
        let help = cli
            .get_arguments()
            .find(|arg| arg.get_id() == "dark-mode")
            .and_then(|arg| arg.get_help())
            .map(|help| help.to_string())
            .unwrap();
        assert!(help.contains("Settings screen"));
    }

    #[test]
    fn test_cli_parses_view_and_flags() {
        let matches = build_cli()
            .try_get_matches_from(["sms-filter", "--view", "settings", "--dark-mode"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("view").unwrap(), "settings");
        assert!(matches.get_flag("dark-mode"));
        assert!(!matches.get_flag("json"));
    }
}
