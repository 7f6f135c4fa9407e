#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process, sync::Arc};

#[cfg(target_os = "linux")]
use iced::window::settings::PlatformSpecific;
use iced::{Settings, Size};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

use kiibord_auth::{services::DebugOtpService, state::Services, State};
use kiibord_ui::{component::text, font};

use kiibord_gui::{
    config::Config,
    dir::KiibordDirectory,
    logger::{parse_log_level, setup_logger},
    settings::FileThemeStore,
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(KiibordDirectory),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: kiibord-gui [OPTIONS]

Options:
    --datadir <PATH>    Path of kiibord datadir
    -v, --version       Display kiibord-gui version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--datadir" {
            if let Some(a) = iter.next() {
                res.push(Arg::DatadirPath(KiibordDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else {
            return Err(format!("unknown argument '{}'", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let datadir = match args.as_slice() {
        [] => KiibordDirectory::new_default()?,
        [Arg::DatadirPath(datadir)] => datadir.clone(),
        _ => {
            return Err("Unknown args combination".into());
        }
    };
    let created = !datadir.exists();
    datadir.init()?;

    let config = Config::load(&datadir)?;
    let log_level = parse_log_level()?
        .or(config.log_level()?)
        .unwrap_or(LevelFilter::INFO);
    setup_logger(log_level, &datadir)?;
    setup_panic_hook();
    info!(
        "kiibord-gui {} starting, datadir: {}",
        VERSION,
        datadir.path().display()
    );
    if created {
        info!("Created data directory {}", datadir.path().display());
    }

    let otp = Arc::new(DebugOtpService::new(config.debug_accepted_code.clone()));
    let services = Services {
        issuer: otp.clone(),
        verifier: otp,
        theme_store: Arc::new(FileThemeStore::new(&datadir)),
    };
    let flow = config.flow_config();

    let settings = Settings {
        id: Some("Kiibord".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    #[allow(unused_mut)]
    let mut window_settings = iced::window::Settings {
        size: Size {
            width: 560.0,
            height: 820.0,
        },
        min_size: Some(Size {
            width: 480.0,
            height: 640.0,
        }),
        position: iced::window::Position::Centered,
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = PlatformSpecific {
            application_id: "Kiibord".to_string(),
            ..Default::default()
        };
    }

    if let Err(e) = iced::application(State::title, State::update, State::view)
        .theme(State::theme)
        .subscription(State::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || State::new(flow, services))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["kiibord-gui".into(), "--meth".into()]).is_err());
        assert!(parse_args(vec!["kiibord-gui".into(), "--datadir".into()]).is_err());
        assert_eq!(
            Some(vec![]),
            parse_args(vec!["kiibord-gui".into()]).ok()
        );
        assert_eq!(
            Some(vec![Arg::DatadirPath(KiibordDirectory::new(PathBuf::from(
                "hello"
            )))]),
            parse_args(vec![
                "kiibord-gui".into(),
                "--datadir".into(),
                "hello".into()
            ])
            .ok()
        );
    }
}
