use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::LevelFilter;
use nav_core::model::{Locale, NavigationStatus, RoadName, RouteProgress};
use nav_core::version::NAVIGATION_UI_VERSION;
use parking_lot::Mutex;
use services::{NavUiConfig, ProgressFeed, StatusFeed, load_route_progress, parse_route_progress};
use ui::vm::{CellFactory, RowKind, StepListVm, StepRowVm};
use ui::{App, UiApp, build_app_context};

const DEMO_ROUTE: &str = include_str!("../assets/demo_route.json");

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidIndex { flag: &'static str, raw: String },
    InvalidLogLevel { raw: String },
    InvalidInterval { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidIndex { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidLogLevel { raw } => write!(f, "invalid --log-level value: {raw}"),
            ArgsError::InvalidInterval { raw } => write!(f, "invalid --replay-ms value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_index(flag: &'static str, raw: String) -> Result<usize, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidIndex { flag, raw })
}

struct DesktopApp {
    config: Arc<NavUiConfig>,
    progress_feed: ProgressFeed,
    status_feed: StatusFeed,
    progress: Mutex<RouteProgress>,
    status: Mutex<NavigationStatus>,
}

impl DesktopApp {
    fn new(config: NavUiConfig, progress: RouteProgress) -> Self {
        let status = status_for(&progress, &config.locale);
        Self {
            config: Arc::new(config),
            progress_feed: ProgressFeed::new("route-progress"),
            status_feed: StatusFeed::new("navigation-status"),
            progress: Mutex::new(progress),
            status: Mutex::new(status),
        }
    }

    /// Stores the new position, then notifies subscribers outside the locks.
    fn advance(&self, progress: RouteProgress) {
        let status = status_for(&progress, &self.config.locale);
        *self.progress.lock() = progress.clone();
        *self.status.lock() = status.clone();

        let (leg_index, step_index) = progress.position();
        let notified = self.progress_feed.publish(&progress);
        self.status_feed.publish(&status);
        log::debug!("advanced to leg {leg_index} step {step_index}; {notified} progress subscribers");
    }
}

impl UiApp for DesktopApp {
    fn config(&self) -> Arc<NavUiConfig> {
        Arc::clone(&self.config)
    }

    fn progress_feed(&self) -> ProgressFeed {
        self.progress_feed.clone()
    }

    fn status_feed(&self) -> StatusFeed {
        self.status_feed.clone()
    }

    fn current_progress(&self) -> RouteProgress {
        self.progress.lock().clone()
    }

    fn current_status(&self) -> NavigationStatus {
        self.status.lock().clone()
    }
}

/// The road being travelled, approximated by the current leg's first major way.
fn status_for(progress: &RouteProgress, locale: &Locale) -> NavigationStatus {
    let roads = progress
        .current_leg()
        .and_then(|leg| leg.major_ways().next())
        .map(|way| vec![RoadName::new(way, locale.language_code())])
        .unwrap_or_default();
    NavigationStatus::new(roads)
}

fn next_position(progress: &RouteProgress) -> Option<(usize, usize)> {
    let (leg_index, step_index) = progress.position();
    let route = &progress.route;
    if route.contains_step(leg_index, step_index + 1) {
        Some((leg_index, step_index + 1))
    } else if route.contains_step(leg_index + 1, 0) {
        Some((leg_index + 1, 0))
    } else {
        None
    }
}

fn spawn_replay(app: Arc<DesktopApp>, interval: Duration) {
    std::thread::spawn(move || {
        loop {
            std::thread::sleep(interval);
            let next = {
                let current = app.progress.lock();
                next_position(&current).map(|(leg, step)| current.at(leg, step))
            };
            match next {
                Some(progress) => app.advance(progress),
                None => {
                    log::info!("replay reached the end of the route");
                    break;
                }
            }
        }
    });
}

struct Args {
    config_path: PathBuf,
    route_path: Option<PathBuf>,
    leg_index: usize,
    step_index: usize,
    replay: Option<Duration>,
    log_level: LevelFilter,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [options] [--replay-ms <ms>]");
    eprintln!("  cargo run -p app -- steps [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>      navigation UI settings (default: nav-ui.toml)");
    eprintln!("  --route <path>       route JSON; the bundled demo route when omitted");
    eprintln!("  --leg <index>        current leg (default: 0)");
    eprintln!("  --step <index>       current step within the leg (default: 0)");
    eprintln!("  --log-level <level>  off, error, warn, info, debug, trace (default: warn)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  NAV_CONFIG, NAV_ROUTE, NAV_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Steps,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "steps" => Some(Self::Steps),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut config_path = std::env::var("NAV_CONFIG")
            .ok()
            .map_or_else(|| PathBuf::from("nav-ui.toml"), PathBuf::from);
        let mut route_path = std::env::var("NAV_ROUTE").ok().map(PathBuf::from);
        let mut log_level = std::env::var("NAV_LOG")
            .ok()
            .and_then(|raw| LevelFilter::from_str(&raw).ok())
            .unwrap_or(LevelFilter::Warn);
        let mut leg_index = 0;
        let mut step_index = 0;
        let mut replay = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => config_path = PathBuf::from(require_value(args, "--config")?),
                "--route" => route_path = Some(PathBuf::from(require_value(args, "--route")?)),
                "--leg" => leg_index = parse_index("--leg", require_value(args, "--leg")?)?,
                "--step" => step_index = parse_index("--step", require_value(args, "--step")?)?,
                "--replay-ms" => {
                    let value = require_value(args, "--replay-ms")?;
                    let millis: u64 = value
                        .parse()
                        .ok()
                        .filter(|millis| *millis > 0)
                        .ok_or_else(|| ArgsError::InvalidInterval { raw: value.clone() })?;
                    replay = Some(Duration::from_millis(millis));
                }
                "--log-level" => {
                    let value = require_value(args, "--log-level")?;
                    log_level = LevelFilter::from_str(&value)
                        .map_err(|_| ArgsError::InvalidLogLevel { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            config_path,
            route_path,
            leg_index,
            step_index,
            replay,
            log_level,
        })
    }

    fn load_progress(&self) -> Result<RouteProgress, services::FixtureError> {
        match &self.route_path {
            Some(path) => load_route_progress(path, self.leg_index, self.step_index),
            None => parse_route_progress(DEMO_ROUTE, self.leg_index, self.step_index),
        }
    }
}

struct PlainCells;

impl CellFactory for PlainCells {
    type Cell = String;

    fn make_cell(&self, kind: RowKind, row: &StepRowVm) -> String {
        let mut line = format!("  {:>8}  {}", row.distance_label, row.primary_text);
        if let Some(secondary) = &row.secondary_text {
            line.push_str(&format!(" ({secondary})"));
        }
        if kind == RowKind::Step {
            line.push_str("\n  ·");
        }
        line
    }
}

fn print_steps(config: &NavUiConfig, progress: RouteProgress) {
    let strings = config.localized_strings();
    let mut list = StepListVm::new(progress, config.sanitizer.clone());
    list.rebuild();

    if list.section_count() == 0 {
        println!("No upcoming steps.");
        return;
    }
    for section in 0..list.section_count() {
        if let Some(title) = list.title_for_header(section, &strings) {
            println!("{title}");
        }
        for row in 0..list.row_count(section) {
            if let Some(cell) = list.build_cell(section, row, &PlainCells) {
                println!("{cell}");
            }
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the window.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    env_logger::Builder::new()
        .filter_level(parsed.log_level)
        .init();
    log::info!("navigation ui {NAVIGATION_UI_VERSION}");

    let config = NavUiConfig::load(&parsed.config_path)?;
    let progress = parsed.load_progress()?;

    match cmd {
        Command::Steps => {
            print_steps(&config, progress);
            Ok(())
        }
        Command::Ui => {
            let app = Arc::new(DesktopApp::new(config, progress));
            if let Some(interval) = parsed.replay {
                spawn_replay(Arc::clone(&app), interval);
            }

            let shared: Arc<dyn UiApp> = app;
            let context = build_app_context(&shared);

            // tao may default to always-on-top in some dev setups
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Navigation")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
