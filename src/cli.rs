use std::{env, fs, path::PathBuf};

use chrono::{Local, NaiveDate};

use rto_track::{
    app::Tracker,
    attendance::DayStatus,
    storage::cache::Cache,
    storage::config::Config,
};

pub enum CliMode {
    Summary,
    Show(NaiveDate),
    Set(NaiveDate, Option<DayStatus>),
    Token(String),
    Load,
    Save,
    Export(PathBuf),
    Import(PathBuf),
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    let mut args = env::args().skip(1);

    let Some(arg) = args.next() else {
        return Ok(CliMode::Summary);
    };

    match arg.as_str() {
        "--show" => Ok(CliMode::Show(parse_date_arg(args.next())?)),
        "--set" => {
            let date = parse_date_arg(args.next())?;
            let status = parse_status_arg(args.next())?;
            Ok(CliMode::Set(date, status))
        }
        "--token" => {
            let token = args.next().ok_or("Missing token value")?;
            Ok(CliMode::Token(token))
        }
        "--load" => Ok(CliMode::Load),
        "--save" => Ok(CliMode::Save),
        "--export" => {
            let path = args.next().ok_or("Missing export file path")?;
            Ok(CliMode::Export(PathBuf::from(path)))
        }
        "--import" => {
            let path = args.next().ok_or("Missing import file path")?;
            Ok(CliMode::Import(PathBuf::from(path)))
        }
        "--help" => {
            println!("{}", usage());
            std::process::exit(0);
        }
        _ => Err(format!("Unknown argument: {}", arg)),
    }
}

pub fn usage() -> String {
    [
        "Usage: rto-track [COMMAND]",
        "",
        "Commands:",
        "  (none)                     Print the attendance summary",
        "  --show YYYY/MM/DD          Print the recorded status for a date",
        "  --set YYYY/MM/DD STATUS    Record a status (office|holiday|wfh|ooo|none)",
        "  --token TOKEN              Store the remote access token and load events",
        "  --load                     Replace local events from the remote store",
        "  --save                     Push all local events to the remote store",
        "  --export FILE              Write all events to a JSON file",
        "  --import FILE              Replace local events from a JSON file",
    ]
    .join("\n")
}

fn parse_date_arg(value: Option<String>) -> Result<NaiveDate, String> {
    let date_str = value.ok_or("Missing date argument")?;
    NaiveDate::parse_from_str(&date_str, "%Y/%m/%d")
        .map_err(|_| format!("Invalid date '{}'. Use YYYY/MM/DD.", date_str))
}

fn parse_status_arg(value: Option<String>) -> Result<Option<DayStatus>, String> {
    let status_str = value.ok_or("Missing status argument")?;
    if status_str == "none" {
        return Ok(None);
    }
    DayStatus::parse(&status_str)
        .map(Some)
        .ok_or_else(|| {
            format!(
                "Invalid status '{}'. Use office, holiday, wfh, ooo or none.",
                status_str
            )
        })
}

pub async fn run(mode: CliMode) -> anyhow::Result<()> {
    let config = Config::load_or_create()?;
    let cache = Cache::open(&config.storage.cache_path)?;
    let mut tracker = Tracker::new(&config, cache, Local::now().date_naive());

    match mode {
        CliMode::Summary => print_summary(&tracker),
        CliMode::Show(date) => match tracker.on_date_selected(date) {
            Some(status) => println!("{}: {}", date, status),
            None => println!("{}: no entry", date),
        },
        CliMode::Set(date, status) => {
            tracker.on_status_chosen(date, status);
            match status {
                Some(status) => println!("Recorded {} for {}.", status, date),
                None => println!("Cleared entry for {}.", date),
            }
            print_summary(&tracker);
        }
        CliMode::Token(value) => {
            tracker.set_access_token(&value)?;
            println!("Access token saved.");
            if let Err(err) = tracker.trigger_load().await {
                eprintln!("Failed to load remote events: {}", err);
                eprintln!("Local events are unchanged; retry with --load or fall back to --import.");
            } else {
                println!("Loaded {} events from the remote store.", tracker.events().len());
            }
        }
        CliMode::Load => {
            if !tracker.has_access_token() {
                println!("No access token configured. Set one with --token.");
                return Ok(());
            }
            match tracker.trigger_load().await {
                Ok(()) => {
                    println!("Loaded {} events from the remote store.", tracker.events().len());
                    print_summary(&tracker);
                }
                Err(err) => {
                    eprintln!("Failed to load remote events: {}", err);
                    eprintln!("Local events are unchanged; fall back to --import if the remote stays down.");
                }
            }
        }
        CliMode::Save => {
            if !tracker.has_access_token() {
                println!("No access token configured. Set one with --token.");
                return Ok(());
            }
            match tracker.trigger_save().await {
                Ok(()) => println!("Saved {} events to the remote store.", tracker.events().len()),
                Err(err) => {
                    eprintln!("Failed to save events: {}", err);
                    eprintln!("Fall back to --export to keep a portable copy.");
                }
            }
        }
        CliMode::Export(path) => {
            fs::write(&path, tracker.export_events())?;
            println!("Exported {} events to {}.", tracker.events().len(), path.display());
        }
        CliMode::Import(path) => {
            let content = fs::read_to_string(&path)?;
            match tracker.import_events(&content) {
                Ok(count) => {
                    println!("Imported {} events.", count);
                    print_summary(&tracker);
                }
                Err(err) => eprintln!("Import rejected, events unchanged: {}", err),
            }
        }
    }

    Ok(())
}

fn print_summary(tracker: &Tracker) {
    let window = tracker.window();
    let totals = tracker.aggregates();

    let mut lines = Vec::new();
    lines.push(format!("Attendance – {}", tracker.today().format("%A, %B %d, %Y")));
    lines.push(format!("Window {} to {}", window.start, window.end));
    lines.push(String::new());
    lines.push(format!("Office days:  {}", totals.office_days));
    lines.push(format!("Leave days:   {}", totals.leave_days));
    lines.push(format!("Remote days:  {}", totals.remote_days));
    lines.push(match totals.percentage {
        Some(percentage) => format!("Attendance:   {:.2}%", percentage),
        None => "Attendance:   undefined (every counted workday is remote)".to_string(),
    });
    lines.push(match tracker.prediction() {
        Some(weeks) => format!("Remote weeks available: {:.2}", weeks),
        None => "Remote weeks available: undefined (not enough recorded history)".to_string(),
    });

    if tracker.remote_unreachable() {
        lines.push(String::new());
        lines.push("Remote store unreachable; use --export/--import to move data manually.".to_string());
    }

    println!("{}", lines.join("\n"));
}
