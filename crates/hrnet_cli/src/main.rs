//! HRnet command-line front end.
//!
//! # Responsibility
//! - Create employee records and list them against a durable slot.
//! - Keep all record rules in `hrnet_core`; this binary only maps
//!   arguments to field updates and prints results.

use clap::{Args, Parser, Subcommand};
use hrnet_core::{
    init_logging, load_config, page_of, CoreConfig, CreateEmployeeError, EmployeeDraft,
    EmployeeField, EmployeeService, FieldUpdate, RegionTable, SortDirection, SortSpec,
    StorageBackend, StoreStartup,
};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_DATA_DIR: &str = "hrnet-data";

#[derive(Debug, Parser)]
#[command(name = "hrnet", about = "Create and list employee records", version)]
struct Cli {
    /// JSON config file. Defaults to a file slot under `hrnet-data/`.
    #[arg(long, value_name = "path", global = true)]
    config: Option<PathBuf>,
    /// Directory holding the JSON slot; overrides the configured storage.
    #[arg(long = "data-dir", value_name = "dir", global = true)]
    data_dir: Option<PathBuf>,
    /// Absolute directory for rolling log files. Logging is off when omitted.
    #[arg(long = "log-dir", value_name = "dir", global = true)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core linkage info.
    Ping,
    /// Validate and store a new employee.
    Add(AddArgs),
    /// List employees, most recent first.
    List(ListArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(long = "first-name", default_value = "")]
    first_name: String,
    #[arg(long = "last-name", default_value = "")]
    last_name: String,
    /// YYYY-MM-DD
    #[arg(long = "date-of-birth", default_value = "")]
    date_of_birth: String,
    /// YYYY-MM-DD
    #[arg(long = "start-date", default_value = "")]
    start_date: String,
    #[arg(long, default_value = "")]
    street: String,
    #[arg(long, default_value = "")]
    city: String,
    /// Region code, e.g. CA.
    #[arg(long, default_value = "")]
    state: String,
    #[arg(long = "zip-code", default_value = "")]
    zip_code: String,
    #[arg(long, default_value = "Sales")]
    department: String,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Free-text filter; a two-letter query matches the state code exactly.
    #[arg(long, default_value = "")]
    query: String,
    /// Column id to sort by (firstName, startDate, zipCode, ...).
    #[arg(long, value_name = "column")]
    sort: Option<String>,
    /// Sort descending instead of ascending.
    #[arg(long, requires = "sort")]
    desc: bool,
    /// 1-based page to print.
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Rows per page; all rows when omitted.
    #[arg(long = "per-page", value_name = "rows")]
    per_page: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, String> {
    let config = resolve_config(&cli)?;
    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(config.log_level(), log_dir).map_err(|err| err.to_string())?;
    }

    match cli.command {
        Command::Ping => {
            println!("hrnet_core ping={}", hrnet_core::ping());
            println!("hrnet_core version={}", hrnet_core::core_version());
            Ok(ExitCode::SUCCESS)
        }
        Command::Add(args) => add(&config, &args),
        Command::List(args) => list(&config, &args),
    }
}

fn resolve_config(cli: &Cli) -> Result<CoreConfig, String> {
    let mut config = match cli.config.as_ref() {
        Some(path) => load_config(path).map_err(|err| err.to_string())?,
        None => CoreConfig {
            storage: StorageBackend::File {
                dir: PathBuf::from(DEFAULT_DATA_DIR),
            },
            ..CoreConfig::default()
        },
    };
    if let Some(dir) = cli.data_dir.clone() {
        config.storage = StorageBackend::File { dir };
    }
    Ok(config)
}

fn add(config: &CoreConfig, args: &AddArgs) -> Result<ExitCode, String> {
    let draft = build_draft(args)?;
    let persistence = config.open_persistence().map_err(|err| err.to_string())?;
    let mut service = EmployeeService::initialize(persistence);
    warn_if_recovered(service.store().startup());

    match service.create_now(&draft) {
        Ok(employee) => {
            println!(
                "Employee created: {} {}",
                employee.first_name(),
                employee.last_name()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(CreateEmployeeError::Validation(errors)) => {
            for (field, message) in errors.iter() {
                eprintln!("{}: {message}", field.label());
            }
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.to_string()),
    }
}

fn build_draft(args: &AddArgs) -> Result<EmployeeDraft, String> {
    let raw_fields = [
        (EmployeeField::FirstName, &args.first_name),
        (EmployeeField::LastName, &args.last_name),
        (EmployeeField::DateOfBirth, &args.date_of_birth),
        (EmployeeField::StartDate, &args.start_date),
        (EmployeeField::Street, &args.street),
        (EmployeeField::City, &args.city),
        (EmployeeField::State, &args.state),
        (EmployeeField::ZipCode, &args.zip_code),
        (EmployeeField::Department, &args.department),
    ];

    let mut draft = EmployeeDraft::new();
    for (field, raw) in raw_fields {
        let update = FieldUpdate::parse(field.id(), raw).map_err(|err| err.to_string())?;
        draft.apply(update);
    }
    Ok(draft)
}

fn list(config: &CoreConfig, args: &ListArgs) -> Result<ExitCode, String> {
    let sort = match args.sort.as_deref() {
        Some(column_id) => {
            let column = EmployeeField::from_id(column_id)
                .ok_or_else(|| format!("unknown sort column `{column_id}`"))?;
            let direction = if args.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            Some(SortSpec { column, direction })
        }
        None => None,
    };

    let persistence = config.open_persistence().map_err(|err| err.to_string())?;
    let service = EmployeeService::initialize(persistence);
    warn_if_recovered(service.store().startup());
    let regions = RegionTable::us_states();
    let rows = service.list(&args.query, sort, &regions);

    if rows.is_empty() {
        println!("No employees found.");
        return Ok(ExitCode::SUCCESS);
    }

    let per_page = args.per_page.unwrap_or(0);
    let page = page_of(&rows, args.page, per_page);

    let header = EmployeeField::ALL.map(EmployeeField::label);
    println!("{}", header.join("\t"));
    for row in page {
        let cells = EmployeeField::ALL.map(|column| row.column_text(column));
        println!("{}", cells.join("\t"));
    }
    if per_page > 0 {
        let pages = rows.len().div_ceil(per_page);
        println!("Page {} of {pages} ({} employees)", args.page.max(1), rows.len());
    }
    Ok(ExitCode::SUCCESS)
}

fn warn_if_recovered(startup: &StoreStartup) {
    if let StoreStartup::Recovered {
        reason,
        preserved_as,
    } = startup
    {
        eprintln!("warning: stored employees could not be read ({reason})");
        match preserved_as {
            Some(location) => eprintln!("warning: unreadable data kept at {location}"),
            None => eprintln!("warning: unreadable data could not be kept; saving is disabled"),
        }
    }
}
