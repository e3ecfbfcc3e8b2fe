use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tire_import::cli;
use tire_import::config::ImportConfig;
use tire_import::error::ImportResult;

#[derive(Parser)]
#[command(name = "tire-import")]
#[command(about = "Import tire price lists (.xls/.xlsx) into SQLite")]
#[command(long_about = "Tire Import - price-list spreadsheet → tire records

Finds the header row (Тип шины | Сезон | Название | Остаток | Цена | Страна | Год),
decodes every data row and stores one record per row.

COMMANDS:
  import    - Import a worksheet into SQLite
  decode    - Decode model abbreviations and print the fields
  classify  - Print the category for tire-type cells
  sheets    - List the sheets of a workbook

EXAMPLES:
  tire-import import \"Прайс шины.xls\" --sheet ACBA-2017-02-22-tyres
  tire-import import prices.xlsx --config import.yaml --dry-run -v
  tire-import import prices.xlsx --dry-run --output records.yaml
  tire-import decode \"205/55 R16С Nokian Nordman 91H XL шип FR\"")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Import a price-list worksheet into SQLite.

Rows before the header row are skipped. Blank rows are skipped.
The target table is dropped and recreated unless --append is given.

CONFIG FILE (all keys optional, flags win):
  input: \"Прайс шины.xls\"
  sheet: ACBA-2017-02-22-tyres
  database: tires.db
  table: tires
  recreate_table: true
  header: [Тип шины, Сезон, Название, Остаток, Цена, Страна, Год]")]
    /// Import a worksheet into SQLite
    Import {
        /// Workbook path (.xls, .xlsx, .ods)
        input: Option<PathBuf>,

        /// Worksheet name
        #[arg(short, long)]
        sheet: Option<String>,

        /// SQLite database file
        #[arg(short, long, env = "TIRE_IMPORT_DB")]
        database: Option<PathBuf>,

        /// Target table
        #[arg(short, long)]
        table: Option<String>,

        /// YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Keep existing rows instead of recreating the table
        #[arg(long)]
        append: bool,

        /// Decode without writing to the database
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Write the dry-run records to this YAML file
        #[arg(short, long, requires = "dry_run")]
        output: Option<PathBuf>,

        /// Fail when no header row is found
        #[arg(long)]
        strict: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decode model abbreviations and print the fields
    Decode {
        /// Model cell text, e.g. "215/60 R16 95H"
        #[arg(required = true)]
        texts: Vec<String>,

        /// Print the fields as a YAML list
        #[arg(long)]
        yaml: bool,
    },

    /// Print the category for tire-type cells
    Classify {
        /// Tire-type cell text, e.g. "Грузовые"
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// List the sheets of a workbook
    Sheets {
        /// Workbook path
        input: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "tire_import=debug"
    } else {
        "tire_import=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ImportResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Import {
            input,
            sheet,
            database,
            table,
            config,
            append,
            dry_run,
            output,
            strict,
            verbose,
        } => {
            init_tracing(verbose);

            let mut config = match config {
                Some(path) => ImportConfig::load(&path)?,
                None => ImportConfig::default(),
            };
            if let Some(input) = input {
                config.input = input;
            }
            if let Some(sheet) = sheet {
                config.sheet = sheet;
            }
            if let Some(database) = database {
                config.database = database;
            }
            if let Some(table) = table {
                config.table = table;
            }
            if append {
                config.recreate_table = false;
            }

            cli::import(config, dry_run, output, strict, verbose).map(|_| ())
        }

        Commands::Decode { texts, yaml } => cli::decode(texts, yaml),

        Commands::Classify { texts } => cli::classify(texts),

        Commands::Sheets { input } => cli::sheets(input),
    }
}
