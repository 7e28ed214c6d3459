mod books;
mod dates;
mod reading;
mod scan;
mod schedule;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use timeline_types::Week;

use books::BookTable;
use scan::DatasetFile;

#[derive(Parser)]
#[command(
    name = "cfm_timeline",
    about = "Come, Follow Me reading timeline generator"
)]
struct Cli {
    /// Book table JSON (defaults to the bundled Old Testament table)
    #[arg(long, global = true)]
    books: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Compute daily schedules for week datasets, writing them back in place
    Generate {
        /// A weeks JSON file, or a directory to scan for weeks*.json
        #[arg(default_value = "data")]
        data: PathBuf,
    },
    /// Parse one reading string and print its 7-day schedule as JSON
    Parse {
        /// Reading text, e.g. "Genesis 1-2; Moses 2-3; Abraham 4-5"
        reading: Vec<String>,
    },
    /// Print the book table inventory
    Books,
    /// Show which week of a timeline a date falls in
    Current {
        /// Weeks JSON file
        #[arg(long, default_value = "data/weeks.json")]
        weeks: PathBuf,
        /// Date to look up as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let table = load_book_table(cli.books.as_deref());

    match cli.command {
        Some(Command::Generate { data }) => run_generate(&data, &table),
        Some(Command::Parse { reading }) => run_parse(&reading.join(" "), &table),
        Some(Command::Books) => run_books(&table),
        Some(Command::Current { weeks, date }) => run_current(&weeks, date.as_deref()),
        // Default: regenerate everything under data/
        None => run_generate(Path::new("data"), &table),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  FILE HELPERS
// ═══════════════════════════════════════════════════════════════════════

fn load_book_table(path: Option<&Path>) -> BookTable {
    match path {
        Some(p) => BookTable::from_path(p).unwrap_or_else(|| {
            eprintln!("Cannot read book table {}", p.display());
            std::process::exit(1);
        }),
        None => BookTable::bundled(),
    }
}

fn read_weeks(path: &Path) -> Vec<Week> {
    let json = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Cannot read {}: {e}", path.display());
        std::process::exit(1);
    });
    serde_json::from_str(&json).unwrap_or_else(|e| {
        eprintln!("Cannot parse {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn write_weeks(path: &Path, weeks: &[Week]) {
    let json = serde_json::to_string_pretty(weeks).expect("JSON serialization failed");
    std::fs::write(path, json + "\n")
        .unwrap_or_else(|e| panic!("cannot write {}: {e}", path.display()));
    eprintln!("  {} ({} weeks)", path.display(), weeks.len());
}

// ═══════════════════════════════════════════════════════════════════════
//  GENERATE MODE: fill in cfmDaily for every week of every dataset
// ═══════════════════════════════════════════════════════════════════════

fn run_generate(data: &Path, table: &BookTable) {
    let datasets = if data.is_file() {
        let label = data
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("weeks")
            .to_string();
        vec![DatasetFile {
            path: data.to_path_buf(),
            label,
        }]
    } else {
        scan::scan_datasets(data)
    };

    if datasets.is_empty() {
        eprintln!("No weeks*.json datasets found under {}", data.display());
        std::process::exit(1);
    }

    for dataset in &datasets {
        eprintln!("══════════════════════════════════════════");
        eprintln!("  {}", dataset.label);
        eprintln!("══════════════════════════════════════════");

        let mut weeks = read_weeks(&dataset.path);

        let mut parsed = 0usize;
        let mut special = 0usize;
        let mut fallback = 0usize;
        let mut total_chapters = 0usize;

        for week in &mut weeks {
            let assignment = week.cfm.reading.clone();

            if reading::is_special_reading(&assignment) {
                special += 1;
            } else {
                let chapters = reading::parse_reading(&assignment, table);
                if chapters.is_empty() {
                    fallback += 1;
                } else {
                    parsed += 1;
                    total_chapters += chapters.len();
                }
            }

            let daily = schedule::reading_to_daily(&assignment, table);
            eprintln!(
                "  {}: \"{}\"",
                dates::format_week_number(week.week),
                assignment
            );
            eprintln!(
                "    {}",
                serde_json::to_string(&daily).expect("JSON serialization")
            );

            week.cfm_daily = Some(daily.to_vec());
        }

        eprintln!("\nParsed {parsed} weeks ({total_chapters} chapters total)");
        if special > 0 {
            eprintln!("  Special readings:   {special}");
        }
        if fallback > 0 {
            eprintln!("  Day-one fallbacks:  {fallback}");
        }

        write_weeks(&dataset.path, &weeks);
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  PARSE MODE: one reading string → JSON on stdout
// ═══════════════════════════════════════════════════════════════════════

fn run_parse(assignment: &str, table: &BookTable) {
    let chapters = reading::parse_reading(assignment, table);
    let daily = schedule::reading_to_daily(assignment, table);

    eprintln!("{} chapter(s) parsed from: {}", chapters.len(), assignment);

    #[derive(serde::Serialize)]
    struct ParseResult<'a> {
        reading: &'a str,
        special: bool,
        chapter_count: usize,
        chapters: Vec<timeline_types::ChapterRef>,
        daily: Vec<String>,
    }

    let result = ParseResult {
        reading: assignment,
        special: reading::is_special_reading(assignment),
        chapter_count: chapters.len(),
        chapters,
        daily: daily.to_vec(),
    };

    let json = serde_json::to_string_pretty(&result).expect("JSON serialization");
    println!("{json}");
}

// ═══════════════════════════════════════════════════════════════════════
//  BOOKS MODE: print the book table inventory
// ═══════════════════════════════════════════════════════════════════════

fn run_books(table: &BookTable) {
    for name in table.names() {
        if let Some(count) = table.count(name) {
            println!("{name} ({count})");
        }
    }
    eprintln!(
        "\nTotal: {} books, {} chapters",
        table.len(),
        table.total_chapters()
    );
}

// ═══════════════════════════════════════════════════════════════════════
//  CURRENT MODE: which week does a date fall in
// ═══════════════════════════════════════════════════════════════════════

fn run_current(weeks_path: &Path, date: Option<&str>) {
    let weeks = read_weeks(weeks_path);

    let day = match date {
        Some(text) => dates::parse_iso_date(text).unwrap_or_else(|| {
            eprintln!("Invalid date: {text} (expected YYYY-MM-DD)");
            std::process::exit(1);
        }),
        None => chrono::Local::now().date_naive(),
    };

    let number = dates::current_week_number(&weeks, day);
    eprintln!("{} → {}", day, dates::format_week_number(number));

    if let Some(week) = weeks.iter().find(|w| w.week == number) {
        let json = serde_json::to_string_pretty(week).expect("JSON serialization");
        println!("{json}");
    }
}
