//! a1 - inspect and derive A1-notation ranges from the command line

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sheet_range::column::{letters_to_number, number_to_letters};
use sheet_range::RangeAddress;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "a1")]
#[command(author, version, about = "Spreadsheet range parsing and range arithmetic")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a range and show its fields
    Parse {
        /// Range in A1 notation (e.g. Sheet1!B2:D10)
        range: String,

        /// Print the fields as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Move a range down by one row
    Jump {
        /// Range in A1 notation
        range: String,

        /// Keep the bottom edge fixed so the range shrinks
        #[arg(short, long)]
        truncate: bool,

        /// Number of rows to move
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,
    },

    /// Derive a row span relative to a range's start row
    #[command(allow_negative_numbers = true)]
    Rows {
        /// Range in A1 notation
        range: String,

        /// Offset of the first row from the start row (may be negative)
        start_offset: i64,

        /// Offset of the last row from the start row (default: same as start)
        end_offset: Option<i64>,
    },

    /// Size a range to cover the rows and columns of a CSV file
    Fit {
        /// Top-left corner (or any range whose start is the anchor)
        base: String,

        /// CSV file with the data to place
        input: PathBuf,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Show a range as a zero-based, end-exclusive grid window
    Grid {
        /// Range in A1 notation
        range: String,

        /// Print the window as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Convert a column name to its number, or a number to its name
    Column {
        /// Column letters (e.g. AB) or 1-based number (e.g. 28)
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { range, json } => show_fields(&range, json),
        Commands::Jump {
            range,
            truncate,
            times,
        } => jump(&range, truncate, times),
        Commands::Rows {
            range,
            start_offset,
            end_offset,
        } => rows(&range, start_offset, end_offset),
        Commands::Fit {
            base,
            input,
            delimiter,
        } => fit(&base, &input, delimiter),
        Commands::Grid { range, json } => show_grid(&range, json),
        Commands::Column { value } => convert_column(&value),
    }
}

fn parse_range(text: &str) -> Result<RangeAddress> {
    RangeAddress::parse(text).with_context(|| format!("Failed to parse range '{}'", text))
}

fn optional(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn show_fields(text: &str, json: bool) -> Result<()> {
    let range = parse_range(text)?;

    if json {
        let out = serde_json::to_string_pretty(&range.to_record())
            .context("Failed to encode range as JSON")?;
        println!("{}", out);
        return Ok(());
    }

    println!("Range: {}", range);
    println!("Sheet: {}", range.sheet_name().unwrap_or("-"));
    println!(
        "Start: {} (row {}, column {})",
        range.start_ref(),
        range.start_row(),
        range.start_col()
    );
    println!(
        "End:   {} (row {}, column {})",
        range.end_ref().unwrap_or_else(|| "-".to_string()),
        optional(range.end_row()),
        optional(range.end_col())
    );

    Ok(())
}

fn jump(text: &str, truncate: bool, times: u32) -> Result<()> {
    let mut range = parse_range(text)?;
    for _ in 0..times {
        range.jump_row(truncate);
    }
    println!("{}", range);
    Ok(())
}

fn rows(text: &str, start_offset: i64, end_offset: Option<i64>) -> Result<()> {
    let range = parse_range(text)?;
    println!("{}", range.new_range_by_row(start_offset, end_offset));
    Ok(())
}

fn fit(base: &str, input: &Path, delimiter: char) -> Result<()> {
    let base = parse_range(base)?;

    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", delimiter);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter as u8)
        .from_path(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    let mut data: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to read '{}'", input.display()))?;
        data.push(record.iter().map(str::to_owned).collect());
    }

    if data.is_empty() {
        eprintln!("Warning: '{}' has no rows", input.display());
    }

    println!("{}", RangeAddress::by_data(&data, &base));
    Ok(())
}

fn show_grid(text: &str, json: bool) -> Result<()> {
    let grid = parse_range(text)?.to_grid_range();

    if json {
        let out =
            serde_json::to_string_pretty(&grid).context("Failed to encode grid range as JSON")?;
        println!("{}", out);
        return Ok(());
    }

    println!("Sheet:        {}", grid.sheet_name.as_deref().unwrap_or("-"));
    println!("Start row:    {}", grid.start_row_index);
    println!("Start column: {}", grid.start_column_index);
    println!("End row:      {}", optional(grid.end_row_index));
    println!("End column:   {}", optional(grid.end_column_index));

    Ok(())
}

fn convert_column(value: &str) -> Result<()> {
    if let Ok(number) = value.parse::<u32>() {
        if number == 0 {
            bail!("Column numbers start at 1");
        }
        println!("{}", number_to_letters(number));
        return Ok(());
    }

    let number = letters_to_number(value)
        .with_context(|| format!("'{}' is not a column name (expected A-Z letters)", value))?;
    println!("{}", number);
    Ok(())
}
