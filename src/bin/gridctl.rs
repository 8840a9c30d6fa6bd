//! gridctl - Structural edits on responsive grids written in grid notation

#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use bsgrid::{
    crop_grid,
    diagnostics::{check_grid, format_diagnostics},
    load_grid_with_config, to_markup, to_notation, Dimensions, GridConfig, GridError, GridResult,
    GridUtils, InsertColumnsOptions, InsertRowsOptions, RemoveColumnsOptions, RemoveRowsOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "gridctl")]
#[command(version)]
#[command(about = "gridctl - Insert, remove and crop rows and columns of a responsive grid", long_about = None)]
struct Cli {
    /// Operation to apply
    #[command(subcommand)]
    command: Commands,

    /// Input file path (reads from stdin if not provided)
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Write container/row/col markup instead of notation
    #[arg(long, global = true)]
    markup: bool,

    /// Text of the cells created by the edit (empty for blank cells)
    #[arg(long, global = true, default_value = "")]
    placeholder: String,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct Span {
    /// Index of the first row or column
    at: usize,

    /// How many rows or columns
    #[arg(default_value_t = 1)]
    count: usize,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Insert rows before row AT
    InsertRows {
        #[command(flatten)]
        span: Span,

        /// Copy the cell layout of the row above
        #[arg(long, conflicts_with = "copy_below")]
        copy_above: bool,

        /// Copy the cell layout of row AT
        #[arg(long)]
        copy_below: bool,
    },

    /// Insert columns before column AT
    InsertColumns {
        #[command(flatten)]
        span: Span,
    },

    /// Remove rows starting at row AT
    RemoveRows {
        #[command(flatten)]
        span: Span,
    },

    /// Remove columns starting at column AT
    RemoveColumns {
        #[command(flatten)]
        span: Span,
    },

    /// Keep only the rectangle between two corner slots
    Crop {
        first_row: usize,
        first_column: usize,
        last_row: usize,
        last_column: usize,
    },

    /// Check the grid for structural problems
    Check {
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input = match cli.input {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let config = GridConfig::default().with_placeholder_text(cli.placeholder.as_str());
    let (mut doc, grid) = match load_grid_with_config(&input, &config) {
        Ok(loaded) => loaded,
        Err(err) => exit_with_error(&err),
    };

    if let Commands::Check { no_color } = cli.command {
        let result = check_grid(&doc, grid);
        println!("{}", format_diagnostics(&result, !no_color));

        if result.has_errors() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let utils = GridUtils::new(config);
    let edited = doc.change(|scope| -> GridResult<_> {
        match cli.command {
            Commands::InsertRows {
                span,
                copy_above,
                copy_below,
            } => {
                let mut options = InsertRowsOptions::new(span.at, span.count);
                if copy_above || copy_below {
                    options = options.copy_structure_from_above(copy_above);
                }
                utils.insert_rows(scope, grid, options)?;
                Ok(grid)
            }
            Commands::InsertColumns { span } => {
                let options = InsertColumnsOptions::new(span.at, span.count);
                utils.insert_columns(scope, grid, options)?;
                Ok(grid)
            }
            Commands::RemoveRows { span } => {
                let options = RemoveRowsOptions::new(span.at, span.count);
                utils.remove_rows(scope, grid, options)?;
                Ok(grid)
            }
            Commands::RemoveColumns { span } => {
                let options = RemoveColumnsOptions::new(span.at, span.count);
                utils.remove_columns(scope, grid, options)?;
                Ok(grid)
            }
            Commands::Crop {
                first_row,
                first_column,
                last_row,
                last_column,
            } => crop_grid(
                scope,
                grid,
                Dimensions::new(first_row, first_column, last_row, last_column),
            ),
            Commands::Check { .. } => Ok(grid),
        }
    });

    let grid = match edited {
        Ok(grid) => grid,
        Err(err) => exit_with_error(&err),
    };

    let result = if cli.markup {
        to_markup(&doc, grid)
    } else {
        to_notation(&doc, grid)
    };

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn exit_with_error(err: &GridError) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(1);
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install bsgrid --features cli");
    eprintln!("  gridctl [OPTIONS] <COMMAND>");
}
