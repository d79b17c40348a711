// Entrypoint for the CLI application.
// - Keeps `main` small: parse args, load the catalog, hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling.

use clap::Parser;
use crossterm::style::Stylize;
use librarydb_cli::{catalog, style::Styles, ui::main_menu};
use std::path::PathBuf;

/// Menu-driven manager for a small personal library catalog kept in a
/// '/'-delimited text file.
#[derive(Parser)]
#[command(name = "librarydb", version)]
struct Cli {
    /// Catalog file, resolved relative to the base directory.
    file: String,

    /// Directory the catalog file lives under.
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let styles = Styles::default();
    let path = cli.base_dir.join(&cli.file);

    // A load failure (missing file, unreadable line) is terminal for the
    // session: report it and end cleanly instead of carrying a half catalog.
    let books = match catalog::load(&path) {
        Ok(books) => books,
        Err(e) => {
            println!("{}", format!("Error: {e}").with(styles.bad));
            return Ok(());
        }
    };

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(&path, books, &styles)?;
    Ok(())
}
