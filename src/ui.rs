// UI layer: the interactive menu loop, built on `dialoguer` prompts.
// The functions are small and synchronous to make the flow easy to follow.
//
// Every prompt re-asks indefinitely until the input is valid; the only way
// out of the session is the quit command with its Y/N confirmation.

use crate::catalog::{self, Book};
use crate::style::Styles;
use anyhow::Result;
use chrono::{Datelike, Local};
use crossterm::style::{Color, Stylize};
use dialoguer::{Confirm, Input};
use std::path::Path;

/// Render a prompt string with its role color baked in, so `dialoguer`
/// prints it already styled.
fn tinted(text: &str, color: Color) -> String {
    format!("{}", text.with(color))
}

/// Main interactive menu. Owns the in-memory catalog for the session and
/// blocks until the user confirms quitting.
///
/// Commands: `1` add a book, `2` list the catalog, `q`/`Q` quit. Anything
/// else reports an invalid option and shows the menu again.
pub fn main_menu(path: &Path, mut books: Vec<Book>, styles: &Styles) -> Result<()> {
    loop {
        println!("{}", "\n--- Library Database Menu ---".with(styles.header));
        println!("1) Add new book");
        println!("2) Print current database content");
        println!("Q) Quit");
        let choice: String = Input::new()
            .with_prompt(tinted("Choose an option", styles.prompt))
            .interact_text()?;

        match choice.trim().to_lowercase().as_str() {
            "1" => {
                if let Some(book) = add_book(&books, styles)? {
                    catalog::add(&mut books, book);
                    println!("{}", "Book added successfully!".with(styles.good));
                    // A failed write is not fatal: the in-memory catalog
                    // stays mutated and the next add retries the rewrite.
                    if let Err(e) = catalog::save(path, &books) {
                        println!("{}", format!("Error: {e}").with(styles.bad));
                    }
                }
                println!("Returning to the main menu...");
            }
            "2" => print_books(&books, styles),
            "q" => {
                let quit = Confirm::new()
                    .with_prompt(tinted("Are you sure you want to quit?", styles.warn))
                    .interact()?;
                if quit {
                    println!("{}", "Exiting the program. Goodbye!".with(styles.prompt));
                    return Ok(());
                }
                println!("Returning to the main menu...");
            }
            _ => println!("{}", "Invalid option, please choose again.".with(styles.bad)),
        }
    }
}

/// Run the add flow: collect and validate the four fields, handle the
/// duplicate-override prompt, and ask for a final confirmation. Returns the
/// record to commit, or `None` if the user abandoned the add.
fn add_book(books: &[Book], styles: &Styles) -> Result<Option<Book>> {
    println!("{}", "\n--- Adding a New Book ---".with(styles.header));

    // Duplicate override restarts this loop rather than recursing, so a
    // stubborn user re-entering the same book cannot grow the stack.
    loop {
        let candidate = collect_book(styles)?;

        if catalog::exists(books, &candidate) {
            println!(
                "{}",
                "This book already exists in the database.".with(styles.warn)
            );
            let retry = Confirm::new()
                .with_prompt(tinted(
                    "Do you want to add a new book with different information?",
                    styles.warn,
                ))
                .interact()?;
            if retry {
                println!("Please enter the new information.");
                continue;
            }
            println!("Book not added.");
            return Ok(None);
        }

        println!("\nNew book details:");
        println!("Name: {}", candidate.title);
        println!("Author: {}", candidate.author);
        println!("ISBN: {}", candidate.isbn);
        println!("Year: {}", candidate.year);

        let confirm = Confirm::new()
            .with_prompt(tinted(
                "Do you want to add this book to the database?",
                styles.warn,
            ))
            .interact()?;
        if confirm {
            return Ok(Some(candidate));
        }
        println!("Book not added.");
        return Ok(None);
    }
}

/// Prompt for each field in turn. `dialoguer`'s `validate_with` re-prompts
/// until the validator passes, which gives the indefinite retry behavior;
/// the ISBN uses an explicit loop because the normalized form is what gets
/// stored and compared.
fn collect_book(styles: &Styles) -> Result<Book> {
    let title: String = Input::new()
        .with_prompt(tinted("Enter the name of the book", styles.prompt))
        .validate_with(|input: &String| -> Result<(), &str> {
            if catalog::valid_title(input) {
                Ok(())
            } else {
                Err("Book name cannot be empty and may not contain '/'.")
            }
        })
        .interact_text()?;
    let title = catalog::title_case(&title);

    let author: String = Input::new()
        .with_prompt(tinted("Enter the name of the author", styles.prompt))
        .validate_with(|input: &String| -> Result<(), &str> {
            if catalog::valid_author(input) {
                Ok(())
            } else {
                Err("Author name should only contain letters, spaces, hyphens, or apostrophes.")
            }
        })
        .interact_text()?;
    let author = catalog::title_case(&author);

    let isbn = loop {
        let raw: String = Input::new()
            .with_prompt(tinted("Enter the 13-digit ISBN of the book", styles.prompt))
            .interact_text()?;
        match catalog::normalize_isbn(&raw) {
            Some(isbn) => break isbn,
            None => println!(
                "{}",
                "Invalid ISBN. Please enter a 13-digit number.".with(styles.bad)
            ),
        }
    };

    let current_year = Local::now().year();
    let year: i32 = Input::new()
        .with_prompt(tinted("Enter the publishing year", styles.prompt))
        .validate_with(move |input: &i32| -> Result<(), String> {
            if catalog::valid_year(*input, current_year) {
                Ok(())
            } else {
                Err(format!(
                    "Invalid year. Please enter a year between 0 and {current_year}."
                ))
            }
        })
        .interact_text()?;

    Ok(Book {
        title,
        author,
        isbn,
        year,
    })
}

/// Print every record in the catalog's current (year-ascending) order.
fn print_books(books: &[Book], styles: &Styles) {
    println!(
        "{}",
        "\n--- Current Database Content (Sorted by Oldest First) ---\n".with(styles.header)
    );
    for book in books {
        println!(
            "Name: {}, Author: {}, ISBN: {}, Year: {}",
            book.title, book.author, book.isbn, book.year
        );
    }
    println!("\nReturning to the main menu...");
}
