// Catalog store module: owns the on-disk record format and the in-memory
// collection rules. It is intentionally small and synchronous; the UI layer
// calls into it and never touches the file directly.
//
// On-disk format: one record per line, fields joined by '/' in the order
// title/author/isbn/year. There is no escaping, so a '/' inside a field makes
// the line unparseable; input validation rejects the character up front.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single catalog record. `title` and `author` are stored title-cased,
/// `isbn` is stored as the bare 13-digit form (hyphens already stripped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i32,
}

impl Book {
    /// Serialize back to the `title/author/isbn/year` line format.
    pub fn to_line(&self) -> String {
        format!("{}/{}/{}/{}", self.title, self.author, self.isbn, self.year)
    }

    fn from_line(line: &str) -> Option<Book> {
        let mut parts = line.split('/');
        let title = parts.next()?;
        let author = parts.next()?;
        let isbn = parts.next()?;
        let year = parts.next()?;
        // Exactly four fields; a fifth means a stray '/' in the data.
        if parts.next().is_some() {
            return None;
        }
        Some(Book {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            year: year.trim().parse().ok()?,
        })
    }
}

/// Everything that can go wrong touching the catalog file. Load-time errors
/// (`NotFound`, `Read`, `Malformed`) are terminal for the session; `Write`
/// after a mutation is reported but the session continues.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("the file '{}' was not found", path.display())]
    NotFound { path: PathBuf },

    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed record on line {line} of '{}': {details}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        details: String,
    },

    #[error("error writing to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read the whole catalog file and return the records sorted ascending by
/// year. Any unreadable or malformed line fails the entire load; there is no
/// partial recovery.
pub fn load(path: &Path) -> CatalogResult<Vec<Book>> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CatalogError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let mut books = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        let book = Book::from_line(line).ok_or_else(|| CatalogError::Malformed {
            path: path.to_path_buf(),
            line: idx + 1,
            details: format!("expected title/author/isbn/year, got '{}'", line),
        })?;
        books.push(book);
    }
    books.sort_by_key(|b| b.year);
    Ok(books)
}

/// Rewrite the whole catalog file, one newline-terminated record per line.
pub fn save(path: &Path, books: &[Book]) -> CatalogResult<()> {
    let mut out = String::new();
    for book in books {
        out.push_str(&book.to_line());
        out.push('\n');
    }
    fs::write(path, out).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Linear duplicate scan: case-insensitive on title and author, exact on
/// isbn and year.
pub fn exists(books: &[Book], candidate: &Book) -> bool {
    books.iter().any(|book| {
        book.title.to_lowercase() == candidate.title.to_lowercase()
            && book.author.to_lowercase() == candidate.author.to_lowercase()
            && book.isbn == candidate.isbn
            && book.year == candidate.year
    })
}

/// Insert a record and restore the year-ascending invariant. The sort is
/// stable, so records sharing a year keep their insertion order.
pub fn add(books: &mut Vec<Book>, book: Book) {
    books.push(book);
    books.sort_by_key(|b| b.year);
}

// ---- field validation & normalization -------------------------------------
// These are the pure halves of the interactive prompts in `ui`; keeping them
// here lets the rules be unit tested without a terminal.

/// Uppercase the first letter of each whitespace-separated word and lowercase
/// the rest, e.g. "the left hand of darkness" -> "The Left Hand Of Darkness".
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A title must be non-empty after trimming and may not contain the field
/// delimiter.
pub fn valid_title(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty() && !trimmed.contains('/')
}

/// Author names may only contain letters, whitespace, hyphens, or
/// apostrophes, and must be non-empty.
pub fn valid_author(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '-' || c == '\'')
}

/// Strip hyphens and accept only an exactly-13-digit result, returning the
/// normalized form used for storage and duplicate comparison.
pub fn normalize_isbn(raw: &str) -> Option<String> {
    let stripped: String = raw.trim().chars().filter(|&c| c != '-').collect();
    if stripped.len() == 13 && stripped.chars().all(|c| c.is_ascii_digit()) {
        Some(stripped)
    } else {
        None
    }
}

/// Publication years run from 0 through the current calendar year.
pub fn valid_year(year: i32, current_year: i32) -> bool {
    (0..=current_year).contains(&year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn book(title: &str, author: &str, isbn: &str, year: i32) -> Book {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            year,
        }
    }

    #[test]
    fn load_sorts_ascending_by_year() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "A/B/1111111111111/2000").unwrap();
        writeln!(file, "C/D/2222222222222/1990").unwrap();
        file.flush().unwrap();

        let books = load(file.path()).unwrap();
        let years: Vec<i32> = books.iter().map(|b| b.year).collect();
        assert_eq!(years, vec![1990, 2000]);
        assert_eq!(books[0].title, "C");
        assert_eq!(books[1].isbn, "1111111111111");
    }

    #[test]
    fn save_then_load_round_trips() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let books = vec![
            book("Dune", "Frank Herbert", "9780441013593", 1965),
            book("Neuromancer", "William Gibson", "9780441569595", 1984),
        ];
        save(file.path(), &books).unwrap();
        let reloaded = load(file.path()).unwrap();
        assert_eq!(reloaded, books);
    }

    #[test]
    fn load_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[test]
    fn load_fails_whole_file_on_malformed_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "A/B/1111111111111/2000").unwrap();
        writeln!(file, "not a record").unwrap();
        file.flush().unwrap();

        let err = load(file.path()).unwrap_err();
        match err {
            CatalogError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {other}"),
        }
    }

    #[test]
    fn load_rejects_non_numeric_year() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "A/B/1111111111111/soon").unwrap();
        file.flush().unwrap();
        assert!(matches!(
            load(file.path()),
            Err(CatalogError::Malformed { .. })
        ));
    }

    #[test]
    fn exists_is_case_insensitive_on_title_and_author() {
        let books = vec![book("Dune", "Frank Herbert", "9780441013593", 1965)];
        let candidate = book("DUNE", "frank herbert", "9780441013593", 1965);
        assert!(exists(&books, &candidate));
    }

    #[test]
    fn exists_requires_exact_isbn_and_year() {
        let books = vec![book("Dune", "Frank Herbert", "9780441013593", 1965)];
        assert!(!exists(
            &books,
            &book("Dune", "Frank Herbert", "9780441013594", 1965)
        ));
        assert!(!exists(
            &books,
            &book("Dune", "Frank Herbert", "9780441013593", 1966)
        ));
    }

    #[test]
    fn add_keeps_earliest_year_first() {
        let mut books = vec![
            book("A", "B", "1111111111111", 1990),
            book("C", "D", "2222222222222", 2000),
        ];
        add(&mut books, book("E", "F", "3333333333333", 1950));
        assert_eq!(books[0].year, 1950);
        assert_eq!(books[0].title, "E");
    }

    #[test]
    fn add_is_stable_for_equal_years() {
        let mut books = vec![book("First", "A", "1111111111111", 1990)];
        add(&mut books, book("Second", "B", "2222222222222", 1990));
        assert_eq!(books[0].title, "First");
        assert_eq!(books[1].title, "Second");
    }

    #[test]
    fn isbn_hyphens_are_stripped() {
        assert_eq!(
            normalize_isbn("11-1111111111-1").as_deref(),
            Some("1111111111111")
        );
        assert_eq!(
            normalize_isbn("978-0-441-01359-3").as_deref(),
            Some("9780441013593")
        );
        // hyphens are cosmetic; they never rescue a wrong digit count
        assert!(normalize_isbn("111-1111111111-11").is_none());
    }

    #[test]
    fn isbn_must_be_thirteen_digits() {
        assert!(normalize_isbn("123456789012").is_none());
        assert!(normalize_isbn("12345678901234").is_none());
        assert!(normalize_isbn("123456789012x").is_none());
        assert!(normalize_isbn("").is_none());
    }

    #[test]
    fn year_bounds() {
        assert!(valid_year(0, 2026));
        assert!(valid_year(2026, 2026));
        assert!(!valid_year(-1, 2026));
        assert!(!valid_year(2027, 2026));
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("the left hand of darkness"), "The Left Hand Of Darkness");
        assert_eq!(title_case("DUNE"), "Dune");
        assert_eq!(title_case("  spaced   out  "), "Spaced Out");
    }

    #[test]
    fn title_rules() {
        assert!(valid_title("Dune"));
        assert!(!valid_title("   "));
        assert!(!valid_title("TCP/IP Illustrated"));
    }

    #[test]
    fn author_rules() {
        assert!(valid_author("Ursula K Le Guin"));
        assert!(valid_author("Miguel de Cervantes-Saavedra"));
        assert!(valid_author("O'Brien"));
        assert!(!valid_author("Author 2"));
        assert!(!valid_author(""));
    }

    #[test]
    fn to_line_matches_file_format() {
        let b = book("Dune", "Frank Herbert", "9780441013593", 1965);
        assert_eq!(b.to_line(), "Dune/Frank Herbert/9780441013593/1965");
    }
}
