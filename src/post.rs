//! Defines the [`Post`] record and the [`Collector`] that builds the full,
//! date-ordered post sequence from a source directory.

use crate::markdown;
use crate::name::{self, FileName, Kind};
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::fs::{read_dir, File};
use std::io::Read;
use std::path::Path;

const MARKDOWN_EXTENSION: &str = ".md";
const UNTITLED: &str = "Untitled";

/// A single blog post (or static page), fully loaded and rendered. Posts are
/// constructed once during collection and immutable thereafter.
#[derive(Clone, Debug)]
pub struct Post {
    pub date: NaiveDate,
    pub kind: Kind,

    /// The URL segment and output directory name for the post's permalink
    /// page. Uniqueness is not enforced; colliding slugs silently overwrite
    /// each other's output.
    pub slug: String,

    /// The title from the body's first heading line, or `"Untitled"`.
    pub title: String,

    /// The post body, already rendered to HTML.
    pub body: String,

    /// The optional feed tag. `None` means untagged (main index only).
    pub feed: Option<String>,

    /// The source file name, retained for diagnostics.
    pub source_name: String,
}

impl Post {
    /// The post's URL path relative to the site root.
    pub fn url(&self) -> String {
        format!("{}/", self.slug)
    }
}

/// Builds [`Post`]s from a source directory.
pub struct Collector {
    file_names: name::Parser,
    title_pattern: Regex,
}

impl Collector {
    pub fn new() -> Collector {
        Collector {
            file_names: name::Parser::new(),
            // The first heading-shaped line anywhere in the document is the
            // title, not just a heading on line one.
            title_pattern: Regex::new(r"(?m)^#\s+(.+)$").unwrap(),
        }
    }

    /// Scans `items_directory` (non-recursively) for `.md` files, skipping
    /// names that don't match the naming convention with a notice, and
    /// returns all remaining posts (pages included) sorted newest-first.
    /// Entries are visited in file-name order, so posts sharing a date
    /// tie-break deterministically on their source names.
    pub fn collect(&self, items_directory: &Path) -> Result<Vec<Post>> {
        let mut file_names = Vec::new();
        for result in read_dir(items_directory)? {
            let entry = result?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if file_name.ends_with(MARKDOWN_EXTENSION) {
                file_names.push(file_name);
            }
        }

        // read_dir order is platform-dependent
        file_names.sort();

        let mut posts = Vec::with_capacity(file_names.len());
        for file_name in file_names {
            match self.file_names.parse(&file_name)? {
                None => println!("Skipping {}: doesn't match naming convention", file_name),
                Some(parsed) => {
                    posts.push(self.load(&items_directory.join(&file_name), parsed, file_name)?)
                }
            }
        }

        // stable sort: equal dates keep their file-name order
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    /// Loads a single post. A read failure here is fatal for the run: unlike
    /// a naming mismatch, an unreadable post file indicates a data problem.
    fn load(&self, path: &Path, parsed: FileName, source_name: String) -> Result<Post> {
        let mut contents = String::new();
        File::open(path)?.read_to_string(&mut contents)?;
        let (title, body) = self.split_title(&contents);

        Ok(Post {
            date: parsed.date,
            kind: parsed.kind,
            slug: parsed.slug,
            feed: parsed.feed,
            title,
            body: markdown::to_html(body),
            source_name,
        })
    }

    /// Extracts the title from the first heading-shaped line in the document
    /// and returns it along with the remaining body. The title line and
    /// everything before it are stripped from the body, so content preceding
    /// a mid-document title is dropped. When no title line exists, the title
    /// defaults to `"Untitled"` and the body is the whole document.
    fn split_title<'a>(&self, contents: &'a str) -> (String, &'a str) {
        match self.title_pattern.captures(contents) {
            Some(captures) => {
                let end = captures.get(0).unwrap().end(); // group 0 always exists
                (captures[1].to_owned(), contents[end..].trim())
            }
            None => (UNTITLED.to_owned(), contents),
        }
    }
}

impl Default for Collector {
    fn default() -> Collector {
        Collector::new()
    }
}

/// Represents the result of a [`Post`]-collection operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error collecting [`Post`] objects.
#[derive(Debug)]
pub enum Error {
    /// Returned when a file name matched the naming convention but carried
    /// invalid metadata.
    Name(name::Error),

    /// Returned for I/O errors reading the source directory or a post file.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Name(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Name(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<name::Error> for Error {
    /// Converts a [`name::Error`] into an [`Error`]. This allows us to use
    /// the `?` operator when parsing file names.
    fn from(err: name::Error) -> Error {
        Error::Name(err)
    }
}

impl From<std::io::Error> for Error {
    /// Converts a [`std::io::Error`] into an [`Error`]. This allows us to
    /// use the `?` operator for fallible I/O functions.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
