//! Defines the [`Parser`] for source file names. The file name is the single
//! source of truth for a post's routing metadata: its date, kind, slug, and
//! optional feed tag are all encoded as
//! `YYYY-MM-DD_<kind>_<slug>[_<feed>].md`.

use chrono::NaiveDate;
use regex::Regex;
use std::fmt;

/// The post kinds admitted by the naming convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// A brief post. It gets a listing entry and its own permalink page.
    Short,

    /// A full article with its own permalink page.
    Long,

    /// A static page. It gets a permalink page but never appears on the main
    /// index or in feed groups.
    Page,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Short => "short",
            Kind::Long => "long",
            Kind::Page => "page",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The routing metadata recovered from a source file name.
#[derive(Clone, Debug, PartialEq)]
pub struct FileName {
    pub date: NaiveDate,
    pub kind: Kind,
    pub slug: String,

    /// The optional feed tag. `None` means the post is untagged and appears
    /// only on the main index.
    pub feed: Option<String>,
}

/// Parses [`FileName`] metadata out of source file names.
pub struct Parser {
    pattern: Regex,
}

impl Parser {
    pub fn new() -> Parser {
        Parser {
            // The slug match is non-greedy so that a trailing
            // lowercase-alphanumeric-hyphen token after the last underscore
            // is taken as the feed tag rather than as part of the slug.
            pattern: Regex::new(
                r"^(\d{4}-\d{2}-\d{2})_(short|long|page)_(.+?)(?:_([a-z0-9-]+))?\.md$",
            )
            .unwrap(), // the pattern is a constant and always compiles
        }
    }

    /// Parses a file name against the naming convention. `Ok(None)` means
    /// the name doesn't match and the file should be skipped with a notice.
    /// `Err` means the name matched the convention but its date segment does
    /// not denote a real calendar date, which indicates a data problem
    /// rather than a stray file and is fatal for the run.
    pub fn parse(&self, file_name: &str) -> Result<Option<FileName>> {
        let captures = match self.pattern.captures(file_name) {
            None => return Ok(None),
            Some(captures) => captures,
        };

        // The pattern only guarantees the date's shape; constructing the
        // date itself can still fail (e.g. month 13).
        let date = NaiveDate::parse_from_str(&captures[1], "%Y-%m-%d").map_err(|err| {
            Error::Date {
                file_name: file_name.to_owned(),
                err,
            }
        })?;

        Ok(Some(FileName {
            date,
            kind: match &captures[2] {
                "short" => Kind::Short,
                "long" => Kind::Long,
                "page" => Kind::Page,
                // the pattern only admits the three literals above
                _ => unreachable!(),
            },
            slug: captures[3].to_owned(),
            feed: captures.get(4).map(|m| m.as_str().to_owned()),
        }))
    }
}

impl Default for Parser {
    fn default() -> Parser {
        Parser::new()
    }
}

/// Represents the result of a file-name parse operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error parsing a file name that matched the naming
/// convention.
#[derive(Debug)]
pub enum Error {
    /// Returned when a matching file name carries a date that doesn't denote
    /// a real calendar date.
    Date {
        file_name: String,
        err: chrono::ParseError,
    },
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Date { file_name, err } => {
                write!(f, "Parsing date in file name '{}': {}", file_name, err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Date { file_name: _, err } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(file_name: &str) -> Result<Option<FileName>> {
        Parser::new().parse(file_name)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_full() -> Result<()> {
        assert_eq!(
            parse("2024-01-15_long_hello-world_tech.md")?,
            Some(FileName {
                date: date(2024, 1, 15),
                kind: Kind::Long,
                slug: String::from("hello-world"),
                feed: Some(String::from("tech")),
            }),
        );
        Ok(())
    }

    #[test]
    fn test_parse_without_feed() -> Result<()> {
        assert_eq!(
            parse("2023-06-01_short_quick-note.md")?,
            Some(FileName {
                date: date(2023, 6, 1),
                kind: Kind::Short,
                slug: String::from("quick-note"),
                feed: None,
            }),
        );
        Ok(())
    }

    #[test]
    fn test_parse_page() -> Result<()> {
        assert_eq!(
            parse("2023-12-31_page_about.md")?,
            Some(FileName {
                date: date(2023, 12, 31),
                kind: Kind::Page,
                slug: String::from("about"),
                feed: None,
            }),
        );
        Ok(())
    }

    #[test]
    fn test_parse_underscored_slug_with_feed() -> Result<()> {
        // the last underscore-delimited lowercase token is the feed
        assert_eq!(
            parse("2024-01-01_long_my_post_tech.md")?,
            Some(FileName {
                date: date(2024, 1, 1),
                kind: Kind::Long,
                slug: String::from("my_post"),
                feed: Some(String::from("tech")),
            }),
        );
        Ok(())
    }

    #[test]
    fn test_parse_underscored_slug_without_feed() -> Result<()> {
        // `BAR` can't be a feed tag (uppercase), so it stays in the slug
        assert_eq!(
            parse("2024-01-01_long_foo_BAR.md")?,
            Some(FileName {
                date: date(2024, 1, 1),
                kind: Kind::Long,
                slug: String::from("foo_BAR"),
                feed: None,
            }),
        );
        Ok(())
    }

    #[test]
    fn test_reject_unknown_kind() -> Result<()> {
        assert_eq!(parse("2024-01-01_medium_essay.md")?, None);
        Ok(())
    }

    #[test]
    fn test_reject_unconventional_name() -> Result<()> {
        assert_eq!(parse("bad-name.md")?, None);
        Ok(())
    }

    #[test]
    fn test_reject_malformed_date() -> Result<()> {
        assert_eq!(parse("2024-1-1_long_essay.md")?, None);
        Ok(())
    }

    #[test]
    fn test_impossible_date_is_an_error() {
        assert!(parse("2024-13-40_long_essay.md").is_err());
    }
}
