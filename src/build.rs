//! Exports the [`build_site`] function which stitches together the pipeline
//! stages: collecting posts ([`crate::post`]), partitioning them into the
//! main feed and named sub-feeds ([`crate::feed`]), rendering index and post
//! pages ([`crate::write`]), and publishing assets ([`crate::assets`]).

use crate::assets;
use crate::config::Config;
use crate::feed;
use crate::post::{Collector, Error as CollectError};
use crate::write::{parse_template, Error as WriteError, Writer};
use std::fmt;

/// Runs the full pipeline described by `config`, reporting per-step progress
/// on stdout. Any fatal error propagates immediately; output already written
/// by earlier steps is left in place (there is no rollback).
pub fn build_site(config: &Config) -> Result<()> {
    println!(
        "Starting picopaper generation with theme '{}'...",
        config.theme
    );

    std::fs::create_dir_all(&config.output_directory)?;

    let posts = Collector::new().collect(&config.items_directory)?;
    println!("Found {} posts", posts.len());

    let index_template = parse_template(&config.index_template)?;
    let post_template = parse_template(&config.post_template)?;

    let writer = Writer {
        index_template: &index_template,
        post_template: &post_template,
        blog_title: &config.title,
        blog_description: &config.description,
        navbar: &config.navbar,
        output_directory: &config.output_directory,
    };

    // the main index carries every non-page post outside the excluded feeds
    writer.write_main_index(&feed::main_feed(&posts, &config.exclude_feeds_from_main))?;

    // a feed's own page carries all of its posts, excluded feeds included
    for (feed_name, group) in feed::feed_groups(&posts) {
        writer.write_feed_index(feed_name, &group)?;
    }

    // every kind (short, long, page) gets a permalink page
    for post in &posts {
        writer.write_post_page(post)?;
    }

    assets::publish(
        &config.theme_assets_directory,
        &config.images_directory,
        &config.static_directory,
        &config.output_directory,
    )?;

    println!(
        "\n✓ Site generated successfully in {}/",
        config.output_directory.display()
    );
    Ok(())
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site. Errors can occur while collecting
/// posts, templating and writing pages, publishing assets, and in other I/O.
#[derive(Debug)]
pub enum Error {
    /// Returned for errors collecting posts from the source directory.
    Collect(CollectError),

    /// Returned for errors templating or writing HTML pages to disk.
    Write(WriteError),

    /// Returned for errors publishing assets.
    Assets(assets::Error),

    /// Returned for other I/O errors.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Collect(err) => err.fmt(f),
            Error::Write(err) => err.fmt(f),
            Error::Assets(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Collect(err) => Some(err),
            Error::Write(err) => Some(err),
            Error::Assets(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<CollectError> for Error {
    /// Converts [`CollectError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: CollectError) -> Error {
        Error::Collect(err)
    }
}

impl From<WriteError> for Error {
    /// Converts [`WriteError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: WriteError) -> Error {
        Error::Write(err)
    }
}

impl From<assets::Error> for Error {
    /// Converts [`assets::Error`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: assets::Error) -> Error {
        Error::Assets(err)
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
