//! Responsible for templating and writing the site's HTML pages to disk:
//! the main index, one index per feed, and a permalink page per post.
//! Template problems of any sort are fatal for the whole run; there is no
//! partial-site fallback.

use crate::config::NavbarItem;
use crate::post::Post;
use crate::value;
use gtmpl::Template;
use gtmpl_value::Value;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Reads and parses a single template file. A missing file or a template
/// syntax error aborts the run.
pub fn parse_template(path: &Path) -> Result<Template> {
    use std::io::Read;
    let mut contents = String::new();
    File::open(path)
        .map_err(|err| Error::OpenTemplate {
            path: path.to_owned(),
            err,
        })?
        .read_to_string(&mut contents)?;

    let mut template = Template::default();
    template.parse(&contents).map_err(Error::ParseTemplate)?;
    Ok(template)
}

/// Renders index and post pages from [`Post`]s and writes them into the
/// output tree.
pub struct Writer<'a> {
    /// The template for index pages (main and per-feed). It consumes
    /// `{title, blog_title, blog_description, navbar_items, posts}`.
    pub index_template: &'a Template,

    /// The template for individual post pages. It consumes
    /// `{title, blog_title, blog_description, navbar_items, post}`.
    pub post_template: &'a Template,

    pub blog_title: &'a str,
    pub blog_description: &'a str,
    pub navbar: &'a [NavbarItem],

    /// The root of the output tree.
    pub output_directory: &'a Path,
}

impl Writer<'_> {
    /// Writes the main index to `{output}/index.html`.
    pub fn write_main_index(&self, posts: &[&Post]) -> Result<()> {
        self.write_index(
            self.blog_title.to_owned(),
            posts,
            &self.output_directory.join("index.html"),
        )
    }

    /// Writes a feed's own index to `{output}/feed/{name}/index.html`.
    pub fn write_feed_index(&self, feed_name: &str, posts: &[&Post]) -> Result<()> {
        self.write_index(
            format!("{} - {}", feed_name, self.blog_title),
            posts,
            &self
                .output_directory
                .join("feed")
                .join(feed_name)
                .join("index.html"),
        )
    }

    /// Writes a post's permalink page to `{output}/{slug}/index.html`. Every
    /// kind gets a permalink page; short posts appear both inline on the
    /// index listings and at their own URL.
    pub fn write_post_page(&self, post: &Post) -> Result<()> {
        let mut context = self.base_context(format!("{} - {}", post.title, self.blog_title));
        context.insert("post".to_owned(), Value::from(post));
        self.render(
            self.post_template,
            Value::Object(context),
            &self.output_directory.join(&post.slug).join("index.html"),
        )
    }

    fn write_index(&self, title: String, posts: &[&Post], path: &Path) -> Result<()> {
        let mut context = self.base_context(title);
        context.insert("posts".to_owned(), value::posts(posts));
        self.render(self.index_template, Value::Object(context), path)
    }

    /// The context fields shared by the index and post templates.
    fn base_context(&self, title: String) -> HashMap<String, Value> {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("title".to_owned(), Value::String(title));
        m.insert("blog_title".to_owned(), self.blog_title.into());
        m.insert("blog_description".to_owned(), self.blog_description.into());
        m.insert("navbar_items".to_owned(), value::navbar(self.navbar));
        m
    }

    /// Templates `value` and writes the result to `path`, creating parent
    /// directories on demand. Prior output files are overwritten in place;
    /// stale pages left over from removed or renamed sources are not pruned.
    fn render(&self, template: &Template, value: Value, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let context = gtmpl::Context::from(value)?;
        template.execute(&mut File::create(path)?, &context)?;
        println!("✓ Generated {}", path.display());
        Ok(())
    }
}

/// The result of a fallible page-writing operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a page-writing operation.
#[derive(Debug)]
pub enum Error {
    /// Returned for I/O problems while opening a template file.
    OpenTemplate { path: PathBuf, err: io::Error },

    /// Returned for errors parsing a template file.
    ParseTemplate(String),

    /// Returned for errors executing a template.
    Template(String),

    /// Returned for errors writing the output files.
    Io(io::Error),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OpenTemplate { path, err } => {
                write!(f, "Opening template file '{}': {}", path.display(), err)
            }
            Error::ParseTemplate(err) => err.fmt(f),
            Error::Template(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::OpenTemplate { path: _, err } => Some(err),
            Error::ParseTemplate(_) => None,
            Error::Template(_) => None,
            Error::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    /// Converts an [`io::Error`] into an [`Error`]. This allows us to use
    /// the `?` operator for fallible I/O operations.
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<String> for Error {
    /// Converts a template error message ([`String`]) into an [`Error`].
    /// This allows us to use the `?` operator for fallible template
    /// operations.
    fn from(err: String) -> Error {
        Error::Template(err)
    }
}
