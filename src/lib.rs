//! The library code for the `picopaper` static blog generator. The pipeline
//! is a linear transform over a directory of dated Markdown files:
//!
//! 1. Parsing routing metadata out of source file names ([`crate::name`])
//! 2. Loading and rendering the posts themselves ([`crate::post`])
//! 3. Partitioning posts into the main feed and named sub-feeds
//!    ([`crate::feed`])
//! 4. Templating and writing the output HTML tree ([`crate::write`])
//! 5. Copying theme assets, images, and static files ([`crate::assets`])
//!
//! The file name is the single source of truth for a post's routing
//! metadata: `YYYY-MM-DD_<kind>_<slug>[_<feed>].md` encodes the date, the
//! post kind (`short`, `long`, or `page`), the URL slug, and the optional
//! feed tag. The body only contributes the title (its first heading line)
//! and the rendered HTML.
//!
//! [`crate::build::build_site`] stitches the stages together; everything is
//! sequential and the whole site is rebuilt from scratch on every run.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod assets;
pub mod build;
pub mod config;
pub mod feed;
pub mod markdown;
pub mod name;
pub mod post;
pub mod value;
pub mod write;
