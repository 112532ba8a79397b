//! Loads the process-wide [`Config`]. The configuration is read once from
//! `picopaper.yaml` at the project root and is immutable for the rest of the
//! run; the pipeline takes it by reference rather than reaching for ambient
//! state, so tests can run against alternate configurations.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

const PROJECT_FILE: &str = "picopaper.yaml";

/// A single navigation bar entry.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NavbarItem {
    pub label: String,
    pub url: String,
}

/// The project file as written by the user. Everything except the blog title
/// has a sensible default.
#[derive(Deserialize)]
struct Project {
    title: String,

    #[serde(default)]
    description: String,

    #[serde(default = "default_theme")]
    theme: String,

    #[serde(default)]
    exclude_feeds_from_main: Vec<String>,

    #[serde(default)]
    navbar: Vec<NavbarItem>,
}

fn default_theme() -> String {
    String::from("default")
}

/// The resolved configuration for a run: the user's blog settings plus the
/// fixed directory layout (`items`, `output`, `theme/<theme>`, `images`,
/// `static`) anchored at the project root.
pub struct Config {
    pub title: String,
    pub description: String,
    pub theme: String,

    /// Feed names whose posts are left off the main index. The feeds' own
    /// pages are still generated.
    pub exclude_feeds_from_main: Vec<String>,
    pub navbar: Vec<NavbarItem>,

    pub items_directory: PathBuf,
    pub output_directory: PathBuf,
    pub index_template: PathBuf,
    pub post_template: PathBuf,
    pub theme_assets_directory: PathBuf,
    pub images_directory: PathBuf,
    pub static_directory: PathBuf,
}

impl Config {
    /// Loads the configuration from `picopaper.yaml` in `root`.
    pub fn from_directory(root: &Path) -> Result<Config> {
        Config::from_project_file(&root.join(PROJECT_FILE))
    }

    /// Loads the configuration from a project file, resolving all directory
    /// paths relative to the file's parent directory.
    pub fn from_project_file(path: &Path) -> Result<Config> {
        let file = File::open(path)
            .map_err(|e| anyhow!("Opening project file `{}`: {}", path.display(), e))?;
        let project: Project = serde_yaml::from_reader(file)
            .map_err(|e| anyhow!("Parsing project file `{}`: {}", path.display(), e))?;
        match path.parent() {
            None => Err(anyhow!(
                "Can't get parent directory for provided project file path '{:?}'",
                path
            )),
            Some(root) => Ok(Config::resolve(project, root)),
        }
    }

    fn resolve(project: Project, root: &Path) -> Config {
        let theme_directory = root.join("theme").join(&project.theme);
        let templates_directory = theme_directory.join("templates");
        Config {
            items_directory: root.join("items"),
            output_directory: root.join("output"),
            index_template: templates_directory.join("index.tmpl"),
            post_template: templates_directory.join("post.tmpl"),
            theme_assets_directory: theme_directory.join("assets"),
            images_directory: root.join("images"),
            static_directory: root.join("static"),
            title: project.title,
            description: project.description,
            theme: project.theme,
            exclude_feeds_from_main: project.exclude_feeds_from_main,
            navbar: project.navbar,
        }
    }
}
