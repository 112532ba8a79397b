//! End-to-end tests: scaffold a whole project (project file, theme, items,
//! images, static files) in a temporary directory, run the full pipeline,
//! and check the output tree.

use anyhow::Result;
use picopaper::build::build_site;
use picopaper::config::Config;
use std::fs;
use std::path::Path;

const INDEX_TEMPLATE: &str = "<html><head><title>{{.title}}</title></head>\
<body><header><h1>{{.blog_title}}</h1><p>{{.blog_description}}</p>\
<nav>{{range .navbar_items}}<a href=\"{{.url}}\">{{.label}}</a>{{end}}</nav></header>\
<main>{{range .posts}}<article><a href=\"/{{.url}}\">{{.title}}</a> \
<time>{{.date}}</time></article>{{end}}</main></body></html>";

const POST_TEMPLATE: &str = "<html><head><title>{{.title}}</title></head>\
<body><header><h1>{{.blog_title}}</h1></header>\
<article><h2>{{.post.title}}</h2><time>{{.post.date}}</time>\
{{.post.content}}</article></body></html>";

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn scaffold(root: &Path) {
    write(
        &root.join("picopaper.yaml"),
        "title: Test Blog\n\
         description: we like simple.\n\
         theme: plain\n\
         exclude_feeds_from_main:\n\
         - draft\n\
         navbar:\n\
         - label: Home\n  url: /\n\
         - label: About\n  url: /about/\n",
    );
    write(&root.join("theme/plain/templates/index.tmpl"), INDEX_TEMPLATE);
    write(&root.join("theme/plain/templates/post.tmpl"), POST_TEMPLATE);
    write(&root.join("theme/plain/assets/style.css"), "body { margin: 0 }\n");
    write(
        &root.join("items/2024-01-15_long_hello-world_tech.md"),
        "# Hello World\n\nThis is **bold**.\n",
    );
    write(
        &root.join("items/2024-02-01_short_quick-note.md"),
        "# Quick Note\n\nShort and sweet.\n",
    );
    write(
        &root.join("items/2023-12-31_page_about.md"),
        "# About\n\nAll about this blog.\n",
    );
    write(
        &root.join("items/2024-03-10_long_secret-plans_draft.md"),
        "# Secret Plans\n\nNot on the front page.\n",
    );
    write(&root.join("items/bad-name.md"), "# Stray\n\nNever rendered.\n");
    write(&root.join("images/logo.svg"), "<svg></svg>");
    write(
        &root.join("static/.well-known/security.txt"),
        "Contact: mailto:admin@example.org\n",
    );
    write(&root.join("static/key.asc"), "-----BEGIN PGP PUBLIC KEY BLOCK-----\n");
}

#[test]
fn test_build_site() -> Result<()> {
    let project = tempfile::tempdir()?;
    let root = project.path();
    scaffold(root);

    build_site(&Config::from_directory(root)?)?;
    let output = root.join("output");

    // the main index lists non-page, non-excluded posts, newest first
    let main = fs::read_to_string(output.join("index.html"))?;
    assert!(main.contains("<title>Test Blog</title>"));
    assert!(main.contains("we like simple."));
    assert!(main.contains("<a href=\"/about/\">About</a>"));
    assert!(main.contains("<a href=\"/hello-world/\">Hello World</a>"));
    assert!(main.contains("<a href=\"/quick-note/\">Quick Note</a>"));
    assert!(!main.contains("Secret Plans")); // excluded feed
    assert!(!main.contains("All about this blog")); // pages are never listed
    assert!(!main.contains("Stray")); // skipped file contributes nothing
    assert!(
        main.find("Quick Note").unwrap() < main.find("Hello World").unwrap(),
        "posts must be ordered newest first",
    );

    // permalink pages exist for every kind
    let post = fs::read_to_string(output.join("hello-world/index.html"))?;
    assert!(post.contains("<title>Hello World - Test Blog</title>"));
    assert!(post.contains("<time>2024-01-15</time>"));
    assert!(post.contains("<strong>bold</strong>"));
    assert!(output.join("quick-note/index.html").is_file());
    assert!(output.join("about/index.html").is_file());
    assert!(!output.join("bad-name/index.html").exists());

    // feed pages carry their posts, excluded feeds included
    let tech = fs::read_to_string(output.join("feed/tech/index.html"))?;
    assert!(tech.contains("<title>tech - Test Blog</title>"));
    assert!(tech.contains("Hello World"));
    let draft = fs::read_to_string(output.join("feed/draft/index.html"))?;
    assert!(draft.contains("Secret Plans"));

    // assets, images, and static files land in the output tree
    assert!(output.join("assets/style.css").is_file());
    assert!(output.join("images/logo.svg").is_file());
    assert!(output.join(".well-known/security.txt").is_file());
    assert!(output.join("key.asc").is_file());
    Ok(())
}

#[test]
fn test_rebuild_is_idempotent() -> Result<()> {
    let project = tempfile::tempdir()?;
    let root = project.path();
    scaffold(root);
    let config = Config::from_directory(root)?;

    build_site(&config)?;
    let output = root.join("output");
    let main = fs::read(output.join("index.html"))?;
    let post = fs::read(output.join("hello-world/index.html"))?;
    let feed = fs::read(output.join("feed/tech/index.html"))?;

    build_site(&config)?;
    assert_eq!(main, fs::read(output.join("index.html"))?);
    assert_eq!(post, fs::read(output.join("hello-world/index.html"))?);
    assert_eq!(feed, fs::read(output.join("feed/tech/index.html"))?);
    Ok(())
}

#[test]
fn test_missing_optional_directories_are_skipped() -> Result<()> {
    let project = tempfile::tempdir()?;
    let root = project.path();
    scaffold(root);
    fs::remove_dir_all(root.join("images"))?;
    fs::remove_dir_all(root.join("static"))?;
    fs::remove_dir_all(root.join("theme/plain/assets"))?;

    build_site(&Config::from_directory(root)?)?;

    let output = root.join("output");
    assert!(output.join("index.html").is_file());
    assert!(!output.join("assets").exists());
    assert!(!output.join("images").exists());
    Ok(())
}

#[test]
fn test_missing_template_aborts_the_run() -> Result<()> {
    let project = tempfile::tempdir()?;
    let root = project.path();
    scaffold(root);
    fs::remove_file(root.join("theme/plain/templates/post.tmpl"))?;

    assert!(build_site(&Config::from_directory(root)?).is_err());
    Ok(())
}
