//! Conversions from domain types into [`Value`]s for templating.

use crate::config::NavbarItem;
use crate::post::Post;
use gtmpl_value::Value;
use std::collections::HashMap;

impl From<&Post> for Value {
    /// Converts a [`Post`] into the object the templates consume: `title`,
    /// `date` (as `YYYY-MM-DD`), `kind`, `slug`, `url`, `content` (rendered
    /// HTML), `feed` (nil when untagged), and `source`.
    fn from(post: &Post) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("title".to_owned(), (&post.title).into());
        m.insert(
            "date".to_owned(),
            Value::String(post.date.format("%Y-%m-%d").to_string()),
        );
        m.insert("kind".to_owned(), post.kind.as_str().into());
        m.insert("slug".to_owned(), (&post.slug).into());
        m.insert("url".to_owned(), Value::String(post.url()));
        m.insert("content".to_owned(), (&post.body).into());
        m.insert(
            "feed".to_owned(),
            match &post.feed {
                Some(feed) => feed.into(),
                None => Value::Nil,
            },
        );
        m.insert("source".to_owned(), (&post.source_name).into());
        Value::Object(m)
    }
}

impl From<&NavbarItem> for Value {
    /// Converts a [`NavbarItem`] into a `{label, url}` object.
    fn from(item: &NavbarItem) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("label".to_owned(), (&item.label).into());
        m.insert("url".to_owned(), (&item.url).into());
        Value::Object(m)
    }
}

/// Converts an ordered post list into the array the index template consumes.
pub fn posts(posts: &[&Post]) -> Value {
    Value::Array(posts.iter().map(|post| Value::from(*post)).collect())
}

/// Converts the navigation bar entries into a template array.
pub fn navbar(items: &[NavbarItem]) -> Value {
    Value::Array(items.iter().map(Value::from).collect())
}
