//! The feed partitioner: derives the main-index subset of posts and groups
//! all tagged posts by feed name. Partitioning never reorders anything; both
//! outputs preserve the collection's global newest-first ordering.

use crate::name::Kind;
use crate::post::Post;
use std::collections::BTreeMap;

/// Returns the posts that belong on the main index: every non-page post
/// whose feed tag, when present, isn't in `exclude`. Untagged posts are
/// never excluded since exclusion matches by feed name.
pub fn main_feed<'a>(posts: &'a [Post], exclude: &[String]) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| post.kind != Kind::Page)
        .filter(|post| match &post.feed {
            Some(feed) => !exclude.iter().any(|excluded| excluded == feed),
            None => true,
        })
        .collect()
}

/// Groups all non-page posts carrying a feed tag by feed name. Feeds
/// excluded from the main index are grouped like any other: exclusion only
/// affects the main index, never a feed's own page. Untagged posts are never
/// grouped. The map is ordered so feed pages render in a deterministic
/// order.
pub fn feed_groups(posts: &[Post]) -> BTreeMap<&str, Vec<&Post>> {
    let mut groups: BTreeMap<&str, Vec<&Post>> = BTreeMap::new();
    for post in posts {
        if post.kind == Kind::Page {
            continue;
        }
        if let Some(feed) = &post.feed {
            groups.entry(feed).or_default().push(post);
        }
    }
    groups
}
