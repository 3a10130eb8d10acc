//! # Feed derivations
//!
//! Pure functions turning a [`Post`] and the viewer's username into what a
//! post card shows: like/dislike totals, the viewer's own reaction, and which
//! controls are offered.
//!
//! The server is expected to hold at most one interaction per user and post.
//! When it holds more, [`own_interaction`] takes the first match and logs a
//! warning; [`Tally`] still counts every entry.

use crate::models::{Interaction, InteractionKind, Post};

/// Like and dislike totals of a post.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub likes: usize,
    pub dislikes: usize,
}

impl Tally {
    pub fn of(interactions: &[Interaction]) -> Self {
        let count = |kind| interactions.iter().filter(|i| i.kind == kind).count();
        Self {
            likes: count(InteractionKind::Like),
            dislikes: count(InteractionKind::Dislike),
        }
    }
}

/// The interaction `username` holds on `post`, if any.
pub fn own_interaction<'a>(post: &'a Post, username: &str) -> Option<&'a Interaction> {
    let mut mine = post
        .interactions
        .iter()
        .filter(|i| i.user.username == username);
    let first = mine.next();
    if first.is_some() && mine.next().is_some() {
        tracing::warn!(
            "Post {} holds several interactions from {username}, using the first",
            post.id
        );
    }
    first
}

/// Which controls a post card offers its viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Controls {
    /// Viewer wrote the post: edit and delete.
    Author,
    /// Anyone else: like and dislike, each disabled once already chosen.
    Reactions {
        like_disabled: bool,
        dislike_disabled: bool,
    },
}

/// Everything a post card needs, computed for one viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct PostView {
    pub post: Post,
    pub tally: Tally,
    pub own: Option<InteractionKind>,
    pub is_author: bool,
}

impl PostView {
    pub fn new(post: Post, viewer: &str) -> Self {
        let tally = Tally::of(&post.interactions);
        let own = own_interaction(&post, viewer).map(|i| i.kind);
        let is_author = post.author.username == viewer;
        Self {
            post,
            tally,
            own,
            is_author,
        }
    }

    pub fn controls(&self) -> Controls {
        if self.is_author {
            Controls::Author
        } else {
            Controls::Reactions {
                like_disabled: self.own == Some(InteractionKind::Like),
                dislike_disabled: self.own == Some(InteractionKind::Dislike),
            }
        }
    }
}

/// Build views for a whole feed, preserving server order.
pub fn feed_for(posts: Vec<Post>, viewer: &str) -> Vec<PostView> {
    posts
        .into_iter()
        .map(|post| PostView::new(post, viewer))
        .collect()
}

/// Letter shown in the author's avatar.
pub fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            username: name.to_string(),
        }
    }

    fn interaction(id: i64, kind: InteractionKind, who: &str) -> Interaction {
        Interaction {
            id,
            kind,
            user: user(id + 100, who),
        }
    }

    fn post(author: &str, interactions: Vec<Interaction>) -> Post {
        Post {
            id: 1,
            content: "hello".to_string(),
            image_path: None,
            author: user(1, author),
            interactions,
        }
    }

    #[test]
    fn test_tally_is_order_independent() {
        let a = interaction(1, InteractionKind::Like, "a");
        let b = interaction(2, InteractionKind::Dislike, "b");

        let forward = Tally::of(&[a.clone(), b.clone()]);
        let backward = Tally::of(&[b, a]);

        assert_eq!(forward, Tally { likes: 1, dislikes: 1 });
        assert_eq!(forward, backward);
        assert_eq!(Tally::of(&[]), Tally::default());
    }

    #[test]
    fn test_viewer_who_liked_cannot_like_again() {
        let view = PostView::new(
            post("ana", vec![interaction(1, InteractionKind::Like, "bruno")]),
            "bruno",
        );
        assert_eq!(view.own, Some(InteractionKind::Like));
        assert_eq!(
            view.controls(),
            Controls::Reactions {
                like_disabled: true,
                dislike_disabled: false,
            }
        );
    }

    #[test]
    fn test_viewer_who_disliked_cannot_dislike_again() {
        let view = PostView::new(
            post("ana", vec![interaction(1, InteractionKind::Dislike, "bruno")]),
            "bruno",
        );
        assert_eq!(
            view.controls(),
            Controls::Reactions {
                like_disabled: false,
                dislike_disabled: true,
            }
        );
    }

    #[test]
    fn test_fresh_viewer_gets_both_reactions() {
        let view = PostView::new(
            post("ana", vec![interaction(1, InteractionKind::Like, "carla")]),
            "bruno",
        );
        assert!(view.own.is_none());
        assert_eq!(
            view.controls(),
            Controls::Reactions {
                like_disabled: false,
                dislike_disabled: false,
            }
        );
    }

    #[test]
    fn test_author_controls_only_for_author() {
        let mine = PostView::new(post("ana", vec![]), "ana");
        assert!(mine.is_author);
        assert_eq!(mine.controls(), Controls::Author);

        let theirs = PostView::new(post("ana", vec![]), "Ana");
        assert!(!theirs.is_author);
        assert!(matches!(theirs.controls(), Controls::Reactions { .. }));
    }

    #[test]
    fn test_first_of_duplicate_interactions_wins() {
        let p = post(
            "ana",
            vec![
                interaction(1, InteractionKind::Dislike, "bruno"),
                interaction(2, InteractionKind::Like, "bruno"),
            ],
        );
        assert_eq!(own_interaction(&p, "bruno").unwrap().id, 1);
        assert_eq!(Tally::of(&p.interactions), Tally { likes: 1, dislikes: 1 });
    }

    #[test]
    fn test_feed_preserves_order() {
        let mut second = post("bruno", vec![]);
        second.id = 2;
        let views = feed_for(vec![post("ana", vec![]), second], "ana");
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].post.id, 1);
        assert!(views[0].is_author);
        assert_eq!(views[1].post.id, 2);
        assert!(!views[1].is_author);
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar_initial("ana"), "A");
        assert_eq!(avatar_initial("élise"), "É");
        assert_eq!(avatar_initial(""), "?");
    }
}
