//! Single-comment leaf rendering.

use crate::model::Comment;
use crate::view::tree::Element;

/// Derive the render subtree for one comment: avatar column, then the
/// author row (with optional status label) above the body text.
#[must_use]
pub fn view(comment: &Comment) -> Element {
    let mut avatar = Vec::new();
    if let Some(icon) = &comment.icon {
        avatar.push(Element::Image {
            class: "avatar",
            source: icon.clone(),
        });
    }

    let mut title = vec![Element::text("author", &comment.author)];
    if let Some(label) = &comment.label {
        title.push(Element::text("comment-status", label));
    }

    Element::section(
        "review-comment",
        vec![
            Element::section("avatar-container", avatar),
            Element::section(
                "review-comment-contents",
                vec![
                    Element::section("comment-title", title),
                    Element::section(
                        "comment-body",
                        vec![Element::text("comment-text", &comment.body)],
                    ),
                ],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_author_body_and_status_label() {
        let comment = Comment {
            author: "ada".to_string(),
            icon: Some("avatars/ada.png".to_string()),
            body: "Should this be a builder?".to_string(),
            label: Some("pending".to_string()),
        };

        let tree = view(&comment);
        match tree.find("author") {
            Some(Element::Text { text, .. }) => assert_eq!(text, "ada"),
            other => panic!("unexpected node: {other:?}"),
        }
        assert!(tree.find("comment-status").is_some());
        assert!(tree.find("avatar").is_some());
        match tree.find("comment-text") {
            Some(Element::Text { text, .. }) => {
                assert_eq!(text, "Should this be a builder?");
            }
            other => panic!("unexpected node: {other:?}"),
        }
    }

    #[test]
    fn optional_fields_are_simply_absent() {
        let comment = Comment {
            author: "grace".to_string(),
            icon: None,
            body: "lgtm".to_string(),
            label: None,
        };

        let tree = view(&comment);
        assert!(tree.find("avatar").is_none());
        assert!(tree.find("comment-status").is_none());
    }
}
