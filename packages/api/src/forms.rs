//! Post drafts and their multipart encoding.

use reqwest::multipart::{Form, Part};
use store::Post;

use crate::ApiError;

/// Extensions the server accepts for post images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

pub const EMPTY_CONTENT_MESSAGE: &str = "Post content cannot be empty.";

/// An image file picked in the post form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Wrap a picked file, rejecting formats the server would refuse.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ApiError> {
        let file_name = file_name.into();
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        let content_type = match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            _ => {
                return Err(ApiError::Validation(format!(
                    "Unsupported image format for {file_name}. Use {}.",
                    IMAGE_EXTENSIONS.join(", ")
                )))
            }
        };
        Ok(Self {
            file_name,
            content_type: content_type.to_string(),
            bytes,
        })
    }
}

/// Content of the create/edit post form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub content: String,
    /// Newly picked image, sent only when present.
    pub image: Option<ImageUpload>,
    /// Image already stored on the server for the post being edited.
    pub current_image: Option<String>,
}

impl PostDraft {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }

    /// Pre-fill the edit form from an existing post.
    pub fn from_post(post: &Post) -> Self {
        Self {
            content: post.content.clone(),
            image: None,
            current_image: post.image_path.clone(),
        }
    }

    /// Image the post will show once saved: the new pick, else the stored one.
    pub fn effective_image(&self) -> Option<&str> {
        match &self.image {
            Some(upload) => Some(&upload.file_name),
            None => self.current_image.as_deref(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.content.trim().is_empty() {
            return Err(ApiError::Validation(EMPTY_CONTENT_MESSAGE.to_string()));
        }
        Ok(())
    }

    /// Encode as `multipart/form-data` with a `content` field and, when a
    /// new image was picked, an `image` file part. Leaving `image` out makes
    /// the server keep the stored one.
    pub fn to_form(&self) -> Result<Form, ApiError> {
        let form = Form::new().text("content", self.content.clone());
        let Some(image) = &self.image else {
            return Ok(form);
        };
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        Ok(form.part("image", part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::User;

    #[test]
    fn test_blank_content_is_rejected() {
        for content in ["", "   ", "\n\t "] {
            let err = PostDraft::new(content).validate().unwrap_err();
            assert_eq!(err, ApiError::Validation(EMPTY_CONTENT_MESSAGE.to_string()));
        }
        assert!(PostDraft::new(" hi ").validate().is_ok());
    }

    #[test]
    fn test_image_content_type_from_extension() {
        let jpg = ImageUpload::new("Cat.JPG", vec![1, 2]).unwrap();
        assert_eq!(jpg.content_type, "image/jpeg");
        let gif = ImageUpload::new("a.b.gif", vec![]).unwrap();
        assert_eq!(gif.content_type, "image/gif");
    }

    #[test]
    fn test_unsupported_image_is_rejected() {
        assert!(matches!(
            ImageUpload::new("notes.pdf", vec![]),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            ImageUpload::new("no-extension", vec![]),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_edit_draft_keeps_existing_image() {
        let post = Post {
            id: 3,
            content: "before".to_string(),
            image_path: Some("static/images/1_cat.png".to_string()),
            author: User {
                id: 1,
                username: "ana".to_string(),
            },
            interactions: vec![],
        };

        let draft = PostDraft::from_post(&post);
        assert_eq!(draft.content, "before");
        assert!(draft.image.is_none());
        assert_eq!(draft.effective_image(), Some("static/images/1_cat.png"));

        let replaced = draft.with_image(ImageUpload::new("dog.png", vec![0]).unwrap());
        assert_eq!(replaced.effective_image(), Some("dog.png"));
    }
}
