//! Image slots that survive a broken asset

use crate::content::ImageRef;

const PLACEHOLDER: &str =
    "flex items-center justify-center bg-gray-500/20 text-gray-400 text-sm text-center";

/// What an [`ImageSlot`] renders right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageView {
    Picture {
        src: &'static str,
        alt: &'static str,
    },
    /// Box labelled with the image's alt text
    Placeholder { label: &'static str },
}

/// One image on the page. Shows the picture until the browser reports a
/// load error, then a placeholder for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSlot {
    image: ImageRef,
    failed: bool,
}

impl ImageSlot {
    pub fn new(image: ImageRef) -> Self {
        Self {
            image,
            failed: false,
        }
    }

    /// Records a load error. Returns `true` only for the first one.
    pub fn mark_failed(&mut self) -> bool {
        !std::mem::replace(&mut self.failed, true)
    }

    pub fn view(&self) -> ImageView {
        if self.failed {
            ImageView::Placeholder {
                label: self.image.alt,
            }
        } else {
            ImageView::Picture {
                src: self.image.src,
                alt: self.image.alt,
            }
        }
    }
}

/// Classes for the placeholder box, keeping the image's own sizing classes.
pub fn placeholder_class(image_class: &str) -> String {
    if image_class.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        format!("{image_class} {PLACEHOLDER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::profile;

    #[test]
    fn test_new_slot_shows_picture() {
        let slot = ImageSlot::new(profile().portrait);
        assert_eq!(
            slot.view(),
            ImageView::Picture {
                src: "/assets/Mausami.jpg",
                alt: "Mausami",
            }
        );
    }

    #[test]
    fn test_load_error_degrades_to_labelled_placeholder() {
        let mut slot = ImageSlot::new(profile().portrait);
        assert!(slot.mark_failed());
        assert_eq!(slot.view(), ImageView::Placeholder { label: "Mausami" });
    }

    #[test]
    fn test_repeated_errors_are_not_new_failures() {
        let mut slot = ImageSlot::new(ImageRef {
            src: "/missing.png",
            alt: "Missing",
        });
        assert!(slot.mark_failed());
        assert!(!slot.mark_failed());
        assert_eq!(slot.view(), ImageView::Placeholder { label: "Missing" });
    }

    #[test]
    fn test_placeholder_keeps_sizing() {
        insta::assert_snapshot!(
            placeholder_class("w-12 h-12"),
            @"w-12 h-12 flex items-center justify-center bg-gray-500/20 text-gray-400 text-sm text-center"
        );
        assert!(!placeholder_class("").starts_with(' '));
    }
}
