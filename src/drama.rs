//! Drama catalog and the favorite-toggle update.
//!
//! The catalog is a compiled-in constant. Only `is_favorite` ever changes,
//! and it changes by building a new list rather than editing in place, so
//! the previous list stays inspectable.

use std::fmt;

/// Airing status of a drama
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Complete,
    Ongoing,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Complete => "Complete",
            Status::Ongoing => "Ongoing",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One show in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct DramaRecord {
    /// Unique within the catalog
    pub id: String,
    pub title: String,
    pub status: Status,
    pub rating: f64,
    /// Recency label, display text only ("10 jam yang lalu")
    pub release: String,
    /// Formatted view count, display text only ("4.279.128")
    pub views: String,
    /// Remote image URI
    pub image: String,
    pub is_favorite: bool,
}

impl DramaRecord {
    /// Rating as shown on screen: `9.0` prints as `9`, `9.4` as `9.4`
    pub fn rating_text(&self) -> String {
        format!("{}", self.rating)
    }

    /// Host part of the image URI, used as the image frame caption
    pub fn image_host(&self) -> &str {
        let rest = self
            .image
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.image);
        rest.split('/').next().unwrap_or(rest)
    }

    /// Copy of this record with the favorite flag flipped
    fn with_favorite_flipped(&self) -> Self {
        Self {
            is_favorite: !self.is_favorite,
            ..self.clone()
        }
    }
}

struct Seed {
    id: &'static str,
    title: &'static str,
    status: Status,
    rating: f64,
    release: &'static str,
    views: &'static str,
    image: &'static str,
    is_favorite: bool,
}

const CATALOG: [Seed; 4] = [
    Seed {
        id: "1",
        title: "Jeongnyeon: The Star is Born",
        status: Status::Complete,
        rating: 9.4,
        release: "10 jam yang lalu",
        views: "4.279.128",
        image: "https://i.pinimg.com/474x/64/e2/81/64e281832385337f02898375e37413a1.jpg",
        is_favorite: true,
    },
    Seed {
        id: "2",
        title: "When the Phone Rings",
        status: Status::Ongoing,
        rating: 9.5,
        release: "4 jam yang lalu",
        views: "1.358.581",
        image: "https://i.pinimg.com/736x/29/b8/e8/29b8e8a49d58ac2fecac7c930b232fa9.jpg",
        is_favorite: true,
    },
    Seed {
        id: "3",
        title: "Family by Choice",
        status: Status::Complete,
        rating: 9.2,
        release: "8 jam yang lalu",
        views: "3.287.694",
        image: "https://i.pinimg.com/236x/78/93/67/789367fb18a96323b805fc7acc3fc009.jpg",
        is_favorite: true,
    },
    Seed {
        id: "4",
        title: "Brewing Love",
        status: Status::Ongoing,
        rating: 9.0,
        release: "2 jam yang lalu",
        views: "1.312.112",
        image: "https://i.pinimg.com/474x/98/0f/05/980f0515a9328059a3d319f522517d34.jpg",
        is_favorite: true,
    },
];

/// The built-in catalog, in display order
pub fn builtin_catalog() -> Vec<DramaRecord> {
    CATALOG
        .iter()
        .map(|s| DramaRecord {
            id: s.id.to_string(),
            title: s.title.to_string(),
            status: s.status,
            rating: s.rating,
            release: s.release.to_string(),
            views: s.views.to_string(),
            image: s.image.to_string(),
            is_favorite: s.is_favorite,
        })
        .collect()
}

/// Build a new list where the record matching `id` has its favorite flag
/// flipped. Order and length are preserved; an unknown id yields an equal list.
pub fn toggled(list: &[DramaRecord], id: &str) -> Vec<DramaRecord> {
    list.iter()
        .map(|item| {
            if item.id == id {
                item.with_favorite_flipped()
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Find a record by id
pub fn find<'a>(list: &'a [DramaRecord], id: &str) -> Option<&'a DramaRecord> {
    list.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_order() {
        let titles: Vec<_> = builtin_catalog().into_iter().map(|d| d.title).collect();
        assert_eq!(
            titles,
            vec![
                "Jeongnyeon: The Star is Born",
                "When the Phone Rings",
                "Family by Choice",
                "Brewing Love",
            ]
        );
    }

    #[test]
    fn test_catalog_ids_unique() {
        let list = builtin_catalog();
        let ids: HashSet<_> = list.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let list = builtin_catalog();
        for item in &list {
            let twice = toggled(&toggled(&list, &item.id), &item.id);
            assert_eq!(twice, list);
        }
    }

    #[test]
    fn test_toggle_touches_only_match() {
        let list = builtin_catalog();
        let next = toggled(&list, "2");

        assert_eq!(next.len(), list.len());
        for (before, after) in list.iter().zip(&next) {
            if before.id == "2" {
                assert_eq!(after.is_favorite, !before.is_favorite);
                assert_eq!(
                    DramaRecord { is_favorite: before.is_favorite, ..after.clone() },
                    *before
                );
            } else {
                assert_eq!(after, before);
            }
        }
        // Input untouched
        assert!(list.iter().all(|d| d.is_favorite));
    }

    #[test]
    fn test_toggle_unknown_id() {
        let list = builtin_catalog();
        assert_eq!(toggled(&list, "999"), list);
    }

    #[test]
    fn test_rating_text() {
        let list = builtin_catalog();
        assert_eq!(list[0].rating_text(), "9.4");
        assert_eq!(list[3].rating_text(), "9");
    }

    #[test]
    fn test_image_host() {
        let list = builtin_catalog();
        assert_eq!(list[0].image_host(), "i.pinimg.com");

        let bare = DramaRecord { image: "cover.jpg".to_string(), ..list[0].clone() };
        assert_eq!(bare.image_host(), "cover.jpg");
    }

    #[test]
    fn test_find() {
        let list = builtin_catalog();
        assert_eq!(find(&list, "4").map(|d| d.title.as_str()), Some("Brewing Love"));
        assert!(find(&list, "999").is_none());
    }
}
