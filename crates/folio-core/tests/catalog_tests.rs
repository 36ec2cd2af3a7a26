// Host-side tests for catalog validation and image fallbacks.

use folio_core::catalog::*;

fn item(id: &str, thumb: &str, detail: &[&str]) -> GalleryItem {
    GalleryItem {
        id: id.to_string(),
        title: format!("Item {id}"),
        thumbnail_image: thumb.to_string(),
        detail_images: detail.iter().map(|s| s.to_string()).collect(),
        description: String::new(),
        year: "2024".to_string(),
    }
}

#[test]
fn default_catalog_has_twelve_unique_items() {
    let catalog = default_catalog();
    assert_eq!(catalog.len(), 12);
    assert!(!catalog.is_empty());
    assert!(Catalog::new(catalog.items().to_vec()).is_ok());
    assert_eq!(catalog.index_of("11"), Some(11));
    assert_eq!(catalog.get(0).map(|i| i.title.as_str()), Some("Project Alpha"));
}

#[test]
fn rejects_empty_duplicate_and_missing_thumbnail() {
    assert_eq!(Catalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
    assert_eq!(
        Catalog::new(vec![item("a", "t.jpg", &[]), item("a", "u.jpg", &[])]).unwrap_err(),
        CatalogError::DuplicateId("a".to_string())
    );
    assert_eq!(
        Catalog::new(vec![item("b", "  ", &[])]).unwrap_err(),
        CatalogError::MissingThumbnail("b".to_string())
    );
}

#[test]
fn hero_falls_back_to_thumbnail() {
    let bare = item("x", "thumb.jpg", &[]);
    assert_eq!(bare.hero_image(), "thumb.jpg");
    assert!(bare.secondary_images().is_empty());

    let single = item("y", "thumb.jpg", &["hero.jpg"]);
    assert_eq!(single.hero_image(), "hero.jpg");
    assert!(single.secondary_images().is_empty());

    let full = item("z", "thumb.jpg", &["hero.jpg", "a.jpg", "b.jpg"]);
    assert_eq!(full.hero_image(), "hero.jpg");
    assert_eq!(full.secondary_images(), &["a.jpg".to_string(), "b.jpg".to_string()]);
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(CatalogError::Empty.to_string(), "catalog has no items");
    assert_eq!(
        CatalogError::DuplicateId("7".into()).to_string(),
        "duplicate gallery item id `7`"
    );
}
