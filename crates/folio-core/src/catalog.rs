//! Display-only gallery records and the ordered catalog they live in.

use fnv::FnvHashSet;
use thiserror::Error;

/// A single project shown in the gallery.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub thumbnail_image: String,
    pub detail_images: Vec<String>,
    pub description: String,
    pub year: String,
}

impl GalleryItem {
    /// Image shown at the top of the detail view; falls back to the
    /// thumbnail when the item has no detail images.
    pub fn hero_image(&self) -> &str {
        self.detail_images
            .first()
            .map(String::as_str)
            .unwrap_or(&self.thumbnail_image)
    }

    /// Detail images after the hero, shown only in fullscreen.
    pub fn secondary_images(&self) -> &[String] {
        self.detail_images.get(1..).unwrap_or(&[])
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no items")]
    Empty,
    #[error("duplicate gallery item id `{0}`")]
    DuplicateId(String),
    #[error("gallery item `{0}` has no thumbnail image")]
    MissingThumbnail(String),
}

/// Ordered, immutable sequence of gallery items. Insertion order is display
/// order.
#[derive(Clone, Debug)]
pub struct Catalog {
    items: Vec<GalleryItem>,
}

impl Catalog {
    pub fn new(items: Vec<GalleryItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = FnvHashSet::default();
        for item in &items {
            if item.thumbnail_image.trim().is_empty() {
                return Err(CatalogError::MissingThumbnail(item.id.clone()));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }
}

// (title, thumbnail, description, year, extra detail images)
const DEFAULT_ENTRIES: [(&str, &str, &str, &str, &[&str]); 12] = [
    (
        "Project Alpha",
        "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=800&q=80",
        "A modern take on personal finance management with intuitive visualizations.",
        "2024",
        &[
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&q=80",
            "https://images.unsplash.com/photo-1554224155-6726b3ff858f?w=800&q=80",
        ],
    ),
    (
        "Project Beta",
        "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&q=80",
        "Tracking fitness goals with beautiful data visualization and gamification.",
        "2024",
        &[
            "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=800&q=80",
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=800&q=80",
            "https://images.unsplash.com/photo-1540420773420-3366772f4999?w=800&q=80",
            "https://images.unsplash.com/photo-1498837167922-ddd27525d352?w=800&q=80",
        ],
    ),
    (
        "Project Gamma",
        "https://images.unsplash.com/photo-1558591710-4b4a1ae0f04d?w=800&q=80",
        "Luxury fashion shopping experience with AR try-on features.",
        "2024",
        &[
            "https://images.unsplash.com/photo-1512436991641-6745cdb1723f?w=800&q=80",
            "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=800&q=80",
            "https://images.unsplash.com/photo-1558769132-cb1aea458c5e?w=800&q=80",
        ],
    ),
    (
        "Project Delta",
        "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=800&q=80",
        "Unified interface for managing all connected home devices.",
        "2024",
        &[
            "https://images.unsplash.com/photo-1558002038-1055907df827?w=800&q=80",
            "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=800&q=80",
            "https://images.unsplash.com/photo-1585771724684-38269d6639fd?w=800&q=80",
        ],
    ),
    (
        "Project Epsilon",
        "https://images.unsplash.com/photo-1614850523296-d8c1af93d400?w=800&q=80",
        "Reimagining how we discover and experience music.",
        "2024",
        &[
            "https://images.unsplash.com/photo-1614680376593-902f74cf0d41?w=800&q=80",
            "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=800&q=80",
            "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?w=800&q=80",
            "https://images.unsplash.com/photo-1514320291840-2e0a9bf2a9ae?w=800&q=80",
        ],
    ),
    (
        "Project Zeta",
        "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=800&q=80",
        "Generative identity system for a contemporary art space.",
        "2023",
        &[],
    ),
    (
        "Project Eta",
        "https://images.unsplash.com/photo-1620121692029-d088224ddc74?w=800&q=80",
        "Editorial layouts for a long-form design journal.",
        "2023",
        &[],
    ),
    (
        "Project Theta",
        "https://images.unsplash.com/photo-1618556450994-a6a128ef0d9d?w=800&q=80",
        "Wayfinding and signage for a transit hub.",
        "2023",
        &[],
    ),
    (
        "Project Iota",
        "https://images.unsplash.com/photo-1614851099511-773084f6911d?w=800&q=80",
        "Motion language for a conversational assistant.",
        "2023",
        &[],
    ),
    (
        "Project Kappa",
        "https://images.unsplash.com/photo-1557672172-298e090bd0f1?w=800&q=80",
        "Packaging series for an independent tea roaster.",
        "2022",
        &[],
    ),
    (
        "Project Lambda",
        "https://images.unsplash.com/photo-1579783902614-a3fb3927b6a5?w=800&q=80",
        "Exhibition microsite with scroll-driven storytelling.",
        "2022",
        &[],
    ),
    (
        "Project Mu",
        "https://images.unsplash.com/photo-1633167606207-d840b5070fc2?w=800&q=80",
        "Data dashboard for an urban air-quality network.",
        "2022",
        &[],
    ),
];

/// The built-in portfolio catalog shown when no other source is provided.
pub fn default_catalog() -> Catalog {
    let items = DEFAULT_ENTRIES
        .iter()
        .enumerate()
        .map(|(i, (title, thumb, description, year, extra))| GalleryItem {
            id: i.to_string(),
            title: (*title).to_string(),
            thumbnail_image: (*thumb).to_string(),
            detail_images: extra.iter().map(|s| (*s).to_string()).collect(),
            description: (*description).to_string(),
            year: (*year).to_string(),
        })
        .collect();
    Catalog { items }
}
