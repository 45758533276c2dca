pub mod accordion;
pub mod catalog;
pub mod form;
pub mod gallery;
pub mod lightbox;
pub mod notify;
pub mod timing;

mod md_to_html;
mod style;

pub use accordion::{Accordion, FaqEntry};
pub use catalog::{Catalog, ServiceId, ServiceRecord};
pub use gallery::{Gallery, GalleryItem};
pub use lightbox::Lightbox;
pub use md_to_html::md_to_html;
pub use notify::{NoticeKind, Notifier};
pub use style::*;

static SERVICES_JSON: &str = include_str!("../data/services.json");
static FAQ_JSON: &str = include_str!("../data/faq.json");
static GALLERY_JSON: &str = include_str!("../data/gallery.json");

#[derive(Debug, thiserror::Error)]
pub enum DataError {
	#[error("Couldn't decode the {fixture} fixture: {source}")]
	Decode {
		fixture: &'static str,
		#[source]
		source: serde_json::Error
	},
	#[error("Service '{0}' is listed more than once")]
	DuplicateService(&'static str)
}

/// # Errors
///
/// Only if `data/services.json` is malformed
pub fn load_catalog() -> Result<Catalog, DataError> {
	Catalog::from_json(SERVICES_JSON)
}

/// # Errors
///
/// Only if `data/faq.json` is malformed
pub fn load_faq() -> Result<Vec<FaqEntry>, DataError> {
	serde_json::from_str(FAQ_JSON)
		.map_err(|source| DataError::Decode { fixture: "faq", source })
}

/// # Errors
///
/// Only if `data/gallery.json` is malformed
pub fn load_gallery() -> Result<Vec<GalleryItem>, DataError> {
	serde_json::from_str(GALLERY_JSON)
		.map_err(|source| DataError::Decode { fixture: "gallery", source })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn catalog_has_every_service() {
		let catalog = load_catalog().unwrap();
		assert_eq!(catalog.len(), ServiceId::ALL.len());

		for id in ServiceId::ALL {
			let service = catalog.get(id).unwrap_or_else(|| panic!("{} is missing", id.as_str()));
			assert!(!service.title.is_empty());
			assert!(!service.description.is_empty());
			assert!(!service.features.is_empty());
			assert!(service.price.starts_with("Starting from"));
			assert!(service.image.starts_with("https://"));
		}
	}

	#[test]
	fn faq_decodes() {
		let faq = load_faq().unwrap();
		assert!(!faq.is_empty());
		assert!(faq.iter().all(|e| e.question.ends_with('?') && !e.answer.is_empty()));
	}

	#[test]
	fn gallery_decodes_and_filters() {
		let mut gallery = Gallery::new(load_gallery().unwrap());
		assert!(gallery.items().len() > 1);

		let tags = gallery.tags();
		assert_eq!(tags.first(), Some(&crate::gallery::ALL_TAG));
		assert!(tags.contains(&"floral"));

		gallery.apply_filter("floral");
		let visible = gallery.visible();
		assert!(!visible.is_empty());
		assert!(visible.iter().all(|i| gallery.items()[*i].category == "floral"));
	}
}
