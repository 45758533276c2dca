use serde::Deserialize;
use std::str::FromStr;

use crate::DataError;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ServiceId {
	Stage,
	Floral,
	Lighting,
	Theme,
	Venue,
	Complete
}

impl ServiceId {
	pub const ALL: [Self; 6] = [
		Self::Stage,
		Self::Floral,
		Self::Lighting,
		Self::Theme,
		Self::Venue,
		Self::Complete
	];

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Stage => "stage",
			Self::Floral => "floral",
			Self::Lighting => "lighting",
			Self::Theme => "theme",
			Self::Venue => "venue",
			Self::Complete => "complete"
		}
	}
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownService;

impl FromStr for ServiceId {
	type Err = UnknownService;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter()
			.find(|id| id.as_str() == s)
			.ok_or(UnknownService)
	}
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ServiceRecord {
	pub id: ServiceId,
	pub title: String,
	pub description: String,
	pub features: Vec<String>,
	pub price: String,
	pub image: String
}

/// The services offered, in the order they're listed on the page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog(Vec<ServiceRecord>);

impl Catalog {
	/// # Errors
	///
	/// If the json doesn't decode into a list of [`ServiceRecord`]s, or if any id appears twice
	pub fn from_json(json: &str) -> Result<Self, DataError> {
		let services: Vec<ServiceRecord> = serde_json::from_str(json)
			.map_err(|source| DataError::Decode { fixture: "services", source })?;

		for (idx, service) in services.iter().enumerate() {
			if services[..idx].iter().any(|s| s.id == service.id) {
				return Err(DataError::DuplicateService(service.id.as_str()));
			}
		}

		Ok(Self(services))
	}

	#[must_use]
	pub fn get(&self, id: ServiceId) -> Option<&ServiceRecord> {
		self.0.iter().find(|s| s.id == id)
	}

	/// Looks up a `data-service` style key. Anything we don't know about is just `None`.
	#[must_use]
	pub fn lookup(&self, key: &str) -> Option<&ServiceRecord> {
		key.parse().ok().and_then(|id| self.get(id))
	}

	pub fn iter(&self) -> impl Iterator<Item = &ServiceRecord> {
		self.0.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn service_ids_parse() {
		for id in ServiceId::ALL {
			assert_eq!(id.as_str().parse::<ServiceId>(), Ok(id));
		}
		assert_eq!("Stage".parse::<ServiceId>(), Err(UnknownService));
		assert_eq!("".parse::<ServiceId>(), Err(UnknownService));
	}

	#[test]
	fn lookup_unknown_is_none() {
		let catalog = Catalog::from_json(r#"[{
			"id": "stage",
			"title": "Stage",
			"description": "A stage",
			"features": ["one", "two"],
			"price": "lots",
			"image": "stage.jpg"
		}]"#).unwrap();

		assert_eq!(catalog.lookup("stage").map(|s| s.features.len()), Some(2));
		assert!(catalog.lookup("floral").is_none());
		assert!(catalog.lookup("fireworks").is_none());
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let one = r#"{"id": "venue", "title": "", "description": "", "features": [], "price": "", "image": ""}"#;
		let err = Catalog::from_json(&format!("[{one}, {one}]")).unwrap_err();
		assert!(matches!(err, DataError::DuplicateService("venue")));
	}

	#[test]
	fn bad_json_names_the_fixture() {
		let err = Catalog::from_json(r#"[{"id": "karaoke"}]"#).unwrap_err();
		assert!(err.to_string().contains("services"));
	}
}
