//! JSON-backed feed source.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use super::convert::convert_document;
use super::error::FeedError;
use super::types::FeedDocument;
use super::{FeedRoute, FeedSource};

/// Feed source that serves a pre-parsed feed loaded from a JSON document.
#[derive(Debug, Clone)]
pub struct JsonFeed {
    routes: Vec<FeedRoute>,
    useful_service_ids: HashSet<String>,
}

impl JsonFeed {
    /// Load and convert a feed file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let feed = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            routes = feed.routes.len(),
            services = feed.useful_service_ids.len(),
            "loaded feed"
        );
        Ok(feed)
    }

    /// Parse and convert a feed document.
    pub fn from_json(json: &str) -> Result<Self, FeedError> {
        let doc: FeedDocument = serde_json::from_str(json)?;
        let routes = convert_document(&doc)?;
        Ok(Self {
            routes,
            useful_service_ids: doc.useful_service_ids.into_iter().collect(),
        })
    }
}

impl FeedSource for JsonFeed {
    fn routes(&self) -> &[FeedRoute] {
        &self.routes
    }

    fn is_useful_service(&self, service_id: &str) -> bool {
        self.useful_service_ids.contains(service_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FEED: &str = r#"{
        "useful_service_ids": ["wk"],
        "routes": [{
            "route_short_name": "2",
            "route_color": "",
            "trips": [{
                "trip_id": "t1",
                "service_id": "wk",
                "stop_times": [
                    {"stop_id": "144000", "stop_sequence": 1},
                    {"stop_id": "144061", "stop_sequence": 2}
                ]
            }]
        }]
    }"#;

    #[test]
    fn from_json_converts_routes() {
        let feed = JsonFeed::from_json(FEED).unwrap();
        assert_eq!(feed.routes().len(), 1);
        assert_eq!(feed.routes()[0].trips.len(), 1);
        assert!(feed.is_useful_service("wk"));
        assert!(!feed.is_useful_service("sat"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FEED.as_bytes()).unwrap();
        let feed = JsonFeed::load(file.path()).unwrap();
        assert_eq!(feed.routes()[0].route_id.get(), 2);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFeed::load(dir.path().join("feed.json")).unwrap_err();
        assert!(matches!(err, FeedError::Io { .. }));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            JsonFeed::from_json("{\"routes\": 3}"),
            Err(FeedError::Json(_))
        ));
    }
}
