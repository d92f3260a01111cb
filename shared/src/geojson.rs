//! The subset of GeoJSON the lighthouse dataset uses.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::geo::LatLng;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeatureCollection {
    #[serde(default, deserialize_with = "de_features")]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "de_lenient")]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<LighthouseProperties>,
}

/// Any GeoJSON geometry; only `Point` is ever rendered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Value,
}

impl Geometry {
    /// Position of a `Point` geometry. GeoJSON orders coordinates `[lng, lat]`.
    pub fn point(&self) -> Option<LatLng> {
        if self.kind != "Point" {
            return None;
        }
        let coords = self.coordinates.as_array()?;
        let lng = coords.first()?.as_f64()?;
        let lat = coords.get(1)?.as_f64()?;
        Some(LatLng::new(lat, lng))
    }
}

impl Feature {
    pub fn point(&self) -> Option<LatLng> {
        self.geometry.as_ref()?.point()
    }
}

/// Descriptive properties. Empty strings are read as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LighthouseProperties {
    #[serde(rename = "lighthouseLabel", default, deserialize_with = "de_text")]
    pub label: Option<String>,
    #[serde(rename = "adminLabel", default, deserialize_with = "de_text")]
    pub admin_label: Option<String>,
    #[serde(default, deserialize_with = "de_text")]
    pub inception: Option<String>,
    #[serde(default, deserialize_with = "de_text")]
    pub image: Option<String>,
}

/// `null` reads as no features; an entry that is not a feature object becomes
/// an empty feature so the loader can count it as skipped.
fn de_features<'de, D>(deserializer: D) -> Result<Vec<Feature>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values
        .into_iter()
        .map(|v| Feature::deserialize(v).unwrap_or_default())
        .collect())
}

/// Any value that does not parse as `T` reads as absent.
fn de_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn de_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_point_feature() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [129.0756, 35.1796] },
                "properties": {
                    "lighthouseLabel": "Yeongdo Lighthouse",
                    "adminLabel": "Busan",
                    "inception": "1906-12-01T00:00:00Z",
                    "image": "https://example.org/yeongdo.jpg",
                    "extra": 42
                }
            }]
        }"#;
        let fc: FeatureCollection = serde_json::from_str(json).expect("valid collection");
        assert_eq!(fc.features.len(), 1);
        let feature = &fc.features[0];
        assert_eq!(feature.point(), Some(LatLng::new(35.1796, 129.0756)));
        let props = feature.properties.clone().unwrap_or_default();
        assert_eq!(props.label.as_deref(), Some("Yeongdo Lighthouse"));
        assert_eq!(props.admin_label.as_deref(), Some("Busan"));
        assert_eq!(props.inception.as_deref(), Some("1906-12-01T00:00:00Z"));
    }

    #[test]
    fn missing_features_is_an_empty_collection() {
        let fc: FeatureCollection =
            serde_json::from_str(r#"{"type":"FeatureCollection"}"#).expect("valid");
        assert!(fc.features.is_empty());
    }

    #[test]
    fn non_point_and_null_geometry_have_no_position() {
        let json = r#"{"features": [
            {"geometry": null, "properties": {}},
            {"geometry": {"type": "LineString", "coordinates": [[1, 2], [3, 4]]}},
            {"geometry": {"type": "Point", "coordinates": [127.0]}},
            {"geometry": {"type": "Point", "coordinates": ["a", "b"]}},
            {}
        ]}"#;
        let fc: FeatureCollection = serde_json::from_str(json).expect("valid");
        assert_eq!(fc.features.len(), 5);
        assert!(fc.features.iter().all(|f| f.point().is_none()));
    }

    #[test]
    fn null_features_is_an_empty_collection() {
        let fc: FeatureCollection =
            serde_json::from_str(r#"{"type":"FeatureCollection","features":null}"#)
                .expect("null features parse");
        assert!(fc.features.is_empty());
    }

    #[test]
    fn malformed_geometry_reads_as_absent() {
        let json = r#"{"features": [
            {"geometry": {"coordinates": [127.0, 36.0]}},
            {"geometry": "Point"},
            {"geometry": [127.0, 36.0]},
            "not a feature",
            {"geometry": {"type": "Point", "coordinates": [127.0, 36.0]}}
        ]}"#;
        let fc: FeatureCollection = serde_json::from_str(json).expect("malformed features parse");
        assert_eq!(fc.features.len(), 5);
        assert_eq!(fc.features[0].geometry.as_ref().map(|g| g.kind.as_str()), Some(""));
        assert!(fc.features[1].geometry.is_none());
        assert!(fc.features[2].geometry.is_none());
        assert_eq!(fc.features[3], Feature::default());
        let points: Vec<_> = fc.features.iter().filter_map(Feature::point).collect();
        assert_eq!(points, vec![LatLng::new(36.0, 127.0)]);
    }

    #[test]
    fn properties_treat_empty_as_absent_and_numbers_as_text() {
        let props: LighthouseProperties = serde_json::from_str(
            r#"{"lighthouseLabel": "", "adminLabel": null, "inception": 1903, "image": false}"#,
        )
        .expect("valid");
        assert_eq!(props.label, None);
        assert_eq!(props.admin_label, None);
        assert_eq!(props.inception.as_deref(), Some("1903"));
        assert_eq!(props.image, None);
    }
}
