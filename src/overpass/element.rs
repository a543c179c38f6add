use geo_types::Point;
use geojson::{Feature, JsonObject};
use serde_json::{Map, Value};

pub fn find_number(v: &Map<String, Value>, key: &str) -> Option<f64> {
    v.get(key).and_then(Value::as_f64)
}

/// The element's `tags` object, or an empty object when it has none.
pub fn tags(v: &Map<String, Value>) -> JsonObject {
    match v.get("tags") {
        Some(Value::Object(tags)) => tags.clone(),
        None | Some(Value::Null) => JsonObject::new(),
        Some(other) => {
            log::warn!("Ignoring non-object tags on element: {}", other);
            JsonObject::new()
        }
    }
}

fn point(v: &Map<String, Value>) -> Option<Point<f64>> {
    let lat = find_number(v, "lat")?;
    let lon = find_number(v, "lon")?;
    Some(Point::new(lon, lat))
}

/// Converts one Overpass element into a GeoJSON Point feature.
///
/// Returns `None` for elements without both top-level `lat` and `lon`. Ways
/// and relations only carry a nested `center` object (or nothing at all), so
/// they are always skipped.
pub fn to_feature(element: &Value) -> Option<Feature> {
    let obj = match element {
        Value::Object(o) => o,
        _ => {
            log::debug!("Skipping non-object element: {}", element);
            return None;
        }
    };
    let point = match point(obj) {
        Some(p) => p,
        None => {
            log::debug!("Skipping element without coordinates: {}", element);
            return None;
        }
    };

    Some(Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::from(&point))),
        id: None,
        properties: Some(tags(obj)),
        foreign_members: None,
    })
}
