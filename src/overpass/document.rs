use crate::overpass::element;
use crate::overpass::error::Error;
use geojson::FeatureCollection;
use serde_json::Value;

pub fn parse(raw: &str) -> Result<Value, Error> {
    Ok(serde_json::from_str(raw)?)
}

/// The `elements` array of an Overpass response.
pub fn elements(doc: &Value) -> Result<&Vec<Value>, Error> {
    match doc.get("elements") {
        Some(Value::Array(els)) => Ok(els),
        Some(_) => Err(Error::InvalidJSONType("'elements' to be an array")),
        None => Err(Error::NotOverpassOutput),
    }
}

pub fn to_feature_collection(doc: &Value) -> Result<FeatureCollection, Error> {
    let features = elements(doc)?.iter().filter_map(element::to_feature).collect();
    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

pub fn to_pretty_string(fc: &FeatureCollection) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(fc)?)
}
