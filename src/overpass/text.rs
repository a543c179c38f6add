pub const MAIN_ABOUT: &str = "Convert an Overpass API JSON dump into a GeoJSON FeatureCollection";

pub const MAIN_AFTER_HELP: &str = r#"
Reads the 'elements' array of an Overpass response and writes one GeoJSON
Point Feature per element that has both 'lat' and 'lon'. The element's
'tags' become the feature's properties. Elements without top-level
coordinates are skipped, including ways and relations, which only carry
a nested 'center' object even when exported with 'out center'.

Example:

$ echo '{"elements":[{"lat":1.0,"lon":2.0,"tags":{"amenity":"fountain"}}]}' > fountains.geojson
$ overpass2geojson
Wrote 1 features to fountains.clean.geojson

Set RUST_LOG=debug to list skipped elements.
"#;

pub const INPUT_HELP: &str = "Overpass JSON file to read";
pub const OUTPUT_HELP: &str = "GeoJSON file to write";
