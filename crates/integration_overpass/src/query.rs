//! Overpass QL query builders

/// Tag filters selecting cultural places
pub const CULTURAL_FILTERS: [(&str, &str); 5] = [
    ("amenity", "museum"),
    ("tourism", "museum"),
    ("amenity", "theatre"),
    ("tourism", "art_gallery"),
    ("historic", "castle"),
];

const ELEMENT_KINDS: [&str; 3] = ["node", "way", "relation"];

/// Cultural places within `radius_m` meters of a point
///
/// Ways and relations are returned with a computed center.
#[must_use]
pub fn cultural_places(latitude: f64, longitude: f64, radius_m: u32) -> String {
    let mut statements = String::new();
    for (key, value) in CULTURAL_FILTERS {
        for kind in ELEMENT_KINDS {
            statements.push_str(&format!(
                "  {kind}[\"{key}\"=\"{value}\"](around:{radius_m},{latitude},{longitude});\n"
            ));
        }
    }
    format!("[out:json];\n(\n{statements});\nout center;\n")
}

/// Ways passing through both nodes
#[must_use]
pub fn connecting_way(start_node_id: i64, end_node_id: i64) -> String {
    format!(
        "[out:json];\n\
         node(id:{start_node_id})->.start;\n\
         node(id:{end_node_id})->.end;\n\
         way(bn.start)->.from_start;\n\
         way(bn.end)->.from_end;\n\
         way.from_start.from_end;\n\
         out body;\n"
    )
}
