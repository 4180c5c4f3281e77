//! Default value functions for serde deserialization.

pub fn building_name() -> String {
    "building".to_string()
}

pub fn max_expansions() -> usize {
    0
}
