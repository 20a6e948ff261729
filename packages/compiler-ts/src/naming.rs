/// Convert a PascalCase member name to the camelCase used for TS properties.
///
/// Only the first character changes; empty names pass through.
pub fn to_ts_field_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
