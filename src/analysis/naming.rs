//! Identifier transformations from native C names to binding names.

use regex::Regex;
use std::sync::LazyLock;

// A capital that starts a lowercase run, preceded by anything.
static FIRST_CAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("static regex"));

// A capital glued to a preceding lowercase letter or digit.
static ALL_CAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("static regex"));

/// Convert CamelCase or PascalCase to snake_case.
///
/// Word-initial capitals are separated first, then capitals following a
/// lowercase letter or digit. The pass order is significant.
///
/// ```
/// use duk_bindgen::analysis::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("CreateWindow"), "create_window");
/// assert_eq!(to_snake_case("glfwCreateWindow"), "glfw_create_window");
/// ```
pub fn to_snake_case(name: &str) -> String {
    let separated = FIRST_CAP.replace_all(name, "${1}_${2}");
    ALL_CAP
        .replace_all(&separated, "${1}_${2}")
        .to_lowercase()
}

/// Lowercase only the first character.
pub fn decapitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Drop a fixed number of leading characters. Names shorter than the prefix
/// become empty.
pub fn strip_prefix(name: &str, prefix_len: usize) -> &str {
    match name.char_indices().nth(prefix_len) {
        Some((offset, _)) => &name[offset..],
        None => "",
    }
}
