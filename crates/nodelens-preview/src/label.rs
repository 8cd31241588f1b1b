//! Node label parsing.
//!
//! Node labels are camel-cased identifiers like `GlTextureBlur`. The
//! inspector displays them as a structural breadcrumb (`Gl/Texture`) plus a
//! leaf name (`Blur`).

/// Splits a camel-cased label into `(path, name)`.
///
/// The final camel-case segment becomes the name; the leading segments,
/// joined by `/`, become the path. Single-segment labels yield an empty
/// path. Digits stick to the preceding segment, so `Blur2` stays one
/// segment.
pub fn split_label(label: &str) -> (String, String) {
    let segments = segments(label);
    match segments.split_last() {
        Some((name, path)) => (path.join("/"), name.clone()),
        None => (String::new(), String::new()),
    }
}

fn segments(label: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for ch in label.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}
