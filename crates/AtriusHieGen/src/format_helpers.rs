/// Converts a caller-facing field key to a valid Rust identifier.
///
/// This function transforms camelCase payload keys into valid Rust
/// identifiers by:
/// - Converting camelCase to snake_case
/// - Escaping Rust keywords with the `r#` prefix
///
/// # Arguments
///
/// * `input` - The original field key
///
/// # Returns
///
/// Returns a string that is a valid Rust identifier.
///
/// # Examples
///
/// ```ignore
/// # use atrius_hie_generator::format_helpers::make_rust_safe;
/// assert_eq!(make_rust_safe("birthDate"), "birth_date");
/// assert_eq!(make_rust_safe("type"), "r#type");
/// assert_eq!(make_rust_safe("abstract"), "r#abstract");
/// ```
pub fn make_rust_safe(input: &str) -> String {
    let snake_case = input
        .chars()
        .enumerate()
        .fold(String::new(), |mut acc, (i, c)| {
            if i > 0 && c.is_uppercase() {
                acc.push('_');
            }
            acc.push(c.to_lowercase().next().unwrap());
            acc
        });

    match snake_case.as_str() {
        "type" | "use" | "abstract" | "for" | "ref" | "const" | "where" => {
            format!("r#{}", snake_case)
        }
        _ => snake_case,
    }
}

/// Capitalizes the first letter of a string.
///
/// # Examples
///
/// ```ignore
/// # use atrius_hie_generator::format_helpers::capitalize_first_letter;
/// assert_eq!(capitalize_first_letter("patient"), "Patient");
/// assert_eq!(capitalize_first_letter("birthDate"), "BirthDate");
/// ```
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Converts a kebab-case, camelCase, or dotted key into a PascalCase type name.
///
/// Variant keys in the resource model are kebab-case
/// (`entry-from-outside-target-facility-encounter`) and field keys are
/// camelCase (`referenceRange`); both map onto Rust type names by
/// capitalizing each word and dropping the separators.
///
/// # Examples
///
/// ```ignore
/// # use atrius_hie_generator::format_helpers::pascal_case;
/// assert_eq!(pascal_case("target-facility-encounter"), "TargetFacilityEncounter");
/// assert_eq!(pascal_case("referenceRange"), "ReferenceRange");
/// ```
pub fn pascal_case(input: &str) -> String {
    input
        .split(['-', '.', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize_first_letter)
        .collect()
}

/// Converts a kebab-case resource key or PascalCase type name into a
/// snake_case identifier stem, suitable for function and module names.
pub fn snake_ident(name: &str) -> String {
    let mut out = String::new();
    let mut prev_is_lower_or_digit = false;

    for ch in name.chars() {
        let is_upper = ch.is_ascii_uppercase();
        let is_lower = ch.is_ascii_lowercase();
        let is_digit = ch.is_ascii_digit();

        if ch == '-' || ch == ' ' || ch == '.' {
            if !out.ends_with('_') {
                out.push('_');
            }
            prev_is_lower_or_digit = false;
            continue;
        }

        if is_upper {
            if prev_is_lower_or_digit && !out.ends_with('_') {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_is_lower_or_digit = true;
            continue;
        }

        if is_lower || is_digit {
            out.push(ch);
            prev_is_lower_or_digit = true;
            continue;
        }

        // For any other char, replace with underscore.
        if !out.ends_with('_') {
            out.push('_');
        }
        prev_is_lower_or_digit = false;
    }

    while out.starts_with('_') {
        out.remove(0);
    }
    while out.ends_with('_') {
        out.pop();
    }

    if out.is_empty() { "resource".to_string() } else { out }
}

/// Escapes schema description text for use in Rust doc comments.
///
/// Normalizes line endings and escapes comment delimiters that would
/// otherwise terminate the doc comment early.
pub fn escape_doc_comment(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut result = String::new();
    for line in normalized.lines() {
        let processed = line.replace("*/", "*\\/").replace("/*", "/\\*");
        result.push_str(&processed);
        result.push('\n');
    }

    result.trim_end().to_string()
}

/// Formats cardinality information into human-readable text.
///
/// `required` reflects whether the caller must supply the field (a field
/// with a configured default is never required) and `repeats` whether the
/// field accepts a list of values.
pub fn format_cardinality(required: bool, repeats: bool) -> &'static str {
    match (required, repeats) {
        (false, false) => "Optional (0..1)",
        (true, false) => "Required (1..1)",
        (false, true) => "Optional, Multiple (0..*)",
        (true, true) => "Required, Multiple (1..*)",
    }
}
