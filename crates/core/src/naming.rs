/// Replace filesystem-hostile characters with `-` and trim surrounding
/// whitespace. Safe on empty input.
pub fn safe_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Fallback lesson identity when the feed has not reported a title yet:
/// the last non-empty path segment of the lesson page URL.
pub fn slug_from_page_url(page_url: &str) -> String {
    let trimmed = page_url
        .trim_end_matches('/')
        .split(['?', '#'])
        .next()
        .unwrap_or("");
    let slug = trimmed.rsplit('/').find(|s| !s.is_empty()).unwrap_or("lesson");
    safe_filename(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_every_reserved_character() {
        let cleaned = safe_filename(r#"a\b/c:d*e?f"g<h>i|j"#);
        for c in ['\\', '/', ':', '*', '?', '"', '<', '>', '|'] {
            assert!(!cleaned.contains(c), "{} survived sanitization", c);
        }
        assert_eq!(cleaned, "a-b-c-d-e-f-g-h-i-j");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(safe_filename("  Lesson 1: Intro  "), "Lesson 1- Intro");
    }

    #[test]
    fn empty_input_is_fine() {
        assert_eq!(safe_filename(""), "");
    }

    #[test]
    fn slug_takes_last_path_segment() {
        assert_eq!(
            slug_from_page_url("https://courses.example/classes/advanced-baking/12345"),
            "12345"
        );
        assert_eq!(
            slug_from_page_url("https://courses.example/classes/advanced-baking/"),
            "advanced-baking"
        );
    }

    #[test]
    fn slug_ignores_query_and_fragment() {
        assert_eq!(
            slug_from_page_url("https://courses.example/classes/intro?via=search#top"),
            "intro"
        );
    }
}
