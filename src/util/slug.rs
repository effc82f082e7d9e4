const MAX_SLUG_LEN: usize = 80;

/// Lowercases ASCII alphanumerics and collapses everything else into single
/// dashes. Non-ASCII characters are skipped entirely.
pub fn slugify(input: &str) -> String {
    let mut slug = String::new();
    let mut last_was_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if ch.is_ascii() {
            if !slug.is_empty() && !last_was_dash {
                slug.push('-');
                last_was_dash = true;
            }
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}

/// Builds the unique slug for a car from its brand, name, and assigned id.
pub fn car_slug(brand: &str, name: &str, id: i32) -> String {
    slugify(&format!("{} {} {}", brand, name, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_mixed_input() {
        assert_eq!(slugify("Toyota Corolla 2024"), "toyota-corolla-2024");
        assert_eq!(slugify("  BMW -- X5!  "), "bmw-x5");
        assert_eq!(slugify("Škoda Fabia"), "koda-fabia");
    }

    #[test]
    fn builds_car_slug_with_id() {
        assert_eq!(car_slug("Toyota", "Corolla", 17), "toyota-corolla-17");
    }

    #[test]
    fn truncates_overlong_slugs() {
        let long = "a ".repeat(200);
        let slug = slugify(&long);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
    }
}
