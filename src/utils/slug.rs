/// URL-safe slug: lowercase, runs of non-alphanumerics collapsed to a single
/// hyphen, no leading or trailing hyphen.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_was_hyphen = true; // suppress a leading hyphen
    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn collapses_and_trims_separators() {
        assert_eq!(slugify("Liga 1 & East Java (2025)"), "liga-1-east-java-2025");
        assert_eq!(slugify("  Surabaya Open!  "), "surabaya-open");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }
}
