/// Lowercases, strips everything that is not alphanumeric, underscore or
/// whitespace, then collapses whitespace runs into single hyphens.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("-")
}

/// Post slugs get the last four digits of the creation timestamp appended
/// so two posts with the same title stay distinguishable.
pub fn slugify_unique(input: &str, now_millis: i64) -> String {
    let millis = now_millis.to_string();
    let suffix = if millis.len() > 4 {
        &millis[millis.len() - 4..]
    } else {
        millis.as_str()
    };
    format!("{}-{}", slugify(input), suffix)
}

/// Estimated read time in minutes at 200 words per minute, rounded up.
pub fn read_time(content: &str) -> i64 {
    let words = content.split_whitespace().count();
    ((words + 199) / 200) as i64
}

pub fn is_valid_email(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && !input.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_strips_and_hyphenates() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust   & Mongo  "), "rust-mongo");
        assert_eq!(slugify("already-clean"), "alreadyclean");
        assert_eq!(slugify("snake_case ok"), "snake_case-ok");
    }

    #[test]
    fn unique_slug_appends_last_four_digits() {
        assert_eq!(slugify_unique("My Post", 1712345678901), "my-post-8901");
        assert_eq!(slugify_unique("My Post", 123), "my-post-123");
    }

    #[test]
    fn read_time_rounds_up() {
        assert_eq!(read_time(""), 0);
        assert_eq!(read_time("one two three"), 1);
        let two_hundred = vec!["word"; 200].join(" ");
        assert_eq!(read_time(&two_hundred), 1);
        let two_o_one = vec!["word"; 201].join(" ");
        assert_eq!(read_time(&two_o_one), 2);
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b-c@mail.example.co"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada example@com.de"));
        assert!(!is_valid_email("plainaddress"));
    }
}
