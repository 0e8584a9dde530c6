//! Query-string helper for GET endpoints.

/// Append `name=value` to `url`, URL-encoding both, using `?` for the first
/// parameter and `&` afterwards.
pub fn add_get_parameter(url: &str, name: &str, value: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!(
        "{url}{separator}{}={}",
        urlencoding::encode(name),
        urlencoding::encode(value)
    )
}

/// Build a URL from a path and an ordered list of parameters.
pub fn with_parameters(path: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(path.to_string(), |url, (name, value)| {
            add_get_parameter(&url, name, value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_parameter_uses_question_mark() {
        assert_eq!(
            add_get_parameter("/cgi-bin/home/get_data", "session_id", "abc"),
            "/cgi-bin/home/get_data?session_id=abc"
        );
    }

    #[test]
    fn later_parameters_use_ampersand() {
        let url = with_parameters(
            "/cgi-bin/books/about_data",
            &[("book_id", "12"), ("session_id", "abc")],
        );
        assert_eq!(url, "/cgi-bin/books/about_data?book_id=12&session_id=abc");
    }

    #[test]
    fn names_and_values_are_encoded() {
        assert_eq!(
            add_get_parameter("/s", "genre name", "Sci-Fi & Fantasy"),
            "/s?genre%20name=Sci-Fi%20%26%20Fantasy"
        );
    }
}
