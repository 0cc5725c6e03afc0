use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use portfolio_entities::query::CommentQuery;

/// Characters that stay unescaped in `application/x-www-form-urlencoded`.
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

pub fn encode_params(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, FORM),
                utf8_percent_encode(value, FORM)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

pub fn comments_url(base_url: &str, query: &CommentQuery) -> String {
    let CommentQuery {
        max_comments,
        sort_type,
    } = query;
    let max_comments = max_comments.to_string();
    let params = encode_params(&[
        ("max-comments", max_comments.as_str()),
        ("sort-type", sort_type.as_ref()),
    ]);
    format!("{base_url}/data?{params}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_entities::query::{MaxComments, SortType};

    #[test]
    fn encode_form_body() {
        assert_eq!(encode_params(&[("id", "42")]), "id=42");
        assert_eq!(
            encode_params(&[("message", "¿Qué tal? a&b=c"), ("languageCode", "en")]),
            "message=%C2%BFQu%C3%A9%20tal%3F%20a%26b%3Dc&languageCode=en"
        );
        assert_eq!(encode_params(&[]), "");
    }

    #[test]
    fn comments_query_string() {
        assert_eq!(
            comments_url("", &CommentQuery::default()),
            "/data?max-comments=5&sort-type=newest"
        );
        let query = CommentQuery {
            max_comments: MaxComments::All,
            sort_type: SortType::Popular,
        };
        assert_eq!(
            comments_url("https://example.com", &query),
            "https://example.com/data?max-comments=0&sort-type=popular"
        );
    }
}
