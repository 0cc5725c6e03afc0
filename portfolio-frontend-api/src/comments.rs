use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::RequestCredentials;

use portfolio_boundary::{CommentList, LoginStatus};
use portfolio_entities::{
    comment::{Comment, NewComment},
    id::CommentId,
    language::LanguageCode,
    login,
    query::CommentQuery,
};

use crate::{
    into_json, into_text, into_unit,
    util::{comments_url, encode_params, FORM_CONTENT_TYPE},
    Result,
};

/// Comment API of the portfolio backend
#[derive(Debug, Clone)]
pub struct CommentApi {
    url: String,
}

impl CommentApi {
    /// The `url` is prepended to every endpoint path,
    /// an empty string targets the origin of the page.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into().trim_end_matches('/').to_owned();
        Self { url }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.url)
    }

    async fn post_form(&self, path: &str, params: &[(&str, &str)]) -> Result<Response> {
        let url = self.endpoint(path);
        let response = with_session(Request::post(&url))
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(encode_params(params))?
            .send()
            .await?;
        Ok(response)
    }

    pub async fn comments(&self, query: &CommentQuery) -> Result<Vec<Comment>> {
        let url = comments_url(&self.url, query);
        let response = with_session(Request::get(&url)).send().await?;
        let list: CommentList = into_json(response).await?;
        Ok(list.try_into()?)
    }

    pub async fn post_comment(&self, comment: &NewComment) -> Result<()> {
        let NewComment { name, message } = comment;
        let mut params = vec![("message", message.as_str())];
        if let Some(name) = name {
            params.push(("name", name.as_str()));
        }
        let response = self.post_form("data", &params).await?;
        into_unit(response).await
    }

    pub async fn delete_comment(&self, id: CommentId) -> Result<()> {
        let id = id.to_string();
        let response = self.post_form("delete-data", &[("id", id.as_str())]).await?;
        into_unit(response).await
    }

    pub async fn like_comment(&self, id: CommentId) -> Result<()> {
        let id = id.to_string();
        let response = self.post_form("like-comment", &[("id", id.as_str())]).await?;
        into_unit(response).await
    }

    pub async fn unlike_comment(&self, id: CommentId) -> Result<()> {
        let id = id.to_string();
        let response = self.post_form("unlike-comment", &[("id", id.as_str())]).await?;
        into_unit(response).await
    }

    /// Returns the translation as plain text.
    pub async fn translate(&self, message: &str, target: &LanguageCode) -> Result<String> {
        let response = self
            .post_form(
                "translate",
                &[("message", message), ("languageCode", target.as_str())],
            )
            .await?;
        let text = into_text(response).await?;
        Ok(text.trim().to_owned())
    }

    pub async fn login_status(&self) -> Result<login::LoginStatus> {
        let url = self.endpoint("login");
        let response = with_session(Request::get(&url)).send().await?;
        let status: LoginStatus = into_json(response).await?;
        Ok(status.into())
    }
}

// The backend identifies the viewer by its session cookie.
fn with_session(req: RequestBuilder) -> RequestBuilder {
    req.credentials(RequestCredentials::Include)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_relative_to_base_url() {
        let api = CommentApi::new("https://example.com/api/");
        assert_eq!(api.url(), "https://example.com/api");
        assert_eq!(api.endpoint("like-comment"), "https://example.com/api/like-comment");

        let same_origin = CommentApi::new("");
        assert_eq!(same_origin.endpoint("login"), "/login");
    }
}
