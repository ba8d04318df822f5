//! Outgoing form submissions.

use http::Method;
use serde::{Deserialize, Serialize};

/// How form fields are encoded in the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyEncoding {
    /// `multipart/form-data`, what a browser sends for `FormData`
    #[default]
    Multipart,
    /// `application/x-www-form-urlencoded`
    UrlEncoded,
}

/// A form submission: method, endpoint and key/value pairs in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    method: Method,
    url: String,
    fields: Vec<(String, String)>,
    encoding: Option<BodyEncoding>,
}

impl FormRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            fields: Vec::new(),
            encoding: None,
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Append a field. Duplicate names are kept, as in `FormData`.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Append several fields.
    pub fn fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in fields {
            self.fields.push((k.into(), v.into()));
        }
        self
    }

    /// Override the client's default body encoding.
    pub fn encoding(mut self, encoding: BodyEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn field_pairs(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Value of the first field named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn body_encoding(&self) -> Option<BodyEncoding> {
        self.encoding
    }

    /// Whether fields travel in the query string instead of a body.
    pub fn uses_query(&self) -> bool {
        self.method == Method::GET || self.method == Method::HEAD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_order() {
        let request = FormRequest::post("https://forms.example.org/f/contact")
            .field("name", "Ada")
            .fields([("email", "ada@example.org"), ("name", "Second")]);

        assert_eq!(request.field_pairs().len(), 3);
        assert_eq!(request.get("name"), Some("Ada"));
        assert_eq!(request.field_pairs()[2].1, "Second");
        assert!(!request.uses_query());
        assert_eq!(request.body_encoding(), None);
    }

    #[test]
    fn test_get_uses_query() {
        let request = FormRequest::new(Method::GET, "/search").field("q", "2br");
        assert!(request.uses_query());
    }
}
