//! Framework-agnostic request data accessor
//!
//! The host web layer feeds parsed request data in through the builder;
//! nothing here touches sockets or raw HTTP. Parameter keys are lowercased
//! on insert so lookups are case-insensitive.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The request method, as far as the framework cares to distinguish it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestMethod {
    Head,
    Post,
    Get,
    Put,
    Delete,
}

impl RequestMethod {
    /// Resolve a method name; anything unrecognized is treated as `Head`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "POST" => RequestMethod::Post,
            "GET" => RequestMethod::Get,
            "PUT" => RequestMethod::Put,
            "DELETE" => RequestMethod::Delete,
            _ => RequestMethod::Head,
        }
    }
}

/// Parsed data of one request.
#[derive(Debug, Clone)]
pub struct RequestData {
    method: RequestMethod,
    values: HashMap<String, String>,
    https: bool,
    domain: String,
    script_file: String,
    path_info: String,
}

impl RequestData {
    pub fn builder(method: RequestMethod) -> RequestDataBuilder {
        RequestDataBuilder {
            method,
            values: HashMap::new(),
            https: false,
            domain: String::new(),
            script_file: String::new(),
            path_info: String::new(),
        }
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// A request parameter, looked up case-insensitively.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(&key.to_lowercase())
    }

    pub fn is_https(&self) -> bool {
        self.https
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn script_file(&self) -> &str {
        &self.script_file
    }

    pub fn path_info(&self) -> &str {
        &self.path_info
    }
}

/// Builder for [`RequestData`].
#[derive(Debug)]
pub struct RequestDataBuilder {
    method: RequestMethod,
    values: HashMap<String, String>,
    https: bool,
    domain: String,
    script_file: String,
    path_info: String,
}

impl RequestDataBuilder {
    /// Add one request parameter. Later inserts win, matching query
    /// parameters being overridden by body parameters.
    pub fn value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into().to_lowercase(), value.into());
        self
    }

    /// Add many request parameters at once.
    pub fn values<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.values.insert(key.into().to_lowercase(), value.into());
        }
        self
    }

    pub fn https(mut self, https: bool) -> Self {
        self.https = https;
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn script_file(mut self, script_file: impl Into<String>) -> Self {
        self.script_file = script_file.into();
        self
    }

    pub fn path_info(mut self, path_info: impl Into<String>) -> Self {
        self.path_info = path_info.into();
        self
    }

    pub fn build(self) -> RequestData {
        RequestData {
            method: self.method,
            values: self.values,
            https: self.https,
            domain: self.domain,
            script_file: self.script_file,
            path_info: self.path_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_name() {
        assert_eq!(RequestMethod::from_name("POST"), RequestMethod::Post);
        assert_eq!(RequestMethod::from_name("GET"), RequestMethod::Get);
        assert_eq!(RequestMethod::from_name("PUT"), RequestMethod::Put);
        assert_eq!(RequestMethod::from_name("DELETE"), RequestMethod::Delete);
        assert_eq!(RequestMethod::from_name("HEAD"), RequestMethod::Head);
        assert_eq!(RequestMethod::from_name("OPTIONS"), RequestMethod::Head);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let request = RequestData::builder(RequestMethod::Get)
            .value("UserName", "ann")
            .build();
        assert_eq!(request.value("username"), Some("ann"));
        assert_eq!(request.value("USERNAME"), Some("ann"));
        assert!(request.contains("userName"));
        assert_eq!(request.value("missing"), None);
    }

    #[test]
    fn test_later_values_override() {
        let request = RequestData::builder(RequestMethod::Post)
            .values([("page", "1"), ("sort", "name")])
            .value("page", "2")
            .build();
        assert_eq!(request.value("page"), Some("2"));
        assert_eq!(request.value("sort"), Some("name"));
    }

    #[test]
    fn test_request_line_fields() {
        let request = RequestData::builder(RequestMethod::Get)
            .https(true)
            .domain("example.org")
            .script_file("/srv/app/index.cgi")
            .path_info("/articles/42")
            .build();
        assert_eq!(request.method(), RequestMethod::Get);
        assert!(request.is_https());
        assert_eq!(request.domain(), "example.org");
        assert_eq!(request.script_file(), "/srv/app/index.cgi");
        assert_eq!(request.path_info(), "/articles/42");
    }

    #[test]
    fn test_method_serde() {
        assert_eq!(serde_json::to_string(&RequestMethod::Delete).unwrap(), "\"DELETE\"");
        let parsed: RequestMethod = serde_json::from_str("\"POST\"").unwrap();
        assert_eq!(parsed, RequestMethod::Post);
    }
}
