use serde::{Deserialize, Serialize};

/// HTTP Methods used against the document store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
        }
    }
}

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_TRAVELER_ID: &str = "travelerId";

/// Suffix of the bulk insert endpoint (`createMany`).
pub const BULK_SUFFIX: &str = "bulk";

/// Resource collections exposed by the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Activities,
    Bookings,
    Profiles,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Activities => "activities",
            Collection::Bookings => "bookings",
            Collection::Profiles => "profiles",
        }
    }

    /// `/api/db/{project}/{collection}`
    pub fn path(&self, project_id: &str) -> String {
        format!("/api/db/{}/{}", project_id, self.name())
    }
}

/// 百分号编码路径段或查询值，只保留 RFC 3986 的非保留字符
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Filter for `bookings.list({ where })`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuery {
    pub traveler_id: String,
}

impl BookingQuery {
    pub fn for_traveler(traveler_id: impl Into<String>) -> Self {
        Self {
            traveler_id: traveler_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_are_percent_encoded() {
        assert_eq!(encode_component("user_1"), "user_1");
        assert_eq!(encode_component("a b&c#d/e"), "a%20b%26c%23d%2Fe");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn collection_paths_are_scoped_by_project() {
        assert_eq!(
            Collection::Activities.path("xamfi"),
            "/api/db/xamfi/activities"
        );
        assert_eq!(Collection::Profiles.path("p"), "/api/db/p/profiles");
    }
}
