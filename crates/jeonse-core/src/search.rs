use std::borrow::Cow;

pub const NAVER_LAND_SEARCH: &str = "https://new.land.naver.com/search?sk=";

/// Prefix that an encoded address is appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEndpoint {
    base: String,
}

impl SearchEndpoint {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Builds the listing-search URL for a free-text address. Blank input
    /// gives `None`. The URL is only constructed, never requested.
    pub fn url_for(&self, address: &str) -> Option<String> {
        let address = address.trim();
        if address.is_empty() {
            return None;
        }
        Some(format!("{}{}", self.base, encode_query(address)))
    }
}

impl Default for SearchEndpoint {
    fn default() -> Self {
        Self::new(NAVER_LAND_SEARCH)
    }
}

pub fn build_search_url(address: &str) -> Option<String> {
    SearchEndpoint::default().url_for(address)
}

// Everything outside the unreserved set is escaped, except `/`.
fn encode_query(text: &str) -> String {
    text.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<Cow<'_, str>>>()
        .join("/")
}
