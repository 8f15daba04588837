//! Query builder for the solicitation list endpoints.

use std::fmt::Write;

/// Filters understood by `GET /solicitations` and `GET /finished-solicitations`.
///
/// The rendered query always carries `document_name`, `ra` and `priority` in
/// that order; an unset filter is sent as the bare parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolicitationFilter {
    document_name: Option<String>,
    ra: Option<String>,
    priority: bool,
}

impl SolicitationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank names are treated as unset.
    pub fn document_name(mut self, name: impl Into<String>) -> Self {
        self.document_name = non_blank(name.into());
        self
    }

    pub fn ra(mut self, ra: impl Into<String>) -> Self {
        self.ra = non_blank(ra.into());
        self
    }

    pub fn priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }

    pub fn to_query(&self) -> String {
        let mut query = String::new();

        push(&mut query, "document_name", self.document_name.as_deref());
        query.push('&');
        push(&mut query, "ra", self.ra.as_deref());
        query.push('&');
        push(&mut query, "priority", self.priority.then_some("1"));

        query
    }
}

fn non_blank(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

fn push(query: &mut String, name: &str, value: Option<&str>) {
    query.push_str(name);
    if let Some(value) = value {
        let _ = write!(query, "={}", urlencoding::encode(value));
    }
}
