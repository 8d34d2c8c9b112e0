//! List query resolution

use cowork_domain::constants::MAX_PAGE_SIZE;
use cowork_domain::{format_date, QueryOptions, Resource};

/// A list query bound to one record type's endpoint.
///
/// The filter is resolved once so that every page request carries exactly
/// the same date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    /// Collection URL of the record type.
    pub url: String,
    /// `from_{Module}_UpdatedOn` parameter and its wire date, if filtered.
    pub filter: Option<(String, String)>,
}

impl ResolvedQuery {
    /// Resolve `options` against the collection of `T` under `base_url`.
    pub fn new<T: Resource>(base_url: &str, options: &QueryOptions) -> Self {
        let filter = options
            .updated_after
            .map(|ts| (T::updated_filter_param(), format_date(Some(ts))));

        Self { url: format!("{base_url}/{}", T::PATH), filter }
    }

    /// Query parameters for one page, always at the largest page size.
    pub fn params(&self, page: u32) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), page.to_string()),
            ("size".to_string(), MAX_PAGE_SIZE.to_string()),
        ];

        if let Some((name, value)) = &self.filter {
            params.push((name.clone(), value.clone()));
        }

        params
    }
}
