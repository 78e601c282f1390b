//! Domain and search filtering.
//!
//! Three independent restrictions are composed: visibility (when an
//! expansion set is supplied), domain membership (when the domain list is
//! non-empty) and a case-insensitive name search (when the term is
//! non-empty). Each is a plain predicate, so the result does not depend on
//! the order in which they are applied.

use std::collections::BTreeSet;

use crate::{is_visible, ExpansionSet, Node};

/// Domain and search criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeFilter {
    domains: BTreeSet<String>,
    search: String,
}

impl NodeFilter {
    /// A filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given domains. An empty list is no restriction.
    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = domains.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to names containing `term`, ignoring case.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into().to_lowercase();
        self
    }

    /// Whether `node` passes the domain and search criteria.
    pub fn matches(&self, node: &Node) -> bool {
        let domain_ok = self.domains.is_empty() || self.domains.contains(&node.domain);
        let search_ok = self.search.is_empty() || node.name.to_lowercase().contains(&self.search);
        domain_ok && search_ok
    }

    /// Whether the filter restricts anything.
    pub fn is_passthrough(&self) -> bool {
        self.domains.is_empty() && self.search.is_empty()
    }

    /// Apply to a node sequence, optionally hiding collapsed subnodes.
    pub fn apply<'a>(&self, nodes: &'a [Node], expanded: Option<&ExpansionSet>) -> Vec<&'a Node> {
        nodes
            .iter()
            .filter(|n| expanded.map_or(true, |e| is_visible(n, e)))
            .filter(|n| self.matches(n))
            .collect()
    }
}

/// Filter `nodes` by visibility, domain and name search.
pub fn filter_nodes<'a>(
    nodes: &'a [Node],
    domain_filters: &[String],
    search_term: &str,
    expanded: Option<&ExpansionSet>,
) -> Vec<&'a Node> {
    NodeFilter::new()
        .with_domains(domain_filters.iter().cloned())
        .with_search(search_term)
        .apply(nodes, expanded)
}

/// Return a new filter list with `domain` flipped. `filters` is left
/// untouched.
#[must_use]
pub fn toggle_filter(domain: &str, filters: &[String]) -> Vec<String> {
    if filters.iter().any(|f| f == domain) {
        filters.iter().filter(|f| *f != domain).cloned().collect()
    } else {
        let mut next = filters.to_vec();
        next.push(domain.to_owned());
        next
    }
}
