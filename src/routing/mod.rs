//! Route Resolver Module
//!
//! Maps request paths to page templates through a fixed, ordered rule
//! table. Rules are declared once at startup and matched top-down; the
//! first structural match wins, so a catch-all pattern declared later
//! never shadows an earlier, more specific rule.

use std::collections::HashMap;

// == Resolution ==
/// The outcome of matching a request path against the rule table: which
/// template to render and with which parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Target template identifier (e.g. `/major`)
    pub template: String,
    /// Parameters for the renderer, bound from the path or fixed by the rule
    pub params: HashMap<String, String>,
}

// == Segment ==
// A single path segment of a pattern: a literal string or a named capture.
#[derive(Debug, Clone)]
enum Segment {
    Static(String),
    Param(String),
}

// == Route Rule ==
/// One declared route: a path pattern, a target template, and any fixed
/// parameters the rule supplies on top of path captures.
#[derive(Debug, Clone)]
pub struct RouteRule {
    segments: Vec<Segment>,
    template: String,
    fixed: Vec<(String, String)>,
}

impl RouteRule {
    // == Constructors ==
    /// Declares a rule whose parameters come from named path segments
    /// (`:name`), if any.
    pub fn new(pattern: &str, template: &str) -> Self {
        Self {
            segments: parse_pattern(pattern),
            template: template.to_string(),
            fixed: Vec::new(),
        }
    }

    /// Declares a rule that supplies one fixed parameter regardless of the
    /// path, e.g. `/economics` rendering the `/major` template with
    /// `id=economics`.
    pub fn with_param(pattern: &str, template: &str, name: &str, value: &str) -> Self {
        Self {
            segments: parse_pattern(pattern),
            template: template.to_string(),
            fixed: vec![(name.to_string(), value.to_string())],
        }
    }

    // == Matches ==
    // Try to match a normalized path against this rule, producing the
    // resolution on success.
    fn matches(&self, path_segments: &[&str]) -> Option<Resolution> {
        if self.segments.len() != path_segments.len() {
            return None;
        }

        let mut params = HashMap::new();

        for (segment, path_segment) in self.segments.iter().zip(path_segments) {
            match segment {
                Segment::Static(s) => {
                    if s != path_segment {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), (*path_segment).to_string());
                }
            }
        }

        for (name, value) in &self.fixed {
            params.insert(name.clone(), value.clone());
        }

        Some(Resolution {
            template: self.template.clone(),
            params,
        })
    }
}

// Splits a pattern string into segments, classifying `:name` segments as
// named captures. The root pattern `/` yields no segments.
fn parse_pattern(pattern: &str) -> Vec<Segment> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            if let Some(name) = s.strip_prefix(':') {
                Segment::Param(name.to_string())
            } else {
                Segment::Static(s.to_string())
            }
        })
        .collect()
}

// == Route Table ==
/// The fixed, ordered sequence of route rules. Built once at startup and
/// immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    // == Constructor ==
    /// Creates an empty route table.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    // == Rule ==
    /// Appends a rule; declaration order is match order.
    pub fn rule(mut self, rule: RouteRule) -> Self {
        self.rules.push(rule);
        self
    }

    // == Resolve ==
    /// Resolves a request path to a template and parameters.
    ///
    /// Rules are tried in declaration order and the first structural match
    /// wins. Trailing slashes are normalized, so `/news/3/` resolves like
    /// `/news/3`. Returns None when no rule matches; such requests belong
    /// to the fallback handler, not to the render path.
    pub fn resolve(&self, path: &str) -> Option<Resolution> {
        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        self.rules
            .iter()
            .find_map(|rule| rule.matches(&path_segments))
    }

    // == Length ==
    /// Returns the number of declared rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    // == Site Defaults ==
    /// The route table for the site: static pages, one-parameter pages,
    /// and the static aliases that pin a fixed id onto a shared template.
    pub fn site_defaults() -> Self {
        Self::new()
            .rule(RouteRule::new("/", "/"))
            .rule(RouteRule::new("/faculty/:id", "/faculty"))
            .rule(RouteRule::new("/contact/:id", "/directory"))
            .rule(RouteRule::new("/news/:id", "/news"))
            // Majors
            .rule(RouteRule::with_param("/economics", "/major", "id", "economics"))
            .rule(RouteRule::new("/major/:id", "/major"))
            .rule(RouteRule::with_param("/accounting", "/major", "id", "accounting"))
            // Minors
            .rule(RouteRule::with_param(
                "/comm-arts/film-studies",
                "/minor",
                "id",
                "film-studies-minor",
            ))
            .rule(RouteRule::new("/minor/:id", "/minor"))
            // Associate degree programs
            .rule(RouteRule::with_param("/associate", "/associate", "id", "main"))
            .rule(RouteRule::new("/associate/:id", "/associate"))
            // Departments
            .rule(RouteRule::new("/department/:id", "/department"))
    }
}
