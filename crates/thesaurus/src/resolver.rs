use crate::index::ThesaurusIndex;
use crate::types::DescriptorRecord;
use once_cell::sync::Lazy;
use regex::Regex;

/// One upper-case letter and four digits, anchored at the start.
static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][0-9]{4}\b").expect("code pattern is valid"));

/// What a raw search string was classified as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    /// Looks like a facet code, e.g. `B1272`
    Code(String),
    /// Anything else is treated as a term
    Name(String),
}

impl QueryKind {
    /// Classify the trimmed input.
    #[must_use]
    pub fn classify(query: &str) -> Self {
        let trimmed = query.trim();
        if CODE_PATTERN.is_match(trimmed) {
            Self::Code(trimmed.to_string())
        } else {
            Self::Name(trimmed.to_string())
        }
    }
}

/// Outcome of resolving a query. Empty and ambiguous results are values,
/// not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Nothing matched; `message` names the search term
    NotFound { message: String },

    /// A code query hit its record
    Single(&'a DescriptorRecord),

    /// One or more records matched the name exactly
    Set(Vec<&'a DescriptorRecord>),

    /// No exact name match; these records contain the term
    Fallback {
        message: String,
        matches: Vec<&'a DescriptorRecord>,
    },
}

impl<'a> Resolution<'a> {
    pub fn matches(&self) -> Vec<&'a DescriptorRecord> {
        match self {
            Self::NotFound { .. } => Vec::new(),
            Self::Single(record) => vec![*record],
            Self::Set(matches) | Self::Fallback { matches, .. } => matches.clone(),
        }
    }

    /// Explanatory message shown ahead of (or instead of) the matches
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::NotFound { message } | Self::Fallback { message, .. } => Some(message.as_str()),
            Self::Single(_) | Self::Set(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }

    /// More than one record matched
    pub fn is_ambiguous(&self) -> bool {
        match self {
            Self::Set(matches) | Self::Fallback { matches, .. } => matches.len() > 1,
            Self::NotFound { .. } | Self::Single(_) => false,
        }
    }

    /// Stable tag for machine-readable output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Single(_) => "code",
            Self::Set(_) => "exact_name",
            Self::Fallback { .. } => "substring",
        }
    }
}

/// Stateless query dispatch over a [`ThesaurusIndex`].
#[derive(Debug, Clone, Copy)]
pub struct QueryResolver<'a> {
    index: &'a ThesaurusIndex,
}

impl<'a> QueryResolver<'a> {
    pub fn new(index: &'a ThesaurusIndex) -> Self {
        Self { index }
    }

    /// Classify `query` and resolve it.
    pub fn resolve(&self, query: &str) -> Resolution<'a> {
        let kind = QueryKind::classify(query);
        log::debug!("Query {:?} classified as {:?}", query, kind);
        self.resolve_kind(&kind)
    }

    pub fn resolve_kind(&self, kind: &QueryKind) -> Resolution<'a> {
        match kind {
            QueryKind::Code(code) => self.resolve_code(code),
            QueryKind::Name(name) => self.resolve_name(name),
        }
    }

    /// Substring listing without trying an exact match first.
    pub fn contains(&self, query: &str) -> Resolution<'a> {
        let term = query.trim();
        if term.is_empty() {
            return Resolution::NotFound {
                message: nothing_containing(term),
            };
        }

        let matches = self.index.by_name_contains(term);
        if matches.is_empty() {
            Resolution::NotFound {
                message: nothing_containing(term),
            }
        } else {
            Resolution::Set(matches)
        }
    }

    fn resolve_code(&self, code: &str) -> Resolution<'a> {
        match self.index.by_code(code) {
            Some(record) => Resolution::Single(record),
            None => {
                log::debug!("No record with code {}", code);
                Resolution::NotFound {
                    message: format!("can't find: {code}"),
                }
            }
        }
    }

    fn resolve_name(&self, name: &str) -> Resolution<'a> {
        // An empty needle would be contained in every name.
        if name.is_empty() {
            return Resolution::NotFound {
                message: nothing_containing(name),
            };
        }

        let exact = self.index.by_exact_name(name);
        if !exact.is_empty() {
            log::debug!("{} exact match(es) for {:?}", exact.len(), name);
            return Resolution::Set(exact);
        }

        let matches = self.index.by_name_contains(name);
        if matches.is_empty() {
            return Resolution::NotFound {
                message: nothing_containing(name),
            };
        }

        log::warn!(
            "No exact match for {:?}, falling back to {} substring match(es)",
            name,
            matches.len()
        );
        Resolution::Fallback {
            message: format!("can't find an exact match for: {name}"),
            matches,
        }
    }
}

fn nothing_containing(term: &str) -> String {
    format!("can't find anything containing: {term}")
}
