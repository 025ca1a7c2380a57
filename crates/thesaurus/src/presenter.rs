use crate::error::Result;
use crate::navigator::TreeNavigator;
use crate::resolver::Resolution;
use crate::types::DescriptorRecord;
use serde::Serialize;

/// Line printed after each rendered record
pub const SEPARATOR: &str = "--------";

const BRANCH: &str = "+-";

/// Text rendering of resolved records
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    /// Spaces per depth level in tree mode
    pub indent_width: usize,
}

impl Default for Presenter {
    fn default() -> Self {
        Self { indent_width: 6 }
    }
}

/// Machine-readable form of a resolution
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionReport {
    pub query: String,
    pub kind: &'static str,
    pub message: Option<String>,
    pub matches: Vec<MatchReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub code: String,
    pub name: String,
    pub parent_code: Option<String>,

    /// Codes from the root down to this record (tree mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

impl Presenter {
    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }

    /// Render a root-to-leaf path, one indented level per line.
    pub fn render_tree(&self, path: &[&DescriptorRecord]) -> String {
        path.iter()
            .enumerate()
            .map(|(depth, record)| {
                format!(
                    "{}{}{}",
                    " ".repeat(self.indent_width * depth),
                    BRANCH,
                    record.label()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One `code, name` line per record
    pub fn render_list(&self, records: &[&DescriptorRecord]) -> String {
        records
            .iter()
            .map(|record| format!("{}\n", record.label()))
            .collect()
    }

    /// Render the message of `resolution` followed by every match, each
    /// closed by [`SEPARATOR`].
    pub fn render_resolution<'a>(
        &self,
        navigator: &TreeNavigator<'a>,
        resolution: &Resolution<'a>,
        with_tree: bool,
    ) -> Result<String> {
        let mut out = String::new();

        if let Some(message) = resolution.message() {
            out.push_str(message);
            out.push_str("\n\n");
        }

        for record in resolution.matches() {
            if with_tree {
                let path = navigator.path_from_root(record)?;
                out.push_str(&self.render_tree(&path));
            } else {
                out.push_str(&record.label());
            }
            out.push_str("\n\n");
            out.push_str(SEPARATOR);
            out.push_str("\n\n");
        }

        Ok(out)
    }

    pub fn report<'a>(
        &self,
        navigator: &TreeNavigator<'a>,
        query: &str,
        resolution: &Resolution<'a>,
        with_tree: bool,
    ) -> Result<ResolutionReport> {
        let matches = resolution
            .matches()
            .into_iter()
            .map(|record| -> Result<MatchReport> {
                let path = if with_tree {
                    Some(
                        navigator
                            .path_from_root(record)?
                            .into_iter()
                            .map(|r| r.code.clone())
                            .collect(),
                    )
                } else {
                    None
                };
                Ok(MatchReport {
                    code: record.code.clone(),
                    name: record.name.clone(),
                    parent_code: record.parent_code.clone(),
                    path,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ResolutionReport {
            query: query.to_string(),
            kind: resolution.kind(),
            message: resolution.message().map(str::to_string),
            matches,
        })
    }
}
