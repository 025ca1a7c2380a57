use crate::error::{IntegrityViolation, Result};
use crate::types::{DescriptorRecord, IndexStats, ROOT_NAME};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;

/// Read-only index over the flat descriptor list.
///
/// Records live in a petgraph arena (edges point parent -> child); the
/// hash maps give O(1) access by code, by parent code and by exact name.
/// Child and name buckets keep source order.
#[derive(Debug)]
pub struct ThesaurusIndex {
    /// Arena of records, parent -> child edges
    graph: DiGraph<DescriptorRecord, ()>,

    /// Code -> NodeIndex
    code_index: HashMap<String, NodeIndex>,

    /// Parent code -> children in source order
    children_index: HashMap<String, Vec<NodeIndex>>,

    /// Upper-case name -> records in source order
    name_index: HashMap<String, Vec<NodeIndex>>,

    root: NodeIndex,
    root_name: String,
}

impl ThesaurusIndex {
    /// Build the index with the standard root name.
    pub fn build(records: Vec<DescriptorRecord>) -> Result<Self> {
        Self::build_with_root(records, ROOT_NAME)
    }

    /// Build the index, identifying the root by `root_name`.
    ///
    /// Fails with [`crate::ThesaurusError::DataIntegrity`] if a code is
    /// empty or repeated, no record carries the root name, a non-root record
    /// has no parent, or a parent code does not resolve.
    pub fn build_with_root(records: Vec<DescriptorRecord>, root_name: &str) -> Result<Self> {
        let root_name = root_name.trim().to_uppercase();
        let mut graph = DiGraph::with_capacity(records.len(), records.len());
        let mut code_index = HashMap::with_capacity(records.len());
        let mut name_index: HashMap<String, Vec<NodeIndex>> = HashMap::new();
        let mut root = None;

        // Phase 1: one node per record
        for record in records {
            if record.code.is_empty() {
                return Err(IntegrityViolation::EmptyCode(record.name).into());
            }
            if code_index.contains_key(&record.code) {
                return Err(IntegrityViolation::DuplicateCode(record.code).into());
            }

            let is_root = root.is_none() && record.is_named(&root_name);
            let code = record.code.clone();
            let name = record.name.clone();
            let idx = graph.add_node(record);

            code_index.insert(code, idx);
            name_index.entry(name).or_default().push(idx);
            if is_root {
                root = Some(idx);
            }
        }

        let root = root.ok_or_else(|| IntegrityViolation::MissingRoot(root_name.clone()))?;

        // Phase 2: resolve parent codes into edges and child buckets
        let mut children_index: HashMap<String, Vec<NodeIndex>> = HashMap::new();
        let mut edges = Vec::with_capacity(graph.node_count());
        for idx in graph.node_indices() {
            if idx == root {
                continue;
            }
            let record = &graph[idx];
            let parent_code = record
                .parent_code
                .as_ref()
                .ok_or_else(|| IntegrityViolation::Orphan(record.code.clone()))?;
            let parent = code_index.get(parent_code).copied().ok_or_else(|| {
                IntegrityViolation::DanglingParent {
                    code: record.code.clone(),
                    parent_code: parent_code.clone(),
                }
            })?;

            children_index
                .entry(parent_code.clone())
                .or_default()
                .push(idx);
            edges.push((parent, idx));
        }
        for (parent, child) in edges {
            graph.add_edge(parent, child, ());
        }

        let index = Self {
            graph,
            code_index,
            children_index,
            name_index,
            root,
            root_name,
        };

        log::info!(
            "Built thesaurus index: {} records, {} edges, root {}",
            index.len(),
            index.graph.edge_count(),
            index.root().code
        );

        Ok(index)
    }

    /// Exact lookup by code
    pub fn by_code(&self, code: &str) -> Option<&DescriptorRecord> {
        self.code_index.get(code).map(|&idx| &self.graph[idx])
    }

    /// Look up several codes at once; codes are upper-cased and unknown
    /// codes are skipped. Results follow input order.
    pub fn by_codes<S: AsRef<str>>(&self, codes: &[S]) -> Vec<&DescriptorRecord> {
        codes
            .iter()
            .filter_map(|code| self.by_code(&code.as_ref().trim().to_uppercase()))
            .collect()
    }

    /// Case-insensitive exact name match, in source order
    pub fn by_exact_name(&self, name: &str) -> Vec<&DescriptorRecord> {
        self.name_index
            .get(&name.to_uppercase())
            .map(|nodes| self.resolve(nodes))
            .unwrap_or_default()
    }

    /// Case-insensitive substring match, in source order
    pub fn by_name_contains(&self, substring: &str) -> Vec<&DescriptorRecord> {
        let needle = substring.to_uppercase();
        self.records()
            .filter(|record| record.name.contains(&needle))
            .collect()
    }

    /// Direct children of `code`; empty for leaves and unknown codes
    pub fn children_of(&self, code: &str) -> Vec<&DescriptorRecord> {
        self.children_index
            .get(code)
            .map(|nodes| self.resolve(nodes))
            .unwrap_or_default()
    }

    pub fn root(&self) -> &DescriptorRecord {
        &self.graph[self.root]
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// True only for the designated root, not for other records that
    /// happen to carry the root name.
    pub fn is_root(&self, record: &DescriptorRecord) -> bool {
        record.code == self.root().code
    }

    /// All records in source order
    pub fn records(&self) -> impl Iterator<Item = &DescriptorRecord> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn stats(&self) -> IndexStats {
        let leaves = self
            .graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, Direction::Outgoing)
                    .next()
                    .is_none()
            })
            .count();

        IndexStats {
            records: self.graph.node_count(),
            edges: self.graph.edge_count(),
            leaves,
        }
    }

    fn resolve(&self, nodes: &[NodeIndex]) -> Vec<&DescriptorRecord> {
        nodes.iter().map(|&idx| &self.graph[idx]).collect()
    }
}
