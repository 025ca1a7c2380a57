use crate::error::{Result, ThesaurusError};
use crate::index::ThesaurusIndex;
use crate::types::DescriptorRecord;
use std::collections::{HashSet, VecDeque};

/// Parent/child navigation over a [`ThesaurusIndex`].
#[derive(Debug, Clone, Copy)]
pub struct TreeNavigator<'a> {
    index: &'a ThesaurusIndex,
}

impl<'a> TreeNavigator<'a> {
    pub fn new(index: &'a ThesaurusIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a ThesaurusIndex {
        self.index
    }

    /// Resolve the broader term of `record`.
    pub fn parent_of(&self, record: &DescriptorRecord) -> Result<&'a DescriptorRecord> {
        let parent_code = record.parent_code.as_deref().ok_or_else(|| {
            ThesaurusError::NodeNotFound(format!("{} has no parent code", record.code))
        })?;

        self.index.by_code(parent_code).ok_or_else(|| {
            ThesaurusError::NodeNotFound(format!(
                "parent {} of {} is not in the index",
                parent_code, record.code
            ))
        })
    }

    /// Walk from `record` up to the root, leaf first.
    ///
    /// The walk is capped at the index size; exceeding it means the parent
    /// links loop and yields [`ThesaurusError::CycleDetected`].
    pub fn ancestor_chain(
        &self,
        record: &'a DescriptorRecord,
    ) -> Result<Vec<&'a DescriptorRecord>> {
        let limit = self.index.len();
        let mut chain = vec![record];
        let mut current = record;

        while !self.index.is_root(current) {
            if chain.len() > limit {
                return Err(ThesaurusError::CycleDetected {
                    code: record.code.clone(),
                    steps: chain.len() - 1,
                });
            }
            current = self.parent_of(current)?;
            chain.push(current);
        }

        Ok(chain)
    }

    /// Ancestor chain in root-to-leaf order, as displayed
    pub fn path_from_root(
        &self,
        record: &'a DescriptorRecord,
    ) -> Result<Vec<&'a DescriptorRecord>> {
        let mut chain = self.ancestor_chain(record)?;
        chain.reverse();
        Ok(chain)
    }

    /// Number of steps between `record` and the root
    pub fn depth(&self, record: &'a DescriptorRecord) -> Result<usize> {
        Ok(self.ancestor_chain(record)?.len() - 1)
    }

    /// Direct children of every input record, concatenated in input order.
    /// Duplicates are kept.
    pub fn children_of_many(&self, records: &[&DescriptorRecord]) -> Vec<&'a DescriptorRecord> {
        records
            .iter()
            .flat_map(|record| self.index.children_of(&record.code))
            .collect()
    }

    /// Breadth-first closure of `records` under the child relation,
    /// starting with `records` themselves.
    pub fn descendants_closure(
        &self,
        records: &[&'a DescriptorRecord],
    ) -> Vec<&'a DescriptorRecord> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut result = Vec::new();
        let mut queue = VecDeque::new();

        for &record in records {
            if visited.insert(record.code.as_str()) {
                result.push(record);
                queue.push_back(record);
            }
        }

        while let Some(current) = queue.pop_front() {
            for child in self.index.children_of(&current.code) {
                if visited.insert(child.code.as_str()) {
                    result.push(child);
                    queue.push_back(child);
                }
            }
        }

        result
    }

    /// True if `candidate` is one of `possible_ancestors` or lies below one
    /// of them.
    pub fn is_descendant_of(
        &self,
        candidate: &DescriptorRecord,
        possible_ancestors: &[&'a DescriptorRecord],
    ) -> bool {
        self.descendants_closure(possible_ancestors)
            .iter()
            .any(|record| record.code == candidate.code)
    }
}
