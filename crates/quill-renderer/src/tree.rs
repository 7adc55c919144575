//! Block tree reconstruction.
//!
//! Blocks arrive either as a flat list carrying parent references or already
//! nested. Both shapes are normalized into a [`Forest`], the only input the
//! renderer accepts, after the structural checks below pass:
//!
//! - block ids are unique
//! - no block is its own ancestor
//! - every parent reference resolves to the root or to another block
//! - a block flagged `has_children` has its children attached

use std::collections::{HashMap, HashSet};

use quill_notion::Block;

/// Structural error in a block tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The same block id occurs twice.
    #[error("duplicate block {block_id}")]
    DuplicateBlock { block_id: String },

    /// Following parent references from a block leads back to it.
    #[error("block {block_id} is its own ancestor")]
    Cycle { block_id: String },

    /// Parent reference points nowhere.
    #[error("block {block_id} references unknown parent {parent_id}")]
    Orphan { block_id: String, parent_id: String },

    /// Block claims children but none are attached.
    #[error("children of block {block_id} were not resolved")]
    UnresolvedChildren { block_id: String },
}

/// Ordered root-level blocks of a page with their descendants attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest {
    roots: Vec<Block>,
}

impl Forest {
    /// Rebuild nesting from a flat list using parent references.
    ///
    /// Blocks whose parent is `root_id` become roots; every other block is
    /// attached under the block its parent references. Relative order of
    /// siblings follows the input order.
    pub fn from_flat(root_id: &str, blocks: Vec<Block>) -> Result<Self, TreeError> {
        check_unique(&blocks)?;

        let order: Vec<String> = blocks.iter().map(|b| b.id.clone()).collect();
        let parents: HashMap<String, Option<String>> = blocks
            .iter()
            .map(|b| (b.id.clone(), b.parent_id().map(str::to_owned)))
            .collect();

        let mut by_parent: HashMap<String, Vec<Block>> = HashMap::new();
        for block in blocks {
            let parent_id = block.parent_id().unwrap_or(root_id).to_owned();
            by_parent.entry(parent_id).or_default().push(block);
        }

        let roots = attach(root_id, &mut by_parent);

        // Anything left was not reachable from the root. Report the first
        // such block in input order.
        let stranded: HashSet<String> = by_parent.into_values().flatten().map(|b| b.id).collect();
        if let Some(id) = order.iter().find(|id| stranded.contains(*id)) {
            return Err(diagnose_stranded(id, &parents));
        }

        let forest = Self { roots };
        forest.check_resolved()?;
        Ok(forest)
    }

    /// Accept blocks that already carry their children.
    pub fn from_nested(blocks: Vec<Block>) -> Result<Self, TreeError> {
        let forest = Self { roots: blocks };
        let mut seen = HashSet::new();
        visit(&forest.roots, &mut |block| {
            if seen.insert(block.id.clone()) {
                Ok(())
            } else {
                Err(TreeError::DuplicateBlock {
                    block_id: block.id.clone(),
                })
            }
        })?;
        forest.check_resolved()?;
        Ok(forest)
    }

    /// Root-level blocks in document order.
    pub fn roots(&self) -> &[Block] {
        &self.roots
    }

    /// Total number of blocks in the forest.
    pub fn len(&self) -> usize {
        count(&self.roots)
    }

    /// Whether the forest has no blocks.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    fn check_resolved(&self) -> Result<(), TreeError> {
        visit(&self.roots, &mut |block| {
            if block.has_children && block.children.is_empty() {
                Err(TreeError::UnresolvedChildren {
                    block_id: block.id.clone(),
                })
            } else {
                Ok(())
            }
        })
    }
}

/// Take the children of `parent_id` out of the index and attach theirs, recursively.
///
/// Each sibling group is removed when consumed, so a block can be attached at
/// most once and the recursion ends even on malformed input.
fn attach(parent_id: &str, by_parent: &mut HashMap<String, Vec<Block>>) -> Vec<Block> {
    let Some(mut siblings) = by_parent.remove(parent_id) else {
        return Vec::new();
    };
    for block in &mut siblings {
        let children = attach(&block.id, by_parent);
        if !children.is_empty() {
            block.children.extend(children);
        }
    }
    siblings
}

/// Classify a block left unattached: either its parent chain loops, or it
/// ends at an ID that is neither the root nor a known block.
fn diagnose_stranded(block_id: &str, parents: &HashMap<String, Option<String>>) -> TreeError {
    let mut seen = HashSet::new();
    let mut current = block_id;
    loop {
        if !seen.insert(current) {
            return TreeError::Cycle {
                block_id: current.to_owned(),
            };
        }
        match parents.get(current) {
            Some(Some(parent)) if parents.contains_key(parent) => current = parent,
            Some(Some(parent)) => {
                return TreeError::Orphan {
                    block_id: current.to_owned(),
                    parent_id: parent.clone(),
                };
            }
            _ => {
                return TreeError::Orphan {
                    block_id: current.to_owned(),
                    parent_id: String::new(),
                };
            }
        }
    }
}

fn check_unique(blocks: &[Block]) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    for block in blocks {
        if !seen.insert(block.id.as_str()) {
            return Err(TreeError::DuplicateBlock {
                block_id: block.id.clone(),
            });
        }
    }
    Ok(())
}

fn count(blocks: &[Block]) -> usize {
    blocks.iter().map(|b| 1 + count(&b.children)).sum()
}

fn visit<F>(blocks: &[Block], f: &mut F) -> Result<(), TreeError>
where
    F: FnMut(&Block) -> Result<(), TreeError>,
{
    for block in blocks {
        f(block)?;
        visit(&block.children, f)?;
    }
    Ok(())
}
