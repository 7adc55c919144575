//! List grouping.
//!
//! The block model has no list container: consecutive list items are plain
//! siblings. Grouping merges each maximal run of same-kind items into one
//! [`ListGroup`] so the writer can emit a single `<ul>`/`<ol>`.

use quill_notion::{Block, BlockKind};

use crate::node::ListKind;

/// One entry in a sibling sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Sibling<'a> {
    Block(&'a Block),
    List(ListGroup<'a>),
}

/// Adjacent list items of the same kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ListGroup<'a> {
    pub kind: ListKind,
    pub items: Vec<&'a Block>,
}

impl<'a> Sibling<'a> {
    /// Wrap raw blocks without grouping.
    pub fn from_blocks(blocks: &'a [Block]) -> Vec<Self> {
        blocks.iter().map(Sibling::Block).collect()
    }
}

/// List kind of a block, if it is a list item.
pub fn list_kind(block: &Block) -> Option<ListKind> {
    match block.kind {
        BlockKind::BulletedListItem(_) => Some(ListKind::Bulleted),
        BlockKind::NumberedListItem(_) => Some(ListKind::Numbered),
        _ => None,
    }
}

/// Merge runs of adjacent same-kind list items into groups.
///
/// Other blocks and existing groups keep their position. Running the pass on
/// its own output changes nothing.
pub fn group_lists(siblings: Vec<Sibling<'_>>) -> Vec<Sibling<'_>> {
    let mut out: Vec<Sibling<'_>> = Vec::with_capacity(siblings.len());
    // Only groups opened in this pass may be extended.
    let mut open = false;

    for sibling in siblings {
        let Sibling::Block(block) = sibling else {
            out.push(sibling);
            open = false;
            continue;
        };
        let Some(kind) = list_kind(block) else {
            out.push(Sibling::Block(block));
            open = false;
            continue;
        };

        match out.last_mut() {
            Some(Sibling::List(group)) if open && group.kind == kind => group.items.push(block),
            _ => {
                out.push(Sibling::List(ListGroup {
                    kind,
                    items: vec![block],
                }));
                open = true;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quill_notion::types::TextBlock;

    use super::*;

    fn bullet(id: &str) -> Block {
        Block::new(id, BlockKind::BulletedListItem(TextBlock::default()))
    }

    fn numbered(id: &str) -> Block {
        Block::new(id, BlockKind::NumberedListItem(TextBlock::default()))
    }

    fn para(id: &str) -> Block {
        Block::new(id, BlockKind::Paragraph(TextBlock::default()))
    }

    fn shape(siblings: &[Sibling<'_>]) -> Vec<String> {
        siblings
            .iter()
            .map(|s| match s {
                Sibling::Block(b) => b.id.clone(),
                Sibling::List(g) => {
                    let ids: Vec<&str> = g.items.iter().map(|b| b.id.as_str()).collect();
                    format!("{:?}[{}]", g.kind, ids.join(","))
                }
            })
            .collect()
    }

    #[test]
    fn test_groups_runs_by_kind() {
        let blocks = vec![
            para("p1"),
            bullet("b1"),
            bullet("b2"),
            numbered("n1"),
            numbered("n2"),
            bullet("b3"),
            para("p2"),
        ];

        let grouped = group_lists(Sibling::from_blocks(&blocks));

        assert_eq!(
            shape(&grouped),
            vec![
                "p1",
                "Bulleted[b1,b2]",
                "Numbered[n1,n2]",
                "Bulleted[b3]",
                "p2"
            ]
        );
    }

    #[test]
    fn test_single_item_becomes_group() {
        let blocks = vec![numbered("n")];
        let grouped = group_lists(Sibling::from_blocks(&blocks));
        assert_eq!(shape(&grouped), vec!["Numbered[n]"]);
    }

    #[test]
    fn test_non_list_blocks_pass_through() {
        let blocks = vec![para("a"), Block::new("d", BlockKind::Divider), para("b")];
        let grouped = group_lists(Sibling::from_blocks(&blocks));
        assert_eq!(shape(&grouped), vec!["a", "d", "b"]);
    }

    #[test]
    fn test_idempotent() {
        let blocks = vec![bullet("b1"), bullet("b2"), para("p"), numbered("n1")];

        let once = group_lists(Sibling::from_blocks(&blocks));
        let twice = group_lists(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_existing_group_not_extended() {
        let blocks = vec![bullet("b1"), bullet("b2")];
        let mut siblings = group_lists(Sibling::from_blocks(&blocks[..1]));
        siblings.push(Sibling::Block(&blocks[1]));

        let grouped = group_lists(siblings);

        assert_eq!(shape(&grouped), vec!["Bulleted[b1]", "Bulleted[b2]"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_lists(Vec::new()).is_empty());
    }
}
