// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Explicit-stack traversals over ordered trees.
//!
//! Every walk over content and element trees goes through here, so tree depth is bounded by
//! heap memory rather than by the call stack.

use crate::model::ContentNode;
use crate::render::Element;

/// An ordered tree whose children are stored inline.
pub trait TreeNode: Sized {
    fn child_nodes(&self) -> &[Self];
}

impl TreeNode for ContentNode {
    fn child_nodes(&self) -> &[Self] {
        self.children()
    }
}

impl TreeNode for Element {
    fn child_nodes(&self) -> &[Self] {
        self.children()
    }
}

enum Step<'a, N> {
    Enter(&'a N),
    Exit(&'a N),
}

/// Folds a tree bottom-up: `combine` receives each node together with the folded values of its
/// children, in child order.
pub fn fold_post_order<N, T, F>(root: &N, mut combine: F) -> T
where
    N: TreeNode,
    F: FnMut(&N, Vec<T>) -> T,
{
    let mut steps = vec![Step::Enter(root)];
    let mut folded = Vec::<T>::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(node) => {
                steps.push(Step::Exit(node));
                steps.extend(node.child_nodes().iter().rev().map(Step::Enter));
            }
            Step::Exit(node) => {
                let arity = node.child_nodes().len();
                let children = folded.split_off(folded.len() - arity);
                folded.push(combine(node, children));
            }
        }
    }

    match folded.pop() {
        Some(value) if folded.is_empty() => value,
        _ => unreachable!("post-order fold leaves exactly the root value"),
    }
}

/// Visits every node in document order with its depth (the root has depth 0).
///
/// Node references live as long as the tree, so visitors may collect them.
pub fn walk_pre_order<'a, N, F>(root: &'a N, mut visit: F)
where
    N: TreeNode,
    F: FnMut(&'a N, usize),
{
    let mut pending = vec![(root, 0usize)];
    while let Some((node, depth)) = pending.pop() {
        visit(node, depth);
        pending.extend(node.child_nodes().iter().rev().map(|child| (child, depth + 1)));
    }
}
