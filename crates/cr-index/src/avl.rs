//! AVL tree over an arena of slots.
//!
//! # Data layout
//!
//! Nodes live in a flat `Vec<Node>`; child links are `Option<u32>` slot
//! indices rather than owned boxes, so a rotation is three index relinks and
//! two height recomputations — no ownership juggling.  Slots freed by
//! removals go on a free list and are recycled by later insertions, keeping
//! the arena compact across a long interactive session.
//!
//! # Invariants
//!
//! At every node: all left-subtree ids < node id < all right-subtree ids,
//! `height = 1 + max(height(left), height(right))` with the empty subtree at
//! height 0, and after any insertion `|height(left) − height(right)| ≤ 1`.

use std::cmp::Ordering;

use cr_core::LocationId;

use crate::{IndexError, IndexResult};

#[derive(Debug)]
struct Node {
    id: LocationId,
    name: String,
    left: Option<u32>,
    right: Option<u32>,
    /// Cached subtree height; a leaf has height 1.
    height: u8,
}

/// Height-balanced index of `(LocationId, name)` pairs.
///
/// `insert` never fails (a live id gets its name overwritten in place);
/// `remove` reports [`IndexError::LocationNotFound`] for an absent id.
/// [`iter_sorted`](Self::iter_sorted) enumerates in strictly increasing id
/// order regardless of insertion order.
#[derive(Debug, Default)]
pub struct LocationIndex {
    nodes: Vec<Node>,
    root: Option<u32>,
    /// Recycled arena slots from earlier removals.
    free: Vec<u32>,
    len: usize,
}

impl LocationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live locations in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.get(id).is_some()
    }

    /// Name of the location with this id, if present.  Plain BST descent —
    /// no rebalancing, no side effects.
    pub fn get(&self, id: LocationId) -> Option<&str> {
        let mut cur = self.root;
        while let Some(s) = cur {
            let node = &self.nodes[s as usize];
            cur = match id.cmp(&node.id) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(&node.name),
            };
        }
        None
    }

    /// Insert `(id, name)`, rebalancing every ancestor on the path back to
    /// the root.  Re-inserting a live id overwrites its name in place with
    /// no structural change.
    pub fn insert(&mut self, id: LocationId, name: impl Into<String>) {
        let root = self.root;
        let new_root = self.insert_at(root, id, name.into());
        self.root = Some(new_root);
    }

    /// Remove the location with this id, rebalancing the path back to the
    /// root.  A two-child node is never detached: the in-order successor's
    /// id/name are spliced into its slot instead.
    pub fn remove(&mut self, id: LocationId) -> IndexResult<()> {
        let root = self.root;
        let (new_root, removed) = self.remove_at(root, id);
        self.root = new_root;
        if removed {
            Ok(())
        } else {
            Err(IndexError::LocationNotFound(id))
        }
    }

    /// In-order iterator over `(id, name)` pairs, strictly increasing by id.
    /// Restartable: each call walks the tree fresh with its own stack.
    pub fn iter_sorted(&self) -> SortedIter<'_> {
        let mut iter = SortedIter { index: self, stack: Vec::new() };
        iter.descend_left(self.root);
        iter
    }

    // ── Arena slots ───────────────────────────────────────────────────────

    fn alloc(&mut self, id: LocationId, name: String) -> u32 {
        self.len += 1;
        let node = Node { id, name, left: None, right: None, height: 1 };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot as usize] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                (self.nodes.len() - 1) as u32
            }
        }
    }

    fn release(&mut self, slot: u32) {
        self.len -= 1;
        // Drop the name's heap buffer now; the slot may sit on the free list
        // for a while.
        self.nodes[slot as usize].name = String::new();
        self.free.push(slot);
    }

    // ── Heights ───────────────────────────────────────────────────────────

    fn height_of(&self, slot: Option<u32>) -> i32 {
        slot.map_or(0, |s| i32::from(self.nodes[s as usize].height))
    }

    fn balance_of(&self, slot: u32) -> i32 {
        let (left, right) = self.children(slot);
        self.height_of(left) - self.height_of(right)
    }

    fn update_height(&mut self, slot: u32) {
        let (left, right) = self.children(slot);
        let h = 1 + self.height_of(left).max(self.height_of(right));
        self.nodes[slot as usize].height = h as u8;
    }

    fn children(&self, slot: u32) -> (Option<u32>, Option<u32>) {
        let node = &self.nodes[slot as usize];
        (node.left, node.right)
    }

    // ── Rotations ─────────────────────────────────────────────────────────

    /// Single right rotation: `l` (the left child of `s`) becomes the
    /// subtree root.  Three relinks; only the two reshaped nodes get their
    /// heights recomputed — every other cached height is still valid.
    fn rotate_right(&mut self, s: u32, l: u32) -> u32 {
        let inner = self.nodes[l as usize].right;
        self.nodes[l as usize].right = Some(s);
        self.nodes[s as usize].left = inner;
        self.update_height(s);
        self.update_height(l);
        l
    }

    /// Single left rotation: `r` (the right child of `s`) becomes the
    /// subtree root.
    fn rotate_left(&mut self, s: u32, r: u32) -> u32 {
        let inner = self.nodes[r as usize].left;
        self.nodes[r as usize].left = Some(s);
        self.nodes[s as usize].right = inner;
        self.update_height(s);
        self.update_height(r);
        r
    }

    /// Restore balance at `slot` after a structural change below it and
    /// return the subtree's new root.  `trigger` is the id that was inserted
    /// or removed; which child subtree it falls into selects between the
    /// single- and double-rotation cases (for removal the trigger is the
    /// removed id, not necessarily adjacent to the imbalance).
    fn rebalance(&mut self, slot: u32, trigger: LocationId) -> u32 {
        let balance = self.balance_of(slot);

        if balance > 1 {
            let l = self.nodes[slot as usize]
                .left
                .expect("left-heavy node has a left child");
            // Left-right case: the trigger sits in the left child's right
            // subtree.  A removal from the other side can select this with
            // an empty inner subtree; that degenerates to the single
            // rotation below.
            if trigger > self.nodes[l as usize].id {
                if let Some(inner) = self.nodes[l as usize].right {
                    let new_l = self.rotate_left(l, inner);
                    self.nodes[slot as usize].left = Some(new_l);
                    return self.rotate_right(slot, new_l);
                }
            }
            // Left-left case.
            return self.rotate_right(slot, l);
        }

        if balance < -1 {
            let r = self.nodes[slot as usize]
                .right
                .expect("right-heavy node has a right child");
            // Right-left case, mirrored.
            if trigger < self.nodes[r as usize].id {
                if let Some(inner) = self.nodes[r as usize].left {
                    let new_r = self.rotate_right(r, inner);
                    self.nodes[slot as usize].right = Some(new_r);
                    return self.rotate_left(slot, new_r);
                }
            }
            // Right-right case.
            return self.rotate_left(slot, r);
        }

        slot
    }

    // ── Recursive insert / remove ─────────────────────────────────────────

    fn insert_at(&mut self, slot: Option<u32>, id: LocationId, name: String) -> u32 {
        let Some(s) = slot else {
            return self.alloc(id, name);
        };
        match id.cmp(&self.nodes[s as usize].id) {
            Ordering::Less => {
                let left = self.nodes[s as usize].left;
                let new_left = self.insert_at(left, id, name);
                self.nodes[s as usize].left = Some(new_left);
            }
            Ordering::Greater => {
                let right = self.nodes[s as usize].right;
                let new_right = self.insert_at(right, id, name);
                self.nodes[s as usize].right = Some(new_right);
            }
            Ordering::Equal => {
                // Name update only — the tree shape is untouched.
                self.nodes[s as usize].name = name;
                return s;
            }
        }
        self.update_height(s);
        self.rebalance(s, id)
    }

    /// Returns the subtree's new root and whether `id` was found.
    fn remove_at(&mut self, slot: Option<u32>, id: LocationId) -> (Option<u32>, bool) {
        let Some(s) = slot else {
            return (None, false);
        };
        let removed;
        match id.cmp(&self.nodes[s as usize].id) {
            Ordering::Less => {
                let left = self.nodes[s as usize].left;
                let (new_left, found) = self.remove_at(left, id);
                self.nodes[s as usize].left = new_left;
                removed = found;
            }
            Ordering::Greater => {
                let right = self.nodes[s as usize].right;
                let (new_right, found) = self.remove_at(right, id);
                self.nodes[s as usize].right = new_right;
                removed = found;
            }
            Ordering::Equal => {
                let (left, right) = self.children(s);
                match (left, right) {
                    // At most one child: the slot is released and the child
                    // (if any) takes its place.
                    (None, child) | (child, None) => {
                        self.release(s);
                        return (child, true);
                    }
                    // Two children: splice the in-order successor (minimum
                    // of the right subtree) into this slot, then remove the
                    // successor's original position.
                    (Some(_), Some(right)) => {
                        let succ = self.min_slot(right);
                        let succ_id = self.nodes[succ as usize].id;
                        let succ_name = std::mem::take(&mut self.nodes[succ as usize].name);
                        self.nodes[s as usize].id = succ_id;
                        self.nodes[s as usize].name = succ_name;
                        let (new_right, _) = self.remove_at(Some(right), succ_id);
                        self.nodes[s as usize].right = new_right;
                        removed = true;
                    }
                }
            }
        }
        if !removed {
            return (Some(s), false);
        }
        self.update_height(s);
        (Some(self.rebalance(s, id)), true)
    }

    fn min_slot(&self, mut slot: u32) -> u32 {
        while let Some(left) = self.nodes[slot as usize].left {
            slot = left;
        }
        slot
    }
}

// ── Sorted iteration ──────────────────────────────────────────────────────────

/// In-order traversal of a [`LocationIndex`].
///
/// Holds an explicit stack of pending slots; the deepest unvisited
/// left-spine is pushed eagerly so `next()` is amortized O(1).
pub struct SortedIter<'a> {
    index: &'a LocationIndex,
    stack: Vec<u32>,
}

impl<'a> SortedIter<'a> {
    fn descend_left(&mut self, mut slot: Option<u32>) {
        while let Some(s) = slot {
            self.stack.push(s);
            slot = self.index.nodes[s as usize].left;
        }
    }
}

impl<'a> Iterator for SortedIter<'a> {
    type Item = (LocationId, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.stack.pop()?;
        let index: &'a LocationIndex = self.index;
        let node = &index.nodes[s as usize];
        self.descend_left(node.right);
        Some((node.id, node.name.as_str()))
    }
}

// ── Test-only structural audit ────────────────────────────────────────────────

#[cfg(test)]
impl LocationIndex {
    /// Walk the whole tree asserting BST ordering and cached-height
    /// correctness; with `require_balanced`, also |balance| ≤ 1 everywhere.
    pub(crate) fn audit(&self, require_balanced: bool) {
        self.audit_at(self.root, None, None, require_balanced);
    }

    fn audit_at(
        &self,
        slot: Option<u32>,
        lo: Option<LocationId>,
        hi: Option<LocationId>,
        require_balanced: bool,
    ) -> i32 {
        let Some(s) = slot else { return 0 };
        let node = &self.nodes[s as usize];
        if let Some(lo) = lo {
            assert!(node.id > lo, "BST order violated at id {}", node.id);
        }
        if let Some(hi) = hi {
            assert!(node.id < hi, "BST order violated at id {}", node.id);
        }
        let hl = self.audit_at(node.left, lo, Some(node.id), require_balanced);
        let hr = self.audit_at(node.right, Some(node.id), hi, require_balanced);
        assert_eq!(
            i32::from(node.height),
            1 + hl.max(hr),
            "stale cached height at id {}",
            node.id
        );
        if require_balanced {
            assert!((hl - hr).abs() <= 1, "AVL balance violated at id {}", node.id);
        }
        1 + hl.max(hr)
    }
}
