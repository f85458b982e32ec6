//! Arena allocation for the flat AST.
//!
//! Contiguous storage for all nodes of one tree, with bulk deallocation.
//! The constructor methods in the second impl block are the public
//! building surface: trees are composed by API calls, not parsed.

use std::fmt;

use crate::{DeclRange, ExprId, ExprKind, ExprRange, Label, VarDecl};
use crate::{BinaryOp, CompareOp, Name};

/// Contiguous storage for all expressions in a tree.
///
/// Child references use `ExprId` indices; block statement lists use
/// `ExprRange` into `expr_lists`.
#[derive(Clone, Default)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<ExprKind>,

    /// Flattened statement lists for `Block`.
    expr_lists: Vec<ExprId>,

    /// Flattened variable declaration lists for `Block`.
    decls: Vec<VarDecl>,

    /// Next loop label to hand out.
    next_label: u32,
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Expression allocation =====

    /// Allocate an expression, return its ID.
    #[inline]
    pub fn alloc_expr(&mut self, kind: ExprKind) -> ExprId {
        let id = ExprId::new(u32::try_from(self.exprs.len()).unwrap_or(u32::MAX));
        debug_assert!(id.is_valid(), "arena exhausted");
        self.exprs.push(kind);
        id
    }

    /// Get an expression by ID.
    ///
    /// Variants are `Copy`; returning by value keeps the arena borrow
    /// short during recursive evaluation.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> ExprKind {
        self.exprs[id.index()]
    }

    /// Get number of expressions.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // ===== Statement list allocation =====

    /// Allocate a statement list, return its range.
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = u32::try_from(self.expr_lists.len()).unwrap_or(u32::MAX);
        self.expr_lists.extend(exprs);
        let len = (u32::try_from(self.expr_lists.len()).unwrap_or(u32::MAX) - start) as u16;
        ExprRange::new(start, len)
    }

    /// Get a statement list by range.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        let end = start + range.len();
        &self.expr_lists[start..end]
    }

    // ===== Declaration allocation =====

    /// Allocate a declaration list, return its range.
    pub fn alloc_decls(&mut self, decls: impl IntoIterator<Item = VarDecl>) -> DeclRange {
        let start = u32::try_from(self.decls.len()).unwrap_or(u32::MAX);
        self.decls.extend(decls);
        let len = (u32::try_from(self.decls.len()).unwrap_or(u32::MAX) - start) as u16;
        DeclRange::new(start, len)
    }

    /// Get declarations by range.
    #[inline]
    pub fn get_decls(&self, range: DeclRange) -> &[VarDecl] {
        let start = range.start as usize;
        let end = start + range.len();
        &self.decls[start..end]
    }

    // ===== Labels =====

    /// Allocate a fresh loop label, unique within this arena.
    pub fn fresh_label(&mut self) -> Label {
        let label = Label::from_raw(self.next_label);
        self.next_label += 1;
        label
    }

    // ===== Utility =====

    /// Reset the arena for reuse (keeps capacity).
    pub fn reset(&mut self) {
        self.exprs.clear();
        self.expr_lists.clear();
        self.decls.clear();
        self.next_label = 0;
    }

    /// Check if the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

/// Constructor methods.
///
/// Each allocates one node and returns its id, so trees read bottom-up:
///
/// ```
/// use arbor_ir::{ExprArena, CompareOp, StringInterner};
///
/// let mut interner = StringInterner::new();
/// let mut arena = ExprArena::new();
/// let value = interner.intern("value");
/// let v = arena.ident(value);
/// let one = arena.int(1);
/// let cond = arena.compare(CompareOp::Gt, v, one);
/// assert_eq!(arbor_ir::display::expr_to_string(&arena, &interner, cond), "(value > 1)");
/// ```
impl ExprArena {
    /// Integer constant.
    pub fn int(&mut self, value: i64) -> ExprId {
        self.alloc_expr(ExprKind::Int(value))
    }

    /// Boolean constant.
    pub fn bool_(&mut self, value: bool) -> ExprId {
        self.alloc_expr(ExprKind::Bool(value))
    }

    /// Variable reference.
    pub fn ident(&mut self, name: Name) -> ExprId {
        self.alloc_expr(ExprKind::Ident(name))
    }

    /// Comparison.
    pub fn compare(&mut self, op: CompareOp, left: ExprId, right: ExprId) -> ExprId {
        self.alloc_expr(ExprKind::Compare { op, left, right })
    }

    /// Integer arithmetic.
    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.alloc_expr(ExprKind::Binary { op, left, right })
    }

    /// Assignment.
    pub fn assign(&mut self, target: Name, value: ExprId) -> ExprId {
        self.alloc_expr(ExprKind::Assign { target, value })
    }

    /// Compound multiply-assignment.
    pub fn mul_assign(&mut self, target: Name, value: ExprId) -> ExprId {
        self.alloc_expr(ExprKind::MulAssign { target, value })
    }

    /// Post-decrement.
    pub fn post_decrement(&mut self, target: Name) -> ExprId {
        self.alloc_expr(ExprKind::PostDecrement(target))
    }

    /// Conditional with both branches.
    pub fn if_else(&mut self, cond: ExprId, then_branch: ExprId, else_branch: ExprId) -> ExprId {
        self.alloc_expr(ExprKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    /// Labeled loop.
    pub fn loop_(&mut self, label: Label, body: ExprId) -> ExprId {
        self.alloc_expr(ExprKind::Loop { label, body })
    }

    /// Break with a value.
    pub fn break_(&mut self, label: Label, value: ExprId) -> ExprId {
        self.alloc_expr(ExprKind::Break { label, value })
    }

    /// Block with declared variables and ordered statements.
    pub fn block(
        &mut self,
        decls: impl IntoIterator<Item = VarDecl>,
        stmts: impl IntoIterator<Item = ExprId>,
    ) -> ExprId {
        let decls = self.alloc_decls(decls);
        let stmts = self.alloc_expr_list(stmts);
        self.alloc_expr(ExprKind::Block { decls, stmts })
    }
}

impl fmt::Debug for ExprArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExprArena {{ {} exprs, {} lists, {} decls, {} labels }}",
            self.exprs.len(),
            self.expr_lists.len(),
            self.decls.len(),
            self.next_label
        )
    }
}
