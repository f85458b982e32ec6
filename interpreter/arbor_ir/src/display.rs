//! Tree introspection via plain accessors.
//!
//! Renders a node and its children from the public tagged variant, the
//! way a caller decomposing a tree by hand would. There is no generic
//! runtime walker; this module is the reference consumer of the
//! accessor surface.

use std::fmt::{self, Write};

use crate::{ExprArena, ExprKind, ExprId, StringInterner};

/// Format a tree rooted at `id` into a string.
///
/// Compound nodes are parenthesized: `(value > 1)`, `(result *= value--)`.
pub fn expr_to_string(arena: &ExprArena, interner: &StringInterner, id: ExprId) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_expr(&mut out, arena, interner, id);
    out
}

/// Write a tree rooted at `id` into `out`.
pub fn write_expr(
    out: &mut impl Write,
    arena: &ExprArena,
    interner: &StringInterner,
    id: ExprId,
) -> fmt::Result {
    match arena.get_expr(id) {
        ExprKind::Int(v) => write!(out, "{v}"),
        ExprKind::Bool(v) => write!(out, "{v}"),
        ExprKind::Ident(name) => write!(out, "{}", interner.lookup(name)),
        ExprKind::Compare { op, left, right } => {
            out.write_char('(')?;
            write_expr(out, arena, interner, left)?;
            write!(out, " {} ", op.as_symbol())?;
            write_expr(out, arena, interner, right)?;
            out.write_char(')')
        }
        ExprKind::Binary { op, left, right } => {
            out.write_char('(')?;
            write_expr(out, arena, interner, left)?;
            write!(out, " {} ", op.as_symbol())?;
            write_expr(out, arena, interner, right)?;
            out.write_char(')')
        }
        ExprKind::Assign { target, value } => {
            write!(out, "({} = ", interner.lookup(target))?;
            write_expr(out, arena, interner, value)?;
            out.write_char(')')
        }
        ExprKind::MulAssign { target, value } => {
            write!(out, "({} *= ", interner.lookup(target))?;
            write_expr(out, arena, interner, value)?;
            out.write_char(')')
        }
        ExprKind::PostDecrement(target) => {
            write!(out, "{}--", interner.lookup(target))
        }
        ExprKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            out.write_str("if ")?;
            write_expr(out, arena, interner, cond)?;
            out.write_str(" then ")?;
            write_expr(out, arena, interner, then_branch)?;
            out.write_str(" else ")?;
            write_expr(out, arena, interner, else_branch)
        }
        ExprKind::Loop { label, body } => {
            write!(out, "loop:{label} ")?;
            write_expr(out, arena, interner, body)
        }
        ExprKind::Break { label, value } => {
            write!(out, "break:{label} ")?;
            write_expr(out, arena, interner, value)
        }
        ExprKind::Block { decls, stmts } => {
            out.write_str("{ ")?;
            for decl in arena.get_decls(decls) {
                write!(out, "{} {}; ", decl.ty, interner.lookup(decl.name))?;
            }
            for (i, &stmt) in arena.get_expr_list(stmts).iter().enumerate() {
                if i > 0 {
                    out.write_str("; ")?;
                }
                write_expr(out, arena, interner, stmt)?;
            }
            out.write_str(" }")
        }
    }
}
