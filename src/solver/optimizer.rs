//! Local peephole rewrite of a recorded move list.
//!
//! Two rules are applied until neither fires:
//! - a move directly followed by its inverse on the same target cancels out;
//! - three identical moves in a row become their inverse.
//!
//! Both preserve the cube state reached at the end of the list. The rules are
//! checked on the top of a stack after each push or rewrite, so a
//! cancellation that exposes a new pair or triple is caught immediately.

use log::debug;

use crate::moves::DefinedMove;

/// Returns the rewritten list. Never longer than `moves`.
pub fn optimize(moves: &[DefinedMove]) -> Vec<DefinedMove> {
    let mut optimized: Vec<DefinedMove> = Vec::with_capacity(moves.len());

    for &mv in moves {
        optimized.push(mv);
        while rewrite_top(&mut optimized) {}
    }

    debug!("optimized {} moves down to {}", moves.len(), optimized.len());
    optimized
}

/// Applies one rule to the end of the stack. Returns false when none applies.
fn rewrite_top(stack: &mut Vec<DefinedMove>) -> bool {
    let len = stack.len();

    if len >= 2 && stack[len - 2].is_undone_by(stack[len - 1]) {
        stack.truncate(len - 2);
        return true;
    }

    if len >= 3 && stack[len - 3] == stack[len - 1] && stack[len - 2] == stack[len - 1] {
        // double moves have no inverse and stay as they are
        if let Some(inverse) = stack[len - 1].inverse() {
            stack.truncate(len - 3);
            stack.push(inverse);
            return true;
        }
    }

    false
}
