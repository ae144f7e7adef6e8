use crate::foundation::error::{AnimdlError, AnimdlResult};
use crate::foundation::math::{DMat4, compose_into, identity};

/// Stack of nested coordinate frames.
///
/// Never holds fewer than one element; the bottom element is the base (identity) frame. Each level
/// is stored by value, so `push` yields independent storage for the new top.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformStack {
    levels: Vec<DMat4>,
}

impl TransformStack {
    /// Stack holding only the identity transform.
    pub fn new() -> Self {
        Self {
            levels: vec![identity()],
        }
    }

    /// Composition of every transform active at this point of the replay.
    pub fn top(&self) -> &DMat4 {
        // Non-empty by construction.
        &self.levels[self.levels.len() - 1]
    }

    /// Number of levels, base included.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Duplicate the top level.
    pub fn push(&mut self) {
        let copy = *self.top();
        self.levels.push(copy);
    }

    /// Discard the top level; fails when only the base level remains.
    pub fn pop(&mut self) -> AnimdlResult<()> {
        if self.levels.len() <= 1 {
            return Err(AnimdlError::StackUnderflow);
        }
        self.levels.pop();
        Ok(())
    }

    /// Compose `elementary` into the top level without changing depth.
    pub fn apply(&mut self, elementary: &DMat4) {
        let last = self.levels.len() - 1;
        compose_into(&mut self.levels[last], elementary);
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/stack.rs"]
mod tests;
