//! Per-equation generation state.

use std::borrow::Cow;

/// Upper bound for the size bias; at 100 the grammar is maximally simple.
pub const MAX_BIAS: u32 = 100;

/// Depth past which expansion is forced down to leaf rules.
///
/// The bias ratchet makes deep recursion vanishingly unlikely but puts no
/// hard bound on it; the ceiling turns "almost surely terminates" into
/// "terminates".
pub const MAX_DEPTH: u32 = 64;

/// State threaded through recursive rule expansion.
///
/// Contexts are copied on scope entry, never shared. A rule that opens a
/// scope derives its own copy with [`Context::descend`] or
/// [`Context::detached`] and extends only that copy, so variable bindings
/// made inside a function or limit are invisible to the caller once the
/// rule returns.
#[derive(Debug, Clone, Default)]
pub struct Context {
    make_smaller: u32,
    depth: u32,
    variables: Vec<Cow<'static, str>>,
}

impl Context {
    /// Fresh state for the start of one equation.
    pub fn root() -> Self {
        Self::default()
    }

    /// Current size bias (0 to [`MAX_BIAS`], higher = simpler output).
    pub fn make_smaller(&self) -> u32 {
        self.make_smaller
    }

    /// Variable tokens bound so far in this scope, in binding order.
    pub fn variables(&self) -> &[Cow<'static, str>] {
        &self.variables
    }

    /// Whether expansion must now be forced toward leaf rules.
    pub fn over_depth(&self) -> bool {
        self.depth >= MAX_DEPTH
    }

    /// Copy for a child expansion.
    ///
    /// `floor` can only raise the bias, never lower it, so the bias is
    /// monotonically non-decreasing along any root-to-leaf path. The depth
    /// counter advances by one.
    pub fn descend(&self, floor: u32) -> Self {
        Context {
            make_smaller: self.make_smaller.max(floor).min(MAX_BIAS),
            depth: self.depth + 1,
            variables: self.variables.clone(),
        }
    }

    /// Like [`Context::descend`] but with an empty variable scope.
    ///
    /// Subscript and superscript bodies start their own equation-like world
    /// and must not see (or reuse) the enclosing equation's variables.
    pub fn detached(&self, floor: u32) -> Self {
        Context {
            variables: Vec::new(),
            ..self.descend(floor)
        }
    }

    /// Bind a variable token in this scope.
    pub fn bind(&mut self, token: Cow<'static, str>) {
        self.variables.push(token);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn descend_never_lowers_the_bias() {
        let ctx = Context::root().descend(50);
        assert_eq!(ctx.descend(10).make_smaller(), 50);
        assert_eq!(ctx.descend(80).make_smaller(), 80);
    }

    #[test]
    fn bias_is_clamped_to_the_maximum() {
        let ctx = Context::root().descend(MAX_BIAS);
        assert_eq!(ctx.descend(MAX_BIAS).make_smaller(), MAX_BIAS);
    }

    #[test]
    fn detached_starts_with_an_empty_scope() {
        let mut ctx = Context::root();
        ctx.bind("x".into());
        let inner = ctx.detached(MAX_BIAS);
        assert!(inner.variables().is_empty());
        assert_eq!(ctx.variables().len(), 1);
    }

    #[test]
    fn bindings_do_not_leak_to_the_parent() {
        let parent = Context::root();
        let mut child = parent.descend(0);
        child.bind("y".into());
        assert!(parent.variables().is_empty());
        assert_eq!(child.variables(), ["y"]);
    }

    #[test]
    fn depth_ceiling_trips_after_enough_descents() {
        let mut ctx = Context::root();
        for _ in 0..MAX_DEPTH {
            assert!(!ctx.over_depth());
            ctx = ctx.descend(0);
        }
        assert!(ctx.over_depth());
    }
}
