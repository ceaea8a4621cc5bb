//! The random-formula grammar.
//!
//! A four-level hierarchy (expression, term, factor, leaf tokens) where each
//! weighted rule goes through [`pick`] with exact rational weights and the
//! winner is dispatched over the [`Rule`] enum. Weights are parameterized by
//! the context's size bias `m`: higher bias shifts probability toward the
//! simple alternatives, and every recursive call raises (never lowers) the
//! bias of the child context, which is what makes expansion terminate.
//!
//! All randomness comes from the generator-owned source; nothing here reads
//! global state.

use std::borrow::Cow;

use rand::Rng;

use crate::context::Context;
use crate::error::GrammarError;
use crate::node::ExpansionNode;
use crate::weights::{chance, pick, w};

/// Function-name tokens, each carrying its opening parenthesis.
const FUNCTION_NAMES: [&str; 8] = ["f(", "g(", "h(", "sin(", "cos(", "tan(", "log(", "ln("];

/// Vocabulary for newly minted variables.
pub const VARIABLE_NAMES: [&str; 5] = ["x", "y", "a", "b", "{\\theta}"];

/// Brace-wrapped Greek letter macros.
pub const GREEK_LETTERS: [&str; 14] = [
    "{\\pi}",
    "{\\sigma}",
    "{\\Sigma}",
    "{\\phi}",
    "{\\lambda}",
    "{\\psi}",
    "{\\theta}",
    "{\\gamma}",
    "{\\mu}",
    "{\\Omega}",
    "{\\alpha}",
    "{\\beta}",
    "{\\Gamma}",
    "{\\epsilon}",
];

const INFINITY: [&str; 2] = ["\\infty", "-\\infty"];

/// Identifiers for the grammar productions a weighted table can select.
///
/// Tagged dispatch over this enum replaces the original design's lookup of
/// rule methods by name at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Term,
    AddOrSubtract,
    Limit,
    Function,
    Multiply,
    Factor,
    Fraction,
    Number,
    Greek,
    Variable,
    Infinity,
}

/// Expands grammar rules against an owned random source.
pub struct Grammar<R: Rng> {
    rng: R,
}

impl<R: Rng> Grammar<R> {
    pub fn new(rng: R) -> Self {
        Grammar { rng }
    }

    fn expand(&mut self, rule: Rule, ctx: &Context) -> Result<ExpansionNode, GrammarError> {
        match rule {
            Rule::Term => self.term(ctx),
            Rule::AddOrSubtract => self.add_or_subtract(ctx),
            Rule::Limit => self.limit(ctx),
            Rule::Function => self.function(ctx),
            Rule::Multiply => self.multiply(ctx),
            Rule::Factor => self.factor(ctx),
            Rule::Fraction => self.fraction(ctx),
            Rule::Number => Ok(self.number()),
            Rule::Greek => Ok(self.greek()),
            Rule::Variable => Ok(self.variable(ctx).into()),
            Rule::Infinity => Ok(self.infinity()),
        }
    }

    /// Top-level production for one (sub)expression.
    pub fn expression(&mut self, ctx: &Context) -> Result<ExpansionNode, GrammarError> {
        if ctx.over_depth() {
            return self.term(ctx);
        }
        let m = u64::from(ctx.make_smaller());
        let rule = pick(
            &mut self.rng,
            "expression",
            &[
                (Rule::Term, w(300 + 2 * m, 1000)),
                (Rule::AddOrSubtract, w(550 - m, 1000)),
                (Rule::Limit, w(100 - m, 1000)),
                (Rule::Function, w(50, 1000)),
            ],
        )?;
        self.expand(rule, ctx)
    }

    fn term(&mut self, ctx: &Context) -> Result<ExpansionNode, GrammarError> {
        if ctx.over_depth() {
            return self.factor(ctx);
        }
        let m = u64::from(ctx.make_smaller());
        let rule = pick(
            &mut self.rng,
            "term",
            &[
                (Rule::Multiply, w(250, 1000)),
                (Rule::Factor, w(650 + m, 1000)),
                (Rule::Fraction, w(100 - m, 1000)),
            ],
        )?;
        self.expand(rule, ctx)
    }

    fn add_or_subtract(&mut self, ctx: &Context) -> Result<ExpansionNode, GrammarError> {
        let left = self.expression(&ctx.descend(50))?;
        let operator = if chance(&mut self.rng, w(1, 2)) {
            " + "
        } else {
            " - "
        };
        let right = self.term(&ctx.descend(10))?;
        Ok(ExpansionNode::Seq(vec![left, operator.into(), right]))
    }

    /// `name(v, w) = body`, with its own variable scope.
    ///
    /// Bound parameter names extend only the function's copied scope; the
    /// caller's context is untouched once this returns.
    fn function(&mut self, ctx: &Context) -> Result<ExpansionNode, GrammarError> {
        let mut scope = ctx.descend(50);
        let mut parts = vec![ExpansionNode::from(self.uniform(&FUNCTION_NAMES))];

        for _ in 0..self.rng.random_range(0..=2u32) {
            let variable = self.variable(&scope);
            scope.bind(variable.clone());
            parts.push(variable.into());
            parts.push(", ".into());
        }
        let variable = self.variable(&scope);
        scope.bind(variable.clone());
        parts.push(variable.into());
        parts.push(") = ".into());

        parts.push(self.expression(&scope)?);
        Ok(ExpansionNode::Seq(parts))
    }

    fn limit(&mut self, ctx: &Context) -> Result<ExpansionNode, GrammarError> {
        let mut scope = ctx.descend(25);
        let variable = self.variable(&scope);
        scope.bind(variable.clone());

        let target = pick(
            &mut self.rng,
            "limit target",
            &[(Rule::Number, w(1, 3)), (Rule::Infinity, w(2, 3))],
        )?;
        let target = self.expand(target, &scope)?;

        Ok(ExpansionNode::Seq(vec![
            "\\lim_{".into(),
            variable.into(),
            " \\to ".into(),
            target,
            "}".into(),
            self.expression(&scope)?,
        ]))
    }

    fn infinity(&mut self) -> ExpansionNode {
        self.uniform(&INFINITY).into()
    }

    fn multiply(&mut self, ctx: &Context) -> Result<ExpansionNode, GrammarError> {
        // Juxtaposition: no operator token between the two halves.
        Ok(ExpansionNode::Seq(vec![
            self.term(&ctx.descend(10))?,
            self.factor(&ctx.descend(0))?,
        ]))
    }

    fn factor(&mut self, ctx: &Context) -> Result<ExpansionNode, GrammarError> {
        let rule = pick(
            &mut self.rng,
            "factor",
            &[
                (Rule::Number, w(5, 10)),
                (Rule::Greek, w(3, 10)),
                (Rule::Variable, w(2, 10)),
            ],
        )?;
        let atom = self.expand(rule, ctx)?;

        // Decoration gets rarer as the bias climbs: 1-in-5 at bias 0, gone
        // entirely at bias 100.
        let m = u64::from(ctx.make_smaller());
        if !ctx.over_depth() && chance(&mut self.rng, w(100 - m, 500)) {
            return Ok(ExpansionNode::Seq(vec![atom, self.sub_or_sup(ctx)?]));
        }
        Ok(atom)
    }

    fn sub_or_sup(&mut self, ctx: &Context) -> Result<ExpansionNode, GrammarError> {
        let marker = if chance(&mut self.rng, w(1, 2)) { "_" } else { "^" };
        Ok(ExpansionNode::Seq(vec![
            marker.into(),
            "{".into(),
            self.expression(&ctx.detached(100))?,
            "}".into(),
        ]))
    }

    /// Choose a variable token: mint a fresh name when the scope is empty,
    /// or with 1-in-3 probability even when it is not; otherwise reuse a
    /// bound one uniformly. Binding the token is the caller's job.
    fn variable(&mut self, ctx: &Context) -> Cow<'static, str> {
        let bound = ctx.variables();
        if bound.is_empty() || chance(&mut self.rng, w(1, 3)) {
            Cow::Borrowed(self.uniform(&VARIABLE_NAMES))
        } else {
            bound[self.rng.random_range(0..bound.len())].clone()
        }
    }

    fn greek(&mut self) -> ExpansionNode {
        self.uniform(&GREEK_LETTERS).into()
    }

    fn fraction(&mut self, ctx: &Context) -> Result<ExpansionNode, GrammarError> {
        let inner = ctx.descend(100);
        Ok(ExpansionNode::Seq(vec![
            "\\frac{".into(),
            self.expression(&inner)?,
            "}{".into(),
            self.expression(&inner)?,
            "}".into(),
        ]))
    }

    /// A 1-4 digit number with a nonzero leading digit.
    fn number(&mut self) -> ExpansionNode {
        let mut digits = String::new();
        digits.push(char::from(b'0' + self.rng.random_range(1..=9u8)));
        for _ in 0..self.rng.random_range(0..=3u32) {
            digits.push(char::from(b'0' + self.rng.random_range(0..=7u8)));
        }
        digits.into()
    }

    fn uniform(&mut self, options: &[&'static str]) -> &'static str {
        options[self.rng.random_range(0..options.len())]
    }
}
