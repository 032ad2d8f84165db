//! Tree-walking interpreter.
//!
//! `eval` dispatches on the node kind and threads one `&mut Environment`
//! through the whole walk. Failures travel as `Err(EvalError)` so `?`
//! short-circuits every composite node; only the public `evaluate` entry
//! folds them back into `Value::Error`.
//!
//! Every node checks its required child slots before doing any work, so
//! a malformed tree fails without touching the environment.
//!
//! - `mod.rs`: entry point, dispatch, statements and expressions
//! - `call.rs`: subroutine definition, calls and frame reconciliation
//! - `builder.rs`: `InterpreterBuilder`

mod builder;
mod call;

pub use builder::InterpreterBuilder;

use aqa_ir::{
    ConditionalStyle, ExprArena, ExprId, ExprKind, LoopStyle, Name, NodeKind, TRUE_LITERAL,
};
use aqa_stack::ensure_sufficient_stack;

use crate::environment::AssignError;
use crate::errors::{
    immutable_binding, malformed, missing_child, missing_root, non_boolean_condition,
    not_a_variable, parameters_evaluated, undefined_variable, unknown_instruction,
};
use crate::{
    evaluate_binary, evaluate_relation, evaluate_unary, Binding, Environment, EvalError,
    EvalResult, SharedPrintHandler, Value,
};

/// Default limit on nested subroutine frames.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// Tree-walking interpreter over one arena.
pub struct Interpreter<'a> {
    arena: &'a ExprArena,
    print_handler: SharedPrintHandler,
    max_call_depth: usize,
    call_depth: usize,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with default settings.
    pub fn new(arena: &'a ExprArena) -> Self {
        InterpreterBuilder::new(arena).build()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate the tree rooted at `root` against `env`.
    ///
    /// Always returns: a failure is reported as `Value::Error` together
    /// with the environment as it stood when the failing node gave up.
    #[tracing::instrument(level = "debug", skip_all, fields(root = root.raw()))]
    pub fn evaluate(&mut self, root: ExprId, mut env: Environment) -> (Value, Environment) {
        let value = if self.arena.get(root).is_some() {
            self.eval(root, &mut env)
        } else {
            Err(missing_root())
        };

        match value {
            Ok(value) => (value, env),
            Err(err) => {
                tracing::debug!(error = %err, span = ?err.span, "evaluation failed");
                (Value::Error(err), env)
            }
        }
    }

    /// Evaluate one node, growing the stack if needed.
    #[tracing::instrument(level = "trace", skip(self, env))]
    fn eval(&mut self, id: ExprId, env: &mut Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id, env)).map_err(|err| self.locate(err, id))
    }

    /// Record the node's span on errors that do not have one yet.
    fn locate(&self, err: EvalError, id: ExprId) -> EvalError {
        match self.arena.get(id) {
            Some(expr) => err.with_span(expr.span),
            None => err,
        }
    }

    /// A required child slot must point at a node in the arena.
    fn required(
        &self,
        id: ExprId,
        node: NodeKind,
        slot: &'static str,
    ) -> Result<ExprId, EvalError> {
        if self.arena.get(id).is_some() {
            Ok(id)
        } else {
            Err(missing_child(node, slot))
        }
    }

    fn eval_inner(&mut self, id: ExprId, env: &mut Environment) -> EvalResult {
        let arena = self.arena;
        let Some(kind) = arena.kind(id) else {
            return Err(missing_root());
        };

        match kind {
            ExprKind::Sequence { left, right } => {
                let left = self.required(*left, NodeKind::Sequence, "left statement")?;
                let right = self.required(*right, NodeKind::Sequence, "right statement")?;
                self.eval(left, env)?;
                self.eval(right, env)
            }
            ExprKind::Assignment {
                name,
                constant,
                value,
            } => self.eval_assignment(name, *constant, *value, env),
            ExprKind::Subroutine {
                name,
                params,
                body,
                ret,
            } => self.eval_subroutine_def(name, *params, *body, *ret, env),
            ExprKind::Call { name, args } => self.eval_call(name, *args, env),
            ExprKind::Conditional {
                style,
                cond,
                then_branch,
                else_branch,
            } => self.eval_conditional(*style, *cond, *then_branch, *else_branch, env),
            ExprKind::Loop { style, cond, body } => self.eval_loop(*style, *cond, *body, env),
            ExprKind::Relation { op, left, right } => {
                let left = self.required(*left, NodeKind::Relation, "left operand")?;
                let right = self.required(*right, NodeKind::Relation, "right operand")?;
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                evaluate_relation(left, right, *op)
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.required(*left, NodeKind::BinaryOperation, "left operand")?;
                let right = self.required(*right, NodeKind::BinaryOperation, "right operand")?;
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                evaluate_binary(left, right, *op)
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.required(*operand, NodeKind::UnaryOperation, "operand")?;
                let value = self.eval(operand, env)?;
                evaluate_unary(value, *op)
            }
            ExprKind::Output { value } => {
                let value = self.required(*value, NodeKind::Output, "value")?;
                let value = self.eval(value, env)?;
                self.print_handler.println(&value.to_string());
                Ok(value)
            }
            ExprKind::Arguments { left, right } => self.eval_arguments(*left, *right, env),
            ExprKind::Bracket { inner } => {
                let inner = self.required(*inner, NodeKind::Bracket, "inner expression")?;
                self.eval(inner, env)
            }
            ExprKind::Parameters { .. } => Err(parameters_evaluated()),
            ExprKind::Variable { name } => {
                if name.is_empty() {
                    return Err(malformed(NodeKind::Variable, "missing name"));
                }
                read_variable(env, name.as_str())
            }
            ExprKind::Number { significand } => parse_number(significand),
            ExprKind::Boolean { significand } => {
                if significand.is_empty() {
                    return Err(malformed(NodeKind::Boolean, "missing significand"));
                }
                Ok(Value::Boolean(&**significand == TRUE_LITERAL))
            }
            ExprKind::Unknown => Err(unknown_instruction()),
        }
    }

    fn eval_assignment(
        &mut self,
        name: &Name,
        constant: bool,
        value: ExprId,
        env: &mut Environment,
    ) -> EvalResult {
        if name.is_empty() {
            return Err(malformed(NodeKind::Assignment, "missing target name"));
        }
        let value = self.required(value, NodeKind::Assignment, "value")?;
        let value = self.eval(value, env)?;

        match env.assign(name, value, constant) {
            Ok(()) => Ok(Value::SENTINEL),
            Err(AssignError::Immutable) => Err(immutable_binding(name.as_str())),
            Err(AssignError::Subroutine) => Err(not_a_variable(name.as_str())),
        }
    }

    fn eval_conditional(
        &mut self,
        style: ConditionalStyle,
        cond: ExprId,
        then_branch: ExprId,
        else_branch: Option<ExprId>,
        env: &mut Environment,
    ) -> EvalResult {
        let cond = self.required(cond, NodeKind::Conditional, "condition")?;
        let then_branch = self.required(then_branch, NodeKind::Conditional, "THEN branch")?;
        let else_branch = match style {
            ConditionalStyle::IfThen => None,
            ConditionalStyle::IfThenElse => Some(self.required(
                else_branch.unwrap_or(ExprId::INVALID),
                NodeKind::Conditional,
                "ELSE branch",
            )?),
        };

        if self.eval_condition(cond, env)? {
            self.eval(then_branch, env)
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch, env)
        } else {
            Ok(Value::SENTINEL)
        }
    }

    /// `WHILE` tests before each pass; `REPEAT` runs the body first and
    /// stops once the condition becomes true. Both yield the value of the
    /// last body pass, or the sentinel if the body never ran.
    fn eval_loop(
        &mut self,
        style: LoopStyle,
        cond: ExprId,
        body: ExprId,
        env: &mut Environment,
    ) -> EvalResult {
        let cond = self.required(cond, NodeKind::Loop, "condition")?;
        let body = self.required(body, NodeKind::Loop, "body")?;

        let mut last = Value::SENTINEL;
        let mut iterations: u64 = 0;
        match style {
            LoopStyle::While => {
                while self.eval_condition(cond, env)? {
                    last = self.eval(body, env)?;
                    iterations += 1;
                }
            }
            LoopStyle::Repeat => loop {
                last = self.eval(body, env)?;
                iterations += 1;
                if self.eval_condition(cond, env)? {
                    break;
                }
            },
        }
        tracing::debug!(?style, iterations, "loop finished");
        Ok(last)
    }

    fn eval_condition(&mut self, cond: ExprId, env: &mut Environment) -> Result<bool, EvalError> {
        let value = self.eval(cond, env)?;
        value
            .as_bool()
            .ok_or_else(|| self.locate(non_boolean_condition(value.type_name()), cond))
    }

    /// Both sides see the same input environment and their effects are
    /// dropped. The value is the joined text of both sides.
    fn eval_arguments(&mut self, left: ExprId, right: ExprId, env: &Environment) -> EvalResult {
        let left = self.required(left, NodeKind::Arguments, "left argument")?;
        let right = self.required(right, NodeKind::Arguments, "right argument")?;
        let left = self.eval(left, &mut env.clone())?;
        let right = self.eval(right, &mut env.clone())?;
        Ok(Value::String(format!("{left}, {right}")))
    }
}

/// Current value of a variable.
fn read_variable(env: &Environment, name: &str) -> EvalResult {
    match env.get(name) {
        Some(Binding::Variable { value, .. }) => Ok(value.clone()),
        Some(Binding::Subroutine { .. }) => Err(not_a_variable(name)),
        None => Err(undefined_variable(name)),
    }
}

/// Parse a number literal. Empty, unparsable and non-finite text is a
/// malformed node, never a silent zero.
fn parse_number(significand: &str) -> EvalResult {
    if significand.is_empty() {
        return Err(malformed(NodeKind::Number, "missing significand"));
    }
    match significand.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Value::Number(n)),
        _ => Err(malformed(
            NodeKind::Number,
            format!("`{significand}` is not a number"),
        )),
    }
}
