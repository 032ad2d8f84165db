//! Subroutine definition and call evaluation.
//!
//! A call copies the current value of each argument variable into the
//! formal parameters, runs the body directly on the caller's environment,
//! then removes the formals and restores any caller binding they masked.
//! Every other change the body makes stays visible to the caller.

use aqa_ir::{ExprId, ExprKind, Name, NodeKind};

use super::{read_variable, Interpreter};
use crate::errors::{arity_mismatch, call_depth_exceeded, malformed, not_a_subroutine};
use crate::{Binding, Environment, EvalError, EvalResult, Value};

impl Interpreter<'_> {
    pub(super) fn eval_subroutine_def(
        &mut self,
        name: &Name,
        params: Option<ExprId>,
        body: Option<ExprId>,
        ret: Option<ExprId>,
        env: &mut Environment,
    ) -> EvalResult {
        if name.is_empty() {
            return Err(malformed(NodeKind::Subroutine, "missing name"));
        }
        if let Some(body) = body {
            self.required(body, NodeKind::Subroutine, "body")?;
        }
        if let Some(ret) = ret {
            self.required(ret, NodeKind::Subroutine, "return expression")?;
        }
        let params = match params {
            Some(params) => self.flatten_names(params, NodeKind::Subroutine)?,
            None => Vec::new(),
        };

        tracing::debug!(%name, params = params.len(), "subroutine defined");
        env.define_subroutine(name.clone(), body, params, ret);
        Ok(Value::SENTINEL)
    }

    /// Evaluate a call.
    ///
    /// On failure inside the body the frame is still reconciled, so the
    /// caller keeps whatever the body committed before it failed.
    #[tracing::instrument(level = "debug", skip_all, fields(name = %name))]
    pub(super) fn eval_call(
        &mut self,
        name: &Name,
        args: Option<ExprId>,
        env: &mut Environment,
    ) -> EvalResult {
        if name.is_empty() {
            return Err(malformed(NodeKind::Call, "missing subroutine name"));
        }
        let (body, params, ret) = match env.get(name.as_str()) {
            Some(Binding::Subroutine { body, params, ret }) => (*body, params.clone(), *ret),
            _ => return Err(not_a_subroutine(name.as_str())),
        };

        let arg_names = match args {
            Some(args) => self.flatten_names(args, NodeKind::Call)?,
            None => Vec::new(),
        };
        let values = arg_names
            .iter()
            .map(|arg| read_variable(env, arg.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        if values.len() != params.len() {
            return Err(arity_mismatch(name.as_str(), params.len(), values.len()));
        }
        if self.call_depth >= self.max_call_depth {
            return Err(call_depth_exceeded(self.max_call_depth));
        }

        let caller = env.clone();
        for (param, value) in params.iter().zip(values) {
            env.define_variable(param.clone(), value, false);
        }

        self.call_depth += 1;
        let result = self.run_frame(body, ret, env);
        self.call_depth -= 1;

        env.restore_after_call(&caller, &params);
        result
    }

    /// Run the body, if any, then the return expression.
    fn run_frame(
        &mut self,
        body: Option<ExprId>,
        ret: Option<ExprId>,
        env: &mut Environment,
    ) -> EvalResult {
        if let Some(body) = body {
            let body = self.required(body, NodeKind::Subroutine, "body")?;
            self.eval(body, env)?;
        }
        match ret {
            Some(ret) => {
                let ret = self.required(ret, NodeKind::Subroutine, "return expression")?;
                self.eval(ret, env)
            }
            None => Ok(Value::Void),
        }
    }

    /// Names of a parameter chain or argument list, in order.
    ///
    /// `Variable` contributes its name, `Parameters` its name followed by
    /// the rest of the chain, `Arguments` its left side then its right.
    /// Anything else is malformed.
    fn flatten_names(&self, first: ExprId, owner: NodeKind) -> Result<Vec<Name>, EvalError> {
        let mut names = Vec::new();
        let mut pending = vec![first];

        while let Some(id) = pending.pop() {
            match self.arena.kind(id) {
                Some(ExprKind::Variable { name }) if !name.is_empty() => {
                    names.push(name.clone());
                }
                Some(ExprKind::Parameters { name, next }) if !name.is_empty() => {
                    names.push(name.clone());
                    pending.extend(*next);
                }
                Some(ExprKind::Arguments { left, right }) => {
                    pending.push(*right);
                    pending.push(*left);
                }
                _ => {
                    return Err(malformed(owner, "argument and parameter lists must be names"));
                }
            }
        }
        Ok(names)
    }
}
