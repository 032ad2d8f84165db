//! Stack growth for the recursive stages of the interpreter.
//!
//! The parser descends once per nested expression and the evaluator once
//! per tree node and per subroutine frame. Wrapping those recursive entry
//! points in [`ensure_sufficient_stack`] lets deeply nested programs run
//! on a growable stack instead of aborting the process.
//!
//! - **Native targets**: `stacker` allocates a fresh segment when less than
//!   the red zone remains.
//! - **WASM targets**: plain passthrough.
//!
//! ```text
//! fn eval(&mut self, id: ExprId, env: &mut Environment) -> EvalResult {
//!     ensure_sufficient_stack(|| self.eval_inner(id, env))
//! }
//! ```

/// Remaining stack below which a new segment is allocated (100KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
