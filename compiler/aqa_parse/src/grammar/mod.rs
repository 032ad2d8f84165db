//! Grammar productions.
//!
//! Each module extends `Parser` with methods for a group of productions:
//!
//! - `stmt`: program, blocks and statements
//! - `expr`: the expression precedence chain and calls

mod expr;
mod stmt;
