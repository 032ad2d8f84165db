//! Operator and style tags carried as node properties.

/// Binary arithmetic and logical operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Logical
    And,
    Or,

    /// Yields the left operand unchanged.
    Nop,
}

impl BinaryOp {
    /// Source-level spelling, used in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Nop => "NOP",
        }
    }

    /// Tag used by the tree renderer.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Nop => "NOP",
        }
    }

    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }

    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Numeric identity (`+x`).
    Add,
    /// Numeric negation (`-x`).
    Sub,
    /// Boolean negation (`NOT x`).
    Not,
    /// Identity for either numbers or booleans.
    Nop,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Not => "NOT",
            Self::Nop => "NOP",
        }
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Not => "NOT",
            Self::Nop => "NOP",
        }
    }
}

/// Relational operators; both operands must be numbers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RelOp {
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl RelOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
        }
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Eq => "EQ",
            Self::NotEq => "NEQ",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::LtEq => "LEQ",
            Self::GtEq => "GEQ",
        }
    }
}

/// The two loop flavours sharing one node shape.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LoopStyle {
    /// Test first, run the body while the condition holds.
    While,
    /// Run the body first, stop once the condition holds.
    Repeat,
}

/// One-branch or two-branch conditional.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConditionalStyle {
    IfThen,
    IfThenElse,
}
