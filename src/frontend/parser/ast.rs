//! Abstract Syntax Tree types
//!
//! Statements and expressions are closed sum types. Every node keeps the
//! token it started at, reports that token's literal through [`Node`], and
//! renders back to source-like text through `Display`.

use crate::frontend::lexer::tokens::Token;
use std::fmt;

/// Capability shared by every AST node
pub trait Node: fmt::Display {
    /// Literal of the token the node was built from
    fn token_literal(&self) -> &str;
}

/// Root of a parsed source text
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl fmt::Display for Program {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

// ============================================================================
// Statements
// ============================================================================

/// Statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(s) => s.token_literal(),
            Statement::Return(s) => s.token_literal(),
            Statement::Expression(s) => s.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Statement::Let(s) => fmt::Display::fmt(s, f),
            Statement::Return(s) => fmt::Display::fmt(s, f),
            Statement::Expression(s) => fmt::Display::fmt(s, f),
        }
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    /// The `let` token
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for LetStatement {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} {} = {};", self.token_literal(), self.name, self.value)
    }
}

/// `return [<value>];`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// The `return` token
    pub token: Token,
    pub return_value: Option<Expression>,
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.return_value {
            Some(value) => write!(f, "{} {};", self.token_literal(), value),
            None => write!(f, "{};", self.token_literal()),
        }
    }
}

/// An expression used in statement position
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// First token of the expression
    pub token: Token,
    pub expression: Expression,
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for ExpressionStatement {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fmt::Display::fmt(&self.expression, f)
    }
}

/// `{ <statements> }`, the body of `if` branches and functions
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The `{` token
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl Node for BlockStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(Boolean),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(e) => e.token_literal(),
            Expression::Integer(e) => e.token_literal(),
            Expression::Boolean(e) => e.token_literal(),
            Expression::Prefix(e) => e.token_literal(),
            Expression::Infix(e) => e.token_literal(),
            Expression::If(e) => e.token_literal(),
            Expression::Function(e) => e.token_literal(),
            Expression::Call(e) => e.token_literal(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Expression::Identifier(e) => fmt::Display::fmt(e, f),
            Expression::Integer(e) => fmt::Display::fmt(e, f),
            Expression::Boolean(e) => fmt::Display::fmt(e, f),
            Expression::Prefix(e) => fmt::Display::fmt(e, f),
            Expression::Infix(e) => fmt::Display::fmt(e, f),
            Expression::If(e) => fmt::Display::fmt(e, f),
            Expression::Function(e) => fmt::Display::fmt(e, f),
            Expression::Call(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The `IDENT` token
    pub token: Token,
    pub value: String,
}

impl Identifier {
    /// Identifier whose value is the token's literal
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Identifier {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for IntegerLiteral {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.token.literal)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boolean {
    pub token: Token,
    pub value: bool,
}

impl Node for Boolean {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Boolean {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.token.literal)
    }
}

/// `<operator><right>`, e.g. `!ok` or `-5`
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    /// The operator token
    pub token: Token,
    pub operator: String,
    pub right: Box<Expression>,
}

impl Node for PrefixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for PrefixExpression {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// `<left> <operator> <right>`
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    /// The operator token
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

impl Node for InfixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for InfixExpression {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// `if (<condition>) { ... } [else { ... }]`
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    /// The `if` token
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl Node for IfExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for IfExpression {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alt) = &self.alternative {
            write!(f, "else {}", alt)?;
        }
        Ok(())
    }
}

/// `fn(<parameters>) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    /// The `fn` token
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl Node for FunctionLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let params: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        write!(
            f,
            "{}({}) {}",
            self.token_literal(),
            params.join(", "),
            self.body
        )
    }
}

/// `<function>(<arguments>)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    /// The `(` token
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl Node for CallExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for CallExpression {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let args: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", self.function, args.join(", "))
    }
}
