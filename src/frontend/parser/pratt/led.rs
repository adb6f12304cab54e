//! Infix expression parsing (led - left denotation)

use crate::frontend::lexer::tokens::*;
use crate::frontend::parser::ast::*;
use crate::frontend::parser::pratt::precedence::Precedence;
use crate::frontend::parser::Parser;

impl<'a> Parser<'a> {
    /// `<left> <op> <right>`
    ///
    /// The right operand is parsed at the operator's own precedence, so
    /// operators of equal precedence associate to the left.
    pub(crate) fn parse_infix_expression(
        &mut self,
        left: Expression,
    ) -> Option<Expression> {
        let token = self.cur_token().clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();
        self.next_token();

        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    /// `<function>(<args>)`; the current token is `(`
    pub(crate) fn parse_call_expression(
        &mut self,
        function: Expression,
    ) -> Option<Expression> {
        let token = self.cur_token().clone();
        let arguments = self.parse_call_arguments()?;

        Some(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut args = Vec::new();

        // Empty argument list
        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(args);
        }

        self.next_token();
        args.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            args.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(args)
    }
}
