use crate::{
    error::CompilerError,
    lexer::Lexer,
    pos::WithTokenMetadata,
    productions,
    token::{Token, TokenKind},
    tree::Node,
};

/// Deepest nesting of blocks, groupings and unary signs accepted before parsing gives up.
pub const MAX_NESTING: usize = 200;

static STATEMENT_START: [TokenKind; 8] = [
    TokenKind::To,
    TokenKind::Identifier,
    TokenKind::If,
    TokenKind::While,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::LeftParen,
    TokenKind::Number,
];
static ARG_START: [TokenKind; 2] = [TokenKind::Colon, TokenKind::Number];
static ADDITIVE_TOKENS: [TokenKind; 2] = [TokenKind::Plus, TokenKind::Minus];
static MULTIPLICATIVE_TOKENS: [TokenKind; 2] = [TokenKind::Times, TokenKind::Divide];

fn unexpected(token: &WithTokenMetadata<Token>) -> CompilerError {
    CompilerError::SyntaxError {
        token: token.value.to_string(),
        line: token.pos.line,
    }
}

/// Recursive-descent parser pulling one token of lookahead from the lexer on demand.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    lookahead: Option<WithTokenMetadata<Token>>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Parser<'a> {
        Parser {
            lexer,
            lookahead: None,
            depth: 0,
        }
    }

    pub fn parse(&mut self) -> Result<Node, CompilerError> {
        let program = self.parse_statements(productions::program())?;

        if self.check(TokenKind::Eof)? {
            Ok(program)
        } else {
            Err(unexpected(&self.next()?))
        }
    }

    /// Reads the next token from the lexer, synthesizing `Eof` once it runs dry.
    fn pull(&mut self) -> Result<WithTokenMetadata<Token>, CompilerError> {
        Ok(match self.lexer.next().transpose()? {
            Some(t) => t,
            None => WithTokenMetadata::at_line(Token::Eof, self.lexer.line()),
        })
    }

    fn peek(&mut self) -> Result<&WithTokenMetadata<Token>, CompilerError> {
        let token = match self.lookahead.take() {
            Some(t) => t,
            None => self.pull()?,
        };

        let token: &WithTokenMetadata<Token> = self.lookahead.insert(token);
        Ok(token)
    }

    fn next(&mut self) -> Result<WithTokenMetadata<Token>, CompilerError> {
        match self.lookahead.take() {
            Some(t) => Ok(t),
            None => self.pull(),
        }
    }

    fn check(&mut self, t: TokenKind) -> Result<bool, CompilerError> {
        Ok(TokenKind::from(self.peek()?) == t)
    }

    fn matches_any(&mut self, ts: &[TokenKind]) -> Result<bool, CompilerError> {
        let kind = TokenKind::from(self.peek()?);

        Ok(ts.contains(&kind))
    }

    fn consume(&mut self, t: TokenKind) -> Result<WithTokenMetadata<Token>, CompilerError> {
        let token = self.next()?;

        if TokenKind::from(&token) == t {
            Ok(token)
        } else {
            Err(unexpected(&token))
        }
    }

    /// Runs `f` one nesting level deeper, failing instead of recursing past `MAX_NESTING`.
    fn nested<F>(&mut self, line: usize, f: F) -> Result<Node, CompilerError>
    where
        F: FnOnce(&mut Self) -> Result<Node, CompilerError>,
    {
        if self.depth >= MAX_NESTING {
            return Err(CompilerError::NestingTooDeep { line });
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;

        result
    }

    fn parse_statements(&mut self, list: Node) -> Result<Node, CompilerError> {
        let line = self.peek()?.pos.line;

        self.nested(line, |this| {
            let mut list = list;
            while this.matches_any(&STATEMENT_START)? {
                list.append(this.parse_statement()?)?;
            }

            Ok(list)
        })
    }

    fn parse_statement(&mut self) -> Result<Node, CompilerError> {
        let inner = match TokenKind::from(self.peek()?) {
            TokenKind::To => self.parse_decl_fn(),
            TokenKind::Identifier => self.parse_call_function(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            _ => self.parse_expression(),
        }?;

        Ok(productions::statement(inner))
    }

    fn parse_decl_fn(&mut self) -> Result<Node, CompilerError> {
        self.consume(TokenKind::To)?;
        let name = self.consume(TokenKind::Identifier)?;
        let args = self.parse_args_list()?;
        let body = self.parse_statements(productions::statements())?;
        self.consume(TokenKind::End)?;

        Ok(productions::decl_fn(&name.value, args, body))
    }

    fn parse_args_list(&mut self) -> Result<Node, CompilerError> {
        let mut list = productions::args_list();

        while self.matches_any(&ARG_START)? {
            list.append(self.parse_arg()?)?;
        }

        Ok(list)
    }

    fn parse_arg(&mut self) -> Result<Node, CompilerError> {
        let token = self.next()?;

        match &token.value {
            Token::Colon => {
                let name = self.consume(TokenKind::Identifier)?;
                Ok(productions::arg_identifier(&name.value))
            }
            Token::Number(n) => Ok(productions::arg_number(n.clone())),
            _ => Err(unexpected(&token)),
        }
    }

    fn parse_call_function(&mut self) -> Result<Node, CompilerError> {
        let name = self.consume(TokenKind::Identifier)?;
        let args = self.parse_args_list()?;

        Ok(productions::call_function(&name.value, args))
    }

    fn parse_if(&mut self) -> Result<Node, CompilerError> {
        self.consume(TokenKind::If)?;
        let cond = self.consume(TokenKind::Identifier)?;
        self.consume(TokenKind::Then)?;
        let body = self.parse_statements(productions::statements())?;

        let next = self.next()?;

        match next.value {
            Token::End => Ok(productions::if_then(&cond.value, body)),
            Token::Else => {
                let alternative = self.parse_statements(productions::statements())?;
                self.consume(TokenKind::End)?;

                Ok(productions::if_then_else(&cond.value, body, alternative))
            }
            _ => Err(unexpected(&next)),
        }
    }

    fn parse_while(&mut self) -> Result<Node, CompilerError> {
        self.consume(TokenKind::While)?;
        let cond = self.consume(TokenKind::Identifier)?;
        let body = self.parse_statements(productions::statements())?;
        self.consume(TokenKind::End)?;

        Ok(productions::while_loop(&cond.value, body))
    }

    fn parse_expression(&mut self) -> Result<Node, CompilerError> {
        let mut expr = self.parse_term()?;

        while self.matches_any(&ADDITIVE_TOKENS)? {
            let operator = self.next()?;
            let right = self.parse_term()?;
            expr = productions::binary(expr, &operator.value, right);
        }

        Ok(expr)
    }

    fn parse_term(&mut self) -> Result<Node, CompilerError> {
        let mut expr = self.parse_factor()?;

        while self.matches_any(&MULTIPLICATIVE_TOKENS)? {
            let operator = self.next()?;
            let right = self.parse_factor()?;
            expr = productions::binary(expr, &operator.value, right);
        }

        Ok(expr)
    }

    fn parse_factor(&mut self) -> Result<Node, CompilerError> {
        let token = self.next()?;

        match &token.value {
            Token::Plus | Token::Minus => self.nested(token.pos.line, |this| {
                let operand = this.parse_factor()?;
                Ok(productions::unary(&token.value, operand))
            }),
            Token::LeftParen => self.nested(token.pos.line, |this| {
                let inner = this.parse_expression()?;
                this.consume(TokenKind::RightParen)?;

                Ok(productions::grouped(inner))
            }),
            Token::Number(n) => Ok(productions::factor_number(n.clone())),
            _ => Err(unexpected(&token)),
        }
    }
}
