//! One builder per grammar rule. Each takes the already-built pieces of its right-hand
//! side and returns the node for the rule; none of them touch parser state.

use crate::{
    token::{Number, Token, TokenKind},
    tree::{Node, Value},
};

/// Leaf for a matched terminal, labelled with its tag and carrying its text or value.
pub fn terminal(token: &Token) -> Node {
    let value = match token {
        Token::Number(n) => Value::Number(n.clone()),
        t => Value::Text(t.to_string()),
    };

    Node::leaf(TokenKind::from(token).to_string(), Some(value))
}

pub fn program() -> Node {
    Node::new("Program")
}

pub fn statements() -> Node {
    Node::new("statements")
}

pub fn args_list() -> Node {
    Node::new("args list")
}

pub fn statement(inner: Node) -> Node {
    Node::with_children("statement", vec![inner])
}

pub fn decl_fn(name: &Token, args: Node, body: Node) -> Node {
    Node::with_children(
        "Declare function",
        vec![
            terminal(&Token::To),
            terminal(name),
            args,
            body,
            terminal(&Token::End),
        ],
    )
}

pub fn arg_identifier(name: &Token) -> Node {
    Node::with_children(
        "args",
        vec![Node::leaf("Identifier", Some(Value::Text(name.to_string())))],
    )
}

pub fn arg_number(value: Number) -> Node {
    Node::with_children("args", vec![Node::leaf("number", Some(value.into()))])
}

pub fn call_function(name: &Token, args: Node) -> Node {
    Node::with_children("Call function", vec![terminal(name), args])
}

pub fn if_then(cond: &Token, body: Node) -> Node {
    Node::with_children(
        "If Then",
        vec![
            terminal(&Token::If),
            terminal(cond),
            terminal(&Token::Then),
            body,
            terminal(&Token::End),
        ],
    )
}

pub fn if_then_else(cond: &Token, body: Node, alternative: Node) -> Node {
    Node::with_children(
        "If Then Else",
        vec![
            terminal(&Token::If),
            terminal(cond),
            terminal(&Token::Then),
            body,
            terminal(&Token::Else),
            alternative,
            terminal(&Token::End),
        ],
    )
}

pub fn while_loop(cond: &Token, body: Node) -> Node {
    Node::with_children(
        "while",
        vec![
            terminal(&Token::While),
            terminal(cond),
            body,
            terminal(&Token::End),
        ],
    )
}

/// Binary `+ - * /`, shared by expression and term.
pub fn binary(left: Node, operator: &Token, right: Node) -> Node {
    Node::with_children("EXPRESSION", vec![left, terminal(operator), right])
}

pub fn unary(sign: &Token, operand: Node) -> Node {
    Node::with_children("MATH EXPRESSION", vec![terminal(sign), operand])
}

pub fn grouped(inner: Node) -> Node {
    Node::with_children(
        "MATH EXPRESSION",
        vec![
            terminal(&Token::LeftParen),
            inner,
            terminal(&Token::RightParen),
        ],
    )
}

pub fn factor_number(value: Number) -> Node {
    Node::with_children("factor number", vec![terminal(&Token::Number(value))])
}
