use std::rc::Rc;

use monkey::{
    ast::{BlockStatement, Expression, FunctionLiteral, InfixOperator, PrefixOperator, Statement},
    error::SyntaxErrors,
    parse,
};
use pretty_assertions::assert_eq;

fn parse_ok(source: &str) -> Vec<Statement> {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected syntax errors for {source:?}: {errors:?}");
    program.statements
}

fn error_messages(source: &str) -> Vec<String> {
    let (_, errors) = parse(source);
    errors.iter().map(ToString::to_string).collect()
}

fn ident(name: &str) -> Expression {
    Expression::Identifier(name.to_string())
}

fn int(value: i64) -> Expression {
    Expression::IntegerLiteral(value)
}

fn infix(left: Expression, operator: InfixOperator, right: Expression) -> Expression {
    Expression::Infix { operator,
                        left: Box::new(left),
                        right: Box::new(right) }
}

#[test]
fn let_statements() {
    let statements = parse_ok("let x = 5;\nlet y = true;\nlet foobar = y;");
    assert_eq!(statements,
               vec![Statement::Let { name:  "x".to_string(),
                                     value: int(5), },
                    Statement::Let { name:  "y".to_string(),
                                     value: Expression::Boolean(true), },
                    Statement::Let { name:  "foobar".to_string(),
                                     value: ident("y"), }]);
}

#[test]
fn return_statements() {
    let statements = parse_ok("return 5;\nreturn x\nreturn add(1);");
    assert_eq!(statements.len(), 3);
    assert!(statements.iter()
                      .all(|statement| matches!(statement, Statement::Return { .. })));
    assert_eq!(statements[1], Statement::Return { value: ident("x") });
}

#[test]
fn assignment_is_distinguished_by_lookahead() {
    let statements = parse_ok("x = x + 1; x == 1");
    assert_eq!(statements,
               vec![Statement::Assign { name:  "x".to_string(),
                                        value: infix(ident("x"), InfixOperator::Add, int(1)), },
                    Statement::Expression(infix(ident("x"), InfixOperator::Equal, int(1)))]);
}

#[test]
fn semicolons_are_optional() {
    let with = parse_ok("let a = 1; a; { a };");
    let without = parse_ok("let a = 1\na\n{ a }");
    assert_eq!(with, without);
}

#[test]
fn literal_expressions() {
    let statements = parse_ok(r#"foobar; 5; "hello world"; true; false"#);
    assert_eq!(statements,
               vec![Statement::Expression(ident("foobar")),
                    Statement::Expression(int(5)),
                    Statement::Expression(Expression::StringLiteral("hello world".to_string())),
                    Statement::Expression(Expression::Boolean(true)),
                    Statement::Expression(Expression::Boolean(false))]);
}

#[test]
fn prefix_expressions() {
    let statements = parse_ok("!5; -15; !true");
    let prefix = |operator, operand| {
        Statement::Expression(Expression::Prefix { operator,
                                                   operand: Box::new(operand) })
    };
    assert_eq!(statements,
               vec![prefix(PrefixOperator::Not, int(5)),
                    prefix(PrefixOperator::Negate, int(15)),
                    prefix(PrefixOperator::Not, Expression::Boolean(true))]);
}

#[test]
fn infix_operators() {
    let cases = [("5 + 5", InfixOperator::Add),
                 ("5 - 5", InfixOperator::Sub),
                 ("5 * 5", InfixOperator::Mul),
                 ("5 / 5", InfixOperator::Div),
                 ("5 > 5", InfixOperator::Greater),
                 ("5 < 5", InfixOperator::Less),
                 ("5 >= 5", InfixOperator::GreaterEqual),
                 ("5 <= 5", InfixOperator::LessEqual),
                 ("5 == 5", InfixOperator::Equal),
                 ("5 != 5", InfixOperator::NotEqual)];

    for (source, operator) in cases {
        assert_eq!(parse_ok(source),
                   vec![Statement::Expression(infix(int(5), operator, int(5)))],
                   "{source}");
    }
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("1 <= 2 >= 3", "((1 <= 2) >= 3)"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("add(a, b)(c)", "add(a, b)(c)"),
                 ("-f(x)", "(-f(x))"),
                 ("!f(x)(y)", "(!f(x)(y))")];

    for (source, expected) in cases {
        let (program, errors) = parse(source);
        assert!(errors.is_empty(), "{source}: {errors:?}");
        assert_eq!(program.to_string(), expected, "{source}");
    }
}

#[test]
fn if_expression() {
    let statements = parse_ok("if (x < y) { x }");
    assert_eq!(statements,
               vec![Statement::Expression(Expression::If {
                   condition:   Box::new(infix(ident("x"), InfixOperator::Less, ident("y"))),
                   consequence: BlockStatement { statements: vec![Statement::Expression(ident("x"))] },
                   alternative: None,
               })]);
}

#[test]
fn if_else_expression_display() {
    let (program, errors) = parse("if (x < y) { x } else { y }");
    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "if ((x < y)) { x } else { y }");
}

#[test]
fn function_literal() {
    let statements = parse_ok("fn(x, y) { x + y; }");
    let literal = FunctionLiteral { parameters: vec!["x".to_string(), "y".to_string()],
                                    body:       BlockStatement { statements: vec![
        Statement::Expression(infix(ident("x"), InfixOperator::Add, ident("y"))),
    ] }, };
    assert_eq!(statements,
               vec![Statement::Expression(Expression::Function(Rc::new(literal)))]);
}

#[test]
fn function_parameters() {
    let cases: [(&str, &[&str]); 3] = [("fn() {};", &[]),
                                       ("fn(x) {};", &["x"]),
                                       ("fn(x, y, z) {};", &["x", "y", "z"])];

    for (source, expected) in cases {
        let statements = parse_ok(source);
        let Statement::Expression(Expression::Function(literal)) = &statements[0] else {
            panic!("{source} did not parse to a function literal: {statements:?}");
        };
        assert_eq!(literal.parameters, expected, "{source}");
    }
}

#[test]
fn call_expression() {
    let statements = parse_ok("add(1, 2 * 3, 4 + 5);");
    assert_eq!(statements,
               vec![Statement::Expression(Expression::Call {
                   function:  Box::new(ident("add")),
                   arguments: vec![int(1),
                                   infix(int(2), InfixOperator::Mul, int(3)),
                                   infix(int(4), InfixOperator::Add, int(5))],
               })]);
}

#[test]
fn immediately_invoked_function_display() {
    let (program, errors) = parse("fn(x) { x }(5)");
    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "fn(x) { x }(5)");
}

#[test]
fn block_statement() {
    let (program, errors) = parse("{ let a = 1; a }");
    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "{ let a = 1;a }");
    assert!(matches!(program.statements[0], Statement::Block(_)));
}

#[test]
fn missing_tokens_are_reported() {
    assert_eq!(error_messages("let x 5;"),
               vec!["expected next token to be =, got INT instead"]);
    assert_eq!(error_messages("let 838383;"),
               vec!["expected next token to be IDENT, got INT instead"]);
    assert_eq!(error_messages("let = 10;"),
               vec!["expected next token to be IDENT, got = instead",
                    "no prefix parse function for = found"]);
    assert_eq!(error_messages("if (x { x }"),
               vec!["expected next token to be ), got { instead"]);
}

#[test]
fn if_requires_parenthesised_condition() {
    let errors = error_messages("if x { 1 }");
    assert_eq!(errors[0], "expected next token to be (, got IDENT instead");
}

#[test]
fn unterminated_block_is_reported() {
    assert_eq!(error_messages("{ let a = 1;"),
               vec!["expected next token to be }, got EOF instead"]);
}

#[test]
fn invalid_function_parameter() {
    let errors = error_messages("fn(1) { 1 }");
    assert_eq!(errors[0], "expected next token to be IDENT, got INT instead");
}

#[test]
fn oversized_integer_literal() {
    assert_eq!(error_messages("99999999999999999999"),
               vec![r#"could not parse "99999999999999999999" as integer"#]);
}

#[test]
fn illegal_token_has_no_prefix_parse_function() {
    assert_eq!(error_messages("let x = @;"),
               vec!["no prefix parse function for ILLEGAL found"]);
}

#[test]
fn failed_statements_are_dropped_but_parsing_continues() {
    let (program, errors) = parse("let = 1; let ok = 2;");
    assert_eq!(errors.len(), 2);
    assert_eq!(program.to_string(), "1let ok = 2;");
}

#[test]
fn syntax_errors_report_lines() {
    let (_, errors) = parse("let x = 1;\nlet = 2;");
    assert_eq!(errors[0].line(), 2);
    assert_eq!(SyntaxErrors(errors).to_string(),
               "line 2: expected next token to be IDENT, got = instead\n\
                line 2: no prefix parse function for = found");
}

#[test]
fn calls_chain_on_call_results() {
    let statements = parse_ok("add(a, b)(c)");
    assert_eq!(statements,
               vec![Statement::Expression(Expression::Call {
                   function:  Box::new(Expression::Call { function:  Box::new(ident("add")),
                                                          arguments: vec![ident("a"), ident("b")], }),
                   arguments: vec![ident("c")],
               })]);
}
