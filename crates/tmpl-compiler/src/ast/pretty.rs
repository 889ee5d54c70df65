//! Pretty-printing for the target AST
//!
//! Produces ECMAScript source text. Expressions are printed on one line;
//! parentheses are inserted from operator precedence only where required.

use super::{Expression, Program, Property, Statement};

/// Trait for pretty-printing AST constructs
pub trait PrettyPrint {
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Program {
    fn pretty_print(&self) -> String {
        let mut output = String::new();
        for stmt in &self.body {
            print_statement(&mut output, stmt, 0);
        }
        output
    }
}

impl PrettyPrint for Statement {
    fn pretty_print(&self) -> String {
        let mut output = String::new();
        print_statement(&mut output, self, 0);
        output
    }
}

impl PrettyPrint for Expression {
    fn pretty_print(&self) -> String {
        let mut output = String::new();
        print_expr(&mut output, self, prec::ASSIGN);
        output
    }
}

const INDENT: &str = "    ";

/// Operator precedence levels (higher binds tighter)
mod prec {
    pub const ASSIGN: u8 = 3;
    pub const CONDITIONAL: u8 = 3;
    pub const LOGICAL_OR: u8 = 4;
    pub const EQUALITY: u8 = 10;
    pub const UNARY: u8 = 15;
    pub const CALL: u8 = 19;
    pub const PRIMARY: u8 = 20;
}

fn precedence(expr: &Expression) -> u8 {
    match expr {
        Expression::Conditional { .. } => prec::CONDITIONAL,
        Expression::Logical { .. } => prec::LOGICAL_OR,
        Expression::Binary { .. } => prec::EQUALITY,
        Expression::Unary { .. } => prec::UNARY,
        Expression::Call { .. } | Expression::Member { .. } => prec::CALL,
        _ => prec::PRIMARY,
    }
}

fn print_statement(out: &mut String, stmt: &Statement, indent: usize) {
    let prefix = INDENT.repeat(indent);
    match stmt {
        Statement::Return { argument } => {
            out.push_str(&prefix);
            out.push_str("return ");
            print_expr(out, argument, prec::ASSIGN);
            out.push_str(";\n");
        }
        Statement::ImportDefault { local, source } => {
            out.push_str(&format!(
                "{}import {} from {};\n",
                prefix,
                local,
                quote(source)
            ));
        }
        Statement::ExportDefaultFunction { name, params, body } => {
            out.push_str(&format!(
                "{}export default function {}({}) {{\n",
                prefix,
                name,
                params.join(", ")
            ));
            for inner in body {
                print_statement(out, inner, indent + 1);
            }
            out.push_str(&prefix);
            out.push_str("}\n");
        }
    }
}

/// Print `expr`, parenthesizing it if it binds looser than `min`
fn print_expr(out: &mut String, expr: &Expression, min: u8) {
    let wrap = precedence(expr) < min;
    if wrap {
        out.push('(');
    }
    print_expr_inner(out, expr);
    if wrap {
        out.push(')');
    }
}

fn print_expr_inner(out: &mut String, expr: &Expression) {
    match expr {
        Expression::Identifier { name } => out.push_str(name),
        Expression::StringLiteral { value } => out.push_str(&quote(value)),
        Expression::NumberLiteral { value } => out.push_str(&format_number(*value)),
        Expression::BooleanLiteral { value } => {
            out.push_str(if *value { "true" } else { "false" })
        }
        Expression::NullLiteral => out.push_str("null"),
        Expression::Member { object, property } => {
            print_callee(out, object);
            if is_identifier_name(property) {
                out.push('.');
                out.push_str(property);
            } else {
                out.push('[');
                out.push_str(&quote(property));
                out.push(']');
            }
        }
        Expression::Call { callee, arguments } => {
            print_callee(out, callee);
            out.push('(');
            print_list(out, arguments);
            out.push(')');
        }
        Expression::Array { elements } => {
            out.push('[');
            print_list(out, elements);
            out.push(']');
        }
        Expression::Object { properties } => print_object(out, properties),
        Expression::Conditional {
            test,
            consequent,
            alternate,
        } => {
            print_expr(out, test, prec::LOGICAL_OR);
            out.push_str(" ? ");
            print_expr(out, consequent, prec::ASSIGN);
            out.push_str(" : ");
            print_expr(out, alternate, prec::ASSIGN);
        }
        Expression::Unary { operator, argument } => {
            out.push_str(&operator.to_string());
            print_expr(out, argument, prec::UNARY);
        }
        Expression::Binary {
            operator,
            left,
            right,
        } => {
            print_expr(out, left, prec::EQUALITY);
            out.push_str(&format!(" {} ", operator));
            print_expr(out, right, prec::EQUALITY + 1);
        }
        Expression::Logical {
            operator,
            left,
            right,
        } => {
            print_expr(out, left, prec::LOGICAL_OR);
            out.push_str(&format!(" {} ", operator));
            print_expr(out, right, prec::LOGICAL_OR + 1);
        }
        Expression::Function { params, body } => {
            out.push_str(&format!("function ({}) {{", params.join(", ")));
            for stmt in body {
                out.push(' ');
                let mut inner = String::new();
                print_statement(&mut inner, stmt, 0);
                out.push_str(inner.trim_end());
            }
            out.push_str(" }");
        }
    }
}

/// Callees and member objects must be member-level expressions; a function
/// expression in that position also needs parentheses.
fn print_callee(out: &mut String, expr: &Expression) {
    if matches!(expr, Expression::Function { .. }) {
        out.push('(');
        print_expr_inner(out, expr);
        out.push(')');
    } else {
        print_expr(out, expr, prec::CALL);
    }
}

fn print_list(out: &mut String, items: &[Expression]) {
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        print_expr(out, item, prec::ASSIGN);
    }
}

fn print_object(out: &mut String, properties: &[Property]) {
    if properties.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{ ");
    for (idx, prop) in properties.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        if is_identifier_name(&prop.key) {
            out.push_str(&prop.key);
        } else {
            out.push_str(&quote(&prop.key));
        }
        out.push_str(": ");
        print_expr(out, &prop.value, prec::ASSIGN);
    }
    out.push_str(" }");
}

/// Whether `name` can be written bare as a property name
pub(crate) fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Single-quoted string literal
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> Expression {
        Expression::identifier(name)
    }

    #[test]
    fn test_print_strict_true_conditional() {
        let expr = Expression::conditional(
            Expression::strict_equal(id("x"), Expression::boolean(true)),
            Expression::call(id("h"), vec![Expression::string("div")]),
            Expression::null(),
        );
        assert_eq!(expr.pretty_print(), "x === true ? h('div') : null");
    }

    #[test]
    fn test_print_nested_conditional_in_test_is_parenthesized() {
        let inner = Expression::conditional(id("a"), id("b"), id("c"));
        let expr = Expression::conditional(inner, id("d"), Expression::null());
        assert_eq!(expr.pretty_print(), "(a ? b : c) ? d : null");
    }

    #[test]
    fn test_print_negated_comparison() {
        let expr = Expression::not(Expression::strict_equal(id("a"), id("b")));
        assert_eq!(expr.pretty_print(), "!(a === b)");
    }

    #[test]
    fn test_print_conditional_operand_of_or() {
        let expr = Expression::or(Expression::conditional(id("a"), id("b"), id("c")), id("d"));
        assert_eq!(expr.pretty_print(), "(a ? b : c) || d");
    }

    #[test]
    fn test_print_member_quoting() {
        let expr = Expression::member(id("$slotset"), "my-slot");
        assert_eq!(expr.pretty_print(), "$slotset['my-slot']");
        let expr = Expression::member(id("$cmp"), "title");
        assert_eq!(expr.pretty_print(), "$cmp.title");
    }

    #[test]
    fn test_print_object_keys() {
        let expr = Expression::object(vec![
            Property::new("title", Expression::boolean(true)),
            Property::new("data-id", Expression::number(3.0)),
        ]);
        assert_eq!(expr.pretty_print(), "{ title: true, 'data-id': 3 }");
        assert_eq!(Expression::object(vec![]).pretty_print(), "{}");
    }

    #[test]
    fn test_print_string_escapes() {
        assert_eq!(Expression::string("it's\n").pretty_print(), r"'it\'s\n'");
    }

    #[test]
    fn test_print_numbers() {
        assert_eq!(Expression::number(10.0).pretty_print(), "10");
        assert_eq!(Expression::number(0.5).pretty_print(), "0.5");
    }

    #[test]
    fn test_print_function_expression() {
        let func = Expression::function(
            vec!["item".to_string(), "i".to_string()],
            vec![Statement::Return { argument: id("item") }],
        );
        let call = Expression::call(id("iterate"), vec![id("items"), func]);
        assert_eq!(
            call.pretty_print(),
            "iterate(items, function (item, i) { return item; })"
        );
    }

    #[test]
    fn test_print_program() {
        let program = Program {
            body: vec![
                Statement::ImportDefault {
                    local: "_xFoo".to_string(),
                    source: "x-foo".to_string(),
                },
                Statement::ExportDefaultFunction {
                    name: "tmpl".to_string(),
                    params: vec!["a".to_string(), "b".to_string()],
                    body: vec![Statement::Return {
                        argument: Expression::array(vec![]),
                    }],
                },
            ],
        };
        assert_eq!(
            program.pretty_print(),
            "import _xFoo from 'x-foo';\nexport default function tmpl(a, b) {\n    return [];\n}\n"
        );
    }
}
