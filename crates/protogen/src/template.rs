//! Text templates for emitted source.
//!
//! A template is plain text with `$`-delimited directives:
//!
//! - `$name$` is replaced by the value bound to `name`.
//! - `$$` is a literal `$`.
//! - `$for name$ ... $end$` repeats its body once per entry of the list bound
//!   to `name`. Inside the body, the entry's variables shadow outer ones.
//!
//! Multi-line templates are dedented and stripped of leading and trailing
//! blank lines, so they can be written as indented string literals. A `$for$`
//! or `$end$` directive that is alone on its line consumes the whole line.
//!
//! When a substituted value spans several lines, each continuation line is
//! indented like the line the placeholder sits on.

use std::collections::HashMap;
use std::fmt;

/// Error parsing or rendering a template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unterminated `$` directive on line {0}")]
    Unterminated(usize),

    #[error("`$end$` without an open `$for$` on line {0}")]
    UnmatchedEnd(usize),

    #[error("`$for {0}$` is never closed")]
    UnclosedLoop(String),

    #[error("invalid variable name `{0}`")]
    InvalidName(String),

    #[error("no value bound to `{0}`")]
    Unbound(String),

    #[error("list `{0}` cannot be substituted as text")]
    ListInText(String),

    #[error("`{0}` is not a list")]
    NotAList(String),
}

/// A parsed template fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(String),
    Placeholder(String),
    Loop { items: String, body: Vec<Node> },
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

/// A value bound to a template variable.
#[derive(Debug, Clone)]
pub enum Value {
    Text(String),
    /// Rendered in the scope of the substitution site.
    Nested(Template),
    /// Entries iterated by `$for$`.
    List(Vec<Vars>),
}

/// Variables bound for one rendering scope.
#[derive(Debug, Clone, Default)]
pub struct Vars {
    values: HashMap<String, Value>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.set(name, Value::Text(value.to_string()));
        self
    }

    pub fn nested(mut self, name: impl Into<String>, template: Template) -> Self {
        self.set(name, Value::Nested(template));
        self
    }

    pub fn list(mut self, name: impl Into<String>, entries: Vec<Vars>) -> Self {
        self.set(name, Value::List(entries));
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

struct Scope<'a> {
    vars: &'a Vars,
    parent: Option<&'a Scope<'a>>,
}

impl Scope<'_> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.vars
            .get(name)
            .or_else(|| self.parent.and_then(|p| p.lookup(name)))
    }
}

enum Directive<'a> {
    For(&'a str),
    End,
}

struct Frame {
    items: Option<String>,
    nodes: Vec<Node>,
}

impl Template {
    /// Parses `source`.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        if source.contains('\n') {
            Self::parse_lines(&dedent(source))
        } else {
            Self::parse_lines(source)
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Renders the template with `vars`.
    pub fn render(&self, vars: &Vars) -> Result<String, TemplateError> {
        self.render_in(&Scope { vars, parent: None })
    }

    fn render_in(&self, scope: &Scope<'_>) -> Result<String, TemplateError> {
        let mut out = String::new();
        render_nodes(&self.nodes, scope, &mut out)?;
        Ok(out)
    }

    fn parse_lines(source: &str) -> Result<Self, TemplateError> {
        let mut stack = vec![Frame {
            items: None,
            nodes: Vec::new(),
        }];

        for (index, line) in source.split_inclusive('\n').enumerate() {
            let line_no = index + 1;
            match standalone_directive(line) {
                Some(directive) => apply_directive(&mut stack, directive, line_no)?,
                None => parse_line(&mut stack, line, line_no)?,
            }
        }

        // Only the root frame has no loop name; anything above it is an open loop.
        match stack.pop() {
            Some(Frame { items: None, nodes }) => Ok(Self { nodes }),
            Some(Frame {
                items: Some(items), ..
            }) => Err(TemplateError::UnclosedLoop(items)),
            None => Err(TemplateError::UnmatchedEnd(0)),
        }
    }
}

fn parse_line(stack: &mut Vec<Frame>, line: &str, line_no: usize) -> Result<(), TemplateError> {
    let mut rest = line;
    while let Some(start) = rest.find('$') {
        push_literal(stack, &rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('$').ok_or(TemplateError::Unterminated(line_no))?;
        let inner = &after[..end];
        rest = &after[end + 1..];

        if inner.is_empty() {
            push_literal(stack, "$");
        } else if let Some(directive) = directive(inner)? {
            apply_directive(stack, directive, line_no)?;
        } else {
            check_name(inner)?;
            push_node(stack, Node::Placeholder(inner.to_string()));
        }
    }
    push_literal(stack, rest);
    Ok(())
}

/// Recognizes a `$for$` or `$end$` directive that fills a whole line.
fn standalone_directive(line: &str) -> Option<Directive<'_>> {
    let inner = line.trim().strip_prefix('$')?.strip_suffix('$')?;
    if inner.contains('$') {
        return None;
    }
    directive(inner).ok().flatten()
}

fn directive(inner: &str) -> Result<Option<Directive<'_>>, TemplateError> {
    if inner == "end" {
        return Ok(Some(Directive::End));
    }
    match inner.strip_prefix("for ") {
        Some(name) => {
            let name = name.trim();
            check_name(name)?;
            Ok(Some(Directive::For(name)))
        }
        None => Ok(None),
    }
}

fn apply_directive(
    stack: &mut Vec<Frame>,
    directive: Directive<'_>,
    line_no: usize,
) -> Result<(), TemplateError> {
    match directive {
        Directive::For(name) => stack.push(Frame {
            items: Some(name.to_string()),
            nodes: Vec::new(),
        }),
        Directive::End => {
            let frame = match stack.pop() {
                Some(Frame {
                    items: Some(items),
                    nodes,
                }) => Node::Loop { items, body: nodes },
                _ => return Err(TemplateError::UnmatchedEnd(line_no)),
            };
            push_node(stack, frame);
        }
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), TemplateError> {
    let valid =
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(TemplateError::InvalidName(name.to_string()))
    }
}

fn push_node(stack: &mut [Frame], node: Node) {
    if let Some(frame) = stack.last_mut() {
        frame.nodes.push(node);
    }
}

fn push_literal(stack: &mut [Frame], text: &str) {
    if text.is_empty() {
        return;
    }
    let Some(frame) = stack.last_mut() else {
        return;
    };
    match frame.nodes.last_mut() {
        Some(Node::Literal(existing)) => existing.push_str(text),
        _ => frame.nodes.push(Node::Literal(text.to_string())),
    }
}

/// Strips common indentation and surrounding blank lines; the result ends
/// with a newline.
fn dedent(source: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let Some(start) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return String::new();
    };
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .unwrap_or(start)
        + 1;
    let body = &lines[start..end];

    let indent = body
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| leading_whitespace(l).len())
        .min()
        .unwrap_or(0);

    let mut out = String::with_capacity(source.len());
    for line in body {
        if !line.trim().is_empty() {
            out.push_str(&line[indent..]);
        }
        out.push('\n');
    }
    out
}

fn leading_whitespace(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

fn render_nodes(nodes: &[Node], scope: &Scope<'_>, out: &mut String) -> Result<(), TemplateError> {
    for (i, node) in nodes.iter().enumerate() {
        match node {
            Node::Literal(text) => out.push_str(text),
            Node::Placeholder(name) => {
                let rendered = match scope.lookup(name) {
                    Some(Value::Text(text)) => text.clone(),
                    Some(Value::Nested(template)) => template.render_in(scope)?,
                    Some(Value::List(_)) => return Err(TemplateError::ListInText(name.clone())),
                    None => return Err(TemplateError::Unbound(name.clone())),
                };
                let mut text = rendered.as_str();
                // A block value placed on its own line already ends the line.
                if let Some(Node::Literal(next)) = nodes.get(i + 1)
                    && next.starts_with('\n')
                {
                    text = text.strip_suffix('\n').unwrap_or(text);
                }
                push_indented(out, text);
            }
            Node::Loop { items, body } => {
                let entries = match scope.lookup(items) {
                    Some(Value::List(entries)) => entries,
                    Some(_) => return Err(TemplateError::NotAList(items.clone())),
                    None => return Err(TemplateError::Unbound(items.clone())),
                };
                for vars in entries {
                    let inner = Scope {
                        vars,
                        parent: Some(scope),
                    };
                    render_nodes(body, &inner, out)?;
                }
            }
        }
    }
    Ok(())
}

fn push_indented(out: &mut String, text: &str) {
    let line_start = out.rfind('\n').map_or(0, |i| i + 1);
    let indent = leading_whitespace(&out[line_start..]).to_string();

    let mut lines = text.split_inclusive('\n');
    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        if line != "\n" {
            out.push_str(&indent);
        }
        out.push_str(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str, vars: &Vars) -> String {
        Template::parse(source).unwrap().render(vars).unwrap()
    }

    #[test]
    fn inline_substitution() {
        let vars = Vars::new().text("name", "Color").text("n", 3);
        assert_eq!(render("const $name$: i32 = $n$;", &vars), "const Color: i32 = 3;");
    }

    #[test]
    fn dollar_escape() {
        assert_eq!(render("cost: $$5", &Vars::new()), "cost: $5");
        assert_eq!(
            Template::parse("$$$$").unwrap().nodes(),
            &[Node::Literal("$$".to_string())]
        );
    }

    #[test]
    fn block_is_dedented() {
        let out = render(
            r#"
                impl $name$ {
                    fn f() {}
                }
            "#,
            &Vars::new().text("name", "Foo"),
        );
        insta::assert_snapshot!(out, @r"
        impl Foo {
            fn f() {}
        }
        ");
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn loop_over_entries() {
        let vars = Vars::new().text("ty", "Shape").list(
            "values",
            vec![
                Vars::new().text("variant", "Circle").text("number", 0),
                Vars::new().text("variant", "Square").text("number", 1),
            ],
        );
        let out = render(
            r#"
            impl $ty$ {
                $for values$
                pub const $variant$: $ty$ = $ty$($number$);
                $end$
            }
            "#,
            &vars,
        );
        insta::assert_snapshot!(out, @r"
        impl Shape {
            pub const Circle: Shape = Shape(0);
            pub const Square: Shape = Shape(1);
        }
        ");
    }

    #[test]
    fn inline_loop() {
        let vars = Vars::new().list(
            "xs",
            vec![Vars::new().text("x", "a"), Vars::new().text("x", "b")],
        );
        assert_eq!(render("[$for xs$$x$,$end$]", &vars), "[a,b,]");
    }

    #[test]
    fn nested_loops_see_outer_scope() {
        let vars = Vars::new().list(
            "outer",
            vec![
                Vars::new()
                    .text("o", "A")
                    .list("inner", vec![Vars::new().text("i", "1"), Vars::new().text("i", "2")]),
                Vars::new().text("o", "B").list("inner", Vec::new()),
            ],
        );
        let out = render(
            r#"
            $for outer$
            $o$:
            $for inner$
              $o$$i$
            $end$
            $end$
            "#,
            &vars,
        );
        assert_eq!(out, "A:\n  A1\n  A2\nB:\n");
    }

    #[test]
    fn nested_template_is_indented() {
        let body = Template::parse(
            r#"
            fn value(&self) -> i32 {
                $n$
            }
            "#,
        )
        .unwrap();
        let vars = Vars::new().text("n", 7).nested("body", body);
        let out = render(
            r#"
            impl T {
                $body$

                fn other() {}
            }
            "#,
            &vars,
        );
        insta::assert_snapshot!(out, @r"
        impl T {
            fn value(&self) -> i32 {
                7
            }

            fn other() {}
        }
        ");
    }

    #[test]
    fn blank_lines_are_not_indented() {
        let vars = Vars::new().text("text", "a\n\nb");
        assert_eq!(render("    $text$", &vars), "    a\n\n    b");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Template::parse("a $b").unwrap_err(),
            TemplateError::Unterminated(1)
        );
        assert_eq!(
            Template::parse("x\n$end$\n").unwrap_err(),
            TemplateError::UnmatchedEnd(2)
        );
        assert_eq!(
            Template::parse("$for xs$ $x$").unwrap_err(),
            TemplateError::UnclosedLoop("xs".to_string())
        );
        assert_eq!(
            Template::parse("$a b$").unwrap_err(),
            TemplateError::InvalidName("a b".to_string())
        );
    }

    #[test]
    fn render_errors() {
        let template = Template::parse("$missing$").unwrap();
        assert_eq!(
            template.render(&Vars::new()).unwrap_err(),
            TemplateError::Unbound("missing".to_string())
        );

        let template = Template::parse("$xs$").unwrap();
        let vars = Vars::new().list("xs", Vec::new());
        assert_eq!(
            template.render(&vars).unwrap_err(),
            TemplateError::ListInText("xs".to_string())
        );

        let template = Template::parse("$for x$$end$").unwrap();
        let vars = Vars::new().text("x", "y");
        assert_eq!(
            template.render(&vars).unwrap_err(),
            TemplateError::NotAList("x".to_string())
        );
    }
}
