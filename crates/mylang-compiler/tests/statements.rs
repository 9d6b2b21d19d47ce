//! Statement parsing and code generation tests.

use mylang_compiler::ir::{Instr, IrModule};
use mylang_compiler::{CompileResult, CompilerContext, SourceLines, StatementKind, StatementParser};

/// Parse the first line of `source` as a statement, letting blocks pull the rest.
fn parse_first(source: &str) -> (CompileResult<StatementKind>, CompilerContext, IrModule) {
    let mut lines = SourceLines::new(source);
    let mut ctx = CompilerContext::new();
    let mut module = IrModule::new();
    let result = {
        let mut parser = StatementParser::new(&mut lines, &mut ctx, &mut module);
        let line = parser.next_line().unwrap_or_default();
        parser.parse_line(&line)
    };
    (result, ctx, module)
}

fn body_text(module: &IrModule) -> Vec<String> {
    module.body.iter().map(Instr::to_string).collect()
}

#[test]
fn test_empty_and_comment_lines() {
    let (result, _, module) = parse_first("   # just a comment");
    assert_eq!(result, Ok(StatementKind::Empty));
    assert!(module.body.is_empty());
}

#[test]
fn test_assignment() {
    let (result, ctx, module) = parse_first("x = 3 + 4 * 2");
    assert_eq!(result, Ok(StatementKind::Assignment));
    assert!(ctx.is_declared("v_x"));
    assert_eq!(
        body_text(&module),
        vec![
            "\t%t1 = mul i32 4, 2",
            "\t%t2 = add i32 3, %t1",
            "\tstore i32 %t2, i32* %v_x",
        ]
    );
}

#[test]
fn test_assignment_loads_source_variables() {
    let (result, _, module) = parse_first("x = y - x");
    assert_eq!(result, Ok(StatementKind::Assignment));
    assert_eq!(
        body_text(&module),
        vec![
            "\t%t1 = load i32* %v_y",
            "\t%t2 = load i32* %v_x",
            "\t%t3 = sub i32 %t1, %t2",
            "\tstore i32 %t3, i32* %v_x",
        ]
    );
    assert_eq!(module.declarations.len(), 2);
    assert_eq!(module.initializations.len(), 2);
}

#[test]
fn test_copy_assignment() {
    let (_, _, module) = parse_first("a = b");
    assert_eq!(
        body_text(&module),
        vec!["\t%t1 = load i32* %v_b", "\tstore i32 %t1, i32* %v_a"]
    );
}

#[test]
fn test_malformed_assignments() {
    for source in ["x", "x =", "x 3", "x + 1", "x = 1 2", "x = (1", "x = 1 = 2", "x = print"] {
        let (result, _, _) = parse_first(source);
        assert!(result.is_err(), "expected error for {source:?}");
    }
}

#[test]
fn test_print_literal_and_expression() {
    let (result, _, module) = parse_first("print(7)");
    assert_eq!(result, Ok(StatementKind::Print));
    assert_eq!(
        body_text(&module),
        vec!["\tcall i32 (i8*, ...)* @printf(i8* getelementptr ([4 x i8]* @print.str, i32 0, i32 0), i32 7 )"]
    );

    let (_, _, module) = parse_first("print((n + 1) / 2)");
    assert_eq!(
        body_text(&module),
        vec![
            "\t%t1 = load i32* %v_n",
            "\t%t2 = add i32 %t1, 1",
            "\t%t3 = sdiv i32 %t2, 2",
            "\tcall i32 (i8*, ...)* @printf(i8* getelementptr ([4 x i8]* @print.str, i32 0, i32 0), i32 %t3 )",
        ]
    );
}

#[test]
fn test_malformed_prints() {
    for source in ["print", "print()", "print 3", "print(3", "print(x = 1)", "print(3) + 1", "print(+3)"] {
        let (result, _, _) = parse_first(source);
        assert!(result.is_err(), "expected error for {source:?}");
    }
}

#[test]
fn test_if_block() {
    let (result, ctx, module) = parse_first("if (x) {\nprint(x)\n}\nprint(99)");
    assert_eq!(result, Ok(StatementKind::If));
    assert!(!ctx.block_open);
    assert_eq!(ctx.line, 2);
    assert_eq!(
        body_text(&module),
        vec![
            "\tbr label %ifcond1",
            "ifcond1:",
            "\t%t1 = load i32* %v_x",
            "\t%t2 = icmp ne i32 %t1, 0",
            "\tbr i1 %t2, label %ifbody1, label %ifend1",
            "ifbody1:",
            "\t%t3 = load i32* %v_x",
            "\tcall i32 (i8*, ...)* @printf(i8* getelementptr ([4 x i8]* @print.str, i32 0, i32 0), i32 %t3 )",
            "\tbr label %ifend1",
            "ifend1:",
        ]
    );
}

#[test]
fn test_while_block_loops_back() {
    let (result, _, module) = parse_first("while (n) {\nn = n - 1\n}");
    assert_eq!(result, Ok(StatementKind::While));
    let body = body_text(&module);
    assert_eq!(body.first().map(String::as_str), Some("\tbr label %whcond1"));
    assert_eq!(
        &body[body.len() - 2..],
        &["\tbr label %whcond1".to_string(), "whend1:".to_string()]
    );
    assert!(body.contains(&"\tbr i1 %t2, label %whbody1, label %whend1".to_string()));
}

#[test]
fn test_integer_condition() {
    let (_, _, module) = parse_first("while (1) {\n}");
    assert!(body_text(&module).contains(&"\t%t1 = icmp ne i32 1, 0".to_string()));
}

#[test]
fn test_empty_block_body() {
    let (result, _, _) = parse_first("if (1) {\n\n# nothing\n}");
    assert_eq!(result, Ok(StatementKind::If));
}

#[test]
fn test_malformed_block_headers() {
    for source in [
        "if",
        "if (x)",
        "if (x) {{",
        "if x {",
        "if (x {",
        "if () {",
        "if (x = 1) {",
        "while (",
        "while x) {",
    ] {
        let (result, _, _) = parse_first(source);
        assert!(result.is_err(), "expected error for {source:?}");
    }
}

#[test]
fn test_nested_block_is_rejected() {
    let (result, ctx, _) = parse_first("if (1) {\nwhile (1) {\n}\n}");
    assert!(result.is_err());
    assert_eq!(ctx.line, 1);
}

#[test]
fn test_unterminated_block() {
    let (result, ctx, _) = parse_first("if (1) {\nprint(1)\nprint(2)");
    assert!(result.is_err());
    assert_eq!(ctx.line, 2);
}

#[test]
fn test_close_line_rules() {
    let (result, _, _) = parse_first("}");
    assert!(result.is_err(), "no block is open");

    let (result, ctx, _) = parse_first("if (1) {\n} x");
    assert!(result.is_err(), "close line must be alone");
    assert_eq!(ctx.line, 1);
}

#[test]
fn test_unexpected_leading_tokens() {
    for source in ["3 = x", "(x) = 1", "= 1", "{", ", x", "choose(1, 2, 3, 4)"] {
        let (result, _, _) = parse_first(source);
        assert!(result.is_err(), "expected error for {source:?}");
    }
}

#[test]
fn test_choose_lowering() {
    let (result, ctx, module) = parse_first("y = choose(0, 1, 2, 3)");
    assert_eq!(result, Ok(StatementKind::Assignment));
    assert!(ctx.is_declared("choosevar1"));
    assert!(ctx.is_declared("chcond1"));
    assert_eq!(
        module.declarations.iter().map(Instr::to_string).collect::<Vec<_>>(),
        vec![
            "\t%v_y = alloca i32",
            "\t%choosevar1 = alloca i32",
            "\t%chcond1 = alloca i32",
        ]
    );
    assert_eq!(
        body_text(&module),
        vec![
            "\tstore i32 0, i32* %chcond1",
            "\t%t1 = load i32* %chcond1",
            "\t%t2 = icmp eq i32 %t1, 0",
            "\tbr i1 %t2, label %cheq1, label %chne1",
            "cheq1:",
            "\tstore i32 1, i32* %choosevar1",
            "\tbr label %chend1",
            "chne1:",
            "\t%t3 = load i32* %chcond1",
            "\t%t4 = icmp sgt i32 %t3, 0",
            "\tbr i1 %t4, label %chsgt1, label %chslt1",
            "chsgt1:",
            "\tstore i32 2, i32* %choosevar1",
            "\tbr label %chend1",
            "chslt1:",
            "\tstore i32 3, i32* %choosevar1",
            "\tbr label %chend1",
            "chend1:",
            "\t%t5 = load i32* %choosevar1",
            "\tstore i32 %t5, i32* %v_y",
        ]
    );
}

#[test]
fn test_nested_choose_gets_its_own_labels() {
    let (result, _, module) = parse_first("print(choose(choose(a, 1, 2, 3), 4, 5, 6))");
    assert_eq!(result, Ok(StatementKind::Print));
    let body = body_text(&module);
    assert!(body.contains(&"cheq1:".to_string()));
    assert!(body.contains(&"cheq2:".to_string()));
    // The inner call is evaluated while storing the outer condition.
    let inner_end = body.iter().position(|l| l == "chend2:").unwrap();
    let outer_eq = body.iter().position(|l| l == "cheq1:").unwrap();
    assert!(inner_end < outer_eq);
}

#[test]
fn test_choose_argument_errors_surface() {
    for source in ["y = choose(1, 2 +, 3, 4)", "y = choose(x = 1, 2, 3, 4)", "y = choose(1, 2, 3, ())"] {
        let (result, _, _) = parse_first(source);
        assert!(result.is_err(), "expected error for {source:?}");
    }
}
