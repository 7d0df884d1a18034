use numex::evaluate;

fn assert_evaluates(source: &str, expected: &str) {
    let result = evaluate(source);
    assert_eq!(result, expected, "evaluating {source:?}");
}

fn assert_invalid(source: &str, message: &str) {
    let result = evaluate(source);
    assert_eq!(result,
               format!("Invalid Expression: {message}"),
               "evaluating {source:?}");
}

#[test]
fn basic_arithmetic() {
    assert_evaluates("1 + 2", "3");
    assert_evaluates("7 * 9", "63");
    assert_evaluates("8 - 5", "3");
    assert_evaluates("10 / 2", "5");
    assert_evaluates("42", "42");
}

#[test]
fn precedence_and_grouping() {
    assert_evaluates("3 + 4 * 2", "11");
    assert_evaluates("(3 + 4) * 2", "14");
    assert_evaluates("2 * 3 + 4 * 5", "26");
    assert_evaluates("((2))", "2");
    assert_evaluates("(1 + (2 * (3 + 4)))", "15");
}

#[test]
fn left_associativity() {
    assert_evaluates("10 - 2 - 3", "5");
    assert_evaluates("100 / 5 / 2", "10");
    assert_evaluates("1 - 2 + 3", "2");
}

#[test]
fn integer_and_decimal_formatting() {
    assert_evaluates("(3 + 3) * 42 / (6 + 1)", "36");
    assert_evaluates("10 / 3", "3.33");
    assert_evaluates("0.1 + 0.2", "0.3");
    assert_evaluates("2.5 * 2", "5");
    assert_evaluates("2 / 3", "0.67");
    assert_evaluates("0 - 7", "-7");
    assert_evaluates("(0 - 1) * 0", "0");
}

#[test]
fn whitespace_is_insignificant_between_tokens() {
    assert_evaluates("  3+4 \t*\t 2  ", "11");
    assert_evaluates("( 3 + 4 ) * 2", "14");
}

#[test]
fn idempotence() {
    assert_eq!(evaluate("10 / 3"), evaluate("10 / 3"));
    assert_eq!(evaluate("(1 + 2"), evaluate("(1 + 2"));
}

#[test]
fn division_by_zero() {
    assert_invalid("5 / 0", "Division by zero");
    assert_invalid("1 / (2 - 2)", "Division by zero");
    assert_evaluates("0 / 5", "0");
}

#[test]
fn mismatched_parentheses() {
    assert_invalid("(1 + 2", "Missing closing bracket");
    assert_invalid("((1 + 2) * 3", "Missing closing bracket");
    assert_invalid("(1 + 2))", "Unexpected input");
}

#[test]
fn trailing_input() {
    assert_invalid("3 4", "Unexpected input");
    assert_invalid("1 + 2 3", "Unexpected input");
    assert_invalid("(1)(2)", "Unexpected input");
}

#[test]
fn invalid_characters() {
    assert_invalid("3 + a", "Invalid characters found");
    assert_invalid("1 # 2", "Invalid characters found");
    assert_invalid("1.2.3", "Invalid characters found");
    assert_invalid("12.", "Invalid characters found");
}

#[test]
fn no_unary_minus() {
    assert_invalid("-3", "Unexpected token: '-'");
    assert_invalid("3 + -2", "Unexpected token: '-'");
    assert_invalid("3 * -2", "Unexpected token: '-'");
}

#[test]
fn incomplete_expressions() {
    assert_invalid("", "Unexpected end of input");
    assert_invalid("1 +", "Unexpected end of input");
    assert_invalid("(", "Unexpected end of input");
    assert_invalid("+ 1", "Unexpected token: '+'");
    assert_invalid(")", "Unexpected token: ')'");
}

#[test]
fn nesting_ceiling() {
    let mut deep = String::new();
    for _ in 0..200 {
        deep.push('(');
    }
    deep.push('1');
    for _ in 0..200 {
        deep.push(')');
    }
    assert_invalid(&deep, "Expression is nested too deeply");

    let mut ok = String::new();
    for _ in 0..32 {
        ok.push('(');
    }
    ok.push('1');
    for _ in 0..32 {
        ok.push(')');
    }
    assert_evaluates(&ok, "1");
}
