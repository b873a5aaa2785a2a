use std::fs;

use monkey::{get_result, interpreter::value::core::Object};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_monkey_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code, false) {
                panic!("Monkey example {} in {:?} failed:\n{}\nError: {}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No Monkey examples found in book/src");
}

fn extract_monkey_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```monkey") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_result(src: &str, expected: Object) {
    match get_result(src, false) {
        Ok(value) => assert_eq!(value, Some(expected), "{src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = get_result(src, false) {
        panic!("Script succeeded with {value:?} but was expected to fail")
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_result("let x = 1 + 2\nx == 3", true.into());
    assert_result("let x = 7 * 9\nx", 63.into());
    assert_result("let x = 8 - 5\nx", 3.into());
    assert_result("let x = 10 / 2\nx", 5.into());
    assert_result("let x = 1\nx = x + 1\nx = x * 10\nx", 20.into());
}

#[test]
fn user_defined_function_and_calls() {
    assert_result("let square = fn(x) { x * x }\nsquare(3)", 9.into());
    assert_result("let add = fn(a, b) { a + b }\nadd(2, 5)", 7.into());
}

#[test]
fn if_else_and_blocks() {
    assert_result("let x = if (2 < 3) { 7 } else { 11 }\nx", 7.into());
    assert_result(
                  r"
        let y = fn() {
            let a = 1
            let b = 2
            a + b
        }()
        y
    ",
                  3.into(),
    );
}

#[test]
fn map_and_reduce_with_closures() {
    let source = r"
        let reduce = fn(n, acc, f) {
            if (n == 0) { return acc; }
            reduce(n - 1, f(acc, n), f)
        };
        let sum = fn(n) { reduce(n, 0, fn(acc, x) { acc + x }) };
        sum(100)
    ";
    assert_result(source, 5050.into());
}

#[test]
fn comments_are_ignored() {
    assert_result("// the answer\nlet a = 42; // trailing\na", 42.into());
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.monkey").expect("missing file");
    assert_result(&script, true.into());
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("let x = 1 / 0");
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("foo == 1");
}

#[test]
fn wrong_function_arity_is_error() {
    assert_failure("let f = fn(x, y) { x + y }\nf(3)");
}

#[test]
fn syntax_error_is_error() {
    assert_failure("let x = ;");
}
