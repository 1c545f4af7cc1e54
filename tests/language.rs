use std::fs;

use pyrite::run_to_string;
use walkdir::WalkDir;

fn assert_output(src: &str, expected: &str) {
    match run_to_string(src) {
        Ok(output) => assert_eq!(output, expected, "Script output mismatch:\n{src}"),
        Err(e) => panic!("Script failed:\n{src}\nError: {e}"),
    }
}

fn assert_failure(src: &str) {
    if run_to_string(src).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{src}")
    }
}

#[test]
fn indentation_controls_blocks() {
    assert_output("x = 1\nif x:\n  print x\n", "1\n");
}

#[test]
fn string_concatenation_and_print() {
    assert_output("print \"a\" + \"b\", 3", "ab 3\n");
}

#[test]
fn class_with_method() {
    assert_output("class A:\n  def m(self, x):\n    return x + 1\na = A()\nprint a.m(41)\n",
                  "42\n");
}

#[test]
fn inheritance_override() {
    let src = "class A:\n  def f(self):\n    return 1\nclass B(A):\n  def f(self):\n    return \
               2\nb = B()\nprint b.f()\n";
    assert_output(src, "2\n");
}

#[test]
fn str_dispatch_on_print() {
    assert_output("class A:\n  def __str__(self):\n    return 'hi'\na = A()\nprint a\n", "hi\n");
}

#[test]
fn comparison_via_lt() {
    let src = "class A:\n  def __lt__(self, other):\n    return True\na = A()\nb = A()\nprint a \
               < b\n";
    assert_output(src, "True\n");
}

#[test]
fn print_spacing_and_terminator() {
    assert_output("print", "\n");
    assert_output("print 1, 2, 3", "1 2 3\n");
    assert_output("print None", "None\n");
    assert_output("print True, False", "True False\n");
}

#[test]
fn arithmetic_precedence_and_grouping() {
    assert_output("print 2 + 3 * 4", "14\n");
    assert_output("print (2 + 3) * 4", "20\n");
    assert_output("print 7 - 2 - 1", "4\n");
    assert_output("print 10 / 3", "3\n");
    assert_output("print -5 + 10", "5\n");
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("print 1 / 0");
}

#[test]
fn arithmetic_type_errors() {
    assert_failure("print 1 + 'a'");
    assert_failure("print 'a' - 'b'");
    assert_failure("print None * 2");
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("print x");
}

#[test]
fn primitive_comparisons() {
    assert_output("print 1 < 2", "True\n");
    assert_output("print 'a' < 'b'", "True\n");
    assert_output("print 2 <= 2", "True\n");
    assert_output("print 3 != 4", "True\n");
    assert_output("print 1 == 1", "True\n");
    assert_output("print 2 > 3", "False\n");
    assert_output("print False < True", "True\n");
    assert_output("print None == None", "True\n");
}

#[test]
fn undefined_comparisons_are_errors() {
    assert_failure("print 1 == 'a'");
    assert_failure("print None < None");
}

#[test]
fn logic_and_negation() {
    assert_output("print 1 and 0", "False\n");
    assert_output("print 0 or 2", "True\n");
    assert_output("print not 0", "True\n");
    assert_output("print not ''", "True\n");
    assert_output("print not not 5", "True\n");
}

#[test]
fn logical_operators_evaluate_both_operands() {
    let src = "class T:\n  def t(self):\n    print 'hit'\n    return 1\nt = T()\nx = 0 and \
               t.t()\n";
    assert_output(src, "hit\n");
}

#[test]
fn if_else_branches() {
    assert_output("x = 0\nif x:\n  print 1\nelse:\n  print 2\n", "2\n");
    assert_output("x = 3\nif x:\n  print 1\nelse:\n  print 2\n", "1\n");
    assert_output("if 0:\n  print 1\nprint 2\n", "2\n");
}

#[test]
fn fields_and_init() {
    let src = "class Point:\n  def __init__(self, x, y):\n    self.x = x\n    self.y = y\np = \
               Point(3, 4)\nprint p.x + p.y\n";
    assert_output(src, "7\n");
}

#[test]
fn dotted_paths_traverse_nested_instances() {
    let src = "class A:\n  def __init__(self):\n    self.n = 5\nclass B:\n  def __init__(self, \
               a):\n    self.a = a\nb = B(A())\nprint b.a.n\n";
    assert_output(src, "5\n");
}

#[test]
fn reading_a_missing_field_is_error() {
    assert_failure("class A:\n  def m(self):\n    return 1\na = A()\nprint a.n\n");
}

#[test]
fn field_assignment_on_non_instance_is_silent() {
    assert_output("x = 1\nx.y = 5\nprint x\n", "1\n");
}

#[test]
fn method_call_on_non_instance_yields_none() {
    assert_output("x = 1\nprint x.m()\n", "None\n");
}

#[test]
fn instances_are_shared_between_bindings() {
    let src = "class A:\n  def __init__(self):\n    self.n = 1\na = A()\nb = a\nb.n = 7\nprint \
               a.n\n";
    assert_output(src, "7\n");
}

#[test]
fn each_instantiation_is_fresh() {
    let src = "class A:\n  def __init__(self):\n    self.n = 0\na = A()\nb = A()\nb.n = 5\nprint \
               a.n\n";
    assert_output(src, "0\n");
}

#[test]
fn return_stops_the_method() {
    let src = "class A:\n  def m(self):\n    if 1:\n      return 10\n    return 20\na = \
               A()\nprint a.m()\n";
    assert_output(src, "10\n");
}

#[test]
fn method_without_return_yields_none() {
    assert_output("class A:\n  def m(self):\n    x = 1\na = A()\nprint a.m()\n", "None\n");
}

#[test]
fn top_level_return_is_error() {
    assert_failure("return 1\n");
}

#[test]
fn add_dispatches_to_user_method() {
    let src = concat!("class N:\n",
                      "  def __init__(self, v):\n",
                      "    self.v = v\n",
                      "  def __add__(self, other):\n",
                      "    return self.v + other\n",
                      "n = N(40)\n",
                      "print n + 2\n");
    assert_output(src, "42\n");
}

#[test]
fn eq_dispatch_and_derived_inequality() {
    let src = "class A:\n  def __eq__(self, other):\n    return True\na = A()\nb = A()\nprint a \
               == b\nprint a != b\n";
    assert_output(src, "True\nFalse\n");
}

#[test]
fn lt_alone_cannot_serve_less_or_equal() {
    let head = "class A:\n  def __lt__(self, other):\n    return True\na = A()\nb = A()\n";
    assert_output(&format!("{head}print a < b\n"), "True\n");
    assert_failure(&format!("{head}print a <= b\n"));
}

#[test]
fn missing_method_and_wrong_arity_are_errors() {
    let head = "class A:\n  def m(self):\n    return 1\na = A()\n";
    assert_failure(&format!("{head}print a.n()\n"));
    assert_failure(&format!("{head}print a.m(1)\n"));
}

#[test]
fn constructor_arguments_are_skipped_without_matching_init() {
    assert_output("class A:\n  def m(self):\n    return 1\na = A(5)\nprint a.m()\n", "1\n");
}

#[test]
fn str_builtin_converts_values() {
    assert_output("print str(42) + '!'\n", "42!\n");
    assert_output("print str(None)\n", "None\n");
    let src = "class A:\n  def __str__(self):\n    return 'obj'\na = A()\nprint str(a) + '!'\n";
    assert_output(src, "obj!\n");
}

#[test]
fn classes_print_by_name() {
    assert_output("class A:\n  def m(self):\n    return 1\nprint A\n", "Class A\n");
}

#[test]
fn method_calls_chain_on_results() {
    let src = "class C:\n  def __init__(self):\n    self.n = 0\n  def inc(self):\n    self.n = \
               self.n + 1\n    return self\n  def value(self):\n    return self.n\nc = C()\nprint \
               c.inc().inc().value()\n";
    assert_output(src, "2\n");
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_output("x = 1  # bind x\n\n# standalone comment\nprint x\n", "1\n");
}

#[test]
fn syntax_errors_are_reported() {
    assert_failure("if x\n  print 1\n");
    assert_failure("print 'unterminated\n");
    assert_failure("def f(self):\n  return 1\n");
    assert_failure("a = B()\n");
    assert_failure("class B(Missing):\n  def m(self):\n    return 1\n");
    assert_failure("class A:\n  def m(route):\n    return 1\n");
}

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "pyr")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_to_string(&source) {
            panic!("Demo script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
