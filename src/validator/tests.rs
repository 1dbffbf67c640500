//! Unit tests for the construct checkers and the two passes.

use std::rc::Rc;

use crate::{
    errors::errors::{ErrorImpl, ErrorKind},
    preprocess,
    symbols::{scope_stack::ScopeKind, types::VarType, variable::VariableStatus},
};

use super::{
    assignment::check_assignment,
    condition::check_condition,
    declaration::check_declaration,
    method::{check_method_call, check_method_declaration, parse_method_header},
    prescan::{find_method_end, prescan},
    registry::MethodSignature,
    validator::{validate, validate_line, Pass, Validator},
};

fn file() -> Rc<String> {
    Rc::new(String::from("test.sjava"))
}

/// A main-pass validator with one method body open.
fn in_method() -> Validator {
    let mut validator = Validator::new(file());
    validator.pass = Pass::Main;
    validator.enter_block(ScopeKind::Method);
    validator
}

fn kind_of(source: &str) -> Option<ErrorKind> {
    validate(&preprocess(source), file()).err().map(|error| error.kind())
}

#[test]
fn test_valid_int_declarations() {
    let lines = [
        "int e = 5;",
        "int f = 3, g = 4, h;",
        "int _underscore;",
        "int _a, b_c, _123;",
        "int x = +2, y = 0;",
        "int f1, g1 = 42, h2 = 100;",
        "int i, j = -10, k = +15;",
        "int m1, n2, o3 = 3, p4;",
        "int a = 0, b = 0, c = 0;",
    ];

    for line in lines {
        let mut validator = in_method();
        assert!(check_declaration(&mut validator, line).is_ok(), "{}", line);
    }
}

#[test]
fn test_invalid_int_declarations() {
    let lines = [
        "int 1;",
        "int 2, 3, 4;",
        "int 5 = 5;",
        "int ;",
        "int a,, b;",
        "int a =;",
        "int a = 1.5;",
        "int a b;",
        "int a = 1, b,;",
        "int a = 3 + 2;",
        "int a = , b;",
        "int a = 'c';",
        "int a = true;",
        "int a = \"hello\";",
        "int @invalid;",
        "int ,;",
    ];

    for line in lines {
        let mut validator = in_method();
        assert!(check_declaration(&mut validator, line).is_err(), "{}", line);
    }
}

#[test]
fn test_other_type_declarations() {
    let valid = [
        "double pi = 3.14;",
        "double x = +1.0, y = 0.0, z = 5, w = .5, v = 5.;",
        "String greeting = \"Hello World!\";",
        "String empty = \"\";",
        "String hashtag = \"i%#\";",
        "char grade = 'A', symbol = '#';",
        "boolean t = true, f = false, n = 3, d = -2.5;",
    ];
    for line in valid {
        let mut validator = in_method();
        assert!(check_declaration(&mut validator, line).is_ok(), "{}", line);
    }

    let invalid = [
        "double a = 3.14.15;",
        "double a = 'c';",
        "double a = true;",
        "String a = \"Unclosed string;",
        "String a = 123;",
        "char c = 'ab';",
        "char c = ',';",
        "boolean b = 'c';",
        "float f = 1.0;",
    ];
    for line in invalid {
        let mut validator = in_method();
        assert!(check_declaration(&mut validator, line).is_err(), "{}", line);
    }
}

#[test]
fn test_literal_of_other_type_is_type_mismatch() {
    let mut validator = in_method();
    let error = check_declaration(&mut validator, "int a = 1.5;").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::TypeMismatch);

    let error = check_declaration(&mut validator, "int b = 3 + 2;").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::SyntaxError);
}

#[test]
fn test_declaration_binds_left_to_right() {
    let mut validator = in_method();
    check_declaration(&mut validator, "int a = 1, b = a;").unwrap();
    assert!(validator.symbol_table.is_assigned("b"));

    let error = check_declaration(&mut validator, "int c, d = c;").unwrap_err();
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::VariableNotAssigned { .. }
    ));
}

#[test]
fn test_final_declarations() {
    let mut validator = in_method();
    check_declaration(&mut validator, "final double rate = 2;").unwrap();

    let rate = validator.symbol_table.lookup("rate").unwrap();
    assert_eq!(rate.status, VariableStatus::Final);
    assert_eq!(rate.var_type, VarType::Double);

    let error = check_declaration(&mut validator, "final int limit;").unwrap_err();
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::FinalWithoutValue { .. }
    ));
}

#[test]
fn test_redeclaration_in_same_frame() {
    let mut validator = in_method();
    check_declaration(&mut validator, "int a;").unwrap();

    let error = check_declaration(&mut validator, "double a;").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::DuplicateDeclaration);

    validator.enter_block(ScopeKind::If);
    assert!(check_declaration(&mut validator, "double a = 1.0;").is_ok());
}

fn assignment_fixture() -> Validator {
    let mut validator = in_method();
    for line in [
        "int x;",
        "double y;",
        "String text;",
        "boolean flag;",
        "char letter;",
        "final int finalX = 1;",
        "final double finalY = 1.5;",
        "final String finalText = \"a\";",
        "final boolean finalFlag = true;",
        "final char finalLetter = 'a';",
    ] {
        check_declaration(&mut validator, line).unwrap();
    }
    validator
}

#[test]
fn test_valid_assignments() {
    let mut validator = assignment_fixture();

    // Later lines read variables assigned by earlier ones.
    let lines = [
        "x = 5;",
        "y = 3.14;",
        "text = \"Hello World!\";",
        "flag = true;",
        "letter = 'Z';",
        "x = x;",
        "y = x;",
        "flag = flag;",
        "flag = 3.14;",
        "text = text;",
        "letter = 'A';",
        "y = finalX;",
        "flag = 1;",
        "x = 1, y = 2.5;",
    ];

    for line in lines {
        assert!(check_assignment(&mut validator, line).is_ok(), "{}", line);
    }
}

#[test]
fn test_invalid_assignments() {
    let mut validator = assignment_fixture();
    for line in ["x = 1;", "y = 1.0;", "text = \"a\";", "flag = true;", "letter = 'a';"] {
        check_assignment(&mut validator, line).unwrap();
    }

    let lines = [
        ("z = 10;", ErrorKind::UndeclaredVariable),
        ("x = \"string\";", ErrorKind::TypeMismatch),
        ("y = true;", ErrorKind::TypeMismatch),
        ("text = 42;", ErrorKind::TypeMismatch),
        ("letter = \"A\";", ErrorKind::TypeMismatch),
        ("x = finalY;", ErrorKind::TypeMismatch),
        ("x = flag;", ErrorKind::TypeMismatch),
        ("y = letter;", ErrorKind::TypeMismatch),
        ("letter = letter + 1;", ErrorKind::SyntaxError),
        ("text = x;", ErrorKind::TypeMismatch),
        ("x = ;", ErrorKind::SyntaxError),
        ("x 5;", ErrorKind::SyntaxError),
    ];

    for (line, kind) in lines {
        let error = check_assignment(&mut validator, line).unwrap_err();
        assert_eq!(error.kind(), kind, "{}", line);
    }
}

#[test]
fn test_final_reassignment_ignores_value() {
    let mut validator = assignment_fixture();

    for line in [
        "finalX = 10;",
        "finalY = 3.14;",
        "finalText = \"World\";",
        "finalFlag = false;",
        "finalLetter = 'B';",
        "finalText = finalX;",
        "finalX = finalX + 1;",
        "finalX = undeclared;",
    ] {
        let error = check_assignment(&mut validator, line).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::FinalReassignment, "{}", line);
    }
}

#[test]
fn test_assignment_stays_visible_after_block() {
    let mut validator = in_method();
    check_declaration(&mut validator, "int a;").unwrap();

    validator.enter_block(ScopeKind::While);
    check_assignment(&mut validator, "a = 3;").unwrap();
    validator.exit_block().unwrap();

    assert!(validator.symbol_table.is_assigned("a"));
}

#[test]
fn test_valid_conditions() {
    let mut validator = in_method();
    check_declaration(&mut validator, "int i = 1;").unwrap();
    check_declaration(&mut validator, "double d = 1.5;").unwrap();
    check_declaration(&mut validator, "boolean b = true;").unwrap();

    let lines = [
        "while (true) {",
        "while(false){",
        "if (i) {",
        "if (d || b) {",
        "while (b && i || -3.5) {",
        "if (1 && 2.0 && .5) {",
        "while (true||false&&b) {",
    ];

    for line in lines {
        let depth = validator.scope_stack.depth();
        assert!(
            check_condition(&mut validator, line, ScopeKind::While).is_ok(),
            "{}",
            line
        );
        assert_eq!(validator.scope_stack.depth(), depth + 1);
    }
}

#[test]
fn test_invalid_conditions() {
    let mut validator = in_method();
    check_declaration(&mut validator, "int unset;").unwrap();
    check_declaration(&mut validator, "String s = \"a\";").unwrap();
    check_declaration(&mut validator, "char c = 'a';").unwrap();

    let lines = [
        ("while () {", ErrorKind::SyntaxError),
        ("while (true ||) {", ErrorKind::SyntaxError),
        ("while (&& true) {", ErrorKind::SyntaxError),
        ("while (true | false) {", ErrorKind::SyntaxError),
        ("while (true false) {", ErrorKind::SyntaxError),
        ("while (\"text\") {", ErrorKind::SyntaxError),
        ("while (true) ", ErrorKind::SyntaxError),
        ("while (missing) {", ErrorKind::UndeclaredVariable),
        ("while (unset) {", ErrorKind::UndeclaredVariable),
        ("while (s) {", ErrorKind::TypeMismatch),
        ("while (true && c) {", ErrorKind::TypeMismatch),
    ];

    for (line, kind) in lines {
        let error = check_condition(&mut validator, line, ScopeKind::While).unwrap_err();
        assert_eq!(error.kind(), kind, "{}", line);
    }
}

#[test]
fn test_condition_outside_method() {
    let mut validator = Validator::new(file());
    let error = check_condition(&mut validator, "if (true) {", ScopeKind::If).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::ScopeError);
}

#[test]
fn test_parse_method_header() {
    let position = crate::Position(1, file());
    let header = parse_method_header("void validMethod(int a, final double b) {", &position).unwrap();

    assert_eq!(header.name, "validMethod");
    assert_eq!(
        header.signature(),
        MethodSignature {
            name: String::from("validMethod"),
            parameters: vec![VarType::Int, VarType::Double],
        }
    );
    assert!(header.parameters[1].is_final);

    assert!(parse_method_header("void empty() {", &position)
        .unwrap()
        .parameters
        .is_empty());

    for line in [
        "void invalidMethod(int a string b) {",
        "void badParams(int param1, double 123bad) {",
        "void badType(float a) {",
        "void 1bad() {",
        "void trailing(int a,) {",
    ] {
        assert!(parse_method_header(line, &position).is_err(), "{}", line);
    }
}

fn registered(signatures: &[(&str, Vec<VarType>)]) -> Validator {
    let mut validator = in_method();
    let position = validator.position.clone();
    for (name, parameters) in signatures {
        validator
            .registry
            .register(
                MethodSignature {
                    name: name.to_string(),
                    parameters: parameters.clone(),
                },
                &position,
            )
            .unwrap();
    }
    validator
}

#[test]
fn test_method_calls() {
    let mut validator = registered(&[
        ("testEmptyMethod", vec![]),
        ("testMethod", vec![VarType::Int, VarType::Boolean]),
        ("takesDouble", vec![VarType::Double]),
    ]);
    check_declaration(&mut validator, "int n = 4;").unwrap();

    assert!(check_method_call(&mut validator, "testEmptyMethod();").is_ok());
    assert!(check_method_call(&mut validator, "testMethod(123, true);").is_ok());
    assert!(check_method_call(&mut validator, "testMethod(n, 2.5);").is_ok());
    assert!(check_method_call(&mut validator, "takesDouble(n);").is_ok());

    let calls = [
        ("testEmptyMethod(123, true);", ErrorKind::ArityMismatch),
        ("nonExistentMethod(123, true);", ErrorKind::UndeclaredVariable),
        ("testMethod(123);", ErrorKind::ArityMismatch),
        ("testMethod(123, \"string\");", ErrorKind::TypeMismatch),
        ("testMethod(unknown, true);", ErrorKind::UndeclaredVariable),
        ("testMethod(1,, true);", ErrorKind::SyntaxError),
    ];

    for (line, kind) in calls {
        let error = check_method_call(&mut validator, line).unwrap_err();
        assert_eq!(error.kind(), kind, "{}", line);
    }
}

#[test]
fn test_argument_error_names_position() {
    let mut validator = registered(&[("pair", vec![VarType::Int, VarType::Char])]);
    let error = check_method_call(&mut validator, "pair(1, 2);").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::ArgumentTypeMatchError {
            method: String::from("pair"),
            index: 2,
            expected: String::from("char"),
            received: String::from("int"),
        }
    );
}

#[test]
fn test_method_declaration() {
    let mut validator = Validator::new(file());
    validator.pass = Pass::Main;
    let position = validator.position.clone();
    validator
        .registry
        .register(
            MethodSignature {
                name: String::from("f"),
                parameters: vec![VarType::Int, VarType::String],
            },
            &position,
        )
        .unwrap();

    check_method_declaration(&mut validator, "void f(int a, final String b) {").unwrap();
    assert!(validator.scope_stack.in_method());
    assert!(validator.symbol_table.is_assigned("a"));
    assert_eq!(
        validator.symbol_table.lookup("b").unwrap().status,
        VariableStatus::Final
    );

    let error = check_method_declaration(&mut validator, "void f(int a, final String b) {").unwrap_err();
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::NestedMethod { .. }
    ));
}

#[test]
fn test_method_declaration_errors() {
    let mut validator = Validator::new(file());
    let error = check_method_declaration(&mut validator, "void ghost() {").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::StructuralMethodError);

    let position = validator.position.clone();
    validator
        .registry
        .register(
            MethodSignature {
                name: String::from("twice"),
                parameters: vec![VarType::Int, VarType::Int],
            },
            &position,
        )
        .unwrap();

    let error = check_method_declaration(&mut validator, "void twice(int a, int a) {").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::DuplicateDeclaration);
}

#[test]
fn test_validate_line_dispatch() {
    let mut validator = in_method();

    assert!(validate_line(&mut validator, "    return;").is_ok());
    assert!(validate_line(&mut validator, "return ;").is_ok());
    assert_eq!(
        validate_line(&mut validator, "return 5;").unwrap_err().kind(),
        ErrorKind::SyntaxError
    );
    assert_eq!(
        validate_line(&mut validator, "int a = 5").unwrap_err().kind(),
        ErrorKind::SyntaxError
    );
    assert_eq!(
        validate_line(&mut validator, "true;").unwrap_err().kind(),
        ErrorKind::SyntaxError
    );

    assert!(validate_line(&mut validator, "}").is_ok());
    assert_eq!(
        validate_line(&mut validator, "}").unwrap_err().kind(),
        ErrorKind::ScopeError
    );
    assert_eq!(
        validate_line(&mut validator, "return;").unwrap_err().kind(),
        ErrorKind::ScopeError
    );
}

#[test]
fn test_find_method_end() {
    let lines = preprocess(
        "void nestedBracketsMethod(int a) {\n    if (true) {\n        while (false) {\n// some logic\n        }\n    }\n    return;\n}\nint after;\n",
    );

    assert_eq!(find_method_end(&lines, 0), Some(6));
    assert_eq!(lines[6].number, 8);
    assert_eq!(find_method_end(&lines[..5], 0), None);
}

#[test]
fn test_prescan_registers_methods() {
    let lines = preprocess(
        "void validMethod(int a, double b) {\n    int x = 10;\n    return;\n}\nvoid other() {\nreturn;\n}\n",
    );
    let mut validator = Validator::new(file());
    prescan(&mut validator, &lines).unwrap();

    assert_eq!(validator.registry.len(), 2);
    assert_eq!(
        validator.registry.get("validMethod").unwrap().parameters,
        vec![VarType::Int, VarType::Double]
    );

    // Locals of a body are left to the main pass.
    assert!(!validator.symbol_table.is_declared("x"));
}

#[test]
fn test_prescan_structure_errors() {
    let missing_return = "void noReturnMethod(int a) {\n    int x = 20;\n}\n";
    let error = validate(&preprocess(missing_return), file()).unwrap_err();
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::MissingReturn { .. }
    ));
    assert_eq!(error.get_position().0, 3);

    assert_eq!(kind_of("void empty() {\n}\n"), Some(ErrorKind::StructuralMethodError));

    let error = validate(&preprocess("int a;\nvoid open() {\nreturn;\n"), file()).unwrap_err();
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::UnclosedMethod { .. }
    ));
    assert_eq!(error.get_position().0, 2);

    assert_eq!(
        kind_of("void invalidMethod(int a string b) {\n    return;\n}\n"),
        Some(ErrorKind::SyntaxError)
    );
}

#[test]
fn test_prescan_seeds_globals() {
    let lines = preprocess("int a;\nvoid f() {\nint local = 1;\nreturn;\n}\na = 5;\n");
    let mut validator = Validator::new(file());
    prescan(&mut validator, &lines).unwrap();

    let global = validator.symbol_table.global("a").unwrap();
    assert!(global.is_global());
    assert!(global.is_assigned());
    assert!(validator.symbol_table.global("local").is_none());
}

#[test]
fn test_globals_usable_before_their_line() {
    let source = "void f() {\nint copy = later;\nreturn;\n}\nint later = 3;\n";
    assert_eq!(kind_of(source), None);
}

#[test]
fn test_global_assigned_in_method_is_visible_later() {
    let source = "int g;\nvoid set() {\ng = 1;\nreturn;\n}\nvoid get() {\nint copy = g;\nreturn;\n}\n";
    assert_eq!(kind_of(source), None);
}

#[test]
fn test_global_redeclaration() {
    assert_eq!(
        kind_of("int a;\ndouble a;\n"),
        Some(ErrorKind::DuplicateDeclaration)
    );
}

#[test]
fn test_block_locals_do_not_escape() {
    let source = "void f() {\nif (true) {\nint inner = 1;\n}\ninner = 2;\nreturn;\n}\n";
    assert_eq!(kind_of(source), Some(ErrorKind::UndeclaredVariable));

    let shadowed = "int inner;\nvoid f() {\nif (true) {\nint inner = 1;\n}\ninner = 2;\nreturn;\n}\n";
    assert_eq!(kind_of(shadowed), None);
}

#[test]
fn test_unclosed_block_inside_method() {
    let source = "void f() {\nwhile (true) {\nreturn;\n}\n";
    // The method's closing brace is taken by the while block.
    assert_eq!(kind_of(source), Some(ErrorKind::StructuralMethodError));
}
