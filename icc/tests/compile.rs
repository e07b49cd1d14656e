use icc::source::{statements, Stmt};
use icc::{Assignment, Backend, Compiler, Config, Error, ErrorKind, Listing};

#[test]
fn assignment_parse() {
    let assign = Assignment::parse("$x = 3+4*5");
    assert_eq!(assign.dest.as_deref(), Some("$x"));
    assert_eq!(assign.rhs, " 3+4*5");
    assert_eq!(assign.offset, 4);

    let assign = Assignment::parse("3+4");
    assert_eq!(assign.dest, None);
    assert_eq!(assign.rhs, "3+4");
    assert_eq!(assign.offset, 0);
}

#[test]
fn error_column_lands_on_statement() {
    let stmt = "$x = 3 % 4";
    let assign = Assignment::parse(stmt);
    let err = Compiler::default()
        .compile(&assign, Backend::Quad)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lexical);
    let col = err.column().unwrap() + assign.offset;
    assert_eq!(stmt.chars().nth(col), Some('%'));
}

#[test]
fn destination_checks() {
    let compiler = Compiler::default();
    assert!(compiler.check_dest("$x").is_ok());
    assert!(compiler.check_dest("total").is_ok());
    for dest in ["", "3", "$x+1", "$1", "(x)"] {
        assert!(
            matches!(compiler.check_dest(dest), Err(Error::InvalidDestination(_))),
            "{:?} accepted",
            dest
        );
    }

    let strict = Compiler::new(Config {
        require_sigil: true,
        ..Config::default()
    });
    assert!(strict.check_dest("$x").is_ok());
    assert!(strict.check_dest("x").is_err());
}

#[test]
fn expression_without_destination() {
    let compiler = Compiler::default();
    let assign = Assignment::parse("3+4*5");

    let listing = compiler.compile(&assign, Backend::Quad).unwrap();
    assert_eq!(listing.lines(), vec!["(*, 4, 5, v1)", "(+, 3, v1, v2)"]);

    for backend in [Backend::Triple, Backend::Pcode] {
        let err = compiler.compile(&assign, backend).unwrap_err();
        assert!(matches!(err, Error::MissingDestination(b) if b == backend));
        assert_eq!(err.kind(), ErrorKind::Statement);
    }
}

#[test]
fn listing_lines() {
    let compiler = Compiler::default();
    let assign = Assignment::parse("$x = 3+4*5");
    let listings = compiler.compile_all(&assign, &Backend::ALL).unwrap();
    assert_eq!(
        listings.iter().map(|l| l.backend()).collect::<Vec<_>>(),
        Backend::ALL.to_vec()
    );
    assert_eq!(
        listings[0].lines(),
        vec!["(*, 4, 5, v1)", "(+, 3, v1, v2)", "(=, v2, -, $x)"]
    );
    assert_eq!(
        listings[1].lines(),
        vec!["[0] *, 4, 5", "[1] +, 3, [0]", "[2] =, $x, [1]"]
    );
    assert_eq!(
        listings[2].lines(),
        vec!["lda x", "ldc 4", "ldc 5", "mpi", "ldc 3", "adi", "sto"]
    );
}

#[test]
fn one_backend_failing_keeps_the_others() {
    let compiler = Compiler::default();
    let assign = Assignment::parse("$r = √16");
    let results = compiler.compile_each(&assign, &Backend::ALL).unwrap();
    assert!(matches!(results[0], Err(Error::UnsupportedOperator(_, Backend::Quad))));
    assert!(matches!(results[1], Err(Error::UnsupportedOperator(_, Backend::Triple))));
    match &results[2] {
        Ok(Listing::Pcode(insts)) => assert_eq!(insts.len(), 5),
        other => panic!("unexpected {:?}", other),
    }
    assert!(compiler.compile_all(&assign, &Backend::ALL).is_err());
}

#[test]
fn front_end_errors_stop_the_statement() {
    let compiler = Compiler::default();
    let cases = [
        ("$x = (3+4", ErrorKind::UnbalancedBrackets),
        ("$x = 3+", ErrorKind::InvalidExpression),
        ("$x = ", ErrorKind::InvalidExpression),
        ("$x = 3 4", ErrorKind::InvalidExpression),
        ("$x = 3 & 4", ErrorKind::Lexical),
        ("3 = 4", ErrorKind::Statement),
    ];
    for (stmt, kind) in cases {
        let err = compiler
            .compile_each(&Assignment::parse(stmt), &Backend::ALL)
            .unwrap_err();
        assert_eq!(err.kind(), kind, "{}", stmt);
    }
}

#[test]
fn batch_isolation() {
    let code = "$a = 1+2\n$b = (3\n$c = 4*5\n";
    let compiler = Compiler::default();
    let results: Vec<bool> = statements(code)
        .iter()
        .map(|stmt| {
            compiler
                .compile_all(&Assignment::parse(&stmt.text), &Backend::ALL)
                .is_ok()
        })
        .collect();
    assert_eq!(results, vec![true, false, true]);
}

#[test]
fn split_statements() {
    let code = "\
# header comment
$x = 3+4*5; $y = $x*2   # trailing

  $z=1 ;;
";
    assert_eq!(
        statements(code),
        vec![
            Stmt { line: 1, text: "$x = 3+4*5".to_string() },
            Stmt { line: 1, text: "$y = $x*2".to_string() },
            Stmt { line: 3, text: "$z=1".to_string() },
        ]
    );
    assert!(statements("# nothing\n\n  ;\n").is_empty());
}

#[test]
fn double_slash_is_not_a_comment() {
    let stmts = statements("$x = 8//2;");
    assert_eq!(
        stmts,
        vec![Stmt { line: 0, text: "$x = 8//2".to_string() }]
    );
    let err = Compiler::default()
        .compile(&Assignment::parse(&stmts[0].text), Backend::Quad)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidExpression);
    assert!(matches!(err, Error::MissingOperand(ir::Operator::Div, _)));
}

#[test]
fn config_yaml() {
    let config = Config::from_yaml("temp_prefix: t\nbackends: [pcode]\n").unwrap();
    assert_eq!(config.temp_prefix, "t");
    assert_eq!(config.placeholder, "-");
    assert!(!config.require_sigil);
    assert_eq!(config.backends, vec![Backend::Pcode]);

    assert_eq!(Config::from_yaml("{}").unwrap(), Config::default());
    assert!(Config::from_yaml("backends: [asm]").is_err());

    let compiler = Compiler::new(Config::from_yaml("temp_prefix: t\nplaceholder: _\n").unwrap());
    let listing = compiler
        .compile(&Assignment::parse("$x = 1*2"), Backend::Quad)
        .unwrap();
    assert_eq!(listing.lines(), vec!["(*, 1, 2, t1)", "(=, t1, _, $x)"]);
}

#[test]
fn missing_config_file() {
    let err = Config::load("does/not/exist.yaml").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.kind(), ErrorKind::Driver);
}
