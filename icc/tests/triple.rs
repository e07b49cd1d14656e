use icc::emit::triple::{Scheduler, TripleEmitter};
use icc::grammer;
use icc::{Backend, Error};
use ir::{Operator, Ref};

fn triples(code: &str, dest: &str) -> Result<Vec<(String, String, String)>, Error> {
    let tree = grammer::parse(code, false)?;
    let triples = TripleEmitter::new().emit(&tree, dest)?;
    for (idx, triple) in triples.iter().enumerate() {
        println!("[{}] {}", idx, triple);
    }
    Ok(triples.iter().map(|t| t.fields()).collect())
}

fn assert(code: &str, expects: Vec<(&str, &str, &str)>) {
    let expects: Vec<(String, String, String)> = expects
        .into_iter()
        .map(|(op, a1, a2)| (op.into(), a1.into(), a2.into()))
        .collect();
    assert_eq!(triples(code, "$x").unwrap(), expects);
}

macro_rules! case {
    ($name:ident, $code:expr, $expects:expr) => {
        #[test]
        fn $name() {
            assert($code, $expects);
        }
    };
}

case!(
    mul_then_add,
    "3+4*5",
    vec![("*", "4", "5"), ("+", "3", "[0]"), ("=", "$x", "[1]")]
);
case!(single_leaf, "7", vec![("=", "$x", "7")]);
case!(
    tie_broken_by_inorder,
    "3*4+5*6",
    vec![
        ("*", "3", "4"),
        ("*", "5", "6"),
        ("+", "[0]", "[1]"),
        ("=", "$x", "[2]"),
    ]
);
case!(
    precedence_beats_position,
    "1+2+3*4",
    vec![
        ("*", "3", "4"),
        ("+", "1", "2"),
        ("+", "[1]", "[0]"),
        ("=", "$x", "[2]"),
    ]
);
case!(
    grouped_additive_first,
    "(1+2)*3",
    vec![("+", "1", "2"), ("*", "[0]", "3"), ("=", "$x", "[1]")]
);
case!(
    chained_sub,
    "8-3-2",
    vec![("-", "8", "3"), ("-", "[0]", "2"), ("=", "$x", "[1]")]
);
case!(
    pow_first,
    "2^3*4-1",
    vec![
        ("^", "2", "3"),
        ("*", "[0]", "4"),
        ("-", "[1]", "1"),
        ("=", "$x", "[2]"),
    ]
);
case!(
    pow_before_earlier_mul,
    "$a*$b+$c^2",
    vec![
        ("^", "$c", "2"),
        ("*", "$a", "$b"),
        ("+", "[1]", "[0]"),
        ("=", "$x", "[2]"),
    ]
);

#[test]
fn scheduler_order() {
    // 1(0) +(1) 2(2) +(3) 3(4) *(5) 4(6)
    let tree = grammer::parse("1+2+3*4", false).unwrap();
    let mut scheduler = Scheduler::new(&tree).unwrap();
    assert_eq!(scheduler.ready(), vec![5, 1]);

    let first = scheduler.next(0).unwrap();
    assert_eq!(first.to_string(), "(*, 3, 4)");
    assert_eq!(scheduler.origin(0), Some(5));
    assert_eq!(scheduler.ready(), vec![1]);

    scheduler.next(1).unwrap();
    assert_eq!(scheduler.ready(), vec![3]);
    scheduler.next(2).unwrap();
    assert!(scheduler.is_done());
    assert_eq!(scheduler.result().unwrap(), Ref::At(2));
    assert_eq!(scheduler.origin(2), Some(3));
}

#[test]
fn scheduler_on_leaf() {
    let tree = grammer::parse("$y", false).unwrap();
    let scheduler = Scheduler::new(&tree).unwrap();
    assert!(scheduler.is_done());
    assert!(scheduler.ready().is_empty());
    assert_eq!(scheduler.result().unwrap(), Ref::Lit("$y".to_string()));
}

#[test]
fn exhausted_scheduler_reports_invariant() {
    let tree = grammer::parse("7", false).unwrap();
    let mut scheduler = Scheduler::new(&tree).unwrap();
    assert!(matches!(
        scheduler.next(0),
        Err(Error::InternalInvariantViolation(_))
    ));
}

#[test]
fn root_is_unsupported() {
    let err = triples("1+√4", "$x").unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedOperator(Operator::Root, Backend::Triple)
    ));
}
