use icc::emit::PcodeEmitter;
use icc::grammer;
use icc::Assignment;

fn assert(stmt: &str, expects: Vec<&str>) {
    let assign = Assignment::parse(stmt);
    let tree = grammer::parse(&assign.rhs, false).unwrap();
    let dest = assign.dest.unwrap();
    let insts = PcodeEmitter::new().emit(&tree, &dest).unwrap();
    let lines: Vec<String> = insts.iter().map(|i| i.to_string()).collect();
    for line in &lines {
        println!("{}", line);
    }
    assert_eq!(lines, expects);
}

macro_rules! case {
    ($name:ident, $stmt:expr, $expects:expr) => {
        #[test]
        fn $name() {
            assert($stmt, $expects);
        }
    };
}

case!(
    mul_first_under_add,
    "$x=3+4*5",
    vec!["lda x", "ldc 4", "ldc 5", "mpi", "ldc 3", "adi", "sto"]
);
case!(single_leaf, "$x=7", vec!["lda x", "ldc 7", "sto"]);
case!(
    variables,
    "$y=$a+$b",
    vec!["lda y", "lod a", "lod b", "adi", "sto"]
);
case!(
    left_already_tighter,
    "$x=4*5+3",
    vec!["lda x", "ldc 4", "ldc 5", "mpi", "ldc 3", "adi", "sto"]
);
case!(
    sub_keeps_order,
    "$x=3-4*5",
    vec!["lda x", "ldc 3", "ldc 4", "ldc 5", "mpi", "sbi", "sto"]
);
case!(
    grouped_left_loses,
    "$x=(1+2)+3*4",
    vec![
        "lda x", "ldc 3", "ldc 4", "mpi", "ldc 1", "ldc 2", "adi", "adi", "sto",
    ]
);
case!(
    nested_group_on_right,
    "$x=1+2*(3+4)",
    vec![
        "lda x", "ldc 2", "ldc 3", "ldc 4", "adi", "mpi", "ldc 1", "adi", "sto",
    ]
);
case!(
    deep_precedence_decides,
    "$x=(1+2)+(3+4*5)",
    vec![
        "lda x", "ldc 4", "ldc 5", "mpi", "ldc 3", "adi", "ldc 1", "ldc 2", "adi", "adi", "sto",
    ]
);
case!(
    division,
    "$x=$a/2",
    vec!["lda x", "lod a", "ldc 2", "div", "sto"]
);
case!(
    power,
    "$p=2^.5",
    vec!["lda p", "ldc 2", "ldc .5", "exp", "sto"]
);
case!(
    power_spelled_twice,
    "$p=2**3",
    vec!["lda p", "ldc 2", "ldc 3", "exp", "sto"]
);
case!(
    square_root,
    "$r=√($a*$a+16)",
    vec![
        "lda r", "lod a", "lod a", "mpi", "ldc 16", "adi", "ldc 0.5", "exp", "sto",
    ]
);
case!(
    decimals_verbatim,
    "$x=12.+.5",
    vec!["lda x", "ldc 12.", "ldc .5", "adi", "sto"]
);
case!(bare_destination, "x=1", vec!["lda x", "ldc 1", "sto"]);
