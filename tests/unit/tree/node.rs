use super::*;

#[test]
fn seed_is_log_of_y_and_x() {
    let seed = Expr::seed();
    assert_eq!(
        seed,
        Expr::Operator {
            op: Op::Log,
            left: Some(Box::new(Expr::Variable(Var::Y))),
            right: Some(Box::new(Expr::Variable(Var::X))),
        }
    );
    assert!(seed.is_well_formed());
    assert_eq!(seed.node_count(), 3);
    assert_eq!(seed.depth(), 1);
}

#[test]
fn reset_seed_is_a_single_zero() {
    assert_eq!(Expr::reset_seed(), Expr::Number(0.0));
}

#[test]
fn binary_operator_needs_both_children() {
    assert!(!Expr::operator(Op::Add, None, Some(Expr::number(1.0))).is_well_formed());
    assert!(!Expr::operator(Op::Add, Some(Expr::number(1.0)), None).is_well_formed());
    assert!(Expr::binary(Op::Add, Expr::number(1.0), Expr::number(2.0)).is_well_formed());
}

#[test]
fn unary_operator_needs_only_right() {
    assert!(Expr::unary(Op::Sin, Expr::variable(Var::X)).is_well_formed());
    assert!(!Expr::operator(Op::Sin, Some(Expr::number(1.0)), None).is_well_formed());
}

#[test]
fn well_formedness_is_checked_recursively() {
    let bad_inner = Expr::operator(Op::Mul, None, None);
    let tree = Expr::vector(Expr::number(0.1), bad_inner, Expr::number(0.3));
    assert!(!tree.is_well_formed());

    let unread_left = Expr::operator(
        Op::Abs,
        Some(Expr::operator(Op::Add, None, None)),
        Some(Expr::number(1.0)),
    );
    assert!(!unread_left.is_well_formed());
}

#[test]
fn depth_and_count_cover_every_variant() {
    let tree = Expr::binary(
        Op::Add,
        Expr::vector(
            Expr::number(0.1),
            Expr::unary(Op::Cos, Expr::variable(Var::Y)),
            Expr::number(0.3),
        ),
        Expr::variable(Var::X),
    );
    assert_eq!(tree.node_count(), 7);
    assert_eq!(tree.depth(), 3);
}

#[test]
fn destroy_reports_freed_nodes() {
    let tree = Expr::vector(Expr::number(10.0), Expr::number(20.0), Expr::number(30.0));
    assert_eq!(tree.destroy(), 4);
}
