use super::*;
use std::f64::consts::E;

fn num(v: f64) -> Expr {
    Expr::number(v)
}

fn at(x: f64, y: f64, channel: Channel) -> EvalCtx {
    EvalCtx::new(x, y, channel)
}

#[test]
fn number_ignores_coordinates_and_channel() {
    let n = num(0.42);
    for ch in Channel::ALL {
        for (x, y) in [(-1.0, -1.0), (0.0, 0.5), (1.0, 1.0)] {
            assert_eq!(evaluate(&n, &at(x, y, ch)), 0.42);
        }
    }
}

#[test]
fn variables_read_their_axis() {
    for ch in Channel::ALL {
        let ctx = at(0.25, -0.75, ch);
        assert_eq!(evaluate(&Expr::variable(Var::X), &ctx), 0.25);
        assert_eq!(evaluate(&Expr::variable(Var::Y), &ctx), -0.75);
    }
}

#[test]
fn vector_selects_channel_slot() {
    let v = Expr::vector(num(10.0), num(20.0), num(30.0));
    for (x, y) in [(-1.0, 0.3), (0.9, -0.2)] {
        assert_eq!(evaluate(&v, &at(x, y, Channel::Red)), 10.0);
        assert_eq!(evaluate(&v, &at(x, y, Channel::Green)), 20.0);
        assert_eq!(evaluate(&v, &at(x, y, Channel::Blue)), 30.0);
    }
}

#[test]
fn vector_ignores_unselected_slots() {
    let a = Expr::vector(num(1.0), Expr::variable(Var::X), num(3.0));
    let b = Expr::vector(
        Expr::binary(Op::Div, num(1.0), num(0.0)),
        Expr::variable(Var::X),
        Expr::unary(Op::Log, num(-1.0)),
    );
    let ctx = at(0.6, 0.1, Channel::Green);
    assert_eq!(evaluate(&a, &ctx), evaluate(&b, &ctx));

    let mut visited = 0;
    evaluate_observed(&b, &ctx, &mut |_: &Expr| visited += 1);
    assert_eq!(visited, 2);
}

#[test]
fn binary_operands_are_visited_once_left_first() {
    let tree = Expr::binary(Op::Sub, num(5.0), num(3.0));
    let mut order = Vec::new();
    let v = evaluate_observed(&tree, &at(0.0, 0.0, Channel::Red), &mut |n: &Expr| {
        if let Expr::Number(v) = n {
            order.push(*v);
        }
    });
    assert_eq!(v, 2.0);
    assert_eq!(order, vec![5.0, 3.0]);
}

#[test]
fn unary_operators_never_read_left() {
    let tree = Expr::binary(Op::Abs, num(99.0), num(-4.0));
    let mut seen = Vec::new();
    let v = evaluate_observed(&tree, &at(0.0, 0.0, Channel::Blue), &mut |n: &Expr| {
        if let Expr::Number(v) = n {
            seen.push(*v);
        }
    });
    assert_eq!(v, 4.0);
    assert_eq!(seen, vec![-4.0]);
}

#[test]
fn arithmetic_follows_ieee() {
    let ctx = at(0.0, 0.0, Channel::Red);
    let eval = |op, l, r| evaluate(&Expr::binary(op, num(l), num(r)), &ctx);
    assert_eq!(eval(Op::Add, 1.5, 2.0), 3.5);
    assert_eq!(eval(Op::Mul, 1.5, 2.0), 3.0);
    assert_eq!(eval(Op::Div, 1.0, 0.0), f64::INFINITY);
    assert!(eval(Op::Div, 0.0, 0.0).is_nan());
    assert_eq!(eval(Op::Mod, 7.5, 2.0), 1.5);
    assert_eq!(eval(Op::Mod, -7.5, 2.0), -1.5);
    assert_eq!(eval(Op::Min, 0.2, 0.7), 0.2);
    assert_eq!(eval(Op::Max, 0.2, 0.7), 0.7);
}

#[test]
fn min_max_keep_nan_on_the_left_only() {
    let ctx = at(-1.0, 0.0, Channel::Red);
    let nan_left = |op| {
        let log_neg = Expr::unary(Op::Log, Expr::variable(Var::X));
        evaluate(&Expr::binary(op, log_neg, num(0.5)), &ctx)
    };
    assert!(nan_left(Op::Min).is_nan());
    assert!(nan_left(Op::Max).is_nan());

    let nan_right = |op| evaluate(&Expr::binary(op, num(0.5), num(f64::NAN)), &ctx);
    assert_eq!(nan_right(Op::Min), 0.5);
    assert_eq!(nan_right(Op::Max), 0.5);
}

#[test]
fn bitwise_operators_mangle_bit_patterns() {
    let ctx = at(0.0, 0.0, Channel::Red);
    let (l, r) = (0.37, -12.5);
    let eval = |op| evaluate(&Expr::binary(op, num(l), num(r)), &ctx).to_bits();
    assert_eq!(eval(Op::And), l.to_bits() & r.to_bits());
    assert_eq!(eval(Op::Or), l.to_bits() | r.to_bits());
    assert_eq!(eval(Op::Xor), l.to_bits() ^ r.to_bits());
}

#[test]
fn invert_twice_restores_bits() {
    let ctx = at(0.0, 0.0, Channel::Red);
    for v in [0.0, 0.37, -2.5, 1e300, f64::MIN_POSITIVE] {
        let once = evaluate(&Expr::unary(Op::Invert, num(v)), &ctx);
        assert_eq!(once.to_bits(), !v.to_bits());
        let twice = evaluate(
            &Expr::unary(Op::Invert, Expr::unary(Op::Invert, num(v))),
            &ctx,
        );
        assert_eq!(twice.to_bits(), v.to_bits());
    }
}

#[test]
fn unary_functions_match_definitions() {
    let ctx = at(0.0, 0.0, Channel::Red);
    let eval = |op, v| evaluate(&Expr::unary(op, num(v)), &ctx);
    assert_eq!(eval(Op::Abs, -0.5), 0.5);
    assert_eq!(eval(Op::Round, 2.5), 3.0);
    assert_eq!(eval(Op::Round, -2.5), -3.0);
    assert_eq!(eval(Op::Expt, 0.0), 1.0);
    assert_eq!(eval(Op::Log, 0.0), f64::NEG_INFINITY);
    assert!(eval(Op::Log, -1.0).is_nan());
    assert_eq!(eval(Op::Sin, 0.0), 0.5);
    assert_eq!(eval(Op::Cos, 0.0), 1.0);
    assert_eq!(eval(Op::ATan, 0.0), 0.0);
    assert!((eval(Op::Sin, 0.1) - ((1.2f64).sin() + 1.0) / 2.0).abs() < 1e-15);
    assert!(eval(Op::ATan, 1.0) > 1.0);
}

#[test]
fn seed_log_reads_x_only() {
    let seed = Expr::seed();
    for ch in Channel::ALL {
        assert_eq!(evaluate(&seed, &at(1.0, E, ch)), 0.0);
    }
}

#[test]
fn missing_operand_yields_nan() {
    let tree = Expr::operator(Op::Add, Some(num(1.0)), None);
    assert!(evaluate(&tree, &at(0.0, 0.0, Channel::Red)).is_nan());
}

#[test]
fn evaluate_rgb_resolves_each_slot() {
    let v = Expr::vector(num(0.1), Expr::variable(Var::Y), Expr::variable(Var::X));
    assert_eq!(evaluate_rgb(&v, FragCoord::new(0.3, 0.6)), [0.1, 0.6, 0.3]);
}
