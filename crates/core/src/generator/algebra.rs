use super::Draft;
use super::format::{gcd, linear_factor, signed_term};
use crate::dice::Dice;

pub(super) fn expand_brackets(dice: &mut Dice) -> Draft {
    let a = dice.range(2, 9);
    let b = dice.range(1, 12);
    let negative = dice.coin();
    build_expand_brackets(a, b, negative)
}

fn build_expand_brackets(a: i64, b: i64, negative: bool) -> Draft {
    let op = if negative { '-' } else { '+' };
    Draft::new(
        format!("Expand: {a}(x {op} {b})"),
        format!("{a}x{op}{}", a * b),
        format!("Multiply {a} by x, then {a} by {op}{b}."),
    )
}

pub(super) fn factorise_linear(dice: &mut Dice) -> Draft {
    let hcf = dice.range(2, 12);
    let x_coefficient = dice.range(1, 5);
    // Coprime inner terms keep `hcf` the highest common factor.
    let constant = loop {
        let candidate = dice.range(1, 9);
        if gcd(x_coefficient, candidate) == 1 {
            break candidate;
        }
    };
    build_factorise_linear(hcf, x_coefficient, constant)
}

fn build_factorise_linear(hcf: i64, x_coefficient: i64, constant: i64) -> Draft {
    let inner_x = if x_coefficient == 1 {
        "x".to_string()
    } else {
        format!("{x_coefficient}x")
    };
    Draft::new(
        format!(
            "Factorise: {}x + {}",
            hcf * x_coefficient,
            hcf * constant
        ),
        format!("{hcf}({inner_x}+{constant})"),
        format!("Highest Common Factor is {hcf}."),
    )
}

pub(super) fn solve_quadratics(dice: &mut Dice) -> Draft {
    let mut m = dice.range(-9, 9);
    if m == 0 {
        m = 1;
    }
    let n = dice.range(-9, 9);
    build_solve_quadratics(m, n)
}

/// `(x + m)(x + n) = 0`, roots `-m` and `-n`.
fn build_solve_quadratics(m: i64, n: i64) -> Draft {
    let sum = m + n;
    let product = m * n;
    let mut roots = [-m, -n];
    roots.sort_unstable();

    Draft::new(
        format!(
            "Solve: x²{}{} = 0 (separate with comma, smallest first)",
            signed_term(sum, "x"),
            signed_term(product, "")
        ),
        format!("{},{}", roots[0], roots[1]),
        format!(
            "Factorise to {}{}. Flip signs.",
            linear_factor(m),
            linear_factor(n)
        ),
    )
}

pub(super) fn completing_square(dice: &mut Dice) -> Draft {
    let a = dice.range(1, 10);
    let b = dice.range(1, 50);
    build_completing_square(a, b)
}

fn build_completing_square(a: i64, b: i64) -> Draft {
    let coefficient = 2 * a;
    let remainder = b - a * a;
    let sign = if remainder >= 0 { "+" } else { "" };
    Draft::new(
        format!("Write x² + {coefficient}x + {b} in the form (x+a)² + b"),
        format!("(x+{a})^2{sign}{remainder}"),
        format!(
            "Halve {coefficient} to get {a}. Square it ({}). Subtract that from {b}.",
            a * a
        ),
    )
}

pub(super) fn equating_coefficients(dice: &mut Dice) -> Draft {
    let a = dice.range(2, 5);
    let p = dice.range(1, 10);
    build_equating_coefficients(a, p)
}

fn build_equating_coefficients(a: i64, p: i64) -> Draft {
    Draft::new(
        format!("If {a}(x + p) ≡ {a}x + {}, find the value of p.", a * p),
        p.to_string(),
        format!(
            "Expand the left side: {a}x + {a}p. Therefore {a}p = {}.",
            a * p
        ),
    )
}
