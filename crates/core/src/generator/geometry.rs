use super::Draft;
use super::format::one_decimal;
use crate::dice::Dice;

const EXACT_TRIG: [(&str, &str); 6] = [
    ("sin(30)", "0.5"),
    ("cos(60)", "0.5"),
    ("tan(45)", "1"),
    ("sin(90)", "1"),
    ("cos(0)", "1"),
    ("sin(0)", "0"),
];

#[allow(clippy::cast_precision_loss)]
fn to_f64(value: i64) -> f64 {
    value as f64
}

pub(super) fn pythagoras(dice: &mut Dice) -> Draft {
    let a = dice.range(3, 12);
    let b = dice.range(4, 15);
    build_pythagoras(a, b)
}

fn build_pythagoras(a: i64, b: i64) -> Draft {
    let hypotenuse = to_f64(a).hypot(to_f64(b));
    Draft::new(
        format!("Right-angled triangle legs are {a} and {b}. Find Hypotenuse (round to 1 d.p.)"),
        one_decimal(hypotenuse),
        format!("sqrt({a}² + {b}²)"),
    )
}

pub(super) fn trigonometry(dice: &mut Dice) -> Draft {
    let hypotenuse = dice.range(10, 20);
    let angle = dice.range(20, 60);
    build_trigonometry(hypotenuse, angle)
}

fn build_trigonometry(hypotenuse: i64, angle_degrees: i64) -> Draft {
    let opposite = to_f64(hypotenuse) * to_f64(angle_degrees).to_radians().sin();
    Draft::new(
        format!(
            "Right triangle: Hypotenuse = {hypotenuse}, Angle = {angle_degrees}°. Find Opposite side (1 d.p.)"
        ),
        one_decimal(opposite),
        "SOH: Opp = Hyp × sin(angle)",
    )
}

pub(super) fn exact_trig(dice: &mut Dice) -> Draft {
    let (expression, value) = dice.pick(&EXACT_TRIG).copied().unwrap_or(EXACT_TRIG[0]);
    Draft::new(
        format!("What is the exact value of {expression}?"),
        value,
        "Memorise the exact trig table or use triangles.",
    )
}

pub(super) fn pythagoras_3d(dice: &mut Dice) -> Draft {
    let length = dice.range(2, 6);
    let width = dice.range(2, 6);
    let height = dice.range(2, 6);
    build_pythagoras_3d(length, width, height)
}

/// Unlike the triangle topics the diagonal keeps its `.0`, so `7.0` for a 2x3x6 cuboid.
fn build_pythagoras_3d(length: i64, width: i64, height: i64) -> Draft {
    let diagonal = to_f64(length * length + width * width + height * height).sqrt();
    Draft::new(
        format!(
            "Cuboid dimensions: {length}x{width}x{height}. Find length of internal diagonal (1 d.p.)"
        ),
        format!("{diagonal:.1}"),
        "sqrt(l² + w² + h²)",
    )
}

pub(super) fn perpendicular_gradients(dice: &mut Dice) -> Draft {
    let magnitude = dice.range(2, 5);
    let gradient = if dice.coin() { magnitude } else { -magnitude };
    build_perpendicular_gradients(gradient)
}

/// Negative reciprocal of an integer gradient.
fn build_perpendicular_gradients(gradient: i64) -> Draft {
    let answer = if gradient < 0 {
        format!("1/{}", gradient.abs())
    } else {
        format!("-1/{gradient}")
    };
    Draft::new(
        format!(
            "Line A has gradient {gradient}. What is the gradient of a line perpendicular to A? (fraction like -1/2)"
        ),
        answer,
        "Negative reciprocal. Flip fraction and change sign.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::check_answer;

    #[test]
    fn pythagoras_whole_number_drops_decimal() {
        let draft = build_pythagoras(3, 4);
        assert_eq!(draft.answer, "5");
        assert_eq!(build_pythagoras(5, 12).answer, "13");
        assert_eq!(build_pythagoras(4, 7).answer, "8.1");
    }

    #[test]
    fn pythagoras_drawn_answers_match_hypot() {
        let mut dice = Dice::seeded(8);
        for _ in 0..100 {
            let draft = pythagoras(&mut dice);
            let hyp: f64 = draft.answer.parse().unwrap();
            assert!((5.0..=19.3).contains(&hyp), "{}", draft.answer);
        }
    }

    #[test]
    fn trigonometry_uses_sine() {
        assert_eq!(build_trigonometry(10, 30).answer, "5");
        assert_eq!(build_trigonometry(20, 45).answer, "14.1");
        assert_eq!(build_trigonometry(12, 60).answer, "10.4");
    }

    #[test]
    fn exact_trig_answers_come_from_table() {
        let mut dice = Dice::seeded(2);
        for _ in 0..50 {
            let draft = exact_trig(&mut dice);
            assert!(EXACT_TRIG.iter().any(|(expr, value)| {
                draft.prompt.contains(expr) && draft.answer == *value
            }));
        }
    }

    #[test]
    fn pythagoras_3d_diagonal() {
        assert_eq!(build_pythagoras_3d(2, 3, 6).answer, "7.0");
        assert_eq!(build_pythagoras_3d(2, 2, 2).answer, "3.5");
        assert_eq!(
            build_pythagoras_3d(2, 3, 6).prompt,
            "Cuboid dimensions: 2x3x6. Find length of internal diagonal (1 d.p.)"
        );
    }

    #[test]
    fn pythagoras_3d_whole_diagonal_wants_one_decimal() {
        let draft = build_pythagoras_3d(2, 3, 6);
        assert!(check_answer("7.0", &draft.answer));
        assert!(!check_answer("7", &draft.answer));
    }

    #[test]
    fn perpendicular_gradient_is_negative_reciprocal() {
        assert_eq!(build_perpendicular_gradients(3).answer, "-1/3");
        assert_eq!(build_perpendicular_gradients(-4).answer, "1/4");
        assert!(build_perpendicular_gradients(-4).prompt.contains("gradient -4."));
    }
}
