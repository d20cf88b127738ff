use super::Draft;
use super::format::exact_quotient;
use crate::dice::Dice;

const PERCENT_CHOICES: [i64; 7] = [5, 10, 15, 20, 25, 50, 75];

pub(super) fn percentages(dice: &mut Dice) -> Draft {
    let amount = dice.range(2, 50) * 10;
    let percent = dice.pick(&PERCENT_CHOICES).copied().unwrap_or(10);
    build_percentages(percent, amount)
}

fn build_percentages(percent: i64, amount: i64) -> Draft {
    Draft::new(
        format!("Find {percent}% of {amount}"),
        exact_quotient(percent * amount, 100),
        format!(
            "Convert {percent}% to decimal ({}) and multiply.",
            exact_quotient(percent, 100)
        ),
    )
}

pub(super) fn negative_indices(dice: &mut Dice) -> Draft {
    let base = dice.range(2, 5);
    let power = u32::try_from(dice.range(1, 3)).unwrap_or(1);
    build_negative_indices(base, power)
}

fn build_negative_indices(base: i64, power: u32) -> Draft {
    Draft::new(
        format!("Evaluate {base} to the power of -{power} (write as fraction a/b)"),
        format!("1/{}", base.pow(power)),
        format!("Negative power means reciprocal. 1 over {base}^{power}."),
    )
}

pub(super) fn profit(dice: &mut Dice) -> Draft {
    let cost = dice.range(5, 20) * 10;
    let markup_tenths = dice.range(11, 15);
    build_profit(cost, markup_tenths)
}

/// Selling price is `cost * markup_tenths / 10`, so the profit is a whole percentage.
fn build_profit(cost: i64, markup_tenths: i64) -> Draft {
    let sell = cost * markup_tenths / 10;
    Draft::new(
        format!("Bought for £{cost}, Sold for £{sell}. What is the % profit?"),
        exact_quotient((sell - cost) * 100, cost),
        "(Difference / Original) × 100",
    )
}

pub(super) fn speed_distance_time(dice: &mut Dice) -> Draft {
    let speed = dice.range(30, 70);
    let hours = dice.range(2, 5);
    Draft::new(
        format!("Car travels at {speed} mph for {hours} hours. Calculate distance."),
        (speed * hours).to_string(),
        "Distance = Speed × Time",
    )
}

pub(super) fn mean_average(dice: &mut Dice) -> Draft {
    let values = [
        dice.range(2, 9),
        dice.range(2, 9),
        dice.range(2, 9),
        dice.range(2, 9),
    ];
    build_mean_average(&values)
}

fn build_mean_average(values: &[i64]) -> Draft {
    let sum: i64 = values.iter().sum();
    let count = i64::try_from(values.len()).unwrap_or(1).max(1);
    let listed = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Draft::new(
        format!("Find mean of: {listed}"),
        exact_quotient(sum, count),
        format!("Add all numbers ({sum}) divide by count ({count})."),
    )
}
