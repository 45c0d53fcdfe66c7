//! Pairwise correlation estimates between numeric questions.

use lab_core::entities::{Question, Response};
use lab_core::reports::Correlation;

use crate::numeric::{as_number, decimal};

/// Pearson coefficients for every pair of `NUMBER`/`SCALE` questions.
///
/// Pairs are visited in schema order (`left` precedes `right`). A pair is
/// reported only when at least `min_pairs` responses answered both questions
/// numerically and neither side is constant.
#[must_use]
pub fn correlations(
    questions: &[Question],
    responses: &[Response],
    min_pairs: usize,
) -> Vec<Correlation> {
    let numeric: Vec<&Question> = questions
        .iter()
        .filter(|q| q.question_type().is_numeric())
        .collect();

    let mut found = Vec::new();
    for (i, left) in numeric.iter().enumerate() {
        for right in &numeric[i + 1..] {
            let pairs: Vec<(f64, f64)> = responses
                .iter()
                .filter_map(|r| {
                    let x = r.answer(&left.id).and_then(as_number)?;
                    let y = r.answer(&right.id).and_then(as_number)?;
                    Some((x, y))
                })
                .collect();

            if pairs.len() < min_pairs.max(2) {
                continue;
            }
            if let Some(r) = pearson(&pairs) {
                found.push(Correlation {
                    left: left.id.clone(),
                    right: right.id.clone(),
                    pairs: pairs.len(),
                    coefficient: decimal(r),
                });
            }
        }
    }
    found
}

/// Sample Pearson coefficient, or `None` when either variable has zero variance.
#[allow(clippy::cast_precision_loss)]
fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}
