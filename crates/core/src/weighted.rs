use crate::RngState;

/// Pick one of `items` with probability proportional to the parallel
/// `weights`.
///
/// Rolls `r` in `[0, total)`, subtracts each weight in order and returns the
/// first item where the remainder reaches zero or below. When rounding walks
/// off the end the last item is returned. `None` only for an empty or
/// mismatched input.
pub fn select_weighted<'a, T>(
    items: &'a [T],
    weights: &[f64],
    rng: &mut RngState,
) -> Option<&'a T> {
    if items.is_empty() || items.len() != weights.len() {
        return None;
    }
    let total: f64 = weights.iter().sum();
    let mut roll = rng.next_f64() * total;
    for (item, weight) in items.iter().zip(weights) {
        roll -= weight;
        if roll <= 0.0 {
            return Some(item);
        }
    }
    items.last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_mismatched() {
        let mut rng = RngState::from_seed(1);
        let empty: [&str; 0] = [];
        assert!(select_weighted(&empty, &[], &mut rng).is_none());
        assert!(select_weighted(&["a", "b"], &[1.0], &mut rng).is_none());
    }

    #[test]
    fn single_item_always_wins() {
        let mut rng = RngState::from_seed(2);
        for _ in 0..50 {
            assert_eq!(select_weighted(&["only"], &[0.25], &mut rng), Some(&"only"));
        }
    }

    #[test]
    fn frequencies_follow_weights() {
        let mut rng = RngState::from_seed(0xC0FFEE);
        let items = ["comun", "raro", "legendario"];
        let weights = [70.0, 25.0, 5.0];
        let mut counts = [0usize; 3];
        let samples = 100_000;
        for _ in 0..samples {
            let picked = select_weighted(&items, &weights, &mut rng).unwrap();
            let idx = items.iter().position(|item| item == picked).unwrap();
            counts[idx] += 1;
        }
        for (count, weight) in counts.iter().zip(weights) {
            let freq = *count as f64 / samples as f64;
            assert!((freq - weight / 100.0).abs() < 0.01, "freq {freq} weight {weight}");
        }
    }
}
