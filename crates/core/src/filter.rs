use crate::{ItemDef, RngState};

/// Items drawable for `target_type` at `rarity`.
///
/// Unmastered types draw only monotype items. A mastered type narrows to
/// its dual-type items with probability `dual_bias` when it has any, and
/// otherwise keeps both. The rarity filter comes last, so a biased pick can
/// still leave nothing.
pub fn filter_candidates<'a>(
    items: &'a [ItemDef],
    target_type: &str,
    rarity: &str,
    mastered: bool,
    dual_bias: f64,
    rng: &mut RngState,
) -> Vec<&'a ItemDef> {
    let typed: Vec<&ItemDef> = items.iter().filter(|item| item.has_type(target_type)).collect();
    let pool = if mastered {
        let dual: Vec<&ItemDef> = typed
            .iter()
            .copied()
            .filter(|item| item.is_dual_type())
            .collect();
        if !dual.is_empty() && rng.next_f64() < dual_bias {
            dual
        } else {
            typed
        }
    } else {
        typed.into_iter().filter(|item| !item.is_dual_type()).collect()
    };
    pool.into_iter().filter(|item| item.rarity == rarity).collect()
}
