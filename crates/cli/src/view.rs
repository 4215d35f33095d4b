use gachapull_core::{PityStatus, PullResult, ResultKind};

#[derive(Debug, Clone)]
pub struct Card {
    pub result: PullResult,
    pub revealed: bool,
}

/// Last batch shown as cards. Cards start covered and show only their
/// rarity until revealed.
#[derive(Debug, Clone, Default)]
pub struct CardGrid {
    cards: Vec<Card>,
}

impl CardGrid {
    pub fn show(&mut self, results: &[PullResult]) {
        self.cards = results
            .iter()
            .cloned()
            .map(|result| Card {
                result,
                revealed: false,
            })
            .collect();
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Reveal one card; `false` when the index is out of range.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.cards.get_mut(index) {
            Some(card) => {
                card.revealed = true;
                true
            }
            None => false,
        }
    }

    /// Reveal every covered card, returning how many were covered.
    pub fn reveal_all(&mut self) -> usize {
        let mut count = 0;
        for card in self.cards.iter_mut().filter(|card| !card.revealed) {
            card.revealed = true;
            count += 1;
        }
        count
    }

    pub fn render(&self) -> String {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, card)| render_card(index, card))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn render_card(index: usize, card: &Card) -> String {
    let rarity = card.result.rarity.to_uppercase();
    if !card.revealed {
        return format!("[{index}] RARITY: {rarity}  (reveal {index})");
    }
    format!("[{index}] {}", describe(&card.result))
}

pub fn describe(result: &PullResult) -> String {
    let mut line = result.name.clone();
    if result.is_dual_type() {
        line.push_str(" [DUAL TYPE]");
    }
    if result.duplicate {
        line.push_str(" (duplicate)");
    }
    if result.kind == ResultKind::SearchFailure {
        line.push_str(" (search failed, rare pity reset)");
    }
    format!(
        "{line} | rarity: {} | types: {}",
        result.rarity.to_uppercase(),
        result.types.join(" / ")
    )
}

pub fn render_status(status: &PityStatus) -> String {
    let mut lines = vec![
        format!(
            "Legendary: {} / {} | Rare: {} / {}",
            status.legendary, status.legendary_threshold, status.rare, status.rare_threshold
        ),
        format!("Collection: {} / {}", status.collected, status.catalog_size),
    ];
    for row in &status.types {
        let active = if row.active { "ACTIVE" } else { "inactive" };
        let mastery = if row.mastered { " (MASTERY)" } else { "" };
        lines.push(format!("  {} - {active}{mastery}", row.name));
    }
    lines.join("\n")
}

pub fn render_history(history: &[PullResult]) -> String {
    if history.is_empty() {
        return "history is empty".to_string();
    }
    history
        .iter()
        .enumerate()
        .map(|(index, result)| format!("{:>2}. {}", index + 1, describe(result)))
        .collect::<Vec<_>>()
        .join("\n")
}
