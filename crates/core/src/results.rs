use crate::ItemDef;
use serde::{Deserialize, Serialize};

pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    /// A catalog item was drawn.
    #[default]
    Item,
    /// The first type roll had no candidates; the pull is consumed and the
    /// rare pity resets.
    SearchFailure,
    NoActiveTypes,
    SearchExhausted,
    /// Guaranteed pull found nothing for the forced rarity.
    NoMatch,
}

pub const SEARCH_FAILURE_NAME: &str = "Duplicado";

/// One entry of a batch and of the persisted history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredPullResult")]
pub struct PullResult {
    pub kind: ResultKind,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipos")]
    pub types: Vec<String>,
    #[serde(rename = "rareza")]
    pub rarity: String,
    #[serde(rename = "esDuplicado")]
    pub duplicate: bool,
}

/// Stored entry; saves from older versions have no `kind`.
#[derive(Deserialize)]
struct StoredPullResult {
    #[serde(default)]
    kind: Option<ResultKind>,
    nombre: String,
    #[serde(default)]
    tipos: Vec<String>,
    rareza: String,
    #[serde(rename = "esDuplicado", default)]
    duplicate: bool,
}

impl From<StoredPullResult> for PullResult {
    fn from(stored: StoredPullResult) -> Self {
        let kind = stored
            .kind
            .unwrap_or_else(|| legacy_kind(&stored.nombre, &stored.tipos, &stored.rareza));
        Self {
            kind,
            name: stored.nombre,
            types: stored.tipos,
            rarity: stored.rareza,
            duplicate: stored.duplicate,
        }
    }
}

/// Placeholders in old saves are only recognizable by their shape.
fn legacy_kind(name: &str, types: &[String], rarity: &str) -> ResultKind {
    if name == SEARCH_FAILURE_NAME {
        ResultKind::SearchFailure
    } else if rarity == NOT_APPLICABLE && types.is_empty() {
        ResultKind::NoActiveTypes
    } else if name.starts_with("Error Cr") {
        ResultKind::SearchExhausted
    } else if rarity == NOT_APPLICABLE {
        ResultKind::NoMatch
    } else {
        ResultKind::Item
    }
}

impl PullResult {
    pub fn item(item: &ItemDef, duplicate: bool) -> Self {
        Self {
            kind: ResultKind::Item,
            name: item.name.clone(),
            types: item.types.clone(),
            rarity: item.rarity.clone(),
            duplicate,
        }
    }

    pub fn search_failure(type_name: &str, rarity: &str) -> Self {
        Self {
            kind: ResultKind::SearchFailure,
            name: SEARCH_FAILURE_NAME.to_string(),
            types: vec![type_name.to_string()],
            rarity: rarity.to_string(),
            duplicate: false,
        }
    }

    pub fn no_active_types() -> Self {
        Self {
            kind: ResultKind::NoActiveTypes,
            name: "Fatal error: no active types".to_string(),
            types: Vec::new(),
            rarity: NOT_APPLICABLE.to_string(),
            duplicate: false,
        }
    }

    pub fn search_exhausted(type_name: Option<&str>, rarity: &str, attempts: u32) -> Self {
        Self {
            kind: ResultKind::SearchExhausted,
            name: format!("Critical error: no valid item found in {attempts} attempts"),
            types: vec![type_name.unwrap_or(NOT_APPLICABLE).to_string()],
            rarity: rarity.to_string(),
            duplicate: false,
        }
    }

    pub fn no_match(type_name: &str, rarity: &str) -> Self {
        Self {
            kind: ResultKind::NoMatch,
            name: format!("No {rarity} of type {type_name} available"),
            types: vec![type_name.to_string()],
            rarity: NOT_APPLICABLE.to_string(),
            duplicate: false,
        }
    }

    pub fn is_item(&self) -> bool {
        self.kind == ResultKind::Item
    }

    pub fn is_dual_type(&self) -> bool {
        self.is_item() && self.types.len() > 1
    }
}
