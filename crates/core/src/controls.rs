//! Operator commands on a player state. Every command keeps
//! `mastered ⊆ active`; a rejected command leaves the state untouched.

use crate::{Catalog, GachaConfig, PlayerState};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("legendary pity must be between 0 and {max}, got {value}")]
    PityOutOfRange { value: i64, max: u32 },
    #[error("unknown type: {0}")]
    UnknownType(String),
    #[error("no active types")]
    NoActiveTypes,
}

impl PlayerState {
    pub fn reset_pity(&mut self) {
        self.legendary_pity = 0;
        self.rare_pity = 0;
    }

    /// Set the legendary counter directly. Accepts `0..=legendary_hard_pity`.
    pub fn set_legendary_pity(
        &mut self,
        value: i64,
        config: &GachaConfig,
    ) -> Result<(), ControlError> {
        let max = config.legendary_hard_pity;
        match u32::try_from(value) {
            Ok(pity) if pity <= max => {
                self.legendary_pity = pity;
                Ok(())
            }
            _ => Err(ControlError::PityOutOfRange { value, max }),
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Flip one type's active flag. Deactivating also drops its mastery.
    /// Returns the new active flag.
    pub fn toggle_type(
        &mut self,
        catalog: &Catalog,
        type_name: &str,
    ) -> Result<bool, ControlError> {
        if !catalog.has_type(type_name) {
            return Err(ControlError::UnknownType(type_name.to_string()));
        }
        if self.active_types_mut().remove(type_name) {
            self.mastered_types_mut().remove(type_name);
            Ok(false)
        } else {
            self.active_types_mut().insert(type_name.to_string());
            Ok(true)
        }
    }

    /// Flip one type's mastery. Inactive types cannot gain mastery; that
    /// case is a no-op returning `false`.
    pub fn toggle_mastery(
        &mut self,
        catalog: &Catalog,
        type_name: &str,
    ) -> Result<bool, ControlError> {
        if !catalog.has_type(type_name) {
            return Err(ControlError::UnknownType(type_name.to_string()));
        }
        if self.mastered_types_mut().remove(type_name) {
            return Ok(false);
        }
        if self.is_active(type_name) {
            self.mastered_types_mut().insert(type_name.to_string());
            return Ok(true);
        }
        Ok(false)
    }

    /// Deactivate everything (and clear mastery) when any type is active,
    /// otherwise activate every catalog type. Returns whether types are now
    /// active.
    pub fn toggle_all_types(&mut self, catalog: &Catalog) -> bool {
        if self.active_types().is_empty() {
            *self.active_types_mut() = catalog.type_names().map(str::to_string).collect();
            true
        } else {
            self.active_types_mut().clear();
            self.mastered_types_mut().clear();
            false
        }
    }

    /// Clear all mastery when any exists, otherwise master every active
    /// type. Returns whether mastery is now set.
    pub fn toggle_all_mastery(&mut self) -> Result<bool, ControlError> {
        if !self.mastered_types().is_empty() {
            self.mastered_types_mut().clear();
            return Ok(false);
        }
        if self.active_types().is_empty() {
            return Err(ControlError::NoActiveTypes);
        }
        let active = self.active_types().clone();
        *self.mastered_types_mut() = active;
        Ok(true)
    }
}
