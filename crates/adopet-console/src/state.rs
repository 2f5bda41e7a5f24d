//! Shared application state: the pet store and the current selection.
//!
//! A single [`AppState`] lives in the app; screens receive read-only clones
//! that the app refreshes after every mutation. Pets are immutable once
//! registered and are never removed.

use serde::{Deserialize, Serialize};

/// Photo shown for pets registered with species `gato`.
pub const CAT_PHOTO_URL: &str =
    "https://i.pinimg.com/474x/0c/79/b7/0c79b7dae034fdd36b5304427dc79f05.jpg";

/// Photo shown for pets registered with any other species.
pub const DOG_PHOTO_URL: &str =
    "https://i.pinimg.com/474x/f5/7c/4c/f57c4c0724668fa16a842fee369433ab.jpg";

// ─── Pet Records ─────────────────────────────────────────────────────────────

/// A pet available for adoption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Unique identifier, minted by the store.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Age label, e.g. `"2 anos"` or a bracket like `"filhote"`.
    pub age: String,
    /// Sex label.
    pub sex: String,
    /// Free-text story shown on the detail screen.
    pub story: String,
    /// Photo URL.
    pub photo_url: String,
}

/// A pet record before the store has assigned it an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub age: String,
    pub sex: String,
    pub story: String,
    pub photo_url: String,
}

// ─── App State ───────────────────────────────────────────────────────────────

/// The single owned application state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// All pets currently up for adoption, in registration order.
    pub pets: Vec<Pet>,
    /// Index of the pet the detail screen should show.
    pub selected_pet: Option<usize>,
    /// Next identifier to mint. Monotonic: never re-issued, independent of
    /// how many pets the store currently holds.
    next_pet_seq: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pets: Vec::new(),
            selected_pet: None,
            next_pet_seq: 1,
        }
    }

    /// Register a new pet, minting its identifier. Returns a clone of the
    /// stored record.
    pub fn register(&mut self, pet: NewPet) -> Pet {
        let id = self.next_pet_seq.to_string();
        self.next_pet_seq += 1;
        let stored = Pet {
            id,
            name: pet.name,
            age: pet.age,
            sex: pet.sex,
            story: pet.story,
            photo_url: pet.photo_url,
        };
        self.pets.push(stored.clone());
        stored
    }

    /// The pet the detail screen should show, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Pet> {
        self.selected_pet.and_then(|idx| self.pets.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new_pet(name: &str) -> NewPet {
        NewPet {
            name: name.to_string(),
            age: "2 anos".to_string(),
            sex: "Macho".to_string(),
            story: "Um cachorro muito brincalhão.".to_string(),
            photo_url: DOG_PHOTO_URL.to_string(),
        }
    }

    #[test]
    fn register_mints_sequential_ids() {
        let mut state = AppState::new();
        let first = state.register(sample_new_pet("Thor"));
        let second = state.register(sample_new_pet("Rex"));
        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert_eq!(state.pets.len(), 2);
    }

    #[test]
    fn ids_stay_monotonic_regardless_of_store_size() {
        let mut state = AppState::new();
        state.register(sample_new_pet("Thor"));
        state.register(sample_new_pet("Rex"));
        // Even if the collection were truncated, minted ids never repeat.
        state.pets.clear();
        let next = state.register(sample_new_pet("Bidu"));
        assert_eq!(next.id, "3");
    }

    #[test]
    fn selected_resolves_index() {
        let mut state = AppState::new();
        state.register(sample_new_pet("Thor"));
        assert!(state.selected().is_none());
        state.selected_pet = Some(0);
        assert_eq!(state.selected().map(|p| p.name.as_str()), Some("Thor"));
        state.selected_pet = Some(7);
        assert!(state.selected().is_none());
    }

    #[test]
    fn state_serde_roundtrip() {
        let mut state = AppState::new();
        state.register(sample_new_pet("Thor"));
        let json = serde_json::to_string(&state).unwrap();
        let decoded: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.pets, state.pets);
        // The counter survives the round trip too.
        let mut decoded = decoded;
        assert_eq!(decoded.register(sample_new_pet("Rex")).id, "2");
    }
}
