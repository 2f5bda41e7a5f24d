//! Sources of initial pet data.
//!
//! The console has no backend; a [`DataSource`] only decides which pets the
//! store starts with. The trait seam keeps the app testable with arbitrary
//! starting populations.

use crate::state::{NewPet, CAT_PHOTO_URL, DOG_PHOTO_URL};

/// Provides the pets the store is seeded with at startup.
pub trait DataSource: Send {
    /// Human-readable source name, shown in logs.
    fn name(&self) -> &'static str;

    /// The pets to register before the first render.
    fn initial_pets(&self) -> Vec<NewPet>;
}

/// The built-in shelter roster. `empty()` yields a source with no pets,
/// for starting from a clean store.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedDataSource {
    empty: bool,
}

impl SeedDataSource {
    /// Source seeded with the default roster.
    #[must_use]
    pub fn new() -> Self {
        Self { empty: false }
    }

    /// Source with no initial pets.
    #[must_use]
    pub fn empty() -> Self {
        Self { empty: true }
    }
}

impl DataSource for SeedDataSource {
    fn name(&self) -> &'static str {
        if self.empty {
            "empty"
        } else {
            "seed"
        }
    }

    fn initial_pets(&self) -> Vec<NewPet> {
        if self.empty {
            return Vec::new();
        }
        vec![
            NewPet {
                name: "Thor".to_string(),
                age: "2 anos".to_string(),
                sex: "Macho".to_string(),
                story: "Um cachorro muito brincalhão.".to_string(),
                photo_url: DOG_PHOTO_URL.to_string(),
            },
            NewPet {
                name: "Laika".to_string(),
                age: "1 ano".to_string(),
                sex: "Fêmea".to_string(),
                story: "Gatinha carinhosa que adora dormir.".to_string(),
                photo_url: CAT_PHOTO_URL.to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_source_provides_default_roster() {
        let source = SeedDataSource::new();
        let pets = source.initial_pets();
        assert_eq!(pets.len(), 2);
        assert_eq!(pets[0].name, "Thor");
        assert_eq!(pets[1].name, "Laika");
        assert_eq!(pets[1].photo_url, CAT_PHOTO_URL);
    }

    #[test]
    fn empty_source_provides_nothing() {
        let source = SeedDataSource::empty();
        assert!(source.initial_pets().is_empty());
        assert_eq!(source.name(), "empty");
    }
}
