//! Console screens: pet list, pet detail, adoption form, and about.

pub mod about;
pub mod adoption_form;
pub mod pet_detail;
pub mod pet_list;

pub use about::AboutScreen;
pub use adoption_form::AdoptionFormScreen;
pub use pet_detail::PetDetailScreen;
pub use pet_list::PetListScreen;

/// Screen identifiers, shared between screens and app wiring.
pub const PET_LIST_SCREEN: &str = "adocao.lista";
pub const PET_DETAIL_SCREEN: &str = "adocao.detalhes";
pub const ADOPTION_FORM_SCREEN: &str = "adocao.cadastro";
pub const ABOUT_SCREEN: &str = "adocao.sobre";
