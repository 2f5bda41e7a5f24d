//! Adoption form engine: input masks, validation, and the draft record.
//!
//! The draft is plain data; every derived fact (masked phone/date, the
//! submittable flag) is recomputed from scratch by [`FormDerived::from_draft`]
//! after each edit, so no derived value can drift out of sync with the
//! fields it came from.

use serde::{Deserialize, Serialize};

use crate::state::{NewPet, CAT_PHOTO_URL, DOG_PHOTO_URL};

// ─── Choice Vocabularies ─────────────────────────────────────────────────────

/// A selectable choice: the stored value and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SPECIES_CHOICES: &[Choice] = &[
    Choice { value: "cachorro", label: "Cachorro" },
    Choice { value: "gato", label: "Gato" },
];

pub const SEX_CHOICES: &[Choice] = &[
    Choice { value: "macho", label: "Macho" },
    Choice { value: "femea", label: "Fêmea" },
];

pub const AGE_CHOICES: &[Choice] = &[
    Choice { value: "filhote", label: "Filhote" },
    Choice { value: "adulto", label: "Adulto" },
    Choice { value: "idoso", label: "Idoso" },
];

pub const SIZE_CHOICES: &[Choice] = &[
    Choice { value: "pequeno", label: "Pequeno" },
    Choice { value: "medio", label: "Médio" },
    Choice { value: "grande", label: "Grande" },
];

// ─── Masks & Validation ──────────────────────────────────────────────────────

/// Strip every non-digit character.
#[must_use]
pub fn only_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Format a Brazilian mobile number as `(DD) DDDDD-DDDD`.
///
/// Works from the digits alone, capped at 11, so re-masking an already
/// masked value is a no-op. Partial input keeps as much structure as the
/// digits allow; the complete mask is exactly 15 characters.
#[must_use]
pub fn mask_phone(text: &str) -> String {
    let digits = only_digits(text);
    let d: String = digits.chars().take(11).collect();
    match d.len() {
        0..=2 => d,
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..11]),
    }
}

/// Format a date as `DD/MM/AAAA` from the digits alone, capped at 8.
///
/// No calendar validation: `99/99/9999` is accepted as complete. The
/// complete mask is exactly 10 characters.
#[must_use]
pub fn mask_date(text: &str) -> String {
    let digits = only_digits(text);
    let d: String = digits.chars().take(8).collect();
    match d.len() {
        0..=2 => d,
        3..=4 => format!("{}/{}", &d[..2], &d[2..]),
        _ => format!("{}/{}/{}", &d[..2], &d[2..4], &d[4..]),
    }
}

/// Whether the text contains an email-shaped substring.
///
/// Matches the lenient pattern `\S+@\S+\.\S+` anywhere in the input: a
/// non-space before an `@`, at least one non-space between the `@` and a
/// later `.`, and a non-space after that `.`.
#[must_use]
pub fn email_well_formed(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '@' {
            continue;
        }
        if i == 0 || chars[i - 1].is_whitespace() {
            continue;
        }
        // Look for a '.' after the '@' with only non-space characters in
        // between (at least one) and a non-space right after it.
        let mut between = 0usize;
        for (j, &c2) in chars.iter().enumerate().skip(i + 1) {
            if c2.is_whitespace() {
                break;
            }
            if c2 == '.'
                && between >= 1
                && chars.get(j + 1).is_some_and(|n| !n.is_whitespace())
            {
                return true;
            }
            between += 1;
        }
    }
    false
}

// ─── Draft ───────────────────────────────────────────────────────────────────

/// Everything the user has typed or selected so far.
///
/// `phone` and `date` hold the masked display text, recomputed by the form
/// screen after every keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub password: String,
    pub confirm_password: String,
    pub species: String,
    pub sex: String,
    pub age: String,
    pub size: String,
}

impl FormDraft {
    /// Reset every field to empty.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the pet record described by the draft. Only meaningful while
    /// the draft is submittable.
    #[must_use]
    pub fn build_pet(&self) -> NewPet {
        let photo_url = if self.species == "gato" {
            CAT_PHOTO_URL
        } else {
            DOG_PHOTO_URL
        };
        NewPet {
            name: self.name.clone(),
            age: self.age.clone(),
            sex: self.sex.clone(),
            story: format!(
                "Pet cadastrado por {}, porte {}.",
                self.name, self.size
            ),
            photo_url: photo_url.to_string(),
        }
    }
}

// ─── Derived View ────────────────────────────────────────────────────────────

/// Form lifecycle: submit is enabled only while `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    Incomplete,
    Ready,
}

/// Pure projection of the draft: masks plus the submittability verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDerived {
    pub masked_phone: String,
    pub masked_date: String,
    pub status: FormStatus,
}

impl FormDerived {
    /// Recompute every derived value from the draft. Side-effect free.
    #[must_use]
    pub fn from_draft(draft: &FormDraft) -> Self {
        let masked_phone = mask_phone(&draft.phone);
        let masked_date = mask_date(&draft.date);
        let submittable = !draft.name.is_empty()
            && email_well_formed(&draft.email)
            && masked_phone.len() == 15
            && masked_date.len() == 10
            && !draft.password.is_empty()
            && draft.password == draft.confirm_password
            && !draft.species.is_empty()
            && !draft.sex.is_empty()
            && !draft.age.is_empty()
            && !draft.size.is_empty();
        Self {
            masked_phone,
            masked_date,
            status: if submittable {
                FormStatus::Ready
            } else {
                FormStatus::Incomplete
            },
        }
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn submittable(&self) -> bool {
        self.status == FormStatus::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> FormDraft {
        FormDraft {
            name: "Ana Lima".to_string(),
            email: "ana@exemplo.com".to_string(),
            phone: "(11) 98765-4321".to_string(),
            date: "01/02/1990".to_string(),
            password: "segredo".to_string(),
            confirm_password: "segredo".to_string(),
            species: "gato".to_string(),
            sex: "femea".to_string(),
            age: "adulto".to_string(),
            size: "pequeno".to_string(),
        }
    }

    #[test]
    fn only_digits_strips_everything_else() {
        assert_eq!(only_digits("(11) 98765-4321"), "11987654321");
        assert_eq!(only_digits("abc"), "");
        assert_eq!(only_digits(""), "");
    }

    #[test]
    fn phone_mask_stages() {
        assert_eq!(mask_phone(""), "");
        assert_eq!(mask_phone("1"), "1");
        assert_eq!(mask_phone("11"), "11");
        assert_eq!(mask_phone("119"), "(11) 9");
        assert_eq!(mask_phone("119876"), "(11) 9876");
        assert_eq!(mask_phone("1198765"), "(11) 98765-");
        assert_eq!(mask_phone("1198765432"), "(11) 98765-432");
        assert_eq!(mask_phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn phone_mask_caps_at_eleven_digits() {
        assert_eq!(mask_phone("119876543210000"), "(11) 98765-4321");
    }

    #[test]
    fn phone_mask_is_idempotent() {
        for raw in ["", "1", "119", "119876", "1198765432", "11987654321"] {
            let once = mask_phone(raw);
            assert_eq!(mask_phone(&once), once);
        }
    }

    #[test]
    fn phone_mask_ignores_junk_characters() {
        assert_eq!(mask_phone("11 abc 98765...4321"), "(11) 98765-4321");
    }

    #[test]
    fn date_mask_stages() {
        assert_eq!(mask_date(""), "");
        assert_eq!(mask_date("0"), "0");
        assert_eq!(mask_date("01"), "01");
        assert_eq!(mask_date("010"), "01/0");
        assert_eq!(mask_date("0102"), "01/02");
        assert_eq!(mask_date("01021"), "01/02/1");
        assert_eq!(mask_date("01021990"), "01/02/1990");
    }

    #[test]
    fn date_mask_caps_at_eight_digits_no_calendar_check() {
        assert_eq!(mask_date("25121999"), "25/12/1999");
        assert_eq!(mask_date("999999999"), "99/99/9999");
    }

    #[test]
    fn masks_preserve_digit_projection() {
        for raw in ["11987654321999", "a1b2c3", "(99) 1", ""] {
            let digits = only_digits(raw);
            let phone_digits: String = digits.chars().take(11).collect();
            let date_digits: String = digits.chars().take(8).collect();
            assert_eq!(only_digits(&mask_phone(raw)), phone_digits);
            assert_eq!(only_digits(&mask_date(raw)), date_digits);
        }
    }

    #[test]
    fn date_mask_is_idempotent() {
        for raw in ["", "01", "010", "0102", "01021990"] {
            let once = mask_date(raw);
            assert_eq!(mask_date(&once), once);
        }
    }

    #[test]
    fn email_check_accepts_minimal_shape() {
        assert!(email_well_formed("a@b.c"));
        assert!(email_well_formed("ana@exemplo.com"));
        assert!(email_well_formed("ana@sub.exemplo.com"));
    }

    #[test]
    fn email_check_is_a_substring_match() {
        assert!(email_well_formed("fale com a@b.c hoje"));
        assert!(email_well_formed("xx a@b.cd"));
    }

    #[test]
    fn email_check_rejects_broken_shapes() {
        assert!(!email_well_formed(""));
        assert!(!email_well_formed("ana"));
        assert!(!email_well_formed("@b.c"));
        assert!(!email_well_formed("a@.c"));
        assert!(!email_well_formed("a@b."));
        assert!(!email_well_formed("a@b"));
        assert!(!email_well_formed("a @b.c"));
        assert!(!email_well_formed("a@ b.c"));
        assert!(!email_well_formed("a@b .c"));
    }

    #[test]
    fn complete_draft_is_ready() {
        let derived = FormDerived::from_draft(&complete_draft());
        assert_eq!(derived.status, FormStatus::Ready);
        assert!(derived.submittable());
    }

    #[test]
    fn empty_draft_is_incomplete() {
        let derived = FormDerived::from_draft(&FormDraft::default());
        assert_eq!(derived.status, FormStatus::Incomplete);
        assert!(!derived.submittable());
    }

    #[test]
    fn each_missing_field_blocks_submission() {
        let blank_each: [fn(&mut FormDraft); 9] = [
            |d| d.name.clear(),
            |d| d.email.clear(),
            |d| d.phone.clear(),
            |d| d.date.clear(),
            |d| d.password.clear(),
            |d| d.species.clear(),
            |d| d.sex.clear(),
            |d| d.age.clear(),
            |d| d.size.clear(),
        ];
        for blank in blank_each {
            let mut draft = complete_draft();
            blank(&mut draft);
            assert!(
                !FormDerived::from_draft(&draft).submittable(),
                "draft should be incomplete: {draft:?}"
            );
        }
    }

    #[test]
    fn password_mismatch_blocks_submission() {
        let mut draft = complete_draft();
        draft.confirm_password = "outro".to_string();
        assert!(!FormDerived::from_draft(&draft).submittable());

        draft.password.clear();
        draft.confirm_password.clear();
        // Equal but empty still blocks.
        assert!(!FormDerived::from_draft(&draft).submittable());
    }

    #[test]
    fn partial_phone_blocks_submission() {
        let mut draft = complete_draft();
        draft.phone = "(11) 98765-432".to_string();
        assert!(!FormDerived::from_draft(&draft).submittable());
    }

    #[test]
    fn partial_date_blocks_submission() {
        let mut draft = complete_draft();
        draft.date = "01/02/199".to_string();
        assert!(!FormDerived::from_draft(&draft).submittable());
    }

    #[test]
    fn build_pet_uses_cat_photo_for_gato() {
        let draft = complete_draft();
        let pet = draft.build_pet();
        assert_eq!(pet.name, "Ana Lima");
        assert_eq!(pet.age, "adulto");
        assert_eq!(pet.sex, "femea");
        assert_eq!(pet.story, "Pet cadastrado por Ana Lima, porte pequeno.");
        assert_eq!(pet.photo_url, CAT_PHOTO_URL);
    }

    #[test]
    fn build_pet_uses_dog_photo_otherwise() {
        let mut draft = complete_draft();
        draft.species = "cachorro".to_string();
        assert_eq!(draft.build_pet().photo_url, DOG_PHOTO_URL);
    }

    #[test]
    fn reset_clears_every_field() {
        let mut draft = complete_draft();
        draft.reset();
        assert_eq!(draft, FormDraft::default());
    }

    #[test]
    fn draft_serde_roundtrip() {
        let draft = complete_draft();
        let json = serde_json::to_string(&draft).unwrap();
        let decoded: FormDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, draft);
    }
}
