//! Genre tags and slug derivation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GenreId, ValidationError};

/// Maximum length for a genre name.
pub const MAX_GENRE_NAME_LENGTH: usize = 50;

/// A genre tag attachable to many stories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
    /// Derived from `name` by [`slugify`]; not guaranteed unique.
    pub slug: String,
    pub description: Option<String>,
}

impl Genre {
    /// Creates a genre, deriving its slug from the name.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `OutOfRange` if the name exceeds 50 characters
    /// - `InvalidFormat` if the name has no letter or digit to build a slug from
    pub fn new(name: &str, description: Option<String>) -> Result<Self, ValidationError> {
        let (name, slug) = Self::validate_name(name)?;
        Ok(Self {
            id: GenreId::new(),
            slug,
            name,
            description,
        })
    }

    /// Renames the genre and re-derives its slug.
    ///
    /// The description is only replaced when one is supplied.
    pub fn update(&mut self, name: &str, description: Option<String>) -> Result<(), ValidationError> {
        let (name, slug) = Self::validate_name(name)?;
        self.slug = slug;
        self.name = name;
        if description.is_some() {
            self.description = description;
        }
        Ok(())
    }

    fn validate_name(name: &str) -> Result<(String, String), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let len = name.chars().count();
        if len > MAX_GENRE_NAME_LENGTH {
            return Err(ValidationError::out_of_range(
                "name",
                1,
                MAX_GENRE_NAME_LENGTH as i64,
                len as i64,
            ));
        }
        let slug = slugify(name);
        if slug.is_empty() {
            return Err(ValidationError::invalid_format(
                "name",
                "must contain at least one letter or digit",
            ));
        }
        Ok((name.to_string(), slug))
    }
}

/// Derives a lowercase, URL-safe slug from free text.
///
/// Latin diacritics are folded to their base letter, letters and digits of
/// other scripts are kept as they are, every other run becomes a single `-`,
/// and leading or trailing separators are dropped. The same input always
/// yields the same slug.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars().flat_map(char::to_lowercase) {
        match fold_char(c) {
            Some(base) => {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(base);
            }
            None => pending_dash = true,
        }
    }

    slug
}

fn fold_char(c: char) -> Option<char> {
    if c.is_ascii_alphanumeric() {
        return Some(c);
    }
    const FOLDS: &[(&str, char)] = &[
        ("àáâãäåāăąạảấầẩẫậắằẳẵặ", 'a'),
        ("çćĉċč", 'c'),
        ("ďđ", 'd'),
        ("èéêëēĕėęěẹẻẽếềểễệ", 'e'),
        ("ĝğġģ", 'g'),
        ("ìíîïĩīĭįıỉị", 'i'),
        ("ñńņňŉ", 'n'),
        ("òóôõöøōŏőơọỏốồổỗộớờởỡợ", 'o'),
        ("ŕŗř", 'r'),
        ("śŝşšș", 's'),
        ("ţťŧț", 't'),
        ("ùúûüũūŭůűųưụủứừửữự", 'u'),
        ("ýÿŷỳỵỷỹ", 'y'),
        ("źżž", 'z'),
    ];
    FOLDS
        .iter()
        .find(|(group, _)| group.contains(c))
        .map(|(_, base)| *base)
        .or_else(|| c.is_alphanumeric().then_some(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Slice of Life"), "slice-of-life");
    }

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slugify("  Sci--Fi & Fantasy!! "), "sci-fi-fantasy");
    }

    #[test]
    fn slugify_folds_diacritics() {
        assert_eq!(slugify("Hành Động"), "hanh-dong");
        assert_eq!(slugify("Café Crème"), "cafe-creme");
    }

    #[test]
    fn slugify_is_stable() {
        assert_eq!(slugify("Isekai"), slugify("Isekai"));
        assert_eq!(slugify("Shōnen"), "shonen");
    }

    #[test]
    fn slugify_keeps_letters_of_other_scripts() {
        assert_eq!(slugify("恋愛"), "恋愛");
        assert_eq!(slugify("Ужасы / Мистика"), "ужасы-мистика");
    }

    #[test]
    fn slugify_of_symbols_is_empty() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn new_genre_derives_slug() {
        let genre = Genre::new("Martial Arts", None).unwrap();
        assert_eq!(genre.name, "Martial Arts");
        assert_eq!(genre.slug, "martial-arts");
    }

    #[test]
    fn new_genre_rejects_blank_name() {
        assert!(matches!(
            Genre::new("   ", None),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn new_genre_rejects_long_name() {
        let name = "x".repeat(MAX_GENRE_NAME_LENGTH + 1);
        assert!(matches!(
            Genre::new(&name, None),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn new_genre_with_non_latin_name_has_usable_slug() {
        let genre = Genre::new("恋愛", None).unwrap();
        assert_eq!(genre.slug, "恋愛");
    }

    #[test]
    fn new_genre_rejects_name_without_letters_or_digits() {
        assert!(matches!(
            Genre::new("!!! ???", None),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn update_rejects_name_without_letters_or_digits() {
        let mut genre = Genre::new("Drama", None).unwrap();
        assert!(genre.update("---", None).is_err());
        assert_eq!(genre.slug, "drama");
    }

    #[test]
    fn update_rederives_slug_and_keeps_description_when_absent() {
        let mut genre = Genre::new("Romance", Some("Love stories".to_string())).unwrap();
        genre.update("Romantic Comedy", None).unwrap();

        assert_eq!(genre.slug, "romantic-comedy");
        assert_eq!(genre.description.as_deref(), Some("Love stories"));
    }
}
