//! Slug generation for QR code group names.
//!
//! Group names are human-entered (often Portuguese) and end up in printed
//! QR code URLs, so the slug must be lowercase ASCII with hyphens only.

/// Derives a URL slug from a human-entered name.
///
/// Lowercases, strips Latin diacritics, collapses each run of
/// non-alphanumeric characters into a single hyphen and trims leading and
/// trailing hyphens. Deterministic and idempotent.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars().flat_map(fold_diacritic) {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Maps an accented Latin character to its base ASCII letter(s).
///
/// Covers Latin-1 Supplement and the Latin Extended-A characters that show
/// up in practice; anything else passes through unchanged.
fn fold_diacritic(c: char) -> std::vec::IntoIter<char> {
    let folded: &str = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "A",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => "E",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ĩ' | 'Ī' | 'Ĭ' | 'Į' => "I",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ŏ' | 'Ő' => "O",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => "U",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'Ç' | 'Ć' | 'Ĉ' | 'Ċ' | 'Č' => "C",
        'ñ' | 'ń' | 'ņ' | 'ň' => "n",
        'Ñ' | 'Ń' | 'Ņ' | 'Ň' => "N",
        'ý' | 'ÿ' => "y",
        'Ý' => "Y",
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'ś' | 'ŝ' | 'ş' | 'š' => "s",
        'Ś' | 'Ŝ' | 'Ş' | 'Š' => "S",
        'ź' | 'ż' | 'ž' => "z",
        'Ź' | 'Ż' | 'Ž' => "Z",
        'ğ' | 'ĝ' | 'ġ' | 'ģ' => "g",
        'Ğ' | 'Ĝ' | 'Ġ' | 'Ģ' => "G",
        'ł' => "l",
        'Ł' => "L",
        'ř' | 'ŕ' => "r",
        'Ř' | 'Ŕ' => "R",
        'ť' | 'ţ' => "t",
        'Ť' | 'Ţ' => "T",
        'đ' => "d",
        'Đ' => "D",
        _ => return vec![c].into_iter(),
    };
    folded.chars().collect::<Vec<_>>().into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Culto de Jovens"), "culto-de-jovens");
    }

    #[test]
    fn test_slugify_punctuation() {
        assert_eq!(slugify("Igreja Central!"), "igreja-central");
    }

    #[test]
    fn test_slugify_diacritics() {
        assert_eq!(slugify("Oração"), "oracao");
        assert_eq!(slugify("Célula São João"), "celula-sao-joao");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("a  --  b"), "a-b");
        assert_eq!(slugify("QR #3 (entrada)"), "qr-3-entrada");
    }

    #[test]
    fn test_slugify_trims_hyphens() {
        assert_eq!(slugify("--hello--"), "hello");
        assert_eq!(slugify("  spaced  "), "spaced");
    }

    #[test]
    fn test_slugify_idempotent() {
        let once = slugify("Grupo de Intercessão #1");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_slugify_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_numbers_kept() {
        assert_eq!(slugify("Campanha 2025"), "campanha-2025");
    }
}
