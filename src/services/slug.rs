use crate::models::Brand;

/// Every base slug carries exactly this many hyphen-joined tokens.
pub const SLUG_TOKENS: usize = 4;

/// Filler token for titles that come up short after the brand rule ran.
const PAD_TOKEN: &str = "item";

/// Lowercases the title, strips everything that is not alphanumeric,
/// whitespace or a hyphen, and splits on whitespace runs. A blank title
/// yields an empty sequence.
pub fn tokenize(title: &str) -> Vec<String> {
    title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Derives the base slug for a brand and title: tokenize, apply the brand
/// rule on the raw token sequence, then force the 4-token shape and join
/// with hyphens. Returns an empty string when the title tokenizes to
/// nothing; the caller substitutes a SKU-based fallback.
///
/// The result is deterministic and still subject to global uniqueness
/// suffixing (see `registry`).
pub fn base_slug(brand: Brand, title: &str) -> String {
    let mut tokens = tokenize(title);
    if tokens.is_empty() {
        return String::new();
    }
    apply_brand_rule(brand, &mut tokens);
    normalize(&mut tokens);
    tokens.join("-")
}

fn apply_brand_rule(brand: Brand, tokens: &mut Vec<String>) {
    match brand {
        // Exactly three tokens get "solid" before the last one. Four or
        // more pass through and let the normalizer truncate.
        Brand::Tommy => {
            if tokens.len() == 3 {
                tokens.insert(2, "solid".to_string());
            }
        }
        // A trailing "shirt" is dropped and "curved" goes in front of the
        // new last token.
        Brand::Shein => {
            if tokens.last().map(String::as_str) == Some("shirt") {
                tokens.pop();
                if !tokens.is_empty() {
                    tokens.insert(tokens.len() - 1, "curved".to_string());
                }
            }
        }
        // A trailing "shirt" is dropped, nothing is inserted.
        Brand::Reiss => {
            if tokens.last().map(String::as_str) == Some("shirt") {
                tokens.pop();
            }
        }
        Brand::Next | Brand::Other => {}
    }
}

fn normalize(tokens: &mut Vec<String>) {
    tokens.truncate(SLUG_TOKENS);
    while tokens.len() < SLUG_TOKENS {
        tokens.push(PAD_TOKEN.to_string());
    }
}
