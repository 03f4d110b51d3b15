use rand::{Rng, RngCore};

use super::words::Corpus;
use super::{TextError, TextGenerator, MAX_UNITS};
use crate::config::Bounds;
use crate::error::BoxError;

const TLDS: &[&str] = &["com", "net", "org", "io", "dev"];

/// Words per sentence inside a paragraph.
const PARAGRAPH_SENTENCE: Bounds = Bounds::new(8, 15);

/// At most this many commas are sprinkled into one sentence.
const MAX_COMMAS: usize = 2;

/// The built-in lorem ipsum [`TextGenerator`].
///
/// ```rust
/// use lorem_fill::text::{LoremIpsum, TextGenerator};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let word = LoremIpsum.word(&mut rng, 3, 5).unwrap();
/// assert!((3..=5).contains(&word.len()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoremIpsum;

impl LoremIpsum {
    fn checked(min: u32, max: u32) -> Result<Bounds, TextError> {
        let bounds = Bounds::new(min, max);
        if bounds.max > MAX_UNITS {
            return Err(TextError::TooManyUnits {
                requested: bounds.max,
                limit: MAX_UNITS,
            });
        }
        Ok(bounds)
    }

    fn pick(rng: &mut dyn RngCore, bounds: Bounds) -> &'static str {
        let len = bounds.sample(rng) as usize;
        Corpus::get().word(rng, len)
    }

    fn build_sentence(rng: &mut dyn RngCore, count: usize) -> String {
        let corpus = Corpus::get();
        let mut words: Vec<String> = Vec::with_capacity(count);
        let mut commas = 0;

        for i in 0..count {
            words.push(corpus.natural_word(rng).to_string());
            // Never after the first few words or on the last one.
            if i > 2 && i + 1 < count && commas < MAX_COMMAS && rng.gen_ratio(1, count as u32) {
                words[i - 1].push(',');
                commas += 1;
            }
        }

        let mut sentence = words.join(" ");
        sentence.push('.');
        capitalize(&sentence)
    }

    fn build_host(rng: &mut dyn RngCore) -> String {
        let name = Self::pick(rng, Bounds::DEFAULT_UNITS);
        let tld = TLDS[rng.gen_range(0..TLDS.len())];
        format!("{name}.{tld}")
    }
}

impl TextGenerator for LoremIpsum {
    fn word(&self, rng: &mut dyn RngCore, min: u32, max: u32) -> Result<String, BoxError> {
        let bounds = Self::checked(min, max)?;
        Ok(Self::pick(rng, bounds).to_string())
    }

    fn sentence(&self, rng: &mut dyn RngCore, min: u32, max: u32) -> Result<String, BoxError> {
        let count = Self::checked(min, max)?.sample(rng).max(1);
        Ok(Self::build_sentence(rng, count as usize))
    }

    fn paragraph(&self, rng: &mut dyn RngCore, min: u32, max: u32) -> Result<String, BoxError> {
        let count = Self::checked(min, max)?.sample(rng).max(1);
        let sentences: Vec<String> = (0..count)
            .map(|_| {
                let words = PARAGRAPH_SENTENCE.sample(rng);
                Self::build_sentence(rng, words as usize)
            })
            .collect();
        Ok(sentences.join(" "))
    }

    fn url(&self, rng: &mut dyn RngCore) -> Result<String, BoxError> {
        let host = Self::build_host(rng);
        let path = Self::pick(rng, Bounds::DEFAULT_UNITS);
        Ok(format!("http://www.{host}/{path}"))
    }

    fn readable_path(&self, _rng: &mut dyn RngCore, seed: &str) -> Result<String, BoxError> {
        Ok(slugify(seed))
    }

    fn host(&self, rng: &mut dyn RngCore) -> Result<String, BoxError> {
        Ok(Self::build_host(rng))
    }

    fn email(&self, rng: &mut dyn RngCore) -> Result<String, BoxError> {
        let user = Self::pick(rng, Bounds::new(4, 10));
        let host = Self::build_host(rng);
        Ok(format!("{user}@{host}"))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn slugify(seed: &str) -> String {
    seed.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5EED)
    }

    #[test]
    fn test_word_respects_bounds() {
        let mut rng = rng();
        for _ in 0..100 {
            let word = LoremIpsum.word(&mut rng, 10, 11).unwrap();
            assert!((10..=11).contains(&word.len()), "{word}");
        }
    }

    #[test]
    fn test_sentence_shape() {
        let mut rng = rng();
        for _ in 0..50 {
            let sentence = LoremIpsum.sentence(&mut rng, 10, 11).unwrap();
            let words = sentence.split_whitespace().count();
            assert!((10..=11).contains(&words), "{sentence}");
            assert!(sentence.ends_with('.'));
            assert!(sentence.chars().next().unwrap().is_uppercase());
            assert!(sentence.matches(',').count() <= MAX_COMMAS);
        }
    }

    #[test]
    fn test_sentence_has_at_least_one_word() {
        let mut rng = rng();
        let sentence = LoremIpsum.sentence(&mut rng, 0, 0).unwrap();
        assert_eq!(sentence.split_whitespace().count(), 1);
    }

    #[test]
    fn test_paragraph_sentence_count() {
        let mut rng = rng();
        let paragraph = LoremIpsum.paragraph(&mut rng, 3, 3).unwrap();
        assert_eq!(paragraph.matches('.').count(), 3);
    }

    #[test]
    fn test_host_url_email() {
        let mut rng = rng();
        let host = LoremIpsum.host(&mut rng).unwrap();
        let (name, tld) = host.split_once('.').unwrap();
        assert!(!name.is_empty());
        assert!(TLDS.contains(&tld));

        let url = LoremIpsum.url(&mut rng).unwrap();
        assert!(url.starts_with("http://www."), "{url}");

        let email = LoremIpsum.email(&mut rng).unwrap();
        let (user, domain) = email.split_once('@').unwrap();
        assert!((4..=10).contains(&user.len()));
        assert!(domain.contains('.'));
    }

    #[test]
    fn test_readable_path() {
        let mut rng = rng();
        assert_eq!(
            LoremIpsum
                .readable_path(&mut rng, "Lorem ipsum, dolor sit amet.")
                .unwrap(),
            "lorem-ipsum-dolor-sit-amet"
        );
        assert_eq!(LoremIpsum.readable_path(&mut rng, " , ").unwrap(), "");
    }

    #[test]
    fn test_too_many_units() {
        let mut rng = rng();
        let err = LoremIpsum.paragraph(&mut rng, 1, MAX_UNITS + 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot generate 10001 units, the limit is 10000"
        );
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let a = LoremIpsum.paragraph(&mut rng(), 2, 4).unwrap();
        let b = LoremIpsum.paragraph(&mut rng(), 2, 4).unwrap();
        assert_eq!(a, b);
    }
}
