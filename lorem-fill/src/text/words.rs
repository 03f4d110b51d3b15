//! The word corpus, bucketed by length.

use std::sync::OnceLock;

use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, RngCore};

/// Lorem ipsum vocabulary. Every length from 1 to 14 is represented.
#[rustfmt::skip]
const WORDS: &[&str] = &[
    "a",
    "ab", "ad", "at", "et", "ex", "id", "in", "is", "ne", "se", "ut",
    "cum", "est", "eum", "hic", "non", "qui", "rem", "sed", "sit", "sum", "vel", "eos", "nam",
    "iam", "nec",
    "amet", "anim", "aute", "enim", "esse", "eius", "fuga", "illo", "ipsa", "iure", "modi",
    "nisi", "odio", "quam", "quia", "quis", "sint", "sunt", "unde", "vero", "nemo",
    "culpa", "dolor", "eaque", "error", "illum", "ipsum", "irure", "magna", "magni", "minim",
    "minus", "nihil", "nobis", "nulla", "omnis", "quasi", "velit", "autem", "fugit", "harum",
    "saepe",
    "labore", "dolore", "beatae", "cillum", "fugiat", "libero", "maxime", "minima", "quidem",
    "soluta", "tempor", "veniam", "aliqua",
    "nostrum", "aliquam", "commodi", "dolores", "eiusmod", "impedit", "laborum", "officia",
    "placeat", "quaerat", "tempora", "nostrud", "ratione",
    "nesciunt", "sapiente", "pariatur", "adipisci", "deserunt", "mollitia", "occaecat",
    "possimus", "proident", "quisquam", "suscipit", "voluptas",
    "obcaecati", "accusamus", "excepteur", "explicabo", "inventore", "molestiae", "provident",
    "similique", "consequat",
    "temporibus", "voluptatem", "laboriosam", "architecto", "aspernatur", "blanditiis",
    "cupiditate", "distinctio", "doloremque", "reiciendis", "voluptatum",
    "praesentium", "consectetur", "accusantium", "consequatur", "repudiandae", "dignissimos",
    "exercitation", "perspiciatis", "voluptatibus",
    "reprehenderit",
    "exercitationem", "necessitatibus",
];

/// Relative frequency of word lengths 1..=13 in running text.
const LENGTH_WEIGHTS: [u32; 13] = [3, 17, 20, 16, 11, 9, 7, 6, 4, 3, 2, 1, 1];

pub(crate) struct Corpus {
    /// `by_len[n]` holds the words with `n` characters.
    by_len: Vec<Vec<&'static str>>,
    lengths: WeightedIndex<u32>,
}

impl Corpus {
    pub(crate) fn get() -> &'static Corpus {
        static CORPUS: OnceLock<Corpus> = OnceLock::new();
        CORPUS.get_or_init(Corpus::build)
    }

    fn build() -> Self {
        let longest = WORDS.iter().map(|w| w.len()).max().unwrap_or(0);
        let mut by_len = vec![Vec::new(); longest + 1];
        for word in WORDS {
            by_len[word.len()].push(*word);
        }
        let lengths = WeightedIndex::new(LENGTH_WEIGHTS).expect("length weights are positive");
        Self { by_len, lengths }
    }

    pub(crate) fn longest(&self) -> usize {
        self.by_len.len() - 1
    }

    /// A word with exactly `len` characters, clamped to the corpus range.
    ///
    /// Falls back to the nearest shorter length, then the nearest longer one,
    /// if the corpus has a gap.
    pub(crate) fn word(&self, rng: &mut dyn RngCore, len: usize) -> &'static str {
        let len = len.clamp(1, self.longest());
        let bucket = (1..=len)
            .rev()
            .chain(len + 1..=self.longest())
            .map(|n| &self.by_len[n])
            .find(|bucket| !bucket.is_empty())
            .expect("corpus is not empty");
        bucket[rng.gen_range(0..bucket.len())]
    }

    /// A word whose length follows [`LENGTH_WEIGHTS`].
    pub(crate) fn natural_word(&self, rng: &mut dyn RngCore) -> &'static str {
        let len = self.lengths.sample(rng) + 1;
        self.word(rng, len)
    }
}
