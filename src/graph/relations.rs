//! Word-pair relation extraction
//!
//! Derives the directed lemma pairs that form the cohesion graph's edges:
//! subject–noun and noun–noun pairs within each sentence, plus taxonomy
//! bridges (hypernym/hyponym links) between consecutive sentences.

use crate::errors::{CohesionError, Result};
use crate::nlp::TaxonomyProvider;
use crate::types::{Sentence, Word, WordPair};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Extracts the document's word-pair relations.
///
/// Sentences are processed independently; output order is all
/// within-sentence pairs in sentence order, followed by all cross-sentence
/// bridge pairs in sentence-index order. The parallel path produces the
/// same sequence as the sequential one.
#[derive(Debug)]
pub struct RelationExtractor<T> {
    taxonomy: T,
    parallel_threshold: usize,
}

impl<T: TaxonomyProvider + Sync> RelationExtractor<T> {
    /// Create an extractor over the given taxonomy.
    pub fn new(taxonomy: T) -> Self {
        Self {
            taxonomy,
            parallel_threshold: 64,
        }
    }

    /// Set the sentence count at which extraction fans out across threads.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Extract all word pairs for the document.
    ///
    /// A sentence without a syntactic root contributes no within-sentence
    /// pairs but still participates in bridging; provider errors abort the
    /// document.
    pub fn extract(&self, sentences: &[Sentence]) -> Result<Vec<WordPair>> {
        if sentences.len() < self.parallel_threshold {
            self.extract_sequential(sentences)
        } else {
            self.extract_parallel(sentences)
        }
    }

    fn extract_sequential(&self, sentences: &[Sentence]) -> Result<Vec<WordPair>> {
        let mut pairs = Vec::new();

        for sentence in sentences {
            match Self::sentence_pairs(sentence) {
                Ok(sentence_pairs) => pairs.extend(sentence_pairs),
                Err(CohesionError::MalformedSentence { index: _index }) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(sentence = _index, "skipping sentence without root");
                }
                Err(e) => return Err(e),
            }
        }

        for window in sentences.windows(2) {
            pairs.extend(self.bridge_pairs(&window[0], &window[1])?);
        }

        Ok(pairs)
    }

    fn extract_parallel(&self, sentences: &[Sentence]) -> Result<Vec<WordPair>> {
        let within: Vec<Vec<WordPair>> = sentences
            .par_iter()
            .map(|sentence| match Self::sentence_pairs(sentence) {
                Ok(sentence_pairs) => Ok(sentence_pairs),
                Err(CohesionError::MalformedSentence { .. }) => Ok(Vec::new()),
                Err(e) => Err(e),
            })
            .collect::<Result<_>>()?;

        let bridges: Vec<Vec<WordPair>> = sentences
            .par_windows(2)
            .map(|window| self.bridge_pairs(&window[0], &window[1]))
            .collect::<Result<_>>()?;

        Ok(within.into_iter().chain(bridges).flatten().collect())
    }

    /// Within-sentence pairs for one sentence.
    ///
    /// The subject is the root's first left dependent. When the subject is
    /// nominal, every other noun pairs with it; when the subject is missing
    /// or non-nominal, all noun 2-combinations pair with each other.
    fn sentence_pairs(sentence: &Sentence) -> Result<Vec<WordPair>> {
        let root = sentence
            .root()
            .ok_or(CohesionError::MalformedSentence {
                index: sentence.index,
            })?;

        let subject = root
            .left_deps
            .first()
            .and_then(|&i| sentence.words.get(i));

        let nouns: Vec<&Word> = sentence.nouns().collect();
        let mut pairs = Vec::new();

        match subject {
            Some(subject) if subject.pos.is_noun() => {
                for noun in &nouns {
                    if noun.lemma != subject.lemma {
                        pairs.push(WordPair::new(&subject.lemma, &noun.lemma));
                    }
                }
            }
            _ => {
                for i in 0..nouns.len() {
                    for j in (i + 1)..nouns.len() {
                        pairs.push(WordPair::new(&nouns[i].lemma, &nouns[j].lemma));
                    }
                }
            }
        }

        Ok(pairs)
    }

    /// Taxonomy bridges from `current` into `next`.
    ///
    /// For each noun of `current`, its broader/narrower lemmas are
    /// intersected with the nouns of `next`; matches are emitted in
    /// next-sentence order so bridge output is reproducible.
    fn bridge_pairs(&self, current: &Sentence, next: &Sentence) -> Result<Vec<WordPair>> {
        let mut next_nouns: Vec<&str> = Vec::new();
        let mut seen = FxHashSet::default();
        for word in next.nouns() {
            if seen.insert(word.lemma.as_str()) {
                next_nouns.push(word.lemma.as_str());
            }
        }

        if next_nouns.is_empty() {
            return Ok(Vec::new());
        }

        let mut pairs = Vec::new();
        for word in current.nouns() {
            let candidates = self.taxonomy.broader_and_narrower(&word.lemma)?;
            if candidates.is_empty() {
                continue;
            }

            for target in &next_nouns {
                if candidates.contains(*target) {
                    pairs.push(WordPair::new(&word.lemma, *target));
                }
            }
        }

        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::StaticTaxonomy;
    use crate::types::PosTag;

    fn word(text: &str, lemma: &str, pos: PosTag) -> Word {
        Word::new(text, lemma, pos)
    }

    /// "John bought a car." — root "bought", subject "John".
    fn john_bought_a_car(index: usize) -> Sentence {
        Sentence::new(
            index,
            vec![
                word("John", "John", PosTag::ProperNoun),
                word("bought", "buy", PosTag::Verb)
                    .with_root()
                    .with_left_deps(vec![0]),
                word("a", "a", PosTag::Determiner),
                word("car", "car", PosTag::Noun),
            ],
        )
    }

    fn extractor() -> RelationExtractor<StaticTaxonomy> {
        RelationExtractor::new(StaticTaxonomy::new())
    }

    #[test]
    fn test_nominal_subject_pairs_with_other_nouns() {
        let pairs = extractor().extract(&[john_bought_a_car(0)]).unwrap();
        assert_eq!(pairs, vec![WordPair::new("John", "car")]);
    }

    #[test]
    fn test_no_subject_yields_noun_combinations() {
        // "There were cats, dogs and birds." — first left dependent of the
        // root is "There", which is not nominal.
        let sentence = Sentence::new(
            0,
            vec![
                word("There", "there", PosTag::Pronoun),
                word("were", "be", PosTag::Verb)
                    .with_root()
                    .with_left_deps(vec![0]),
                word("cats", "cat", PosTag::Noun),
                word("dogs", "dog", PosTag::Noun),
                word("birds", "bird", PosTag::Noun),
            ],
        );

        let pairs = extractor().extract(&[sentence]).unwrap();
        assert_eq!(
            pairs,
            vec![
                WordPair::new("cat", "dog"),
                WordPair::new("cat", "bird"),
                WordPair::new("dog", "bird"),
            ]
        );
    }

    #[test]
    fn test_rootless_subject_yields_noun_combinations() {
        // Root with no left dependents routes to the combinatorial branch.
        let sentence = Sentence::new(
            0,
            vec![
                word("Look", "look", PosTag::Verb).with_root(),
                word("at", "at", PosTag::Preposition),
                word("cats", "cat", PosTag::Noun),
                word("and", "and", PosTag::Conjunction),
                word("dogs", "dog", PosTag::Noun),
            ],
        );

        let pairs = extractor().extract(&[sentence]).unwrap();
        assert_eq!(pairs, vec![WordPair::new("cat", "dog")]);
    }

    #[test]
    fn test_subject_lemma_not_paired_with_itself() {
        // Repeated subject lemma among the nouns is excluded from pairing.
        let sentence = Sentence::new(
            0,
            vec![
                word("Dogs", "dog", PosTag::Noun),
                word("chase", "chase", PosTag::Verb)
                    .with_root()
                    .with_left_deps(vec![0]),
                word("dogs", "dog", PosTag::Noun),
                word("and", "and", PosTag::Conjunction),
                word("cats", "cat", PosTag::Noun),
            ],
        );

        let pairs = extractor().extract(&[sentence]).unwrap();
        assert_eq!(pairs, vec![WordPair::new("dog", "cat")]);
    }

    #[test]
    fn test_malformed_sentence_skipped_but_still_bridges() {
        // No word carries is_root: the sentence loses its within-sentence
        // pairs but its nouns still bridge into the next sentence.
        let malformed = Sentence::new(
            0,
            vec![
                word("dogs", "dog", PosTag::Noun),
                word("cats", "cat", PosTag::Noun),
            ],
        );

        let mut taxonomy = StaticTaxonomy::new();
        taxonomy.insert("dog", ["animal"]);
        let extractor = RelationExtractor::new(taxonomy);

        let next = Sentence::new(
            1,
            vec![
                word("The", "the", PosTag::Determiner),
                word("animal", "animal", PosTag::Noun),
                word("barked", "bark", PosTag::Verb)
                    .with_root()
                    .with_left_deps(vec![1]),
            ],
        );

        let pairs = extractor.extract(&[malformed, next]).unwrap();
        assert_eq!(pairs, vec![WordPair::new("dog", "animal")]);
    }

    #[test]
    fn test_taxonomy_bridge_between_consecutive_sentences() {
        let mut taxonomy = StaticTaxonomy::new();
        taxonomy.insert("dog", ["animal", "puppy"]);
        let extractor = RelationExtractor::new(taxonomy);

        let first = Sentence::new(
            0,
            vec![
                word("The", "the", PosTag::Determiner),
                word("dog", "dog", PosTag::Noun),
                word("slept", "sleep", PosTag::Verb)
                    .with_root()
                    .with_left_deps(vec![1]),
            ],
        );
        let second = Sentence::new(
            1,
            vec![
                word("The", "the", PosTag::Determiner),
                word("animal", "animal", PosTag::Noun),
                word("snored", "snore", PosTag::Verb)
                    .with_root()
                    .with_left_deps(vec![1]),
            ],
        );

        let pairs = extractor.extract(&[first, second]).unwrap();
        assert_eq!(pairs, vec![WordPair::new("dog", "animal")]);
    }

    #[test]
    fn test_last_sentence_contributes_no_bridge() {
        let mut taxonomy = StaticTaxonomy::new();
        taxonomy.insert("car", ["vehicle"]);
        let extractor = RelationExtractor::new(taxonomy);

        // "vehicle" appears in the FIRST sentence; bridges only go forward.
        let first = Sentence::new(
            0,
            vec![
                word("The", "the", PosTag::Determiner),
                word("vehicle", "vehicle", PosTag::Noun),
                word("stopped", "stop", PosTag::Verb)
                    .with_root()
                    .with_left_deps(vec![1]),
            ],
        );
        let second = Sentence::new(
            1,
            vec![
                word("The", "the", PosTag::Determiner),
                word("car", "car", PosTag::Noun),
                word("rusted", "rust", PosTag::Verb)
                    .with_root()
                    .with_left_deps(vec![1]),
            ],
        );

        let pairs = extractor.extract(&[first, second]).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_bridge_emission_follows_next_sentence_order() {
        let mut taxonomy = StaticTaxonomy::new();
        taxonomy.insert("animal", ["dog", "cat", "bird"]);
        let extractor = RelationExtractor::new(taxonomy);

        let first = Sentence::new(
            0,
            vec![
                word("The", "the", PosTag::Determiner),
                word("animal", "animal", PosTag::Noun),
                word("moved", "move", PosTag::Verb)
                    .with_root()
                    .with_left_deps(vec![1]),
            ],
        );
        let second = Sentence::new(
            1,
            vec![
                word("Birds", "bird", PosTag::Noun),
                word("startle", "startle", PosTag::Verb)
                    .with_root()
                    .with_left_deps(vec![0]),
                word("cats", "cat", PosTag::Noun),
            ],
        );

        let pairs = extractor.extract(&[first, second]).unwrap();
        let bridges: Vec<&WordPair> = pairs
            .iter()
            .filter(|p| p.source == "animal")
            .collect();
        assert_eq!(
            bridges,
            vec![
                &WordPair::new("animal", "bird"),
                &WordPair::new("animal", "cat"),
            ]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut taxonomy = StaticTaxonomy::new();
        taxonomy.insert("car", ["vehicle"]);
        taxonomy.insert("dog", ["animal"]);

        let sentences: Vec<Sentence> = (0..6).map(john_bought_a_car).collect();

        let sequential = RelationExtractor::new(&taxonomy)
            .extract(&sentences)
            .unwrap();
        let parallel = RelationExtractor::new(&taxonomy)
            .with_parallel_threshold(1)
            .extract(&sentences)
            .unwrap();

        assert_eq!(sequential, parallel);
    }
}
