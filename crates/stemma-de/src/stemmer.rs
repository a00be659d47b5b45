// GermanStemmer: runs the full pipeline on one word.

use stemma_core::language::Language;
use stemma_core::region::Regions;
use stemma_core::stemmer::Stemmer;

use crate::glide::{mark_glides, restore_glides};
use crate::normalize::normalize;
use crate::regions::german_regions;
use crate::steps::{strip_case_endings, strip_comparative, strip_derivational};

/// Options for [`GermanStemmer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GermanStemmerOptions {
    /// Lowercase marked glides (`U`, `Y`) in the returned stem.
    ///
    /// When false, the stem keeps the uppercase marks, e.g. "bauer"
    /// stems to "baU" instead of "bau".
    pub restore_glides: bool,
}

impl Default for GermanStemmerOptions {
    fn default() -> Self {
        Self {
            restore_glides: true,
        }
    }
}

/// Observer of the intermediate buffers of one pipeline run.
///
/// Every method defaults to a no-op; `()` records nothing.
pub(crate) trait StageRecorder {
    fn normalized(&mut self, _buffer: &[char]) {}
    fn marked(&mut self, _buffer: &[char], _regions: &Regions) {}
    fn case_endings(&mut self, _buffer: &[char]) {}
    fn comparative(&mut self, _buffer: &[char]) {}
}

impl StageRecorder for () {}

/// Snowball-family German stemmer.
///
/// Stateless apart from its options; one instance can stem any number of
/// words from any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GermanStemmer {
    options: GermanStemmerOptions,
}

impl GermanStemmer {
    /// Create a stemmer with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stemmer with the given options.
    pub fn with_options(options: GermanStemmerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> GermanStemmerOptions {
        self.options
    }

    /// Run the pipeline and return the stem as a char buffer.
    pub fn stem_chars(&self, word: &str) -> Vec<char> {
        self.run(word, &mut ())
    }

    /// The pipeline, reporting each stage to `recorder`.
    pub(crate) fn run<R: StageRecorder>(&self, word: &str, recorder: &mut R) -> Vec<char> {
        let mut buffer = normalize(word);
        recorder.normalized(&buffer);
        let marks = mark_glides(&mut buffer);
        let regions = german_regions(&buffer);
        recorder.marked(&buffer, &regions);
        tracing::trace!(
            len = buffer.len(),
            marks,
            r1 = regions.r1,
            r2 = regions.r2,
            "computed regions"
        );

        let buffer = strip_case_endings(buffer, &regions);
        tracing::trace!(len = buffer.len(), "step 1 done");
        recorder.case_endings(&buffer);
        let buffer = strip_comparative(buffer, &regions);
        tracing::trace!(len = buffer.len(), "step 2 done");
        recorder.comparative(&buffer);
        let mut buffer = strip_derivational(buffer, &regions);
        tracing::trace!(len = buffer.len(), "step 3 done");

        if self.options.restore_glides {
            restore_glides(&mut buffer);
        }
        buffer
    }
}

impl Stemmer for GermanStemmer {
    fn stem(&self, word: &str) -> String {
        let stem: String = self.stem_chars(word).into_iter().collect();
        tracing::trace!(word, stem = stem.as_str(), "stemmed");
        stem
    }

    fn language(&self) -> Language {
        Language::German
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        GermanStemmer::new().stem(word)
    }

    #[derive(Default)]
    struct Stages(Vec<String>);

    impl StageRecorder for Stages {
        fn normalized(&mut self, buffer: &[char]) {
            self.0.push(buffer.iter().collect());
        }

        fn marked(&mut self, buffer: &[char], regions: &Regions) {
            let marked: String = buffer.iter().collect();
            self.0.push(format!("{marked} {} {}", regions.r1, regions.r2));
        }

        fn case_endings(&mut self, buffer: &[char]) {
            self.0.push(buffer.iter().collect());
        }

        fn comparative(&mut self, buffer: &[char]) {
            self.0.push(buffer.iter().collect());
        }
    }

    #[test]
    fn run_reports_every_stage() {
        let mut stages = Stages::default();
        let stem = GermanStemmer::new().run("Bauern", &mut stages);
        assert_eq!(stem.into_iter().collect::<String>(), "bau");
        assert_eq!(stages.0, ["bauern", "baUern 3 5", "baU", "baU"]);
    }

    #[test]
    fn recording_does_not_change_the_stem() {
        let stemmer = GermanStemmer::new();
        for word in ["Freundlichkeit", "eigenen", "Häusern", "ab", ""] {
            let mut stages = Stages::default();
            assert_eq!(stemmer.run(word, &mut stages), stemmer.stem_chars(word), "{word}");
        }
    }

    #[test]
    fn empty_word() {
        assert_eq!(stem(""), "");
    }

    #[test]
    fn reference_example() {
        assert_eq!(stem("unabhangig"), "unabhang");
    }

    #[test]
    fn inflected_nouns() {
        assert_eq!(stem("Häuser"), "häus");
        assert_eq!(stem("Häusern"), "häus");
        assert_eq!(stem("Katzen"), "katz");
        assert_eq!(stem("Tages"), "tag");
        assert_eq!(stem("Kenntnissen"), "kenntnis");
    }

    #[test]
    fn chained_steps() {
        // step 1 removes "en", step 2 removes the remaining "en"
        assert_eq!(stem("eigenen"), "eig");
        // step 1 removes "en", step 3 removes "keit"
        assert_eq!(stem("Möglichkeiten"), "möglich");
        assert_eq!(stem("Schwierigkeiten"), "schwierig");
    }

    #[test]
    fn eszett_is_expanded_first() {
        assert_eq!(stem("straße"), "strass");
        assert_eq!(stem("Straßen"), "strass");
    }

    #[test]
    fn short_words_are_only_normalized() {
        assert_eq!(stem("Ab"), "ab");
        assert_eq!(stem("AUS"), "aus");
        assert_eq!(stem("aue"), "aue");
        assert_eq!(stem("ß"), "ss");
    }

    #[test]
    fn glide_restoration_is_configurable() {
        assert_eq!(stem("Bauern"), "bau");
        assert_eq!(stem("bayerisch"), "bayer");

        let raw = GermanStemmer::with_options(GermanStemmerOptions {
            restore_glides: false,
        });
        assert_eq!(raw.stem("Bauern"), "baU");
        assert_eq!(raw.stem("bayerisch"), "baYer");
        assert!(!raw.options().restore_glides);
    }

    #[test]
    fn words_without_vowels_or_consonants() {
        assert_eq!(stem("brrrr"), "brrrr");
        assert_eq!(stem("aeiou"), "aeiou");
        assert_eq!(stem("1234"), "1234");
    }

    #[test]
    fn never_longer_than_normalized() {
        for word in ["Arbeiterinnen", "Freundlichkeit", "xyz", "Größe", "über", "ß"] {
            let normalized = crate::normalize::normalize(word);
            assert!(GermanStemmer::new().stem_chars(word).len() <= normalized.len(), "{word}");
        }
    }

    #[test]
    fn language_is_german() {
        assert_eq!(GermanStemmer::new().language(), Language::German);
    }
}
