// Stem traces: every intermediate buffer of one stemming call.

use std::fmt;

use stemma_core::region::Regions;

use crate::stemmer::{GermanStemmer, StageRecorder};

/// Intermediate values of a single stemming call.
///
/// Buffers are rendered as strings; `marked` and the step outputs keep
/// glide marks visible as uppercase letters. Region offsets are counted in
/// chars of `marked`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StemTrace {
    pub input: String,
    pub normalized: String,
    pub marked: String,
    pub r1: usize,
    pub r2: usize,
    pub after_case_endings: String,
    pub after_comparative: String,
    pub stem: String,
}

impl StageRecorder for StemTrace {
    fn normalized(&mut self, buffer: &[char]) {
        self.normalized = buffer.iter().collect();
    }

    fn marked(&mut self, buffer: &[char], regions: &Regions) {
        self.marked = buffer.iter().collect();
        self.r1 = regions.r1;
        self.r2 = regions.r2;
    }

    fn case_endings(&mut self, buffer: &[char]) {
        self.after_case_endings = buffer.iter().collect();
    }

    fn comparative(&mut self, buffer: &[char]) {
        self.after_comparative = buffer.iter().collect();
    }
}

impl GermanStemmer {
    /// Stem `word`, recording every stage.
    ///
    /// Runs the same pipeline as `stem`, so `trace(word).stem` always
    /// equals `stem(word)` for the same options.
    pub fn trace(&self, word: &str) -> StemTrace {
        let mut trace = StemTrace {
            input: word.to_string(),
            ..StemTrace::default()
        };
        trace.stem = self.run(word, &mut trace).into_iter().collect();
        trace
    }
}

impl fmt::Display for StemTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.input)?;
        writeln!(f, "  normalized={}", self.normalized)?;
        writeln!(f, "  marked={}", self.marked)?;
        writeln!(f, "  r1={} r2={}", self.r1, self.r2)?;
        writeln!(f, "  step1={}", self.after_case_endings)?;
        writeln!(f, "  step2={}", self.after_comparative)?;
        write!(f, "  stem={}", self.stem)
    }
}
