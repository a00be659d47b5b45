// WASM bindings for Stemma stemmers.
//
// Provides a `WasmStemmer` class exported via wasm-bindgen that wraps the
// `StemmerHandle` from stemma-de. Stem traces are serialized to JavaScript
// objects using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const stemmer = new WasmStemmer("de");  // or new WasmStemmer()
//   stemmer.stem("Häusern");                // => "häus"
//   stemmer.stemIn("deu", "Bedeutung");     // => "bedeut"
//   stemmer.stemAll(["Bauern", "Lehrers"]); // => ["bau", "lehr"]
//   stemmer.trace("Bauern");                // => { input: "Bauern", r1: 3, ... }
//   stemmer.setRestoreGlides(false);

use serde::Serialize;
use wasm_bindgen::prelude::*;

use stemma_core::Language;
use stemma_de::handle::{StemmaError, StemmerHandle};
use stemma_de::trace::StemTrace;

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a stem trace.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStemTrace {
    input: String,
    normalized: String,
    marked: String,
    r1: usize,
    r2: usize,
    after_case_endings: String,
    after_comparative: String,
    stem: String,
}

impl From<StemTrace> for JsStemTrace {
    fn from(t: StemTrace) -> Self {
        JsStemTrace {
            input: t.input,
            normalized: t.normalized,
            marked: t.marked,
            r1: t.r1,
            r2: t.r2,
            after_case_endings: t.after_case_endings,
            after_comparative: t.after_comparative,
            stem: t.stem,
        }
    }
}

fn stemma_error_to_js(e: StemmaError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmStemmer
// ============================================================================

/// Word stemmer for WebAssembly.
#[wasm_bindgen]
pub struct WasmStemmer {
    handle: StemmerHandle,
}

#[wasm_bindgen]
impl WasmStemmer {
    /// Create a stemmer for a language code. Omitting it selects German.
    #[wasm_bindgen(constructor)]
    pub fn new(language: Option<String>) -> Result<WasmStemmer, JsError> {
        let code = language.as_deref().unwrap_or(Language::German.code());
        let handle = StemmerHandle::new(code).map_err(stemma_error_to_js)?;
        Ok(WasmStemmer { handle })
    }

    /// Stem a word in the stemmer's language.
    pub fn stem(&self, word: &str) -> String {
        self.handle.stem(word)
    }

    /// Stem a word in an explicitly named language.
    #[wasm_bindgen(js_name = "stemIn")]
    pub fn stem_in(&self, language: &str, word: &str) -> Result<String, JsError> {
        self.handle.stem_in(language, word).map_err(stemma_error_to_js)
    }

    /// Stem an array of words, preserving order.
    #[wasm_bindgen(js_name = "stemAll")]
    pub fn stem_all(&self, words: Vec<String>) -> Vec<String> {
        self.handle.stem_words(&words)
    }

    /// Stem a word and return every intermediate stage.
    ///
    /// Returns an object with fields `input`, `normalized`, `marked`, `r1`,
    /// `r2`, `afterCaseEndings`, `afterComparative`, `stem`.
    pub fn trace(&self, word: &str) -> Result<JsValue, JsError> {
        let trace = JsStemTrace::from(self.handle.trace(word));
        serde_wasm_bindgen::to_value(&trace)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Set whether marked glides are lowercased in returned stems.
    #[wasm_bindgen(js_name = "setRestoreGlides")]
    pub fn set_restore_glides(&mut self, value: bool) {
        self.handle.set_restore_glides(value);
    }

    /// The stemmer's language code.
    pub fn language(&self) -> String {
        self.handle.language().code().to_string()
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        StemmerHandle::get_version().to_string()
    }

    /// Codes of every language a stemmer can be created for.
    #[wasm_bindgen(js_name = "supportedLanguages")]
    pub fn supported_languages() -> Vec<String> {
        StemmerHandle::supported_languages()
            .iter()
            .map(|l| l.code().to_string())
            .collect()
    }
}

// Native tests stay on paths that never construct a JsValue or JsError.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_through_wrapper() {
        let Ok(stemmer) = WasmStemmer::new(None) else { panic!("german stemmer") };
        assert_eq!(stemmer.stem("Häusern"), "häus");
        assert_eq!(stemmer.language(), "de");
        assert_eq!(
            stemmer.stem_all(vec!["Bauern".to_string(), "Lehrers".to_string()]),
            vec!["bau".to_string(), "lehr".to_string()]
        );
    }

    #[test]
    fn restore_glides_toggle() {
        let Ok(mut stemmer) = WasmStemmer::new(Some("de-AT".to_string())) else {
            panic!("german stemmer")
        };
        stemmer.set_restore_glides(false);
        assert_eq!(stemmer.stem("Bauern"), "baU");
    }

    #[test]
    fn trace_dto_fields() {
        let Ok(stemmer) = WasmStemmer::new(None) else { panic!("german stemmer") };
        let dto = JsStemTrace::from(stemmer.handle.trace("Bauern"));
        assert_eq!(dto.marked, "baUern");
        assert_eq!(dto.stem, "bau");
    }

    #[test]
    fn metadata() {
        assert_eq!(WasmStemmer::supported_languages(), vec!["de".to_string()]);
        assert_eq!(WasmStemmer::get_version(), StemmerHandle::get_version());
    }
}
