// src/lexicon.rs
//! Cue lexicon: two immutable lists of lowercase trigger words (positive / negative).
//!
//! The built-in lexicon is compiled in from `psi_lexicon.json`. An override can be
//! loaded once at startup from TOML or JSON:
//!
//! ```toml
//! positive = ["buy", "rally"]
//! negative = ["sell", "crash"]
//! ```
//!
//! Counting is plain substring counting over the lowercased text, so a cue inside a
//! longer word ("longer" → "long") still counts.

use anyhow::{anyhow, bail, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const ENV_LEXICON_PATH: &str = "PSI_LEXICON_PATH";
pub const DEFAULT_LEXICON_TOML: &str = "config/lexicon.toml";
pub const DEFAULT_LEXICON_JSON: &str = "config/lexicon.json";

static DEFAULT_LEXICON: Lazy<Arc<Lexicon>> = Lazy::new(|| {
    let raw = include_str!("../psi_lexicon.json");
    let lists: RawLexicon = serde_json::from_str(raw).expect("valid embedded lexicon");
    let lexicon = Lexicon::from_lists(lists.positive, lists.negative)
        .expect("non-empty embedded lexicon");
    Arc::new(lexicon)
});

/// The built-in lexicon, shared process-wide.
pub fn default_lexicon() -> Arc<Lexicon> {
    DEFAULT_LEXICON.clone()
}

#[derive(Debug, Deserialize)]
struct RawLexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

/// Positive and negative cue words. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Lexicon {
    /// Build from raw word lists: trims, lowercases, dedups, drops empties.
    /// Empty cues are rejected because they would match at every position.
    pub fn from_lists(positive: Vec<String>, negative: Vec<String>) -> Result<Self> {
        let positive = clean_list(positive);
        let negative = clean_list(negative);
        if positive.is_empty() {
            bail!("lexicon has no positive cues");
        }
        if negative.is_empty() {
            bail!("lexicon has no negative cues");
        }
        Ok(Self { positive, negative })
    }

    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    /// Returns `(pos_score, neg_score)`: summed substring occurrence counts of every cue
    /// in the lowercased text.
    pub fn cue_counts(&self, text: &str) -> (usize, usize) {
        let lower = text.to_lowercase();
        (count_all(&lower, &self.positive), count_all(&lower, &self.negative))
    }

    /// Load a lexicon from an explicit path. Supports TOML or JSON formats.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading lexicon from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        parse_lexicon(&content, ext.as_str())
            .with_context(|| format!("parsing lexicon {}", path.display()))
    }

    /// Load using env var + fallbacks:
    /// 1) $PSI_LEXICON_PATH
    /// 2) config/lexicon.toml
    /// 3) config/lexicon.json
    /// 4) the embedded default
    pub fn load_default() -> Result<Arc<Self>> {
        if let Ok(p) = std::env::var(ENV_LEXICON_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_LEXICON_PATH} points to non-existent path"));
            }
            return Self::load_from(&pb).map(Arc::new);
        }
        for candidate in [DEFAULT_LEXICON_TOML, DEFAULT_LEXICON_JSON] {
            let pb = PathBuf::from(candidate);
            if pb.exists() {
                return Self::load_from(&pb).map(Arc::new);
            }
        }
        Ok(default_lexicon())
    }
}

fn count_all(haystack: &str, cues: &[String]) -> usize {
    cues.iter()
        .map(|cue| haystack.matches(cue.as_str()).count())
        .sum()
}

fn parse_lexicon(s: &str, hint_ext: &str) -> Result<Lexicon> {
    let raw: RawLexicon = match hint_ext {
        "toml" => toml::from_str(s)?,
        "json" => serde_json::from_str(s)?,
        _ => match serde_json::from_str(s) {
            Ok(v) => v,
            Err(_) => toml::from_str(s).map_err(|_| anyhow!("unsupported lexicon format"))?,
        },
    };
    Lexicon::from_lists(raw.positive, raw.negative)
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    use std::collections::BTreeSet;
    let mut set = BTreeSet::new();
    for it in items {
        let t = it.trim();
        if !t.is_empty() {
            set.insert(t.to_lowercase());
        }
    }
    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};

    #[test]
    fn embedded_lexicon_has_eleven_cues_per_polarity() {
        let lex = default_lexicon();
        assert_eq!(lex.positive().len(), 11);
        assert_eq!(lex.negative().len(), 11);
        assert!(lex.positive().iter().any(|w| w == "resilience"));
        assert!(lex.negative().iter().any(|w| w == "uncertainty"));
    }

    #[test]
    fn counts_are_substring_and_case_insensitive() {
        let lex = default_lexicon();
        // "longer" contains "long", "BUY" lowercases to "buy"
        assert_eq!(lex.cue_counts("BUY it, the longer the better"), (2, 0));
        // "shortfall" contains "short", "risky" contains "risk"
        assert_eq!(lex.cue_counts("shortfall looks risky"), (0, 2));
        assert_eq!(lex.cue_counts(""), (0, 0));
    }

    #[test]
    fn self_overlapping_cue_counts_non_overlapping() {
        let lex = Lexicon::from_lists(vec!["aa".into()], vec!["zz".into()]).unwrap();
        assert_eq!(lex.cue_counts("aaa"), (1, 0));
        assert_eq!(lex.cue_counts("AAAA zzz"), (2, 1));
    }

    #[test]
    fn clean_list_trims_dedups_and_lowercases() {
        let lex = Lexicon::from_lists(
            vec![" Buy ".into(), "buy".into(), "".into(), "MOON".into()],
            vec!["sell".into()],
        )
        .unwrap();
        assert_eq!(lex.positive(), &["buy".to_string(), "moon".to_string()]);
    }

    #[test]
    fn empty_polarity_is_rejected() {
        let err = Lexicon::from_lists(vec!["buy".into()], vec!["  ".into()]).unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn toml_and_json_formats_parse() {
        let toml = r#"
positive = ["up"]
negative = ["down"]
"#;
        let json = r#"{"positive": ["Up"], "negative": ["Down"]}"#;
        assert_eq!(parse_lexicon(toml, "toml").unwrap(), parse_lexicon(json, "json").unwrap());
        // no extension hint: JSON first, then TOML
        assert!(parse_lexicon(toml, "").is_ok());
        assert!(parse_lexicon("not a lexicon", "").is_err());
    }

    #[serial_test::serial]
    #[test]
    fn default_uses_env_then_fallbacks() {
        let old = env::current_dir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        env::set_current_dir(tmp.path()).unwrap();
        env::remove_var(ENV_LEXICON_PATH);

        // No files → embedded default
        let lex = Lexicon::load_default().unwrap();
        assert_eq!(*lex, *default_lexicon());

        // Fallback TOML in ./config/
        fs::create_dir_all(tmp.path().join("config")).unwrap();
        fs::write(
            tmp.path().join(DEFAULT_LEXICON_TOML),
            r#"positive = ["up"]
negative = ["down"]"#,
        )
        .unwrap();
        let lex = Lexicon::load_default().unwrap();
        assert_eq!(lex.positive(), &["up".to_string()]);

        // Env wins
        let p_env = tmp.path().join("custom.json");
        fs::write(&p_env, r#"{"positive":["x"],"negative":["y"]}"#).unwrap();
        env::set_var(ENV_LEXICON_PATH, p_env.display().to_string());
        let lex = Lexicon::load_default().unwrap();
        assert_eq!(lex.negative(), &["y".to_string()]);

        // Env pointing nowhere is an error, not a silent fallback
        env::set_var(ENV_LEXICON_PATH, tmp.path().join("missing.toml").display().to_string());
        assert!(Lexicon::load_default().is_err());
        env::remove_var(ENV_LEXICON_PATH);

        env::set_current_dir(&old).unwrap();
    }
}
