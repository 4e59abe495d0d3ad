//! Models and parses the KANJIDIC2 file.
//! See <https://www.edrdg.org/wiki/index.php/KANJIDIC_Project>
//!
//! Only the elements the kanjifile is derived from are modeled,
//! the rest of the file (header, codepoints, radicals, dictionary references...) is skipped.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kanjidic2 {
    #[serde(default)]
    pub character: Vec<Character>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub literal: Option<String>,
    pub misc: Option<Misc>,
    pub reading_meaning: Option<ReadingMeaning>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Misc {
    pub grade: Option<String>,
    // the first one is the accepted count, the rest are common miscounts
    #[serde(default)]
    pub stroke_count: Vec<String>,
    pub jlpt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingMeaning {
    #[serde(default)]
    pub rmgroup: Vec<Rmgroup>,
    #[serde(default)]
    pub nanori: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rmgroup {
    #[serde(default)]
    pub reading: Vec<Reading>,
    #[serde(default)]
    pub meaning: Vec<Meaning>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    #[serde(rename = "$value")]
    pub value: String,
    pub r_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(rename = "$value")]
    pub value: String,
    pub m_lang: Option<String>,
}
