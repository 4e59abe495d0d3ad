//! Types and functionality for creating a kanjifile.
//! The kanjifile is a JSON array with one simplified entry per KANJIDIC2 character.

use crate::{
    error::{Error, Result},
    kanjidic2::{self, Character, Kanjidic2},
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Kanjifile {
    pub kanji: Vec<Kanji>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Kanji {
    pub kanji: String,
    pub readings: Readings,
    pub meanings: Vec<String>,
    // the keys are only written if the source had a misc element
    #[serde(flatten)]
    pub misc: Option<Misc>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Readings {
    pub onyomi: Vec<String>,
    pub kunyomi: Vec<String>,
    pub nanori: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Misc {
    pub grade: Option<String>,
    pub stroke_count: Option<String>,
    pub jlpt: Option<String>,
}

impl Kanjifile {
    /// Produces one entry per character, in document order.
    /// Fails on the first character without a literal.
    pub fn from_kanjidic2(kd2: Kanjidic2) -> Result<Self> {
        let kanji = kd2
            .character
            .into_iter()
            .enumerate()
            .map(|(index, character)| handle_kanji(index, character))
            .collect::<Result<Vec<_>>>()?;
        Ok(Kanjifile { kanji })
    }
}

fn handle_kanji(index: usize, character: Character) -> Result<Kanji> {
    let kanji = character
        .literal
        .filter(|literal| !literal.is_empty())
        .ok_or(Error::MissingLiteral { index })?;
    if kanji.chars().count() != 1 {
        tracing::warn!("multi-codepoint literal {kanji}");
    }

    let mut readings = Readings::default();
    let mut meanings = vec![];
    if let Some(rm) = character.reading_meaning {
        for rmg in rm.rmgroup {
            handle_readings(rmg.reading, &mut readings);
            meanings.extend(handle_meanings(rmg.meaning));
        }
        readings.nanori = rm
            .nanori
            .into_iter()
            .filter(|nanori| !nanori.is_empty())
            .collect();
    }

    Ok(Kanji {
        kanji,
        readings,
        meanings,
        misc: character.misc.map(handle_misc),
    })
}

fn handle_readings(readings: Vec<kanjidic2::Reading>, into: &mut Readings) {
    for reading in readings {
        match reading.r_type.as_str() {
            "ja_on" => into.onyomi.push(reading.value),
            "ja_kun" => into.kunyomi.push(reading.value),
            // pinyin, korean_r, korean_h, vietnam
            _ => {}
        }
    }
}

fn handle_meanings(meanings: Vec<kanjidic2::Meaning>) -> impl Iterator<Item = String> {
    meanings
        .into_iter()
        .filter(|m| matches!(m.m_lang.as_deref(), None | Some("eng")))
        .map(|m| m.value)
}

fn handle_misc(misc: kanjidic2::Misc) -> Misc {
    Misc {
        grade: misc.grade,
        stroke_count: misc.stroke_count.into_iter().next(),
        jlpt: misc.jlpt,
    }
}
