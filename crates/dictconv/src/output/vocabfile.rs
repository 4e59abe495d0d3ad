//! Types and functionality for creating a vocabfile.
//! The vocabfile is a JSON array with one simplified entry per JMdict entry.

use crate::jmdict::{Entry, JMdict};
use serde::Serialize;
use wana_kana::ConvertJapanese;

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Vocabfile {
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Word {
    pub kanji: Vec<String>,
    pub kana: Vec<String>,
    pub meanings: Vec<String>,
    pub romaji: Vec<String>,
}

impl Vocabfile {
    pub fn from_jmdict(jmdict: JMdict) -> Self {
        let words = jmdict.entry.into_iter().map(handle_entry).collect();
        Vocabfile { words }
    }
}

fn handle_entry(entry: Entry) -> Word {
    let kanji = entry.k_ele.into_iter().map(|k| k.keb).collect();
    let kana = entry
        .r_ele
        .into_iter()
        .map(|r| r.reb)
        .collect::<Vec<_>>();
    let romaji = kana.iter().map(|kana| kana.to_romaji()).collect();
    let meanings = entry
        .sense
        .into_iter()
        .flat_map(|s| s.gloss)
        .map(|g| g.value)
        .collect();

    Word {
        kanji,
        kana,
        meanings,
        romaji,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn convert(entries: &str) -> serde_json::Value {
        let xml = format!("<JMdict>{entries}</JMdict>");
        let jmdict: JMdict = crate::read_xml(xml.as_bytes()).unwrap();
        serde_json::to_value(Vocabfile::from_jmdict(jmdict)).unwrap()
    }

    #[test]
    fn converts_entry() {
        let json = convert(
            r#"<entry>
<ent_seq>1358280</ent_seq>
<k_ele><keb>食べる</keb></k_ele>
<k_ele><keb>喰べる</keb></k_ele>
<r_ele><reb>たべる</reb></r_ele>
<sense><pos>v1</pos><gloss>to eat</gloss></sense>
<sense><gloss>to live on (e.g. a salary)</gloss><gloss>to live off</gloss></sense>
</entry>"#,
        );
        assert_eq!(
            json,
            json!([{
                "kanji": ["食べる", "喰べる"],
                "kana": ["たべる"],
                "meanings": ["to eat", "to live on (e.g. a salary)", "to live off"],
                "romaji": ["taberu"],
            }])
        );
    }

    #[test]
    fn transliterates_every_reading() {
        let json = convert(
            "<entry><ent_seq>1</ent_seq><r_ele><reb>ねこ</reb></r_ele><r_ele><reb>みず</reb></r_ele><sense><gloss>cat</gloss></sense></entry>",
        );
        assert_eq!(json[0]["kanji"], json!([]));
        assert_eq!(json[0]["romaji"], json!(["neko", "mizu"]));
    }

    #[test]
    fn keeps_document_order() {
        let json = convert(
            "<entry><ent_seq>2</ent_seq><r_ele><reb>いぬ</reb></r_ele><sense><gloss>dog</gloss></sense></entry>\
             <entry><ent_seq>1</ent_seq><r_ele><reb>ねこ</reb></r_ele><sense><gloss>cat</gloss></sense></entry>",
        );
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[0]["kana"], json!(["いぬ"]));
        assert_eq!(json[1]["kana"], json!(["ねこ"]));
    }
}
