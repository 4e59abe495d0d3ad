//! Models and parses the JMdict file.
//! See <https://www.edrdg.org/wiki/index.php/JMdict-EDICT_Dictionary_Project>
//!
//! Only the written forms, readings and glosses are modeled.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JMdict {
    #[serde(default)]
    pub entry: Vec<Entry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub k_ele: Vec<KEle>,
    #[serde(default)]
    pub r_ele: Vec<REle>,
    #[serde(default)]
    pub sense: Vec<Sense>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KEle {
    pub keb: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct REle {
    pub reb: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub gloss: Vec<Gloss>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gloss {
    #[serde(rename = "$value")]
    pub value: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_entry() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<JMdict>
<entry>
<ent_seq>1358280</ent_seq>
<k_ele>
<keb>食べる</keb>
<ke_pri>ichi1</ke_pri>
</k_ele>
<k_ele>
<keb>喰べる</keb>
</k_ele>
<r_ele>
<reb>たべる</reb>
<re_pri>ichi1</re_pri>
</r_ele>
<sense>
<pos>v1</pos>
<gloss>to eat</gloss>
</sense>
<sense>
<gloss g_type="fig">to live on (e.g. a salary)</gloss>
<gloss>to live off</gloss>
</sense>
</entry>
</JMdict>
"#;
        let jmdict: JMdict = crate::read_xml(xml.as_bytes()).unwrap();
        assert_eq!(jmdict.entry.len(), 1);

        let entry = &jmdict.entry[0];
        let kebs = entry.k_ele.iter().map(|k| k.keb.as_str()).collect::<Vec<_>>();
        assert_eq!(kebs, &["食べる", "喰べる"]);
        assert_eq!(entry.r_ele[0].reb, "たべる");
        assert_eq!(entry.sense.len(), 2);
        assert_eq!(entry.sense[1].gloss[0].value, "to live on (e.g. a salary)");
    }

    #[test]
    fn parses_kana_only_entry() {
        let xml = "<JMdict><entry><ent_seq>1000000</ent_seq><r_ele><reb>ヽ</reb></r_ele><sense><gloss>repetition mark in katakana</gloss></sense></entry></JMdict>";
        let jmdict: JMdict = crate::read_xml(xml.as_bytes()).unwrap();
        assert!(jmdict.entry[0].k_ele.is_empty());
        assert_eq!(jmdict.entry[0].r_ele[0].reb, "ヽ");
    }
}
