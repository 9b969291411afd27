use serde::{Deserialize, Serialize};

/// Top-level shape of the corpus file: `{"data": [ ... ]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusFile {
    #[serde(default)]
    pub data: Vec<LineRecord>,
}

/// One annotated line of a play. Every field may be absent in the source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineRecord {
    /// "line" for spoken text, "scene"/"act" for headings
    #[serde(rename = "type")]
    pub line_type: String,
    pub line_id: i64,
    pub play_name: String,
    pub speech_number: String,
    /// Act.scene.line reference such as "1.1.1"
    pub line_number: String,
    pub speaker: String,
    pub text_entry: String,
    /// Precomputed stems of `text_entry`
    #[serde(alias = "words_list")]
    pub tokens: Vec<String>,
}
