use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Converts the KANJIDIC2 and JMdict dictionaries into simplified JSON files.
/// Without a subcommand, converts KANJIDIC2.
#[derive(Parser)]
#[command(author, version, about, long_about, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
    #[command(flatten)]
    pub kanji: KanjiArgs,
}

#[derive(Subcommand)]
pub enum Command {
    /// Converts a KANJIDIC2 file into the kanji JSON file.
    Kanji(KanjiArgs),
    /// Converts a JMdict file into the vocabulary JSON file.
    Vocabulary(VocabularyArgs),
}

#[derive(Args)]
pub struct KanjiArgs {
    /// The path to the input KANJIDIC2 file.
    #[arg(
        short = 'd',
        long,
        env = "KANJIDIC2_PATH",
        default_value = "src/data/source_data/kanjidic2.xml"
    )]
    pub kanjidic: PathBuf,
    /// The path to the output kanji file.
    #[arg(
        short,
        long,
        env = "KANJI_JSON_PATH",
        default_value = "src/data/dictionary/kanji.json"
    )]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct VocabularyArgs {
    /// The path to the input JMdict file.
    #[arg(
        short,
        long,
        env = "JMDICT_PATH",
        default_value = "src/data/source_data/JMdict_e.xml"
    )]
    pub jmdict: PathBuf,
    /// The path to the output vocabulary file.
    #[arg(
        short,
        long,
        env = "VOCABULARY_JSON_PATH",
        default_value = "src/data/dictionary/vocabulary.json"
    )]
    pub output: PathBuf,
}
