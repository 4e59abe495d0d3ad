//! Creates the `kanji.json` and `vocabulary.json` files.

mod cli;

use clap::Parser;
use cli::{Cli, Command, KanjiArgs, VocabularyArgs};
use dictconv::{jmdict::JMdict, kanjidic2::Kanjidic2, kanjifile::Kanjifile, vocabfile::Vocabfile};
use eyre::WrapErr;
use std::{fs::File, path::Path};

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Kanji(cli.kanji)) {
        Command::Kanji(KanjiArgs { kanjidic, output }) => {
            let count = create_kanjifile(&kanjidic, &output)?;
            println!("Converted {count} kanji entries to {}", output.display());
        }
        Command::Vocabulary(VocabularyArgs { jmdict, output }) => {
            let count = create_vocabfile(&jmdict, &output)?;
            println!("Converted {count} vocabulary entries to {}", output.display());
        }
    }

    Ok(())
}

/// Returns the number of kanji written.
/// The output file is only created after the input has been converted successfully.
fn create_kanjifile(kanjidic_path: &Path, output_path: &Path) -> eyre::Result<usize> {
    tracing::info!("opening {}", kanjidic_path.display());
    let kd2 = open(kanjidic_path)?;

    tracing::info!("deserializing");
    let kd2: Kanjidic2 = dictconv::read_xml(kd2).wrap_err_with(|| {
        format!(
            "Failed to deserialize KANJIDIC2 file at '{}'",
            kanjidic_path.display()
        )
    })?;

    tracing::info!("producing kanjifile");
    let kanjifile = Kanjifile::from_kanjidic2(kd2)?;

    tracing::info!("writing {}", output_path.display());
    let kf = create(output_path)?;
    dictconv::write_json(kf, &kanjifile)?;
    Ok(kanjifile.kanji.len())
}

/// Returns the number of words written.
/// The output file is only created after the input has been converted successfully.
fn create_vocabfile(jmdict_path: &Path, output_path: &Path) -> eyre::Result<usize> {
    tracing::info!("opening {}", jmdict_path.display());
    let jmdict = open(jmdict_path)?;

    tracing::info!("deserializing");
    let jmdict: JMdict = dictconv::read_xml(jmdict).wrap_err_with(|| {
        format!(
            "Failed to deserialize JMdict file at '{}'",
            jmdict_path.display()
        )
    })?;

    tracing::info!("producing vocabfile");
    let vocabfile = Vocabfile::from_jmdict(jmdict);

    tracing::info!("writing {}", output_path.display());
    let vf = create(output_path)?;
    dictconv::write_json(vf, &vocabfile)?;
    Ok(vocabfile.words.len())
}

fn open(path: &Path) -> eyre::Result<File> {
    File::open(path).wrap_err_with(|| format!("Failed to open file at '{}'", path.display()))
}

fn create(path: &Path) -> eyre::Result<File> {
    File::create(path).wrap_err_with(|| format!("Failed to create file at '{}'", path.display()))
}
