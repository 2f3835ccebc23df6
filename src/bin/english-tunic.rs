// This file is part of english-tunic.
//
// english-tunic is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// english-tunic is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{
    io::{self, IsTerminal, Write},
    path::PathBuf,
};

use clap::{CommandFactory, Parser};
use english_tunic::{
    COPYRIGHT, Dictionary, LONG_VERSION, Transliterator,
    config::Config,
    dictionary::find_dictionary,
    sentence::{render, render_all},
    utils,
};
use log::debug;

/// English to Tunic
///
/// Transliterates English sentences into the glyphs of the Tunic syllabary.
/// Without a SENTENCE it reads sentences from stdin, one per line.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "English to Tunic")]
struct Args {
    /// Pronunciation dictionary in the CMU format (amepd)
    #[arg(long, short)]
    dictionary: Option<PathBuf>,

    /// Configuration file written in RON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write every spelling of a word, separated by '/'
    #[arg(long)]
    all: bool,

    /// Add timestamps to the log
    #[arg(long)]
    timestamps: bool,

    /// Build the manpage
    #[arg(long)]
    man: bool,

    /// The sentence to transliterate
    sentence: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.timestamps);

    if args.man {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Args::command().name("english-tunic").long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-10-14");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("english-tunic.1", buffer)?;
        return Ok(());
    }

    let config = Config::load(args.config.as_deref())?;
    let path = find_dictionary(args.dictionary.as_deref(), config.dictionary.as_deref())?;
    let dictionary = Dictionary::from_path(&path)?;
    let transliterator = Transliterator::new(dictionary, config.special_cases()?);

    if args.sentence.is_empty() {
        prompt(&transliterator, args.all)
    } else {
        println!("{}", write_sentence(&transliterator, &args.sentence.join(" "), args.all));
        Ok(())
    }
}

fn write_sentence(transliterator: &Transliterator, sentence: &str, all: bool) -> String {
    let words = transliterator.transliterate(sentence);

    if all { render_all(&words) } else { render(&words) }
}

fn prompt(transliterator: &Transliterator, all: bool) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let interactive = stdin.is_terminal();
    let mut buffer = String::new();

    loop {
        if interactive {
            write!(stdout, "Sentence: ")?;
            stdout.flush()?;
        }

        buffer.clear();
        if stdin.read_line(&mut buffer)? == 0 {
            debug!("end of input");
            if interactive {
                writeln!(stdout)?;
            }
            return Ok(());
        }

        writeln!(stdout, "{}", write_sentence(transliterator, &buffer, all))?;
    }
}
