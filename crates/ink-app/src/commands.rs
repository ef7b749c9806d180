use std::io::Write;

use anyhow::{Context, Result};
use ink_ascii::render::render;
use ink_ascii::shapes;
use ink_core::traits::Speaker;
use ink_speech::{letters_separated, number_to_words, spelled_for_speech};

use crate::cli::Command;

/// Exécute une sous-commande texte. `speaker` n'est appelé que sur demande.
///
/// # Errors
/// Returns an error on unknown pattern names, speech failures, or write errors.
pub fn run_command<W: Write>(
    command: &Command,
    speaker: &dyn Speaker,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Words { number, speak } => {
            let words = number_to_words(*number);
            writeln!(out, "{number} -> {words}")?;
            if *speak {
                speaker.speak(&words)?;
            }
        }
        Command::Spell {
            word,
            sep,
            keep_case,
            speak,
        } => {
            writeln!(out, "{word} -> {}", letters_separated(word, sep, !keep_case))?;
            if *speak {
                speaker.speak(&spelled_for_speech(word))?;
            }
        }
        Command::Say { text } => {
            speaker.speak(&text.join(" "))?;
        }
        Command::Square {
            size,
            glyph,
            hollow,
        } => render(&shapes::square(*size, *glyph, !hollow), out)?,
        Command::Circle {
            radius,
            glyph,
            filled,
        } => render(&shapes::circle(*radius, *glyph, *filled), out)?,
        Command::Stamp {
            pattern,
            scale_x,
            scale_y,
            on,
            off,
        } => {
            let rows = shapes::named_pattern(pattern)
                .with_context(|| format!("Motif inconnu '{pattern}' (heart, smiley)"))?;
            render(&shapes::stamp(rows, *scale_x, *scale_y, *on, *off), out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    use ink_core::CoreError;

    /// Records what would have been spoken.
    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl Speaker for Recorder {
        fn speak(&self, text: &str) -> Result<(), CoreError> {
            self.0.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn locate_executable(&self) -> Option<PathBuf> {
            None
        }
    }

    fn run(command: &Command, speaker: &Recorder) -> String {
        let mut out = Vec::new();
        run_command(command, speaker, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn words_prints_and_optionally_speaks() {
        let rec = Recorder::default();
        let printed = run(
            &Command::Words {
                number: 300,
                speak: true,
            },
            &rec,
        );
        assert_eq!(printed, "300 -> three hundred\n");
        assert_eq!(rec.0.borrow().as_slice(), ["three hundred"]);
    }

    #[test]
    fn spell_speaks_comma_separated_capitals() {
        let rec = Recorder::default();
        let printed = run(
            &Command::Spell {
                word: "Morizo".into(),
                sep: " ".into(),
                keep_case: false,
                speak: true,
            },
            &rec,
        );
        assert_eq!(printed, "Morizo -> M O R I Z O\n");
        assert_eq!(rec.0.borrow().as_slice(), ["M, O, R, I, Z, O"]);
    }

    #[test]
    fn silent_commands_never_touch_speaker() {
        let rec = Recorder::default();
        run(
            &Command::Square {
                size: 2,
                glyph: '#',
                hollow: false,
            },
            &rec,
        );
        assert!(rec.0.borrow().is_empty());
    }

    #[test]
    fn say_joins_words() {
        let rec = Recorder::default();
        run(
            &Command::Say {
                text: vec!["Counting".into(), "a".into(), "number:".into()],
            },
            &rec,
        );
        assert_eq!(rec.0.borrow().as_slice(), ["Counting a number:"]);
    }

    #[test]
    fn unknown_pattern_is_an_error() {
        let mut out = Vec::new();
        let cmd = Command::Stamp {
            pattern: "star".into(),
            scale_x: 1,
            scale_y: 1,
            on: '#',
            off: ' ',
        };
        assert!(run_command(&cmd, &Recorder::default(), &mut out).is_err());
    }

    #[test]
    fn speech_failure_propagates() {
        struct Mute;
        impl Speaker for Mute {
            fn speak(&self, _text: &str) -> Result<(), CoreError> {
                Err(CoreError::Speech("espeak introuvable".into()))
            }
            fn locate_executable(&self) -> Option<PathBuf> {
                None
            }
        }
        let mut out = Vec::new();
        let cmd = Command::Say {
            text: vec!["hi".into()],
        };
        assert!(run_command(&cmd, &Mute, &mut out).is_err());
    }
}
