//! Interactive numbered menu
//!
//! The loop reads from any `BufRead` and writes to any `Write`, so the
//! binary drives it with stdin/stdout and tests drive it with buffers.
//! End of input at any prompt ends the session cleanly.

use crate::analysis::analyze;
use crate::cipher::{Cipher, CipherKind, Direction};
use crate::config::DEFAULT_SHIFT;
use crate::files::{read_text, write_text};
use crate::reporter::ConsoleReporter;
use crate::{BruteForceReport, TransformOutput};
use std::io::{self, BufRead, Write};
use std::path::Path;

const RULE: &str = "========================================";

/// Top-level menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CaesarEncrypt,
    CaesarDecrypt,
    CaesarBruteForce,
    SubstitutionEncrypt,
    SubstitutionDecrypt,
    VigenereEncrypt,
    VigenereDecrypt,
    FrequencyAnalysis,
    Files,
    About,
    Exit,
}

impl MenuChoice {
    pub fn from_number(input: &str) -> Option<Self> {
        let choice = match input.trim().parse::<u8>().ok()? {
            1 => MenuChoice::CaesarEncrypt,
            2 => MenuChoice::CaesarDecrypt,
            3 => MenuChoice::CaesarBruteForce,
            4 => MenuChoice::SubstitutionEncrypt,
            5 => MenuChoice::SubstitutionDecrypt,
            6 => MenuChoice::VigenereEncrypt,
            7 => MenuChoice::VigenereDecrypt,
            8 => MenuChoice::FrequencyAnalysis,
            9 => MenuChoice::Files,
            10 => MenuChoice::About,
            11 => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }

    /// Cipher and direction for the plain encrypt/decrypt entries
    fn transform(self) -> Option<(CipherKind, Direction)> {
        match self {
            MenuChoice::CaesarEncrypt => Some((CipherKind::Caesar, Direction::Encrypt)),
            MenuChoice::CaesarDecrypt => Some((CipherKind::Caesar, Direction::Decrypt)),
            MenuChoice::SubstitutionEncrypt => Some((CipherKind::Substitution, Direction::Encrypt)),
            MenuChoice::SubstitutionDecrypt => Some((CipherKind::Substitution, Direction::Decrypt)),
            MenuChoice::VigenereEncrypt => Some((CipherKind::Vigenere, Direction::Encrypt)),
            MenuChoice::VigenereDecrypt => Some((CipherKind::Vigenere, Direction::Decrypt)),
            _ => None,
        }
    }
}

/// Entries of the "Work with Files" submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileChoice {
    Transform(CipherKind, Direction),
    Frequency,
}

impl FileChoice {
    fn from_number(input: &str) -> Option<Self> {
        let choice = match input.trim().parse::<u8>().ok()? {
            1 => FileChoice::Transform(CipherKind::Caesar, Direction::Encrypt),
            2 => FileChoice::Transform(CipherKind::Caesar, Direction::Decrypt),
            3 => FileChoice::Transform(CipherKind::Substitution, Direction::Encrypt),
            4 => FileChoice::Transform(CipherKind::Substitution, Direction::Decrypt),
            5 => FileChoice::Transform(CipherKind::Vigenere, Direction::Encrypt),
            6 => FileChoice::Transform(CipherKind::Vigenere, Direction::Decrypt),
            7 => FileChoice::Frequency,
            _ => return None,
        };
        Some(choice)
    }
}

/// Banner shown once when the menu starts
pub fn title_banner() -> String {
    [
        "",
        "╔════════════════════════════════════════════════════════╗",
        "║                                                        ║",
        "║          SECURE TEXT: A CLASSICAL CIPHER TOOL          ║",
        "║                                                        ║",
        "╚════════════════════════════════════════════════════════╝",
        "",
    ]
    .join("\n")
}

/// Text for the About entry and the `about` subcommand
pub fn about_text() -> String {
    format!(
        "\
╔════════════════════════════════════════════════════════╗
║                  ABOUT SECURE TEXT                     ║
╚════════════════════════════════════════════════════════╝

Secure Text is a classical cipher tool that implements
various historical encryption methods.

Features:
  • Caesar Cipher (shift cipher)
  • Substitution Cipher (monoalphabetic)
  • Vigenere Cipher (polyalphabetic)
  • Frequency Analysis
  • Brute Force Attack
  • File Input/Output

Version: {}
Educational purposes only.
",
        env!("CARGO_PKG_VERSION")
    )
}

/// Interactive session state
pub struct Menu<R, W> {
    input: R,
    output: W,
    reporter: ConsoleReporter,
    default_shift: i64,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            reporter: ConsoleReporter::new(),
            default_shift: DEFAULT_SHIFT,
        }
    }

    pub fn with_reporter(mut self, reporter: ConsoleReporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Shift used when the user just presses Enter at a shift prompt
    pub fn with_default_shift(mut self, shift: i64) -> Self {
        self.default_shift = shift;
        self
    }

    /// Hand back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user picks Exit or input ends
    pub fn run(&mut self) -> io::Result<()> {
        write!(self.output, "{}", title_banner())?;
        writeln!(self.output, "\nWelcome to Secure Text - Your Classical Cipher Tool")?;

        loop {
            self.write_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match MenuChoice::from_number(&line) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "\nThank you for using Secure Text!")?;
                    writeln!(self.output, "Stay secure!\n")?;
                    break;
                }
                Some(choice) => self.handle(choice)?,
                None => writeln!(self.output, "\nInvalid choice! Please try again.")?,
            }

            if self.prompt("\nPress Enter to continue...")?.is_none() {
                break;
            }
        }
        self.output.flush()
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "   MAIN MENU")?;
        writeln!(self.output, "{RULE}")?;
        for line in [
            " 1. Caesar Cipher Encrypt",
            " 2. Caesar Cipher Decrypt",
            " 3. Caesar Cipher Brute Force",
            " 4. Substitution Cipher Encrypt",
            " 5. Substitution Cipher Decrypt",
            " 6. Vigenere Cipher Encrypt",
            " 7. Vigenere Cipher Decrypt",
            " 8. Frequency Analysis",
            " 9. Work with Files",
            "10. About",
            "11. Exit",
        ] {
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output, "{RULE}")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()
    }

    fn handle(&mut self, choice: MenuChoice) -> io::Result<()> {
        if let Some((kind, direction)) = choice.transform() {
            return self.handle_transform(kind, direction);
        }
        match choice {
            MenuChoice::CaesarBruteForce => {
                writeln!(self.output, "\n--- Caesar Cipher Brute Force ---")?;
                let Some(text) = self.prompt("Enter encrypted text: ")? else {
                    return Ok(());
                };
                let rendered = self.reporter.render_brute_force(&BruteForceReport::new(&text));
                write!(self.output, "\n{rendered}")
            }
            MenuChoice::FrequencyAnalysis => {
                writeln!(self.output, "\n--- Frequency Analysis ---")?;
                let Some(text) = self.prompt("Enter text to analyze: ")? else {
                    return Ok(());
                };
                let rendered = self.reporter.render_frequency(&analyze(&text));
                write!(self.output, "\n{rendered}")
            }
            MenuChoice::Files => self.handle_files(),
            MenuChoice::About => write!(self.output, "\n{}", about_text()),
            _ => Ok(()),
        }
    }

    fn handle_transform(&mut self, kind: CipherKind, direction: Direction) -> io::Result<()> {
        let title = match direction {
            Direction::Encrypt => "Encryption",
            Direction::Decrypt => "Decryption",
        };
        writeln!(self.output, "\n--- {kind} Cipher {title} ---")?;
        let Some(text) = self.prompt(&format!("Enter text to {direction}: "))? else {
            return Ok(());
        };
        let Some(cipher) = self.ask_cipher(kind)? else {
            return Ok(());
        };
        let output = TransformOutput::run(&cipher, direction, &text);
        write!(self.output, "\n{}", self.reporter.render_transform(&output))
    }

    fn handle_files(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- File Operations ---")?;
        for line in [
            "1. Encrypt file (Caesar)",
            "2. Decrypt file (Caesar)",
            "3. Encrypt file (Substitution)",
            "4. Decrypt file (Substitution)",
            "5. Encrypt file (Vigenere)",
            "6. Decrypt file (Vigenere)",
            "7. Analyze file frequency",
        ] {
            writeln!(self.output, "{line}")?;
        }
        let Some(line) = self.prompt("Enter choice: ")? else {
            return Ok(());
        };
        let Some(choice) = FileChoice::from_number(&line) else {
            return writeln!(self.output, "Invalid choice!");
        };

        let Some(input_name) = self.prompt("Enter input filename: ")? else {
            return Ok(());
        };
        let content = match read_text(Path::new(input_name.trim())) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("{e}");
                return writeln!(self.output, "Error: Could not read file!");
            }
        };
        writeln!(self.output, "File loaded successfully!")?;

        let (kind, direction) = match choice {
            FileChoice::Frequency => {
                let rendered = self.reporter.render_frequency(&analyze(&content));
                return write!(self.output, "\n{rendered}");
            }
            FileChoice::Transform(kind, direction) => (kind, direction),
        };

        let Some(cipher) = self.ask_cipher(kind)? else {
            return Ok(());
        };
        let result = cipher.apply(direction, &content);

        let Some(output_name) = self.prompt("Enter output filename: ")? else {
            return Ok(());
        };
        match write_text(Path::new(output_name.trim()), &result) {
            Ok(()) => writeln!(self.output, "File saved successfully!"),
            Err(e) => {
                log::warn!("{e}");
                writeln!(self.output, "Error: Could not write file!")
            }
        }
    }

    /// Ask for the shift or key that `kind` needs. Invalid input is reported
    /// and yields `None`, as does end of input.
    fn ask_cipher(&mut self, kind: CipherKind) -> io::Result<Option<Cipher>> {
        let built = match kind {
            CipherKind::Caesar => {
                let Some(line) = self.prompt("Enter shift value (Enter for default): ")? else {
                    return Ok(None);
                };
                let line = line.trim();
                if line.is_empty() {
                    Ok(Cipher::caesar(self.default_shift))
                } else {
                    match line.parse::<i64>() {
                        Ok(shift) => Ok(Cipher::caesar(shift)),
                        Err(_) => {
                            writeln!(self.output, "\nError: Shift must be a whole number")?;
                            return Ok(None);
                        }
                    }
                }
            }
            CipherKind::Substitution => {
                let Some(key) = self.prompt("Enter 26-character substitution key: ")? else {
                    return Ok(None);
                };
                Cipher::substitution(key.trim())
            }
            CipherKind::Vigenere => {
                let Some(key) = self.prompt("Enter keyword: ")? else {
                    return Ok(None);
                };
                Cipher::vigenere(key.trim())
            }
        };

        match built {
            Ok(cipher) => Ok(Some(cipher)),
            Err(e) => {
                writeln!(self.output, "\nError: {e}")?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// One line without its line ending; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
