// registry.rs

//! The static command vocabulary and name lookup.

use crate::content;
use crate::error::LookupError;
use crate::fragment::{Fragment, Tone};

/// What a command hands back to the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Produced {
    Fragment(Fragment),
    /// Reset the history log instead of appending to it.
    ClearHistory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    H,
    About,
    Whoami,
    Projects,
    Ls,
    Skills,
    Contact,
    Experience,
    Education,
    Clear,
    Cls,
    Github,
    Linkedin,
    Resume,
    Exit,
    Joke,
}

impl Command {
    pub const ALL: [Command; 17] = [
        Command::Help,
        Command::H,
        Command::About,
        Command::Whoami,
        Command::Projects,
        Command::Ls,
        Command::Skills,
        Command::Contact,
        Command::Experience,
        Command::Education,
        Command::Clear,
        Command::Cls,
        Command::Github,
        Command::Linkedin,
        Command::Resume,
        Command::Exit,
        Command::Joke,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::H => "h",
            Command::About => "about",
            Command::Whoami => "whoami",
            Command::Projects => "projects",
            Command::Ls => "ls",
            Command::Skills => "skills",
            Command::Contact => "contact",
            Command::Experience => "experience",
            Command::Education => "education",
            Command::Clear => "clear",
            Command::Cls => "cls",
            Command::Github => "github",
            Command::Linkedin => "linkedin",
            Command::Resume => "resume",
            Command::Exit => "exit",
            Command::Joke => "joke",
        }
    }

    /// Exact match against an already normalized name.
    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn produce(self) -> Produced {
        match self {
            Command::Help => Produced::Fragment(content::help(&CommandRegistry::help_rows())),
            Command::H => Command::Help.produce(),
            Command::About => Produced::Fragment(content::about()),
            Command::Whoami => Command::About.produce(),
            Command::Projects => Produced::Fragment(content::projects()),
            Command::Ls => Command::Projects.produce(),
            Command::Skills => Produced::Fragment(content::skills()),
            Command::Contact => Produced::Fragment(content::contact()),
            Command::Experience => Produced::Fragment(content::experience()),
            Command::Education => Produced::Fragment(content::education()),
            Command::Clear => Produced::ClearHistory,
            Command::Cls => Command::Clear.produce(),
            Command::Github => Produced::Fragment(content::github()),
            Command::Linkedin => Produced::Fragment(content::linkedin()),
            Command::Resume => Produced::Fragment(content::resume()),
            Command::Exit => Produced::Fragment(content::exit()),
            Command::Joke => Produced::Fragment(content::joke()),
        }
    }
}

/// One row of the help listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRow {
    pub names: &'static [Command],
    pub description: &'static str,
    pub tone: Tone,
}

const HELP_ROWS: &[(&[Command], &str, Tone)] = &[
    (&[Command::Help, Command::H], "Show this help message", Tone::Red),
    (&[Command::About, Command::Whoami], "Learn about me", Tone::Green),
    (&[Command::Projects, Command::Ls], "View my projects", Tone::Blue),
    (&[Command::Skills], "See my technical skills", Tone::Yellow),
    (&[Command::Contact], "Get in touch", Tone::Red),
    (&[Command::Experience], "View work experience", Tone::Green),
    (&[Command::Education], "Academic background", Tone::Blue),
    (&[Command::Clear, Command::Cls], "Clear terminal", Tone::Yellow),
    (&[Command::Github], "Open GitHub profile", Tone::Red),
    (&[Command::Linkedin], "Open LinkedIn profile", Tone::Green),
    (&[Command::Resume], "Download resume", Tone::Blue),
    (&[Command::Exit], "Exit the terminal", Tone::Red),
    (&[Command::Joke], "Tell a joke", Tone::Yellow),
];

pub struct CommandRegistry;

impl CommandRegistry {
    pub fn lookup(normalized: &str) -> Result<Produced, LookupError> {
        Command::from_name(normalized)
            .map(Command::produce)
            .ok_or_else(|| LookupError::UnrecognizedCommand { raw: normalized.to_string() })
    }

    pub fn help_rows() -> Vec<HelpRow> {
        HELP_ROWS
            .iter()
            .map(|&(names, description, tone)| HelpRow { names, description, tone })
            .collect()
    }
}

pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
