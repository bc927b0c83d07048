// terminal.rs - Simulated embedded console
//
// A closed command table: the trimmed, lower-cased input must match a name
// exactly. Session keeps the displayed lines so the DOM can mirror them.

use crate::rng::Entropy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineClass {
    Normal,
    Warning,
    Error,
    /// Echo of the typed command, rendered after a prompt glyph
    Command,
}

impl LineClass {
    pub fn css(self) -> &'static str {
        match self {
            LineClass::Normal | LineClass::Command => "terminal-line",
            LineClass::Warning => "terminal-line terminal-warning",
            LineClass::Error => "terminal-line terminal-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub class: LineClass,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Text { body: String, class: LineClass },
    Clear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Status,
    Skills,
    Projects,
    Contact,
    About,
    Clear,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::Help,
        Command::Status,
        Command::Skills,
        Command::Projects,
        Command::Contact,
        Command::About,
        Command::Clear,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Status => "status",
            Command::Skills => "skills",
            Command::Projects => "projects",
            Command::Contact => "contact",
            Command::About => "about",
            Command::Clear => "clear",
        }
    }

    pub fn parse(input: &str) -> Option<Command> {
        let key = input.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == key)
    }
}

pub const HELP: &str = "Available commands:
  - status    : Show system status
  - skills    : List technical skills
  - projects  : Show featured projects
  - contact   : Display contact information
  - clear     : Clear terminal
  - about     : About Deepak Singhal";

pub const SKILLS: &str = "Core Competencies:
  • Embedded C/C++ | Python | RTOS
  • IoT Protocols: MQTT, BLE, Wi-Fi
  • Microcontrollers: STM32, ESP32
  • Tools: Git, Docker, Jenkins";

pub const PROJECTS: &str = "Featured Projects:
  1. IEEE 11073 SDC Medical Device System
  2. BMS CAN Logger & Diagnostics
  3. Secure OTA Update Framework";

pub const CONTACT: &str = "Contact Information:
  Email: deepaksinghal1995@gmail.com
  Location: New Delhi, India
  GitHub: github.com/deepaksinghal";

pub const ABOUT: &str = "Deepak Singhal
Embedded Systems Architect with 7+ years of experience in IoT, firmware development, and hardware design. Passionate about building innovative embedded solutions.";

pub fn status(uptime_days: u32) -> String {
    format!(
        "System Status: ONLINE
Uptime: {uptime_days} days
Memory: 85% available
CPU: ARM Cortex-M4 @ 180MHz
Mode: Development"
    )
}

pub fn not_found(input: &str) -> String {
    format!("Command not found: {input}\nType 'help' for available commands.")
}

/// Resolve one line of input. Uptime for `status` is drawn here.
pub fn dispatch(input: &str, rng: &mut impl Entropy) -> Response {
    let text = |body: String| Response::Text { body, class: LineClass::Normal };
    match Command::parse(input) {
        Some(Command::Help) => text(HELP.into()),
        Some(Command::Status) => text(status(rng.index(1000) as u32)),
        Some(Command::Skills) => text(SKILLS.into()),
        Some(Command::Projects) => text(PROJECTS.into()),
        Some(Command::Contact) => text(CONTACT.into()),
        Some(Command::About) => text(ABOUT.into()),
        Some(Command::Clear) => Response::Clear,
        None => Response::Text { body: not_found(input), class: LineClass::Error },
    }
}

/// Boot log: (delay from mount in steps, message, class)
pub const BOOT_LOG: [(u32, &str, LineClass); 6] = [
    (0, "Initializing embedded system...", LineClass::Normal),
    (1, "Loading firmware v2.1.0", LineClass::Normal),
    (2, "Mounting /skills partition... [OK]", LineClass::Normal),
    (3, "Starting IoT services... [OK]", LineClass::Normal),
    (4, "Loading development environment... [OK]", LineClass::Normal),
    (5, "System ready. Type \"help\" for available commands.", LineClass::Warning),
];

pub fn boot_line(msg: &str, class: LineClass) -> Line {
    Line { text: format!("> {msg}"), class }
}

#[derive(Default)]
pub struct Session {
    lines: Vec<Line>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Echo the command, then apply its response
    pub fn execute(&mut self, input: &str, rng: &mut impl Entropy) -> Response {
        self.push(Line { text: input.to_string(), class: LineClass::Command });
        let resp = dispatch(input, rng);
        match &resp {
            Response::Clear => self.lines.clear(),
            Response::Text { body, class } => self.push(Line { text: body.clone(), class: *class }),
        }
        resp
    }

    pub fn lines(&self) -> &[Line] { &self.lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Scripted;

    #[test]
    fn parse_is_case_and_space_insensitive() {
        assert_eq!(Command::parse("  Skills\t"), Some(Command::Skills));
        assert_eq!(Command::parse("help me"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn status_uptime_comes_from_rng() {
        let mut rng = Scripted::new([0.4215]);
        let Response::Text { body, .. } = dispatch("status", &mut rng) else { panic!() };
        assert!(body.contains("Uptime: 421 days"));
    }

    #[test]
    fn session_echoes_and_clears() {
        let mut s = Session::new();
        let mut rng = Scripted::new([0.0]);
        s.push(boot_line("boot", LineClass::Normal));
        s.execute("about", &mut rng);
        assert_eq!(s.lines().len(), 3);
        assert_eq!(s.lines()[1].class, LineClass::Command);
        assert_eq!(s.execute("CLEAR", &mut rng), Response::Clear);
        assert!(s.lines().is_empty());
    }

    #[test]
    fn unknown_command_is_error_class() {
        let mut rng = Scripted::new([0.0]);
        let r = dispatch("ls", &mut rng);
        assert!(matches!(r, Response::Text { class: LineClass::Error, .. }));
    }
}
