//! Built-in commands for the folio terminal.
//!
//! The command set and output content are fixed portfolio data; handlers
//! build [`Fragment`] trees the presentation layer renders.

use folio_types::error::Result;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::output::Fragment;

/// Register all built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(SkillsCmd));
    reg.register(Box::new(ProjectsCmd));
    reg.register(Box::new(ContactCmd));
    reg.register(Box::new(EducationCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(WorkCmd));
    reg.register(Box::new(HomeCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(EchoCmd));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show available commands"
    }
    fn usage(&self) -> &str {
        "help"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        // The registry intercepts `help` so the listing can enumerate every
        // registered command; this entry backs the name, description, and
        // completion. Not reached through normal dispatch.
        Ok(CommandOutput::Text(
            "Use 'help' for a list of commands.".to_string(),
        ))
    }
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Learn about me"
    }
    fn usage(&self) -> &str {
        "about"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Rich(Fragment::block(vec![
            Fragment::heading("About Sridatta Bharadwaj Parupudi"),
            Fragment::plain("  🎓 Computer Science Student at Amrita Vishwa Vidyapeetham, Chennai"),
            Fragment::plain("  💻 Passionate about algorithms, problem-solving, and software development"),
            Fragment::plain("  📍 Location: Asia/Kolkata"),
            Fragment::plain("  🗣️ Languages: English, Telugu, Hindi"),
            Fragment::plain(""),
            Fragment::plain("  I enjoy breaking down complex ideas into simple explanations"),
            Fragment::plain("  and building practical software solutions."),
        ])))
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "View technical skills"
    }
    fn usage(&self) -> &str {
        "skills"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        let bullet = |text: &str| {
            Fragment::line(vec![Fragment::accent("  ▸ "), Fragment::plain(text)])
        };
        Ok(CommandOutput::Rich(Fragment::block(vec![
            Fragment::heading("Technical Skills"),
            bullet("Programming: Python, JavaScript, Java, C++"),
            bullet("Web: React, Next.js, HTML, CSS, Tailwind"),
            bullet("Tools: Git, Figma, VS Code"),
            bullet("Concepts: Algorithms, Data Structures, Statistics"),
        ])))
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "List my projects"
    }
    fn usage(&self) -> &str {
        "projects"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Rich(Fragment::block(vec![
            Fragment::heading("Projects"),
            Fragment::accent("  Once UI Design System"),
            Fragment::muted("    Building a customizable design system with Next.js and Figma"),
            Fragment::accent("  Figma to Code Pipeline"),
            Fragment::muted("    Automating design handovers with custom tooling"),
            Fragment::plain(""),
            Fragment::muted("  Type 'work' to view in traditional format"),
        ])))
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Get contact information"
    }
    fn usage(&self) -> &str {
        "contact"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Rich(Fragment::block(vec![
            Fragment::heading("Contact Information"),
            Fragment::plain("  📧 Email: sridatta.bharadwaj2006@gmail.com"),
            Fragment::line(vec![
                Fragment::plain("  💼 LinkedIn: "),
                Fragment::link(
                    "Profile",
                    "https://www.linkedin.com/in/sridatta-bharadwaj-p-730147327/",
                ),
            ]),
            Fragment::line(vec![
                Fragment::plain("  🐙 GitHub: "),
                Fragment::link("@Sridatta-Bharadwaj", "https://github.com/Sridatta-Bharadwaj"),
            ]),
            Fragment::line(vec![
                Fragment::plain("  📸 Instagram: "),
                Fragment::link("@sridatta_07", "https://www.instagram.com/sridatta_07/"),
            ]),
        ])))
    }
}

// ---------------------------------------------------------------------------
// education
// ---------------------------------------------------------------------------

struct EducationCmd;
impl Command for EducationCmd {
    fn name(&self) -> &str {
        "education"
    }
    fn description(&self) -> &str {
        "View education background"
    }
    fn usage(&self) -> &str {
        "education"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Rich(Fragment::block(vec![
            Fragment::heading("Education"),
            Fragment::accent("  🎓 Amrita Vishwa Vidyapeetham"),
            Fragment::muted("      B.Tech in CSE with Minor in AI & ML"),
            Fragment::accent("  📚 Sri Vasistha Jr College"),
            Fragment::muted("      Intermediate (Class 11-12)"),
            Fragment::accent("  🏫 Matrusri DAV Public School"),
            Fragment::muted("      Class 1-10"),
        ])))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear terminal screen"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// work / home
// ---------------------------------------------------------------------------

struct WorkCmd;
impl Command for WorkCmd {
    fn name(&self) -> &str {
        "work"
    }
    fn description(&self) -> &str {
        "Go to projects page"
    }
    fn usage(&self) -> &str {
        "work"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Navigate {
            path: "/work".to_string(),
            notice: "Redirecting to projects page...".to_string(),
        })
    }
}

struct HomeCmd;
impl Command for HomeCmd {
    fn name(&self) -> &str {
        "home"
    }
    fn description(&self) -> &str {
        "Go to home page"
    }
    fn usage(&self) -> &str {
        "home"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Navigate {
            path: "/".to_string(),
            notice: "Redirecting to home page...".to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display current user"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Rich(Fragment::accent(
            "guest@sridatta-portfolio",
        )))
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Display current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.clock.now()))
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Echo a message"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(args.join(" ")))
    }
}
