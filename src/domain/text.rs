//! Every line the console prints. Blocks are line tables; an empty entry is a blank line.

use crate::domain::model::Command;
use std::io::{self, Write};

pub const BANNER: &[&str] = &[
    "=== Enhanced Content Shuffling System ===",
    "The content library now properly shuffles content to prevent repetition!",
    "",
    "🎯 What's New:",
    "✅ Students don't get the same content repeatedly when you send multiple emails",
    "✅ Each student gets different content from other students in the same send",
    "✅ Content shuffles through the entire library before repeating",
    "✅ System works for greetings, quotes, and daily challenges",
    "",
    "📊 How It Works:",
    "1. First email send: Creates shuffled arrays for quotes, challenges, greetings",
    "2. Each student gets the next item in their personal sequence",
    "3. When a student reaches the end, the array reshuffles for variety",
    "4. Data persists in localStorage with monthly keys",
    "",
    "🔧 Content Types Supported:",
    "• Greetings: Hi messages in student emails",
    "• Motivational Quotes: Inspiring daily quotes",
    "• Daily Challenges: Character-building tasks",
    "",
    "💡 Usage Tips:",
    "• Send emails multiple times to see the shuffling in action",
    "• Each student will get different content each time",
    "• Content resets monthly for fresh rotation",
    "• Use the resetContentShuffling() function for testing",
    "",
    "🧪 Testing Steps:",
    "1. Go to Daily Updates in your teacher dashboard",
    "2. Preview emails for multiple students - notice different greetings",
    "3. Send emails, then send again - students get new content",
    "4. Check browser localStorage to see shuffling state",
    "",
];

/// Written without a trailing newline.
pub const PROMPT: &str =
    "Enter 'demo' to see shuffling info, 'help' for usage, or 'stop' to exit: ";

pub const DEMO: &[&str] = &[
    "",
    "🎭 Demo Mode - Content Shuffling Simulation:",
    "Student Alice first send: 'Hi Alice! Here's your daily update. ✨'",
    "Student Bob first send: 'Hello Bob! Check out your progress today. 🚀'",
    "Student Alice second send: 'Hey Alice! Here's what happened in class today. 📚'",
    "Student Bob second send: 'Good morning Bob! Let's see how you're doing! 🌅'",
    "",
    "Notice how each student gets different content in sequence!",
];

pub const HELP: &[&str] = &[
    "",
    "📖 Usage Guide:",
    "Frontend (React): dailyUpdateService.resetContentShuffling(students)",
    "Backend logging: Check console for 'Student X gets contentType Y/Z: \"content\"'",
    "localStorage keys: teacherId:contentType:YYYY-MM:shuffled",
    "Position keys: teacherId:studentId:contentType:YYYY-MM:position",
];

pub const FAREWELL: &str = "Enhanced shuffling system ready! 🚀";

pub const INVALID: &str = "Invalid input. Please enter 'demo', 'help', or 'stop'.";

fn write_lines<W: Write>(out: &mut W, lines: &[&str]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    write_lines(out, BANNER)
}

pub fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", PROMPT)?;
    out.flush()
}

pub fn write_demo<W: Write>(out: &mut W) -> io::Result<()> {
    write_lines(out, DEMO)
}

pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    write_lines(out, HELP)
}

pub fn write_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", FAREWELL)
}

pub fn write_invalid<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", INVALID)
}

/// Prints the fixed response for a command.
pub fn respond<W: Write>(command: &Command, out: &mut W) -> io::Result<()> {
    match command {
        Command::Demo => write_demo(out),
        Command::Help => write_help(out),
        Command::Stop => write_farewell(out),
        Command::Invalid(_) => write_invalid(out),
    }
}
