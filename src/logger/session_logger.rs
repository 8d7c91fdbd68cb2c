use crate::structs::session::Session;

pub struct SessionLogger {}

impl SessionLogger {
    pub fn print_welcome(session: &Session) {
        println!("\n✨ Docify — AI documentation assistant");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        match (&session.filename, &session.language) {
            (Some(filename), Some(language)) => {
                println!(
                    "📁 File: {} ({} lines, language: {})",
                    filename,
                    session.code_line_count(),
                    language.to_uppercase()
                );
            }
            (Some(filename), None) => {
                println!("📁 File: {} (language not detected — select one manually)", filename);
            }
            _ => {
                println!("📁 No file loaded yet");
            }
        }

        if !session.has_api_settings() {
            println!("⚠️ API settings not configured. Run 'docify settings' first.");
        }
    }

    pub fn print_transcript(session: &Session) {
        if session.chat_history.is_empty() {
            println!("💬 No messages yet. Ask something about your code.");
            return;
        }

        println!("\n💬 Transcript ({} messages):", session.message_count());
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        for entry in &session.chat_history {
            println!(
                "{} {} [{}]:",
                entry.role.emoji(),
                entry.role.label(),
                entry.timestamp.format("%H:%M:%S")
            );
            println!("{}\n", entry.text);
        }
    }

    pub fn print_statistics(session: &Session) {
        println!("\n📊 Session statistics");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("🆔 Session: {}", session.id);
        println!("💬 Messages: {}", session.message_count());

        match &session.filename {
            Some(filename) => {
                println!("📁 File: {}", filename);
                println!("📏 Code lines: {}", session.code_line_count());
            }
            None => println!("📁 File: none"),
        }

        match &session.language {
            Some(language) => println!("🔤 Language: {}", language.to_uppercase()),
            None => println!("🔤 Language: not set"),
        }
    }

    pub fn print_documentation(documentation: &str) {
        println!("\n📋 Generated documentation");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("{}", documentation);
    }
}
