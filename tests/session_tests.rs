use docify_cli::enums::chat_role::ChatRole;
use docify_cli::structs::session::Session;

#[test]
fn api_settings_are_trimmed() {
    let mut session = Session::new();
    session.set_api_settings("https://x.test/", "  secret123  ");

    assert_eq!(session.api_base_url, "https://x.test");
    assert_eq!(session.api_key, "secret123");
}

#[test]
fn append_exchange_keeps_user_first() {
    let mut session = Session::new();
    session.append_exchange("What does this do?".to_string(), "It defines a CLI.".to_string());

    assert_eq!(session.chat_history.len(), 2);
    assert_eq!(session.chat_history[0].role, ChatRole::User);
    assert_eq!(session.chat_history[0].text, "What does this do?");
    assert_eq!(session.chat_history[1].role, ChatRole::Assistant);
    assert_eq!(session.chat_history[1].text, "It defines a CLI.");
}

#[test]
fn clear_chat_only_touches_history() {
    let mut session = Session::new();
    session.set_api_settings("https://x.test", "secret123");
    session.store_upload("app.py".to_string(), "print('hi')\n".to_string(), Some("python".to_string()));
    session.append_exchange("q".to_string(), "a".to_string());

    session.clear_chat();

    assert!(session.chat_history.is_empty());
    assert_eq!(session.filename.as_deref(), Some("app.py"));
    assert_eq!(session.language.as_deref(), Some("python"));
    assert!(session.code_content.is_some());
}

#[test]
fn reset_all_preserves_credentials() {
    let mut session = Session::new();
    session.set_api_settings("https://x.test", "secret123");
    session.store_upload("app.py".to_string(), "print('hi')\n".to_string(), Some("python".to_string()));
    session.append_exchange("q".to_string(), "a".to_string());

    session.reset_all();

    assert!(session.chat_history.is_empty());
    assert!(session.code_content.is_none());
    assert!(session.filename.is_none());
    assert!(session.language.is_none());
    assert_eq!(session.api_base_url, "https://x.test");
    assert_eq!(session.api_key, "secret123");
}

#[test]
fn new_upload_preserves_chat_history() {
    let mut session = Session::new();
    session.store_upload("a.py".to_string(), "x = 1\n".to_string(), Some("python".to_string()));
    session.append_exchange("q".to_string(), "a".to_string());

    session.store_upload("b.rs".to_string(), "fn main() {}\n".to_string(), Some("rust".to_string()));

    assert_eq!(session.chat_history.len(), 2);
    assert_eq!(session.filename.as_deref(), Some("b.rs"));
    assert_eq!(session.language.as_deref(), Some("rust"));
}

#[test]
fn statistics_reflect_state() {
    let mut session = Session::new();
    assert_eq!(session.message_count(), 0);
    assert_eq!(session.code_line_count(), 0);
    assert!(!session.has_api_settings());
    assert!(!session.has_code());

    session.set_api_settings("https://x.test", "secret123");
    session.store_upload("a.py".to_string(), "x = 1\ny = 2\nz = 3\n".to_string(), Some("python".to_string()));
    session.append_exchange("q".to_string(), "a".to_string());

    assert_eq!(session.message_count(), 2);
    assert_eq!(session.code_line_count(), 3);
    assert!(session.has_api_settings());
    assert!(session.has_code());
}
