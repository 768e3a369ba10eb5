//! Tests with desktop entries shaped like the ones shipped by real packages

use desktop_entry::{DesktopEntry, EntryType, from_str};
use serde_json::json;

const BROWSER: &str = r#"[Desktop Entry]
Version=1.0
Name=Firefox Web Browser
Name[de]=Firefox-Webbrowser
Comment=Browse the World Wide Web
Comment[fr]=Naviguer sur le Web
GenericName=Web Browser
Keywords=Internet;WWW;Browser;Web;Explorer
Exec=firefox %u
Terminal=false
X-MultipleArgs=false
Type=Application
Icon=firefox
Categories=GNOME;GTK;Network;WebBrowser;
MimeTypes=text/html;text/xml;application/xhtml+xml;x-scheme-handler/http;x-scheme-handler/https;
StartupNotify=true
Actions=new-window;new-private-window;

[Desktop Action new-window]
Name=Open a New Window
Name[de]=Ein neues Fenster öffnen
Exec=firefox -new-window

[Desktop Action new-private-window]
Name=Open a New Private Window
Exec=firefox -private-window
"#;

const TERMINAL_TOOL: &str = "\
[Desktop Entry]
Type=Application
Name=htop
GenericName=Process Viewer
Comment=Show System Processes
Icon=htop
Exec=htop
Terminal=true
NoDisplay=1
Categories=ConsoleOnly;System;
Keywords=system;process;task
";

const MENU_DIRECTORY: &str = "\
[Desktop Entry]
Name=Development
Comment=Software Development
Icon=applications-development
Type=Directory
";

#[test]
fn test_browser_entry() {
    let entry = from_str(BROWSER).expect("Browser entry should parse");

    assert_eq!(entry.name, "Firefox Web Browser");
    assert_eq!(entry.generic_name, "Web Browser");
    assert_eq!(entry.exec, "firefox %u");
    assert_eq!(entry.entry_kind(), Some(EntryType::Application));
    assert!(!entry.terminal);
    assert_eq!(
        entry.categories,
        ["GNOME", "GTK", "Network", "WebBrowser", ""]
    );
    assert_eq!(entry.mime_types.len(), 6);
    assert_eq!(entry.keywords[2], "Browser");

    // Localized and unrecognized keys are kept verbatim
    assert_eq!(entry.extra_field("Name[de]"), Some("Firefox-Webbrowser"));
    assert_eq!(entry.extra_field("Comment[fr]"), Some("Naviguer sur le Web"));
    assert_eq!(entry.extra_field("Version"), Some("1.0"));
    assert_eq!(
        entry.extra_field("Actions"),
        Some("new-window;new-private-window;")
    );

    assert_eq!(
        entry.action_ids().collect::<Vec<_>>(),
        vec!["new-window", "new-private-window"]
    );
    let new_window = entry.action("new-window").unwrap();
    assert_eq!(new_window["Exec"], "firefox -new-window");
    assert_eq!(new_window["Name[de]"], "Ein neues Fenster öffnen");
}

#[test]
fn test_terminal_tool_entry() {
    let entry = from_str(TERMINAL_TOOL).unwrap();
    assert!(entry.terminal);
    assert!(entry.no_display);
    assert_eq!(entry.categories, ["ConsoleOnly", "System", ""]);
    assert_eq!(entry.keywords, ["system", "process", "task"]);
}

#[test]
fn test_menu_directory_entry() {
    let entry = from_str(MENU_DIRECTORY).unwrap();
    assert_eq!(entry.entry_kind(), Some(EntryType::Directory));
    assert!(entry.exec.is_empty());
    assert_eq!(entry.icon, "applications-development");
}

#[test]
fn test_json_export() {
    let entry = from_str(TERMINAL_TOOL).unwrap();
    let value = serde_json::to_value(&entry).unwrap();

    assert_eq!(value["name"], json!("htop"));
    assert_eq!(value["type"], json!("Application"));
    assert_eq!(value["genericName"], json!("Process Viewer"));
    assert_eq!(value["noDisplay"], json!(true));
    assert_eq!(value["mimeTypes"], json!([]));
    assert_eq!(value["extraFields"], json!({}));
    assert_eq!(value["actions"], json!({}));
}

#[test]
fn test_json_round_trip_preserves_action_order() {
    let entry = from_str(BROWSER).unwrap();
    let text = serde_json::to_string(&entry).unwrap();
    let restored: DesktopEntry = serde_json::from_str(&text).unwrap();

    assert_eq!(restored, entry);
    assert_eq!(
        restored.action_ids().collect::<Vec<_>>(),
        vec!["new-window", "new-private-window"]
    );
}

#[test]
fn test_json_missing_fields_use_defaults() {
    let restored: DesktopEntry =
        serde_json::from_value(json!({ "name": "Only Name", "type": "Link" })).unwrap();
    assert_eq!(restored.name, "Only Name");
    assert_eq!(restored.entry_kind(), Some(EntryType::Link));
    assert!(restored.categories.is_empty());
}
