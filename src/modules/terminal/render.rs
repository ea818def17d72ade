use crate::modules::display::{DisplaySurface, ElementId, MemorySurface, MESSAGE_CLASS};

/// Draw the page state as plain text
pub fn render_page(surface: &MemorySurface) -> String {
    let status = surface.text(ElementId::LoadStatus);
    let counter = surface.text(ElementId::CounterValue);
    let counter_color = surface
        .style(ElementId::CounterValue, "color")
        .unwrap_or("default");
    let login = surface.input_value(ElementId::LoginInput);
    let password = surface.input_value(ElementId::PasswordInput);

    let mut out = String::new();
    out.push_str("\n=== Web App Lab ===\n");
    out.push_str(&format!(
        "Status:   {}\n",
        if status.is_empty() { "loading..." } else { status.as_str() }
    ));
    out.push_str(&format!(
        "Counter:  {} ({})\n",
        if counter.is_empty() { "0" } else { counter.as_str() },
        counter_color
    ));
    out.push_str(&format!("Login:    {}\n", login));
    out.push_str(&format!("Password: {}\n", "*".repeat(password.chars().count())));
    if let Some(line) = render_message(surface) {
        out.push_str(&format!("Message:  {}\n", line));
    }
    out
}

/// The auth message with its style tag, `None` when there is no text
pub fn render_message(surface: &MemorySurface) -> Option<String> {
    let text = surface.text(ElementId::AuthMessage);
    if text.is_empty() {
        return None;
    }

    let class = surface.class_name(ElementId::AuthMessage);
    let tag = class
        .split_whitespace()
        .find(|part| *part != MESSAGE_CLASS);
    Some(match tag {
        Some(tag) => format!("[{}] {}", tag, text),
        None => text,
    })
}

/// Function to show the available commands
pub fn show_menu() {
    println!("\n1. Increment counter      (or type 'inc')");
    println!("2. Decrement counter      (or type 'dec')");
    println!("3. Reset counter          (or type 'reset')");
    println!("4. Log in                 (or type 'login')");
    println!("5. Load saved data        (or type 'load')");
    println!("6. Clear form             (or type 'clear-form')");
    println!("7. Clear saved data       (or type 'clear-storage')");
    println!("8. Reload page            (or type 'reload')");
    println!("9. Exit                   (or type 'exit')");
    println!("\nEnter your choice         (1-9 or command):");
}
