use colored::Colorize;
use crate::commands::Flow;
use crate::i18n::Language;

pub fn handle_command(input: &str) -> Result<Flow, String> {
    match input.to_lowercase().as_str() {
        "help" => {
            println!("\n🍝 Dish Commands:");
            println!("  <dish name>          - Look up a dish (e.g. Spaghetti Carbonara)");
            println!("  search <dish name>   - Same as above");
            println!("  state                - Show the current result again");
            println!();

            println!("📋 Copy Commands:");
            println!("  copy ingredients     - Print ingredients, one per line");
            println!("  copy recipe          - Print numbered recipe steps");
            println!();

            println!("🌐 Preference Commands:");
            let languages = Language::ALL
                .iter()
                .map(|lang| format!("{} ({})", lang.code(), lang.native_name()))
                .collect::<Vec<_>>()
                .join(", ");
            println!("  lang <code>          - Switch language: {}", languages);
            println!("  theme <light|dark>   - Set the color theme");
            println!("  theme toggle         - Switch between light and dark");
            println!();

            println!("⚙️ System Commands:");
            println!("  help  - Show this help menu");
            println!("  exit  - Exit the program");
            Ok(Flow::Continue)
        }
        "exit" | "quit" => {
            println!("👋 {}", "Goodbye!".cyan());
            Ok(Flow::Exit)
        }
        _ => Err("Unknown system command. Type 'help' for available commands.".to_string()),
    }
}
