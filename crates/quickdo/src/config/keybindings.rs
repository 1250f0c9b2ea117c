//! Keybindings configuration for the TUI.

#![allow(clippy::enum_glob_use, clippy::unused_self)]

use anyhow::{Context, Result, anyhow, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

macro_rules! vec_of_strings {
    ($($s:expr),* $(,)?) => {
        vec![$($s.to_string()),*]
    };
}

/// Top-level configuration for quickdo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// TUI configuration.
    #[serde(default)]
    pub tui: TuiConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Keybindings configuration.
    #[serde(default)]
    pub keybindings: KeyBindingsConfig,
}

/// Keybindings configuration for all TUI views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyBindingsConfig {
    /// Keybindings for the task list view.
    #[serde(default)]
    pub task_list: TaskListKeyBindings,
    /// Keybindings for the new-task input field.
    #[serde(default)]
    pub input: InputKeyBindings,
}

/// Keybindings for the task list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListKeyBindings {
    /// Quit the application.
    pub quit: Vec<String>,
    /// Move down in the list.
    pub down: Vec<String>,
    /// Move up in the list.
    pub up: Vec<String>,
    /// Start entering a new task.
    pub create_task: Vec<String>,
    /// Toggle completion of the selected task.
    pub toggle: Vec<String>,
    /// Delete the selected task.
    pub delete: Vec<String>,
    /// Drop every completed task.
    pub clear_completed: Vec<String>,
    /// Show every task.
    pub filter_all: Vec<String>,
    /// Show uncompleted tasks only.
    pub filter_active: Vec<String>,
    /// Show completed tasks only.
    pub filter_completed: Vec<String>,
    /// Advance the filter cycle.
    pub cycle_filter: Vec<String>,
    /// Re-read the snapshot from disk.
    pub refresh: Vec<String>,
}

/// Keybindings for the new-task input field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputKeyBindings {
    /// Submit the typed text as a new task.
    pub submit: Vec<String>,
    /// Leave the input field without adding a task.
    pub cancel: Vec<String>,
}

impl Default for TaskListKeyBindings {
    fn default() -> Self {
        Self {
            quit: vec_of_strings!["q", "Q", "Esc"],
            down: vec_of_strings!["j", "J", "Down"],
            up: vec_of_strings!["k", "K", "Up"],
            create_task: vec_of_strings!["n", "N"],
            toggle: vec_of_strings!["Enter", "Space"],
            delete: vec_of_strings!["d", "D"],
            clear_completed: vec_of_strings!["c", "C"],
            filter_all: vec_of_strings!["1"],
            filter_active: vec_of_strings!["2"],
            filter_completed: vec_of_strings!["3"],
            cycle_filter: vec_of_strings!["f", "F"],
            refresh: vec_of_strings!["r", "R"],
        }
    }
}

impl Default for InputKeyBindings {
    fn default() -> Self {
        Self {
            submit: vec_of_strings!["Enter"],
            cancel: vec_of_strings!["Esc"],
        }
    }
}

/// Returns the default configuration file path.
///
/// On Linux/macOS: `~/.config/quickdo/config.toml`
/// On Windows: `%APPDATA%\quickdo\config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quickdo").join("config.toml"))
}

/// Load configuration from a TOML file.
///
/// # Arguments
/// - `path`: Optional path to the config file. If `None`, uses the default path.
///
/// # Returns
/// - `Ok(Some(config))` if the file exists and was successfully parsed
/// - `Ok(None)` if the file does not exist
///
/// # Errors
/// Returns an error when an existing file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => return Ok(None),
        },
    };

    // ファイルが存在しない場合は None を返す
    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    Ok(Some(config))
}

/// Parse a key string into a `KeyEvent`.
///
/// # Examples
/// - "j" -> `KeyCode::Char('j')`
/// - "Enter" -> `KeyCode::Enter`
/// - "Ctrl+d" -> `KeyCode::Char('d')` with CONTROL modifier
///
/// # Errors
/// Returns an error for an empty string, unknown modifier, or unknown key.
pub fn parse_key(s: &str) -> Result<KeyEvent> {
    let parts: Vec<&str> = s.split('+').collect();

    if parts.is_empty() {
        bail!("Empty key string");
    }

    let mut modifiers = KeyModifiers::NONE;
    let key_part = if parts.len() > 1 {
        for &modifier in &parts[..parts.len() - 1] {
            match modifier {
                "Ctrl" | "Control" => modifiers |= KeyModifiers::CONTROL,
                "Alt" => modifiers |= KeyModifiers::ALT,
                "Shift" => modifiers |= KeyModifiers::SHIFT,
                other => bail!("Unknown modifier: {other}"),
            }
        }
        parts[parts.len() - 1]
    } else {
        parts[0]
    };

    let code = parse_key_code(key_part)?;

    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(s: &str) -> Result<KeyCode> {
    match s {
        "Enter" => Ok(KeyCode::Enter),
        "Esc" => Ok(KeyCode::Esc),
        "Space" => Ok(KeyCode::Char(' ')),
        "Backspace" => Ok(KeyCode::Backspace),
        "Left" => Ok(KeyCode::Left),
        "Right" => Ok(KeyCode::Right),
        "Up" => Ok(KeyCode::Up),
        "Down" => Ok(KeyCode::Down),
        "Home" => Ok(KeyCode::Home),
        "End" => Ok(KeyCode::End),
        "PageUp" => Ok(KeyCode::PageUp),
        "PageDown" => Ok(KeyCode::PageDown),
        "Tab" => Ok(KeyCode::Tab),
        "Delete" => Ok(KeyCode::Delete),
        "Insert" => Ok(KeyCode::Insert),
        s if s.chars().count() == 1 => {
            let ch = s.chars().next().ok_or_else(|| anyhow!("Empty char"))?;
            Ok(KeyCode::Char(ch))
        }
        other => bail!("Unknown key: {other}"),
    }
}

/// Validate the TUI configuration.
///
/// Checks for:
/// - Key conflicts within each view
/// - Invalid key expressions
/// - Empty key bindings
///
/// # Errors
/// Returns an error describing the first violation found.
pub fn validate_tui_config(config: &TuiConfig) -> Result<()> {
    validate_keybindings_config(&config.keybindings)
}

/// Validate the keybindings configuration.
///
/// # Errors
/// Returns an error describing the first violation found.
pub fn validate_keybindings_config(config: &KeyBindingsConfig) -> Result<()> {
    for (view_name, bindings) in [
        ("task_list", collect_task_list_bindings(config)),
        ("input", collect_input_bindings(config)),
    ] {
        for (action, keys) in &bindings {
            if keys.is_empty() {
                bail!("{view_name}.{action} must have at least one key binding");
            }
            for key in keys {
                parse_key(key).with_context(|| format!("Invalid key '{key}' in {view_name}.{action}"))?;
            }
        }
        validate_view_keybindings(view_name, bindings)?;
    }
    Ok(())
}

fn validate_view_keybindings(view_name: &str, bindings: HashMap<String, Vec<String>>) -> Result<()> {
    let mut key_to_actions: HashMap<String, Vec<String>> = HashMap::new();

    for (action, keys) in bindings {
        for key in keys {
            key_to_actions.entry(key.clone()).or_default().push(action.clone());
        }
    }

    // 衝突をチェック
    for (key, actions) in key_to_actions {
        if actions.len() > 1 {
            bail!("Key '{key}' is bound to multiple actions in {view_name}: {actions:?}");
        }
    }

    Ok(())
}

fn collect_task_list_bindings(config: &KeyBindingsConfig) -> HashMap<String, Vec<String>> {
    let t = &config.task_list;
    [
        ("quit", &t.quit),
        ("down", &t.down),
        ("up", &t.up),
        ("create_task", &t.create_task),
        ("toggle", &t.toggle),
        ("delete", &t.delete),
        ("clear_completed", &t.clear_completed),
        ("filter_all", &t.filter_all),
        ("filter_active", &t.filter_active),
        ("filter_completed", &t.filter_completed),
        ("cycle_filter", &t.cycle_filter),
        ("refresh", &t.refresh),
    ]
    .into_iter()
    .map(|(name, keys)| (name.to_string(), keys.clone()))
    .collect()
}

fn collect_input_bindings(config: &KeyBindingsConfig) -> HashMap<String, Vec<String>> {
    let i = &config.input;
    [("submit", &i.submit), ("cancel", &i.cancel)]
        .into_iter()
        .map(|(name, keys)| (name.to_string(), keys.clone()))
        .collect()
}

/// View type for keybinding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    /// Task list view.
    TaskList,
    /// New-task input field.
    Input,
}

/// Action that can be performed in a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // TaskList
    /// Quit the application.
    Quit,
    /// Move down.
    Down,
    /// Move up.
    Up,
    /// Start entering a new task.
    CreateTask,
    /// Toggle completion of the selected task.
    Toggle,
    /// Delete the selected task.
    Delete,
    /// Drop every completed task.
    ClearCompleted,
    /// Show every task.
    FilterAll,
    /// Show uncompleted tasks only.
    FilterActive,
    /// Show completed tasks only.
    FilterCompleted,
    /// Advance the filter cycle.
    CycleFilter,
    /// Re-read the snapshot from disk.
    Refresh,

    // Input
    /// Submit the typed text.
    Submit,
    /// Leave the input field.
    Cancel,
}

impl KeyBindingsConfig {
    /// Generate help text for a specific view.
    #[must_use]
    pub fn generate_help_text(&self, view: ViewType) -> String {
        match view {
            ViewType::TaskList => self.generate_task_list_help(),
            ViewType::Input => self.generate_input_help(),
        }
    }

    /// Hint for the clear-completed action, shown only while it applies.
    #[must_use]
    pub fn clear_completed_hint(&self) -> String {
        format!("{}:完了タスクを削除", self.format_first_key(&self.task_list.clear_completed))
    }

    fn generate_task_list_help(&self) -> String {
        format!(
            "{}:移動 {}:切替 {}:新規 {}:削除 {}/{}/{}:フィルタ {}:フィルタ循環 {}:再読込 {}:終了",
            self.format_key_pair(&self.task_list.down, &self.task_list.up),
            self.format_first_key(&self.task_list.toggle),
            self.format_first_key(&self.task_list.create_task),
            self.format_first_key(&self.task_list.delete),
            self.format_first_key(&self.task_list.filter_all),
            self.format_first_key(&self.task_list.filter_active),
            self.format_first_key(&self.task_list.filter_completed),
            self.format_first_key(&self.task_list.cycle_filter),
            self.format_first_key(&self.task_list.refresh),
            self.format_first_key(&self.task_list.quit),
        )
    }

    fn generate_input_help(&self) -> String {
        format!(
            "{}:追加 {}:キャンセル",
            self.format_first_key(&self.input.submit),
            self.format_first_key(&self.input.cancel),
        )
    }

    /// Format the first key of a key binding list for display.
    fn format_first_key(&self, keys: &[String]) -> String {
        keys.first()
            .map_or_else(|| "?".to_string(), |k| self.format_key_display(k))
    }

    /// Format two keys as a pair (e.g., "j/k" for down/up).
    fn format_key_pair(&self, down: &[String], up: &[String]) -> String {
        format!("{}/{}", self.format_first_key(down), self.format_first_key(up))
    }

    /// Format a key for display, converting special keys to readable symbols.
    fn format_key_display(&self, key: &str) -> String {
        match key {
            "Enter" => "↵".to_string(),
            "Space" => "Space".to_string(),
            "Backspace" => "BS".to_string(),
            "Delete" => "Del".to_string(),
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "PageUp" => "PgUp".to_string(),
            "PageDown" => "PgDn".to_string(),
            other if other.starts_with("Ctrl+") => other.replace('+', "-"),
            other if other.starts_with("Alt+") => other.replace('+', "-"),
            other => other.to_string(),
        }
    }

    /// Check if a key event matches a configured action in a view.
    #[must_use]
    pub fn matches(&self, view: ViewType, action: Action, key: &KeyEvent) -> bool {
        let keys = self.get_keys(view, action);

        for key_str in keys {
            if let Ok(expected) = parse_key(key_str)
                && Self::key_event_matches(&expected, key)
            {
                return true;
            }
        }

        false
    }

    fn key_event_matches(expected: &KeyEvent, actual: &KeyEvent) -> bool {
        expected.code == actual.code && expected.modifiers == actual.modifiers
    }

    fn get_keys(&self, view: ViewType, action: Action) -> &[String] {
        use Action::*;
        use ViewType::*;

        match (view, action) {
            // TaskList
            (TaskList, Quit) => &self.task_list.quit,
            (TaskList, Down) => &self.task_list.down,
            (TaskList, Up) => &self.task_list.up,
            (TaskList, CreateTask) => &self.task_list.create_task,
            (TaskList, Toggle) => &self.task_list.toggle,
            (TaskList, Delete) => &self.task_list.delete,
            (TaskList, ClearCompleted) => &self.task_list.clear_completed,
            (TaskList, FilterAll) => &self.task_list.filter_all,
            (TaskList, FilterActive) => &self.task_list.filter_active,
            (TaskList, FilterCompleted) => &self.task_list.filter_completed,
            (TaskList, CycleFilter) => &self.task_list.cycle_filter,
            (TaskList, Refresh) => &self.task_list.refresh,

            // Input
            (Input, Submit) => &self.input.submit,
            (Input, Cancel) => &self.input.cancel,

            // Invalid combinations
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_keybindings() {
        let config = KeyBindingsConfig::default();

        // TaskList のデフォルト値を確認
        assert_eq!(config.task_list.quit, vec!["q", "Q", "Esc"]);
        assert_eq!(config.task_list.down, vec!["j", "J", "Down"]);
        assert_eq!(config.task_list.up, vec!["k", "K", "Up"]);
        assert_eq!(config.task_list.create_task, vec!["n", "N"]);
        assert_eq!(config.task_list.toggle, vec!["Enter", "Space"]);
        assert_eq!(config.task_list.delete, vec!["d", "D"]);
        assert_eq!(config.task_list.clear_completed, vec!["c", "C"]);
        assert_eq!(config.task_list.filter_all, vec!["1"]);
        assert_eq!(config.task_list.filter_active, vec!["2"]);
        assert_eq!(config.task_list.filter_completed, vec!["3"]);
        assert_eq!(config.task_list.cycle_filter, vec!["f", "F"]);
        assert_eq!(config.task_list.refresh, vec!["r", "R"]);

        // Input のデフォルト値を確認
        assert_eq!(config.input.submit, vec!["Enter"]);
        assert_eq!(config.input.cancel, vec!["Esc"]);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = KeyBindingsConfig::default();
        assert!(validate_keybindings_config(&config).is_ok());
    }

    #[test]
    fn test_parse_simple_key() {
        let key = parse_key("j").unwrap();
        assert_eq!(key.code, KeyCode::Char('j'));
        assert_eq!(key.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_space_key() {
        let key = parse_key("Space").unwrap();
        assert_eq!(key.code, KeyCode::Char(' '));
        assert_eq!(key.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_modified_key() {
        let key = parse_key("Ctrl+d").unwrap();
        assert_eq!(key.code, KeyCode::Char('d'));
        assert_eq!(key.modifiers, KeyModifiers::CONTROL);

        let key = parse_key("Alt+k").unwrap();
        assert_eq!(key.code, KeyCode::Char('k'));
        assert_eq!(key.modifiers, KeyModifiers::ALT);
    }

    #[test]
    fn test_parse_invalid_key() {
        assert!(parse_key("InvalidKey").is_err());
        assert!(parse_key("").is_err());
    }

    #[test]
    fn test_matches_multiple_keys() {
        let config = KeyBindingsConfig::default();

        // デフォルトでは quit は ["q", "Q", "Esc"]
        let q_key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let big_q_key = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::NONE);
        let esc_key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);

        assert!(config.matches(ViewType::TaskList, Action::Quit, &q_key));
        assert!(config.matches(ViewType::TaskList, Action::Quit, &big_q_key));
        assert!(config.matches(ViewType::TaskList, Action::Quit, &esc_key));
    }

    #[test]
    fn test_matches_respects_view_boundaries() {
        let config = KeyBindingsConfig::default();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);

        assert!(config.matches(ViewType::TaskList, Action::Toggle, &enter));
        assert!(config.matches(ViewType::Input, Action::Submit, &enter));
        assert!(!config.matches(ViewType::Input, Action::Toggle, &enter));
    }

    #[test]
    fn test_detect_key_conflict_in_same_view() {
        let mut config = KeyBindingsConfig::default();
        config.task_list.quit = vec!["j".to_string()];
        config.task_list.down = vec!["j".to_string()]; // 衝突

        let result = validate_keybindings_config(&config);
        assert!(result.is_err());

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("multiple actions"));
    }

    #[test]
    fn test_no_conflict_across_views() {
        let mut config = KeyBindingsConfig::default();
        config.task_list.quit = vec!["x".to_string()];
        config.input.cancel = vec!["x".to_string()]; // 異なるビューなので OK

        assert!(validate_keybindings_config(&config).is_ok());
    }

    #[test]
    fn test_empty_binding_validation() {
        let mut config = KeyBindingsConfig::default();
        config.task_list.quit = vec![];

        let result = validate_keybindings_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("task_list.quit"));
    }

    #[test]
    fn test_invalid_key_expression() {
        let mut config = KeyBindingsConfig::default();
        config.input.submit = vec!["NotAKey123".to_string()];

        assert!(validate_keybindings_config(&config).is_err());
    }

    #[test]
    fn test_default_help_text_task_list() {
        let config = KeyBindingsConfig::default();
        let help = config.generate_help_text(ViewType::TaskList);

        assert!(help.contains("移動"));
        assert!(help.contains("切替"));
        assert!(help.contains("新規"));
        assert!(help.contains("終了"));
        assert!(help.contains("フィルタ"));
    }

    #[test]
    fn test_default_help_text_input() {
        let config = KeyBindingsConfig::default();
        let help = config.generate_help_text(ViewType::Input);

        assert!(help.contains("追加"));
        assert!(help.contains("キャンセル"));
    }

    #[test]
    fn test_custom_help_text() {
        let mut config = KeyBindingsConfig::default();
        config.task_list.quit = vec!["x".to_string()];
        config.task_list.down = vec!["n".to_string()];
        config.task_list.up = vec!["p".to_string()];

        let help = config.generate_help_text(ViewType::TaskList);

        // カスタムキーが反映されること
        assert!(help.contains("n/p:移動"));
        assert!(help.contains("x:終了"));
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let config = KeyBindingsConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: KeyBindingsConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.task_list.quit, deserialized.task_list.quit);
        assert_eq!(config.task_list.toggle, deserialized.task_list.toggle);
        assert_eq!(config.input.submit, deserialized.input.submit);
    }

    #[test]
    fn test_load_nonexistent_config() {
        let result = load_config(Some(Path::new("/nonexistent/path/config.toml"))).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_custom_config_from_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().unwrap();

        let custom_config = r#"
storage = "tasks.json"

[tui.keybindings.task_list]
quit = ["x", "X"]
down = ["n"]
up = ["p"]
create_task = ["a"]
toggle = ["Space"]
delete = ["Backspace"]
clear_completed = ["C"]
filter_all = ["1"]
filter_active = ["2"]
filter_completed = ["3"]
cycle_filter = ["Tab"]
refresh = ["r"]

[tui.keybindings.input]
submit = ["Enter"]
cancel = ["Esc"]
"#;

        temp_file.write_all(custom_config.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(Some(temp_file.path())).unwrap().unwrap();

        assert_eq!(config.tui.keybindings.task_list.quit, vec!["x", "X"]);
        assert_eq!(config.tui.keybindings.task_list.toggle, vec!["Space"]);
        assert!(validate_tui_config(&config.tui).is_ok());
    }

    #[test]
    fn test_load_invalid_toml_syntax() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[tui.keybindings\nquit = [\"q\"]").unwrap();
        temp_file.flush().unwrap();

        assert!(load_config(Some(temp_file.path())).is_err());
    }
}
