//! Line-oriented dialog surface.
//!
//! Renders the broker's dialog on stderr and answers it from stdin.

use stockroom_lib::dialog::DialogBroker;
use stockroom_lib::dialog::DialogMode;
use stockroom_lib::dialog::DialogResponse;
use stockroom_lib::dialog::DialogState;
use stockroom_lib::dialog::Severity;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tokio::task::JoinHandle;

/// Starts answering `broker`'s dialogs from the terminal.
pub fn spawn(broker: DialogBroker) -> JoinHandle<()> {
    let mut rx = broker.subscribe();
    // A dialog may already be open before the task first runs.
    rx.mark_changed();

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            if !state.visible {
                continue;
            }

            eprint!("{}", render(&state));

            // Only read while a dialog is up, so nothing blocks on stdin at exit.
            let line = match lines.next_line().await {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("surface: stdin read failed: {}", e);
                    None
                }
            };

            let response = answer(&state, line.as_deref());
            log::debug!("surface: {} '{}' -> {}", state.mode, state.title, response.name());
            if let Err(e) = broker.resolve(response) {
                log::warn!("surface: {}", e);
            }
        }
    })
}

fn badge(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "[ok]",
        Severity::Danger => "[error]",
        Severity::Warning => "[warning]",
        Severity::Info => "[info]",
    }
}

/// Text shown for a dialog, ending with the input hint.
pub fn render(state: &DialogState) -> String {
    let mut out = format!("{} {}\n", badge(state.severity), state.title);
    if !state.message.is_empty() {
        out.push_str(&state.message);
        out.push('\n');
    }
    match state.mode {
        DialogMode::Alert => out.push_str("(press Enter) "),
        DialogMode::Confirm => out.push_str("[y/N] "),
        DialogMode::Prompt if state.input_value.is_empty() => out.push_str("('.' to cancel) > "),
        DialogMode::Prompt => {
            out.push_str(&format!("[{}] ('.' to cancel) > ", state.input_value));
        }
    }
    out
}

/// Maps a typed line to the dialog's answer. `None` means stdin is closed.
pub fn answer(state: &DialogState, line: Option<&str>) -> DialogResponse {
    let Some(line) = line else {
        return DialogResponse::dismissal(state.mode);
    };
    let line = line.trim();

    match state.mode {
        DialogMode::Alert => DialogResponse::Acknowledged,
        DialogMode::Confirm => {
            DialogResponse::Confirmed(matches!(line.to_ascii_lowercase().as_str(), "y" | "yes"))
        }
        DialogMode::Prompt => match line {
            "." => DialogResponse::Cancelled,
            "" => DialogResponse::Submitted(state.input_value.clone()),
            text => DialogResponse::Submitted(text.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(mode: DialogMode, input: &str) -> DialogState {
        DialogState {
            visible: true,
            title: "Title".into(),
            message: "Body".into(),
            severity: Severity::Warning,
            mode,
            input_value: input.into(),
        }
    }

    #[test]
    fn test_confirm_answers() {
        let s = state(DialogMode::Confirm, "");
        assert_eq!(answer(&s, Some("y")), DialogResponse::Confirmed(true));
        assert_eq!(answer(&s, Some(" YES ")), DialogResponse::Confirmed(true));
        assert_eq!(answer(&s, Some("")), DialogResponse::Confirmed(false));
        assert_eq!(answer(&s, Some("nah")), DialogResponse::Confirmed(false));
        assert_eq!(answer(&s, None), DialogResponse::Confirmed(false));
    }

    #[test]
    fn test_prompt_answers() {
        let s = state(DialogMode::Prompt, "old-name");
        assert_eq!(answer(&s, Some("")), DialogResponse::Submitted("old-name".into()));
        assert_eq!(answer(&s, Some("new-name")), DialogResponse::Submitted("new-name".into()));
        assert_eq!(answer(&s, Some(".")), DialogResponse::Cancelled);
        assert_eq!(answer(&s, None), DialogResponse::Cancelled);
    }

    #[test]
    fn test_alert_answers() {
        let s = state(DialogMode::Alert, "");
        assert_eq!(answer(&s, Some("whatever")), DialogResponse::Acknowledged);
        assert_eq!(answer(&s, None), DialogResponse::Acknowledged);
    }

    #[test]
    fn test_render() {
        let text = render(&state(DialogMode::Prompt, "old"));
        assert!(text.starts_with("[warning] Title\nBody\n"));
        assert!(text.ends_with("[old] ('.' to cancel) > "));
        assert!(render(&state(DialogMode::Confirm, "")).ends_with("[y/N] "));
    }
}
