use super::StageError;

/// Put `text` on the system clipboard.
///
/// Purpose: hands the prompt to whatever the user pastes into next.
/// X11/Wayland: the selection lives only as long as its owner, so the text is
/// piped to a detached copy of this executable that keeps serving it (see
/// [`hold_from_stdin`]) until another program takes the clipboard over.
/// Other platforms: the OS keeps the contents after the process exits.
pub fn copy(text: &str) -> Result<(), StageError> {
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        holder::spawn(text)
    }
    #[cfg(not(all(unix, not(target_os = "macos"))))]
    {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| StageError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| StageError::Clipboard(e.to_string()))?;
        log::debug!("copied {} characters to the clipboard", text.chars().count());
        Ok(())
    }
}

/// Set in the environment of the detached clipboard holder.
pub const HOLDER_ENV: &str = "PDFPROMPT_CLIPBOARD_HOLDER";

const READY: &str = "ready";
const ERROR_PREFIX: &str = "error: ";

/// True when this process was started to own the clipboard selection.
pub fn is_holder_process() -> bool {
    std::env::var_os(HOLDER_ENV).is_some()
}

/// Interpret the first line the holder writes back.
fn parse_holder_reply(line: &str) -> Result<(), StageError> {
    let line = line.trim_end();
    if line == READY {
        return Ok(());
    }
    match line.strip_prefix(ERROR_PREFIX) {
        Some(reason) => Err(StageError::Clipboard(reason.to_string())),
        None if line.is_empty() => Err(StageError::Clipboard(
            "clipboard holder exited before taking the selection".to_string(),
        )),
        None => Err(StageError::Clipboard(format!(
            "unexpected reply from clipboard holder: {}",
            line
        ))),
    }
}

/// Body of the holder process: read the prompt from stdin, take the
/// selection, report on stdout, then block until the selection is replaced.
#[cfg(all(unix, not(target_os = "macos")))]
pub fn hold_from_stdin() -> Result<(), StageError> {
    use arboard::SetExtLinux;
    use std::io::{self, Read, Write};

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;

    let mut stdout = io::stdout();
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(e) => {
            writeln!(stdout, "{}{}", ERROR_PREFIX, e)?;
            return Err(StageError::Clipboard(e.to_string()));
        }
    };
    writeln!(stdout, "{}", READY)?;
    stdout.flush()?;

    clipboard
        .set()
        .wait()
        .text(text)
        .map_err(|e| StageError::Clipboard(e.to_string()))
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
pub fn hold_from_stdin() -> Result<(), StageError> {
    Err(StageError::Clipboard(
        "clipboard holder is only used on X11/Wayland".to_string(),
    ))
}

#[cfg(all(unix, not(target_os = "macos")))]
mod holder {
    use super::{parse_holder_reply, StageError, HOLDER_ENV};
    use std::io::{BufRead, BufReader, Write};
    use std::process::{Command, Stdio};

    pub fn spawn(text: &str) -> Result<(), StageError> {
        let exe = std::env::current_exe()?;
        let mut child = Command::new(exe)
            .env(HOLDER_ENV, "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let mut reply = String::new();
        if let Some(stdout) = child.stdout.take() {
            BufReader::new(stdout).read_line(&mut reply)?;
        }
        parse_holder_reply(&reply)?;

        log::debug!(
            "clipboard holder {} serving {} characters",
            child.id(),
            text.chars().count()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holder_ready_reply() {
        assert!(parse_holder_reply("ready\n").is_ok());
    }

    #[test]
    fn test_holder_error_reply_carries_reason() {
        let err = parse_holder_reply("error: no display\n").unwrap_err();
        assert!(matches!(err, StageError::Clipboard(ref msg) if msg == "no display"));
    }

    #[test]
    fn test_holder_silent_exit_is_error() {
        let err = parse_holder_reply("").unwrap_err();
        assert!(err.to_string().contains("exited before taking the selection"));
    }

    #[test]
    fn test_holder_garbage_reply_is_error() {
        assert!(matches!(
            parse_holder_reply("hello"),
            Err(StageError::Clipboard(_))
        ));
    }

    #[test]
    fn test_not_holder_without_env() {
        // cargo test never sets the holder variable
        assert!(!is_holder_process());
    }
}
