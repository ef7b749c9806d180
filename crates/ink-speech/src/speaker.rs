//! Platform text-to-speech backends.
//!
//! Each backend is an external program spawned with an argument vector, so
//! no shell quoting is involved except inside the PowerShell script body.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use ink_core::error::CoreError;
use ink_core::traits::Speaker;

/// `espeak -- <text>` (Linux and other Unix).
#[derive(Clone, Copy, Debug, Default)]
pub struct Espeak;

/// `say -- <text>` (macOS).
#[derive(Clone, Copy, Debug, Default)]
pub struct Say;

/// `powershell` driving the SAPI.SpVoice COM object (Windows).
#[derive(Clone, Copy, Debug, Default)]
pub struct PowerShellSapi;

impl Speaker for Espeak {
    fn speak(&self, text: &str) -> Result<(), CoreError> {
        run(self.locate_executable(), "espeak", speech_args(text))
    }

    fn locate_executable(&self) -> Option<PathBuf> {
        find_in_path("espeak")
    }
}

impl Speaker for Say {
    fn speak(&self, text: &str) -> Result<(), CoreError> {
        run(self.locate_executable(), "say", speech_args(text))
    }

    fn locate_executable(&self) -> Option<PathBuf> {
        find_in_path("say")
    }
}

impl Speaker for PowerShellSapi {
    fn speak(&self, text: &str) -> Result<(), CoreError> {
        let script = powershell_script(text);
        run(
            self.locate_executable(),
            "powershell",
            ["-NoProfile", "-Command", script.as_str()],
        )
    }

    fn locate_executable(&self) -> Option<PathBuf> {
        find_in_path("powershell")
    }
}

/// Arguments for a backend taking the text as its last operand. `--` ends
/// option parsing so text like `-v` is spoken, not interpreted.
fn speech_args(text: &str) -> [&str; 2] {
    ["--", text]
}

/// Backend for the current platform, chosen once at startup.
#[must_use]
pub fn platform_speaker() -> Box<dyn Speaker> {
    if cfg!(target_os = "windows") {
        Box::new(PowerShellSapi)
    } else if cfg!(target_os = "macos") {
        Box::new(Say)
    } else {
        Box::new(Espeak)
    }
}

/// Script PowerShell ; les apostrophes sont doublées dans la chaîne littérale.
///
/// # Example
/// ```
/// use ink_speech::speaker::powershell_script;
/// assert_eq!(
///     powershell_script("it's"),
///     "$v=New-Object -ComObject SAPI.SpVoice; $null = $v.Speak('it''s');"
/// );
/// ```
#[must_use]
pub fn powershell_script(text: &str) -> String {
    format!(
        "$v=New-Object -ComObject SAPI.SpVoice; $null = $v.Speak('{}');",
        text.replace('\'', "''")
    )
}

/// First `PATH` entry holding an executable file named `program`.
#[must_use]
pub fn find_in_path(program: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    find_in_dirs(program, std::env::split_paths(&path))
}

fn find_in_dirs<I>(program: &str, dirs: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let names: Vec<String> = if cfg!(windows) {
        vec![format!("{program}.exe"), program.to_string()]
    } else {
        vec![program.to_string()]
    };
    dirs.into_iter()
        .flat_map(|dir| names.iter().map(move |n| dir.join(n)))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

fn run<I, S>(exe: Option<PathBuf>, name: &str, args: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let exe = exe.ok_or_else(|| CoreError::Speech(format!("{name} introuvable dans le PATH")))?;
    log::debug!("Synthèse vocale via {}", exe.display());

    let status = Command::new(&exe)
        .args(args)
        .stdout(Stdio::null())
        .status()
        .map_err(|e| CoreError::Speech(format!("lancement de {name} impossible : {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(CoreError::Speech(format!("{name} a échoué ({status})")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_without_quotes_is_unchanged() {
        assert!(powershell_script("hello world").contains("Speak('hello world')"));
    }

    #[test]
    fn script_doubles_every_quote() {
        assert!(powershell_script("'a'b'").contains("Speak('''a''b''')"));
    }

    #[test]
    fn leading_dash_text_stays_an_operand() {
        assert_eq!(speech_args("-v"), ["--", "-v"]);
    }

    #[cfg(unix)]
    #[test]
    fn operand_after_double_dash_reaches_the_program() {
        // sh -c SCRIPT NAME -- ARG : "$2" is the spoken text.
        let sh = PathBuf::from("/bin/sh");
        let mut args = vec!["-c", "test \"$1\" = -- && test \"$2\" = -v", "sh"];
        args.extend(speech_args("-v"));
        assert!(run(Some(sh), "sh", args).is_ok());
    }

    #[test]
    fn missing_executable_is_speech_error() {
        let err = run(None, "espeak", ["bonjour"]).unwrap_err();
        assert!(matches!(err, CoreError::Speech(_)));
    }

    #[test]
    fn lookup_skips_directories_without_program() {
        let empty = tempfile::tempdir().unwrap();
        assert_eq!(
            find_in_dirs("espeak", vec![empty.path().to_path_buf()]),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn lookup_requires_execute_bit() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("espeak");
        std::fs::write(&exe, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o644)).unwrap();
        assert_eq!(find_in_dirs("espeak", vec![dir.path().to_path_buf()]), None);

        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(
            find_in_dirs("espeak", vec![dir.path().to_path_buf()]),
            Some(exe)
        );
    }

    #[cfg(unix)]
    #[test]
    fn backend_exit_status_is_checked() {
        let sh = PathBuf::from("/bin/sh");
        assert!(run(Some(sh.clone()), "sh", ["-c", "exit 0"]).is_ok());
        assert!(matches!(
            run(Some(sh), "sh", ["-c", "exit 3"]),
            Err(CoreError::Speech(_))
        ));
    }
}
