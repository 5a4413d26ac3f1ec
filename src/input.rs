use anyhow::{Result, bail};
use std::io::{self, BufRead, IsTerminal, Read};
use zeroize::Zeroizing;

pub const PASSWORD_ENV: &str = "EMOJICRYPT_PASSWORD";

/// Reads the password from the environment, a piped stdin line or a TTY
/// prompt, in that order.
///
/// `stdin_free` is false when stdin already carries the message, in which
/// case it is never read for the password.
pub fn read_password(confirm: bool, stdin_free: bool) -> Result<Zeroizing<String>> {
    //  Environment Variable
    //  EMOJICRYPT_PASSWORD="secr3t" emojicrypt encrypt "hello"
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    //  stdin (Pipeline)
    //  echo "secr3t" | emojicrypt encrypt "hello"
    if stdin_free && !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().lock().read_line(&mut buf)?;
        trim_newline(&mut buf);

        if !buf.is_empty() {
            return Ok(buf);
        }
    }

    //  Interactive (TTY)
    if io::stdin().is_terminal() {
        let pw = Zeroizing::new(rpassword::prompt_password("Password: ")?);
        if pw.is_empty() {
            bail!("password cannot be empty");
        }

        if confirm {
            let again = Zeroizing::new(rpassword::prompt_password("Confirm password: ")?);
            if *pw != *again {
                bail!("passwords do not match");
            }
        }

        return Ok(pw);
    }

    bail!("No password provided")
}

/// Returns `arg` if given, otherwise everything on stdin.
pub fn read_text(arg: Option<String>) -> Result<Zeroizing<String>> {
    if let Some(text) = arg {
        return Ok(Zeroizing::new(text));
    }

    if io::stdin().is_terminal() {
        bail!("no input given; pass it as an argument or pipe it on stdin");
    }

    let mut buf = Zeroizing::new(String::new());
    io::stdin().read_to_string(&mut buf)?;
    trim_newline(&mut buf);
    Ok(buf)
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
