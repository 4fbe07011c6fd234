//! Interactive console prompts.

use std::io::{self, BufRead, Write};

use ppstar::{Error, parse_user_id};

const USER_ID_HELP: &str = "This tool requires a user ID to fetch scores for.\n\
You may set the `USER_ID` environment variable with your user ID, or you may enter it here.\n\
Your user ID is the number at the end of the link to your profile page, \
e.g. the 35859242 in https://osu.ppy.sh/users/35859242.";

/// Line-oriented interaction with the operator.
pub trait Prompter {
    /// Display a message to the user
    fn display_message(&mut self, message: &str);

    /// Show `prompt` and read one line. `None` means input is closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Prompt user to press enter to continue
    fn prompt_continue(&mut self, message: &str) -> io::Result<()> {
        self.read_line(message).map(|_| ())
    }
}

/// Prompter backed by stdin/stdout.
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn display_message(&mut self, message: &str) {
        println!("{}", message);
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Ask for a user ID until a valid one is entered.
///
/// Invalid entries re-prompt; closed input is an error.
pub fn prompt_user_id<P: Prompter>(prompter: &mut P) -> ppstar::Result<u64> {
    prompter.display_message(USER_ID_HELP);

    loop {
        let Some(line) = prompter.read_line("Enter your osu! user ID: ")? else {
            return Err(Error::InvalidUserId("no user ID entered".to_string()));
        };

        match parse_user_id(&line) {
            Ok(user_id) => return Ok(user_id),
            Err(e) => prompter.display_message(&format!("{}. Please enter a number.", e)),
        }
    }
}
