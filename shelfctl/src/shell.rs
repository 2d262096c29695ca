use std::io::{self, BufRead, Write};

use shelf_core::{CatalogError, MediaLike, Session};
use tracing::debug;

use crate::command::{Parsed, ShellCommand, parse_line};
use crate::config::ShellConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Read-eval-print loop over a [`Session`]
#[derive(Debug)]
pub struct Shell {
    session: Session,
    prompt: Option<String>,
}

impl Shell {
    /// `interactive` decides prompt visibility when the config leaves it open.
    pub fn new(config: &ShellConfig, interactive: bool) -> Self {
        let session = match config.seed {
            Some(seed) => Session::with_seed(seed),
            None => Session::new(),
        };
        let prompt = config
            .show_prompt
            .unwrap_or(interactive)
            .then(|| config.prompt.clone());
        Self { session, prompt }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `quit` or end of input.
    pub fn run<R, W>(&mut self, mut input: R, out: &mut W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut line = String::new();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(out, "{prompt}")?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                return Ok(());
            }

            match parse_line(&line) {
                Parsed::Empty => {}
                Parsed::Message(message) => {
                    writeln!(out, "{}", message.trim_end())?
                }
                Parsed::Command(command) => {
                    debug!(?command, "executing shell command");
                    if self.execute(command, out)? == Flow::Quit {
                        return Ok(());
                    }
                }
            }
        }
    }

    pub fn execute<W: Write>(
        &mut self,
        command: ShellCommand,
        out: &mut W,
    ) -> io::Result<Flow> {
        match command {
            ShellCommand::Rate { values } => {
                for value in values {
                    match self.session.stage_rating(value) {
                        Ok(rating) => writeln!(out, "Rating {rating} added.")?,
                        Err(err) => writeln!(out, "{err}")?,
                    }
                }
            }
            ShellCommand::Song { name } => {
                let name = name.join(" ");
                if self.session.stage_song(&name) {
                    writeln!(out, "Song '{}' staged.", name.trim())?;
                } else {
                    writeln!(out, "Song name is empty, nothing staged.")?;
                }
            }
            ShellCommand::CheckedOut { value } => {
                self.session.stage_checked_out(value);
                writeln!(out, "Next item checked out: {value}")?;
            }
            ShellCommand::Add(args) => match self.session.commit(args.into()) {
                Ok(_) => self.write_rows(out)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            ShellCommand::List => self.write_rows(out)?,
            ShellCommand::Titles => {
                writeln!(out, "{}", self.session.list_items())?
            }
            ShellCommand::Remove { index } => {
                match self.session.remove(index) {
                    Some(item) => {
                        writeln!(out, "Removed '{}'.", item.title())?;
                        self.write_rows(out)?;
                    }
                    None => writeln!(out, "{}", CatalogError::NoSuchItem(index))?,
                }
            }
            ShellCommand::Toggle { index } => {
                match self.session.toggle(index) {
                    Ok(checked_out) => {
                        writeln!(out, "Checked out: {checked_out}")?
                    }
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            ShellCommand::RateItem { index, values } => {
                // Ratings before the first invalid value are kept.
                match self.session.rate(index, values) {
                    Ok(()) => self.write_rows(out)?,
                    Err(err @ CatalogError::NoSuchItem(_)) => {
                        writeln!(out, "{err}")?
                    }
                    Err(err) => {
                        writeln!(out, "{err}")?;
                        self.write_rows(out)?;
                    }
                }
            }
            ShellCommand::Shuffle { index } => {
                match self.session.shuffle(index) {
                    Ok(Some(song)) => writeln!(out, "{song}")?,
                    Ok(None) => writeln!(out, "This CD has no songs.")?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            ShellCommand::Draft => {
                let draft = self.session.draft();
                let ratings: Vec<String> =
                    draft.ratings().iter().map(ToString::to_string).collect();
                writeln!(out, "Ratings: [{}]", ratings.join(", "))?;
                writeln!(out, "Songs: [{}]", draft.songs().join(", "))?;
                writeln!(out, "Checked out: {}", draft.checked_out())?;
            }
            ShellCommand::Reset => {
                self.session.reset_draft();
                writeln!(out, "Draft cleared.")?;
            }
            ShellCommand::Export => match self.session.export_json() {
                Ok(json) => writeln!(out, "{json}")?,
                Err(err) => writeln!(out, "{err}")?,
            },
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn write_rows<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let rows = self.session.rows();
        if rows.is_empty() {
            return writeln!(out, "Catalog is empty.");
        }
        for row in rows {
            writeln!(out, "[{}] {row}", row.index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (Shell, String) {
        let config = ShellConfig {
            seed: Some(5),
            ..ShellConfig::default()
        };
        let mut shell = Shell::new(&config, false);
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out).unwrap();
        (shell, String::from_utf8(out).unwrap())
    }

    #[test]
    fn staged_state_flows_into_added_item() {
        let (shell, out) = run_script(
            "rate 4 9 5\n\
             checked-out yes\n\
             add book --title Dune --author 'Frank Herbert' --pages 412\n",
        );
        assert!(out.contains("Rating 4 added."));
        assert!(out.contains("Rating should be between 1 and 5."));
        assert!(out.contains("Rating 5 added."));
        assert!(
            out.contains("[0] Dune (Book) - Checked Out: true - Average Rating: 4")
        );
        assert!(shell.session().draft().is_empty());
    }

    #[test]
    fn rejected_add_reports_and_keeps_catalog() {
        let (shell, out) =
            run_script("add vinyl --title Kind\nadd book --title Dune\n");
        assert!(out.contains("must be an instance of Media"));
        assert!(out.contains("Book requires a value for 'author'"));
        assert!(shell.session().catalog().is_empty());
    }

    #[test]
    fn quit_stops_processing() {
        let (shell, out) = run_script(
            "add cd --title Blue --artist Joni\nquit\nremove 0\n",
        );
        assert_eq!(shell.session().catalog().len(), 1);
        assert!(!out.contains("Removed"));
    }

    #[test]
    fn remove_out_of_range_is_reported_without_change() {
        let (shell, out) =
            run_script("add cd --title Blue --artist Joni\nremove 4\ntitles\n");
        assert!(out.contains("No item at position 4"));
        assert!(out.ends_with("Blue\n"));
        assert_eq!(shell.session().catalog().len(), 1);
    }

    #[test]
    fn reset_clears_everything_staged() {
        let (shell, out) = run_script(
            "rate 3\nsong x\nchecked-out yes\ndraft\nreset\ndraft\n",
        );
        assert!(out.contains("Ratings: [3]\nSongs: [x]\nChecked out: true\n"));
        assert!(out.contains("Draft cleared.\n"));
        assert!(
            out.ends_with("Ratings: []\nSongs: []\nChecked out: false\n")
        );
        assert!(shell.session().draft().is_empty());
    }

    #[test]
    fn rate_item_keeps_ratings_before_the_invalid_one() {
        let (shell, out) = run_script(
            "add cd --title Blue --artist Joni\nrate-item 0 2 9 4\nshuffle 0\n",
        );
        assert!(out.contains("Rating should be between 1 and 5.\n[0] Blue (CD)"));
        assert!(
            out.contains("[0] Blue (CD) - Checked Out: false - Average Rating: 2")
        );
        assert!(out.ends_with("This CD has no songs.\n"));
        let item = shell.session().catalog().get(0).unwrap();
        assert_eq!(item.ratings().len(), 1);
        assert_eq!(item.average_rating(), 2);
    }

    #[test]
    fn rate_item_on_missing_position_does_not_render_rows() {
        let (shell, out) =
            run_script("add cd --title Blue --artist Joni\nrate-item 3 5\n");
        assert!(out.ends_with("Average Rating: 0\nNo item at position 3\n"));
        assert!(shell.session().catalog().get(0).unwrap().ratings().is_empty());
    }

    #[test]
    fn export_prints_json_array() {
        let (_, out) = run_script(
            "rate 5\nsong River\nadd cd --title Blue --artist Joni\nexport\n",
        );
        let start = out.find("[\n").unwrap();
        let json: serde_json::Value = serde_json::from_str(&out[start..]).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["kind"], "cd");
        assert_eq!(items[0]["songs"], serde_json::json!(["River"]));
        assert_eq!(items[0]["ratings"], serde_json::json!([5]));
    }

    #[test]
    fn prompt_is_written_when_enabled() {
        let config = ShellConfig {
            prompt: "lib> ".to_string(),
            show_prompt: Some(true),
            seed: Some(1),
        };
        let mut shell = Shell::new(&config, false);
        let mut out = Vec::new();
        shell.run("titles\n".as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "lib> \nlib> ");
    }
}
