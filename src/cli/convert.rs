use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config,
    convert::Converter,
    error::OutcomeKind,
    presenter::{CONVERTING_MESSAGE, FailureStatus, OPEN_LINK_LABEL, Presenter},
    success,
    types::SearchMatch,
    warning,
};

/// Terminal rendering of a conversion: a spinner while converting, then
/// the Deezer link or one failure message.
pub struct TerminalPresenter {
    spinner: Option<ProgressBar>,
    open_in_browser: bool,
}

impl TerminalPresenter {
    pub fn new(open_in_browser: bool) -> Self {
        Self {
            spinner: None,
            open_in_browser,
        }
    }

    fn clear_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

impl Presenter for TerminalPresenter {
    fn converting(&mut self, _input: &str) {
        self.clear_spinner();

        let pb = ProgressBar::new_spinner();
        pb.set_message(CONVERTING_MESSAGE);
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        self.spinner = Some(pb);
    }

    fn success(&mut self, found: &SearchMatch) {
        self.clear_spinner();

        success!("{}: {}", OPEN_LINK_LABEL, found.label());
        // bare link on its own line so it can be piped or copied
        println!("{}", found.link);

        if self.open_in_browser && webbrowser::open(&found.link).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                found.link
            );
        }
    }

    fn failure(&mut self, status: &FailureStatus) {
        self.clear_spinner();
        warning!("{}", status.text());
    }
}

/// Converts one Spotify link and prints the result.
///
/// Returns the outcome so the binary can pick its exit status.
///
/// # Example Usage
///
/// ```bash
/// deezlink convert https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC
/// deezlink convert --open https://open.spotify.com/album/4m2880jivSbbyEGAKfITCa
/// ```
pub async fn convert(link: &str, open_in_browser: bool) -> Result<OutcomeKind, reqwest::Error> {
    let converter = Converter::new(&config::Settings::from_env())?;
    let mut presenter = TerminalPresenter::new(open_in_browser);

    Ok(converter.run(link, &mut presenter).await)
}
