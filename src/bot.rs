use crate::faq::FaqResponder;
use crate::intake::{DialogReply, IntakeDialog};
use crate::trends::TrendsReporter;

const TRENDS_USAGE: &str = "Please specify an industry to fetch trends. Example: /trends Retail";
const FAQ_USAGE: &str = "Please ask a question. Example: /faq How do I improve my ad performance?";
const IDLE_HINT: &str = "Send /start to get keyword suggestions, or try /trends or /faq.";
const HELP: &str = "Commands:\n\
    /start - answer a few questions and get keyword suggestions\n\
    /trends <industry> - CPC and CTC benchmarks for an industry\n\
    /faq <question> - ask a marketing question\n\
    /help - show this message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    /// Empty when no industry was given
    Trends(String),
    Faq(String),
    Unknown(String),
    Text(String),
}

impl Command {
    /// Arguments after a command are re-joined with single spaces, so
    /// `/trends  Real   Estate` asks about "Real Estate".
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        if !line.starts_with('/') {
            return Command::Text(line.to_string());
        }

        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let args = parts.collect::<Vec<_>>().join(" ");

        match name {
            "/start" => Command::Start,
            "/help" => Command::Help,
            "/trends" => Command::Trends(args),
            "/faq" => Command::Faq(args),
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// One user's conversation: routes commands and keeps the intake dialog
/// between messages.
pub struct BotSession {
    reporter: TrendsReporter,
    faq: FaqResponder,
    dialog: Option<IntakeDialog>,
}

impl BotSession {
    pub fn new(reporter: TrendsReporter, faq: FaqResponder) -> Self {
        Self {
            reporter,
            faq,
            dialog: None,
        }
    }

    pub fn in_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    /// Reply to one inbound message. Blank input gets no reply.
    pub async fn handle(&mut self, line: &str) -> Option<String> {
        let reply = match Command::parse(line) {
            Command::Text(text) if text.is_empty() => return None,
            Command::Start => {
                let (dialog, opening) = IntakeDialog::start();
                self.dialog = Some(dialog);
                opening
            }
            Command::Help => HELP.to_string(),
            Command::Trends(industry) if industry.is_empty() => TRENDS_USAGE.to_string(),
            Command::Trends(industry) => {
                log::info!("Trends query: {}", industry);
                self.reporter.report(&industry).to_string()
            }
            Command::Faq(question) if question.is_empty() => FAQ_USAGE.to_string(),
            Command::Faq(question) => {
                log::info!("FAQ query: {}", question);
                self.faq.answer(&question).await
            }
            Command::Unknown(name) => format!("Unknown command {}.\n{}", name, HELP),
            Command::Text(text) => match self.dialog.as_mut() {
                Some(dialog) => {
                    let reply = dialog.answer(&text);
                    if matches!(reply, DialogReply::Done(_)) {
                        self.dialog = None;
                    }
                    reply.render()
                }
                None => IDLE_HINT.to_string(),
            },
        };
        Some(reply)
    }
}
