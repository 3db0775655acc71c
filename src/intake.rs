use crate::keywords::{suggest_keywords, IntakeRecord};

const WELCOME: &str = "Welcome to the Marketing Bot! Let's get started with some questions.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStep {
    Industry,
    Objective,
    Website,
    SocialMedia,
    Ppc,
    Audience,
    Location,
}

impl IntakeStep {
    pub fn question(self) -> &'static str {
        match self {
            IntakeStep::Industry => "What industry is your business in?",
            IntakeStep::Objective => "What's your business objective?",
            IntakeStep::Website => "Do you have a website? If yes, please provide the URL.",
            IntakeStep::SocialMedia => {
                "Do you have any social media platforms? If yes, provide the URL(s)."
            }
            IntakeStep::Ppc => "Do you use PPC campaigns? If yes, provide details.",
            IntakeStep::Audience => {
                "Who are you trying to reach? (e.g., young adults, professionals)"
            }
            IntakeStep::Location => "What location would you like to target?",
        }
    }

    fn next(self) -> Option<IntakeStep> {
        match self {
            IntakeStep::Industry => Some(IntakeStep::Objective),
            IntakeStep::Objective => Some(IntakeStep::Website),
            IntakeStep::Website => Some(IntakeStep::SocialMedia),
            IntakeStep::SocialMedia => Some(IntakeStep::Ppc),
            IntakeStep::Ppc => Some(IntakeStep::Audience),
            IntakeStep::Audience => Some(IntakeStep::Location),
            IntakeStep::Location => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogReply {
    Ask(&'static str),
    Done(Vec<String>),
}

impl DialogReply {
    pub fn render(&self) -> String {
        match self {
            DialogReply::Ask(question) => question.to_string(),
            DialogReply::Done(keywords) => format!(
                "Here are some keywords for your business:\n{}",
                keywords.join(", ")
            ),
        }
    }
}

/// Linear question sequence ending in keyword suggestions.
#[derive(Debug, Clone)]
pub struct IntakeDialog {
    step: IntakeStep,
    record: IntakeRecord,
}

impl IntakeDialog {
    /// Starts a fresh dialog and returns it with its opening message.
    pub fn start() -> (Self, String) {
        let dialog = Self {
            step: IntakeStep::Industry,
            record: IntakeRecord::default(),
        };
        let opening = format!("{}\n{}", WELCOME, IntakeStep::Industry.question());
        (dialog, opening)
    }

    pub fn step(&self) -> IntakeStep {
        self.step
    }

    pub fn record(&self) -> &IntakeRecord {
        &self.record
    }

    /// Stores `text` as the answer to the current question.
    pub fn answer(&mut self, text: &str) -> DialogReply {
        let text = Some(text.to_string());
        match self.step {
            IntakeStep::Industry => self.record.industry = text,
            IntakeStep::Objective => self.record.objective = text,
            IntakeStep::Website => self.record.website = text,
            IntakeStep::SocialMedia => self.record.social_media = text,
            IntakeStep::Ppc => self.record.ppc = text,
            IntakeStep::Audience => self.record.audience = text,
            IntakeStep::Location => self.record.location = text,
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                DialogReply::Ask(next.question())
            }
            None => DialogReply::Done(suggest_keywords(&self.record)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_all_steps_then_suggests() {
        let (mut dialog, opening) = IntakeDialog::start();
        assert!(opening.starts_with(WELCOME));
        assert!(opening.ends_with("What industry is your business in?"));

        let answers = [
            "retail",
            "more sales",
            "https://shop.example",
            "no",
            "yes, google ads",
            "professionals",
            "Berlin",
        ];
        let mut last = None;
        for answer in answers {
            last = Some(dialog.answer(answer));
        }

        let reply = last.unwrap();
        assert_eq!(
            reply,
            DialogReply::Done(vec![
                "Retail marketing".into(),
                "More sales strategy".into(),
                "Professionals engagement".into(),
                "Retail trends".into(),
                "Professionals outreach".into(),
            ])
        );
        assert!(reply.render().starts_with("Here are some keywords for your business:\nRetail marketing, "));
        assert_eq!(dialog.record().location.as_deref(), Some("Berlin"));
        assert_eq!(dialog.record().website.as_deref(), Some("https://shop.example"));
    }

    #[test]
    fn each_answer_moves_one_step() {
        let (mut dialog, _) = IntakeDialog::start();
        assert_eq!(dialog.answer("legal"), DialogReply::Ask(IntakeStep::Objective.question()));
        assert_eq!(dialog.step(), IntakeStep::Objective);
        assert_eq!(dialog.record().industry.as_deref(), Some("legal"));
    }
}
