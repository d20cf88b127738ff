use services::{BookworkCheck, Feedback, SessionService};

/// Bookwork overlay state, ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookworkVm {
    Hidden,
    Input {
        target: u32,
    },
    Failed {
        target: u32,
        expected: String,
        submitted: String,
    },
}

impl From<&BookworkCheck> for BookworkVm {
    fn from(check: &BookworkCheck) -> Self {
        match check {
            BookworkCheck::Inactive => Self::Hidden,
            BookworkCheck::AwaitingInput { target } => Self::Input {
                target: target.value(),
            },
            BookworkCheck::Failed {
                target,
                expected,
                submitted,
            } => Self::Failed {
                target: target.value(),
                expected: expected.clone(),
                submitted: submitted.clone(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeVm {
    pub topic_id: String,
    pub counter_label: String,
    /// One entry per question in the round; true once reached.
    pub pips: Vec<bool>,
    pub xp: u64,
    pub prompt: String,
    pub feedback: Feedback,
    /// Worked hint, only after a wrong answer.
    pub steps: Option<String>,
    pub bookwork: BookworkVm,
}

impl PracticeVm {
    /// The answer field stays editable after a wrong answer so it can be fixed and resubmitted.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.feedback != Feedback::Correct && self.bookwork == BookworkVm::Hidden
    }
}

#[must_use]
pub fn map_practice(service: &SessionService) -> Option<PracticeVm> {
    let round = service.round()?;
    let progress = round.progress();
    let reached = progress.reached();
    let feedback = round.feedback();

    Some(PracticeVm {
        topic_id: round.topic().as_str().to_string(),
        counter_label: format!("Question {} / {}", progress.current, progress.total),
        pips: (0..progress.total).map(|idx| idx < reached).collect(),
        xp: service.xp(),
        prompt: round.question().prompt().to_string(),
        feedback,
        steps: (feedback == Feedback::Wrong).then(|| round.question().steps().to_string()),
        bookwork: BookworkVm::from(round.bookwork()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use helix_core::model::{RoundSettings, TopicId};
    use helix_core::time::fixed_clock;
    use services::Dice;

    fn practicing(chance: f64) -> SessionService {
        let settings = RoundSettings::new(3, 100, chance, 5).unwrap();
        let mut service = SessionService::new(settings, fixed_clock(), Dice::seeded(5));
        service
            .open_topic(&TopicId::from_static("expand_brackets"))
            .unwrap();
        service.start_practice().unwrap();
        service
    }

    #[test]
    fn no_round_means_no_vm() {
        let settings = RoundSettings::default();
        let service = SessionService::new(settings, fixed_clock(), Dice::seeded(1));
        assert!(map_practice(&service).is_none());
    }

    #[test]
    fn fresh_round_fills_first_pip() {
        let service = practicing(0.0);
        let vm = map_practice(&service).unwrap();

        assert_eq!(vm.counter_label, "Question 1 / 3");
        assert_eq!(vm.pips, vec![true, false, false]);
        assert_eq!(vm.topic_id, "expand_brackets");
        assert!(vm.prompt.starts_with("Expand:"));
        assert!(vm.accepts_input());
        assert!(vm.steps.is_none());
    }

    #[test]
    fn wrong_answer_exposes_steps() {
        let mut service = practicing(0.0);
        service.submit_answer("nonsense").unwrap();
        let vm = map_practice(&service).unwrap();

        assert_eq!(vm.feedback, Feedback::Wrong);
        let steps = vm.steps.as_deref().unwrap();
        assert!(steps.starts_with("Multiply "), "{steps}");
        assert!(vm.accepts_input());
    }

    #[test]
    fn wrong_answer_can_be_corrected_without_retry() {
        let mut service = practicing(0.0);
        service.submit_answer("nonsense").unwrap();
        let answer = service.round().unwrap().question().answer().to_string();
        service.submit_answer(&answer).unwrap();

        let vm = map_practice(&service).unwrap();
        assert_eq!(vm.feedback, Feedback::Correct);
        assert!(!vm.accepts_input());
        assert!(vm.steps.is_none());
    }

    #[test]
    fn bookwork_input_maps_target() {
        let mut service = practicing(1.0);
        for _ in 0..2 {
            let answer = service.round().unwrap().question().answer().to_string();
            service.submit_answer(&answer).unwrap();
            service.continue_after_correct().unwrap();
        }

        let vm = map_practice(&service).unwrap();
        assert_eq!(vm.bookwork, BookworkVm::Input { target: 1 });
        assert_eq!(vm.xp, 200);
    }
}
