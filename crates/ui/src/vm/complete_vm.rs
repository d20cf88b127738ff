use services::SessionService;

use crate::vm::time_fmt::format_elapsed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompleteVm {
    pub total_xp: u64,
    pub round_xp: u32,
    pub questions: u32,
    pub wrong_attempts: u32,
    pub bookwork_passed: u32,
    pub bookwork_failed: u32,
    pub elapsed_label: String,
    /// No wrong answers and no failed bookwork check.
    pub clean: bool,
    pub unlocked_title: Option<&'static str>,
}

/// Completion screen data. Round fields stay zero if no summary was recorded.
#[must_use]
pub fn map_complete(service: &SessionService) -> CompleteVm {
    let summary = service.last_summary();
    CompleteVm {
        total_xp: service.xp(),
        round_xp: summary.map_or(0, |summary| summary.xp_earned()),
        questions: summary.map_or(0, |summary| summary.questions()),
        wrong_attempts: summary.map_or(0, |summary| summary.wrong_attempts()),
        bookwork_passed: summary.map_or(0, |summary| summary.bookwork_passed()),
        bookwork_failed: summary.map_or(0, |summary| summary.bookwork_failed()),
        elapsed_label: summary
            .map(|summary| format_elapsed(summary.duration()))
            .unwrap_or_default(),
        clean: summary.is_some_and(|summary| summary.is_clean()),
        unlocked_title: service.newly_unlocked().map(|topic| topic.title()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helix_core::model::{RoundSettings, TopicId};
    use helix_core::time::fixed_clock;
    use services::Dice;

    #[test]
    fn maps_finished_round() {
        let settings = RoundSettings::new(1, 100, 0.0, 5).unwrap();
        let mut service = SessionService::new(settings, fixed_clock(), Dice::seeded(3));
        service
            .open_topic(&TopicId::from_static("expand_brackets"))
            .unwrap();
        service.start_practice().unwrap();
        service.submit_answer("wrong").unwrap();
        service.retry().unwrap();
        let answer = service.round().unwrap().question().answer().to_string();
        service.submit_answer(&answer).unwrap();
        service.continue_after_correct().unwrap();

        let vm = map_complete(&service);

        assert_eq!(vm.total_xp, 100);
        assert_eq!(vm.round_xp, 100);
        assert_eq!(vm.questions, 1);
        assert_eq!(vm.wrong_attempts, 1);
        assert_eq!(vm.elapsed_label, "0:00");
        assert!(!vm.clean);
        assert_eq!(vm.unlocked_title, Some("Factorise Linear"));
    }

    #[test]
    fn first_time_round_is_clean() {
        let settings = RoundSettings::new(1, 100, 0.0, 5).unwrap();
        let mut service = SessionService::new(settings, fixed_clock(), Dice::seeded(4));
        service
            .open_topic(&TopicId::from_static("expand_brackets"))
            .unwrap();
        service.start_practice().unwrap();
        let answer = service.round().unwrap().question().answer().to_string();
        service.submit_answer(&answer).unwrap();
        service.continue_after_correct().unwrap();

        assert!(map_complete(&service).clean);
    }

    #[test]
    fn no_summary_is_not_clean() {
        let service =
            SessionService::new(RoundSettings::default(), fixed_clock(), Dice::seeded(5));
        let vm = map_complete(&service);
        assert!(!vm.clean);
        assert_eq!(vm.questions, 0);
    }
}
