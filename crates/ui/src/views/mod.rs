mod bookwork;
mod complete;
mod explainer;
mod menu;
mod practice;
pub(crate) mod shell;

pub use bookwork::BookworkOverlay;
pub use complete::CompleteView;
pub use explainer::ExplainerView;
pub use menu::MenuView;
pub use practice::PracticeView;
pub use shell::Shell;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
