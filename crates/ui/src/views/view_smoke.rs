use helix_core::model::TopicId;

use super::test_harness::{
    answer_and_continue, practicing, setup_shell_harness, setup_view_harness, test_context,
};

#[tokio::test(flavor = "current_thread")]
async fn shell_starts_on_menu_with_first_topic_open() {
    let mut harness = setup_shell_harness(test_context(5, 0.0));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("HELIX"), "missing title in {html}");
    assert!(html.contains("Expanding Brackets"), "missing first tile in {html}");
    assert!(html.contains("Mean Average"), "missing last tile in {html}");
    assert_eq!(html.matches("topic-tile--locked").count(), 14, "{html}");
    assert!(html.contains("XP: 0"), "missing xp in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn explainer_smoke_renders_topic_primer() {
    let ctx = test_context(5, 0.0);
    let mut session = ctx.new_session();
    session
        .open_topic(&TopicId::from_static("expand_brackets"))
        .unwrap();

    let mut harness = setup_view_harness(ctx, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("The Claw"), "missing explainer title in {html}");
    assert!(html.contains("Start Round"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_smoke_renders_hud_and_question() {
    let ctx = test_context(5, 0.0);
    let session = practicing(&ctx, "speed_dist_time");
    let prompt = session.round().unwrap().question().prompt().to_string();

    let mut harness = setup_view_harness(ctx, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("EXIT"), "missing exit in {html}");
    assert!(html.contains("Question 1 / 5"), "missing counter in {html}");
    assert!(html.contains(&prompt), "missing prompt in {html}");
    assert!(html.contains("Check"), "missing check button in {html}");
    assert_eq!(html.matches("pip--reached").count(), 1, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_smoke_renders_wrong_answer_panel() {
    let ctx = test_context(5, 0.0);
    let mut session = practicing(&ctx, "speed_dist_time");
    session.submit_answer("not even close").unwrap();

    let mut harness = setup_view_harness(ctx, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Keep trying!"), "missing wrong panel in {html}");
    assert!(html.contains("Distance = Speed × Time"), "missing steps in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn bookwork_overlay_smoke_renders_input_state() {
    let ctx = test_context(5, 1.0);
    let mut session = practicing(&ctx, "speed_dist_time");
    answer_and_continue(&mut session);
    answer_and_continue(&mut session);

    let mut harness = setup_view_harness(ctx, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Bookwork Check"), "missing overlay in {html}");
    assert!(html.contains("Question 1"), "missing target in {html}");
    assert!(html.contains("Verify"), "missing verify in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn bookwork_overlay_smoke_renders_failure() {
    let ctx = test_context(5, 1.0);
    let mut session = practicing(&ctx, "speed_dist_time");
    answer_and_continue(&mut session);
    answer_and_continue(&mut session);
    session.submit_bookwork("12345678").unwrap();

    let mut harness = setup_view_harness(ctx, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Check Failed"), "missing failure in {html}");
    assert!(html.contains("You Wrote:"), "missing comparison in {html}");
    assert!(html.contains("12345678"), "missing submitted text in {html}");
    assert!(html.contains("Restart Question"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn complete_smoke_renders_totals() {
    let ctx = test_context(2, 0.0);
    let mut session = ctx.new_session();
    session
        .open_topic(&TopicId::from_static("expand_brackets"))
        .unwrap();
    session.start_practice().unwrap();
    answer_and_continue(&mut session);
    answer_and_continue(&mut session);

    let mut harness = setup_view_harness(ctx, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Round Complete!"), "missing title in {html}");
    assert!(html.contains("Total XP"), "missing total in {html}");
    assert!(html.contains("200"), "missing xp value in {html}");
    assert!(html.contains("Unlocked: Factorise Linear"), "missing unlock in {html}");
    assert!(html.contains("Clean round"), "missing clean badge in {html}");
    assert!(html.contains("Replay"), "missing replay in {html}");
}
