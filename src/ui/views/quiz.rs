use crate::OsceApp;
use crate::quiz::AnswerFeedback;
use crate::ui::layout::{GREEN_FILL, ROSE_FILL, tinted_box};
use egui::{Button, RichText, Ui};

pub fn ui_quiz(app: &mut OsceApp, ui: &mut Ui) {
    if let Some(result) = app.quiz.result() {
        if let Some(feedback) = app.quiz.last_feedback().cloned() {
            feedback_box(app, ui, &feedback);
            ui.add_space(8.0);
        }
        tinted_box(ui, if result.passed() { GREEN_FILL } else { ROSE_FILL }, |ui| {
            ui.label(RichText::new(result.headline()).strong());
            ui.label(result.verdict());
        });
        if !result.passed() {
            ui.add_space(6.0);
            if ui.button("⟲ Try again").clicked() {
                app.retry_quiz();
            }
        }
        return;
    }

    let (index, question) = match (app.quiz.current_index(), app.quiz.current_question()) {
        (Some(i), Some(q)) => (i, q.clone()),
        _ => return,
    };

    ui.label(RichText::new(format!("{}. {}", index + 1, question.prompt)).strong());
    ui.add_space(6.0);

    for (i, option) in question.options.iter().enumerate() {
        if ui.radio(app.quiz.picked() == Some(i), option.as_str()).clicked() {
            app.pick_option(i);
        }
    }

    ui.add_space(6.0);
    let label = if app.quiz.is_last_question() { "Finish" } else { "Next" };
    if ui.add(Button::new(label)).clicked() {
        app.submit_answer();
    }

    // Rationale for the answer just submitted stays visible under the next question.
    if let Some(feedback) = app.quiz.last_feedback().cloned() {
        ui.add_space(8.0);
        feedback_box(app, ui, &feedback);
    }
}

fn feedback_box(app: &OsceApp, ui: &mut Ui, feedback: &AnswerFeedback) {
    let fill = if feedback.is_correct() { GREEN_FILL } else { ROSE_FILL };
    let correct_option = app
        .quiz
        .question(feedback.question_index)
        .and_then(|q| q.options.get(feedback.correct_index))
        .cloned()
        .unwrap_or_default();

    tinted_box(ui, fill, |ui| {
        ui.label(RichText::new(feedback.verdict_label()).strong());
        if !feedback.is_correct() {
            ui.label(format!("Answer: {correct_option}"));
        }
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Rationale:").strong());
            ui.label(feedback.rationale.as_str());
        });
    });
}
