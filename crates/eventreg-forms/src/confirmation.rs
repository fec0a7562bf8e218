//! Confirmation popup and full-page rendering of a flow.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Div, Li, Ul};

use crate::flow::{RegistrationFlow, Snapshot};
use crate::form::render_registration_form;
use crate::sink::SubmissionSink;

/// Renders the "Submission Complete" popup for a snapshot.
///
/// The Close button posts to `dismiss_action`.
#[must_use]
pub fn render_confirmation(snapshot: &Snapshot, dismiss_action: &str) -> String {
    let lines = snapshot.summary();

    let title = html! {
        h2.class("head text-success") { "Submission Complete" }
    };
    let close = html! {
        form.action(#dismiss_action).method("post") {
            button.type_("submit").class("btn btn-secondary closePopUp") {
                "Close"
            }
        }
    };

    html! { div.class("modal d-block popup") }
        .attr("role", "dialog")
        .attr("style", "background-color: rgba(0,0,0,0.7)")
        .child::<Div, _>(|dialog| {
            dialog
                .class("modal-dialog modal-dialog-centered")
                .child::<Div, _>(|content| {
                    content
                        .class("modal-content text-center p-4")
                        .raw(title.render())
                        .child::<Ul, _>(|ul| {
                            ul.class("list-unstyled popup_list")
                                .children(lines.iter(), |line, li: Element<Li>| {
                                    li.class("data").text(line)
                                })
                        })
                        .raw(close.render())
                })
        })
        .render()
}

/// Renders the form and, while confirming, the popup above it.
#[must_use]
pub fn render_flow<S: SubmissionSink>(
    flow: &RegistrationFlow<S>,
    action: &str,
    dismiss_action: &str,
) -> String {
    let mut page = render_registration_form(flow.values(), flow.errors(), action);
    if let Some(snapshot) = flow.snapshot() {
        page.push_str(&render_confirmation(snapshot, dismiss_action));
    }
    page
}
