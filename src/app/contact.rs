use std::time::Duration;

use leptos::{
    either::{Either, EitherOf4},
    ev::{self, SubmitEvent},
    prelude::*,
    server_fn::codec::Json,
    task::spawn_local,
};

use super::{
    effects::Reveal,
    ui::{IconView, SectionHeader},
};
use crate::{
    contact::{ContactError, ContactForm, ContactMessage, Field, SubmissionPhase, SUCCESS_DISPLAY},
    content::{CONTACT_DETAILS, SOCIAL_LINKS},
    motion::stagger,
    page::Section,
};

/// Accepts a contact message. Delivery is simulated: the message is
/// validated, held for [`SUBMIT_DELAY`](crate::contact::SUBMIT_DELAY) and logged.
#[server(input = Json)]
pub async fn send_message(message: ContactMessage) -> Result<(), ServerFnError> {
    if let Err(e) = message.validate() {
        tracing::warn!(email = %message.email, "rejected contact message: {e}");
        return Err(ServerFnError::new(e));
    }
    tokio::time::sleep(crate::contact::SUBMIT_DELAY).await;
    tracing::info!(
        name = %message.name,
        email = %message.email,
        subject = %message.subject,
        length = message.message.len(),
        "contact message received"
    );
    Ok(())
}

fn failure_cause(err: ServerFnError) -> ContactError {
    match err {
        ServerFnError::ServerError(msg) => ContactError::Rejected(msg),
        other => ContactError::Delivery(other.to_string()),
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="relative py-16 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-black via-navy-dark/30 to-black" />
            <div class="absolute top-1/4 left-1/4 w-64 h-64 rounded-full bg-gradient-to-br from-amber/10 to-transparent blur-3xl animate-float-slow" />

            <div class="relative z-10 max-w-7xl mx-auto px-6 lg:px-8">
                <SectionHeader
                    section=Section::Contact
                    title="Let's"
                    highlight="Connect"
                    blurb="Have a project in mind or just want to chat? Feel free to reach out. I'm always excited to discuss new opportunities and ideas."
                />

                <div class="grid lg:grid-cols-5 gap-12 lg:gap-16">
                    <Reveal
                        from="-translate-x-12"
                        delay=Duration::from_millis(200)
                        class="lg:col-span-2 space-y-8"
                    >
                        <ContactDetails />
                    </Reveal>
                    <Reveal
                        from="translate-x-12"
                        delay=Duration::from_millis(400)
                        class="lg:col-span-3"
                    >
                        <ContactFormView />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div class="space-y-4">
            {CONTACT_DETAILS
                .iter()
                .enumerate()
                .map(|(i, info)| {
                    let delay = stagger(Duration::from_millis(300), Duration::from_millis(100), i);
                    view! {
                        <Reveal delay>
                            <div class="group flex items-center gap-4 p-5 rounded-2xl bg-navy/20 border border-accent-cream/5 hover:border-amber/20 hover:translate-x-2 transition-all duration-300">
                                <div class="p-3 rounded-xl bg-amber/10 text-amber group-hover:bg-amber group-hover:text-black transition-all duration-300">
                                    <IconView icon=info.icon />
                                </div>
                                <div>
                                    <p class="font-mono text-xs text-accent-cream/40">{info.label}</p>
                                    <p class="font-outfit text-accent-cream">{info.value}</p>
                                </div>
                            </div>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>

        <div class="pt-8 border-t border-accent-cream/5">
            <p class="font-mono text-sm text-accent-cream/40 mb-6">"Find me on"</p>
            <div class="flex flex-wrap gap-4">
                {SOCIAL_LINKS
                    .iter()
                    .map(|social| {
                        view! {
                            <a
                                href=social.href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=social.label
                                class=format!(
                                    "group relative p-4 rounded-2xl border border-accent-cream/10 transition-all duration-300 hover:scale-110 hover:-translate-y-1 active:scale-95 {}",
                                    social.hover_bg,
                                )
                            >
                                <IconView
                                    icon=social.kind.icon()
                                    class="text-2xl text-accent-cream/60 group-hover:text-accent-cream transition-colors"
                                />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>

        <div class="pt-8">
            <div class="relative p-6 rounded-2xl bg-gradient-to-br from-amber/5 to-transparent border border-amber/10">
                <span class="block text-amber mb-3">"✦"</span>
                <p class="font-outfit text-accent-cream/60 italic leading-relaxed">
                    "\"Great things happen when we collaborate. Let's build something amazing together.\""
                </p>
            </div>
        </div>
    }
}

/// The contact form. Owns the only [`ContactForm`] on the page.
#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let busy = move || form.with(|f| f.phase().is_busy());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(message) = form.try_update(ContactForm::submit).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = send_message(message).await.map_err(failure_cause);
            if let Err(e) = &result {
                log::warn!("contact form submission failed: {e}");
            }
            let sent = result.is_ok();
            form.update(|f| f.finish_submit(result));
            if sent {
                set_timeout(move || form.update(ContactForm::finish_display), SUCCESS_DISPLAY);
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="grid md:grid-cols-2 gap-6">
                <FormField field=Field::Name form />
                <FormField field=Field::Email form />
            </div>
            <FormField field=Field::Subject form />
            <FormField field=Field::Message form />

            <button
                type="submit"
                disabled=busy
                class=move || {
                    let state = match form.with(|f| f.phase().clone()) {
                        SubmissionPhase::Submitted => "bg-green-500 text-white",
                        SubmissionPhase::Failed(_) => "bg-gradient-to-r from-orange to-red-500 text-black hover:scale-[1.02] active:scale-[0.98]",
                        SubmissionPhase::Submitting => "bg-gradient-to-r from-amber to-orange text-black cursor-wait",
                        SubmissionPhase::Idle => "bg-gradient-to-r from-amber to-orange text-black hover:scale-[1.02] active:scale-[0.98]",
                    };
                    format!(
                        "relative w-full py-5 rounded-2xl font-outfit font-semibold text-lg overflow-hidden transition-all duration-500 {state}",
                    )
                }
            >
                {move || match form.with(|f| f.phase().clone()) {
                    SubmissionPhase::Idle => {
                        EitherOf4::A(
                            view! {
                                <span class="flex items-center justify-center gap-2 animate-fade-in">
                                    "Send Message"
                                    <span>"↗"</span>
                                </span>
                                <span class="absolute inset-0 pointer-events-none animate-shine">
                                    <span class="block w-1/2 h-full bg-gradient-to-r from-transparent via-white/30 to-transparent" />
                                </span>
                            },
                        )
                    }
                    SubmissionPhase::Submitting => {
                        EitherOf4::B(
                            view! {
                                <span class="flex items-center justify-center gap-2 animate-fade-in">
                                    <span class="w-5 h-5 border-2 border-black/30 border-t-black rounded-full animate-spin" />
                                    "Sending..."
                                </span>
                            },
                        )
                    }
                    SubmissionPhase::Submitted => {
                        EitherOf4::C(
                            view! {
                                <span class="flex items-center justify-center gap-2 animate-slide-up">
                                    "✓ Message Sent!"
                                </span>
                            },
                        )
                    }
                    SubmissionPhase::Failed(_) => {
                        EitherOf4::D(
                            view! {
                                <span class="flex items-center justify-center gap-2 animate-fade-in">
                                    "Try Again"
                                </span>
                            },
                        )
                    }
                }}
            </button>

            {move || {
                form.with(|f| match f.phase() {
                    SubmissionPhase::Failed(e) => {
                        Either::Left(
                            view! {
                                <p role="alert" class="font-outfit text-sm text-red-400 text-center">
                                    {e.to_string()}
                                </p>
                            },
                        )
                    }
                    _ => Either::Right(()),
                })
            }}
        </form>
    }
}

/// Input with a floating label that lifts while the field is focused or filled.
#[component]
fn FormField(field: Field, form: RwSignal<ContactForm>) -> impl IntoView {
    let active = move || form.with(|f| f.is_active(field));
    let focused = move || form.with(|f| f.focused() == Some(field));
    let value = move || form.with(|f| f.value(field).to_owned());

    let control_class = move || {
        let state = if active() {
            "border-amber/50 shadow-glow-amber"
        } else {
            "border-accent-cream/10 hover:border-accent-cream/20"
        };
        format!(
            "peer w-full px-5 py-4 rounded-2xl bg-navy/30 border-2 transition-all duration-300 font-outfit text-accent-cream placeholder-transparent focus:outline-none resize-none {state}",
        )
    };
    let label_class = move || {
        let state = if active() {
            "-top-2.5 text-xs text-amber bg-black px-2"
        } else {
            "top-4 text-accent-cream/50"
        };
        format!("absolute left-5 transition-all duration-300 pointer-events-none font-outfit {state}")
    };

    let on_input = move |ev: ev::Event| {
        form.update(|f| f.update_field(field, event_target_value(&ev)))
    };
    let on_focus = move |_: ev::FocusEvent| form.update(|f| f.set_focus(Some(field)));
    let on_blur = move |_: ev::FocusEvent| form.update(|f| f.blur(field));

    let control = if field == Field::Message {
        Either::Left(view! {
            <textarea
                id=field.id()
                name=field.id()
                rows="5"
                required=true
                placeholder=field.label()
                class=control_class
                prop:value=value
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
            />
        })
    } else {
        Either::Right(view! {
            <input
                type=field.input_type()
                id=field.id()
                name=field.id()
                required=true
                placeholder=field.label()
                class=control_class
                prop:value=value
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
            />
        })
    };

    view! {
        <div class="relative">
            {control}
            <label for=field.id() class=label_class>
                {field.label()}
            </label>
            <Show when=focused>
                <div class="absolute inset-0 rounded-2xl bg-amber/5 -z-10 animate-scale-in" />
            </Show>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;

    use super::*;
    use crate::contact::SUBMIT_DELAY;

    fn jane() -> ContactMessage {
        ContactMessage {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Hello".into(),
            message: "Nice site".into(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_message_completes_after_delay() {
        let start = Instant::now();
        send_message(jane()).await.unwrap();
        assert!(start.elapsed() >= SUBMIT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_message_rejects_blank_field_immediately() {
        let mut message = jane();
        message.subject = "  ".into();
        let start = Instant::now();
        let err = send_message(message).await.unwrap_err();
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(
            failure_cause(err),
            ContactError::Rejected("Subject is required".into())
        );
    }

    #[test]
    fn test_failure_cause() {
        assert_eq!(
            failure_cause(ServerFnError::ServerError("no thanks".into())),
            ContactError::Rejected("no thanks".into())
        );
        assert!(matches!(
            failure_cause(ServerFnError::Request("offline".into())),
            ContactError::Delivery(msg) if msg.contains("offline")
        ));
    }
}
