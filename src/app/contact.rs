use std::sync::Arc;

use leptos::{ev::SubmitEvent, prelude::*};

use super::button::{button_class, Size, Variant};
use super::homepage::SectionHeading;
use super::icons::{GithubIcon, LinkedinIcon, MailIcon, MapPinIcon};
use crate::contact::{CancelHandle, ContactState, FormField, PendingReset, RESET_DELAY};
use crate::portfolio::PORTFOLIO;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-gray-50 dark:bg-gray-700 border border-gray-300 dark:border-gray-600 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 transition-all duration-300 text-gray-900 dark:text-white";
const CARD_CLASS: &str = "flex items-center gap-4 p-4 bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700";
const SOCIAL_CLASS: &str = "flex items-center gap-2 px-4 py-2 bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 hover:border-blue-400 dark:hover:border-blue-600 transition-all duration-300";

#[component]
pub fn Contact() -> impl IntoView {
    let personal = &PORTFOLIO.personal;
    view! {
        <section
            id="contact"
            class="py-20 px-4 bg-gradient-to-b from-gray-50 to-white dark:from-gray-900 dark:to-gray-950"
        >
            <div class="max-w-6xl mx-auto">
                <SectionHeading text="Get In Touch" centered=true />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div class="space-y-8 slide-in-left">
                        <div>
                            <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">
                                "Contact Information"
                            </h3>
                            <p class="text-gray-600 dark:text-gray-400 mb-8">
                                "Have a question or interested in discussing DevOps opportunities? Feel free to reach out!"
                            </p>
                        </div>
                        <div class="space-y-4">
                            <a
                                href=format!("mailto:{}", personal.email)
                                class=format!(
                                    "{CARD_CLASS} hover:border-blue-400 dark:hover:border-blue-600 transition-all duration-300",
                                )
                            >
                                <MailIcon class="w-6 h-6 text-blue-600 flex-shrink-0" />
                                <div>
                                    <p class="text-sm text-gray-600 dark:text-gray-400">"Email"</p>
                                    <p class="font-semibold text-gray-900 dark:text-white">
                                        {personal.email.clone()}
                                    </p>
                                </div>
                            </a>
                            <div class=CARD_CLASS>
                                <MapPinIcon class="w-6 h-6 text-blue-600 flex-shrink-0" />
                                <div>
                                    <p class="text-sm text-gray-600 dark:text-gray-400">"Location"</p>
                                    <p class="font-semibold text-gray-900 dark:text-white">
                                        {personal.location.clone()}
                                    </p>
                                </div>
                            </div>
                            <div class="flex gap-4 pt-4">
                                <a
                                    href=personal.linkedin.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=SOCIAL_CLASS
                                >
                                    <LinkedinIcon class="w-5 h-5 text-blue-600" />
                                    <span>"LinkedIn"</span>
                                </a>
                                <a
                                    href=personal.github.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=SOCIAL_CLASS
                                >
                                    <GithubIcon class="w-5 h-5 text-gray-700 dark:text-gray-300" />
                                    <span>"GitHub"</span>
                                </a>
                            </div>
                        </div>
                    </div>
                    <div class="bg-white dark:bg-gray-800 rounded-xl p-8 border border-gray-200 dark:border-gray-700 slide-in-right">
                        <ContactForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let state = RwSignal::new(ContactState::default());
    let (error, set_error) = signal(None::<String>);

    let pending = Arc::new(PendingReset::<TimeoutHandle>::new());
    on_cleanup({
        let pending = Arc::clone(&pending);
        move || pending.cancel()
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match state.try_update(|s| s.submit()) {
            Some(Ok(payload)) => {
                set_error(None);
                log::info!(
                    "contact form submitted: name={:?} email={:?} message={:?}",
                    payload.name,
                    payload.email,
                    payload.message
                );
                let fired = Arc::clone(&pending);
                let reset = move || {
                    fired.clear();
                    state.update(|s| s.reset());
                };
                match set_timeout_with_handle(reset, RESET_DELAY) {
                    Ok(handle) => pending.replace(handle),
                    Err(e) => {
                        pending.cancel();
                        log::error!("couldn't schedule contact form reset: {e:?}");
                    }
                }
            }
            Some(Err(e)) => set_error(Some(e.to_string())),
            None => {}
        }
    };

    view! {
        <form class="space-y-6" on:submit=on_submit>
            <FormInput state field=FormField::Name label="Name" kind="text" placeholder="Your name" />
            <FormInput
                state
                field=FormField::Email
                label="Email"
                kind="email"
                placeholder="your@email.com"
            />
            <div>
                <label class="block text-sm font-medium text-gray-900 dark:text-white mb-2">
                    "Message"
                </label>
                <textarea
                    name=FormField::Message.as_str()
                    required
                    rows="4"
                    class=format!("{INPUT_CLASS} resize-none")
                    placeholder="Your message..."
                    prop:value=move || state.with(|s| s.form.message.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.form.set(FormField::Message, value));
                    }
                ></textarea>
            </div>
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="p-3 bg-red-100 dark:bg-red-900/30 text-red-700 dark:text-red-400 rounded-lg text-sm font-medium">
                                {e}
                            </div>
                        }
                    })
            }}
            {move || {
                state
                    .with(|s| s.submitted)
                    .then(|| {
                        view! {
                            <div class="p-3 bg-green-100 dark:bg-green-900/30 text-green-700 dark:text-green-400 rounded-lg text-sm font-medium expand-in">
                                "✓ Message sent successfully! I'll get back to you soon."
                            </div>
                        }
                    })
            }}
            <button type="submit" class=button_class(Variant::Primary, Size::Lg, "w-full")>
                "Send Message"
            </button>
        </form>
    }
}

#[component]
fn FormInput(
    state: RwSignal<ContactState>,
    field: FormField,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-900 dark:text-white mb-2">
                {label}
            </label>
            <input
                type=kind
                name=field.as_str()
                required
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || state.with(|s| s.form.get(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.form.set(field, value));
                }
            />
        </div>
    }
}

impl CancelHandle for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}
