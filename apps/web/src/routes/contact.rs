use crate::app_lib::latency;
use crate::components::{Alert, AlertKind, AppShell, Button, TextField};
use crate::features::{
    contact::{self, ContactMessage, SUCCESS_NOTICE},
    forms::{Field, Form, FormKind},
};
use crate::state::ServicesHandle;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

const CONTACT_CARDS: [(&str, &str, &str, &str); 4] = [
    (
        "call",
        "24/7 Phone Support",
        "(555) 123-4567",
        "Call us anytime for emergency repairs",
    ),
    (
        "mail",
        "Email Us",
        "info@windowfixpro.com",
        "We respond within 24 hours",
    ),
    (
        "location_on",
        "Visit Our Office",
        "123 Main Street, City, State 12345",
        "Open Monday - Friday, 8AM - 6PM",
    ),
    (
        "schedule",
        "Business Hours",
        "Mon-Fri: 8AM-6PM, Sat: 9AM-4PM",
        "Emergency services available 24/7",
    ),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let services = expect_context::<ServicesHandle>();
    let form = RwSignal::new(Form::new(FormKind::Contact));
    let (error, set_error) = signal::<Option<String>>(None);
    // Bumped per success so an older timer cannot hide a newer notice.
    let notice = RwSignal::new(None::<u32>);
    let dismiss_ms = services.with_value(|services| services.config.notice_dismiss_ms);

    let send_action = Action::new_local(move |message: &ContactMessage| {
        let message = message.clone();
        let services = services.get_value();
        async move { contact::send(&message, services.contact.as_ref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(()) => {
                    form.update(Form::reset);
                    let generation = notice.get_untracked().map_or(1, |current| current + 1);
                    notice.set(Some(generation));
                    spawn_local(async move {
                        latency::pause(dismiss_ms).await;
                        if notice.try_get_untracked().flatten() == Some(generation) {
                            notice.try_set(None);
                        }
                    });
                }
                Err(err) => set_error.set(err.banner()),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if send_action.pending().get_untracked() {
            return;
        }
        set_error.set(None);
        if let Some(Ok(message)) = form.try_update(contact::prepare) {
            send_action.dispatch(message);
        }
    };

    view! {
        <AppShell>
            <div class="text-center mb-12">
                <h1 class="text-4xl md:text-5xl font-bold text-[#f4f4f4] mb-6">
                    "Get In " <span class="text-[#b8a47e]">"Touch"</span>
                </h1>
                <p class="text-xl text-[#a1a1a1] max-w-2xl mx-auto">
                    "Ready to transform your windows? Contact us today for a free consultation and quote."
                </p>
            </div>
            <div class="grid lg:grid-cols-2 gap-12">
                <div class="rounded-xl border border-[#2a2a2a] bg-[#1a1a1a] p-8">
                    <h2 class="text-2xl font-bold text-[#f4f4f4] mb-6">"Send us a Message"</h2>
                    <Show when=move || notice.get().is_some()>
                        <div class="mb-6">
                            <Alert kind=AlertKind::Success message=SUCCESS_NOTICE.to_string() />
                        </div>
                    </Show>
                    <form class="space-y-6" on:submit=on_submit novalidate>
                        <TextField
                            form=form
                            field=Field::Name
                            label="Full Name"
                            placeholder="Enter your full name"
                            autocomplete="name"
                        />
                        <TextField
                            form=form
                            field=Field::Phone
                            label="Phone Number"
                            input_type="tel"
                            placeholder="Enter your phone number"
                            autocomplete="tel"
                        />
                        <TextField
                            form=form
                            field=Field::Email
                            label="Email Address"
                            input_type="email"
                            placeholder="Enter your email address"
                            autocomplete="email"
                        />
                        <TextField
                            form=form
                            field=Field::Message
                            label="Message"
                            placeholder="Tell us about your window service needs..."
                            multiline=true
                        />
                        {move || {
                            error
                                .get()
                                .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                        }}
                        <Button
                            button_type="submit"
                            busy=send_action.pending()
                            busy_label="Sending Message..."
                        >
                            "Send Message"
                        </Button>
                    </form>
                </div>
                <div class="grid sm:grid-cols-2 gap-6 content-start">
                    {CONTACT_CARDS
                        .into_iter()
                        .map(|(icon, title, content, description)| {
                            view! {
                                <div class="rounded-xl border border-[#2a2a2a] bg-[#1a1a1a] p-6">
                                    <span class="material-symbols-outlined text-3xl text-[#b8a47e] mb-3">
                                        {icon}
                                    </span>
                                    <h3 class="text-lg font-semibold text-[#f4f4f4] mb-1">{title}</h3>
                                    <p class="text-[#b8a47e] font-medium">{content}</p>
                                    <p class="text-sm text-[#a1a1a1] mt-1">{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </AppShell>
    }
}
